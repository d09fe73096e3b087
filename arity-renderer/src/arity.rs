//! Placeholder type-parameter names for a given arity.

/// The placeholder names `T1..Ta` for one arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityList {
    arity: usize,
    names: Vec<String>,
}

impl ArityList {
    /// Build the list for `arity` (1-indexed). An arity of 0 yields an empty list.
    pub fn new(arity: usize) -> Self {
        let names = (1..=arity).map(|i| format!("T{i}")).collect();
        Self { arity, names }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// `"T1, T2, ..., Ta"`.
    pub fn full_join(&self) -> String {
        self.names.join(", ")
    }

    /// Every name but the last, joined with a bare comma: `"T1,T2"` for
    /// arity 3, empty for arity 1.
    pub fn trimmed_join(&self) -> String {
        let end = self.names.len().saturating_sub(1);
        self.names[..end].join(",")
    }
}
