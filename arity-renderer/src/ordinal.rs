//! English ordinal words: 1 → "first", 22 → "twenty-second".

use crate::error::RenderError;

const CARDINAL_UNITS: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const ORDINALS_UNDER_TWENTY: [&str; 20] = [
    "",
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
];

const CARDINAL_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const ORDINAL_TENS: [&str; 10] = [
    "",
    "",
    "twentieth",
    "thirtieth",
    "fortieth",
    "fiftieth",
    "sixtieth",
    "seventieth",
    "eightieth",
    "ninetieth",
];

/// Ordinal word for `n` in `1..=999`.
pub fn ordinal_word(n: usize) -> Result<String, RenderError> {
    if !(1..=999).contains(&n) {
        return Err(RenderError::OrdinalOutOfRange(n));
    }
    let hundreds = n / 100;
    let rest = n % 100;
    Ok(match (hundreds, rest) {
        (0, _) => under_hundred(rest),
        (_, 0) => format!("{} hundredth", CARDINAL_UNITS[hundreds]),
        _ => format!("{} hundred and {}", CARDINAL_UNITS[hundreds], under_hundred(rest)),
    })
}

// n in 1..=99
fn under_hundred(n: usize) -> String {
    if n < 20 {
        return ORDINALS_UNDER_TWENTY[n].to_string();
    }
    let (tens, units) = (n / 10, n % 10);
    if units == 0 {
        ORDINAL_TENS[tens].to_string()
    } else {
        format!("{}-{}", CARDINAL_TENS[tens], ORDINALS_UNDER_TWENTY[units])
    }
}
