//! End-to-end rendering of the shipped catalog.
//!
//! `fixtures/builtin.txt` is the complete expected output of the shipped
//! catalog. `fixtures/action_registration_functions.txt` is the GYB12 block
//! as it appears in the destination source file.

use arity_core::{Catalog, TemplateCollection, TemplateEntry};
use arity_renderer::{BatchDriver, CLOSING_DELIMITER};

const BUILTIN: &str = include_str!("fixtures/builtin.txt");
const ACTION_REGISTRATION_FUNCTIONS: &str =
    include_str!("fixtures/action_registration_functions.txt");

fn builtin_output() -> String {
    BatchDriver::builtin()
        .expect("builtin catalog compiles")
        .render_to_string()
        .expect("render")
}

/// Split the output into `(label, body lines)` sections.
fn sections(output: &str) -> Vec<(String, Vec<String>)> {
    let mut sections = Vec::new();
    let mut lines = output.lines();
    while let Some(label) = lines.next() {
        let body: Vec<String> = lines
            .by_ref()
            .take_while(|l| *l != CLOSING_DELIMITER)
            .map(str::to_string)
            .collect();
        sections.push((label.to_string(), body));
    }
    sections
}

fn section<'a>(all: &'a [(String, Vec<String>)], label: &str) -> &'a [String] {
    &all.iter()
        .find(|(l, _)| l == label)
        .unwrap_or_else(|| panic!("missing section {label}"))
        .1
}

#[test]
fn labels_follow_collection_then_sorted_label_order() {
    let output = builtin_output();
    let labels: Vec<String> = sections(&output).into_iter().map(|(l, _)| l).collect();
    let expected: Vec<String> = [
        "GYB1", "GYB2", "GYB3", "GYB4", "GYB5", "GYB6", "GYB7", "GYB8", // actions
        "GYB10", "GYB11", "GYB9", // action-registration
        "GYB12", // action-registration-functions
        "GYB13", "GYB14", "GYB15", // dialogue-runner
        "GYB16", // dialogue-runner-functions
        "GYB17", "GYB18", "GYB19", "GYB20", // commands-window
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(labels, expected);
}

#[test]
fn builtin_output_matches_fixture() {
    let output = builtin_output();
    assert_eq!(output.lines().count(), 490);
    assert_eq!(output, BUILTIN);
}

#[test]
fn output_is_byte_identical_across_runs() {
    assert_eq!(builtin_output(), builtin_output());
}

#[test]
fn output_is_independent_of_declaration_order() {
    let mut reversed = Catalog::builtin().expect("builtin");
    for collection in &mut reversed.collections {
        collection.entries.reverse();
    }
    let reversed_output = BatchDriver::new(reversed)
        .expect("compile")
        .render_to_string()
        .expect("render");
    assert_eq!(reversed_output, builtin_output());
}

#[test]
fn single_line_templates_yield_ten_lines() {
    let output = builtin_output();
    let all = sections(&output);
    let gyb1 = section(&all, "GYB1");
    assert_eq!(gyb1.len(), 10);
    assert_eq!(
        gyb1[0],
        "public void AddCommandHandler<T1>(string commandName, Func<T1, Coroutine> handler) => AddCommandHandler(commandName, (Delegate)handler);"
    );
    assert_eq!(
        gyb1[9],
        "public void AddCommandHandler<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10>(string commandName, Func<T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, Coroutine> handler) => AddCommandHandler(commandName, (Delegate)handler);"
    );
}

#[test]
fn multi_line_templates_keep_braces_and_tabs() {
    let output = builtin_output();
    let all = sections(&output);
    let gyb4 = section(&all, "GYB4");
    assert_eq!(gyb4.len(), 40, "four lines per arity");
    assert_eq!(
        &gyb4[..4],
        [
            "public void AddCommandHandler<T1>(string commandName, Func<T1, IEnumerator> handler)",
            "{",
            "\tthis.AddCommandHandler(commandName, (Delegate)handler);",
            "}",
        ]
    );
}

#[test]
fn header_variant_matches_pasted_declarations() {
    let output = builtin_output();
    let all = sections(&output);
    let expected: Vec<&str> = ACTION_REGISTRATION_FUNCTIONS.lines().collect();
    assert_eq!(section(&all, "GYB12"), expected.as_slice());
}

#[test]
fn dialogue_runner_header_variant_uses_trimmed_list() {
    let output = builtin_output();
    let all = sections(&output);
    let gyb16 = section(&all, "GYB16");
    assert_eq!(gyb16.len(), 30, "three lines per arity");
    assert_eq!(
        gyb16[0],
        "/// <inheritdoc cref=\"AddFunction{TResult}(string, Func{TResult})\" />"
    );
    assert_eq!(
        gyb16[27],
        "/// <inheritdoc cref=\"AddFunction{T1,T2,T3,T4,T5,T6,T7,T8,T9,TResult}(string, Func{T1,T2,T3,T4,T5,T6,T7,T8,T9,TResult})\" />"
    );
    assert_eq!(
        gyb16[28],
        "/// <typeparam name=\"T10\">The type of the tenth parameter to the function.</typeparam>"
    );
}

#[test]
fn identical_templates_are_not_deduplicated() {
    let output = builtin_output();
    let all = sections(&output);
    assert_eq!(section(&all, "GYB1"), section(&all, "GYB5"));
}

#[test]
fn custom_catalog_sorts_labels() {
    let catalog = Catalog {
        repeat_count: 2,
        collections: vec![TemplateCollection {
            name: "custom".to_string(),
            destination: "Custom.cs".to_string(),
            entries: vec![
                TemplateEntry::simple("GYB2", "Bar<{{ full_list }}>"),
                TemplateEntry::simple("GYB1", "Foo<{{ full_list }}>"),
            ],
        }],
    };
    let output = BatchDriver::new(catalog)
        .expect("compile")
        .render_to_string()
        .expect("render");
    assert_eq!(
        output,
        "GYB1\nFoo<T1>\nFoo<T1, T2>\n---\nGYB2\nBar<T1>\nBar<T1, T2>\n---\n"
    );
}
