//! End-to-end rendering scenarios.

use elastic_table::{display_width, wrap, Fit, Table, TableError, TableStyle};

fn line(cells: &[(&str, usize)]) -> String {
    let fields: Vec<String> = cells
        .iter()
        .map(|(text, width)| format!(" {:<width$} ", text, width = *width))
        .collect();
    format!("{}\n", fields.join("|"))
}

#[test]
fn two_short_columns_on_a_wide_terminal() {
    let mut table = Table::new(["A", "B"]).width(120);
    table.add_row(["hello", "world"]).unwrap();

    let plan = table.plan();
    assert_eq!(plan.fit, Fit::Natural);
    assert_eq!(plan.widths, vec![5, 5]);

    let out = table.render_to_string();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![" A     | B     ", "-------+-------", " hello | world "]);
}

#[test]
fn long_biography_wraps_while_name_stays_single_line() {
    let bio = "a very long biography text exceeding the narrow budget";
    let mut table = Table::new(["Name", "Bio"]).width(30);
    table.add_row(["Al", bio]).unwrap();

    let plan = table.plan();
    assert_eq!(plan.fit, Fit::Narrowed);
    assert_eq!(plan.widths, vec![4, 19]);

    let expected = [
        line(&[("Name", 4), ("Bio", 19)]),
        "------+---------------------\n".to_string(),
        line(&[("Al", 4), ("a very long", 19)]),
        line(&[("", 4), ("biography text", 19)]),
        line(&[("", 4), ("exceeding the", 19)]),
        line(&[("", 4), ("narrow budget", 19)]),
    ]
    .concat();
    assert_eq!(table.render_to_string(), expected);

    for rendered in expected.lines() {
        assert!(display_width(rendered) <= 30);
    }
}

#[test]
fn uniform_column_keeps_its_width_under_a_tight_budget() {
    let mut table = Table::new(["12345678", "12345678"]).width(12);
    table.add_row(["abcdefgh", "ABCDEFGH"]).unwrap();
    table.add_row(["hgfedcba", "HGFEDCBA"]).unwrap();

    let plan = table.plan();
    assert_eq!(plan.fit, Fit::Tight);
    assert_eq!(plan.widths, vec![8, 8]);

    let out = table.render_to_string();
    assert_eq!(out.lines().count(), 4);
    assert!(out.contains(" abcdefgh | ABCDEFGH "));
}

#[test]
fn uniform_column_is_not_narrowed_when_others_wrap() {
    let mut table = Table::new(["Code", "Description"]).width(30);
    table
        .add_row(["AB12", "first entry with a fairly long description"])
        .unwrap();
    table.add_row(["CD34", "second"]).unwrap();

    // Leftover slack may widen the code column, never shrink it.
    let plan = table.plan();
    assert!(plan.widths[0] >= 4);
    assert!(plan.widths[1] < 42);
    assert!(plan.fit.fits());
}

#[test]
fn repeated_renders_are_identical() {
    let mut table = Table::new(["Name", "Bio", "Notes"]).width(40);
    table
        .add_row(["Al", "a very long biography text", "several notes go here"])
        .unwrap();
    table
        .add_row(["Bea", "short", "another long note that needs wrapping"])
        .unwrap();

    let first = table.render_to_string();
    let second = table.render_to_string();
    let third = table.render_to_string();
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(table.plan(), table.plan());
}

#[test]
fn render_after_append_recomputes_plan() {
    let mut table = Table::new(["A", "B"]).width(20);
    table.add_row(["x", "y"]).unwrap();
    assert_eq!(table.plan().fit, Fit::Natural);

    table
        .add_row(["a longer cell", "and another long one"])
        .unwrap();
    assert_ne!(table.plan().fit, Fit::Natural);
    assert_eq!(table.plan(), table.plan());
}

#[test]
fn inner_whitespace_survives_rendering() {
    let mut table = Table::new(["A", "B"]).width(80);
    table.add_row(["x    y", "z"]).unwrap();

    assert_eq!(table.plan().widths, vec![6, 1]);
    assert_eq!(
        table.render_to_string(),
        " A      | B \n--------+---\n x    y | z \n"
    );
}

#[test]
fn wrapped_cells_keep_every_word() {
    let bio = "the quick brown fox jumps over the lazy dog near the riverbank";
    let mut table = Table::new(["Id", "Text"]).width(24);
    table.add_row(["1", bio]).unwrap();

    let plan = table.plan();
    let lines = wrap(bio, plan.widths[1]);
    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), bio);
}

#[test]
fn rows_render_in_append_order() {
    let mut table = Table::new(["N"]).width(80);
    for n in ["one", "two", "three"] {
        table.add_row([n]).unwrap();
    }
    let out = table.render_to_string();
    let body: Vec<&str> = out.lines().skip(2).map(str::trim).collect();
    assert_eq!(body, vec!["one", "two", "three"]);
}

#[test]
fn mismatched_row_is_rejected() {
    let mut table = Table::new(["A", "B", "C"]).width(80);
    table.add_row(["1", "2", "3"]).unwrap();

    let err = table.add_row(["1", "2"]).unwrap_err();
    assert_eq!(err.to_string(), "row 1 has 2 cells, expected 3");
    assert!(matches!(err, TableError::RowShapeMismatch { .. }));

    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.render_to_string().lines().count(), 3);
}

#[test]
fn margins_wider_than_terminal_still_render() {
    let mut table = Table::new(["A", "B", "C"]).width(4);
    table.add_row(["", "", ""]).unwrap();

    let plan = table.plan();
    assert_eq!(plan.fit, Fit::Tight);
    assert!(plan.budget < 0);
    assert!(plan.widths.iter().all(|&w| w >= 1));
    assert_eq!(table.render_to_string().lines().count(), 3);
}

#[test]
fn multi_line_cells_break_at_newlines() {
    let mut table = Table::new(["Key", "Value"]).width(80);
    table.add_row(["k", "first\nsecond"]).unwrap();

    assert_eq!(table.plan().widths, vec![3, 6]);
    let out = table.render_to_string();
    assert!(out.ends_with(" k   | first  \n     | second \n"));
}

#[test]
fn cjk_content_aligns_by_display_width() {
    let mut table = Table::new(["Word", "Meaning"]).width(80);
    table.add_row(["日本", "Japan"]).unwrap();
    table.add_row(["abc", "letters"]).unwrap();

    let out = table.render_to_string();
    let widths: Vec<usize> = out.lines().map(display_width).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
}

#[test]
fn custom_style_is_used_for_body_and_divider() {
    let style = TableStyle::default()
        .border("#")
        .divider('=')
        .divider_border("*")
        .divider_padding("=");
    let mut table = Table::new(["A", "B"]).style(style).width(80);
    table.add_row(["x", "y"]).unwrap();
    assert_eq!(table.render_to_string(), " A # B \n===*===\n x # y \n");
}
