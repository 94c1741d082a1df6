//! Terminal rendering of payoff tables and case labels.

use comfy_table::{ContentArrangement, Table};
use sg_core::{CaseLabels, PayoffTable};

/// Render one player's table: a label column followed by one column per
/// variable, headed by its display name.
pub fn payoff_table(table: &PayoffTable, labels: &CaseLabels) -> Table {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Case".to_string()];
    header.extend(
        table
            .variables()
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{}. {}", i + 1, v.name())),
    );
    out.set_header(header);

    for (case, label) in labels.iter() {
        let mut row = vec![format!("{case}: {label}")];
        row.extend(table.variables().iter().map(|v| v.cell(case).to_string()));
        out.add_row(row);
    }
    out
}

/// Render the label of every case.
pub fn case_labels(labels: &CaseLabels) -> Table {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Case", "Nature, P1, P2"]);
    for (case, label) in labels.iter() {
        out.add_row(vec![case.as_str(), label]);
    }
    out
}

/// Payoff-function symbols for a table's variables, one per line.
pub fn symbols(table: &PayoffTable) -> String {
    table
        .variables()
        .iter()
        .map(|v| format!("  {} -> {}", v.name(), v.symbol()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a 1-based column number as typed by the user.
pub(crate) fn column_index(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()?.checked_sub(1)
}
