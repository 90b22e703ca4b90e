use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use uom_model::{IssueReport, RuleOutcome};
use uom_validate::RuleKind;

/// Per-rule counts for a finished run.
pub fn summary_table(report: &IssueReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Rule"),
        header_cell("Issue code"),
        header_cell("Flagged"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    for outcome in &report.outcomes {
        let position = RuleKind::parse(&outcome.rule).map_or(0, RuleKind::position);
        table.add_row(vec![
            Cell::new(position),
            Cell::new(&outcome.rule),
            Cell::new(&outcome.issue_code),
            count_cell(outcome.flagged),
            status_cell(outcome),
        ]);
    }

    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} materials", report.flagged_material_count()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.len()).add_attribute(Attribute::Bold),
        if report.has_failures() {
            Cell::new(format!("{} failed", report.failures.len()))
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        },
    ]);
    table
}

/// The rule catalogue; rules missing from `enabled` are shown as disabled.
pub fn catalogue_table(enabled: &[RuleKind]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Rule"),
        header_cell("Issue code"),
        header_cell("Enabled"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for rule in RuleKind::all() {
        let enabled_cell = if enabled.contains(rule) {
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(rule.position()),
            Cell::new(rule.name()),
            Cell::new(rule.issue_code()),
            enabled_cell,
            Cell::new(rule.description()),
        ]);
    }
    table
}

/// Failed rules, one line each.
pub fn failure_lines(report: &IssueReport) -> Vec<String> {
    report
        .failures
        .iter()
        .map(|failure| format!("- {} ({}): {}", failure.rule, failure.issue_code, failure.message))
        .collect()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn status_cell(outcome: &RuleOutcome) -> Cell {
    if outcome.failed {
        Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("ok").fg(Color::Green)
    }
}
