use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use coreset_cli::pipeline::DatasetOutcome;
use coreset_cli::types::{CheckSummary, DatasetResult, JobResult};

pub fn print_summary(result: &JobResult) {
    println!("Output: {}", result.output_dir.display());
    println!("Seed: {}", result.seed);
    if result.dry_run {
        println!("Dry run: no files written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Records"),
        header_cell("Examples"),
        header_cell("Instances"),
        header_cell("Status"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    let mut total_records = 0usize;
    let mut total_instances = 0usize;
    let mut failures = Vec::new();
    for summary in &result.datasets {
        let name = Cell::new(&summary.filename)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold);
        match &summary.result {
            DatasetResult::Converted(outcome) => {
                let stats = outcome.stats();
                total_records += stats.records;
                total_instances += stats.instances;
                let (status, output) = match outcome {
                    DatasetOutcome::Written { path, .. } => (
                        Cell::new("written").fg(Color::Green),
                        Cell::new(path.display()),
                    ),
                    DatasetOutcome::Checked { .. } => {
                        (Cell::new("valid").fg(Color::Green), dim_cell("-"))
                    }
                    DatasetOutcome::Invalid { message, .. } => {
                        failures.push((summary.filename.as_str(), message.as_str()));
                        (Cell::new("invalid").fg(Color::Red), dim_cell("-"))
                    }
                };
                table.add_row(vec![
                    name,
                    Cell::new(stats.records),
                    Cell::new(stats.examples),
                    Cell::new(stats.instances),
                    status,
                    output,
                ]);
            }
            DatasetResult::Failed { kind, message } => {
                failures.push((summary.filename.as_str(), message.as_str()));
                let label = kind.map_or("error".to_string(), |kind| format!("{kind} error"));
                table.add_row(vec![
                    name,
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(label).fg(Color::Red),
                    dim_cell(summary.source.display()),
                ]);
            }
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_instances).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (filename, message) in failures {
            eprintln!("- {filename}: {message}");
        }
    }
}

pub fn print_check_results(results: &[CheckSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for result in results {
        let status = if result.valid {
            Cell::new("valid").fg(Color::Green)
        } else {
            Cell::new("invalid").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(result.path.display()),
            status,
            Cell::new(&result.message),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    apply_table_style(table);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
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
    Cell::new(value).fg(Color::DarkGrey)
}
