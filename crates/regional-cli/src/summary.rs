use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;
use regional_common::any_to_string;
use regional_core::RunReport;
use regional_model::SourceDescriptor;

pub fn print_summary(report: &RunReport) {
    println!("Output: {}", report.output_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sources"),
        header_cell("Rows read"),
        header_cell("Rows written"),
        header_cell("Format"),
        header_cell("Elapsed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(report.sources),
        Cell::new(report.extracted_rows),
        Cell::new(report.output_rows)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(report.format),
        dim_cell(format!("{:.2?}", report.elapsed)),
    ]);
    println!("{table}");
    if report.preview.height() > 0 {
        println!("{}", preview_table(&report.preview));
    }
}

pub fn print_sources(sources: &[SourceDescriptor]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source"), header_cell("Path")]);
    apply_table_style(&mut table);
    if sources.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("no dataset_*.csv files found")]);
    }
    for source in sources {
        table.add_row(vec![
            Cell::new(&source.name).add_attribute(Attribute::Bold),
            Cell::new(source.path.display()),
        ]);
    }
    println!("{table}");
}

/// Renders every cell of `df` as text under its column name.
pub fn preview_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in 0..df.height() {
        let cells: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| match column.get(row) {
                Ok(value) => Cell::new(any_to_string(value)),
                Err(_) => dim_cell("?"),
            })
            .collect();
        table.add_row(cells);
    }
    table
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
        .set_content_arrangement(ContentArrangement::Dynamic);
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
