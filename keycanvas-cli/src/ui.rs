use comfy_table::{presets, Cell, ContentArrangement, Table};

/// Data table for lists (gallery).
/// UTF8_FULL preset with header separator, dynamic width.
pub fn data_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers);
    table
}

/// Key-value info card (address, config, compare).
/// No header, no outer borders -- just clean aligned rows.
pub fn info_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn cell(content: impl ToString) -> Cell {
    Cell::new(content)
}

/// Print table with 2-space left indent.
pub fn print_table(table: &Table) {
    for line in table.lines() {
        println!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_table_rows() {
        let mut table = info_table();
        table.add_row(vec![cell("Address"), cell("1abc")]);
        let rendered: Vec<String> = table.lines().collect();
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("Address"));
        assert!(rendered[0].contains("1abc"));
    }

    #[test]
    fn test_data_table_has_header() {
        let mut table = data_table(&["#", "Address"]);
        table.add_row(vec![cell(1), cell("1abc")]);
        let rendered = table.to_string();
        assert!(rendered.contains("Address"));
        assert!(rendered.contains("1abc"));
    }
}
