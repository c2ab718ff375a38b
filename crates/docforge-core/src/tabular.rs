//! Tabular line parser
//!
//! Every line picks its own delimiter: tab, then pipe, then comma. A line
//! with none of them is a single-cell row. Rows may therefore have
//! different widths, and a tab line inside pipe-formatted content is split
//! on tabs only.
//!
//! Quoted commas are not handled; `"a,b",c` yields three cells.

use docforge_ast::TableRow;

/// Split `content` into rows
///
/// Content is trimmed as a whole first; lines that are blank after trimming
/// produce no row.
pub fn parse_table(content: &str) -> Vec<TableRow> {
    content
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect()
}

/// Split a single line into cells
pub fn parse_row(line: &str) -> TableRow {
    if line.contains('\t') {
        line.split('\t').map(str::trim).collect()
    } else if line.contains('|') {
        line.split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect()
    } else if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        TableRow::new(vec![line.trim().to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(rows: &[TableRow]) -> Vec<Vec<&str>> {
        rows.iter()
            .map(|r| r.cells.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_mixed_delimiters() {
        let rows = parse_table("a\tb\nc,d,e");
        assert_eq!(cells(&rows), vec![vec!["a", "b"], vec!["c", "d", "e"]]);
    }

    #[test]
    fn test_pipe_table() {
        let rows = parse_table("| Name | Age |\n| Bob | 42 |");
        assert_eq!(cells(&rows), vec![vec!["Name", "Age"], vec!["Bob", "42"]]);
    }

    #[test]
    fn test_pipe_drops_inner_empty_cells() {
        let rows = parse_table("a || b");
        assert_eq!(cells(&rows), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_comma_keeps_empty_cells() {
        let rows = parse_table("a,,b");
        assert_eq!(cells(&rows), vec![vec!["a", "", "b"]]);
    }

    #[test]
    fn test_tab_wins_over_pipe_and_comma() {
        let rows = parse_table("x|y\tz,w");
        assert_eq!(cells(&rows), vec![vec!["x|y", "z,w"]]);
    }

    #[test]
    fn test_pipe_wins_over_comma() {
        let rows = parse_table("a,b|c");
        assert_eq!(cells(&rows), vec![vec!["a,b", "c"]]);
    }

    #[test]
    fn test_single_cell_line() {
        let rows = parse_table("  just text  ");
        assert_eq!(cells(&rows), vec![vec!["just text"]]);
    }

    #[test]
    fn test_quoted_comma_not_special() {
        let rows = parse_table("\"a,b\",c");
        assert_eq!(cells(&rows), vec![vec!["\"a", "b\"", "c"]]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = parse_table("h1,h2\n\n   \nv1,v2");
        assert_eq!(cells(&rows), vec![vec!["h1", "h2"], vec!["v1", "v2"]]);
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("  \n\n ").is_empty());
    }

    #[test]
    fn test_separator_row_is_kept() {
        let rows = parse_table("| a | b |\n|---|---|");
        assert_eq!(cells(&rows), vec![vec!["a", "b"], vec!["---", "---"]]);
    }
}
