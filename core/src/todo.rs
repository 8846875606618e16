//! Round-trip for the TODO table a planning model writes into its reply.
//!
//! Model output is free-form, so every step here is best-effort: a missing
//! section, a short table or a ragged row degrades to empty or partial output
//! instead of an error.

use regex::Regex;
use std::fmt::Write;

pub const DEFAULT_SECTION_MARKER: &str = "## TODO List";
pub const EMPTY_TABLE_PLACEHOLDER: &str = "*(No TODOs found)*";

const STATUS_COLUMN: &str = "status";

/// One data row of a TODO table, keyed by header cell in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoRow {
    cells: Vec<(String, String)>,
}

impl TodoRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `column` to `value`. An existing column keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();

        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for TodoRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = TodoRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Returns the text between the first `marker` and the next `"## "` (or the
/// end of `text`). Returns an empty string when the marker does not occur.
pub fn extract_section(text: &str, marker: &str) -> String {
    let pattern = format!(r"(?s){}(.*?)(?:## |\z)", regex::escape(marker));

    let Ok(re) = Regex::new(&pattern) else {
        return String::new();
    };

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Keeps only the lines of `block` that start a pipe-delimited table row.
pub fn isolate_table_lines(block: &str) -> String {
    block
        .trim()
        .lines()
        .filter(|line| line.trim_start().starts_with('|'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Table lines of the `## TODO List` section of `text`.
pub fn extract_todo_table_block(text: &str) -> String {
    isolate_table_lines(&extract_section(text, DEFAULT_SECTION_MARKER))
}

fn split_cells(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Parses a header line, a separator line and data lines into rows.
///
/// Data rows whose cell count differs from the header's are skipped. Fewer
/// than three non-blank lines yield no rows.
pub fn parse_table(table: &str) -> Vec<TodoRow> {
    let lines: Vec<&str> = table
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 3 {
        return Vec::new();
    }

    let header = split_cells(lines[0]);

    lines[2..]
        .iter()
        .map(|line| split_cells(line))
        .filter(|cells| cells.len() == header.len())
        .map(|cells| header.iter().cloned().zip(cells).collect())
        .collect()
}

/// Renders rows back into a Markdown table.
///
/// Columns follow the first row. With `status_override`, every cell of the
/// column named `status` (any case) is replaced by the override.
pub fn render_table(rows: &[TodoRow], status_override: Option<&str>) -> String {
    let Some(first) = rows.first() else {
        return EMPTY_TABLE_PLACEHOLDER.to_string();
    };

    let headers: Vec<&str> = first.columns().collect();

    let mut out = String::new();
    let _ = write!(out, "| {} |", headers.join(" | "));
    let _ = write!(out, "\n| {} |", vec!["---"; headers.len()].join(" | "));

    for row in rows {
        let cells: Vec<&str> = headers
            .iter()
            .map(|header| match status_override {
                Some(status) if header.to_lowercase() == STATUS_COLUMN => status,
                _ => row.get(header).unwrap_or(""),
            })
            .collect();
        let _ = write!(out, "\n| {} |", cells.join(" | "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "| ID | Task | Status |\n\
                           | --- | --- | --- |\n\
                           | T1 | Write notes | todo |\n\
                           | T2 | Review | todo |";

    fn row(cells: &[(&str, &str)]) -> TodoRow {
        cells.iter().copied().collect()
    }

    #[test]
    fn parses_example_table() {
        let rows = parse_table(EXAMPLE);

        assert_eq!(
            rows,
            vec![
                row(&[("ID", "T1"), ("Task", "Write notes"), ("Status", "todo")]),
                row(&[("ID", "T2"), ("Task", "Review"), ("Status", "todo")]),
            ]
        );
        assert_eq!(
            rows[0].columns().collect::<Vec<_>>(),
            vec!["ID", "Task", "Status"]
        );
    }

    #[test]
    fn renders_status_override() {
        let rendered = render_table(&parse_table(EXAMPLE), Some("done"));

        assert_eq!(
            rendered,
            "| ID | Task | Status |\n\
             | --- | --- | --- |\n\
             | T1 | Write notes | done |\n\
             | T2 | Review | done |"
        );
    }

    #[test]
    fn status_override_is_case_insensitive() {
        let rows = vec![row(&[("ID", "T1"), ("STATUS", "blocked")])];
        assert_eq!(
            render_table(&rows, Some("done")),
            "| ID | STATUS |\n| --- | --- |\n| T1 | done |"
        );
    }

    #[test]
    fn render_without_override_keeps_cells() {
        let rows = parse_table(EXAMPLE);
        assert_eq!(render_table(&rows, None), EXAMPLE);
    }

    #[test]
    fn drops_rows_with_wrong_width() {
        let table = "| ID | Task | Status |\n\
                     |----|------|--------|\n\
                     | T1 | Write notes | todo |\n\
                     | T2 | Review |\n\
                     | T3 | Ship | todo | extra |\n\
                     | T4 | Celebrate | todo |";

        let rows = parse_table(table);
        let ids: Vec<_> = rows.iter().filter_map(|r| r.get("ID")).collect();
        assert_eq!(ids, vec!["T1", "T4"]);
    }

    #[test]
    fn short_tables_parse_to_nothing() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("| ID | Task |").is_empty());
        assert!(parse_table("| ID | Task |\n| --- | --- |\n\n   \n").is_empty());
    }

    #[test]
    fn second_line_is_discarded_even_if_not_a_separator() {
        let rows = parse_table("| A | B |\n| 1 | 2 |\n| 3 | 4 |");
        assert_eq!(rows, vec![row(&[("A", "3"), ("B", "4")])]);
    }

    #[test]
    fn empty_rows_render_placeholder() {
        assert_eq!(render_table(&[], Some("done")), EMPTY_TABLE_PLACEHOLDER);
    }

    #[test]
    fn render_then_parse_is_stable() {
        let rows = vec![
            row(&[
                ("ID", "T1"),
                ("Task", "Inventory services"),
                ("Owner (Role)", "requirements-analyst"),
                ("Depends On", "-"),
                ("Status", "todo"),
                ("Notes", ""),
            ]),
            row(&[
                ("ID", "T2"),
                ("Task", "Draft workflow"),
                ("Owner (Role)", "pipeline-architect"),
                ("Depends On", "T1"),
                ("Status", "todo"),
                ("Notes", "reuse templates"),
            ]),
        ];

        assert_eq!(parse_table(&render_table(&rows, None)), rows);
    }

    #[test]
    fn missing_cells_render_empty() {
        let rows = vec![
            row(&[("ID", "T1"), ("Status", "todo")]),
            row(&[("ID", "T2")]),
        ];
        assert_eq!(
            render_table(&rows, None),
            "| ID | Status |\n| --- | --- |\n| T1 | todo |\n| T2 |  |"
        );
    }

    #[test]
    fn repeated_header_keeps_first_position() {
        let rows = parse_table("| A | B | A |\n| - | - | - |\n| 1 | 2 | 3 |");
        assert_eq!(rows, vec![row(&[("A", "3"), ("B", "2")])]);
    }

    #[test]
    fn extracts_section_up_to_next_heading() {
        let text = "## Reasoning Plan\n- Step 1\n\n## TODO List\nIntro line\n\
                    | ID | Task |\n| --- | --- |\n| T1 | Plan |\n\n## Sub-Agent Plan\n- stuff";

        let section = extract_section(text, DEFAULT_SECTION_MARKER);
        assert!(section.contains("| T1 | Plan |"));
        assert!(!section.contains("Sub-Agent"));
        assert!(!section.contains("Reasoning"));

        assert_eq!(
            extract_todo_table_block(text),
            "| ID | Task |\n| --- | --- |\n| T1 | Plan |"
        );
    }

    #[test]
    fn extracts_section_to_end_of_text() {
        let text = "## TODO List\n| ID |\n| -- |\n| T1 |";
        assert_eq!(extract_section(text, DEFAULT_SECTION_MARKER), "\n| ID |\n| -- |\n| T1 |");
    }

    #[test]
    fn marker_is_matched_literally() {
        let text = "## Tasks (v2)\n| A |\n| - |\n| 1 |";
        assert_eq!(
            isolate_table_lines(&extract_section(text, "## Tasks (v2)")),
            "| A |\n| - |\n| 1 |"
        );
    }

    #[test]
    fn missing_section_is_empty() {
        let text = "## Reasoning Plan\n| Step | Description |\n| --- | --- |\n| 1 | x |";

        let block = extract_todo_table_block(text);
        assert_eq!(block, "");
        assert!(parse_table(&block).is_empty());
    }

    #[test]
    fn isolates_indented_table_lines() {
        let block = "\n  Some prose\n   | A | B |\n   | - | - |\n   | 1 | 2 |\ntrailing\n";
        let lines = isolate_table_lines(block);
        assert_eq!(lines, "   | A | B |\n   | - | - |\n   | 1 | 2 |");
        assert_eq!(parse_table(&lines), vec![row(&[("A", "1"), ("B", "2")])]);
    }

    #[test]
    fn override_fills_every_status_spelling() {
        let rows = vec![TodoRow::from_iter([
            ("ID", "T1"),
            ("Status", "todo"),
            ("STATUS", "blocked"),
        ])];

        assert_eq!(
            render_table(&rows, Some("done")),
            "| ID | Status | STATUS |\n| --- | --- | --- |\n| T1 | done | done |"
        );
    }
}
