/// Pipe-delimited table rows.
pub struct TableRow;

/// What a pipe-bearing line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Cells(Vec<String>),
    /// A `|---|---|` style delimiter row. Produces nothing in the output.
    Separator,
}

impl TableRow {
    pub const PIPE: char = '|';

    /// A line is a candidate row when it holds at least two pipes.
    pub fn is_candidate(trimmed: &str) -> bool {
        trimmed.matches(Self::PIPE).nth(1).is_some()
    }

    /// Splits a candidate row into trimmed, non-empty cells.
    ///
    /// A row is a separator when every cell starts with `-`, and also when
    /// no cell survives trimming (`| |`).
    pub fn split(trimmed: &str) -> RowKind {
        let cells: Vec<String> = trimmed
            .split(Self::PIPE)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();

        if cells.is_empty() || cells.iter().all(|cell| cell.starts_with('-')) {
            RowKind::Separator
        } else {
            RowKind::Cells(cells)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("| a | b |", true)]
    #[case("a | b | c", true)]
    #[case("||", true)]
    #[case("a | b", false)]
    #[case("plain", false)]
    fn candidate_needs_two_pipes(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TableRow::is_candidate(line), expected);
    }

    #[test]
    fn header_row_cells_are_trimmed() {
        assert_eq!(
            TableRow::split("| h1 |  h2  |"),
            RowKind::Cells(vec!["h1".to_string(), "h2".to_string()])
        );
    }

    #[test]
    fn empty_cells_are_dropped() {
        assert_eq!(
            TableRow::split("| a || b |"),
            RowKind::Cells(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[rstest]
    #[case("|---|---|")]
    #[case("| --- | - |")]
    #[case("| |")]
    fn separator_rows(#[case] line: &str) {
        assert_eq!(TableRow::split(line), RowKind::Separator);
    }

    #[test]
    fn mixed_dash_row_is_content() {
        assert_eq!(
            TableRow::split("| --- | total |"),
            RowKind::Cells(vec!["---".to_string(), "total".to_string()])
        );
    }

    #[test]
    fn alignment_colons_are_not_separators() {
        // Only a leading dash marks a separator cell.
        assert_eq!(
            TableRow::split("|:---|---:|"),
            RowKind::Cells(vec![":---".to_string(), "---:".to_string()])
        );
    }
}
