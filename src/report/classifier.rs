/// Section titles converted to Markdown headings on exact match.
pub const SECTION_HEADERS: [&str; 8] = [
    "BACKTESTING REPORT",
    "LEFT OPEN TRADES REPORT",
    "ENTER TAG STATS",
    "EXIT REASON STATS",
    "MIXED TAG STATS",
    "DAY BREAKDOWN",
    "SUMMARY METRICS",
    "STRATEGY SUMMARY",
];

/// A cleaned line is a table row if it has at least two pipes (one
/// interior separator plus two boundaries) and is not itself a Markdown
/// heading. A data row whose first cell starts with a literal `##` is
/// knowingly misclassified as a heading.
pub fn is_table_row(line: &str) -> bool {
    line.matches('|').count() >= 2 && !line.trim_start().starts_with("##")
}

/// Exact, case-sensitive match against the closed section-title list.
pub fn is_section_header(line: &str) -> bool {
    SECTION_HEADERS.contains(&line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_row_needs_two_pipes() {
        assert!(is_table_row("|A|B|"));
        assert!(is_table_row("|A|"));
        assert!(!is_table_row("A|B"));
        assert!(!is_table_row("plain text"));
        assert!(!is_table_row(""));
    }

    #[test]
    fn test_heading_lines_are_not_rows() {
        assert!(!is_table_row("## BACKTESTING REPORT"));
        assert!(!is_table_row("  ## |A|B|"));
        // Single # is not excluded
        assert!(is_table_row("# |A|B|"));
    }

    #[test]
    fn test_section_header_exact_match_only() {
        assert!(is_section_header("BACKTESTING REPORT"));
        assert!(is_section_header("STRATEGY SUMMARY"));
        assert!(!is_section_header("Backtesting Report"));
        assert!(!is_section_header("BACKTESTING REPORTS"));
        assert!(!is_section_header("## BACKTESTING REPORT"));
    }
}
