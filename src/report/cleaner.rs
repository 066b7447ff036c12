use regex::Regex;

/// Box-drawing characters stripped from report output. Pipes are kept,
/// they are the column separators.
const BOX_CHARS: &str = "┌┐└┘├┤┬┴┼═╞╡╤╧╪╫╬─━┏┓┗┛╺╸╹╻╼╽╀╁╂╃╄╅╆╇╈╉╊╋";

/// Strips table decoration from one raw report line.
pub struct LineCleaner {
    space_before_pipe: Regex,
    space_after_pipe: Regex,
}

impl LineCleaner {
    pub fn new() -> Self {
        Self {
            space_before_pipe: Regex::new(r" +\|").expect("static pattern"),
            space_after_pipe: Regex::new(r"\| +").expect("static pattern"),
        }
    }

    /// Remove box-drawing glyphs, collapse cell padding around pipes,
    /// and trim the result. Total over any input line.
    pub fn clean(&self, line: &str) -> String {
        let stripped: String = line.chars().filter(|c| !BOX_CHARS.contains(*c)).collect();
        let collapsed = self.space_before_pipe.replace_all(&stripped, "|");
        let collapsed = self.space_after_pipe.replace_all(&collapsed, "|");
        collapsed.trim().to_string()
    }
}

impl Default for LineCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_box_characters() {
        let cleaner = LineCleaner::new();
        assert_eq!(cleaner.clean("┌─────┬─────┐"), "");
        assert_eq!(cleaner.clean("├─────┼─────┤"), "");
        assert_eq!(cleaner.clean("┏━━┳━━┓"), "");
        for ch in BOX_CHARS.chars() {
            assert!(!cleaner.clean(&format!("a {ch} b")).contains(ch));
        }
    }

    #[test]
    fn test_collapses_cell_padding() {
        let cleaner = LineCleaner::new();
        assert_eq!(cleaner.clean("| Pair      | Profit % |"), "|Pair|Profit %|");
        assert_eq!(cleaner.clean("|  A  |  B  |"), "|A|B|");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let cleaner = LineCleaner::new();
        assert_eq!(cleaner.clean("   BACKTESTING REPORT   "), "BACKTESTING REPORT");
        assert_eq!(cleaner.clean("─── BACKTESTING REPORT ───"), "BACKTESTING REPORT");
    }

    #[test]
    fn test_interior_spaces_survive() {
        let cleaner = LineCleaner::new();
        // Only runs touching a pipe collapse
        assert_eq!(cleaner.clean("total  profit"), "total  profit");
    }
}
