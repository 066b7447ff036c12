pub mod classifier;
pub mod cleaner;
pub mod formatter;

pub use cleaner::LineCleaner;
pub use formatter::ReportFormatter;

/// What a single reformatting pass changed, for the per-file summary.
#[derive(Debug, Default)]
pub struct FormatChanges {
    pub sections_converted: usize,
    pub tables_detected: usize,
    pub alignment_rows_inserted: usize,
}

impl FormatChanges {
    pub fn summary(&self) -> String {
        format!(
            "Converted {} section headers, detected {} table blocks, inserted {} alignment rows.",
            self.sections_converted, self.tables_detected, self.alignment_rows_inserted
        )
    }
}
