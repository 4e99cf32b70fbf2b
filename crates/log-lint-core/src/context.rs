//! Context types for rule execution.

use crate::types::Location;
use std::path::{Path, PathBuf};

const BOM: &str = "\u{feff}";

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Calculates the byte offset for a given line and column.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number, counted in characters
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file. Positions past the end of a
    /// line clamp to the line end; unknown lines clamp to the end of file.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        // syn strips a leading BOM before lexing, so line 1 columns start after it.
        let bom = if self.content.starts_with(BOM) {
            BOM.len()
        } else {
            0
        };

        let mut offset = bom;
        for (i, line_content) in self.content[bom..].split_inclusive('\n').enumerate() {
            if i + 1 == line {
                let within = line_content
                    .char_indices()
                    .nth(column.saturating_sub(1))
                    .map_or(line_content.len(), |(idx, _)| idx);
                return offset + within;
            }
            offset += line_content.len();
        }

        offset
    }

    /// Converts a `proc-macro2` span into a [`Location`] with byte offsets.
    ///
    /// Requires the `span-locations` feature of `proc-macro2`.
    #[must_use]
    pub fn span_location(&self, span: proc_macro2::Span) -> Location {
        let start = span.start();
        let end = span.end();
        let offset = self.offset_for(start.line, start.column + 1);
        let end_offset = self.offset_for(end.line, end.column + 1);

        Location::new(self.relative_path.clone(), start.line, start.column + 1)
            .with_span(offset, end_offset.saturating_sub(offset))
    }
}
