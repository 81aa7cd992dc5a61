//! Line/column mapping for byte offsets.

/// A 1-based line/column pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Maps byte offsets to line/column positions.
///
/// Line starts are the byte offsets of the first byte of each line, in
/// ascending order. Offset 0 always starts line 1.
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from precomputed line-start offsets.
    ///
    /// A leading 0 is inserted if the host omitted it.
    #[must_use]
    pub fn from_line_starts(mut line_starts: Vec<u32>) -> Self {
        if line_starts.first() != Some(&0) {
            line_starts.insert(0, 0);
        }
        Self { line_starts }
    }

    /// Build a line map by scanning source text for newlines.
    #[must_use]
    pub fn from_source(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// Number of lines the map knows about.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line/column position of a byte offset.
    ///
    /// Offsets past the last line start land on the last line.
    #[must_use]
    pub fn position(&self, offset: u32) -> Position {
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        Position {
            line: line_idx as u32 + 1,
            column: offset - line_start + 1,
        }
    }
}
