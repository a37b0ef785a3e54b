/// Zero-based line and character of a position in a file.
///
/// `character` counts Unicode scalar values from the start of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineAndCharacter {
    pub line: usize,
    pub character: usize,
}

impl LineAndCharacter {
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Maps byte offsets of a text to line/character positions.
#[derive(Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Position of the byte `offset`, clamped to the end of the text.
    ///
    /// `offset` must lie on a char boundary, which holds for regex match bounds.
    #[must_use]
    pub fn position(&self, offset: usize) -> LineAndCharacter {
        let offset = offset.min(self.text.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let character = self.text[line_start..offset].chars().count();
        LineAndCharacter { line, character }
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
