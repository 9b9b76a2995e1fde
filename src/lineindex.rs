use tower_lsp::lsp_types::Position;

#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    text_len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, ch) in text.char_indices() {
            if ch == '\n' {
                line_starts.push(idx + ch.len_utf8());
            }
        }
        Self {
            line_starts,
            text_len: text.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of the first character of `line`, or `None` past the last line.
    pub fn line_start(&self, line: u32) -> Option<usize> {
        self.line_starts.get(line as usize).copied()
    }

    fn line_end(&self, line: usize) -> usize {
        self.line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text_len)
    }

    pub fn position_at(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        Position::new(line as u32, offset.saturating_sub(line_start) as u32)
    }

    pub fn offset_at(&self, position: &Position) -> Option<usize> {
        let line = position.line as usize;
        let line_start = *self.line_starts.get(line)?;
        let offset = line_start + position.character as usize;
        if offset > self.line_end(line) {
            None
        } else {
            Some(offset)
        }
    }

    /// Like `offset_at` but never fails: positions past the end of a line clamp
    /// to the line end, and lines past the document clamp to the document end.
    pub fn clamped_offset(&self, position: &Position) -> usize {
        let line = position.line as usize;
        let Some(line_start) = self.line_starts.get(line).copied() else {
            return self.text_len;
        };
        (line_start + position.character as usize).min(self.line_end(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_offsets_and_positions() {
        let index = LineIndex::new("abc\ndef\n");
        assert_eq!(index.offset_at(&Position::new(1, 2)), Some(6));
        assert_eq!(index.position_at(6), Position::new(1, 2));
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn clamps_out_of_range_positions() {
        let index = LineIndex::new("abc\ndef");
        assert_eq!(index.offset_at(&Position::new(0, 10)), None);
        assert_eq!(index.clamped_offset(&Position::new(0, 10)), 4);
        assert_eq!(index.clamped_offset(&Position::new(9, 0)), 7);
    }
}
