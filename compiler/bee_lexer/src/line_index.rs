//! Byte offset to line/column conversion.

use bee_ir::Position;

/// Start offsets of every line in a source text.
pub(crate) struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineIndex {
            source,
            line_starts,
        }
    }

    /// 1-based position of `offset`; columns count characters, not bytes.
    pub(crate) fn position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let start = self.line_starts.get(line).copied().unwrap_or(0);
        let end = offset.min(self.source.len());
        let column = self
            .source
            .get(start..end)
            .map_or(0, |text| text.chars().count());
        Position::new(to_u32(line + 1), to_u32(column + 1))
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let index = LineIndex::new("abc");
        assert_eq!(index.position(0), Position::new(1, 1));
        assert_eq!(index.position(2), Position::new(1, 3));
    }

    #[test]
    fn test_after_newline() {
        let index = LineIndex::new("ab\ncd\n\nx");
        assert_eq!(index.position(3), Position::new(2, 1));
        assert_eq!(index.position(4), Position::new(2, 2));
        assert_eq!(index.position(7), Position::new(4, 1));
    }

    #[test]
    fn test_columns_count_chars() {
        let index = LineIndex::new("\"é\" x");
        assert_eq!(index.position(5), Position::new(1, 5));
    }
}
