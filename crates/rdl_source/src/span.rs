//! Byte ranges used to point AST nodes and errors back at their source text.

use crate::file_id::FileId;
use serde::{Deserialize, Serialize};

/// A half-open byte range `start..end` inside one source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// The source text this span belongs to.
    pub file: FileId,
    /// Byte offset of the first byte (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (exclusive).
    pub end: u32,
}

impl Span {
    /// Placeholder for nodes built by hand rather than by the parser.
    pub const DUMMY: Span = Span {
        file: FileId::DETACHED,
        start: 0,
        end: 0,
    };

    /// Creates a span covering `start..end` in `file`.
    pub fn new(file: FileId, start: u32, end: u32) -> Self {
        Self { file, start, end }
    }

    /// Creates an empty span at `offset`.
    pub fn point(file: FileId, offset: u32) -> Self {
        Self::new(file, offset, offset)
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// # Panics
    ///
    /// Panics if the spans belong to different files.
    pub fn merge(self, other: Span) -> Span {
        assert_eq!(
            self.file, other.file,
            "cannot merge spans from different files"
        );
        Span {
            file: self.file,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this is [`Span::DUMMY`].
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }

    /// Slices `source` with this span's byte range.
    ///
    /// `source` must be the text the span was produced from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start as usize..self.end as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_covers_both() {
        let f = FileId::from_raw(0);
        let width = Span::new(f, 0, 2);
        let digits = Span::new(f, 3, 7);
        let m = width.merge(digits);
        assert_eq!((m.start, m.end), (0, 7));
        assert_eq!(width.merge(digits), digits.merge(width));
    }

    #[test]
    #[should_panic(expected = "cannot merge spans from different files")]
    fn merge_across_files_panics() {
        let a = Span::new(FileId::from_raw(0), 0, 1);
        let b = Span::new(FileId::from_raw(1), 0, 1);
        let _ = a.merge(b);
    }

    #[test]
    fn len_and_point() {
        let f = FileId::from_raw(0);
        assert_eq!(Span::new(f, 4, 11).len(), 7);
        assert!(Span::point(f, 4).is_empty());
    }

    #[test]
    fn text_slices_source() {
        let src = "regA.a->sw";
        let span = Span::new(FileId::DETACHED, 5, 6);
        assert_eq!(span.text(src), "a");
    }

    #[test]
    fn dummy_span() {
        assert!(Span::DUMMY.is_dummy());
        assert!(!Span::new(FileId::DETACHED, 0, 1).is_dummy());
    }

    #[test]
    fn serde_roundtrip() {
        let s = Span::new(FileId::from_raw(1), 10, 20);
        let json = serde_json::to_string(&s).unwrap();
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
