// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, TextStorage};

/// A span of UTF-16 code units in an attributed text.
///
/// A range with a `length` of zero denotes a caret position.
///
/// `CharacterRange` is not tied to a specific text. Use [`CharacterRange::validate`] (or any
/// [`AttributedText`] method, which validates internally) to check it against a text before use.
///
/// ## Example
///
/// ```
/// use attributed_text::CharacterRange;
///
/// let range = CharacterRange::new(4, 3);
/// assert_eq!(range.end(), 7);
/// assert!(range.validate(&"foo bar baz").is_ok());
/// assert!(range.validate(&"foo").is_err());
/// ```
///
/// [`AttributedText`]: crate::AttributedText
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharacterRange {
    /// The index of the first code unit in the range.
    pub location: usize,
    /// The number of code units in the range.
    pub length: usize,
}

impl CharacterRange {
    /// Create a range starting at `location` spanning `length` code units.
    #[must_use]
    #[inline]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Create an empty range, a caret at `location`.
    #[must_use]
    #[inline]
    pub const fn caret(location: usize) -> Self {
        Self {
            location,
            length: 0,
        }
    }

    /// The end index (exclusive).
    ///
    /// Saturates rather than overflowing, so absurd ranges still fail validation.
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Whether this range is a caret, i.e. it has no length.
    #[must_use]
    #[inline]
    pub const fn is_caret(self) -> bool {
        self.length == 0
    }

    /// Whether `index` lies within this range.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        self.location <= index && index < self.end()
    }

    /// Whether this range shares at least one code unit with `other`.
    ///
    /// Carets never intersect anything.
    #[must_use]
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.length > 0
            && other.length > 0
            && self.location < other.end()
            && other.location < self.end()
    }

    /// Returns this range as a `Range<usize>` of UTF-16 indices.
    #[must_use]
    #[inline]
    pub const fn as_range(self) -> Range<usize> {
        self.location..self.end()
    }

    /// Check this range against `text`, returning the equivalent byte range on success.
    pub fn validate<T: TextStorage + ?Sized>(self, text: &T) -> Result<Range<usize>, Error> {
        let text_len = text.utf16_len();
        if self.end() > text_len {
            return Err(Error::invalid_bounds(self, text_len));
        }
        let Some(start) = text.byte_offset(self.location) else {
            return Err(Error::not_on_char_boundary(
                text,
                self,
                Endpoint::Start,
                self.location,
            ));
        };
        let Some(end) = text.byte_offset(self.end()) else {
            return Err(Error::not_on_char_boundary(
                text,
                self,
                Endpoint::End,
                self.end(),
            ));
        };
        Ok(start..end)
    }
}

impl From<Range<usize>> for CharacterRange {
    #[inline]
    fn from(value: Range<usize>) -> Self {
        Self::new(value.start, value.end.saturating_sub(value.start))
    }
}

impl From<CharacterRange> for Range<usize> {
    #[inline]
    fn from(value: CharacterRange) -> Self {
        value.as_range()
    }
}

#[cfg(test)]
mod tests {
    use super::CharacterRange;
    use crate::{Endpoint, ErrorKind};

    #[test]
    fn validates_ok_ranges() {
        let t = "Hello!";
        assert_eq!(CharacterRange::caret(0).validate(&t), Ok(0..0));
        assert_eq!(CharacterRange::new(0, 6).validate(&t), Ok(0..6));
        assert_eq!(CharacterRange::new(1, 2).validate(&t), Ok(1..3));
    }

    #[test]
    fn validate_maps_to_bytes() {
        let t = "éclair";
        assert_eq!(CharacterRange::new(1, 2).validate(&t), Ok(2..4));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let t = "Hello!";
        let err = CharacterRange::new(0, 7).validate(&t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.range(), CharacterRange::new(0, 7));
        assert_eq!(err.len(), 6);
    }

    #[test]
    fn rejects_overflowing_length() {
        let t = "Hello!";
        let err = CharacterRange::new(3, usize::MAX).validate(&t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
    }

    #[test]
    fn rejects_split_surrogate_start() {
        // "🇯" needs two UTF-16 code units; index 1 is inside the pair.
        let t = "🇯🇵";
        let err = CharacterRange::new(1, 1).validate(&t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::Start);
        assert_eq!(b.index, 1);
        assert_eq!(b.char_start, 0);
        assert_eq!(b.char_end, 2);
    }

    #[test]
    fn rejects_split_surrogate_end() {
        let t = "🇯🇵";
        let err = CharacterRange::new(0, 3).validate(&t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::End);
        assert_eq!(b.index, 3);
        assert_eq!(b.char_start, 2);
        assert_eq!(b.char_end, 4);
    }

    #[test]
    fn intersection_and_containment() {
        let bar = CharacterRange::new(4, 3);
        assert!(bar.contains(4));
        assert!(!bar.contains(7));
        assert!(bar.intersects(CharacterRange::new(6, 5)));
        assert!(!bar.intersects(CharacterRange::new(7, 2)));
        assert!(!bar.intersects(CharacterRange::caret(5)));
        assert_eq!(CharacterRange::from(2..5), CharacterRange::new(2, 3));
    }
}
