// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{CharacterRange, TextStorage};

/// Rich error type for attributed text operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus contextual information about the
/// attempted range and, when relevant, the surrogate pair enclosing the offending index.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The range provided by the caller.
    range: CharacterRange,

    /// The length in UTF-16 code units of the underlying text at the time of failure.
    len: usize,

    /// Extra detail for boundary-related errors, when available.
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The range provided by the caller.
    pub fn range(&self) -> CharacterRange {
        self.range
    }

    /// The length in UTF-16 code units of the underlying text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    pub(crate) fn invalid_bounds(range: CharacterRange, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            range,
            len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary<T: TextStorage + ?Sized>(
        text: &T,
        range: CharacterRange,
        which: Endpoint,
        index: usize,
    ) -> Self {
        // The only way to miss a boundary in UTF-16 is to land in the middle of a surrogate pair.
        let char_start = index.saturating_sub(1);
        debug_assert!(
            text.is_char_boundary(char_start),
            "the code unit before a non-boundary index starts a surrogate pair"
        );
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            range,
            len: text.utf16_len(),
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end: char_start + 2,
            }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let start = self.range.location;
        let end = self.range.end();
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                start, end, self.len
            ),
            ErrorKind::NotOnCharBoundary => {
                if let Some(b) = self.boundary {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "range {}..{}: {} index {} splits a surrogate pair (char {}..{})",
                        start, end, which, b.index, b.char_start, b.char_end
                    )
                } else {
                    write!(f, "range {}..{} splits a surrogate pair", start, end)
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range extends past the end of the text.
    InvalidBounds,

    /// Either endpoint of the range falls inside a surrogate pair.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
///
/// This type is surfaced via [`BoundaryInfo`], which is attached to [`Error`]
/// for boundary-related failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The start of the range.
    Start,

    /// The end of the range.
    End,
}

/// Details about an offending index that was not on a character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is
/// [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was invalid.
    pub which: Endpoint,

    /// The offending UTF-16 index.
    pub index: usize,

    /// The UTF-16 index where the enclosing character starts.
    pub char_start: usize,

    /// The UTF-16 index (exclusive) where the enclosing character ends.
    pub char_end: usize,
}
