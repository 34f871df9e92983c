// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// A block of UTF-8 text addressed by UTF-16 code unit indices.
pub trait TextStorage {
    /// The length of the underlying text, in UTF-16 code units.
    fn utf16_len(&self) -> usize;

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.utf16_len() == 0
    }

    /// Convert a UTF-16 index into a byte offset into the UTF-8 text.
    ///
    /// Returns `None` if `index` is past the end of the text or splits a surrogate pair.
    fn byte_offset(&self, index: usize) -> Option<usize>;

    /// Return whether `index` is a character boundary in the text.
    fn is_char_boundary(&self, index: usize) -> bool {
        self.byte_offset(index).is_some()
    }
}

pub(crate) fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

pub(crate) fn byte_offset(text: &str, index: usize) -> Option<usize> {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units == index {
            return Some(byte);
        }
        units += ch.len_utf16();
        if units > index {
            return None;
        }
    }
    (units == index).then_some(text.len())
}

impl TextStorage for str {
    fn utf16_len(&self) -> usize {
        utf16_len(self)
    }

    fn byte_offset(&self, index: usize) -> Option<usize> {
        byte_offset(self, index)
    }
}

impl TextStorage for String {
    fn utf16_len(&self) -> usize {
        utf16_len(self)
    }

    fn byte_offset(&self, index: usize) -> Option<usize> {
        byte_offset(self, index)
    }
}

impl TextStorage for &str {
    fn utf16_len(&self) -> usize {
        utf16_len(self)
    }

    fn byte_offset(&self, index: usize) -> Option<usize> {
        byte_offset(self, index)
    }
}

impl TextStorage for Arc<str> {
    fn utf16_len(&self) -> usize {
        utf16_len(self)
    }

    fn byte_offset(&self, index: usize) -> Option<usize> {
        byte_offset(self, index)
    }
}
