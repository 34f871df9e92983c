// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::text_storage::utf16_len;
use crate::{AttributeKey, AttributeValue, Attributes, Brush, CharacterRange, Error};

/// Opaque representation of a generation.
///
/// Obtained from [`AttributedText::generation`].
// Overflow handling: the generations are only compared,
// so wrapping is fine. This could only fail if exactly
// `u32::MAX` generations happen between two observations.
// This is implausible and so can be ignored.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct Generation(u32);

impl Generation {
    /// Make it not what it currently is.
    pub(crate) fn nudge(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Run<B: Brush> {
    /// Length in UTF-16 code units, never zero.
    len: usize,
    attributes: Attributes<B>,
}

/// A block of text with attributes for every position in it.
///
/// Attributes are stored as contiguous runs that exactly cover the text. Adjacent runs never
/// carry equal attributes.
///
/// Equality compares text and attributes only, not the [`Generation`].
#[derive(Clone, Debug)]
pub struct AttributedText<B: Brush> {
    text: String,
    runs: Vec<Run<B>>,
    generation: Generation,
}

impl<B: Brush> Default for AttributedText<B> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<B: Brush> PartialEq for AttributedText<B> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.runs == other.runs
    }
}

impl<B: Brush> AttributedText<B> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_attributes(text, Attributes::default())
    }

    /// Create an `AttributedText` with `attributes` applied to the whole text.
    pub fn with_attributes(text: impl Into<String>, attributes: Attributes<B>) -> Self {
        let text = text.into();
        let len = utf16_len(&text);
        let runs = if len == 0 {
            Vec::new()
        } else {
            alloc::vec![Run { len, attributes }]
        };
        Self {
            text,
            runs,
            generation: Generation::default(),
        }
    }

    /// Borrow the underlying text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.len).sum()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The current generation, nudged by every mutation that changed the text or its
    /// attributes.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The attributes of the character starting at `index`.
    ///
    /// Returns `None` if `index` is not inside the text.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes<B>> {
        let mut start = 0;
        for run in &self.runs {
            if index < start + run.len {
                return Some(&run.attributes);
            }
            start += run.len;
        }
        None
    }

    /// The value of `key` at the start of `range`.
    ///
    /// Returns `None` if the range is empty or invalid for this text, or if the attribute is not
    /// set there.
    pub fn attribute(&self, key: AttributeKey, range: CharacterRange) -> Option<AttributeValue<B>> {
        if range.is_caret() || range.validate(&self.text).is_err() {
            return None;
        }
        self.attributes_at(range.location)?.get(key)
    }

    /// Iterate over the runs of the text and their attributes, in order.
    pub fn runs(&self) -> Runs<'_, B> {
        Runs {
            runs: self.runs.iter(),
            start: 0,
        }
    }

    /// Store `value` over `range`.
    ///
    /// Returns whether anything changed. Setting a value that is already present over the whole
    /// range is a no-op and leaves the [`Generation`] untouched.
    pub fn set_attribute(
        &mut self,
        value: AttributeValue<B>,
        range: CharacterRange,
    ) -> Result<bool, Error> {
        self.update_attributes(range, |attributes| attributes.insert(value.clone()))
    }

    /// Remove `key` over `range`.
    ///
    /// Returns whether anything changed.
    pub fn remove_attribute(
        &mut self,
        key: AttributeKey,
        range: CharacterRange,
    ) -> Result<bool, Error> {
        self.update_attributes(range, |attributes| attributes.remove(key))
    }

    /// Run `f` on the attributes of every run inside `range`.
    ///
    /// Runs are split at the range boundaries first, so `f` only ever sees attributes of text
    /// inside the range. Returns whether any attributes changed.
    pub fn update_attributes(
        &mut self,
        range: CharacterRange,
        mut f: impl FnMut(&mut Attributes<B>),
    ) -> Result<bool, Error> {
        range.validate(&self.text)?;
        if range.is_caret() {
            return Ok(false);
        }
        let first = self.split_at(range.location);
        let last = self.split_at(range.end());
        let mut changed = false;
        for run in &mut self.runs[first..last] {
            let before = run.attributes.clone();
            f(&mut run.attributes);
            changed |= before != run.attributes;
        }
        self.normalize();
        if changed {
            self.generation.nudge();
        }
        Ok(changed)
    }

    /// Replace the text in `range` with `replacement`, including its attributes.
    pub fn replace_range(
        &mut self,
        range: CharacterRange,
        replacement: &Self,
    ) -> Result<(), Error> {
        let bytes = range.validate(&self.text)?;
        if range.is_caret() && replacement.is_empty() {
            return Ok(());
        }
        let first = self.split_at(range.location);
        let last = self.split_at(range.end());
        self.text.replace_range(bytes, &replacement.text);
        let tail = self.runs.split_off(last);
        self.runs.truncate(first);
        self.runs.extend(replacement.runs.iter().cloned());
        self.runs.extend(tail);
        self.normalize();
        self.generation.nudge();
        Ok(())
    }

    /// Insert `insertion` at `index`.
    pub fn insert(&mut self, index: usize, insertion: &Self) -> Result<(), Error> {
        self.replace_range(CharacterRange::caret(index), insertion)
    }

    /// Replace the whole content, text and attributes, with `other`.
    pub fn set_content(&mut self, other: &Self) {
        if self != other {
            self.text.clone_from(&other.text);
            self.runs.clone_from(&other.runs);
            self.generation.nudge();
        }
    }

    /// Copy out the text and attributes in `range`.
    pub fn slice(&self, range: CharacterRange) -> Result<Self, Error> {
        let bytes = range.validate(&self.text)?;
        let mut runs = Vec::new();
        for (run_range, attributes) in self.runs() {
            let start = run_range.location.max(range.location);
            let end = run_range.end().min(range.end());
            if start < end {
                runs.push(Run {
                    len: end - start,
                    attributes: attributes.clone(),
                });
            }
        }
        Ok(Self {
            text: String::from(&self.text[bytes]),
            runs,
            generation: Generation::default(),
        })
    }

    /// Expand `range` to cover the paragraphs it touches.
    ///
    /// Paragraphs are separated by `\n`; the separator belongs to the paragraph it terminates.
    pub fn paragraph_range(&self, range: CharacterRange) -> Result<CharacterRange, Error> {
        range.validate(&self.text)?;
        let last = if range.is_caret() {
            range.location
        } else {
            range.end() - 1
        };
        let mut start = 0;
        let mut end = None;
        let mut index = 0;
        for ch in self.text.chars() {
            if ch == '\n' {
                if index < range.location {
                    start = index + 1;
                } else if index >= last {
                    end = Some(index + 1);
                    break;
                }
            }
            index += ch.len_utf16();
        }
        let end = end.unwrap_or(index);
        Ok(CharacterRange::new(start, end - start))
    }

    /// Ensure a run boundary at `index`, returning the index of the run starting there.
    ///
    /// `index` must be a valid position in the text.
    fn split_at(&mut self, index: usize) -> usize {
        let mut start = 0;
        for i in 0..self.runs.len() {
            let len = self.runs[i].len;
            if index == start {
                return i;
            }
            if index < start + len {
                let tail = Run {
                    len: start + len - index,
                    attributes: self.runs[i].attributes.clone(),
                };
                self.runs[i].len = index - start;
                self.runs.insert(i + 1, tail);
                return i + 1;
            }
            start += len;
        }
        self.runs.len()
    }

    /// Merge adjacent runs with equal attributes.
    fn normalize(&mut self) {
        self.runs.dedup_by(|next, prev| {
            if next.attributes == prev.attributes {
                prev.len += next.len;
                true
            } else {
                false
            }
        });
    }
}

/// Iterator over the runs of an [`AttributedText`].
///
/// Created by [`AttributedText::runs`].
#[derive(Clone, Debug)]
pub struct Runs<'a, B: Brush> {
    runs: core::slice::Iter<'a, Run<B>>,
    start: usize,
}

impl<'a, B: Brush> Iterator for Runs<'a, B> {
    type Item = (CharacterRange, &'a Attributes<B>);

    fn next(&mut self) -> Option<Self::Item> {
        let run = self.runs.next()?;
        let range = CharacterRange::new(self.start, run.len);
        self.start += run.len;
        Some((range, &run.attributes))
    }
}
