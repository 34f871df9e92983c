// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping formatting concepts to and from primitive text attributes.
//!
//! Every function works on a [`RichTextSurface`] and an optional [`CharacterRange`]. Without a
//! range, the surface's selection is used, and when the selection is a caret the surface's
//! typing attributes are read or written instead of the document.
//!
//! Readers return `None` for empty or out-of-range ranges and for attributes the surface does
//! not support. Writers report an [`Outcome`]; none of them fail, and writing a value that is
//! already present changes nothing.

use attributed_text::{AttributeKey, AttributeValue, Attributes, Brush, CharacterRange};

use crate::RichTextSurface;

pub mod colors;
pub mod font;
pub mod highlight;
pub mod paragraph;
pub mod paste;
pub mod styles;
pub mod superscript;

/// The result of a codec write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The surface changed.
    Applied,
    /// The surface already had the requested state.
    Unchanged,
    /// The surface cannot show the attribute, or has no equivalent for the operation.
    Unsupported,
    /// The range reaches past the document or splits a character.
    OutOfRange,
}

impl Outcome {
    /// Whether the surface changed.
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    /// Combine the outcomes of two writes to the same surface.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Applied, _) | (_, Self::Applied) => Self::Applied,
            (Self::Unchanged, _) | (_, Self::Unchanged) => Self::Unchanged,
            (Self::OutOfRange, _) | (_, Self::OutOfRange) => Self::OutOfRange,
            (Self::Unsupported, Self::Unsupported) => Self::Unsupported,
        }
    }

    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Applied
        } else {
            Self::Unchanged
        }
    }
}

/// Where a codec operation reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    /// The typing attributes at the caret.
    Caret(usize),
    /// A non-empty range of the document.
    Range(CharacterRange),
}

/// Resolve `range` (or the selection) against the surface's document.
pub(crate) fn target<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Result<Target, Outcome> {
    let range = range.unwrap_or_else(|| surface.selected_range());
    if let Err(error) = range.validate(surface.document().text()) {
        tracing::debug!(%error, "skipping attribute access");
        return Err(Outcome::OutOfRange);
    }
    Ok(if range.is_caret() {
        Target::Caret(range.location)
    } else {
        Target::Range(range)
    })
}

/// The attributes at the start of `range`, or the typing attributes at a caret.
pub fn attributes<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Option<Attributes<B>> {
    match target(surface, range).ok()? {
        Target::Caret(_) => Some(surface.typing_attributes().clone()),
        Target::Range(range) => surface.document().attributes_at(range.location).cloned(),
    }
}

/// The value of `key` at the start of `range`, or in the typing attributes at a caret.
pub fn attribute<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    key: AttributeKey,
    range: Option<CharacterRange>,
) -> Option<AttributeValue<B>> {
    if !surface.supports_attribute(key) {
        return None;
    }
    match target(surface, range).ok()? {
        Target::Caret(_) => surface.typing_attributes().get(key),
        Target::Range(range) => surface.document().attribute(key, range),
    }
}

/// Store `value` over `range`.
pub fn set_attribute<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    value: AttributeValue<B>,
    range: Option<CharacterRange>,
) -> Outcome {
    if !surface.supports_attribute(value.key()) {
        return Outcome::Unsupported;
    }
    update(surface, range, |attributes| attributes.insert(value.clone()))
}

/// Remove `key` over `range`.
pub fn remove_attribute<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    key: AttributeKey,
    range: Option<CharacterRange>,
) -> Outcome {
    if !surface.supports_attribute(key) {
        return Outcome::Unsupported;
    }
    update(surface, range, |attributes| attributes.remove(key))
}

/// Run `f` on every run of `range`, or on the typing attributes at a caret.
pub fn update<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    range: Option<CharacterRange>,
    mut f: impl FnMut(&mut Attributes<B>),
) -> Outcome {
    match target(surface, range) {
        Err(outcome) => outcome,
        Ok(Target::Caret(_)) => {
            let mut attributes = surface.typing_attributes().clone();
            f(&mut attributes);
            if attributes == *surface.typing_attributes() {
                return Outcome::Unchanged;
            }
            surface.set_typing_attributes(attributes);
            Outcome::Applied
        }
        Ok(Target::Range(range)) => match surface.update_attributes(range, &mut f) {
            Ok(changed) => Outcome::from_changed(changed),
            Err(error) => {
                tracing::debug!(%error, "skipping attribute update");
                Outcome::OutOfRange
            }
        },
    }
}
