// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Superscript and subscript levels.

use attributed_text::{AttributeKey, AttributeValue, Brush, CharacterRange};

use super::{attributes, update, Outcome};
use crate::{RichTextSurface, SUPERSCRIPT_LEVELS};

/// The superscript level at the start of `range`: positive for superscript, negative for
/// subscript, zero for neither.
pub fn superscript<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Option<i8> {
    if !surface.supports_attribute(AttributeKey::Superscript) {
        return None;
    }
    match attributes(surface, range)?.get(AttributeKey::Superscript) {
        Some(AttributeValue::Superscript(level)) => Some(level),
        _ => Some(0),
    }
}

/// Move every run in `range` by `steps` levels, within [`SUPERSCRIPT_LEVELS`].
pub fn step_superscript<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    steps: i32,
    range: Option<CharacterRange>,
) -> Outcome {
    if !surface.supports_attribute(AttributeKey::Superscript) {
        return Outcome::Unsupported;
    }
    update(surface, range, |attributes| {
        let current = match attributes.get(AttributeKey::Superscript) {
            Some(AttributeValue::Superscript(level)) => level,
            _ => 0,
        };
        let level = clamp_level(i32::from(current).saturating_add(steps));
        if level == 0 {
            attributes.remove(AttributeKey::Superscript);
        } else {
            attributes.insert(AttributeValue::Superscript(level));
        }
    })
}

pub(crate) fn clamp_level(level: i32) -> i8 {
    let min = *SUPERSCRIPT_LEVELS.start();
    let max = *SUPERSCRIPT_LEVELS.end();
    i8::try_from(level.clamp(i32::from(min), i32::from(max))).unwrap_or_default()
}
