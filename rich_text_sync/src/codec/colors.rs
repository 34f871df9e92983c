// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color roles.

use attributed_text::{AttributeValue, Brush, CharacterRange};

use super::{attribute, remove_attribute, set_attribute, Outcome};
use crate::{RichTextColor, RichTextColors, RichTextSurface};

/// The color of `role` at the start of `range`.
///
/// Returns `None` when the color is unset or the role has no attribute.
pub fn color<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    role: RichTextColor,
    range: Option<CharacterRange>,
) -> Option<B> {
    let key = role.attribute()?;
    attribute(surface, key, range)?.as_color().cloned()
}

/// Every color at the start of `range`.
pub fn colors<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> RichTextColors<B> {
    let mut colors = RichTextColors::default();
    for role in RichTextColor::ALL {
        colors.set(role, color(surface, role, range));
    }
    colors
}

/// Set the color of `role` over `range`.
pub fn set_color<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    role: RichTextColor,
    color: B,
    range: Option<CharacterRange>,
) -> Outcome {
    match role
        .attribute()
        .and_then(|key| AttributeValue::color(key, color))
    {
        Some(value) => set_attribute(surface, value, range),
        None => Outcome::Unsupported,
    }
}

/// Clear the color of `role` over `range`.
pub fn remove_color<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    role: RichTextColor,
    range: Option<CharacterRange>,
) -> Outcome {
    match role.attribute() {
        Some(key) => remove_attribute(surface, key, range),
        None => Outcome::Unsupported,
    }
}
