// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The highlight overlay.
//!
//! A highlight recolors a range on screen without touching the document or the selection.

use attributed_text::{AttributeKey, AttributeValue, Brush, CharacterRange};

use super::{attribute, Outcome};
use crate::{Highlight, HighlightingStyle, RichTextSurface};

/// The highlighted range, if any.
pub fn highlighted_range<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
) -> Option<CharacterRange> {
    surface.highlight().map(|highlight| highlight.range)
}

/// Highlight `range` in the surface's highlighting style, or clear the highlight.
pub fn set_highlight<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    range: Option<CharacterRange>,
) -> Outcome {
    let highlight = match range {
        Some(range) => {
            if let Err(error) = range.validate(surface.document().text()) {
                tracing::debug!(%error, "skipping highlight");
                return Outcome::OutOfRange;
            }
            Some(Highlight {
                range,
                style: surface.highlighting_style().clone(),
            })
        }
        None => None,
    };
    if surface.highlight() == highlight.as_ref() {
        return Outcome::Unchanged;
    }
    surface.set_highlight(highlight);
    Outcome::Applied
}

/// Change the highlighting style, restyling the current highlight.
pub fn set_highlighting_style<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    style: &HighlightingStyle<B>,
) -> Outcome {
    if surface.highlighting_style() == style {
        return Outcome::Unchanged;
    }
    surface.set_highlighting_style(style.clone());
    if let Some(range) = highlighted_range(surface) {
        surface.set_highlight(Some(Highlight {
            range,
            style: style.clone(),
        }));
    }
    Outcome::Applied
}

/// The value of `key` at the start of `range` as shown on screen, with the highlight applied.
///
/// Text without its own foreground or background color shows the theme's colors.
pub fn displayed_attribute<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    key: AttributeKey,
    range: Option<CharacterRange>,
) -> Option<AttributeValue<B>> {
    let range = range.unwrap_or_else(|| surface.selected_range());
    if range.validate(surface.document().text()).is_err() {
        return None;
    }
    let highlight = surface
        .highlight()
        .filter(|highlight| !range.is_caret() && highlight.range.contains(range.location));
    if let Some(highlight) = highlight {
        match key {
            AttributeKey::ForegroundColor => {
                let color = highlight.style.foreground_color.clone();
                return Some(AttributeValue::ForegroundColor(color));
            }
            AttributeKey::BackgroundColor => {
                let color = highlight.style.background_color.clone();
                return Some(AttributeValue::BackgroundColor(color));
            }
            _ => {}
        }
    }
    let value = attribute(surface, key, Some(range));
    if value.is_some() {
        return value;
    }
    let theme = surface.theme();
    match key {
        AttributeKey::ForegroundColor => {
            Some(AttributeValue::ForegroundColor(theme.font_color.clone()))
        }
        AttributeKey::BackgroundColor => Some(AttributeValue::BackgroundColor(
            theme.background_color.clone(),
        )),
        _ => None,
    }
}
