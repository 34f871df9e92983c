// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment, indentation and line spacing.
//!
//! These live in the paragraph style, which applies to whole paragraphs: writes expand the
//! range to the paragraphs it touches. At a caret, the typing attributes are updated as well, so
//! that text typed into an empty paragraph picks the style up.

use attributed_text::{
    Alignment, AttributeKey, AttributeValue, Attributes, Brush, CharacterRange, ParagraphStyle,
};

use super::{attributes, update, Outcome};
use crate::RichTextSurface;

/// The paragraph style at the start of `range`, defaulted where unset.
pub fn paragraph_style<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Option<ParagraphStyle> {
    if !surface.supports_attribute(AttributeKey::ParagraphStyle) {
        return None;
    }
    Some(
        attributes(surface, range)?
            .paragraph_style()
            .copied()
            .unwrap_or_default(),
    )
}

/// Run `f` on the paragraph style of every paragraph touched by `range`.
pub fn update_paragraph_style<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    range: Option<CharacterRange>,
    mut f: impl FnMut(&mut ParagraphStyle),
) -> Outcome {
    if !surface.supports_attribute(AttributeKey::ParagraphStyle) {
        return Outcome::Unsupported;
    }
    let range = range.unwrap_or_else(|| surface.selected_range());
    let paragraphs = match surface.document().paragraph_range(range) {
        Ok(paragraphs) => paragraphs,
        Err(error) => {
            tracing::debug!(%error, "skipping paragraph update");
            return Outcome::OutOfRange;
        }
    };
    let mut apply = |attributes: &mut Attributes<B>| {
        let before = attributes.paragraph_style().copied().unwrap_or_default();
        let mut style = before;
        f(&mut style);
        if style != before {
            attributes.insert(AttributeValue::ParagraphStyle(style));
        }
    };
    let mut outcome = Outcome::Unchanged;
    if !paragraphs.is_caret() {
        outcome = update(surface, Some(paragraphs), &mut apply);
    }
    if range.is_caret() {
        outcome = outcome.and(update(surface, Some(range), &mut apply));
    }
    outcome
}

/// The alignment at the start of `range`.
pub fn alignment<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Option<Alignment> {
    paragraph_style(surface, range).map(|style| style.alignment)
}

/// Align the paragraphs touched by `range`.
pub fn set_alignment<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    alignment: Alignment,
    range: Option<CharacterRange>,
) -> Outcome {
    update_paragraph_style(surface, range, |style| style.alignment = alignment)
}

/// The head indent at the start of `range`.
pub fn indent<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Option<f32> {
    paragraph_style(surface, range).map(|style| style.head_indent)
}

/// Move both the head and first line indents by `points`, never below zero.
pub fn step_indent<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    points: f32,
    range: Option<CharacterRange>,
) -> Outcome {
    if !points.is_finite() {
        return Outcome::Unsupported;
    }
    update_paragraph_style(surface, range, |style| {
        style.head_indent = (style.head_indent + points).max(0.0);
        style.first_line_head_indent = (style.first_line_head_indent + points).max(0.0);
    })
}

/// The line spacing at the start of `range`.
pub fn line_spacing<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &S,
    range: Option<CharacterRange>,
) -> Option<f32> {
    paragraph_style(surface, range).map(|style| style.line_spacing)
}

/// Change the line spacing by `points`, never below zero.
pub fn step_line_spacing<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    points: f32,
    range: Option<CharacterRange>,
) -> Outcome {
    if !points.is_finite() {
        return Outcome::Unsupported;
    }
    update_paragraph_style(surface, range, |style| {
        style.line_spacing = (style.line_spacing + points).max(0.0);
    })
}
