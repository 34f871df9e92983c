// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use attributed_text::{Alignment, Attachment, AttributedText, Brush, CharacterRange};

use crate::{HighlightingStyle, RichTextColor, RichTextStyle};

/// Content to insert into the text, and where.
#[derive(Clone, Debug, PartialEq)]
pub struct InsertItem<T> {
    /// The content to insert.
    pub content: T,
    /// The UTF-16 index to insert at.
    pub index: usize,
    /// Whether to place the caret after the inserted content.
    pub move_cursor: bool,
}

impl<T> InsertItem<T> {
    /// Insert `content` at `index`.
    pub fn new(content: T, index: usize, move_cursor: bool) -> Self {
        Self {
            content,
            index,
            move_cursor,
        }
    }
}

/// Every edit or formatting intent that can be dispatched to a
/// [`RichTextContext`](crate::RichTextContext).
///
/// Each variant carries exactly the data it needs. Variants without a range apply to the current
/// selection, or to the typing attributes when the selection is a caret; paragraph-level
/// variants apply to the paragraphs the selection touches.
#[derive(Clone, Debug, PartialEq)]
pub enum RichTextAction<B: Brush> {
    /// Copy the selected text.
    Copy,
    /// Stop editing and hide any on-screen keyboard.
    DismissKeyboard,
    /// Insert an image.
    PasteImage(InsertItem<Attachment>),
    /// Insert several images.
    PasteImages(InsertItem<Vec<Attachment>>),
    /// Insert plain text, formatted with the typing attributes.
    PasteText(InsertItem<String>),
    /// Print the text.
    Print,
    /// Redo the last undone change.
    Redo,
    /// Select a range.
    SelectRange(CharacterRange),
    /// Set the alignment of the selected paragraphs.
    SetAlignment(Alignment),
    /// Replace the whole text.
    SetAttributedString(AttributedText<B>),
    /// Set a color.
    SetColor(RichTextColor, B),
    /// Set the font family. An empty name resets to the theme's family.
    SetFontName(String),
    /// Set the font size in points.
    SetFontSize(f32),
    /// Highlight a range, or clear the highlight. The selection is not affected.
    SetHighlightedRange(Option<CharacterRange>),
    /// Set the colors used for highlighting.
    SetHighlightingStyle(HighlightingStyle<B>),
    /// Add or remove a style.
    SetStyle(RichTextStyle, bool),
    /// Change the font size by a number of points.
    StepFontSize(i32),
    /// Change the indentation of the selected paragraphs by a number of points.
    StepIndent(f32),
    /// Change the line spacing of the selected paragraphs by a number of points.
    StepLineSpacing(f32),
    /// Change the superscript level by a number of steps.
    StepSuperscript(i32),
    /// Flip a style.
    ToggleStyle(RichTextStyle),
    /// Undo the last change.
    Undo,
}
