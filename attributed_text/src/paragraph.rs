// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal alignment of the lines of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the natural edge for the writing direction of the text.
    #[default]
    Natural,
    /// Align to the left edge.
    Left,
    /// Center the lines.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to fill the available width, except for the last line.
    Justified,
}

/// Paragraph-level formatting.
///
/// Paragraph styles are applied to whole paragraphs; see
/// [`AttributedText::paragraph_range`](crate::AttributedText::paragraph_range).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Indentation of every line except the first, in points.
    pub head_indent: f32,
    /// Indentation of the first line, in points.
    pub first_line_head_indent: f32,
    /// Extra space between lines, in points.
    pub line_spacing: f32,
}
