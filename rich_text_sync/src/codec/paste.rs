// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inserting pasted text and images.
//!
//! Pasted content takes the current typing attributes. Each image becomes one
//! [`OBJECT_REPLACEMENT_CHARACTER`] carrying the image as its [`Attachment`].

use alloc::string::String;
use alloc::vec::Vec;

use attributed_text::{
    Attachment, AttributeKey, AttributeValue, AttributedText, Attributes, Brush, CharacterRange,
};

use super::Outcome;
use crate::{InsertItem, RichTextSurface};

/// The character standing in for an attachment in the text.
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

/// Insert `item`'s text.
pub fn paste_text<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    item: &InsertItem<String>,
) -> Outcome {
    let attributes = typing_attributes(surface);
    let content = AttributedText::with_attributes(item.content.as_str(), attributes);
    insert(surface, &content, item.index, item.move_cursor)
}

/// Insert `item`'s image.
pub fn paste_image<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    item: &InsertItem<Attachment>,
) -> Outcome {
    paste_attachments(
        surface,
        core::slice::from_ref(&item.content),
        item.index,
        item.move_cursor,
    )
}

/// Insert `item`'s images, in order.
pub fn paste_images<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    item: &InsertItem<Vec<Attachment>>,
) -> Outcome {
    paste_attachments(surface, &item.content, item.index, item.move_cursor)
}

fn paste_attachments<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    attachments: &[Attachment],
    index: usize,
    move_cursor: bool,
) -> Outcome {
    if !surface.supports_attribute(AttributeKey::Attachment) {
        return Outcome::Unsupported;
    }
    let attributes = typing_attributes(surface);
    let mut content = AttributedText::new("");
    for attachment in attachments {
        let image = AttributedText::with_attributes(
            String::from(OBJECT_REPLACEMENT_CHARACTER),
            attributes
                .clone()
                .with(AttributeValue::Attachment(attachment.clone())),
        );
        if let Err(error) = content.insert(content.len(), &image) {
            tracing::debug!(%error, "skipping image paste");
            return Outcome::OutOfRange;
        }
    }
    insert(surface, &content, index, move_cursor)
}

fn typing_attributes<B: Brush, S: RichTextSurface<B> + ?Sized>(surface: &S) -> Attributes<B> {
    let mut attributes = surface.typing_attributes().clone();
    attributes.remove(AttributeKey::Attachment);
    attributes
}

fn insert<B: Brush, S: RichTextSurface<B> + ?Sized>(
    surface: &mut S,
    content: &AttributedText<B>,
    index: usize,
    move_cursor: bool,
) -> Outcome {
    if content.is_empty() {
        return Outcome::Unchanged;
    }
    if let Err(error) = surface.replace_range(CharacterRange::caret(index), content) {
        tracing::debug!(%error, "skipping paste");
        return Outcome::OutOfRange;
    }
    if move_cursor {
        surface.set_selected_range(CharacterRange::caret(index + content.len()));
    }
    Outcome::Applied
}
