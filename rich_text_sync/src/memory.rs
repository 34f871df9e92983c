// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-process text surface.

use alloc::vec::Vec;

use attributed_text::{AttributeKey, AttributedText, Attributes, Brush, CharacterRange, Error};
use smallvec::SmallVec;

use crate::{Highlight, HighlightingStyle, RichTextSurface, Theme};

/// Maximum number of undo steps kept.
const HISTORY_LIMIT: usize = 256;

#[derive(Clone, Debug)]
struct Snapshot<B: Brush> {
    document: AttributedText<B>,
    selection: CharacterRange,
}

/// A [`RichTextSurface`] that keeps everything in memory.
///
/// This is the surface used by tests and headless hosts. Besides the surface capabilities it
/// can simulate user input with [`type_text`](Self::type_text) and [`select`](Self::select),
/// and it keeps an undo history of document snapshots.
///
/// Typing attributes follow the selection: placing a caret picks up the attributes of the
/// character before it, selecting a range picks up those of its first character.
#[derive(Clone, Debug)]
pub struct MemorySurface<B: Brush> {
    document: AttributedText<B>,
    selection: CharacterRange,
    typing_attributes: Attributes<B>,
    theme: Theme<B>,
    highlighting_style: HighlightingStyle<B>,
    highlight: Option<Highlight<B>>,
    unsupported: SmallVec<[AttributeKey; 2]>,
    undo: Vec<Snapshot<B>>,
    redo: Vec<Snapshot<B>>,
    clipboard: Option<AttributedText<B>>,
    editing: bool,
    print_count: usize,
}

impl<B: Brush> Default for MemorySurface<B> {
    fn default() -> Self {
        Self::new(AttributedText::new(""))
    }
}

impl<B: Brush> MemorySurface<B> {
    /// A surface showing `document`, with a caret at its end.
    pub fn new(document: AttributedText<B>) -> Self {
        let mut surface = Self {
            selection: CharacterRange::caret(document.len()),
            document,
            typing_attributes: Attributes::new(),
            theme: Theme::default(),
            highlighting_style: HighlightingStyle::default(),
            highlight: None,
            unsupported: SmallVec::new(),
            undo: Vec::new(),
            redo: Vec::new(),
            clipboard: None,
            editing: false,
            print_count: 0,
        };
        surface.reset_typing_attributes();
        surface
    }

    /// Use `theme` as the default appearance.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme<B>) -> Self {
        self.theme = theme;
        self
    }

    /// Treat `key` as an attribute this surface cannot show.
    #[must_use]
    pub fn without_attribute(mut self, key: AttributeKey) -> Self {
        if !self.unsupported.contains(&key) {
            self.unsupported.push(key);
        }
        self
    }

    /// Type `text` over the selection, as a user would.
    ///
    /// The text takes the typing attributes and the caret ends up after it.
    pub fn type_text(&mut self, text: &str) {
        let mut attributes = self.typing_attributes.clone();
        attributes.remove(AttributeKey::Attachment);
        let typed = AttributedText::with_attributes(text, attributes.clone());
        let range = self.selection;
        if self.replace_range(range, &typed).is_ok() {
            self.editing = true;
            self.selection = CharacterRange::caret(range.location + typed.len());
            self.typing_attributes = attributes;
        }
    }

    /// Select `range` as a user would, clamped to the document.
    pub fn select(&mut self, range: CharacterRange) {
        let len = self.document.len();
        let location = range.location.min(len);
        let range = CharacterRange::new(location, range.length.min(len - location));
        if range.validate(self.document.text()).is_ok() {
            self.editing = true;
            self.set_selected_range(range);
        }
    }

    /// The most recently copied text.
    pub fn clipboard(&self) -> Option<&AttributedText<B>> {
        self.clipboard.as_ref()
    }

    /// How often the document was printed.
    pub fn print_count(&self) -> usize {
        self.print_count
    }

    fn record(&mut self, document: AttributedText<B>, selection: CharacterRange) {
        if self.undo.len() == HISTORY_LIMIT {
            self.undo.remove(0);
        }
        self.undo.push(Snapshot {
            document,
            selection,
        });
        self.redo.clear();
    }

    fn restore(&mut self, snapshot: &Snapshot<B>) {
        self.document.set_content(&snapshot.document);
        self.selection = snapshot.selection;
        self.clamp_highlight();
        self.reset_typing_attributes();
    }

    fn snapshot(&self) -> Snapshot<B> {
        Snapshot {
            document: self.document.clone(),
            selection: self.selection,
        }
    }

    fn reset_typing_attributes(&mut self) {
        let index = if self.selection.is_caret() {
            self.selection.location.saturating_sub(1)
        } else {
            self.selection.location
        };
        let mut attributes = self
            .document
            .attributes_at(index)
            .cloned()
            .unwrap_or_default();
        attributes.remove(AttributeKey::Attachment);
        self.typing_attributes = attributes;
    }

    fn clamp_highlight(&mut self) {
        if let Some(highlight) = &self.highlight {
            if highlight.range.validate(self.document.text()).is_err() {
                self.highlight = None;
            }
        }
    }
}

impl<B: Brush> RichTextSurface<B> for MemorySurface<B> {
    fn document(&self) -> &AttributedText<B> {
        &self.document
    }

    fn set_document(&mut self, document: &AttributedText<B>) {
        self.document.set_content(document);
        self.undo.clear();
        self.redo.clear();
        if self.selection.validate(self.document.text()).is_err() {
            self.selection = CharacterRange::caret(self.document.len());
        }
        self.clamp_highlight();
        self.reset_typing_attributes();
    }

    fn selected_range(&self) -> CharacterRange {
        self.selection
    }

    fn set_selected_range(&mut self, range: CharacterRange) {
        self.selection = range;
        self.reset_typing_attributes();
    }

    fn typing_attributes(&self) -> &Attributes<B> {
        &self.typing_attributes
    }

    fn set_typing_attributes(&mut self, attributes: Attributes<B>) {
        self.typing_attributes = attributes;
    }

    fn update_attributes(
        &mut self,
        range: CharacterRange,
        f: &mut dyn FnMut(&mut Attributes<B>),
    ) -> Result<bool, Error> {
        let before = self.snapshot();
        let changed = self.document.update_attributes(range, f)?;
        if changed {
            self.record(before.document, before.selection);
        }
        Ok(changed)
    }

    fn replace_range(
        &mut self,
        range: CharacterRange,
        replacement: &AttributedText<B>,
    ) -> Result<(), Error> {
        let before = self.snapshot();
        self.document.replace_range(range, replacement)?;
        if self.document.generation() == before.document.generation() {
            return Ok(());
        }
        self.record(before.document, before.selection);
        let selection = self.selection;
        let shifted = if selection.end() <= range.location {
            selection
        } else if selection.location >= range.end() {
            CharacterRange::new(
                selection.location - range.length + replacement.len(),
                selection.length,
            )
        } else {
            CharacterRange::caret(range.location + replacement.len())
        };
        if shifted != selection {
            self.selection = shifted;
            self.reset_typing_attributes();
        }
        self.clamp_highlight();
        Ok(())
    }

    fn supports_attribute(&self, key: AttributeKey) -> bool {
        !self.unsupported.contains(&key)
    }

    fn theme(&self) -> &Theme<B> {
        &self.theme
    }

    fn highlighting_style(&self) -> &HighlightingStyle<B> {
        &self.highlighting_style
    }

    fn set_highlighting_style(&mut self, style: HighlightingStyle<B>) {
        self.highlighting_style = style;
    }

    fn highlight(&self) -> Option<&Highlight<B>> {
        self.highlight.as_ref()
    }

    fn set_highlight(&mut self, highlight: Option<Highlight<B>>) {
        self.highlight = highlight;
    }

    fn copy_selection(&mut self) -> bool {
        if self.selection.is_caret() {
            return false;
        }
        match self.document.slice(self.selection) {
            Ok(copied) => {
                self.clipboard = Some(copied);
                true
            }
            Err(_) => false,
        }
    }

    fn print(&mut self) -> bool {
        self.print_count += 1;
        true
    }

    fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo.pop() else {
            return false;
        };
        self.redo.push(self.snapshot());
        self.restore(&snapshot);
        true
    }

    fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo.pop() else {
            return false;
        };
        self.undo.push(self.snapshot());
        self.restore(&snapshot);
        true
    }

    fn is_editing(&self) -> bool {
        self.editing
    }

    fn dismiss_keyboard(&mut self) {
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::MemorySurface;
    use crate::RichTextSurface;
    use attributed_text::{
        AttributeKey, AttributeValue, AttributedText, Attributes, CharacterRange,
    };

    fn surface() -> MemorySurface<u32> {
        MemorySurface::new(AttributedText::new("foo bar baz"))
    }

    #[test]
    fn typing_attributes_follow_the_caret() {
        let mut text = AttributedText::new("foo bar baz");
        text.set_attribute(AttributeValue::ForegroundColor(3), CharacterRange::new(4, 3))
            .unwrap();
        let mut surface = MemorySurface::<u32>::new(text);
        surface.select(CharacterRange::caret(7));
        assert_eq!(
            surface.typing_attributes().get(AttributeKey::ForegroundColor),
            Some(AttributeValue::ForegroundColor(3))
        );
        surface.type_text("s");
        assert_eq!(surface.document().text(), "foo bars baz");
        assert_eq!(surface.selected_range(), CharacterRange::caret(8));
        assert_eq!(
            surface
                .document()
                .attribute(AttributeKey::ForegroundColor, CharacterRange::new(7, 1)),
            Some(AttributeValue::ForegroundColor(3))
        );
        surface.select(CharacterRange::caret(0));
        assert_eq!(*surface.typing_attributes(), Attributes::new());
    }

    #[test]
    fn undo_and_redo_restore_snapshots() {
        let mut surface = surface();
        let original = surface.document().clone();
        surface.select(CharacterRange::new(4, 3));
        surface.type_text("qux");
        let edited = surface.document().clone();
        assert!(surface.can_undo());
        assert!(surface.undo());
        assert_eq!(*surface.document(), original);
        assert_eq!(surface.selected_range(), CharacterRange::new(4, 3));
        assert!(surface.can_redo());
        assert!(surface.redo());
        assert_eq!(*surface.document(), edited);
        assert!(!surface.redo());
    }

    #[test]
    fn unchanged_edits_leave_no_history() {
        let mut surface = surface();
        let changed = surface
            .update_attributes(CharacterRange::new(0, 3), &mut |_: &mut Attributes<u32>| {})
            .unwrap();
        assert!(!changed);
        assert!(!surface.can_undo());
    }

    #[test]
    fn loading_a_document_clears_history_and_clamps_selection() {
        let mut surface = surface();
        surface.type_text("!");
        surface.set_document(&AttributedText::new("hi"));
        assert!(!surface.can_undo());
        assert_eq!(surface.selected_range(), CharacterRange::caret(2));
    }

    #[test]
    fn edits_shift_the_selection() {
        let mut surface = surface();
        surface.select(CharacterRange::new(8, 3));
        surface
            .replace_range(CharacterRange::new(0, 3), &AttributedText::new("f"))
            .unwrap();
        assert_eq!(surface.selected_range(), CharacterRange::new(6, 3));
        surface
            .replace_range(CharacterRange::new(5, 2), &AttributedText::new(""))
            .unwrap();
        assert_eq!(surface.selected_range(), CharacterRange::caret(5));
    }

    #[test]
    fn copy_needs_a_selection() {
        let mut surface = surface();
        assert!(!surface.copy_selection());
        surface.select(CharacterRange::new(4, 3));
        assert!(surface.copy_selection());
        assert_eq!(surface.clipboard().map(AttributedText::text), Some("bar"));
    }
}
