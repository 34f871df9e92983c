// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities of a native text surface, and the host that reports its changes.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt::Debug;
use core::marker::PhantomData;

use attributed_text::{
    AttributeKey, AttributedText, Attributes, Brush, CharacterRange, Error, Generation,
};

use crate::{HighlightingStyle, Signal, Subscription, Theme};

/// A highlighted range and the colors it is shown in.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight<B: Brush> {
    /// The highlighted range.
    pub range: CharacterRange,
    /// The colors of the highlight.
    pub style: HighlightingStyle<B>,
}

/// The capability set of a native text editing surface.
///
/// This is everything the synchronization core needs from a text view; any type implementing it
/// can be bound by a [`RichTextCoordinator`](crate::RichTextCoordinator). Platform differences,
/// such as attributes a text view cannot show, are expressed through these methods rather than
/// through conditional code in the core.
///
/// Implementations should only change the document's [`Generation`] when the text or its
/// attributes actually change.
pub trait RichTextSurface<B: Brush> {
    /// The document shown by the surface.
    fn document(&self) -> &AttributedText<B>;

    /// Load `document`, discarding any undo history.
    fn set_document(&mut self, document: &AttributedText<B>);

    /// The generation of the shown document.
    fn generation(&self) -> Generation {
        self.document().generation()
    }

    /// The selected range; a caret when empty.
    fn selected_range(&self) -> CharacterRange;

    /// Select `range`, which is valid for the current document.
    fn set_selected_range(&mut self, range: CharacterRange);

    /// The attributes newly typed text receives.
    fn typing_attributes(&self) -> &Attributes<B>;

    /// Replace the typing attributes.
    fn set_typing_attributes(&mut self, attributes: Attributes<B>);

    /// Run `f` on the attributes of every run in `range`; see
    /// [`AttributedText::update_attributes`].
    fn update_attributes(
        &mut self,
        range: CharacterRange,
        f: &mut dyn FnMut(&mut Attributes<B>),
    ) -> Result<bool, Error>;

    /// Replace the text in `range` with `replacement`.
    fn replace_range(
        &mut self,
        range: CharacterRange,
        replacement: &AttributedText<B>,
    ) -> Result<(), Error>;

    /// Whether the surface can show `key`.
    ///
    /// Unsupported attributes read as absent and writes to them are ignored.
    fn supports_attribute(&self, key: AttributeKey) -> bool {
        let _ = key;
        true
    }

    /// The default appearance of the surface.
    fn theme(&self) -> &Theme<B>;

    /// The colors used by [`set_highlight`](Self::set_highlight) requests.
    fn highlighting_style(&self) -> &HighlightingStyle<B>;

    /// Set the colors used for highlighting.
    fn set_highlighting_style(&mut self, style: HighlightingStyle<B>);

    /// The current highlight, if any.
    fn highlight(&self) -> Option<&Highlight<B>>;

    /// Show or clear a highlight.
    ///
    /// A highlight is a visual overlay: it changes neither the document nor the selection.
    fn set_highlight(&mut self, highlight: Option<Highlight<B>>);

    /// Copy the selection to the clipboard. Returns whether anything was copied.
    fn copy_selection(&mut self) -> bool {
        false
    }

    /// Print the document. Returns whether printing is supported.
    fn print(&mut self) -> bool {
        false
    }

    /// Whether there is a change to undo.
    fn can_undo(&self) -> bool {
        false
    }

    /// Whether there is a change to redo.
    fn can_redo(&self) -> bool {
        false
    }

    /// Undo the last change. Returns whether anything changed.
    fn undo(&mut self) -> bool {
        false
    }

    /// Redo the last undone change. Returns whether anything changed.
    fn redo(&mut self) -> bool {
        false
    }

    /// Whether the surface is currently being edited.
    fn is_editing(&self) -> bool {
        false
    }

    /// Stop editing, hiding any on-screen keyboard.
    fn dismiss_keyboard(&mut self) {}
}

/// Owns a [`RichTextSurface`] and reports its changes.
///
/// Every access goes through [`read`](Self::read) or [`edit`](Self::edit). After an edit has
/// settled and the surface is no longer borrowed, the host compares the document generation and
/// the selection with their values from before the edit and emits `text_changed` and
/// `selection_changed` accordingly, at most once each. Listeners can therefore read (and even
/// edit) the surface re-entrantly.
pub struct SharedSurface<B: Brush, S: RichTextSurface<B>> {
    surface: RefCell<S>,
    text_changed: Signal<Generation>,
    selection_changed: Signal<CharacterRange>,
    marker: PhantomData<fn() -> B>,
}

impl<B: Brush, S: RichTextSurface<B> + Debug> Debug for SharedSurface<B, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedSurface")
            .field("surface", &self.surface)
            .field("text_changed", &self.text_changed)
            .field("selection_changed", &self.selection_changed)
            .finish_non_exhaustive()
    }
}

impl<B: Brush, S: RichTextSurface<B>> SharedSurface<B, S> {
    /// Host `surface`.
    pub fn new(surface: S) -> Rc<Self> {
        Rc::new(Self {
            surface: RefCell::new(surface),
            text_changed: Signal::new(),
            selection_changed: Signal::new(),
            marker: PhantomData,
        })
    }

    /// Read from the surface.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&*self.surface.borrow())
    }

    /// Change the surface, then report what changed.
    ///
    /// # Panics
    ///
    /// If called from within `f` of another `read` or `edit` of the same surface.
    pub fn edit<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let (result, text, selection) = {
            let mut surface = self.surface.borrow_mut();
            let generation = surface.generation();
            let selection = surface.selected_range();
            let result = f(&mut *surface);
            let text = (surface.generation() != generation).then(|| surface.generation());
            let selection =
                (surface.selected_range() != selection).then(|| surface.selected_range());
            (result, text, selection)
        };
        if let Some(generation) = text {
            tracing::trace!(?generation, "surface text changed");
            self.text_changed.emit(&generation);
        }
        if let Some(range) = selection {
            tracing::trace!(?range, "surface selection changed");
            self.selection_changed.emit(&range);
        }
        result
    }

    /// Call `slot` after every edit that changed the text or its attributes.
    #[must_use = "dropping the subscription disconnects the slot immediately"]
    pub fn on_text_changed(&self, slot: impl Fn(Generation) + 'static) -> Subscription {
        self.text_changed.connect(move |generation| slot(*generation))
    }

    /// Call `slot` after every edit that changed the selection.
    #[must_use = "dropping the subscription disconnects the slot immediately"]
    pub fn on_selection_changed(&self, slot: impl Fn(CharacterRange) + 'static) -> Subscription {
        self.selection_changed.connect(move |range| slot(*range))
    }
}
