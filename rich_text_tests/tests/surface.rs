// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`SharedSurface`] notification tests.

use attributed_text::{AttributedText, CharacterRange};
use rich_text_sync::{MemorySurface, RichTextSurface, SharedSurface};

use crate::util::{ColorBrush, Counter};

#[test]
fn surface_reports_settled_edits_once() {
    let surface = SharedSurface::new(MemorySurface::<ColorBrush>::new(AttributedText::new("foo")));
    let text = Counter::new();
    let selection = Counter::new();
    let _text = surface.on_text_changed({
        let text = text.clone();
        move |_| text.hit()
    });
    let _selection = surface.on_selection_changed({
        let selection = selection.clone();
        move |_| selection.hit()
    });
    surface.edit(|surface| {
        surface.type_text("a");
        surface.type_text("b");
    });
    assert_eq!(text.get(), 1);
    assert_eq!(selection.get(), 1);
    surface.edit(|surface| surface.select(CharacterRange::caret(5)));
    assert_eq!(text.get(), 1);
    assert_eq!(selection.get(), 1);
}

#[test]
fn surface_listeners_can_read_and_edit() {
    let surface = SharedSurface::new(MemorySurface::<ColorBrush>::new(AttributedText::new("foo")));
    let _text = surface.on_text_changed({
        let surface = std::rc::Rc::downgrade(&surface);
        move |_| {
            let Some(surface) = surface.upgrade() else {
                return;
            };
            if surface.read(|surface| surface.document().len()) < 6 {
                surface.edit(|surface| surface.type_text("!"));
            }
        }
    });
    surface.edit(|surface| surface.type_text("?"));
    surface.read(|surface| assert_eq!(surface.document().text(), "foo?!!"));
}

#[test]
fn surface_undo_walks_back_through_edits() {
    let surface = SharedSurface::new(MemorySurface::<ColorBrush>::new(AttributedText::new("")));
    surface.edit(|surface| {
        surface.type_text("one");
        surface.type_text(" two");
    });
    assert!(surface.edit(|surface| surface.undo()));
    surface.read(|surface| assert_eq!(surface.document().text(), "one"));
    assert!(surface.edit(|surface| surface.undo()));
    assert!(!surface.edit(|surface| surface.undo()));
    surface.read(|surface| {
        assert_eq!(surface.document().text(), "");
        assert!(surface.can_redo());
    });
}
