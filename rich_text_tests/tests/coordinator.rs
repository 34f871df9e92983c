// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests of a bound editor.

use std::rc::Rc;

use attributed_text::{
    Alignment, Attachment, AttributeKey, AttributeValue, AttributedText, CharacterRange,
};
use rich_text_sync::codec;
use rich_text_sync::{
    Binding, HighlightingStyle, InsertItem, MemorySurface, RichTextAction, RichTextColor,
    RichTextContext, RichTextCoordinator, RichTextStyle, RichTextSurface, SharedSurface,
    MIN_FONT_SIZE, STANDARD_FONT_SIZE,
};

use crate::util::{ColorBrush, Counter, TestEnv};

#[test]
fn coordinator_bold_toggle_scenario() {
    let env = TestEnv::new("foo bar baz");
    env.select(4, 3);
    env.context.handle(RichTextAction::SetStyle(RichTextStyle::Bold, true));
    let bold = |location, length| {
        env.read(|surface| {
            codec::styles::has_style(
                surface,
                RichTextStyle::Bold,
                Some(CharacterRange::new(location, length)),
            )
        })
    };
    assert!(bold(4, 3));
    assert!(!bold(0, 4));
    assert!(!bold(7, 4));
    assert!(env.context.has_style(RichTextStyle::Bold));
    assert_eq!(env.binding_writes(), 1);
}

#[test]
fn coordinator_font_size_step_then_clamp() {
    let env = TestEnv::new("foo bar baz");
    env.select(0, 11);
    env.context.font_size().set(666.0);
    env.context.handle(RichTextAction::StepFontSize(-1));
    env.context.handle(RichTextAction::StepFontSize(-1000));
    assert_eq!(env.context.font_size().get(), MIN_FONT_SIZE);
    let document = env.document();
    for (range, attributes) in document.runs() {
        let size = attributes.font().map(attributed_text::Font::size);
        assert_eq!(size, Some(MIN_FONT_SIZE), "run {range:?}");
    }
}

#[test]
fn coordinator_highlight_without_moving_selection() {
    let env = TestEnv::new("foo bar baz");
    env.context
        .handle(RichTextAction::SetHighlightingStyle(HighlightingStyle {
            background_color: ColorBrush::YELLOW,
            foreground_color: ColorBrush::BLUE,
        }));
    env.select(0, 1);
    env.context.highlight_range(CharacterRange::new(4, 3));
    assert_eq!(env.context.selected_range().get(), CharacterRange::new(0, 1));
    let shown = |key| {
        env.read(|surface| {
            codec::highlight::displayed_attribute(
                surface,
                key,
                Some(CharacterRange::new(4, 3)),
            )
        })
    };
    assert_eq!(
        shown(AttributeKey::BackgroundColor),
        Some(AttributeValue::BackgroundColor(ColorBrush::YELLOW))
    );
    assert_eq!(
        shown(AttributeKey::ForegroundColor),
        Some(AttributeValue::ForegroundColor(ColorBrush::BLUE))
    );
    assert_eq!(env.binding_writes(), 0);
}

#[test]
fn coordinator_selection_echo_scenario() {
    let env = TestEnv::new("foo bar baz");
    let updates = Counter::new();
    let actions = Counter::new();
    let _updates = env.context.selected_range().subscribe(updates.slot());
    let _actions = env.context.on_action(actions.slot());
    env.user(|surface| surface.select(CharacterRange::new(4, 3)));
    assert_eq!(env.context.selected_range().get(), CharacterRange::new(4, 3));
    assert_eq!(updates.get(), 1);
    assert_eq!(actions.get(), 0);
}

#[test]
fn coordinator_echo_terminates_after_one_change() {
    let env = TestEnv::new("foo bar baz");
    env.select(0, 11);
    let changes = Counter::new();
    let _changes = env.surface.on_text_changed({
        let changes = changes.clone();
        move |_| changes.hit()
    });
    env.context.alignment().set(Alignment::Center);
    assert_eq!(changes.get(), 1);
    env.context.font_name().set(String::from("Mono"));
    assert_eq!(changes.get(), 2);
    env.context.font_name().set(String::from("Mono"));
    assert_eq!(changes.get(), 2);
    assert_eq!(env.binding_writes(), 2);
}

#[test]
fn coordinator_external_edits_update_context() {
    let mut text = AttributedText::new("plain red");
    text.set_attribute(
        AttributeValue::ForegroundColor(ColorBrush::RED),
        CharacterRange::new(6, 3),
    )
    .unwrap();
    let env = TestEnv::with_surface(text, MemorySurface::default());
    assert_eq!(env.context.colors().get().get(RichTextColor::Foreground), None);
    env.user(|surface| surface.select(CharacterRange::new(7, 1)));
    assert_eq!(
        env.context.colors().get().get(RichTextColor::Foreground),
        Some(&ColorBrush::RED)
    );
    env.user(|surface| {
        surface.select(CharacterRange::caret(9));
        surface.type_text("!");
    });
    assert_eq!(env.document().text(), "plain red!");
    assert_eq!(
        env.document()
            .attribute(AttributeKey::ForegroundColor, CharacterRange::new(9, 1)),
        Some(AttributeValue::ForegroundColor(ColorBrush::RED))
    );
    assert_eq!(env.binding_writes(), 1);
    assert!(env.context.is_editing_text().get());
}

#[test]
fn coordinator_unsupported_attributes_keep_context_values() {
    let surface = MemorySurface::default().without_attribute(AttributeKey::Font);
    let env = TestEnv::with_surface(AttributedText::new("foo"), surface);
    env.context.font_size().set(30.0);
    assert_eq!(env.context.font_size().get(), 30.0);
    assert_eq!(env.binding_writes(), 0);
    env.user(|surface| surface.select(CharacterRange::new(0, 3)));
    assert_eq!(env.context.font_size().get(), 30.0);
}

#[test]
fn coordinator_unsupported_styles_keep_context_values() {
    let surface = SharedSurface::new(
        MemorySurface::<ColorBrush>::default().without_attribute(AttributeKey::Font),
    );
    let context = RichTextContext::new();
    context.set_style(RichTextStyle::Bold, true);
    context.set_style(RichTextStyle::Underlined, true);
    let _coordinator = RichTextCoordinator::new(
        Binding::from_value(AttributedText::new("foo bar")),
        surface.clone(),
        context.clone(),
    )
    .unwrap();
    assert!(context.has_style(RichTextStyle::Bold));
    assert!(!context.has_style(RichTextStyle::Underlined));
    surface.edit(|surface| surface.select(CharacterRange::new(0, 3)));
    assert!(context.has_style(RichTextStyle::Bold));
    context.toggle_style(RichTextStyle::Underlined);
    assert!(context.has_style(RichTextStyle::Bold));
    assert!(context.has_style(RichTextStyle::Underlined));
}

#[test]
fn coordinator_paste_and_copy() {
    let env = TestEnv::new("foo baz");
    env.context
        .handle(RichTextAction::PasteText(InsertItem::new(String::from("bar "), 4, true)));
    assert_eq!(env.document().text(), "foo bar baz");
    assert_eq!(env.context.selected_range().get(), CharacterRange::caret(8));
    env.context.handle(RichTextAction::PasteImage(InsertItem::new(
        Attachment::new([7_u8]),
        0,
        false,
    )));
    assert_eq!(env.document().len(), 12);
    assert_eq!(env.context.selected_range().get(), CharacterRange::caret(9));
    env.select(1, 3);
    env.context.handle(RichTextAction::Copy);
    env.read(|surface| {
        assert_eq!(surface.clipboard().map(AttributedText::text), Some("foo"));
    });
    assert_eq!(env.binding_writes(), 2);
}

#[test]
fn coordinator_replaces_the_whole_text() {
    let env = TestEnv::new("foo");
    env.context
        .handle(RichTextAction::SetAttributedString(AttributedText::new("new text")));
    assert_eq!(env.document().text(), "new text");
    assert!(!env.context.can_undo().get());
    env.context
        .handle(RichTextAction::SetAttributedString(AttributedText::new("new text")));
    assert_eq!(env.binding_writes(), 1);
}

#[test]
fn coordinator_actions_from_listeners_are_applied() {
    let env = TestEnv::new("foo bar baz");
    let context = Rc::downgrade(&env.context);
    let _italic_on_select = env.context.selected_range().subscribe(move |range| {
        if let Some(context) = context.upgrade() {
            if !range.is_caret() && !context.has_style(RichTextStyle::Italic) {
                context.set_style(RichTextStyle::Italic, true);
            }
        }
    });
    env.user(|surface| surface.select(CharacterRange::new(0, 3)));
    assert!(env.context.has_style(RichTextStyle::Italic));
    assert_eq!(env.binding_writes(), 1);
}

#[test]
fn coordinator_surface_edits_from_context_listeners_are_synced() {
    let env = TestEnv::new("foo");
    let surface = Rc::downgrade(&env.surface);
    let _type_at_end = env.context.selected_range().subscribe(move |range| {
        if *range == CharacterRange::caret(3) {
            if let Some(surface) = surface.upgrade() {
                surface.edit(|surface| surface.type_text("!"));
            }
        }
    });
    env.select(3, 0);
    assert_eq!(env.document().text(), "foo!");
    assert_eq!(env.binding_writes(), 1);
    let selection = env.read(|surface| surface.selected_range());
    assert_eq!(selection, CharacterRange::caret(4));
    assert_eq!(env.context.selected_range().get(), selection);
    assert!(env.context.can_undo().get());
}

#[test]
fn coordinator_property_writes_from_context_listeners_are_applied() {
    let env = TestEnv::new("foo bar baz");
    let context = Rc::downgrade(&env.context);
    let _size_on_select = env.context.selected_range().subscribe(move |range| {
        if range.length == 3 {
            if let Some(context) = context.upgrade() {
                context.font_size().set(30.0);
            }
        }
    });
    env.select(4, 3);
    assert_eq!(env.context.font_size().get(), 30.0);
    let size = |location, length| {
        env.read(|surface| {
            codec::font::font(surface, Some(CharacterRange::new(location, length)))
                .map(|font| font.size())
        })
    };
    assert_eq!(size(4, 3), Some(30.0));
    assert_eq!(size(0, 4), Some(STANDARD_FONT_SIZE));
    assert_eq!(env.binding_writes(), 1);
}

#[test]
fn coordinator_misc_actions() {
    let env = TestEnv::new("foo");
    env.user(|surface| surface.select(CharacterRange::caret(3)));
    assert!(env.context.is_editing_text().get());
    env.context.handle(RichTextAction::DismissKeyboard);
    assert!(!env.context.is_editing_text().get());
    env.context.handle(RichTextAction::Print);
    env.read(|surface| assert_eq!(surface.print_count(), 1));
}

#[test]
fn coordinator_release_stops_propagation() {
    let mut env = TestEnv::new("foo");
    assert!(env.is_bound());
    env.release();
    assert!(!env.context.is_bound());
    env.user(|surface| surface.type_text("!"));
    assert_eq!(env.document().text(), "foo");
    assert_eq!(env.context.selected_range().get(), CharacterRange::caret(0));
    env.context.set_style(RichTextStyle::Bold, true);
    assert!(env.context.has_style(RichTextStyle::Bold));
    env.read(|surface| {
        assert!(!codec::styles::has_style(
            surface,
            RichTextStyle::Bold,
            Some(CharacterRange::new(0, 4)),
        ));
    });
    assert_eq!(env.binding_writes(), 0);
}
