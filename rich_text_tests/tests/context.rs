// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`RichTextContext`] tests, bound and unbound.

use attributed_text::{Alignment, CharacterRange};
use rich_text_sync::{RichTextAction, RichTextColor, RichTextContext, RichTextStyle};

use crate::util::{ColorBrush, Counter, TestEnv};

#[test]
fn context_starts_with_defaults() {
    let context = RichTextContext::<ColorBrush>::new();
    assert_eq!(context.font_name().get(), rich_text_sync::DEFAULT_FONT_FAMILY);
    assert_eq!(context.font_size().get(), rich_text_sync::STANDARD_FONT_SIZE);
    assert_eq!(context.alignment().get(), Alignment::Natural);
    assert_eq!(context.selected_range().get(), CharacterRange::caret(0));
    assert!(context.styles().get().is_empty());
    assert!(!context.is_bound());
}

#[test]
fn context_property_writes_are_reported_every_time() {
    let context = RichTextContext::<ColorBrush>::new();
    let writes = Counter::new();
    let _subscription = context.font_size().subscribe(writes.slot());
    context.font_size().set(20.0);
    context.font_size().set(20.0);
    assert_eq!(writes.get(), 2);
}

#[test]
fn context_bindings_dispatch_actions() {
    let env = TestEnv::new("foo bar baz");
    env.select(4, 3);
    let underline = env.context.style_binding(RichTextStyle::Underlined);
    let background = env.context.color_binding(RichTextColor::Background);
    underline.set(true);
    background.set(Some(ColorBrush::YELLOW));
    assert!(underline.get());
    assert_eq!(background.get(), Some(ColorBrush::YELLOW));
    assert_eq!(env.binding_writes(), 2);
    env.select(0, 3);
    assert!(!underline.get());
    assert_eq!(background.get(), None);
}

#[test]
fn context_can_handle_tracks_the_surface() {
    let env = TestEnv::new("foo bar baz");
    assert!(!env.context.can_handle(&RichTextAction::Copy));
    assert!(!env.context.can_handle(&RichTextAction::Undo));
    env.select(0, 3);
    assert!(env.context.can_handle(&RichTextAction::Copy));
    env.context.handle(RichTextAction::StepSuperscript(1));
    assert!(!env.context.can_handle(&RichTextAction::StepSuperscript(1)));
    assert!(env.context.can_handle(&RichTextAction::StepSuperscript(-2)));
    assert!(env.context.can_handle(&RichTextAction::Undo));
    assert!(!env.context.can_handle(&RichTextAction::Redo));
    env.context.handle(RichTextAction::Undo);
    assert!(env.context.can_handle(&RichTextAction::Redo));
}

#[test]
fn context_unbound_mirrors_paragraph_steps() {
    let context = RichTextContext::<ColorBrush>::new();
    context.handle(RichTextAction::StepLineSpacing(-4.0));
    assert_eq!(context.line_spacing().get(), 0.0);
    context.handle(RichTextAction::StepLineSpacing(4.0));
    context.handle(RichTextAction::StepIndent(10.0));
    assert_eq!(context.line_spacing().get(), 4.0);
    assert_eq!(context.indent().get(), 10.0);
    context.handle(RichTextAction::StepSuperscript(-5));
    assert_eq!(context.superscript().get(), -1);
}
