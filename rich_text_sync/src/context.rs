// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable editing state.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::fmt;

use attributed_text::{Alignment, Brush, CharacterRange};

use crate::codec::superscript::clamp_level;
use crate::{
    Binding, HighlightingStyle, Observable, RichTextAction, RichTextColor, RichTextColors,
    RichTextStyle, Signal, StyleSet, Subscription, DEFAULT_FONT_FAMILY, MIN_FONT_SIZE,
    STANDARD_FONT_SIZE, SUPERSCRIPT_LEVELS,
};

/// A read-only view of a [`RichTextContext`] property.
#[derive(Debug)]
pub struct Observed<'a, T: Clone + 'static>(&'a Observable<T>);

impl<T: Clone + 'static> Observed<'_, T> {
    /// The current value.
    pub fn get(&self) -> T {
        self.0.get()
    }

    /// Call `slot` with every new value.
    #[must_use = "dropping the subscription disconnects the slot immediately"]
    pub fn subscribe(&self, slot: impl Fn(&T) + 'static) -> Subscription {
        self.0.subscribe(slot)
    }
}

/// Returned when binding a [`RichTextContext`] that already has a coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindError;

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the context is already bound to a coordinator")
    }
}

impl core::error::Error for BindError {}

/// The observable state of one rich text editor.
///
/// The context owns no text. While a [`RichTextCoordinator`](crate::RichTextCoordinator) is
/// bound, its properties mirror the formatting at the surface's selection, and every action
/// passed to [`handle`](Self::handle) is applied to the surface. Without a coordinator, actions
/// only update the properties, so a context can drive a toolbar on its own.
///
/// Most properties are read-only; `font_name`, `font_size` and `alignment` can also be written
/// directly, which applies them to the selection like the matching action would.
pub struct RichTextContext<B: Brush + 'static> {
    pub(crate) selected_range: Observable<CharacterRange>,
    pub(crate) highlighted_range: Observable<Option<CharacterRange>>,
    pub(crate) highlighting_style: Observable<HighlightingStyle<B>>,
    pub(crate) styles: Observable<StyleSet>,
    pub(crate) font_name: Observable<String>,
    pub(crate) font_size: Observable<f32>,
    pub(crate) colors: Observable<RichTextColors<B>>,
    pub(crate) alignment: Observable<Alignment>,
    pub(crate) indent: Observable<f32>,
    pub(crate) line_spacing: Observable<f32>,
    pub(crate) superscript: Observable<i8>,
    pub(crate) can_copy: Observable<bool>,
    pub(crate) can_undo: Observable<bool>,
    pub(crate) can_redo: Observable<bool>,
    pub(crate) is_editing_text: Observable<bool>,
    actions: Signal<RichTextAction<B>>,
    bound: Cell<bool>,
}

impl<B: Brush + 'static> fmt::Debug for RichTextContext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichTextContext")
            .field("selected_range", &self.selected_range.get())
            .field("highlighted_range", &self.highlighted_range.get())
            .field("styles", &self.styles.get())
            .field("font_name", &self.font_name.get())
            .field("font_size", &self.font_size.get())
            .field("alignment", &self.alignment.get())
            .field("bound", &self.bound.get())
            .finish_non_exhaustive()
    }
}

impl<B: Brush + 'static> RichTextContext<B> {
    /// A context in its default state, not bound to any coordinator.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            selected_range: Observable::new(CharacterRange::default()),
            highlighted_range: Observable::new(None),
            highlighting_style: Observable::new(HighlightingStyle::default()),
            styles: Observable::new(StyleSet::empty()),
            font_name: Observable::new(String::from(DEFAULT_FONT_FAMILY)),
            font_size: Observable::new(STANDARD_FONT_SIZE),
            colors: Observable::new(RichTextColors::default()),
            alignment: Observable::new(Alignment::default()),
            indent: Observable::new(0.0),
            line_spacing: Observable::new(0.0),
            superscript: Observable::new(0),
            can_copy: Observable::new(false),
            can_undo: Observable::new(false),
            can_redo: Observable::new(false),
            is_editing_text: Observable::new(false),
            actions: Signal::new(),
            bound: Cell::new(false),
        })
    }

    /// The selected range of the text.
    pub fn selected_range(&self) -> Observed<'_, CharacterRange> {
        Observed(&self.selected_range)
    }

    /// The highlighted range, if any.
    pub fn highlighted_range(&self) -> Observed<'_, Option<CharacterRange>> {
        Observed(&self.highlighted_range)
    }

    /// The colors of the highlight.
    pub fn highlighting_style(&self) -> Observed<'_, HighlightingStyle<B>> {
        Observed(&self.highlighting_style)
    }

    /// The active styles.
    pub fn styles(&self) -> Observed<'_, StyleSet> {
        Observed(&self.styles)
    }

    /// The font family; writable.
    pub fn font_name(&self) -> &Observable<String> {
        &self.font_name
    }

    /// The font size in points; writable.
    pub fn font_size(&self) -> &Observable<f32> {
        &self.font_size
    }

    /// The set colors.
    pub fn colors(&self) -> Observed<'_, RichTextColors<B>> {
        Observed(&self.colors)
    }

    /// The paragraph alignment; writable.
    pub fn alignment(&self) -> &Observable<Alignment> {
        &self.alignment
    }

    /// The paragraph head indent in points.
    pub fn indent(&self) -> Observed<'_, f32> {
        Observed(&self.indent)
    }

    /// The paragraph line spacing in points.
    pub fn line_spacing(&self) -> Observed<'_, f32> {
        Observed(&self.line_spacing)
    }

    /// The superscript level; negative for subscript.
    pub fn superscript(&self) -> Observed<'_, i8> {
        Observed(&self.superscript)
    }

    /// Whether there is a selection to copy.
    pub fn can_copy(&self) -> Observed<'_, bool> {
        Observed(&self.can_copy)
    }

    /// Whether there is a change to undo.
    pub fn can_undo(&self) -> Observed<'_, bool> {
        Observed(&self.can_undo)
    }

    /// Whether there is a change to redo.
    pub fn can_redo(&self) -> Observed<'_, bool> {
        Observed(&self.can_redo)
    }

    /// Whether the text is being edited.
    pub fn is_editing_text(&self) -> Observed<'_, bool> {
        Observed(&self.is_editing_text)
    }

    /// Whether a coordinator is bound to this context.
    pub fn is_bound(&self) -> bool {
        self.bound.get()
    }

    /// Dispatch `action`.
    ///
    /// The action is published to [`on_action`](Self::on_action) listeners, which include the
    /// bound coordinator. Without a coordinator, the properties are updated directly instead.
    pub fn handle(&self, action: RichTextAction<B>) {
        tracing::trace!(?action, bound = self.bound.get(), "handling action");
        self.actions.emit(&action);
        if !self.bound.get() {
            self.mirror(&action);
        }
    }

    /// Call `slot` with every dispatched action.
    #[must_use = "dropping the subscription disconnects the slot immediately"]
    pub fn on_action(&self, slot: impl Fn(&RichTextAction<B>) + 'static) -> Subscription {
        self.actions.connect(slot)
    }

    /// Whether `action` makes sense in the current state.
    ///
    /// This is meant for enabling controls. Actions are applied even when this returns `false`,
    /// clamped to valid values.
    pub fn can_handle(&self, action: &RichTextAction<B>) -> bool {
        match action {
            RichTextAction::Copy => !self.selected_range.get().is_caret(),
            RichTextAction::Undo => self.can_undo.get(),
            RichTextAction::Redo => self.can_redo.get(),
            RichTextAction::StepIndent(points) => *points >= 0.0 || self.indent.get() > 0.0,
            RichTextAction::StepLineSpacing(points) => {
                *points >= 0.0 || self.line_spacing.get() > 0.0
            }
            RichTextAction::StepSuperscript(steps) => {
                let level = i32::from(self.superscript.get()).saturating_add(*steps);
                level >= i32::from(*SUPERSCRIPT_LEVELS.start())
                    && level <= i32::from(*SUPERSCRIPT_LEVELS.end())
            }
            RichTextAction::StepFontSize(points) => {
                *points >= 0 || self.font_size.get() > MIN_FONT_SIZE
            }
            _ => true,
        }
    }

    /// Whether `style` is active.
    pub fn has_style(&self, style: RichTextStyle) -> bool {
        self.styles.get().has_style(style)
    }

    /// Select `range`.
    pub fn select_range(&self, range: CharacterRange) {
        self.handle(RichTextAction::SelectRange(range));
    }

    /// Highlight `range` without moving the selection.
    pub fn highlight_range(&self, range: CharacterRange) {
        self.handle(RichTextAction::SetHighlightedRange(Some(range)));
    }

    /// Remove the highlight.
    pub fn reset_highlighted_range(&self) {
        self.handle(RichTextAction::SetHighlightedRange(None));
    }

    /// Turn `style` on or off.
    pub fn set_style(&self, style: RichTextStyle, value: bool) {
        self.handle(RichTextAction::SetStyle(style, value));
    }

    /// Flip `style`.
    pub fn toggle_style(&self, style: RichTextStyle) {
        self.handle(RichTextAction::ToggleStyle(style));
    }

    /// Grow or shrink the font by `points`.
    pub fn step_font_size(&self, points: i32) {
        self.handle(RichTextAction::StepFontSize(points));
    }

    /// A two-way binding to whether `style` is active.
    ///
    /// Writing dispatches [`RichTextAction::SetStyle`]. The binding does not keep the context
    /// alive; once the context is gone it reads `false` and ignores writes.
    pub fn style_binding(self: &Rc<Self>, style: RichTextStyle) -> Binding<bool> {
        let get = Rc::downgrade(self);
        let set = get.clone();
        Binding::new(
            move || get.upgrade().is_some_and(|context| context.has_style(style)),
            move |value| {
                if let Some(context) = set.upgrade() {
                    context.set_style(style, value);
                }
            },
        )
    }

    /// A two-way binding to the color of `role`.
    ///
    /// Writing a color dispatches [`RichTextAction::SetColor`]; writing `None` does nothing.
    /// Like [`style_binding`](Self::style_binding), the binding does not keep the context alive.
    pub fn color_binding(self: &Rc<Self>, role: RichTextColor) -> Binding<Option<B>> {
        let get = Rc::downgrade(self);
        let set = get.clone();
        Binding::new(
            move || {
                get.upgrade()
                    .and_then(|context| context.colors.get().get(role).cloned())
            },
            move |value| {
                if let (Some(context), Some(color)) = (set.upgrade(), value) {
                    context.handle(RichTextAction::SetColor(role, color));
                }
            },
        )
    }

    pub(crate) fn bind(&self) -> Result<(), BindError> {
        if self.bound.replace(true) {
            return Err(BindError);
        }
        Ok(())
    }

    pub(crate) fn unbind(&self) {
        self.bound.set(false);
    }

    /// Apply `action` to the properties alone.
    fn mirror(&self, action: &RichTextAction<B>) {
        match action {
            RichTextAction::SelectRange(range) => {
                self.selected_range.set_if_changed(*range);
                self.can_copy.set_if_changed(!range.is_caret());
            }
            RichTextAction::SetHighlightedRange(range) => {
                self.highlighted_range.set_if_changed(*range);
            }
            RichTextAction::SetHighlightingStyle(style) => {
                self.highlighting_style.set_if_changed(style.clone());
            }
            RichTextAction::SetStyle(style, value) => {
                self.styles
                    .set_if_changed(self.styles.get().with_style(*style, *value));
            }
            RichTextAction::ToggleStyle(style) => {
                self.styles.set_if_changed(self.styles.get().toggled(*style));
            }
            RichTextAction::SetFontName(name) => {
                let name = if name.is_empty() {
                    String::from(DEFAULT_FONT_FAMILY)
                } else {
                    name.clone()
                };
                self.font_name.set_if_changed(name);
            }
            RichTextAction::SetFontSize(size) if size.is_finite() => {
                self.font_size.set_if_changed(size.max(MIN_FONT_SIZE));
            }
            RichTextAction::StepFontSize(points) => {
                let points = *points as f32;
                self.font_size
                    .set_if_changed((self.font_size.get() + points).max(MIN_FONT_SIZE));
            }
            RichTextAction::SetColor(role, color) => {
                let mut colors = self.colors.get();
                colors.set(*role, Some(color.clone()));
                self.colors.set_if_changed(colors);
            }
            RichTextAction::SetAlignment(alignment) => {
                self.alignment.set_if_changed(*alignment);
            }
            RichTextAction::StepIndent(points) if points.is_finite() => {
                self.indent
                    .set_if_changed((self.indent.get() + points).max(0.0));
            }
            RichTextAction::StepLineSpacing(points) if points.is_finite() => {
                self.line_spacing
                    .set_if_changed((self.line_spacing.get() + points).max(0.0));
            }
            RichTextAction::StepSuperscript(steps) => {
                let level = i32::from(self.superscript.get()).saturating_add(*steps);
                self.superscript.set_if_changed(clamp_level(level));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::RichTextContext;
    use crate::{RichTextAction, RichTextColor, RichTextStyle, MIN_FONT_SIZE};
    use attributed_text::CharacterRange;

    #[test]
    fn unbound_actions_update_properties() {
        let context = RichTextContext::<u32>::new();
        context.toggle_style(RichTextStyle::Bold);
        context.set_style(RichTextStyle::Italic, true);
        context.toggle_style(RichTextStyle::Bold);
        assert!(context.has_style(RichTextStyle::Italic));
        assert!(!context.has_style(RichTextStyle::Bold));
        context.step_font_size(-1000);
        assert_eq!(context.font_size().get(), MIN_FONT_SIZE);
        context.select_range(CharacterRange::new(4, 3));
        assert_eq!(context.selected_range().get(), CharacterRange::new(4, 3));
        assert!(context.can_copy().get());
        context.handle(RichTextAction::SetFontName(String::from("Mono")));
        assert_eq!(context.font_name().get(), "Mono");
    }

    #[test]
    fn actions_reach_listeners() {
        let context = RichTextContext::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let _subscription = context.on_action(move |action| log.borrow_mut().push(action.clone()));
        context.highlight_range(CharacterRange::new(1, 2));
        context.reset_highlighted_range();
        assert_eq!(
            *seen.borrow(),
            [
                RichTextAction::SetHighlightedRange(Some(CharacterRange::new(1, 2))),
                RichTextAction::SetHighlightedRange(None),
            ]
        );
        assert_eq!(context.highlighted_range().get(), None);
    }

    #[test]
    fn can_handle_follows_state() {
        let context = RichTextContext::<u32>::new();
        assert!(!context.can_handle(&RichTextAction::Copy));
        assert!(!context.can_handle(&RichTextAction::Undo));
        assert!(!context.can_handle(&RichTextAction::StepIndent(-30.0)));
        assert!(context.can_handle(&RichTextAction::StepIndent(30.0)));
        assert!(!context.can_handle(&RichTextAction::StepLineSpacing(-1.0)));
        assert!(context.can_handle(&RichTextAction::StepSuperscript(1)));
        assert!(!context.can_handle(&RichTextAction::StepSuperscript(2)));
        assert!(context.can_handle(&RichTextAction::StepFontSize(-1)));
        context.font_size().set(MIN_FONT_SIZE);
        assert!(!context.can_handle(&RichTextAction::StepFontSize(-1)));
        assert!(context.can_handle(&RichTextAction::Print));
    }

    #[test]
    fn bindings_do_not_own_the_context() {
        let context = RichTextContext::<u32>::new();
        let bold = context.style_binding(RichTextStyle::Bold);
        let stroke = context.color_binding(RichTextColor::Stroke);
        bold.set(true);
        stroke.set(Some(5));
        assert!(bold.get());
        assert_eq!(stroke.get(), Some(5));
        assert_eq!(Rc::strong_count(&context), 1);
        drop(context);
        assert!(!bold.get());
        assert_eq!(stroke.get(), None);
        bold.set(true);
    }

    #[test]
    fn binds_once() {
        let context = RichTextContext::<u32>::new();
        assert!(context.bind().is_ok());
        assert!(context.bind().is_err());
        context.unbind();
        assert!(!context.is_bound());
    }
}
