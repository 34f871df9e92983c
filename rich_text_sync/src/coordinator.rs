// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping a context, a surface and a document binding in sync.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use attributed_text::{
    Alignment, AttributedText, Brush, CharacterRange, Font, Generation, ParagraphStyle,
};

use crate::codec::{self, Outcome};
use crate::{
    BindError, Binding, HighlightingStyle, Observable, RichTextAction, RichTextColor, RichTextColors,
    RichTextContext, RichTextSurface, SharedSurface, StyleSet, Subscription,
};

/// Binds a [`RichTextContext`] to a surface and to the document it edits.
///
/// On creation the document is loaded into the surface, and from then on:
///
/// - Actions dispatched on the context, and writes to its writable properties, are applied to the
///   surface.
/// - Edits and selection changes on the surface update the context and, when the text changed,
///   the document binding.
///
/// Changes the coordinator makes itself are not observed again as outside changes, so neither
/// direction re-triggers the other. Dropping the coordinator stops all propagation and frees
/// the context for another coordinator.
pub struct RichTextCoordinator<B: Brush + 'static, S: RichTextSurface<B> + 'static> {
    state: Rc<State<B, S>>,
    subscriptions: Vec<Subscription>,
}

struct State<B: Brush + 'static, S: RichTextSurface<B> + 'static> {
    text: Binding<AttributedText<B>>,
    surface: Rc<SharedSurface<B, S>>,
    context: Rc<RichTextContext<B>>,
    /// Nesting depth of surface edits made by the coordinator itself.
    depth: Cell<u32>,
    /// The generation last written to `text`.
    synced: Cell<Generation>,
    /// Counts context syncs, to detect writes made stale by a nested sync.
    revision: Cell<u64>,
    /// The action matching the writable property value being written back, if any.
    echo: RefCell<Option<RichTextAction<B>>>,
}

impl<B: Brush + 'static, S: RichTextSurface<B> + 'static> fmt::Debug
    for RichTextCoordinator<B, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichTextCoordinator")
            .field("context", &self.state.context)
            .field("synced", &self.state.synced.get())
            .field("subscriptions", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

impl<B: Brush + 'static, S: RichTextSurface<B> + 'static> RichTextCoordinator<B, S> {
    /// Bind `context` to `surface`, loading the document from `text`.
    ///
    /// Fails if `context` already has a coordinator.
    pub fn new(
        text: Binding<AttributedText<B>>,
        surface: Rc<SharedSurface<B, S>>,
        context: Rc<RichTextContext<B>>,
    ) -> Result<Self, BindError> {
        context.bind()?;
        let document = text.get();
        let state = Rc::new(State {
            text,
            surface,
            context,
            depth: Cell::new(0),
            synced: Cell::new(Generation::default()),
            revision: Cell::new(0),
            echo: RefCell::new(None),
        });
        state.guarded(|| {
            state.surface.edit(|surface| surface.set_document(&document));
        });
        state
            .synced
            .set(state.surface.read(|surface| surface.generation()));
        state.sync_context();

        let weak = Rc::downgrade(&state);
        let context = &state.context;
        let subscriptions = Vec::from([
            context.on_action(with_state(
                &weak,
                |state: &State<B, S>, action: &RichTextAction<B>| state.apply(action),
            )),
            context.font_name.subscribe(with_state(
                &weak,
                |state: &State<B, S>, name: &String| {
                    state.property_written(RichTextAction::SetFontName(name.clone()));
                },
            )),
            context.font_size.subscribe(with_state(
                &weak,
                |state: &State<B, S>, size: &f32| {
                    state.property_written(RichTextAction::SetFontSize(*size));
                },
            )),
            context.alignment.subscribe(with_state(
                &weak,
                |state: &State<B, S>, alignment: &Alignment| {
                    state.property_written(RichTextAction::SetAlignment(*alignment));
                },
            )),
            state.surface.on_text_changed({
                let weak = weak.clone();
                move |_| {
                    if let Some(state) = weak.upgrade() {
                        state.surface_changed();
                    }
                }
            }),
            state.surface.on_selection_changed({
                let weak = weak.clone();
                move |_| {
                    if let Some(state) = weak.upgrade() {
                        state.surface_changed();
                    }
                }
            }),
        ]);
        tracing::debug!("coordinator bound");
        Ok(Self {
            state,
            subscriptions,
        })
    }

    /// The surface being edited.
    pub fn surface(&self) -> &Rc<SharedSurface<B, S>> {
        &self.state.surface
    }

    /// The bound context.
    pub fn context(&self) -> &Rc<RichTextContext<B>> {
        &self.state.context
    }
}

impl<B: Brush + 'static, S: RichTextSurface<B> + 'static> Drop for RichTextCoordinator<B, S> {
    fn drop(&mut self) {
        self.subscriptions.clear();
        self.state.context.unbind();
        tracing::debug!("coordinator released");
    }
}

/// Wrap `f` in a slot that only runs while the coordinator state is alive.
fn with_state<B, S, T>(
    state: &Weak<State<B, S>>,
    f: impl Fn(&State<B, S>, &T) + 'static,
) -> impl Fn(&T) + 'static
where
    B: Brush + 'static,
    S: RichTextSurface<B> + 'static,
    T: 'static,
{
    let state = state.clone();
    move |value| {
        if let Some(state) = state.upgrade() {
            f(&state, value);
        }
    }
}

impl<B: Brush + 'static, S: RichTextSurface<B> + 'static> State<B, S> {
    fn guarded<R>(&self, f: impl FnOnce() -> R) -> R {
        self.depth.set(self.depth.get() + 1);
        let result = f();
        self.depth.set(self.depth.get() - 1);
        result
    }

    fn is_applying(&self) -> bool {
        self.depth.get() > 0
    }

    /// Apply an action to the surface, then bring the binding and context up to date.
    ///
    /// Only the edit itself is guarded. Surface changes made by listeners while the binding or
    /// the context is written are observed like any other outside change.
    fn apply(&self, action: &RichTextAction<B>) {
        let outcome = self.guarded(|| self.surface.edit(|surface| apply_action(surface, action)));
        tracing::debug!(?action, ?outcome, "applied action");
        self.sync_binding();
        self.sync_context();
    }

    /// Apply a write to a writable property, unless it is the coordinator's own write-back.
    fn property_written(&self, action: RichTextAction<B>) {
        if self.echo.borrow().as_ref() == Some(&action) {
            return;
        }
        self.apply(&action);
    }

    fn surface_changed(&self) {
        if self.is_applying() {
            tracing::trace!("suppressing echo of own change");
            return;
        }
        self.sync_binding();
        self.sync_context();
    }

    /// Write the surface's document to the binding if it changed since the last write.
    fn sync_binding(&self) {
        let generation = self.surface.read(|surface| surface.generation());
        if generation == self.synced.get() {
            return;
        }
        self.synced.set(generation);
        let document = self.surface.read(|surface| surface.document().clone());
        tracing::trace!(?generation, "updating document binding");
        self.text.set(document);
    }

    /// Recompute the context from the formatting at the surface's selection.
    ///
    /// Properties the surface cannot show keep their values.
    fn sync_context(&self) {
        let snapshot = self.surface.read(|surface| {
            let mut colors = self.context.colors.get();
            for role in RichTextColor::ALL {
                let supported = role
                    .attribute()
                    .is_some_and(|key| surface.supports_attribute(key));
                if supported {
                    colors.set(role, codec::colors::color(surface, role, None));
                }
            }
            Snapshot {
                selection: surface.selected_range(),
                highlighted: codec::highlight::highlighted_range(surface),
                highlighting_style: surface.highlighting_style().clone(),
                styles: codec::styles::styles(surface, None),
                supported_styles: codec::styles::supported_styles(surface),
                font: codec::font::font(surface, None),
                colors,
                paragraph: codec::paragraph::paragraph_style(surface, None),
                superscript: codec::superscript::superscript(surface, None),
                can_undo: surface.can_undo(),
                can_redo: surface.can_redo(),
                editing: surface.is_editing(),
            }
        });
        let context = &self.context;
        let revision = self.revision.get().wrapping_add(1);
        self.revision.set(revision);
        self.write(&context.selected_range, snapshot.selection, revision);
        self.write(&context.can_copy, !snapshot.selection.is_caret(), revision);
        self.write(&context.highlighted_range, snapshot.highlighted, revision);
        self.write(
            &context.highlighting_style,
            snapshot.highlighting_style,
            revision,
        );
        if let Some(styles) = snapshot.styles {
            let shown = snapshot.supported_styles;
            let styles = context.styles.get().difference(shown) | (styles & shown);
            self.write(&context.styles, styles, revision);
        }
        if let Some(font) = snapshot.font {
            let name = String::from(font.family());
            self.write_back(
                &context.font_name,
                name.clone(),
                RichTextAction::SetFontName(name),
                revision,
            );
            self.write_back(
                &context.font_size,
                font.size(),
                RichTextAction::SetFontSize(font.size()),
                revision,
            );
        }
        self.write(&context.colors, snapshot.colors, revision);
        if let Some(paragraph) = snapshot.paragraph {
            self.write_back(
                &context.alignment,
                paragraph.alignment,
                RichTextAction::SetAlignment(paragraph.alignment),
                revision,
            );
            self.write(&context.indent, paragraph.head_indent, revision);
            self.write(&context.line_spacing, paragraph.line_spacing, revision);
        }
        if let Some(superscript) = snapshot.superscript {
            self.write(&context.superscript, superscript, revision);
        }
        self.write(&context.can_undo, snapshot.can_undo, revision);
        self.write(&context.can_redo, snapshot.can_redo, revision);
        self.write(&context.is_editing_text, snapshot.editing, revision);
    }

    /// Write a context property, unless a nested sync ran since `revision`.
    ///
    /// That sync read a newer state of the surface and wrote the context itself.
    fn write<T: Clone + PartialEq + 'static>(
        &self,
        property: &Observable<T>,
        value: T,
        revision: u64,
    ) {
        if self.revision.get() == revision {
            property.set_if_changed(value);
        }
    }

    /// Write a writable property without applying the value back to the surface.
    ///
    /// `echo` is the action a write of `value` stands for. Listeners may still write other
    /// values during the emission, and those are applied.
    fn write_back<T: Clone + PartialEq + 'static>(
        &self,
        property: &Observable<T>,
        value: T,
        echo: RichTextAction<B>,
        revision: u64,
    ) {
        let previous = self.echo.replace(Some(echo));
        self.write(property, value, revision);
        self.echo.replace(previous);
    }
}

struct Snapshot<B: Brush> {
    selection: CharacterRange,
    highlighted: Option<CharacterRange>,
    highlighting_style: HighlightingStyle<B>,
    styles: Option<StyleSet>,
    supported_styles: StyleSet,
    font: Option<Font>,
    colors: RichTextColors<B>,
    paragraph: Option<ParagraphStyle>,
    superscript: Option<i8>,
    can_undo: bool,
    can_redo: bool,
    editing: bool,
}

/// Apply `action` to `surface` through the codec.
fn apply_action<B: Brush, S: RichTextSurface<B>>(
    surface: &mut S,
    action: &RichTextAction<B>,
) -> Outcome {
    match action {
        RichTextAction::Copy => Outcome::from_changed(surface.copy_selection()),
        RichTextAction::DismissKeyboard => {
            surface.dismiss_keyboard();
            Outcome::Applied
        }
        RichTextAction::PasteImage(item) => codec::paste::paste_image(surface, item),
        RichTextAction::PasteImages(item) => codec::paste::paste_images(surface, item),
        RichTextAction::PasteText(item) => codec::paste::paste_text(surface, item),
        RichTextAction::Print => {
            if surface.print() {
                Outcome::Applied
            } else {
                Outcome::Unsupported
            }
        }
        RichTextAction::Redo => Outcome::from_changed(surface.redo()),
        RichTextAction::Undo => Outcome::from_changed(surface.undo()),
        RichTextAction::SelectRange(range) => {
            if range.validate(surface.document().text()).is_err() {
                return Outcome::OutOfRange;
            }
            if surface.selected_range() == *range {
                return Outcome::Unchanged;
            }
            surface.set_selected_range(*range);
            Outcome::Applied
        }
        RichTextAction::SetAlignment(alignment) => {
            codec::paragraph::set_alignment(surface, *alignment, None)
        }
        RichTextAction::SetAttributedString(document) => {
            if surface.document() == document {
                return Outcome::Unchanged;
            }
            surface.set_document(document);
            Outcome::Applied
        }
        RichTextAction::SetColor(role, color) => {
            codec::colors::set_color(surface, *role, color.clone(), None)
        }
        RichTextAction::SetFontName(name) => codec::font::set_font_name(surface, name, None),
        RichTextAction::SetFontSize(size) => codec::font::set_font_size(surface, *size, None),
        RichTextAction::SetHighlightedRange(range) => {
            codec::highlight::set_highlight(surface, *range)
        }
        RichTextAction::SetHighlightingStyle(style) => {
            codec::highlight::set_highlighting_style(surface, style)
        }
        RichTextAction::SetStyle(style, value) => {
            codec::styles::set_style(surface, *style, *value, None)
        }
        RichTextAction::StepFontSize(points) => {
            codec::font::step_font_size(surface, *points, None)
        }
        RichTextAction::StepIndent(points) => codec::paragraph::step_indent(surface, *points, None),
        RichTextAction::StepLineSpacing(points) => {
            codec::paragraph::step_line_spacing(surface, *points, None)
        }
        RichTextAction::StepSuperscript(steps) => {
            codec::superscript::step_superscript(surface, *steps, None)
        }
        RichTextAction::ToggleStyle(style) => codec::styles::toggle_style(surface, *style, None),
    }
}
