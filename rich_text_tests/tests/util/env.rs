// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use attributed_text::{AttributedText, CharacterRange};
use rich_text_sync::{
    Binding, MemorySurface, RichTextContext, RichTextCoordinator, SharedSurface,
};
use tracing_subscriber::EnvFilter;

use super::{ColorBrush, Counter};

pub(crate) type Surface = MemorySurface<ColorBrush>;

/// Install a test subscriber, filtered by `RUST_LOG`.
pub(crate) fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A bound editor: a host document, a memory surface, a context and their coordinator.
pub(crate) struct TestEnv {
    pub(crate) context: Rc<RichTextContext<ColorBrush>>,
    pub(crate) surface: Rc<SharedSurface<ColorBrush, Surface>>,
    document: Rc<RefCell<AttributedText<ColorBrush>>>,
    binding_writes: Counter,
    coordinator: Option<RichTextCoordinator<ColorBrush, Surface>>,
}

impl TestEnv {
    pub(crate) fn new(text: &str) -> Self {
        Self::with_surface(AttributedText::new(text), Surface::default())
    }

    pub(crate) fn with_surface(document: AttributedText<ColorBrush>, surface: Surface) -> Self {
        init_tracing();
        let document = Rc::new(RefCell::new(document));
        let binding_writes = Counter::new();
        let binding = {
            let get = document.clone();
            let set = document.clone();
            let writes = binding_writes.clone();
            Binding::new(
                move || get.borrow().clone(),
                move |value| {
                    writes.hit();
                    set.replace(value);
                },
            )
        };
        let surface = SharedSurface::new(surface);
        let context = RichTextContext::new();
        let coordinator = RichTextCoordinator::new(binding, surface.clone(), context.clone())
            .expect("fresh context");
        Self {
            context,
            surface,
            document,
            binding_writes,
            coordinator: Some(coordinator),
        }
    }

    /// The host's copy of the document.
    pub(crate) fn document(&self) -> AttributedText<ColorBrush> {
        self.document.borrow().clone()
    }

    /// How often the coordinator wrote the host's document.
    pub(crate) fn binding_writes(&self) -> usize {
        self.binding_writes.get()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&Surface) -> R) -> R {
        self.surface.read(f)
    }

    /// Act on the surface as the user would.
    pub(crate) fn user<R>(&self, f: impl FnOnce(&mut Surface) -> R) -> R {
        self.surface.edit(f)
    }

    pub(crate) fn select(&self, location: usize, length: usize) {
        self.context
            .select_range(CharacterRange::new(location, length));
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.coordinator.is_some()
    }

    /// Drop the coordinator.
    pub(crate) fn release(&mut self) {
        drop(self.coordinator.take());
    }
}
