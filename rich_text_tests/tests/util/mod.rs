// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

pub(crate) mod env;

use std::cell::Cell;
use std::rc::Rc;

pub(crate) use env::{init_tracing, TestEnv};

/// A color for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ColorBrush {
    pub(crate) rgba: [u8; 4],
}

impl ColorBrush {
    pub(crate) const RED: Self = Self {
        rgba: [255, 0, 0, 255],
    };
    pub(crate) const BLUE: Self = Self {
        rgba: [0, 0, 255, 255],
    };
    pub(crate) const YELLOW: Self = Self {
        rgba: [255, 255, 0, 255],
    };
}

/// Counts how often a slot was called.
#[derive(Clone, Debug, Default)]
pub(crate) struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub(crate) fn get(&self) -> usize {
        self.0.get()
    }

    /// A slot that counts its calls.
    pub(crate) fn slot<T: 'static>(&self) -> impl Fn(&T) + 'static {
        let counter = self.clone();
        move |_| counter.hit()
    }
}
