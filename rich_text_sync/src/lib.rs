// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute synchronization for rich text editors.
//!
//! A rich text editor built on a native text view has three copies of the same truth: the
//! text view's own attribute storage, the observable editing state that toolbars and pickers
//! render, and the attributed text value owned by the host application. This crate keeps the
//! three consistent.
//!
//! - [`codec`] maps formatting concepts (styles, colors, font properties, alignment, indentation,
//!   superscript levels) to and from primitive [`attributed_text`] attributes on a range.
//! - [`RichTextAction`] is the closed set of formatting and editing intents.
//! - [`RichTextContext`] is the observable editing state. Presentation code reads its properties
//!   and calls [`RichTextContext::handle`]; it never touches the text view.
//! - [`RichTextCoordinator`] binds one context to one [`SharedSurface`] and one
//!   [`Binding`] of the document. It applies dispatched actions to the surface and reconciles the
//!   context from the surface after external edits, suppressing the echo of its own writes.
//! - [`RichTextSurface`] is the capability set a native text view has to provide.
//!   [`MemorySurface`] is an in-process implementation, useful for headless hosts and tests.
//!
//! ## Threading
//!
//! Everything here is single-threaded and re-entrant: dispatching an action synchronously
//! mutates the surface, which synchronously notifies its listeners, all within one call stack.
//!
//! ## Example
//!
//! ```
//! use rich_text_sync::attributed_text::{AttributedText, CharacterRange};
//! use rich_text_sync::{
//!     Binding, MemorySurface, RichTextAction, RichTextContext, RichTextCoordinator,
//!     RichTextStyle, SharedSurface,
//! };
//!
//! let context = RichTextContext::<u32>::new();
//! let surface = SharedSurface::new(MemorySurface::<u32>::default());
//! let text = Binding::from_value(AttributedText::new("foo bar baz"));
//! let _coordinator =
//!     RichTextCoordinator::new(text.clone(), surface.clone(), context.clone()).unwrap();
//!
//! context.handle(RichTextAction::SelectRange(CharacterRange::new(4, 3)));
//! context.handle(RichTextAction::SetStyle(RichTextStyle::Bold, true));
//!
//! assert!(context.has_style(RichTextStyle::Bold));
//! assert_ne!(text.get(), AttributedText::new("foo bar baz"));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards `std` support to dependencies.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod codec;

mod action;
mod color;
mod config;
mod context;
mod coordinator;
mod memory;
mod observe;
mod style;
mod surface;

pub use attributed_text;

pub use crate::action::{InsertItem, RichTextAction};
pub use crate::color::{RichTextColor, RichTextColors};
pub use crate::config::{
    HighlightingStyle, Theme, DEFAULT_FONT_FAMILY, MIN_FONT_SIZE, STANDARD_FONT_SIZE,
    SUPERSCRIPT_LEVELS,
};
pub use crate::context::{BindError, Observed, RichTextContext};
pub use crate::coordinator::RichTextCoordinator;
pub use crate::memory::MemorySurface;
pub use crate::observe::{Binding, Observable, Signal, Subscription};
pub use crate::style::{RichTextStyle, StyleSet};
pub use crate::surface::{Highlight, RichTextSurface, SharedSurface};
