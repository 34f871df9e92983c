// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text is a Rust crate which stores a block of text together with a set of
//! formatting attributes for every position in it.
//!
//! Unlike a span list, the attributes of an [`AttributedText`] are stored as contiguous,
//! non-overlapping runs which always cover the whole text. Adjacent runs with equal attributes
//! are merged, so the run list is the canonical form of the formatting.
//!
//! ## Indices
//!
//! All ranges are [`CharacterRange`]s expressed in **UTF-16 code units**, matching the index
//! space used by native text views. A range that ends past the text, or that splits a surrogate
//! pair, is rejected with an [`Error`].
//!
//! ## Mutation tracking
//!
//! Every effective mutation nudges the text's [`Generation`]. Writes which leave the text
//! unchanged (for example setting an attribute to the value it already has) do not, which lets
//! observers skip redundant work.
//!
//! ## Example
//!
//! ```
//! use attributed_text::{AttributeKey, AttributeValue, AttributedText, CharacterRange, Font};
//!
//! let mut text = AttributedText::<u32>::new("foo bar baz");
//! let bar = CharacterRange::new(4, 3);
//! let font = Font::new("Inter", 14.0);
//! assert!(text.set_attribute(AttributeValue::Font(font.clone()), bar).unwrap());
//! // Setting the same value again changes nothing.
//! assert!(!text.set_attribute(AttributeValue::Font(font), bar).unwrap());
//! assert!(text.attribute(AttributeKey::Font, bar).is_some());
//! assert!(text.attribute(AttributeKey::Font, CharacterRange::new(0, 3)).is_none());
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

mod attribute;
mod attributed_text;
mod brush;
mod character_range;
mod error;
mod font;
mod paragraph;
mod text_storage;

pub use crate::attribute::{Attachment, AttributeKey, AttributeValue, Attributes, LineStyle};
pub use crate::attributed_text::{AttributedText, Generation, Runs};
pub use crate::brush::Brush;
pub use crate::character_range::CharacterRange;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::font::{Font, FontTraits};
pub use crate::paragraph::{Alignment, ParagraphStyle};
pub use crate::text_storage::TextStorage;
