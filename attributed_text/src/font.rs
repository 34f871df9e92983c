// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

bitflags::bitflags! {
    /// Symbolic traits of a font descriptor.
    ///
    /// Traits compose independently: toggling one never affects another.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontTraits: u8 {
        /// A bold (heavier weight) face.
        const BOLD = 0b0000_0001;
        /// An italic (or oblique) face.
        const ITALIC = 0b0000_0010;
    }
}

/// A font: a family name, a point size and a set of symbolic traits.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: Arc<str>,
    size: f32,
    traits: FontTraits,
}

impl Font {
    /// Create a regular font of the given family and point size.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            traits: FontTraits::empty(),
        }
    }

    /// The family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The symbolic traits.
    pub fn traits(&self) -> FontTraits {
        self.traits
    }

    /// The same font in another family, keeping size and traits.
    #[must_use]
    pub fn with_family(&self, family: impl Into<Arc<str>>) -> Self {
        Self {
            family: family.into(),
            ..self.clone()
        }
    }

    /// The same font at another size, keeping family and traits.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// The same font with its traits replaced.
    #[must_use]
    pub fn with_traits(&self, traits: FontTraits) -> Self {
        Self {
            traits,
            ..self.clone()
        }
    }
}
