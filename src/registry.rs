// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Codec registry: name → codec, resolved at runtime.
//!
//! The CLI takes the codec as a plain string, so dispatch is a map lookup
//! rather than anything baked in at compile time. Embedders can register
//! their own [`Codec`] implementations next to the builtins.

use std::collections::BTreeMap;

use crate::codec::{Codec, GreedyDict, Literal};
use crate::error::{Error, Result};

/// Runtime table of available codecs.
pub struct CodecRegistry {
    codecs: BTreeMap<&'static str, Box<dyn Codec>>,
}

impl CodecRegistry {
    /// An empty registry. Mostly useful for embedders that want full control
    /// over the codec set.
    pub fn new() -> Self {
        Self {
            codecs: BTreeMap::new(),
        }
    }

    /// A registry holding the built-in codecs: `dint` and `literal`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GreedyDict));
        registry.register(Box::new(Literal));
        registry
    }

    /// Add a codec under its own name, replacing any previous codec with the
    /// same name.
    pub fn register(&mut self, codec: Box<dyn Codec>) {
        self.codecs.insert(codec.name(), codec);
    }

    /// Look a codec up by name.
    pub fn get(&self, name: &str) -> Result<&dyn Codec> {
        self.codecs.get(name).map(|c| c.as_ref()).ok_or_else(|| {
            let known: Vec<&str> = self.codecs.keys().copied().collect();
            Error::Format(format!(
                "unknown codec '{}' (available: {})",
                name,
                known.join(", ")
            ))
        })
    }

    /// Names of all registered codecs, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.codecs.keys().copied().collect()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
