// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kind-based item construction.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::GroupError;

use super::contract::Item;
use super::spec::ItemDescriptor;

/// Builds an item from a resolved descriptor.
///
/// The descriptor's options already include the group's shared defaults by
/// the time a constructor runs.
pub type ItemConstructor = Box<dyn Fn(&ItemDescriptor) -> Result<Box<dyn Item>, GroupError>>;

/// Maps descriptor kinds to constructors.
///
/// Groups resolve descriptors against a registry at registration time only;
/// the registry is not retained afterwards, so one registry can serve many
/// groups.
#[derive(Default)]
pub struct ItemRegistry {
    constructors: BTreeMap<String, ItemConstructor>,
}

impl fmt::Debug for ItemRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("kinds", &self.constructors.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for `kind`, replacing any previous one.
    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F)
    where
        F: Fn(&ItemDescriptor) -> Result<Box<dyn Item>, GroupError> + 'static,
    {
        self.constructors.insert(kind.into(), Box::new(constructor));
    }

    /// Returns whether a constructor exists for `kind`.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Resolves a descriptor into a built item.
    ///
    /// # Errors
    ///
    /// [`GroupError::MissingCapability`] when no constructor is registered
    /// for the descriptor's kind; whatever the constructor itself returns
    /// otherwise.
    pub fn resolve(&self, descriptor: &ItemDescriptor) -> Result<Box<dyn Item>, GroupError> {
        let constructor = self.constructors.get(&descriptor.kind).ok_or_else(|| {
            GroupError::MissingCapability {
                kind: descriptor.kind.clone(),
            }
        })?;
        constructor(descriptor)
    }
}
