// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration specs and option merging.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use serde_json::{Map, Value};

use crate::error::GroupError;

use super::contract::Item;
use super::id::ItemId;

/// Option key reserved for kind dispatch.
///
/// Descriptors carry their kind in a typed field; an options map (or the
/// group's shared defaults) that sets this key is a confused registration
/// and is rejected as invalid input.
pub const KIND_KEY: &str = "kind";

/// Option keys that declare an answer mandatory in the descriptor dialect.
///
/// `requiredChoice` and `correctChoice` are accepted as synonyms carried over
/// from existing descriptor data.
const REQUIRED_KEYS: [&str; 3] = ["required", "requiredChoice", "correctChoice"];

/// How one item enters a group.
pub enum ItemSpec {
    /// An already-built item.
    Built(BuiltItem),
    /// A declarative description, resolved by kind against an
    /// [`ItemRegistry`](super::ItemRegistry).
    Descriptor(ItemDescriptor),
}

impl ItemSpec {
    /// Wraps an already-built item with no explicit id.
    ///
    /// The group derives an id of the form `item_<position>` at registration.
    #[must_use]
    pub fn built(item: Box<dyn Item>) -> Self {
        Self::Built(BuiltItem {
            id: None,
            required: false,
            item,
        })
    }

    /// Wraps an already-built item under an explicit id.
    #[must_use]
    pub fn built_as(id: impl Into<ItemId>, item: Box<dyn Item>) -> Self {
        Self::Built(BuiltItem {
            id: Some(id.into()),
            required: false,
            item,
        })
    }

    /// Marks the spec as requiring a non-empty answer.
    #[must_use]
    pub fn required(self) -> Self {
        match self {
            Self::Built(built) => Self::Built(BuiltItem {
                required: true,
                ..built
            }),
            Self::Descriptor(descriptor) => Self::Descriptor(descriptor.required(true)),
        }
    }
}

impl From<ItemDescriptor> for ItemSpec {
    fn from(descriptor: ItemDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl fmt::Debug for ItemSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Built(built) => f.debug_tuple("Built").field(built).finish(),
            Self::Descriptor(descriptor) => f.debug_tuple("Descriptor").field(descriptor).finish(),
        }
    }
}

/// An already-built item plus its registration metadata.
pub struct BuiltItem {
    /// Explicit id; `None` derives `item_<position>`.
    pub id: Option<ItemId>,
    /// Whether a non-empty answer is required from this item.
    pub required: bool,
    /// The item itself.
    pub item: Box<dyn Item>,
}

impl fmt::Debug for BuiltItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltItem")
            .field("id", &self.id)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// A declarative description of an item, resolved by kind.
#[derive(Clone, Debug)]
pub struct ItemDescriptor {
    /// Registry kind to dispatch on.
    pub kind: String,
    /// Explicit id; `None` derives `<kind>_<position>`.
    pub id: Option<ItemId>,
    /// Explicit requiredness; `None` falls back to scanning the merged
    /// options for the dialect's required keys.
    pub required: Option<bool>,
    /// Kind-specific construction options. Shared group defaults are merged
    /// in (without overriding) before the constructor runs.
    pub options: Map<String, Value>,
}

impl ItemDescriptor {
    /// Starts a descriptor for the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            required: None,
            options: Map::new(),
        }
    }

    /// Sets an explicit id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets explicit requiredness, overriding option scanning.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Adds a construction option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// Merges shared defaults into descriptor options.
///
/// Explicit descriptor keys always win; defaults fill only the gaps. Both
/// inputs are left untouched.
#[must_use]
pub fn merge_defaults(
    options: &Map<String, Value>,
    defaults: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = options.clone();
    for (key, value) in defaults {
        if !merged.contains_key(key) {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Rejects maps that set the reserved kind-dispatch key.
pub(crate) fn reject_reserved(
    options: &Map<String, Value>,
    context: &str,
) -> Result<(), GroupError> {
    if options.contains_key(KIND_KEY) {
        return Err(GroupError::invalid(format!(
            "{context} may not set the reserved key `{KIND_KEY}`"
        )));
    }
    Ok(())
}

/// Decides whether a descriptor demands a non-empty answer.
///
/// An explicit [`required`](ItemDescriptor::required) wins; otherwise any
/// truthy required-key in the merged options counts.
pub(crate) fn declares_required(
    descriptor: &ItemDescriptor,
    merged: &Map<String, Value>,
) -> bool {
    if let Some(required) = descriptor.required {
        return required;
    }
    REQUIRED_KEYS
        .iter()
        .any(|key| merged.get(*key).is_some_and(is_truthy))
}

/// Loose truthiness over JSON option values: null, `false`, zero, and empty
/// strings count as unset.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
