//! Live values behind manifest controls

use super::error::{ManifestError, Result};
use crate::state::State;
use serde::Serialize;
use std::collections::BTreeMap;
use std::rc::Rc;

/// State handle bound to one setting
#[derive(Debug, Clone)]
pub enum Binding {
    Bool(State<bool>),
    Int(State<i64>),
    Choice {
        state: State<usize>,
        options: Rc<[String]>,
    },
}

impl Binding {
    /// Current value
    #[must_use]
    pub fn value(&self) -> SettingValue {
        match self {
            Self::Bool(state) => SettingValue::Bool(state.get()),
            Self::Int(state) => SettingValue::Int(state.get()),
            Self::Choice { state, options } => {
                SettingValue::Choice(options.get(state.get()).cloned().unwrap_or_default())
            }
        }
    }
}

/// Snapshot of a setting's value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Choice(String),
}

/// Every binding created for a manifest, by key
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    bindings: BTreeMap<String, Binding>,
}

impl SettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding under a new key
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::DuplicateKey` if `key` is already bound.
    pub fn insert(&mut self, key: &str, binding: Binding) -> Result<()> {
        if self.bindings.contains_key(key) {
            return Err(ManifestError::DuplicateKey(key.to_string()));
        }
        self.bindings.insert(key.to_string(), binding);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Binding> {
        self.bindings.get(key)
    }

    /// Current value of every setting, ordered by key
    #[must_use]
    pub fn values(&self) -> BTreeMap<String, SettingValue> {
        self.bindings
            .iter()
            .map(|(key, binding)| (key.clone(), binding.value()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
