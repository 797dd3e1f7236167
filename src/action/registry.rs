// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory registry of configured button actions.

use parking_lot::RwLock;

use super::ButtonAction;

/// Ordered, in-memory registry of button definitions.
///
/// Lookup scans in definition order and returns the first entry whose name
/// matches, so duplicate names resolve deterministically to the earliest
/// definition. Mutations swap whole entries under a write lock: a concurrent
/// dispatch sees either the old or the new definition, never a partially
/// written one. Lookups return clones, so an in-flight dispatch keeps its
/// resolved definition even if the registry is reloaded underneath it.
///
/// # Examples
///
/// ```
/// use presslink::action::{ActionKind, ActionRegistry, ButtonAction};
///
/// let registry = ActionRegistry::new();
/// registry.upsert(ButtonAction::new(
///     "PowerOff",
///     ActionKind::HttpGet { url: "http://hub.local/off".to_string() },
/// ));
///
/// assert!(registry.lookup("PowerOff").is_some());
/// assert!(registry.lookup("Unknown").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: RwLock<Vec<ButtonAction>>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the given actions.
    ///
    /// Duplicate names are logged as warnings, same as
    /// [`replace_all`](Self::replace_all).
    #[must_use]
    pub fn with_actions(actions: Vec<ButtonAction>) -> Self {
        let registry = Self::new();
        registry.replace_all(actions);
        registry
    }

    /// Looks up an action by name.
    ///
    /// Returns a clone of the first entry whose name matches, or `None` if
    /// the name is not configured.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ButtonAction> {
        self.actions
            .read()
            .iter()
            .find(|action| action.name == name)
            .cloned()
    }

    /// Inserts or replaces an action.
    ///
    /// If an entry with the same name exists, the first such entry is
    /// replaced in place (keeping its position); otherwise the action is
    /// appended.
    pub fn upsert(&self, action: ButtonAction) {
        let mut actions = self.actions.write();
        if let Some(existing) = actions.iter_mut().find(|a| a.name == action.name) {
            tracing::debug!(button = %action.name, "Replacing action definition");
            *existing = action;
        } else {
            tracing::debug!(button = %action.name, "Adding action definition");
            actions.push(action);
        }
    }

    /// Replaces the whole button list, e.g. on a configuration reload.
    ///
    /// The swap is atomic with respect to lookups; in-flight dispatches that
    /// already resolved an action are unaffected. Duplicate names are
    /// surfaced as warnings here — runtime lookup still resolves to the
    /// first definition.
    pub fn replace_all(&self, actions: Vec<ButtonAction>) {
        for (i, action) in actions.iter().enumerate() {
            if actions[..i].iter().any(|a| a.name == action.name) {
                tracing::warn!(
                    button = %action.name,
                    "Duplicate button name; only the first definition is reachable"
                );
            }
        }
        *self.actions.write() = actions;
    }

    /// Returns a copy of all configured actions in definition order.
    #[must_use]
    pub fn list(&self) -> Vec<ButtonAction> {
        self.actions.read().clone()
    }

    /// Returns the number of configured actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.read().len()
    }

    /// Returns `true` if no actions are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.read().is_empty()
    }
}
