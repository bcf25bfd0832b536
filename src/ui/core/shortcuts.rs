//! Process-wide keyboard shortcut dispatcher.
//!
//! Components bind a key label to a callback while they are mounted. Bindings
//! are keyed by `{key, modifier}` and each key combination has exactly one
//! active callback: the most recent bind wins, and earlier bindings for the
//! same combination become active again once the newer one is unbound.
//! In touch mode nothing is bound at all.

use super::actions::Action;
use crate::config::ModifierKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutError {
    #[error("shortcut key cannot be empty")]
    EmptyKey,
    #[error("shortcut key must be a single character, got '{0}'")]
    UnsupportedKey(String),
}

/// A key combination: a case-insensitive character plus a modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    key: char,
    modifier: ModifierKey,
}

impl KeyBinding {
    pub fn parse(label: &str, modifier: ModifierKey) -> Result<Self, ShortcutError> {
        let mut chars = label.trim().chars();
        let key = chars.next().ok_or(ShortcutError::EmptyKey)?;
        if chars.next().is_some() {
            return Err(ShortcutError::UnsupportedKey(label.to_string()));
        }
        Ok(Self {
            key: key.to_ascii_lowercase(),
            modifier,
        })
    }

    #[must_use]
    pub fn key(&self) -> char {
        self.key
    }

    #[must_use]
    pub fn modifier(&self) -> ModifierKey {
        self.modifier
    }

    /// Whether a key press triggers this binding
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let KeyCode::Char(pressed) = event.code else {
            return false;
        };
        let required = match self.modifier {
            ModifierKey::Ctrl => KeyModifiers::CONTROL,
            ModifierKey::Cmd => KeyModifiers::SUPER,
        };
        pressed.to_ascii_lowercase() == self.key && event.modifiers.contains(required)
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.modifier, self.key.to_ascii_uppercase())
    }
}

/// Handle returned by [`ShortcutDispatcher::bind`], used to unbind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

/// Per-binding options
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcutOptions {
    pub disabled: bool,
    /// Overrides the dispatcher's preferred modifier
    pub modifier: Option<ModifierKey>,
}

type Callback = Box<dyn Fn() -> Action>;

struct Registration {
    id: BindingId,
    callback: Callback,
}

pub struct ShortcutDispatcher {
    bindings: HashMap<KeyBinding, Vec<Registration>>,
    index: HashMap<BindingId, KeyBinding>,
    next_id: u64,
    touch_mode: bool,
    preferred_modifier: ModifierKey,
}

impl Default for ShortcutDispatcher {
    fn default() -> Self {
        Self::new(ModifierKey::default(), false)
    }
}

impl ShortcutDispatcher {
    pub fn new(preferred_modifier: ModifierKey, touch_mode: bool) -> Self {
        Self {
            bindings: HashMap::new(),
            index: HashMap::new(),
            next_id: 1,
            touch_mode,
            preferred_modifier,
        }
    }

    #[must_use]
    pub fn preferred_modifier(&self) -> ModifierKey {
        self.preferred_modifier
    }

    #[must_use]
    pub fn is_touch_mode(&self) -> bool {
        self.touch_mode
    }

    /// Attach `callback` to `key_label`
    ///
    /// Returns `Ok(None)` without binding anything when the options disable the
    /// shortcut or the dispatcher runs in touch mode.
    pub fn bind<F>(
        &mut self,
        key_label: &str,
        callback: F,
        options: ShortcutOptions,
    ) -> Result<Option<BindingId>, ShortcutError>
    where
        F: Fn() -> Action + 'static,
    {
        let binding = KeyBinding::parse(key_label, options.modifier.unwrap_or(self.preferred_modifier))?;

        if self.touch_mode || options.disabled {
            log::debug!("Shortcuts: {} not bound (disabled)", binding);
            return Ok(None);
        }

        let id = BindingId(self.next_id);
        self.next_id += 1;

        let stack = self.bindings.entry(binding).or_default();
        if !stack.is_empty() {
            log::debug!("Shortcuts: {} rebound, shadowing {} earlier binding(s)", binding, stack.len());
        }
        stack.push(Registration {
            id,
            callback: Box::new(callback),
        });
        self.index.insert(id, binding);

        Ok(Some(id))
    }

    /// Detach a binding; returns false when the id is unknown
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let Some(binding) = self.index.remove(&id) else {
            return false;
        };

        if let Some(stack) = self.bindings.get_mut(&binding) {
            stack.retain(|registration| registration.id != id);
            if stack.is_empty() {
                self.bindings.remove(&binding);
            }
        }
        true
    }

    /// Run the active callback for the pressed key combination, if any
    ///
    /// When the event carries both modifiers, a Ctrl binding is preferred over a
    /// Cmd one.
    pub fn dispatch(&self, event: &KeyEvent) -> Option<Action> {
        let KeyCode::Char(pressed) = event.code else {
            return None;
        };
        let (binding, stack) = [ModifierKey::Ctrl, ModifierKey::Cmd]
            .into_iter()
            .map(|modifier| KeyBinding {
                key: pressed.to_ascii_lowercase(),
                modifier,
            })
            .filter(|binding| binding.matches(event))
            .find_map(|binding| self.bindings.get(&binding).map(|stack| (binding, stack)))?;
        let registration = stack.last()?;
        log::debug!("Shortcuts: dispatching {}", binding);
        Some((registration.callback)())
    }

    /// Number of bound registrations, shadowed ones included
    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_bound(&self, binding: &KeyBinding) -> bool {
        self.bindings.contains_key(binding)
    }
}
