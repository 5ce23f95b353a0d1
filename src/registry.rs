use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use strum::IntoEnumIterator;

use crate::action::Action;
use crate::error::{RegistryError, RegistryResult};

static REGISTRY: OnceLock<ActionTypeRegistry> = OnceLock::new();

/// Process-wide registry covering every [`Action`] variant.
///
/// Built on first access and read-only afterwards, so it may be shared
/// across threads without locking.
pub fn get() -> &'static ActionTypeRegistry {
    REGISTRY.get_or_init(|| {
        ActionTypeRegistry::build(Action::iter().map(Action::name))
            .expect("builtin action type names are unique")
    })
}

/// Injective mapping from symbolic action names to their runtime values.
///
/// Each name maps to itself, so the value carried inside a message equals
/// the name a component compares it against. Declaration order of the
/// names is preserved for enumeration.
#[derive(Debug, Clone, Default)]
pub struct ActionTypeRegistry {
    names: Vec<String>,
    values: HashMap<String, String>,
}

impl ActionTypeRegistry {
    /// Builds a registry from an ordered sequence of symbolic names.
    ///
    /// A repeated name fails the whole build with
    /// [`RegistryError::DuplicateName`] rather than overwriting the
    /// earlier entry.
    pub fn build<I, S>(names: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for name in names {
            let name = name.into();
            if registry.values.contains_key(&name) {
                log::error!("rejected duplicate action type name: {name}");
                return Err(RegistryError::DuplicateName { name });
            }
            registry.values.insert(name.clone(), name.clone());
            registry.names.push(name);
        }
        log::debug!(
            "action type registry built with {} entries",
            registry.names.len()
        );
        Ok(registry)
    }

    /// Looks up the value registered for `name`.
    pub fn get(&self, name: &str) -> RegistryResult<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::UnknownName {
                name: name.to_string(),
            })
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The full set of registered values, for membership checks against
    /// an incoming message's action type.
    pub fn values(&self) -> HashSet<&str> {
        self.values.values().map(String::as_str).collect()
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
