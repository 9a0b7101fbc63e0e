//! Shared service registry.

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// A registry of shared (one-per-collection) service instances, keyed by type.
///
/// The first registration for a type wins; later registrations of the same
/// type are ignored. Both concrete types and trait objects can be registered,
/// e.g. `Arc<dyn MessageValidator>`.
#[derive(Default)]
pub struct ServiceCollection {
    services: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ServiceCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `service` as the shared instance for `T`.
    ///
    /// Returns `false` when an instance for `T` was already registered; the
    /// existing instance is kept.
    pub fn try_add_shared<T: ?Sized + Send + Sync + 'static>(&mut self, service: Arc<T>) -> bool {
        match self.services.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Box::new(service));
                true
            }
        }
    }

    /// Resolves the shared instance for `T`, if one was registered.
    pub fn get_shared<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.services
            .get(&TypeId::of::<T>())?
            .downcast_ref::<Arc<T>>()
            .cloned()
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no services are registered.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
