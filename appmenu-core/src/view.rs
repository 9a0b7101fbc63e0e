//! View bindings: the seam between the controller and the render layer.
//!
//! The controller never renders anything itself. It resolves named bindings at
//! construction and pushes data through them; how a binding turns that data
//! into pixels is the embedder's concern.

use crate::error::MenuError;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A typed data sink in the render layer.
pub trait DataView<T>: Send + Sync {
    /// Replaces the displayed data.
    fn set_data(&self, value: T);
}

/// A boolean on/off region in the render layer.
pub trait ViewToggle: Send + Sync {
    /// Sets the on/off mode.
    fn set_mode(&self, on: bool);
}

/// Named registry of render-layer bindings.
///
/// Bindings are registered under string keys and resolved with their expected
/// type; a key bound to a different type is reported as
/// [MenuError::BindingType] rather than silently mismatching.
#[derive(Default)]
pub struct BindingCollection {
    bindings: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl BindingCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a data view under `key`, replacing any previous binding.
    pub fn add_view<T: 'static>(&mut self, key: impl Into<String>, view: Arc<dyn DataView<T>>) {
        self.bindings.insert(key.into(), Box::new(view));
    }

    /// Registers a toggle under `key`, replacing any previous binding.
    pub fn add_toggle(&mut self, key: impl Into<String>, toggle: Arc<dyn ViewToggle>) {
        self.bindings.insert(key.into(), Box::new(toggle));
    }

    /// Resolves the data view registered under `key`.
    pub fn view<T: 'static>(&self, key: &str) -> Result<Arc<dyn DataView<T>>, MenuError> {
        let binding = self
            .bindings
            .get(key)
            .ok_or_else(|| MenuError::MissingBinding(key.to_string()))?;
        binding
            .downcast_ref::<Arc<dyn DataView<T>>>()
            .cloned()
            .ok_or_else(|| MenuError::BindingType(key.to_string()))
    }

    /// Resolves the toggle registered under `key`.
    pub fn toggle(&self, key: &str) -> Result<Arc<dyn ViewToggle>, MenuError> {
        let binding = self
            .bindings
            .get(key)
            .ok_or_else(|| MenuError::MissingBinding(key.to_string()))?;
        binding
            .downcast_ref::<Arc<dyn ViewToggle>>()
            .cloned()
            .ok_or_else(|| MenuError::BindingType(key.to_string()))
    }
}
