//! Component Registry
//!
//! The registry maps a component type name to its descriptor: the factory
//! that builds fresh instances plus the metadata a picker UI needs to list
//! the type. The registry is an explicit object: create one per session and
//! hand it to whoever needs lookups, so no hidden global state leaks
//! between tests or sessions.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::ComponentCore;

/// Immutable description of a component type: its unique name, a version
/// string, and the factory producing fresh instances.
pub struct ComponentDescriptor {
    name: String,
    version: String,
    factory: Box<dyn Fn() -> ComponentCore + Send + Sync>,
}

impl ComponentDescriptor {
    /// Describe a component type.
    pub fn new<F>(name: impl Into<String>, version: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> ComponentCore + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            version: version.into(),
            factory: Box::new(factory),
        }
    }

    /// The type name, unique within a registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type's version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Run the factory.
    pub(crate) fn instantiate(&self) -> ComponentCore {
        (self.factory)()
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("version", &self.version)
            .finish()
    }
}

/// Name-keyed collection of component descriptors.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    descriptors: IndexMap<String, Arc<ComponentDescriptor>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Register a descriptor.
    ///
    /// The name and version must be non-empty and the name must not
    /// already be taken; on a duplicate the registry retains the first
    /// registration. Returns the shared descriptor so the caller can add
    /// components without a second lookup.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> Result<Arc<ComponentDescriptor>> {
        if descriptor.name.is_empty() {
            return Err(Error::InvalidDescriptor { field: "name" });
        }
        if descriptor.version.is_empty() {
            return Err(Error::InvalidDescriptor { field: "version" });
        }
        if self.descriptors.contains_key(&descriptor.name) {
            return Err(Error::DuplicateName {
                name: descriptor.name.clone(),
            });
        }

        info!(component = %descriptor.name, version = %descriptor.version, "registering component");
        let descriptor = Arc::new(descriptor);
        self.descriptors
            .insert(descriptor.name().to_string(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Look a descriptor up by name.
    pub fn get(&self, name: &str) -> Result<Arc<ComponentDescriptor>> {
        self.descriptors
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
            })
    }

    /// Whether a descriptor with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// All registered descriptors, in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Arc<ComponentDescriptor>> {
        self.descriptors.values()
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
