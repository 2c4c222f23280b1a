//! Workspace
//!
//! The workspace is the graph container: it owns every component instance
//! and every connection, assigns their identifiers, and enforces the wiring
//! rules before a connection is admitted.
//!
//! # Ownership
//!
//! Components live inside the workspace that created them and never move
//! between workspaces. Callers hold [`ComponentHandle`]s and pin
//! references; mutators verify a handle's recorded workspace before
//! touching anything, so a handle minted elsewhere is rejected instead of
//! silently mutating foreign state.
//!
//! # Indices
//!
//! Connections are tracked three ways: a flat insertion-ordered store for
//! enumeration, and two multimaps keyed by source and target component.
//! The multimaps give O(1) access to "all connections touching component X"
//! in either role, which both the propagation engine and pin-detach
//! operations depend on. A bucket is deleted outright when it empties, so
//! "has any incoming connection" stays a plain key lookup.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::{
    ComponentArgs, ComponentBehavior, ComponentHandle, ComponentId, ComponentState, Connection,
    ConnectionId, PinDirection, PinRef, Position, WorkspaceId,
};
use crate::registry::{ComponentDescriptor, ComponentRegistry};

/// A container for component instances and the connections between them.
pub struct Workspace {
    id: WorkspaceId,
    name: String,
    /// Insertion-ordered so enumeration and evaluation seeding are
    /// deterministic for a fixed construction sequence.
    components: IndexMap<ComponentId, ComponentState>,
    connections: IndexMap<ConnectionId, Connection>,
    /// Connections whose source pin sits on the keyed component, in the
    /// order they were added. Bucket removed when empty.
    by_source: HashMap<ComponentId, Vec<ConnectionId>>,
    /// Connections whose target pin sits on the keyed component, in the
    /// order they were added. Bucket removed when empty.
    by_target: HashMap<ComponentId, Vec<ConnectionId>>,
    next_component_id: u64,
    next_connection_id: u64,
}

impl Workspace {
    /// Create an empty workspace with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorkspaceId::new(),
            name: name.into(),
            components: IndexMap::new(),
            connections: IndexMap::new(),
            by_source: HashMap::new(),
            by_target: HashMap::new(),
            next_component_id: 0,
            next_connection_id: 0,
        }
    }

    /// The workspace's unique id.
    pub fn id(&self) -> WorkspaceId {
        self.id
    }

    /// The workspace's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------

    /// Create a component from a descriptor and add it to the workspace.
    ///
    /// The descriptor's factory runs, the produced instance is validated
    /// against the behavior's declared pin counts, and on success the
    /// instance receives the next sequential id. Ids are never reused,
    /// even after removal.
    pub fn add_component(
        &mut self,
        descriptor: &Arc<ComponentDescriptor>,
        args: ComponentArgs,
    ) -> Result<ComponentHandle> {
        let id = ComponentId::from(self.next_component_id);
        let component = ComponentState::build(Arc::clone(descriptor), args, id)?;
        self.next_component_id += 1;

        info!(
            workspace = %self.name,
            component = %descriptor.name(),
            id = %id,
            "adding component"
        );
        self.components.insert(id, component);

        Ok(ComponentHandle {
            workspace: self.id,
            id,
        })
    }

    /// Look a descriptor up in the registry by name, then add it.
    pub fn add_component_by_name(
        &mut self,
        registry: &ComponentRegistry,
        name: &str,
        args: ComponentArgs,
    ) -> Result<ComponentHandle> {
        let descriptor = registry.get(name)?;
        self.add_component(&descriptor, args)
    }

    /// Remove a component, purging every connection that touches any of
    /// its pins first so the connection indices stay consistent.
    pub fn remove_component(&mut self, id: ComponentId) -> Result<()> {
        if !self.components.contains_key(&id) {
            return Err(Error::UnknownComponent { component: id });
        }

        let mut touching: Vec<ConnectionId> = Vec::new();
        if let Some(bucket) = self.by_source.get(&id) {
            touching.extend_from_slice(bucket);
        }
        if let Some(bucket) = self.by_target.get(&id) {
            touching.extend_from_slice(bucket);
        }
        for connection_id in touching {
            self.unlink(connection_id);
        }

        self.components.shift_remove(&id);
        info!(workspace = %self.name, id = %id, "removed component");
        Ok(())
    }

    /// Look a component up by id.
    pub fn component(&self, id: ComponentId) -> Option<&ComponentState> {
        self.components.get(&id)
    }

    /// All components, in the order they were added.
    pub fn components(&self) -> impl Iterator<Item = &ComponentState> {
        self.components.values()
    }

    /// Number of components in the workspace.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Mutable access to a component's behavior, for host interaction
    /// with component-local state (e.g. toggling a switch).
    pub fn behavior_mut(&mut self, id: ComponentId) -> Option<&mut dyn ComponentBehavior> {
        self.components.get_mut(&id).map(|c| c.behavior_mut())
    }

    /// A component's position.
    pub fn position(&self, component: ComponentHandle) -> Result<Position> {
        self.owned(component)?;
        Ok(self.components[&component.id].position())
    }

    /// Move a component.
    ///
    /// Rejected with [`Error::NotOwned`] when the handle was minted by a
    /// different workspace; the position is left unchanged.
    pub fn set_position(&mut self, component: ComponentHandle, position: Position) -> Result<()> {
        self.owned(component)?;
        self.components
            .get_mut(&component.id)
            .expect("owned() checked presence")
            .set_position(position);
        Ok(())
    }

    fn owned(&self, component: ComponentHandle) -> Result<()> {
        if component.workspace != self.id {
            return Err(Error::NotOwned {
                component: component.id,
                workspace: self.name.clone(),
            });
        }
        if !self.components.contains_key(&component.id) {
            return Err(Error::UnknownComponent {
                component: component.id,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Connections
    // ------------------------------------------------------------------

    /// Wire an output pin to an input pin.
    ///
    /// Checks run in order, stopping at the first failure:
    ///
    /// 1. both pins must name components present in this workspace;
    /// 2. the source must be an output pin and the target an input pin;
    /// 3. both pin indices must be in range;
    /// 4. the target input pin must not already be connected (inputs
    ///    accept at most one incoming connection; outputs fan out freely).
    pub fn add_connection(&mut self, source: PinRef, target: PinRef) -> Result<ConnectionId> {
        let source_component =
            self.components
                .get(&source.component)
                .ok_or(Error::UnknownComponent {
                    component: source.component,
                })?;
        let target_component =
            self.components
                .get(&target.component)
                .ok_or(Error::UnknownComponent {
                    component: target.component,
                })?;

        if source.direction != PinDirection::Output || target.direction != PinDirection::Input {
            return Err(Error::InvalidDirection);
        }

        if source.index >= source_component.outputs().len() {
            return Err(Error::PinIndexOutOfRange {
                component: source.component,
                direction: PinDirection::Output,
                index: source.index,
                available: source_component.outputs().len(),
            });
        }
        if target.index >= target_component.inputs().len() {
            return Err(Error::PinIndexOutOfRange {
                component: target.component,
                direction: PinDirection::Input,
                index: target.index,
                available: target_component.inputs().len(),
            });
        }

        if self.is_pin_connected(target) {
            return Err(Error::InputAlreadyConnected {
                component: target.component,
                index: target.index,
            });
        }

        let id = ConnectionId::from(self.next_connection_id);
        self.next_connection_id += 1;

        self.connections
            .insert(id, Connection::new(id, source, target));
        self.by_source.entry(source.component).or_default().push(id);
        self.by_target.entry(target.component).or_default().push(id);

        info!(workspace = %self.name, connection = %id, "added connection");
        Ok(id)
    }

    /// Remove every connection attached to the given pin: as source if it
    /// is an output pin, as target if it is an input pin.
    ///
    /// Returns how many connections were removed.
    pub fn remove_connections(&mut self, pin: PinRef) -> usize {
        let matching: Vec<ConnectionId> = self
            .bucket(pin)
            .iter()
            .copied()
            .filter(|id| self.pin_side(*id, pin.direction) == pin)
            .collect();

        for id in &matching {
            self.unlink(*id);
        }
        matching.len()
    }

    /// Whether the pin has any attached connection on its matching side:
    /// source for output pins, target for input pins.
    pub fn is_pin_connected(&self, pin: PinRef) -> bool {
        self.bucket(pin)
            .iter()
            .any(|id| self.pin_side(*id, pin.direction) == pin)
    }

    /// Look a connection up by id.
    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    /// All connections, in the order they were added.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Number of connections in the workspace.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Connections whose source pin sits on the given component, in the
    /// order they were added.
    pub fn connections_from(&self, component: ComponentId) -> impl Iterator<Item = &Connection> {
        self.by_source
            .get(&component)
            .into_iter()
            .flatten()
            .map(|id| &self.connections[id])
    }

    /// Connections whose target pin sits on the given component, in the
    /// order they were added.
    pub fn connections_to(&self, component: ComponentId) -> impl Iterator<Item = &Connection> {
        self.by_target
            .get(&component)
            .into_iter()
            .flatten()
            .map(|id| &self.connections[id])
    }

    // ------------------------------------------------------------------
    // Internals shared with the propagation engine
    // ------------------------------------------------------------------

    pub(crate) fn components_mut(&mut self) -> &mut IndexMap<ComponentId, ComponentState> {
        &mut self.components
    }

    pub(crate) fn component_ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.components.keys().copied()
    }

    pub(crate) fn has_incoming(&self, component: ComponentId) -> bool {
        self.by_target.contains_key(&component)
    }

    pub(crate) fn outgoing(&self, component: ComponentId) -> &[ConnectionId] {
        self.by_source
            .get(&component)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn connection_unchecked(&self, id: ConnectionId) -> Connection {
        self.connections[&id]
    }

    pub(crate) fn component_mut(&mut self, id: ComponentId) -> Option<&mut ComponentState> {
        self.components.get_mut(&id)
    }

    /// The multimap bucket holding connections that could match the pin.
    fn bucket(&self, pin: PinRef) -> &[ConnectionId] {
        let map = match pin.direction {
            PinDirection::Output => &self.by_source,
            PinDirection::Input => &self.by_target,
        };
        map.get(&pin.component).map(Vec::as_slice).unwrap_or_default()
    }

    /// The connection's pin on the given side.
    fn pin_side(&self, id: ConnectionId, direction: PinDirection) -> PinRef {
        let connection = &self.connections[&id];
        match direction {
            PinDirection::Output => connection.source(),
            PinDirection::Input => connection.target(),
        }
    }

    /// Remove one connection from the flat store and both multimaps,
    /// deleting a bucket when it empties.
    fn unlink(&mut self, id: ConnectionId) {
        let Some(connection) = self.connections.shift_remove(&id) else {
            return;
        };
        Self::drop_from_bucket(&mut self.by_source, connection.source().component, id);
        Self::drop_from_bucket(&mut self.by_target, connection.target().component, id);
    }

    fn drop_from_bucket(
        map: &mut HashMap<ComponentId, Vec<ConnectionId>>,
        component: ComponentId,
        id: ConnectionId,
    ) {
        if let Some(bucket) = map.get_mut(&component) {
            bucket.retain(|candidate| *candidate != id);
            if bucket.is_empty() {
                map.remove(&component);
            }
        }
    }
}
