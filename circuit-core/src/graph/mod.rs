//! Component Graph
//!
//! This module implements the circuit's data-flow graph: component
//! instances with boolean input/output pins, directed connections from
//! output pins to input pins, and the per-tick propagation engine that
//! evaluates the graph in dependency order.
//!
//! # Overview
//!
//! - A [`Workspace`] owns every component instance and connection placed
//!   in it and assigns their identifiers.
//! - Connections are validated on admission: strictly output -> input,
//!   pin indices in range, and at most one incoming connection per input
//!   pin.
//! - [`Workspace::update`] runs one tick: inputs are reset, components
//!   with no incoming connections seed a FIFO queue, and values are pushed
//!   breadth-first along connections, each component evaluating at most
//!   once per tick.
//!
//! Everything here is synchronous and single-threaded: a workspace is one
//! mutable aggregate driven by one logical actor, and `&mut self` on every
//! mutator makes that exclusivity a compile-time fact.

mod component;
mod connection;
mod propagation;
mod workspace;

pub use component::{
    ComponentArgs, ComponentBehavior, ComponentCore, ComponentHandle, ComponentId, ComponentState,
    PinDirection, PinRef, Pins, Position, WorkspaceId,
};
pub use connection::{Connection, ConnectionId};
pub use workspace::Workspace;
