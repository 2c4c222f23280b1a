//! Circuit Core
//!
//! This crate provides the simulation core for the circuit designer. It
//! implements:
//!
//! - A component registry (type name -> descriptor + factory)
//! - The workspace: the container owning component instances and the
//!   connections between their pins
//! - Connection validation (direction, pin bounds, fan-in rules)
//! - The per-tick propagation engine that evaluates the graph in
//!   dependency order
//! - The built-in component library (power source, NAND, LED, SPST
//!   switch)
//!
//! Rendering, editor chrome, and input handling live in the host
//! application; this crate is a pure request/response library. The host
//! mutates a workspace through its methods and drives simulation by
//! calling [`Workspace::update`](graph::Workspace::update) on whatever
//! cadence it likes.
//!
//! # Example
//!
//! ```rust
//! use circuit_core::{ComponentArgs, ComponentRegistry, Workspace};
//! use circuit_core::components;
//!
//! let mut registry = ComponentRegistry::new();
//! components::register_builtins(&mut registry).unwrap();
//!
//! let mut workspace = Workspace::new("editor");
//! let power = workspace
//!     .add_component_by_name(&registry, "power_source", ComponentArgs::at(0.0, 0.0))
//!     .unwrap();
//! let led = workspace
//!     .add_component_by_name(&registry, "led", ComponentArgs::at(100.0, 0.0))
//!     .unwrap();
//! workspace.add_connection(power.output(0), led.input(0)).unwrap();
//!
//! workspace.update();
//! assert_eq!(workspace.component(led.id()).unwrap().inputs(), &[true]);
//! ```

pub mod components;
pub mod error;
pub mod graph;
pub mod registry;

pub use error::{Error, Result};
pub use graph::{
    ComponentArgs, ComponentBehavior, ComponentCore, ComponentHandle, ComponentId, ComponentState,
    Connection, ConnectionId, PinDirection, PinRef, Pins, Position, Workspace, WorkspaceId,
};
pub use registry::{ComponentDescriptor, ComponentRegistry};

/// Engine version, for hosts that surface it in their chrome.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
