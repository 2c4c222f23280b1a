//! Components and Pins
//!
//! This module defines the node side of the component graph: identifiers,
//! pin addressing, the behavior contract every concrete component
//! implements, and the instance record a workspace owns for each placed
//! component.
//!
//! # The Component Contract
//!
//! A component is a pure function of its current input vector, run once per
//! evaluation pass. Pin vectors are fixed-length for the lifetime of the
//! instance: their lengths are set by the factory and never resized.
//! Component-local state is allowed where it is part of the device itself
//! (a switch holds its open/closed position), but behaviors must not keep
//! timers or other hidden asynchrony.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::registry::ComponentDescriptor;

/// Pin state storage. Components rarely have more than four pins per side,
/// so the values stay inline.
pub type Pins = SmallVec<[bool; 4]>;

/// Unique identifier for a workspace.
///
/// Allocated from a process-wide counter so that instances created by
/// different workspaces can never be confused for one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkspaceId(u64);

impl WorkspaceId {
    /// Generate a new unique workspace ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for WorkspaceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a component within a workspace.
///
/// Assigned from the workspace's monotonic counter when the component is
/// added and never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ComponentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of a component a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinDirection {
    /// A pin that receives a value from an upstream output.
    Input,
    /// A pin that drives downstream inputs.
    Output,
}

impl fmt::Display for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinDirection::Input => f.write_str("input"),
            PinDirection::Output => f.write_str("output"),
        }
    }
}

/// Addresses a single pin on a component: which component, which side,
/// which slot. Computed on demand, never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinRef {
    /// The component the pin belongs to.
    pub component: ComponentId,
    /// Which side of the component.
    pub direction: PinDirection,
    /// Zero-based slot on that side.
    pub index: usize,
}

impl PinRef {
    /// Reference an input pin.
    pub fn input(component: ComponentId, index: usize) -> Self {
        Self {
            component,
            direction: PinDirection::Input,
            index,
        }
    }

    /// Reference an output pin.
    pub fn output(component: ComponentId, index: usize) -> Self {
        Self {
            component,
            direction: PinDirection::Output,
            index,
        }
    }
}

/// Stable reference to a placed component: the owning workspace plus the
/// component's id within it.
///
/// Returned by [`Workspace::add_component`](crate::graph::Workspace::add_component).
/// Mutators that accept a handle reject handles minted by a different
/// workspace, so a stray handle can never reach across workspaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle {
    pub(crate) workspace: WorkspaceId,
    pub(crate) id: ComponentId,
}

impl ComponentHandle {
    /// The component's id within its workspace.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Reference one of the component's input pins.
    pub fn input(&self, index: usize) -> PinRef {
        PinRef::input(self.id, index)
    }

    /// Reference one of the component's output pins.
    pub fn output(&self, index: usize) -> PinRef {
        PinRef::output(self.id, index)
    }
}

/// A position in workspace coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Construction arguments carried by every component instance.
///
/// Holds the component's position plus an open-ended `props` bag the host
/// can use for anything else (labels, styling, editor state). The engine
/// itself only ever touches `position`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentArgs {
    /// Where the component sits in the workspace.
    pub position: Position,
    /// Open-ended host extras. `Null` when unused.
    #[serde(default)]
    pub props: serde_json::Value,
}

impl ComponentArgs {
    /// Arguments with the given position and no extras.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Position::new(x, y),
            props: serde_json::Value::Null,
        }
    }
}

impl Default for ComponentArgs {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

/// The behavior contract every concrete component implements.
pub trait ComponentBehavior: Send {
    /// The (input, output) pin counts this behavior expects. Must agree
    /// with the pin vectors its factory allocates.
    fn pin_counts(&self) -> (usize, usize);

    /// Compute outputs from the current inputs. Called once per evaluation
    /// pass, after every staged input has been written.
    fn update(&mut self, inputs: &[bool], outputs: &mut [bool]);

    /// Downcast hook for hosts that need to reach component-local state,
    /// e.g. toggling a switch.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// What a descriptor's factory produces: freshly-allocated pin vectors plus
/// the behavior that will drive them.
///
/// The pin vectors are declared separately from the behavior so the
/// workspace can check they agree with [`ComponentBehavior::pin_counts`]
/// before admitting the instance.
pub struct ComponentCore {
    /// Input pin values. Empty for source components.
    pub inputs: Pins,
    /// Output pin values. Empty for sink components.
    pub outputs: Pins,
    /// The logic driving the pins.
    pub behavior: Box<dyn ComponentBehavior>,
}

/// A live component instance, owned exclusively by the workspace that
/// created it.
pub struct ComponentState {
    id: ComponentId,
    descriptor: Arc<ComponentDescriptor>,
    inputs: Pins,
    outputs: Pins,
    behavior: Box<dyn ComponentBehavior>,
    args: ComponentArgs,
}

impl ComponentState {
    /// Run the descriptor's factory and validate the produced instance.
    ///
    /// The behavior's declared pin counts must agree with the pin vectors
    /// the factory allocated; a mismatch is reported rather than silently
    /// truncating or padding pin state.
    pub(crate) fn build(
        descriptor: Arc<ComponentDescriptor>,
        args: ComponentArgs,
        id: ComponentId,
    ) -> Result<Self> {
        let core = descriptor.instantiate();
        let (expected_inputs, expected_outputs) = core.behavior.pin_counts();

        if core.inputs.len() != expected_inputs {
            return Err(Error::InvalidComponentInstance {
                name: descriptor.name().to_string(),
                detail: format!(
                    "behavior expects {} input pin(s), factory provided {}",
                    expected_inputs,
                    core.inputs.len()
                ),
            });
        }
        if core.outputs.len() != expected_outputs {
            return Err(Error::InvalidComponentInstance {
                name: descriptor.name().to_string(),
                detail: format!(
                    "behavior expects {} output pin(s), factory provided {}",
                    expected_outputs,
                    core.outputs.len()
                ),
            });
        }

        Ok(Self {
            id,
            descriptor,
            inputs: core.inputs,
            outputs: core.outputs,
            behavior: core.behavior,
            args,
        })
    }

    /// The component's id within its workspace.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// The descriptor this instance was created from.
    pub fn descriptor(&self) -> &Arc<ComponentDescriptor> {
        &self.descriptor
    }

    /// Current input pin values.
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// Current output pin values.
    pub fn outputs(&self) -> &[bool] {
        &self.outputs
    }

    /// The instance's construction arguments.
    pub fn args(&self) -> &ComponentArgs {
        &self.args
    }

    /// The instance's position.
    pub fn position(&self) -> Position {
        self.args.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.args.position = position;
    }

    /// Mutable access to the behavior, for host interaction with
    /// component-local state.
    pub fn behavior_mut(&mut self) -> &mut dyn ComponentBehavior {
        &mut *self.behavior
    }

    /// Set every input pin back to its default.
    pub(crate) fn reset_inputs(&mut self) {
        self.inputs.fill(false);
    }

    /// Stage a value on one input pin.
    pub(crate) fn set_input(&mut self, index: usize, value: bool) {
        self.inputs[index] = value;
    }

    /// Run the behavior over the current inputs.
    pub(crate) fn evaluate(&mut self) {
        self.behavior.update(&self.inputs, &mut self.outputs);
    }
}

impl fmt::Debug for ComponentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentState")
            .field("id", &self.id)
            .field("descriptor", &self.descriptor.name())
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("position", &self.args.position)
            .finish()
    }
}
