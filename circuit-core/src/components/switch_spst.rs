//! Single-pole single-throw switch: one input, one output.
//!
//! Closed (the default), the switch forwards its input to its output.
//! Open, it drives the output low regardless of the input. The host
//! toggles the switch through the workspace's `behavior_mut` downcast
//! hook, typically on a click.

use std::any::Any;

use smallvec::smallvec;

use crate::graph::{ComponentBehavior, ComponentCore};
use crate::registry::ComponentDescriptor;

/// Type name this component registers under.
pub const NAME: &str = "switch_spst";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    Open,
    Closed,
}

#[derive(Debug)]
pub struct SwitchSpst {
    state: SwitchState,
}

impl SwitchSpst {
    pub fn new() -> Self {
        Self {
            state: SwitchState::Closed,
        }
    }

    /// Whether the switch currently blocks its input.
    pub fn is_open(&self) -> bool {
        self.state == SwitchState::Open
    }

    /// Flip the switch to the other position.
    pub fn toggle(&mut self) {
        self.state = if self.is_open() {
            SwitchState::Closed
        } else {
            SwitchState::Open
        };
    }
}

impl Default for SwitchSpst {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentBehavior for SwitchSpst {
    fn pin_counts(&self) -> (usize, usize) {
        (1, 1)
    }

    fn update(&mut self, inputs: &[bool], outputs: &mut [bool]) {
        outputs[0] = if self.is_open() { false } else { inputs[0] };
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Descriptor for the SPST switch.
pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, "1.0.0.0", || ComponentCore {
        inputs: smallvec![false],
        outputs: smallvec![false],
        behavior: Box::new(SwitchSpst::new()),
    })
}
