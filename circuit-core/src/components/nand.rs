//! NAND gate: two inputs, one output, `out = !(in0 && in1)`.
//!
//! NAND is functionally complete, so this single gate is enough to build
//! any combinational circuit in a workspace.

use std::any::Any;

use smallvec::smallvec;

use crate::graph::{ComponentBehavior, ComponentCore};
use crate::registry::ComponentDescriptor;

/// Type name this component registers under.
pub const NAME: &str = "nand";

#[derive(Debug, Default)]
pub struct Nand;

impl ComponentBehavior for Nand {
    fn pin_counts(&self) -> (usize, usize) {
        (2, 1)
    }

    fn update(&mut self, inputs: &[bool], outputs: &mut [bool]) {
        outputs[0] = !(inputs[0] && inputs[1]);
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Descriptor for the NAND gate.
pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, "1.0.0.0", || ComponentCore {
        inputs: smallvec![false, false],
        outputs: smallvec![false],
        behavior: Box::new(Nand),
    })
}
