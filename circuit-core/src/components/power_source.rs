//! Power source: no inputs, one output, always high.

use std::any::Any;

use smallvec::smallvec;

use crate::graph::{ComponentBehavior, ComponentCore, Pins};
use crate::registry::ComponentDescriptor;

/// Type name this component registers under.
pub const NAME: &str = "power_source";

#[derive(Debug, Default)]
pub struct PowerSource;

impl ComponentBehavior for PowerSource {
    fn pin_counts(&self) -> (usize, usize) {
        (0, 1)
    }

    fn update(&mut self, _inputs: &[bool], outputs: &mut [bool]) {
        outputs[0] = true;
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Descriptor for the power source.
pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, "1.0.0.0", || ComponentCore {
        inputs: Pins::new(),
        outputs: smallvec![false],
        behavior: Box::new(PowerSource),
    })
}
