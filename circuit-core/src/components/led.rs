//! LED: one input, no outputs.
//!
//! The lit state is simply the input pin's value after a tick; the
//! renderer reads it via the workspace's component queries.

use std::any::Any;

use smallvec::smallvec;

use crate::graph::{ComponentBehavior, ComponentCore, Pins};
use crate::registry::ComponentDescriptor;

/// Type name this component registers under.
pub const NAME: &str = "led";

#[derive(Debug, Default)]
pub struct Led;

impl ComponentBehavior for Led {
    fn pin_counts(&self) -> (usize, usize) {
        (1, 0)
    }

    fn update(&mut self, _inputs: &[bool], _outputs: &mut [bool]) {
        // Nothing to compute; the input pin is the lit state.
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Descriptor for the LED.
pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, "1.0.0.0", || ComponentCore {
        inputs: smallvec![false],
        outputs: Pins::new(),
        behavior: Box::new(Led),
    })
}
