//! Propagation Engine
//!
//! One call to [`Workspace::update`] is one simulation tick. A tick
//! evaluates every reachable component in dependency order and pushes
//! output values across connections to downstream inputs.
//!
//! # Algorithm
//!
//! 1. **Reset**: every input pin of every component is set back to false,
//!    so no input carries a stale value into the new tick.
//!
//! 2. **Seed**: every component with no incoming connections enters the
//!    processing queue, in the order components were added. (A component
//!    with zero input pins can never be a connection target, so this
//!    subsumes the no-inputs case.)
//!
//! 3. **Propagate**: the queue is processed FIFO. The front component's
//!    behavior runs (all of its staged inputs have been written by this
//!    point), then each of its outgoing connections, in the order they
//!    were added, copies the source output value onto the target input
//!    pin. The target is enqueued unless it was already enqueued this
//!    tick; the membership check covers processed components too, so every
//!    component runs at most once per tick and total work is bounded by
//!    O(components + connections).
//!
//! 4. Queue exhaustion ends the tick.
//!
//! The order is breadth-first from the seeds and fully determined by
//! construction order, which keeps fixtures reproducible. It is one valid
//! topological order among several; no strict dependency verification is
//! attempted. Two consequences, inherited from the seeding rule:
//!
//! - a component whose inputs are only partly wired is reached through its
//!   wired predecessors and sees reset defaults on the unwired pins;
//! - a combinational cycle with no external driver is never seeded and
//!   never evaluated, and a cycle reached from a seed is evaluated at most
//!   once per tick with whatever inputs had propagated when it was first
//!   reached. Cycles are not detected or reported.

use std::collections::HashSet;

use tracing::trace;

use crate::graph::{ComponentId, Workspace};

impl Workspace {
    /// Run one simulation tick.
    ///
    /// Never fails: evaluation only touches data that already passed
    /// validation when it was added. See the module docs for ordering and
    /// cycle semantics.
    pub fn update(&mut self) {
        // Reset phase.
        for component in self.components_mut().values_mut() {
            component.reset_inputs();
        }

        // Seed phase. The queue is grow-only: a cursor walks it instead of
        // popping, so `enqueued` keeps covering processed components.
        let mut queue: Vec<ComponentId> = Vec::with_capacity(self.component_count());
        let mut enqueued: HashSet<ComponentId> = HashSet::with_capacity(self.component_count());
        for id in self.component_ids().collect::<Vec<_>>() {
            if !self.has_incoming(id) {
                queue.push(id);
                enqueued.insert(id);
            }
        }
        trace!(workspace = %self.name(), seeds = queue.len(), "tick");

        // Propagation phase.
        let mut cursor = 0;
        while cursor < queue.len() {
            let id = queue[cursor];
            cursor += 1;

            if let Some(component) = self.component_mut(id) {
                component.evaluate();
            }

            for connection_id in self.outgoing(id).to_vec() {
                let connection = self.connection_unchecked(connection_id);
                let source = connection.source();
                let target = connection.target();

                let value = self
                    .component(source.component)
                    .map(|c| c.outputs()[source.index])
                    .unwrap_or_default();
                if let Some(component) = self.component_mut(target.component) {
                    component.set_input(target.index, value);
                }

                if enqueued.insert(target.component) {
                    queue.push(target.component);
                }
            }
        }
    }
}
