//! Connections
//!
//! A connection is a directed edge from one component's output pin to
//! another component's input pin. Every input pin accepts at most one
//! incoming connection; output pins fan out freely. The workspace enforces
//! those rules when a connection is admitted.

use std::fmt;

use crate::graph::PinRef;

/// Unique identifier for a connection within a workspace.
///
/// Assigned from the workspace's monotonic counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ConnectionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge from an output pin to an input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    id: ConnectionId,
    source: PinRef,
    target: PinRef,
}

impl Connection {
    pub(crate) fn new(id: ConnectionId, source: PinRef, target: PinRef) -> Self {
        Self { id, source, target }
    }

    /// The connection's id within its workspace.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// The driving output pin.
    pub fn source(&self) -> PinRef {
        self.source
    }

    /// The driven input pin.
    pub fn target(&self) -> PinRef {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ComponentId;

    #[test]
    fn connection_exposes_its_endpoints() {
        let source = PinRef::output(ComponentId::from(1), 0);
        let target = PinRef::input(ComponentId::from(2), 1);
        let connection = Connection::new(ConnectionId::from(5), source, target);

        assert_eq!(connection.id().raw(), 5);
        assert_eq!(connection.source(), source);
        assert_eq!(connection.target(), target);
    }
}
