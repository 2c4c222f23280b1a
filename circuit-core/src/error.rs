//! Error types for the circuit core.
//!
//! Every failure the engine can report is enumerated here. Errors are
//! detected synchronously at the offending call and returned to the caller;
//! nothing is retried or swallowed inside the engine, and the propagation
//! tick itself has no failure path (it only touches data that already
//! passed validation).

use thiserror::Error;

use crate::graph::{ComponentId, PinDirection};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the registry, the workspace, and the connection
/// validator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A descriptor with this name is already registered. The registry
    /// retains the first registration.
    #[error("component '{name}' already registered")]
    DuplicateName { name: String },

    /// A descriptor is missing a required field.
    #[error("descriptor has no {field} (please provide a non-empty value)")]
    InvalidDescriptor { field: &'static str },

    /// No descriptor with this name has been registered.
    #[error("component '{name}' has not been registered")]
    NotFound { name: String },

    /// A factory produced an instance that violates the component contract.
    #[error("component instance '{name}' is invalid: {detail}")]
    InvalidComponentInstance { name: String, detail: String },

    /// The component was created by a different workspace.
    #[error("component {component} is not owned by workspace '{workspace}'")]
    NotOwned {
        component: ComponentId,
        workspace: String,
    },

    /// A pin reference names a component that is not in this workspace.
    #[error("component {component} does not exist in this workspace")]
    UnknownComponent { component: ComponentId },

    /// Connections run strictly from an output pin to an input pin.
    #[error("connection must run from an output pin to an input pin")]
    InvalidDirection,

    /// A pin index exceeds the component's pin count.
    #[error(
        "pin index {index} out of range: component {component} has {available} {direction} pin(s)"
    )]
    PinIndexOutOfRange {
        component: ComponentId,
        direction: PinDirection,
        index: usize,
        available: usize,
    },

    /// The target input pin already has an incoming connection.
    #[error("input pin {index} of component {component} is already connected")]
    InputAlreadyConnected { component: ComponentId, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_part() {
        let err = Error::DuplicateName {
            name: "nand".into(),
        };
        assert_eq!(err.to_string(), "component 'nand' already registered");

        let err = Error::PinIndexOutOfRange {
            component: ComponentId::from(3),
            direction: PinDirection::Input,
            index: 2,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "pin index 2 out of range: component 3 has 2 input pin(s)"
        );
    }
}
