//! Built-in Components
//!
//! The standard component library: a power source, a NAND gate, an LED,
//! and a single-pole single-throw switch. Each submodule defines the
//! behavior type and a `descriptor()` constructor; hosts usually just call
//! [`register_builtins`] once at startup.

pub mod led;
pub mod nand;
pub mod power_source;
pub mod switch_spst;

use crate::error::Result;
use crate::registry::ComponentRegistry;

/// Register every built-in component type.
pub fn register_builtins(registry: &mut ComponentRegistry) -> Result<()> {
    registry.register(power_source::descriptor())?;
    registry.register(nand::descriptor())?;
    registry.register(led::descriptor())?;
    registry.register(switch_spst::descriptor())?;
    Ok(())
}
