//! Integration Tests for the Circuit Core
//!
//! These tests exercise the public surface end to end: registering
//! component types, placing and wiring them in a workspace, and driving
//! the simulation tick by tick.

use circuit_core::components::{self, switch_spst::SwitchSpst};
use circuit_core::{ComponentArgs, ComponentRegistry, Error, Position, Workspace};

fn registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    components::register_builtins(&mut registry).expect("builtins register");
    registry
}

/// The canonical fixture: power feeding both NAND inputs, NAND feeding an
/// LED. `true NAND true` is false, so the LED stays dark.
#[test]
fn powered_nand_keeps_the_led_dark() {
    let registry = registry();
    let mut workspace = Workspace::new("editor");

    let power = workspace
        .add_component_by_name(&registry, "power_source", ComponentArgs::at(0.0, 0.0))
        .unwrap();
    let nand = workspace
        .add_component_by_name(&registry, "nand", ComponentArgs::at(100.0, 0.0))
        .unwrap();
    let led = workspace
        .add_component_by_name(&registry, "led", ComponentArgs::at(200.0, 0.0))
        .unwrap();

    workspace.add_connection(power.output(0), nand.input(0)).unwrap();
    workspace.add_connection(power.output(0), nand.input(1)).unwrap();
    workspace.add_connection(nand.output(0), led.input(0)).unwrap();

    workspace.update();

    assert_eq!(workspace.component(nand.id()).unwrap().outputs(), &[false]);
    assert_eq!(workspace.component(led.id()).unwrap().inputs(), &[false]);
}

/// Detaching one NAND input flips the gate: `true NAND false` is true, so
/// the LED lights on the next tick.
#[test]
fn detaching_one_nand_input_lights_the_led() {
    let registry = registry();
    let mut workspace = Workspace::new("editor");

    let power = workspace
        .add_component_by_name(&registry, "power_source", ComponentArgs::at(0.0, 0.0))
        .unwrap();
    let nand = workspace
        .add_component_by_name(&registry, "nand", ComponentArgs::at(100.0, 0.0))
        .unwrap();
    let led = workspace
        .add_component_by_name(&registry, "led", ComponentArgs::at(200.0, 0.0))
        .unwrap();

    workspace.add_connection(power.output(0), nand.input(0)).unwrap();
    workspace.add_connection(power.output(0), nand.input(1)).unwrap();
    workspace.add_connection(nand.output(0), led.input(0)).unwrap();

    workspace.update();
    assert_eq!(workspace.component(led.id()).unwrap().inputs(), &[false]);

    workspace.remove_connections(nand.input(1));
    workspace.update();

    let nand_state = workspace.component(nand.id()).unwrap();
    assert_eq!(nand_state.inputs(), &[true, false]);
    assert_eq!(nand_state.outputs(), &[true]);
    assert_eq!(workspace.component(led.id()).unwrap().inputs(), &[true]);
}

/// Power through a switch into an LED; toggling the switch open cuts the
/// light on the next tick.
#[test]
fn toggling_a_switch_cuts_the_led() {
    let registry = registry();
    let mut workspace = Workspace::new("editor");

    let power = workspace
        .add_component_by_name(&registry, "power_source", ComponentArgs::at(0.0, 0.0))
        .unwrap();
    let switch = workspace
        .add_component_by_name(&registry, "switch_spst", ComponentArgs::at(100.0, 0.0))
        .unwrap();
    let led = workspace
        .add_component_by_name(&registry, "led", ComponentArgs::at(200.0, 0.0))
        .unwrap();

    workspace.add_connection(power.output(0), switch.input(0)).unwrap();
    workspace.add_connection(switch.output(0), led.input(0)).unwrap();

    workspace.update();
    assert_eq!(workspace.component(led.id()).unwrap().inputs(), &[true]);

    workspace
        .behavior_mut(switch.id())
        .unwrap()
        .as_any_mut()
        .downcast_mut::<SwitchSpst>()
        .expect("switch component")
        .toggle();

    workspace.update();
    assert_eq!(workspace.component(led.id()).unwrap().inputs(), &[false]);
}

#[test]
fn a_workspace_rejects_foreign_handles() {
    let registry = registry();
    let mut editor = Workspace::new("editor");
    let mut scratch = Workspace::new("scratch");

    let handle = editor
        .add_component_by_name(&registry, "led", ComponentArgs::at(5.0, 5.0))
        .unwrap();

    let err = scratch
        .set_position(handle, Position::new(50.0, 50.0))
        .unwrap_err();
    assert!(matches!(err, Error::NotOwned { .. }));

    // The component did not move.
    assert_eq!(editor.position(handle).unwrap(), Position::new(5.0, 5.0));
}

#[test]
fn renderer_queries_expose_the_whole_graph() {
    let registry = registry();
    let mut workspace = Workspace::new("editor");

    let power = workspace
        .add_component_by_name(&registry, "power_source", ComponentArgs::at(0.0, 0.0))
        .unwrap();
    let led = workspace
        .add_component_by_name(&registry, "led", ComponentArgs::at(150.0, -40.0))
        .unwrap();
    workspace.add_connection(power.output(0), led.input(0)).unwrap();

    // Components enumerate in placement order, with their positions.
    let placed: Vec<_> = workspace
        .components()
        .map(|c| (c.descriptor().name().to_string(), c.position()))
        .collect();
    assert_eq!(
        placed,
        vec![
            ("power_source".to_string(), Position::new(0.0, 0.0)),
            ("led".to_string(), Position::new(150.0, -40.0)),
        ]
    );

    // Connections enumerate as source/target pin pairs.
    let wires: Vec<_> = workspace
        .connections()
        .map(|c| (c.source(), c.target()))
        .collect();
    assert_eq!(wires, vec![(power.output(0), led.input(0))]);

    // Pin hover feedback.
    assert!(workspace.is_pin_connected(power.output(0)));
    assert!(workspace.is_pin_connected(led.input(0)));
    let spare = workspace
        .add_component_by_name(&registry, "led", ComponentArgs::default())
        .unwrap();
    assert!(!workspace.is_pin_connected(spare.input(0)));
}

/// Ids keep increasing across removals, so a stale id can never alias a
/// newer component.
#[test]
fn identifiers_stay_monotonic_across_removals() {
    let registry = registry();
    let mut workspace = Workspace::new("editor");

    let first = workspace
        .add_component_by_name(&registry, "led", ComponentArgs::default())
        .unwrap();
    workspace.remove_component(first.id()).unwrap();
    let second = workspace
        .add_component_by_name(&registry, "led", ComponentArgs::default())
        .unwrap();

    assert!(second.id().raw() > first.id().raw());
    assert!(workspace.component(first.id()).is_none());
}

#[test]
fn unregistered_names_are_reported() {
    let registry = registry();
    let mut workspace = Workspace::new("editor");

    let err = workspace
        .add_component_by_name(&registry, "flux_capacitor", ComponentArgs::default())
        .unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            name: "flux_capacitor".to_string()
        }
    );
}
