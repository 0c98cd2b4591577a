// crates/sandbox/src/main.rs

//! Minimal host harness: wires a demo actor, a stub collision-geometry
//! provider, and the reference VM, then loads the plugin and drives each
//! script entry point once.

use glam::{Mat3, Vec3};
use host_api::{FormId, FunctionRegistry, PluginHost, PluginInit, ScriptArgs, SpellId};
use scene_graph::WorldTransform;
use tip_plugin::bindings::{ENTRY_POINTS, SCRIPT_CLASS};
use tip_plugin::testing::{HostFixture, StubGeometry};

fn main() {
    // Actor with a sword in the right hand and a shield on the left arm.
    let mut fx = HostFixture::new(StubGeometry::with_lengths(52.0, 30.0))
        .weapon_node(WorldTransform {
            // Blade pointing up and slightly forward.
            rotate: Mat3::from_cols(Vec3::X, Vec3::new(0.0, 0.4, 0.9), Vec3::Y),
            translate: Vec3::new(25.0, 10.0, 110.0),
        })
        .shield_node(WorldTransform {
            rotate: Mat3::IDENTITY,
            translate: Vec3::new(-25.0, 5.0, 100.0),
        });
    fx.set_actor_position(Vec3::new(0.0, 0.0, 0.0));

    let mut vm = FunctionRegistry::new();
    let log_dir = std::env::temp_dir();
    let mut host =
        PluginHost::new(&mut vm, fx.env.geometry.clone()).with_log_dir(log_dir.clone());

    // Resolve the entry through the declared init signature, the way a real
    // host would after locating the symbol.
    let init: PluginInit = tip_plugin::plugin_load;
    if !init(&mut host) {
        eprintln!("plugin refused to load");
        return;
    }
    println!(
        "plugin loaded; log file at {}",
        log_dir.join("WeaponTipBridge.log").display()
    );

    let args = ScriptArgs {
        actor: Some(fx.actor),
        spell: Some(SpellId(0x0001_A4CC)),
        marker_base: Some(FormId(0x0000_003B)),
        snap_to_ground: false,
    };

    for (name, _) in ENTRY_POINTS {
        vm.call(SCRIPT_CLASS, name, &mut fx.world, &args);
        for event in fx.world.drain_cast_events() {
            println!(
                "{name}: cast {:?} at ({:.1}, {:.1}, {:.1}) blaming {:?}",
                event.spell, event.origin.x, event.origin.y, event.origin.z, event.blame
            );
        }
    }
}
