// Full register-then-call path: plugin_load against the reference VM, then
// script invocations driven the way the host would drive them.

use glam::{Mat3, Vec3};
use host_api::{FormId, FunctionRegistry, PluginHost, ScriptArgs, SpellId};
use scene_graph::WorldTransform;
use tip_plugin::bindings::SCRIPT_CLASS;
use tip_plugin::testing::{HostFixture, StubGeometry};

// Rotation whose forward (second) column points along +Z.
fn z_forward() -> Mat3 {
    Mat3::from_cols(Vec3::X, Vec3::Z, Vec3::Y)
}

fn loaded_fixture() -> (FunctionRegistry, HostFixture) {
    let fx = HostFixture::new(StubGeometry::with_lengths(10.0, 4.0))
        .weapon_node(WorldTransform {
            rotate: z_forward(),
            translate: Vec3::new(1.0, 2.0, 3.0),
        })
        .shield_node(WorldTransform {
            rotate: z_forward(),
            translate: Vec3::new(-1.0, 0.0, 0.0),
        });

    let mut vm = FunctionRegistry::new();
    let mut host = PluginHost::new(&mut vm, fx.env.geometry.clone());
    assert!(tip_plugin::plugin_load(&mut host));
    (vm, fx)
}

fn args_for(fx: &HostFixture) -> ScriptArgs {
    ScriptArgs {
        actor: Some(fx.actor),
        spell: Some(SpellId(11)),
        marker_base: Some(FormId(42)),
        snap_to_ground: false,
    }
}

#[test]
fn load_registers_the_three_entry_points() {
    let (vm, _fx) = loaded_fixture();
    assert_eq!(vm.len(), 3);
}

#[test]
fn host_api_version_mismatch_refuses_to_load() {
    let fx = HostFixture::new(StubGeometry::with_length(10.0));
    let mut vm = FunctionRegistry::new();
    let mut host = PluginHost::new(&mut vm, fx.env.geometry.clone());
    host.api_version += 1;

    assert!(!tip_plugin::plugin_load(&mut host));
    assert!(vm.is_empty());
}

#[test]
fn weapon_tip_cast_lands_at_the_damped_tip() {
    let (vm, mut fx) = loaded_fixture();
    let args = args_for(&fx);

    let called = vm.call(SCRIPT_CLASS, "CastSpellAtWeaponTip", &mut fx.world, &args);
    assert!(called);

    let events = fx.world.drain_cast_events();
    assert_eq!(events.len(), 1);
    // Node origin (1,2,3) + forward (0,0,1) * 10 * 0.8.
    assert_eq!(events[0].origin, Vec3::new(1.0, 2.0, 11.0));
    assert_eq!(events[0].blame, Some(fx.actor));
}

#[test]
fn opposite_entry_reflects_about_the_node_origin() {
    let (vm, mut fx) = loaded_fixture();
    let args = args_for(&fx);

    vm.call(SCRIPT_CLASS, "CastSpellAtWeaponTip", &mut fx.world, &args);
    vm.call(
        SCRIPT_CLASS,
        "CastSpellAtWeaponTipOpposite",
        &mut fx.world,
        &args,
    );

    let events = fx.world.drain_cast_events();
    assert_eq!(events.len(), 2);
    let node_origin = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(events[1].origin, node_origin - (events[0].origin - node_origin));
}

#[test]
fn shield_entry_reads_the_left_capsule() {
    let (vm, mut fx) = loaded_fixture();
    let args = args_for(&fx);

    vm.call(SCRIPT_CLASS, "CastSpellAtShieldTip", &mut fx.world, &args);

    let events = fx.world.drain_cast_events();
    // Shield node origin (-1,0,0) + forward * 4 * 0.8.
    assert_eq!(events[0].origin, Vec3::new(-1.0, 0.0, 3.2));
}

#[test]
fn missing_spell_argument_is_a_complete_no_op() {
    let (vm, mut fx) = loaded_fixture();
    let args = ScriptArgs {
        spell: None,
        ..args_for(&fx)
    };

    let called = vm.call(SCRIPT_CLASS, "CastSpellAtWeaponTip", &mut fx.world, &args);
    assert!(called);
    assert!(fx.world.cast_events().is_empty());
    assert_eq!(fx.world.live_refs(), 0);
}

#[test]
fn unresolvable_tip_places_no_marker() {
    // No WEAPON/SHIELD nodes on this skeleton at all.
    let mut fx = HostFixture::new(StubGeometry::with_length(10.0));
    let mut vm = FunctionRegistry::new();
    let mut host = PluginHost::new(&mut vm, fx.env.geometry.clone());
    assert!(tip_plugin::plugin_load(&mut host));
    let args = args_for(&fx);

    let called = vm.call(SCRIPT_CLASS, "CastSpellAtWeaponTip", &mut fx.world, &args);
    assert!(called);
    assert!(fx.world.cast_events().is_empty());
    assert_eq!(fx.world.live_refs(), 0);
}

#[test]
fn snap_to_ground_keeps_tip_horizontal_position() {
    let (vm, mut fx) = loaded_fixture();
    fx.set_actor_position(Vec3::new(0.0, 0.0, -5.0));
    let args = ScriptArgs {
        snap_to_ground: true,
        ..args_for(&fx)
    };

    vm.call(SCRIPT_CLASS, "CastSpellAtWeaponTip", &mut fx.world, &args);

    let events = fx.world.drain_cast_events();
    // Horizontal from the tip (1, 2), vertical from the caster (-5).
    assert_eq!(events[0].origin, Vec3::new(1.0, 2.0, -5.0));
}
