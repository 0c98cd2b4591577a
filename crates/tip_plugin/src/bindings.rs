// crates/tip_plugin/src/bindings.rs

//! Script binding registrar.
//!
//! Three entry points, one per (node, side, direction) triple, all under a
//! single script class. Each binding validates its arguments, computes the
//! tip, and dispatches the cast; missing arguments or an unresolvable tip
//! are a no-op by contract.

use std::sync::Arc;

use host_api::ScriptVm;

use crate::cast::cast_spell_at_point;
use crate::tip::{self, TipQuery};
use crate::PluginEnv;

/// Script class all bindings are registered under.
pub const SCRIPT_CLASS: &str = "WeaponTipBridge";

/// The fixed function table. Keeping it in one place makes the exposed
/// surface auditable at a glance.
pub const ENTRY_POINTS: [(&str, TipQuery); 3] = [
    ("CastSpellAtWeaponTip", tip::WEAPON_TIP),
    ("CastSpellAtShieldTip", tip::SHIELD_TIP),
    ("CastSpellAtWeaponTipOpposite", tip::WEAPON_TIP_REVERSE),
];

/// Registers every entry point against the host VM. The closures capture
/// only the shared environment handle; per-call state never outlives a call.
pub fn register_functions(vm: &mut dyn ScriptVm, env: Arc<PluginEnv>) -> bool {
    for (name, query) in ENTRY_POINTS {
        let env = Arc::clone(&env);
        vm.register_function(
            SCRIPT_CLASS,
            name,
            Box::new(move |world, args| {
                let (Some(actor), Some(spell), Some(marker_base)) =
                    (args.actor, args.spell, args.marker_base)
                else {
                    return;
                };
                let Some(point) = tip::compute_tip_position(&env, world, actor, query) else {
                    return;
                };
                cast_spell_at_point(world, actor, spell, marker_base, point, args.snap_to_ground);
            }),
        );
    }
    true
}
