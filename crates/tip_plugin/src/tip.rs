// crates/tip_plugin/src/tip.rs

//! Weapon/shield tip-position geometry.
//!
//! A "tip" is the point offset forward from a named attachment node along
//! its local orientation axis, by a length derived from the collision
//! provider's attack capsule. Everything here is a pure read of host state;
//! `None` means "could not resolve" and callers do nothing with it.

use glam::Vec3;
use host_api::{ActorHandle, CollisionSide, GameWorld, InterfaceVersion};

use crate::PluginEnv;

pub const WEAPON_NODE: &str = "WEAPON";
pub const SHIELD_NODE: &str = "SHIELD";

/// Capsule lengths overshoot the visible mesh; the original tuning keeps
/// 80% of the reported length. Preserved as-is.
pub const CAPSULE_DAMPING: f32 = 0.8;

/// Forward vectors at or below this magnitude are treated as degenerate.
const MIN_FORWARD_MAG: f32 = 1.0e-5;

/// Direction used when the node's orientation is degenerate.
const FALLBACK_FORWARD: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipDirection {
    Forward,
    Reverse,
}

impl TipDirection {
    fn sign(self) -> f32 {
        match self {
            TipDirection::Forward => 1.0,
            TipDirection::Reverse => -1.0,
        }
    }
}

/// Fixed parameters of one tip computation.
#[derive(Clone, Copy, Debug)]
pub struct TipQuery {
    pub node_name: &'static str,
    pub side: CollisionSide,
    pub direction: TipDirection,
}

pub const WEAPON_TIP: TipQuery = TipQuery {
    node_name: WEAPON_NODE,
    side: CollisionSide::RightWeapon,
    direction: TipDirection::Forward,
};

// Shields ride the left hand, so their capsule is queried as LeftWeapon.
pub const SHIELD_TIP: TipQuery = TipQuery {
    node_name: SHIELD_NODE,
    side: CollisionSide::LeftWeapon,
    direction: TipDirection::Forward,
};

pub const WEAPON_TIP_REVERSE: TipQuery = TipQuery {
    node_name: WEAPON_NODE,
    side: CollisionSide::RightWeapon,
    direction: TipDirection::Reverse,
};

/// Computes the world-space tip point for `actor` and `query`.
///
/// Resolution order: actor -> attached 3D root -> named node -> geometry
/// API handshake (V4, requested fresh on every call) -> clone-to-original
/// correction -> capsule length. Any miss along the way yields `None`.
pub fn compute_tip_position(
    env: &PluginEnv,
    world: &GameWorld,
    actor: ActorHandle,
    query: TipQuery,
) -> Option<Vec3> {
    let scene = world.actor(actor)?.scene_root()?;
    let mut node = scene.object_by_name(query.node_name)?;

    let api = env.geometry.request_api(InterfaceVersion::V4)?;

    // The runtime graph may hold a transient clone of the canonical node
    // (effect duplicates); the provider maps it back for us.
    if let Some(original) = api.original_from_clone(actor, node) {
        node = original;
    }

    let length = api.attack_capsule_length(actor, query.side) * CAPSULE_DAMPING;

    let transform = scene.node(node)?.world;
    let origin = transform.translate;
    let direction = normalized_or_fallback(transform.forward());

    Some(origin + direction * (query.direction.sign() * length))
}

/// Normalizes `dir`, substituting the fixed fallback for degenerate input
/// instead of dividing by a near-zero magnitude.
pub(crate) fn normalized_or_fallback(dir: Vec3) -> Vec3 {
    let mag = dir.length();
    if mag > MIN_FORWARD_MAG {
        dir / mag
    } else {
        FALLBACK_FORWARD
    }
}
