// crates/host_api/src/geometry.rs

//! Consumed interface of the external weapon-collision plugin.
//!
//! The provider is a separate plugin the host loads alongside ours, so the
//! interface is obtained through a versioned handshake rather than linked
//! directly: callers request a version and get the matching function surface
//! back, or `None` when the provider is absent or too old.

use scene_graph::NodeId;

use crate::world::ActorHandle;

/// Interface versions the provider has shipped. Requesting a version the
/// installed provider predates yields `None` from the handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum InterfaceVersion {
    V1,
    V2,
    V3,
    V4,
}

/// Which side's attack collision is being asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionSide {
    RightWeapon,
    LeftWeapon,
}

/// The V4 collision-geometry surface.
pub trait CollisionGeometry {
    /// Maps a transient clone node back to the canonical node the provider
    /// tracks collisions against. `None` means the node is already canonical
    /// (or unknown), and the caller keeps what it has.
    fn original_from_clone(&self, actor: ActorHandle, node: NodeId) -> Option<NodeId>;

    /// Length of the attack-collision capsule for the given actor and side.
    fn attack_capsule_length(&self, actor: ActorHandle, side: CollisionSide) -> f32;
}

/// Handshake entry point, held by the plugin as part of its environment.
pub trait GeometryProvider {
    fn request_api(&self, version: InterfaceVersion) -> Option<&dyn CollisionGeometry>;
}
