// crates/tip_plugin/src/testing.rs

//! Test and harness support: an in-memory host fixture plus a stub
//! collision-geometry provider. Shared by the unit tests, the integration
//! tests, and the sandbox host. Unwraps are fine here; this module never
//! runs inside a real host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3;
use host_api::{
    ActorHandle, CollisionGeometry, CollisionSide, GameWorld, GeometryProvider, InterfaceVersion,
};
use scene_graph::{NodeId, SceneGraph, WorldTransform};

use crate::{tip, PluginEnv};

/// Scriptable stand-in for the external collision plugin. Capsule lengths
/// are fixed per side; clone-to-original mappings are registered explicitly.
pub struct StubGeometry {
    right_length: f32,
    left_length: f32,
    max_version: InterfaceVersion,
    clone_map: RefCell<HashMap<NodeId, NodeId>>,
}

impl StubGeometry {
    pub fn with_length(length: f32) -> Self {
        Self::with_lengths(length, length)
    }

    pub fn with_lengths(right_length: f32, left_length: f32) -> Self {
        Self {
            right_length,
            left_length,
            max_version: InterfaceVersion::V4,
            clone_map: RefCell::new(HashMap::new()),
        }
    }

    /// Caps the interface version the stub will hand out, to simulate an
    /// outdated provider install.
    pub fn max_version(mut self, version: InterfaceVersion) -> Self {
        self.max_version = version;
        self
    }

    pub fn map_clone(&self, clone: NodeId, canonical: NodeId) {
        self.clone_map.borrow_mut().insert(clone, canonical);
    }
}

impl CollisionGeometry for StubGeometry {
    fn original_from_clone(&self, _actor: ActorHandle, node: NodeId) -> Option<NodeId> {
        self.clone_map.borrow().get(&node).copied()
    }

    fn attack_capsule_length(&self, _actor: ActorHandle, side: CollisionSide) -> f32 {
        match side {
            CollisionSide::RightWeapon => self.right_length,
            CollisionSide::LeftWeapon => self.left_length,
        }
    }
}

impl GeometryProvider for StubGeometry {
    fn request_api(&self, version: InterfaceVersion) -> Option<&dyn CollisionGeometry> {
        if version <= self.max_version {
            Some(self as &dyn CollisionGeometry)
        } else {
            None
        }
    }
}

/// One actor with an attached (initially node-less) skeleton, wired to a
/// stub provider through the same environment handle the real host builds.
pub struct HostFixture {
    pub world: GameWorld,
    pub actor: ActorHandle,
    pub env: PluginEnv,
    geometry: Arc<StubGeometry>,
}

impl HostFixture {
    pub fn new(geometry: StubGeometry) -> Self {
        let geometry = Arc::new(geometry);
        let mut world = GameWorld::new();
        let actor = world.spawn_actor(Vec3::ZERO);
        world.attach_scene(actor, SceneGraph::new("NPC Root"));

        Self {
            world,
            actor,
            env: PluginEnv {
                geometry: geometry.clone(),
            },
            geometry,
        }
    }

    pub fn weapon_node(mut self, world: WorldTransform) -> Self {
        self.attach_node(tip::WEAPON_NODE, world);
        self
    }

    pub fn shield_node(mut self, world: WorldTransform) -> Self {
        self.attach_node(tip::SHIELD_NODE, world);
        self
    }

    pub fn attach_node(&mut self, name: &str, world: WorldTransform) -> NodeId {
        let scene = self
            .world
            .actor_mut(self.actor)
            .unwrap()
            .scene_root_mut()
            .unwrap();
        let root = scene.root();
        scene.attach(root, name, world).unwrap()
    }

    pub fn node_named(&self, name: &str) -> NodeId {
        self.world
            .actor(self.actor)
            .unwrap()
            .scene_root()
            .unwrap()
            .object_by_name(name)
            .unwrap()
    }

    pub fn set_actor_position(&mut self, position: Vec3) {
        self.world.actor_mut(self.actor).unwrap().position = position;
    }

    pub fn geometry(&self) -> &StubGeometry {
        &self.geometry
    }
}
