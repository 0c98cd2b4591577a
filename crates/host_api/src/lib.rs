// crates/host_api/src/lib.rs

//! The surface shared between the host and the plugin: the game world the
//! plugin manipulates, the script VM registration trait, the versioned
//! collision-geometry provider interface, and the plugin load handle.

pub mod geometry;
pub mod plugin;
pub mod script;
pub mod world;

pub use geometry::{CollisionGeometry, CollisionSide, GeometryProvider, InterfaceVersion};
pub use plugin::{PluginHost, PluginInit, HOST_API_VERSION};
pub use script::{FunctionRegistry, NativeFn, ScriptArgs, ScriptVm};
pub use world::{
    Actor, ActorHandle, CastingSource, FormId, GameWorld, MagicCaster, ObjectRef, RefId,
    SpellCastEvent, SpellId,
};
