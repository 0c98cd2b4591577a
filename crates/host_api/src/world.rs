// crates/host_api/src/world.rs

//! Host-owned game state. The plugin never holds references into this world
//! between script calls; it receives `&mut GameWorld` for the duration of a
//! single invocation and everything it placed is scoped to that call.

use glam::Vec3;
use scene_graph::SceneGraph;

/// Stable handle to a live actor. Lookups on despawned handles return `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorHandle(u32);

/// Opaque id of a spell form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpellId(pub u32);

/// Opaque id of a placeable base object (the marker template).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormId(pub u32);

/// Handle to a placed object reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RefId(u32);

/// Which casting channel of a reference a spell is fired through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastingSource {
    Instant,
    LeftHand,
    RightHand,
    Voice,
}

pub struct Actor {
    pub position: Vec3,
    scene: Option<SceneGraph>,
}

impl Actor {
    /// The actor's attached 3D root, if the engine has loaded one.
    pub fn scene_root(&self) -> Option<&SceneGraph> {
        self.scene.as_ref()
    }

    /// Mutable access for the host side, which keeps node transforms
    /// current as the skeleton animates.
    pub fn scene_root_mut(&mut self) -> Option<&mut SceneGraph> {
        self.scene.as_mut()
    }
}

/// A placed, transient object reference (e.g. a spatial marker).
pub struct ObjectRef {
    pub base: FormId,
    pub position: Vec3,
    pub pending_delete: bool,
}

/// Record of one instantaneous spell cast, drained by the host each frame.
#[derive(Clone, Copy, Debug)]
pub struct SpellCastEvent {
    pub spell: SpellId,
    pub source: RefId,
    pub target: RefId,
    pub origin: Vec3,
    pub channel: CastingSource,
    pub effectiveness: f32,
    pub blame: Option<ActorHandle>,
}

#[derive(Default)]
pub struct GameWorld {
    // Slot is None once the actor/ref is gone; handles are plain indices.
    actors: Vec<Option<Actor>>,
    refs: Vec<Option<ObjectRef>>,
    cast_events: Vec<SpellCastEvent>,
}

impl GameWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_actor(&mut self, position: Vec3) -> ActorHandle {
        self.actors.push(Some(Actor {
            position,
            scene: None,
        }));
        ActorHandle((self.actors.len() - 1) as u32)
    }

    pub fn despawn_actor(&mut self, handle: ActorHandle) -> bool {
        match self.actors.get_mut(handle.0 as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    pub fn actor(&self, handle: ActorHandle) -> Option<&Actor> {
        self.actors.get(handle.0 as usize)?.as_ref()
    }

    pub fn actor_mut(&mut self, handle: ActorHandle) -> Option<&mut Actor> {
        self.actors.get_mut(handle.0 as usize)?.as_mut()
    }

    /// Hands the actor its attached 3D scene. Returns false for dead handles.
    pub fn attach_scene(&mut self, handle: ActorHandle, scene: SceneGraph) -> bool {
        match self.actor_mut(handle) {
            Some(actor) => {
                actor.scene = Some(scene);
                true
            }
            None => false,
        }
    }

    /// Places a new reference of `base` at the actor's current position.
    /// `None` if the actor is gone; the caller is expected to treat that as
    /// "do nothing".
    pub fn place_object_at(&mut self, at: ActorHandle, base: FormId) -> Option<RefId> {
        let position = self.actor(at)?.position;
        self.refs.push(Some(ObjectRef {
            base,
            position,
            pending_delete: false,
        }));
        Some(RefId((self.refs.len() - 1) as u32))
    }

    pub fn object_ref(&self, id: RefId) -> Option<&ObjectRef> {
        self.refs.get(id.0 as usize)?.as_ref()
    }

    pub fn set_ref_position(&mut self, id: RefId, position: Vec3) -> bool {
        match self.ref_mut(id) {
            Some(object) => {
                object.position = position;
                true
            }
            None => false,
        }
    }

    /// Flags a reference for deletion. The host reclaims it after the current
    /// invocation; until then the ref stays readable but loses its casting
    /// channels.
    pub fn set_ref_delete(&mut self, id: RefId, delete: bool) -> bool {
        match self.ref_mut(id) {
            Some(object) => {
                object.pending_delete = delete;
                true
            }
            None => false,
        }
    }

    /// Acquires a casting channel on a live reference. `None` if the ref is
    /// missing or already pending deletion.
    pub fn magic_caster(&mut self, source: RefId, channel: CastingSource) -> Option<MagicCaster<'_>> {
        let available = matches!(self.object_ref(source), Some(object) if !object.pending_delete);
        if !available {
            return None;
        }
        Some(MagicCaster {
            world: self,
            source,
            channel,
        })
    }

    /// Number of placed references not yet reclaimed by the host.
    pub fn live_refs(&self) -> usize {
        self.refs.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn cast_events(&self) -> &[SpellCastEvent] {
        &self.cast_events
    }

    pub fn drain_cast_events(&mut self) -> Vec<SpellCastEvent> {
        std::mem::take(&mut self.cast_events)
    }

    fn ref_mut(&mut self, id: RefId) -> Option<&mut ObjectRef> {
        self.refs.get_mut(id.0 as usize)?.as_mut()
    }
}

/// A casting channel borrowed from a placed reference.
pub struct MagicCaster<'w> {
    world: &'w mut GameWorld,
    source: RefId,
    channel: CastingSource,
}

impl MagicCaster<'_> {
    /// Fires `spell` at `target` right now, attributing the effect to
    /// `blame`. Silently does nothing if the target reference is gone.
    pub fn cast_spell_immediate(
        &mut self,
        spell: SpellId,
        target: RefId,
        effectiveness: f32,
        blame: Option<ActorHandle>,
    ) {
        if self.world.object_ref(target).is_none() {
            return;
        }
        // Origin is wherever the source ref sits at cast time.
        let Some(origin) = self.world.object_ref(self.source).map(|r| r.position) else {
            return;
        };
        self.world.cast_events.push(SpellCastEvent {
            spell,
            source: self.source,
            target,
            origin,
            channel: self.channel,
            effectiveness,
            blame,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_at_dead_actor_fails() {
        let mut world = GameWorld::new();
        let actor = world.spawn_actor(Vec3::ZERO);
        world.despawn_actor(actor);
        assert!(world.place_object_at(actor, FormId(1)).is_none());
    }

    #[test]
    fn placed_ref_starts_at_actor_position() {
        let mut world = GameWorld::new();
        let actor = world.spawn_actor(Vec3::new(4.0, 5.0, 6.0));
        let marker = world.place_object_at(actor, FormId(1)).unwrap();
        assert_eq!(world.object_ref(marker).unwrap().position, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn pending_delete_loses_casting_channel() {
        let mut world = GameWorld::new();
        let actor = world.spawn_actor(Vec3::ZERO);
        let marker = world.place_object_at(actor, FormId(1)).unwrap();

        assert!(world.magic_caster(marker, CastingSource::Instant).is_some());
        world.set_ref_delete(marker, true);
        assert!(world.magic_caster(marker, CastingSource::Instant).is_none());
    }

    #[test]
    fn immediate_cast_records_one_event() {
        let mut world = GameWorld::new();
        let actor = world.spawn_actor(Vec3::ZERO);
        let marker = world.place_object_at(actor, FormId(1)).unwrap();
        world.set_ref_position(marker, Vec3::new(0.0, 0.0, 8.0));

        let mut caster = world.magic_caster(marker, CastingSource::Instant).unwrap();
        caster.cast_spell_immediate(SpellId(7), marker, 1.0, Some(actor));

        let events = world.drain_cast_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].spell, SpellId(7));
        assert_eq!(events[0].origin, Vec3::new(0.0, 0.0, 8.0));
        assert_eq!(events[0].blame, Some(actor));
        assert!(world.cast_events().is_empty());
    }
}
