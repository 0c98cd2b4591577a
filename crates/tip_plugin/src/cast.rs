// crates/tip_plugin/src/cast.rs

//! Fire-and-forget spell dispatch at a world-space point.
//!
//! The marker ref exists only as a spatial anchor for the spell's origin and
//! target; it is placed, moved, cast from, and flagged for deletion inside
//! one invocation. Nothing here reports failure: a script that calls us has
//! no error channel, so every miss is a silent early return.

use glam::Vec3;
use host_api::{ActorHandle, CastingSource, FormId, GameWorld, SpellId};

pub fn cast_spell_at_point(
    world: &mut GameWorld,
    caster: ActorHandle,
    spell: SpellId,
    marker_base: FormId,
    point: Vec3,
    snap_to_ground: bool,
) {
    let Some(marker) = world.place_object_at(caster, marker_base) else {
        return;
    };

    let target = if snap_to_ground {
        // Tip's horizontal position, caster's vertical position.
        match world.actor(caster) {
            Some(actor) => Vec3::new(point.x, point.y, actor.position.z),
            None => point,
        }
    } else {
        point
    };
    world.set_ref_position(marker, target);

    if let Some(mut channel) = world.magic_caster(marker, CastingSource::Instant) {
        channel.cast_spell_immediate(spell, marker, 1.0, Some(caster));
    }

    // Always reclaim the anchor, whether or not a channel was available.
    world.set_ref_delete(marker, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{HostFixture, StubGeometry};

    fn fixture() -> HostFixture {
        HostFixture::new(StubGeometry::with_length(10.0))
    }

    #[test]
    fn cast_records_event_and_reclaims_marker() {
        let mut fx = fixture();
        cast_spell_at_point(
            &mut fx.world,
            fx.actor,
            SpellId(3),
            FormId(9),
            Vec3::new(0.0, 0.0, 8.0),
            false,
        );

        let events = fx.world.drain_cast_events();
        assert_eq!(events.len(), 1);
        let event = events[0];
        assert_eq!(event.spell, SpellId(3));
        assert_eq!(event.origin, Vec3::new(0.0, 0.0, 8.0));
        assert_eq!(event.source, event.target);
        assert_eq!(event.blame, Some(fx.actor));
        assert_eq!(event.channel, CastingSource::Instant);

        let marker = fx.world.object_ref(event.target).unwrap();
        assert!(marker.pending_delete);
    }

    #[test]
    fn snap_to_ground_overrides_only_the_vertical_coordinate() {
        let mut fx = fixture();
        fx.set_actor_position(Vec3::new(100.0, 200.0, 50.0));

        let tip = Vec3::new(7.0, -3.0, 120.0);
        cast_spell_at_point(&mut fx.world, fx.actor, SpellId(3), FormId(9), tip, true);

        let events = fx.world.drain_cast_events();
        assert_eq!(events[0].origin, Vec3::new(7.0, -3.0, 50.0));
    }

    #[test]
    fn dead_caster_places_nothing() {
        let mut fx = fixture();
        fx.world.despawn_actor(fx.actor);
        cast_spell_at_point(&mut fx.world, fx.actor, SpellId(3), FormId(9), Vec3::ZERO, false);
        assert!(fx.world.cast_events().is_empty());
    }
}
