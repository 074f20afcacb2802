// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::sync::atomic::{AtomicU32, Ordering};

use tracing::debug;

use super::{Actor, FrameContext, LifecycleError};
use crate::Array;

fn make_scene_id() -> u32 {
    static SCENE_ID_COUNTER: AtomicU32 = AtomicU32::new(0);
    let prev_id = SCENE_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    prev_id.checked_add(1).unwrap()
}

/// Handle for referring to an actor spawned with [`Scene::spawn`].
///
/// Handles stay valid until the actor is destroyed, and never refer to any
/// other actor afterwards, even after [`Scene::collect_garbage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorHandle {
    scene_id: u32,
    actor_id: u64,
}

struct Slot {
    id: u64,
    actor: Actor,
}

/// Container for [`Actor`]s, updating them in the order they were spawned.
pub struct Scene {
    id: u32,
    next_actor_id: u64,
    slots: Array<Slot>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            id: make_scene_id(),
            next_actor_id: 0,
            slots: Array::new(),
        }
    }

    /// Awakes the actor and adds it to the scene. Actors that have already
    /// been destroyed are rejected without being awoken.
    pub fn spawn(&mut self, mut actor: Actor) -> Result<ActorHandle, LifecycleError> {
        if actor.lifecycle().is_pending_kill() {
            return Err(LifecycleError::ActorDestroyed);
        }
        actor.awake();
        let id = self.next_actor_id;
        self.next_actor_id += 1;
        self.slots.add_last(Slot { id, actor });
        Ok(ActorHandle {
            scene_id: self.id,
            actor_id: id,
        })
    }

    /// Returns the actor if the handle is valid.
    pub fn get(&self, handle: ActorHandle) -> Option<&Actor> {
        let index = self.index_of(handle)?;
        Some(&self.slots[index].actor)
    }

    pub fn get_mut(&mut self, handle: ActorHandle) -> Option<&mut Actor> {
        let index = self.index_of(handle)?;
        Some(&mut self.slots[index].actor)
    }

    fn index_of(&self, handle: ActorHandle) -> Option<usize> {
        if handle.scene_id != self.id {
            return None;
        }
        let index = (self.slots.as_slice())
            .binary_search_by_key(&handle.actor_id, |slot| slot.id)
            .ok()?;
        if self.slots[index].actor.lifecycle().is_pending_kill() {
            None
        } else {
            Some(index)
        }
    }

    /// Updates every active actor.
    pub fn update(&mut self, ctx: &FrameContext) {
        self.slots.for_each_mut(|slot| slot.actor.update(ctx));
    }

    /// Destroys the actor referred to by the handle. The actor stays in the
    /// scene (inactive) until the next [`Scene::collect_garbage`].
    pub fn destroy(&mut self, handle: ActorHandle) -> Result<(), LifecycleError> {
        let actor = self.get_mut(handle).ok_or(LifecycleError::InvalidHandle)?;
        actor.destroy();
        Ok(())
    }

    /// Removes destroyed actors from the scene, returning how many were
    /// removed.
    pub fn collect_garbage(&mut self) -> usize {
        let removed = self.slots.remove_by(|slot| slot.actor.lifecycle().is_pending_kill());
        if removed > 0 {
            debug!("removed {removed} destroyed actors, {} left", self.slots.len());
        }
        removed
    }

    /// The amount of actors in the scene, including destroyed ones that
    /// haven't been collected yet.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates the actors in spawn order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.slots.iter().map(|slot| &slot.actor)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Scene;
    use crate::lifecycle::{
        test_util::{frame, hooks, Log, Recorder},
        Actor, Component, Inert, LifecycleError,
    };

    #[test]
    fn spawn_awakes_and_update_runs_in_spawn_order() {
        let log = Log::default();
        let mut scene = Scene::new();
        scene.spawn(Actor::new("a", Recorder::new("a", &log))).unwrap();
        scene.spawn(Actor::new("b", Recorder::new("b", &log))).unwrap();
        scene.update(&frame(0));
        scene.update(&frame(1));
        assert_eq!(
            vec![
                ("a", "awake"),
                ("b", "awake"),
                ("a", "start"),
                ("a", "update"),
                ("b", "start"),
                ("b", "update"),
                ("a", "update"),
                ("b", "update"),
            ],
            hooks(&log)
        );
    }

    #[test]
    fn destroyed_actors_are_skipped_then_collected() {
        let log = Log::default();
        let mut scene = Scene::new();
        let doomed = scene.spawn(Actor::new("doomed", Recorder::new("doomed", &log))).unwrap();
        let kept = scene.spawn(Actor::new("kept", Inert)).unwrap();
        hooks(&log);

        assert_eq!(Ok(()), scene.destroy(doomed));
        assert_eq!(vec![("doomed", "dispose")], hooks(&log));
        assert_eq!(Err(LifecycleError::InvalidHandle), scene.destroy(doomed));
        assert!(scene.get(doomed).is_none());

        scene.update(&frame(0));
        assert!(hooks(&log).is_empty());
        assert_eq!(2, scene.len());

        assert_eq!(1, scene.collect_garbage());
        assert_eq!(0, scene.collect_garbage());
        assert_eq!(1, scene.len());
        assert_eq!("kept", *scene.get(kept).unwrap().name());
    }

    #[test]
    fn destroyed_actors_cant_be_spawned() {
        let log = Log::default();
        let mut scene = Scene::new();
        let mut actor = Actor::new("a", Recorder::new("a", &log));
        actor.destroy();
        assert_eq!(Err(LifecycleError::ActorDestroyed), scene.spawn(actor));
        assert_eq!(vec![("a", "dispose")], hooks(&log));
        assert!(scene.is_empty());
    }

    #[test]
    fn handles_are_scene_specific() {
        let mut first = Scene::new();
        let mut second = Scene::new();
        let handle = first.spawn(Actor::new("only", Inert)).unwrap();
        second.spawn(Actor::new("other", Inert)).unwrap();
        assert!(second.get(handle).is_none());
        assert_eq!(Err(LifecycleError::InvalidHandle), second.destroy(handle));
        assert!(first.get_mut(handle).is_some());
    }

    #[test]
    fn components_follow_their_actor() {
        let log = Log::default();
        let mut scene = Scene::new();
        let mut actor = Actor::new("holder", Inert);
        actor.add_component(Component::new(Recorder::new("c", &log))).unwrap();
        let handle = scene.spawn(actor).unwrap();

        scene.get_mut(handle).unwrap().components_mut()[0].set_enabled(false);
        scene.update(&frame(0));
        scene.destroy(handle).unwrap();
        assert_eq!(
            vec![("c", "awake"), ("c", "disable"), ("c", "dispose")],
            hooks(&log)
        );
    }
}
