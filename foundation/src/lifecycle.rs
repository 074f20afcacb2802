// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Actors, their components, and the scene that drives them.
//!
//! Both [`Actor`]s and [`Component`]s wrap a user-provided [`Behaviour`] with
//! a [`Lifecycle`]. The main parts to look into are [`Scene::spawn`],
//! [`Scene::update`] and [`Scene::destroy`]:
//!
//! - Spawning *awakes* the actor ([`Behaviour::on_awake`]). Components are
//!   awoken when they're added to an actor.
//! - The first update of an object *starts* it ([`Behaviour::on_start`]),
//!   after which every update calls [`Behaviour::on_update`]. Updates only
//!   happen for active actors and enabled components, and only while the
//!   object's update flag is set.
//! - Destroying *disposes* the object ([`Behaviour::on_dispose`]), deactivates
//!   it and marks it pending kill. Pending kill objects don't react to
//!   activation changes anymore, and [`Scene::collect_garbage`] drops them.

mod actor;
mod component;
mod scene;

use arrayvec::ArrayVec;
use thiserror::Error;

pub use actor::Actor;
pub use component::Component;
pub use scene::{ActorHandle, Scene};

/// The maximum amount of components in an [`Actor`].
pub const MAX_COMPONENTS: usize = 32;

/// An [`ArrayVec`] with capacity for [`MAX_COMPONENTS`] elements.
pub type ComponentVec<T> = ArrayVec<T, MAX_COMPONENTS>;

/// Per-frame information passed to every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    /// The index of the frame being updated, starting from 0.
    pub frame: u64,
    /// Seconds since the previous frame.
    pub delta: f32,
}

/// Error type for the fallible operations of [`Actor`] and [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The actor already has [`MAX_COMPONENTS`] components.
    #[error("the actor already has the maximum of {} components", MAX_COMPONENTS)]
    TooManyComponents,
    /// The [`ActorHandle`] is from another scene, or its actor has been
    /// destroyed.
    #[error("the actor handle does not refer to a live actor in this scene")]
    InvalidHandle,
    /// The actor has been destroyed, so it can't be spawned or take new
    /// components.
    #[error("the actor has already been destroyed")]
    ActorDestroyed,
}

/// User-implemented callbacks for [`Actor`]s and [`Component`]s. All hooks
/// do nothing by default.
pub trait Behaviour {
    /// Called once, when the actor is spawned or the component is added.
    fn on_awake(&mut self) {}
    /// Called once, right before the first [`Behaviour::on_update`].
    fn on_start(&mut self) {}
    fn on_update(&mut self, _ctx: &FrameContext) {}
    /// Called once, when the object is destroyed.
    fn on_dispose(&mut self) {}
    /// Called when a component is enabled after being disabled. Not called
    /// for actors.
    fn on_enable(&mut self) {}
    /// Called when a component is disabled. Not called for actors.
    fn on_disable(&mut self) {}
}

/// A [`Behaviour`] that does nothing, for actors that only exist to hold
/// components.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inert;

impl Behaviour for Inert {}

/// The state shared by actors and components.
///
/// Objects start out active (enabled, for components), not started, not
/// pending kill, with updates enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    active: bool,
    started: bool,
    pending_kill: bool,
    update_enabled: bool,
}

impl Lifecycle {
    pub fn new() -> Lifecycle {
        Lifecycle {
            active: true,
            started: false,
            pending_kill: false,
            update_enabled: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn is_pending_kill(&self) -> bool {
        self.pending_kill
    }

    pub fn is_update_enabled(&self) -> bool {
        self.update_enabled
    }

    /// Sets the active flag. Returns true if the flag changed, which doesn't
    /// happen if it was already `active` or if the object is pending kill.
    fn set_active(&mut self, active: bool) -> bool {
        if self.active == active || self.pending_kill {
            return false;
        }
        self.active = active;
        true
    }

    fn set_update_enabled(&mut self, enabled: bool) {
        self.update_enabled = enabled;
    }

    /// Returns true if this is the first call, i.e. if the object should be
    /// started now.
    fn start(&mut self) -> bool {
        !core::mem::replace(&mut self.started, true)
    }

    /// Returns true if the object was alive, i.e. if it should be disposed
    /// now.
    fn kill(&mut self) -> bool {
        if self.pending_kill {
            return false;
        }
        self.active = false;
        self.pending_kill = true;
        true
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::new()
    }
}

/// The update step shared by actors and components: start on the first
/// update, then update, as long as updates are enabled.
fn run_update(lifecycle: &mut Lifecycle, behaviour: &mut dyn Behaviour, ctx: &FrameContext) {
    if !lifecycle.is_update_enabled() {
        return;
    }
    if lifecycle.start() {
        behaviour.on_start();
    }
    behaviour.on_update(ctx);
}


#[cfg(test)]
mod tests {
    use super::Lifecycle;

    #[test]
    fn set_active_ignores_no_ops_and_dead_objects() {
        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.set_active(true));
        assert!(lifecycle.set_active(false));
        assert!(!lifecycle.is_active());
        assert!(lifecycle.set_active(true));

        assert!(lifecycle.kill());
        assert!(!lifecycle.is_active());
        assert!(lifecycle.is_pending_kill());
        assert!(!lifecycle.set_active(true));
        assert!(!lifecycle.is_active());
        assert!(!lifecycle.kill(), "killing twice should only dispose once");
    }

    #[test]
    fn starts_only_once() {
        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.has_started());
        assert!(lifecycle.start());
        assert!(!lifecycle.start());
        assert!(lifecycle.has_started());
    }
}
