// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use alloc::boxed::Box;

use tracing::trace;

use super::{
    run_update, Behaviour, Component, ComponentVec, FrameContext, Lifecycle, LifecycleError,
};
use crate::U32String;

/// An object in a [`Scene`](super::Scene): a named [`Behaviour`] with up to
/// [`MAX_COMPONENTS`](super::MAX_COMPONENTS) [`Component`]s.
pub struct Actor {
    name: U32String,
    behaviour: Box<dyn Behaviour>,
    lifecycle: Lifecycle,
    components: ComponentVec<Component>,
}

impl Actor {
    pub fn new(name: impl Into<U32String>, behaviour: impl Behaviour + 'static) -> Actor {
        Actor {
            name: name.into(),
            behaviour: Box::new(behaviour),
            lifecycle: Lifecycle::new(),
            components: ComponentVec::new(),
        }
    }

    pub fn name(&self) -> &U32String {
        &self.name
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn behaviour_mut(&mut self) -> &mut dyn Behaviour {
        &mut *self.behaviour
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Activates or deactivates the actor. Inactive actors are skipped by
    /// [`Scene::update`](super::Scene::update). Destroyed actors can't be
    /// reactivated.
    pub fn set_active(&mut self, active: bool) {
        if self.lifecycle.set_active(active) {
            trace!("actor {} active: {active}", self.name);
        }
    }

    pub fn set_update_enabled(&mut self, enabled: bool) {
        self.lifecycle.set_update_enabled(enabled);
    }

    /// Awakes `component` and attaches it to this actor, returning its index
    /// in [`Actor::components`]. Destroyed actors don't accept components.
    pub fn add_component(&mut self, mut component: Component) -> Result<usize, LifecycleError> {
        if self.lifecycle.is_pending_kill() {
            return Err(LifecycleError::ActorDestroyed);
        }
        if self.components.is_full() {
            return Err(LifecycleError::TooManyComponents);
        }
        component.awake();
        self.components.push(component);
        Ok(self.components.len() - 1)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    pub(super) fn awake(&mut self) {
        trace!("awaking actor {}", self.name);
        self.behaviour.on_awake();
    }

    /// Updates the actor's own behaviour, then each of its components in the
    /// order they were added. Does nothing if the actor is inactive.
    pub fn update(&mut self, ctx: &FrameContext) {
        if !self.lifecycle.is_active() {
            return;
        }
        run_update(&mut self.lifecycle, &mut *self.behaviour, ctx);
        for component in &mut self.components {
            component.update(ctx);
        }
    }

    /// Disposes the actor's components and then the actor itself, and marks
    /// them all pending kill. Does nothing if the actor is already destroyed.
    pub fn destroy(&mut self) {
        if !self.lifecycle.kill() {
            return;
        }
        trace!("destroying actor {}", self.name);
        for component in &mut self.components {
            component.destroy();
        }
        self.behaviour.on_dispose();
    }
}
