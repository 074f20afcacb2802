// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use alloc::boxed::Box;

use tracing::trace;

use super::{run_update, Behaviour, FrameContext, Lifecycle};

/// A piece of behaviour attached to an [`Actor`](super::Actor).
pub struct Component {
    behaviour: Box<dyn Behaviour>,
    lifecycle: Lifecycle,
}

impl Component {
    pub fn new(behaviour: impl Behaviour + 'static) -> Component {
        Component {
            behaviour: Box::new(behaviour),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn behaviour(&self) -> &dyn Behaviour {
        &*self.behaviour
    }

    pub fn behaviour_mut(&mut self) -> &mut dyn Behaviour {
        &mut *self.behaviour
    }

    pub fn is_enabled(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Enables or disables the component, calling [`Behaviour::on_enable`] or
    /// [`Behaviour::on_disable`] if the state changed. Destroyed components
    /// can't be re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.lifecycle.set_active(enabled) {
            if enabled {
                self.behaviour.on_enable();
            } else {
                self.behaviour.on_disable();
            }
        }
    }

    /// Controls whether [`Component::update`] calls the behaviour. Unlike
    /// [`Component::set_enabled`], this doesn't fire any hooks.
    pub fn set_update_enabled(&mut self, enabled: bool) {
        self.lifecycle.set_update_enabled(enabled);
    }

    pub(super) fn awake(&mut self) {
        trace!("awaking component");
        self.behaviour.on_awake();
    }

    /// Updates the component if it's enabled, starting it first if this is
    /// its first update.
    pub fn update(&mut self, ctx: &FrameContext) {
        if self.lifecycle.is_active() {
            run_update(&mut self.lifecycle, &mut *self.behaviour, ctx);
        }
    }

    /// Disposes the component, disables it and marks it pending kill. Does
    /// nothing if the component is already destroyed.
    pub fn destroy(&mut self) {
        if self.lifecycle.kill() {
            trace!("destroying component");
            self.behaviour.on_dispose();
        }
    }
}
