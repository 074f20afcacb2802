// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{cell::RefCell, rc::Rc};

use anyhow::Context;
use iris_foundation::{
    lifecycle::{Actor, ActorHandle, Behaviour, Component, FrameContext, Scene},
    Array, HashMap, SortedMap, U32String,
};
use tracing::{debug, info};

use crate::cli::Options;

/// What the behaviours report back to the frame loop.
#[derive(Default)]
pub struct Stats {
    /// Updates received, per actor name.
    pub updates: SortedMap<U32String, u64>,
    /// Amount of hook calls, per hook.
    pub hooks: HashMap<&'static str, u64>,
    /// Nametag labels at the moment they were hidden, in order.
    pub hidden_labels: Array<U32String>,
}

type SharedStats = Rc<RefCell<Stats>>;

fn count_hook(stats: &SharedStats, hook: &'static str) {
    *stats.borrow_mut().hooks.get_or_insert_default(hook) += 1;
}

/// Rotates at a constant speed, and reports how long it got to live.
struct Spinner {
    name: U32String,
    degrees_per_second: f32,
    angle: f32,
    updates: u64,
    stats: SharedStats,
}

impl Behaviour for Spinner {
    fn on_awake(&mut self) {
        count_hook(&self.stats, "awake");
    }

    fn on_start(&mut self) {
        count_hook(&self.stats, "start");
    }

    fn on_update(&mut self, ctx: &FrameContext) {
        self.angle = (self.angle + self.degrees_per_second * ctx.delta) % 360.0;
        self.updates += 1;
    }

    fn on_dispose(&mut self) {
        count_hook(&self.stats, "dispose");
        debug!("{} stopped at {:.1} degrees", self.name, self.angle);
        let mut stats = self.stats.borrow_mut();
        stats.updates.insert_or_assign(self.name.clone(), self.updates);
    }
}

/// Keeps a label in sync with the frame counter, e.g. `"ACTOR-3 @ 12"`.
struct Nametag {
    base: U32String,
    label: U32String,
    stats: SharedStats,
}

impl Behaviour for Nametag {
    fn on_update(&mut self, ctx: &FrameContext) {
        let mut label = &self.base + " @ ";
        label += ctx.frame.to_string().as_str();
        self.label = label;
    }

    fn on_enable(&mut self) {
        count_hook(&self.stats, "enable");
    }

    fn on_disable(&mut self) {
        count_hook(&self.stats, "disable");
        self.label.replace(U32String::from(" @ "), U32String::from(" (hidden) @ "));
        debug!("nametag {}", self.label);
        self.stats.borrow_mut().hidden_labels.add_last(self.label.clone());
    }
}

fn spawn_actor(scene: &mut Scene, index: usize, stats: &SharedStats) -> anyhow::Result<ActorHandle> {
    let name = U32String::from(format!("actor-{index}").as_str());
    let mut actor = Actor::new(
        name.clone(),
        Spinner {
            name: name.clone(),
            degrees_per_second: 45.0 * (index % 4 + 1) as f32,
            angle: 0.0,
            updates: 0,
            stats: stats.clone(),
        },
    );
    actor
        .add_component(Component::new(Nametag {
            base: name.to_ascii_uppercase(),
            label: U32String::new(),
            stats: stats.clone(),
        }))
        .context("Failed to attach a nametag")?;
    scene.spawn(actor).context("Failed to spawn an actor")
}

/// Runs the frame loop described by `options`: spawns the actors, then every
/// 30 frames destroys the oldest one, spawns a replacement and toggles the
/// nametags. Actors still alive at the end are destroyed before returning.
pub fn run(options: &Options) -> anyhow::Result<Stats> {
    let stats = SharedStats::default();
    let mut scene = Scene::new();
    let mut handles = Array::with_capacity(options.actors);
    for index in 0..options.actors {
        handles.add_last(spawn_actor(&mut scene, index, &stats)?);
    }
    info!("spawned {} actors", scene.len());

    let mut spawned = options.actors;
    for frame in 0..options.frames {
        let ctx = FrameContext {
            frame,
            delta: options.delta,
        };
        scene.update(&ctx);

        if frame % 30 == 29 {
            if let Some(oldest) = handles.remove_first() {
                scene.destroy(oldest).context("Failed to destroy the oldest actor")?;
            }
            handles.add_last(spawn_actor(&mut scene, spawned, &stats)?);
            spawned += 1;

            let show_nametags = frame % 60 == 59;
            for &handle in handles.iter() {
                if let Some(actor) = scene.get_mut(handle) {
                    for component in actor.components_mut() {
                        component.set_enabled(show_nametags);
                    }
                }
            }
            scene.collect_garbage();
        }
    }

    for handle in handles.take() {
        scene.destroy(handle).context("Failed to destroy an actor at shutdown")?;
    }
    scene.collect_garbage();
    info!("simulated {} frames, {} actors in total", options.frames, spawned);

    drop(scene);
    Rc::try_unwrap(stats)
        .ok()
        .map(RefCell::into_inner)
        .context("Behaviours still hold the stats after the scene was dropped")
}
