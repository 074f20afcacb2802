// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod cli;
mod demo;

fn main() -> anyhow::Result<()> {
    let options = cli::options().run();

    tracing_subscriber::fmt()
        .with_max_level(options.verbosity_level)
        .with_target(false)
        .init();

    let stats = demo::run(&options)?;

    println!("Updates per actor:");
    for (name, updates) in stats.updates.iter() {
        println!("  {name}: {updates}");
    }

    let mut hooks = stats.hooks.iter().collect::<Vec<_>>();
    hooks.sort();
    println!("Hook calls:");
    for (hook, count) in hooks {
        println!("  {hook}: {count}");
    }

    Ok(())
}
