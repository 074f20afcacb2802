// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use bpaf::{batteries::verbose_by_slice, construct, long, OptionParser, Parser};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone)]
pub struct Options {
    pub verbosity_level: LevelFilter,
    pub frames: u64,
    pub delta: f32,
    pub actors: usize,
}

pub fn options() -> OptionParser<Options> {
    let verbosity_level = verbose_by_slice(
        3,
        [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ],
    );

    let frames = long("frames")
        .help("Amount of frames to simulate")
        .argument::<u64>("N")
        .fallback(120)
        .display_fallback();

    let delta = long("delta")
        .help("Simulated time between frames, in seconds")
        .argument::<f32>("SECONDS")
        .guard(|delta| delta.is_finite() && *delta > 0.0, "delta must be a positive number")
        .fallback(1.0 / 60.0);

    let actors = long("actors")
        .help("Amount of actors to spawn at the start")
        .argument::<usize>("N")
        .fallback(8)
        .display_fallback();

    construct!(Options {
        verbosity_level,
        frames,
        delta,
        actors,
    })
    .to_options()
    .descr("Runs a headless frame loop over a scene of actors")
}

#[cfg(test)]
mod tests {
    use super::options;

    #[test]
    fn check_bpaf_invariants() {
        options().check_invariants(true);
    }

    #[test]
    fn parses_frame_loop_settings() {
        let opts = options()
            .run_inner(&["--frames", "10", "--delta", "0.5", "--actors", "3"])
            .unwrap();
        assert_eq!(10, opts.frames);
        assert_eq!(0.5, opts.delta);
        assert_eq!(3, opts.actors);
    }

    #[test]
    fn rejects_non_positive_delta() {
        assert!(options().run_inner(&["--delta", "0"]).is_err());
    }
}
