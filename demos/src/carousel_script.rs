// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel script replay.
//!
//! Replays a JSON-lines script of tagged actions through a headless carousel
//! and prints where the track ends up after each step. Pointer actions go
//! through a `GestureSession` and a fake track surface that, like a real one,
//! only reports motion while a gesture session holds its listeners.
//!
//! Each line looks like the actions a host would dispatch, for example:
//!
//! ```text
//! {"type":"next"}
//! {"type":"pointerdown","payload":{"x":1600}}
//! {"type":"pointermove","payload":{"x":799},"isPrimary":true}
//! {"type":"pointerup","payload":{"x":799}}
//! {"type":"goto","payload":{"index":0}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. An unknown `type` stops
//! the replay with an error.
//!
//! Run:
//! - `cargo run -p understory_demos --bin carousel_script -- --threshold 0.5 demos/scripts/swipe.jsonl`
//! - `RUST_LOG=understory_carousel=trace cargo run -p understory_demos --bin carousel_script -- --infinite demos/scripts/swipe.jsonl`

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::Point;
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use understory_carousel::{
    Action, ActionKind, Carousel, GestureSession, NavigationConfig, PointerPhase, PointerSample,
    PointerSurface, RawAction, SwipeThreshold,
};

/// Replay a carousel action script.
#[derive(Debug, Parser)]
struct Args {
    /// Number of slides.
    #[arg(long, default_value_t = 3)]
    slides: usize,
    /// Container width in pixels.
    #[arg(long, default_value_t = 1600.0)]
    width: f64,
    /// Swipe threshold as a fraction of the container width; swiping is disabled when omitted.
    #[arg(long)]
    threshold: Option<f64>,
    /// Wrap around at both ends instead of clamping.
    #[arg(long)]
    infinite: bool,
    /// Script to replay; reads standard input when omitted.
    script: Option<PathBuf>,
}

/// Stand-in for the track element: remembers whether motion listeners are attached.
#[derive(Debug, Default)]
struct Track {
    listening: bool,
}

impl PointerSurface for Track {
    fn acquire_motion(&mut self) {
        info!("track: attach pointermove/pointerup listeners");
        self.listening = true;
    }

    fn release_motion(&mut self) {
        info!("track: detach pointermove/pointerup listeners");
        self.listening = false;
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let threshold = match args.threshold {
        Some(fraction) => SwipeThreshold::fraction(fraction)?,
        None => SwipeThreshold::Disabled,
    };
    let config = NavigationConfig::new(args.slides)?
        .with_container_width(args.width)?
        .with_swipe_threshold(threshold)
        .with_infinite(args.infinite);

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut carousel = Carousel::new(config);
    let mut session = GestureSession::new();
    let mut track = Track::default();

    for (number, line) in reader.lines().enumerate() {
        let number = number + 1;
        let line = line.with_context(|| format!("reading line {number}"))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (raw, is_primary) = parse_line(line).with_context(|| format!("line {number}"))?;
        let action = Action::try_from(&raw).with_context(|| format!("line {number}"))?;

        let changed = match pointer_phase(action.kind()) {
            Some(phase) => {
                if phase != PointerPhase::Down && !track.listening {
                    warn!(
                        line = number,
                        kind = %action.kind(),
                        "no listener attached; sample not delivered"
                    );
                    continue;
                }
                let sample = PointerSample {
                    phase,
                    page_position: Point::new(raw.payload.x.unwrap_or_default(), 0.0),
                    is_primary,
                };
                session.handle(&mut carousel, &mut track, sample)
            }
            None => carousel.dispatch(action),
        };

        let view = carousel.view();
        debug!(line = number, revision = carousel.revision(), "applied");
        println!(
            "{number:>4}  {:<14} slide {:>2}  track {:>10.1}{}",
            action.kind(),
            view.visible_slide_index,
            view.track_position,
            if changed { "" } else { "  (no change)" },
        );
    }

    if session.is_dragging() {
        info!("script ended mid-drag; abandoning gesture");
        session.abandon(&mut carousel, &mut track);
    }

    let layout = carousel.track_layout();
    println!(
        "track width {:.1}, slide width {:.1}, offset {:.1}",
        layout.track_width, layout.slide_width, layout.offset
    );
    for control in carousel.slide_controls() {
        println!(
            "[{}] {}",
            if control.disabled { "x" } else { " " },
            control.label
        );
    }
    Ok(())
}

/// Splits a script line into the tagged action and its `isPrimary` flag.
fn parse_line(line: &str) -> Result<(RawAction, bool)> {
    let value: Value = serde_json::from_str(line)?;
    let is_primary = value
        .get("isPrimary")
        .and_then(Value::as_bool)
        .unwrap_or(true);
    let raw = serde_json::from_value(value)?;
    Ok((raw, is_primary))
}

fn pointer_phase(kind: ActionKind) -> Option<PointerPhase> {
    match kind {
        ActionKind::PointerDown => Some(PointerPhase::Down),
        ActionKind::PointerMove => Some(PointerPhase::Move),
        ActionKind::PointerUp => Some(PointerPhase::Up),
        ActionKind::PointerCancel => Some(PointerPhase::Cancel),
        ActionKind::Next | ActionKind::Previous | ActionKind::GoTo => None,
    }
}
