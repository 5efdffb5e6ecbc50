// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_carousel::{
    Action, BoundaryMode, Carousel, GestureSession, NavigationConfig, NavigationState,
    PointerSample, PointerSurface, SwipeThreshold, apply,
};

const WIDTH: f64 = 1600.0;

fn config(total: usize, boundary: BoundaryMode) -> NavigationConfig {
    NavigationConfig::new(total)
        .unwrap()
        .with_container_width(WIDTH)
        .unwrap()
        .with_swipe_threshold(SwipeThreshold::fraction(0.5).unwrap())
        .with_boundary(boundary)
}

/// Alternating bursts of "next" and "previous" that bump into both ends.
fn button_mash(len: usize) -> Vec<Action> {
    (0..len)
        .map(|i| if (i / 64) % 2 == 0 { Action::Next } else { Action::Previous })
        .collect()
}

/// Full swipes made of one down, `moves` moves, and one up.
fn swipes(count: usize, moves: usize) -> Vec<Action> {
    let mut actions = Vec::with_capacity(count * (moves + 2));
    for i in 0..count {
        let leftward = i % 3 != 0;
        actions.push(Action::PointerDown(WIDTH));
        for step in 1..=moves {
            let dx = WIDTH * step as f64 / moves as f64;
            actions.push(Action::PointerMove(if leftward { WIDTH - dx } else { WIDTH + dx }));
        }
        actions.push(Action::PointerUp(0.0));
    }
    actions
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/apply");

    for len in [1_024usize, 16_384] {
        group.throughput(Throughput::Elements(len as u64));
        let actions = button_mash(len);

        for (name, boundary) in [("clamp", BoundaryMode::Clamp), ("wrap", BoundaryMode::Wrap)] {
            let config = config(16, boundary);
            group.bench_with_input(BenchmarkId::new(name, len), &actions, |b, actions| {
                b.iter(|| {
                    let state = actions
                        .iter()
                        .fold(NavigationState::new(), |state, &action| {
                            apply(&state, action, &config)
                        });
                    black_box(state);
                });
            });
        }
    }

    group.finish();
}

fn bench_swipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/swipes");

    // Hypothesis: cost is linear in the number of pointer samples, independent of
    // how they are split into sessions.
    for moves in [4usize, 32, 256] {
        let actions = swipes(64, moves);
        group.throughput(Throughput::Elements(actions.len() as u64));

        group.bench_with_input(BenchmarkId::new("dispatch", moves), &actions, |b, actions| {
            b.iter_batched(
                || Carousel::new(config(8, BoundaryMode::Wrap)),
                |mut carousel| {
                    for &action in actions {
                        carousel.dispatch(action);
                    }
                    black_box(carousel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

#[derive(Default)]
struct CountingSurface {
    sessions: u64,
}

impl PointerSurface for CountingSurface {
    fn acquire_motion(&mut self) {
        self.sessions += 1;
    }

    fn release_motion(&mut self) {}
}

fn bench_gesture_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/gesture_session");

    let samples: Vec<PointerSample> = swipes(64, 32)
        .into_iter()
        .filter_map(|action| {
            let sample = match action {
                Action::PointerDown(x) => PointerSample::down(Point::new(x, 0.0)),
                Action::PointerMove(x) => PointerSample::moved(Point::new(x, 0.0)),
                Action::PointerUp(x) => PointerSample::up(Point::new(x, 0.0)),
                _ => return None,
            };
            Some(sample)
        })
        .collect();
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("handle", |b| {
        b.iter_batched(
            || {
                (
                    Carousel::new(config(8, BoundaryMode::Clamp)),
                    GestureSession::new(),
                    CountingSurface::default(),
                )
            },
            |(mut carousel, mut session, mut surface)| {
                for &sample in &samples {
                    session.handle(&mut carousel, &mut surface, sample);
                }
                black_box((carousel, surface.sessions));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_apply, bench_swipes, bench_gesture_session);
criterion_main!(benches);
