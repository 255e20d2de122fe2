use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tokio::time::Instant;
use snake_engine::games::snake::geometry::{polyline_length, segments_cross};
use snake_engine::{GameRng, Position, SnakeGameState, SnakeSettings};

/// Long staircase snake: many turns, no self-crossings.
fn create_staircase(turns: i32) -> Vec<Position> {
    let mut snake = vec![Position::new(0, 0), Position::new(0, 0)];
    for i in 0..turns {
        let last = *snake.last().unwrap_or(&Position::new(0, 0));
        let next = if i % 2 == 0 {
            Position::new(last.x + 5, last.y)
        } else {
            Position::new(last.x, last.y + 5)
        };
        snake.push(next);
    }
    snake
}

fn create_running_state(turns: i32) -> SnakeGameState {
    let mut state = SnakeGameState::new(SnakeSettings::default(), GameRng::new(7));
    state.restart(100_000, 100_000, 10);
    state.start(Instant::now());
    state.snake = create_staircase(turns);
    state
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for turns in [10, 100, 1000] {
        group.bench_function(format!("{}_turns", turns), |b| {
            b.iter_batched(
                || create_running_state(turns),
                |mut state| {
                    state.advance(Instant::now() + Duration::from_millis(8));
                    state
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let snake = create_staircase(1000);

    c.bench_function("polyline_length_1000", |b| {
        b.iter(|| polyline_length(black_box(&snake)))
    });

    c.bench_function("segments_cross", |b| {
        b.iter(|| {
            segments_cross(
                black_box(Position::new(5, 0)),
                black_box(Position::new(5, 10)),
                black_box(Position::new(0, 5)),
                black_box(Position::new(10, 5)),
            )
        })
    });
}

criterion_group!(benches, bench_advance, bench_geometry);
criterion_main!(benches);
