use serde::Serialize;
use tokio::time::Instant;

use crate::games::GameRng;
use crate::log;
use super::geometry::{polyline_length, segment_length, segments_cross};
use super::settings::SnakeSettings;
use super::types::{Direction, Food, Mode, Position};

/// Owned copy of everything a viewer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    pub snake: Vec<Position>,
    pub food: Vec<Position>,
    pub mode: Mode,
    pub direction: Direction,
    pub target_length: i32,
}

/// The single snake arena.
///
/// The snake is stored as a polyline of axis-aligned segments, head first.
/// `snake[1]` is always the point where the current direction started, so the
/// head position can be derived from the time elapsed since `last_turn`.
pub struct SnakeGameState {
    pub width: i32,
    pub height: i32,
    pub snake: Vec<Position>,
    pub food: Vec<Food>,
    pub mode: Mode,
    direction: Direction,
    last_turn: Instant,
    target_length: i32,
    settings: SnakeSettings,
    rng: GameRng,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSettings, rng: GameRng) -> Self {
        Self {
            width: 0,
            height: 0,
            snake: Vec::new(),
            food: Vec::new(),
            mode: Mode::NotInitialized,
            direction: Direction::Up,
            last_turn: Instant::now(),
            target_length: settings.initial_length,
            settings,
            rng,
        }
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_length(&self) -> i32 {
        self.target_length
    }

    pub fn last_turn(&self) -> Instant {
        self.last_turn
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn restart(&mut self, width: i32, height: i32, food_count: usize) {
        let width = width.max(1);
        let height = height.max(1);

        self.mode = Mode::New;
        self.width = width;
        self.height = height;

        let head = self.rng.random_position(width, height);
        self.snake = vec![head, head];
        self.direction = self.rng.random_direction();
        self.target_length = self.settings.initial_length;
        self.food = (0..food_count)
            .map(|_| Food::new(self.rng.random_position(width, height)))
            .collect();
    }

    /// Pins the current head as a turn vertex and switches direction.
    ///
    /// Always inserts a vertex; skipping redundant turns is up to the caller.
    pub fn set_direction(&mut self, direction: Direction, now: Instant) {
        self.direction = direction;
        if let Some(head) = self.head() {
            self.snake.insert(0, head);
        }
        self.last_turn = now;
    }

    pub fn start(&mut self, now: Instant) {
        self.last_turn = now;
        self.mode = Mode::Running;
    }

    /// One simulation step. Does not look at `mode`; the tick loop decides when
    /// to call it.
    pub fn advance(&mut self, now: Instant) {
        if self.snake.len() < 2 {
            return;
        }

        self.move_head(now);

        if self.crosses_itself() {
            log!("Snake crossed itself at ({}, {})", self.snake[0].x, self.snake[0].y);
            self.mode = Mode::Finished;
        }

        self.eat_food();
        self.ensure_turn_point(now);
        self.shrink_tail();

        let head = self.snake[0];
        if self.is_outside_arena(head) {
            log!("Snake hit the wall at ({}, {})", head.x, head.y);
            self.mode = Mode::Finished;
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.width,
            height: self.height,
            snake: self.snake.clone(),
            food: self.food.iter().map(|food| food.position).collect(),
            mode: self.mode,
            direction: self.direction,
            target_length: self.target_length,
        }
    }

    fn move_head(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_turn);
        let distance = (elapsed.as_secs_f64() * self.settings.speed) as i32;
        self.snake[0] = self.direction.offset(self.snake[1], distance);
    }

    fn crosses_itself(&self) -> bool {
        let (head, turn) = (self.snake[0], self.snake[1]);
        self.snake
            .windows(2)
            .skip(1)
            .any(|segment| segments_cross(head, turn, segment[0], segment[1]))
    }

    fn eat_food(&mut self) {
        let head = self.snake[0];
        for food in self.food.iter_mut() {
            if food.position.distance(&head) < self.settings.food_radius {
                food.position = self.rng.random_position(self.width, self.height);
                self.target_length = self.target_length.saturating_mul(3) / 2;
                log!("Food eaten at ({}, {}), target length {}", head.x, head.y, self.target_length);
            }
        }
    }

    /// A snake that never turned is `[head, tail]`; give it a turn vertex so
    /// `move_head` has a fixed point to measure from.
    fn ensure_turn_point(&mut self, now: Instant) {
        if self.snake.len() == 2 {
            let head = self.snake[0];
            self.snake.insert(0, head);
            self.last_turn = now;
        }
    }

    /// Consumes at most one tail segment per call; leftovers wait for the next tick.
    fn shrink_tail(&mut self) {
        let extra = polyline_length(&self.snake) - self.target_length;
        if extra <= 0 {
            return;
        }

        let last = self.snake.len() - 1;
        let (previous, tail) = (self.snake[last - 1], self.snake[last]);
        let tail_length = segment_length(previous, tail);

        // Zero-length tails land here as well.
        if tail_length <= extra && self.snake.len() > 2 {
            self.snake.pop();
            return;
        }

        let cut = extra.min(tail_length);
        self.snake[last] = Position::new(
            tail.x - cut * (tail.x - previous.x).signum(),
            tail.y - cut * (tail.y - previous.y).signum(),
        );
    }

    fn is_outside_arena(&self, position: Position) -> bool {
        position.x < 0 || position.x > self.width || position.y < 0 || position.y > self.height
    }
}
