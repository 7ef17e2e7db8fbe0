use tracing::{debug, trace};

use crate::body::Body;
use crate::config::GridSize;
use crate::food::{Food, FoodKind};
use crate::grid::{Position, index_of};
use crate::input::Direction;
use crate::placement::{FoodSpawner, RandomFoodSpawner};
use crate::random::SeededRandom;

/// Whether the snake is still moving.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Dead,
    /// The body covers as many cells as the board has; no food can be placed.
    Victory,
}

/// What ended the run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Speed tier. The core only records it; the driver picks the tick cadence.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum GameSpeed {
    #[default]
    Normal,
    Faster,
    Slower,
}

impl GameSpeed {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Faster => "faster",
            Self::Slower => "slower",
        }
    }
}

/// Rendered content of one grid cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Empty,
    SnakeHead,
    SnakeBody,
    Food(FoodKind),
}

/// Read-only view of one game frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Row-major cells, `bounds.width * bounds.height` long.
    pub cells: Vec<Cell>,
    pub bounds: GridSize,
    pub status: GameStatus,
    pub alive: bool,
    pub speed: GameSpeed,
    pub score: u32,
    pub wall_pass: bool,
    pub death_reason: Option<DeathReason>,
}

impl Snapshot {
    /// Returns the cell at `position`, or `None` off the grid.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> Option<Cell> {
        if !position.is_within_bounds(self.bounds) {
            return None;
        }
        let index = usize::try_from(index_of(position, self.bounds.width)).ok()?;
        self.cells.get(index).copied()
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct Game<S = RandomFoodSpawner<SeededRandom>> {
    pub(crate) body: Body,
    pub(crate) food: Food,
    pub(crate) direction: Direction,
    pub(crate) speed: GameSpeed,
    pub(crate) wall_pass: bool,
    pub(crate) score: u32,
    pub(crate) status: GameStatus,
    pub(crate) death_reason: Option<DeathReason>,
    turn_available: bool,
    bounds: GridSize,
    start: Position,
    initial_food: Food,
    spawner: S,
}

/// Starting cell of every run.
pub const START_POSITION: Position = Position { x: 0, y: 0 };

/// Direction of every run.
pub const START_DIRECTION: Direction = Direction::Right;

impl Game {
    /// Creates a deterministic game with food placed at the board center.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::new(
            bounds,
            default_food_position(bounds),
            RandomFoodSpawner::new(SeededRandom::new(seed)),
        )
    }

    /// Creates a game seeded from entropy.
    #[must_use]
    pub fn new_random(bounds: GridSize) -> Self {
        Self::new(
            bounds,
            default_food_position(bounds),
            RandomFoodSpawner::new(SeededRandom::from_entropy()),
        )
    }

    /// Seed driving food placement, for reproducing a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.spawner.random().seed()
    }
}

fn default_food_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}

impl<S: FoodSpawner> Game<S> {
    /// Creates a running game with a one-cell snake at the top-left corner
    /// heading right, and normal food at `initial_food_position`.
    #[must_use]
    pub fn new(bounds: GridSize, initial_food_position: Position, spawner: S) -> Self {
        debug_assert!(bounds.width >= 2 && bounds.height >= 2);

        let initial_food = Food::normal(initial_food_position);
        Self {
            body: Body::new(START_POSITION),
            food: initial_food,
            direction: START_DIRECTION,
            speed: GameSpeed::Normal,
            wall_pass: false,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            turn_available: true,
            bounds,
            start: START_POSITION,
            initial_food,
            spawner,
        }
    }

    /// Requests a 90° turn.
    ///
    /// Ignored when a turn was already taken this tick or when `direction` lies
    /// on the current axis, which also rules out direct reversal.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.turn_available || direction.shares_axis_with(self.direction) {
            return;
        }

        self.direction = direction;
        self.turn_available = false;
    }

    /// Advances simulation by one step. No-op once the run has ended.
    pub fn tick(&mut self) {
        if !self.is_alive() {
            return;
        }

        match self.next_head() {
            Ok(new_head) => self.advance(new_head),
            Err(reason) => self.die(reason),
        }

        self.turn_available = true;
    }

    /// Restores the initial configuration.
    pub fn restart(&mut self) {
        debug!(score = self.score, "restarting");

        self.body = Body::new(self.start);
        self.food = self.initial_food;
        self.direction = START_DIRECTION;
        self.speed = GameSpeed::Normal;
        self.wall_pass = false;
        self.score = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.turn_available = true;
    }

    /// Projects body and food onto the grid.
    ///
    /// Priority per cell: head, then body, then food, then empty.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![Cell::Empty; self.bounds.total_cells()];

        self.paint(&mut cells, self.food.position, Cell::Food(self.food.kind));
        for segment in self.body.segments().skip(1) {
            self.paint(&mut cells, *segment, Cell::SnakeBody);
        }
        self.paint(&mut cells, self.body.head(), Cell::SnakeHead);

        cells
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells(),
            bounds: self.bounds,
            status: self.status,
            alive: self.is_alive(),
            speed: self.speed,
            score: self.score,
            wall_pass: self.wall_pass,
            death_reason: self.death_reason,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn speed(&self) -> GameSpeed {
        self.speed
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn wall_pass(&self) -> bool {
        self.wall_pass
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    fn next_head(&self) -> Result<Position, DeathReason> {
        let stepped = self.direction.step(self.body.head());

        let new_head = if stepped.is_within_bounds(self.bounds) {
            stepped
        } else if self.wall_pass {
            stepped.wrapped(self.bounds)
        } else {
            return Err(DeathReason::WallCollision);
        };

        if self.body.contains(new_head) {
            return Err(DeathReason::SelfCollision);
        }

        Ok(new_head)
    }

    fn advance(&mut self, new_head: Position) {
        trace!(x = new_head.x, y = new_head.y, "head moved");

        self.body.push_head(new_head);
        self.body
            .pop_tail()
            .expect("body holds at least two segments after a head push");

        if new_head == self.food.position {
            self.eat();
        }
    }

    fn eat(&mut self) {
        let eaten = self.food;

        self.grow();

        let effect = eaten.kind.effect();
        self.speed = effect.speed;
        self.wall_pass = effect.wall_pass;
        self.score += 1;

        if self.body.len() >= self.bounds.total_cells() {
            debug!(score = self.score, "board filled");
            self.status = GameStatus::Victory;
            return;
        }

        self.food = self.spawner.spawn(self.bounds, &self.body);

        if eaten.kind == FoodKind::Reverse {
            self.reverse();
        }

        debug!(
            eaten = ?eaten.kind,
            score = self.score,
            length = self.body.len(),
            speed = ?self.speed,
            wall_pass = self.wall_pass,
            "food eaten"
        );
    }

    /// Appends one segment past the tail.
    ///
    /// A lone head grows opposite to the heading; a longer body extends the
    /// step from its second-to-last segment to its tail.
    fn grow(&mut self) {
        let tail = self.body.tail();
        let new_tail = match self.body.before_tail() {
            None => self.direction.opposite().step(tail),
            Some(before_tail) => Direction::away_from(tail, before_tail).step(tail),
        };

        self.body.push_tail(new_tail);
    }

    fn reverse(&mut self) {
        self.body.reverse();

        let neck = self
            .body
            .neck()
            .expect("reversal happens after growth, so the body has a neck");
        self.direction = Direction::away_from(self.body.head(), neck);
    }

    fn die(&mut self, reason: DeathReason) {
        debug!(?reason, score = self.score, "snake died");

        self.status = GameStatus::Dead;
        self.death_reason = Some(reason);
    }

    fn paint(&self, cells: &mut [Cell], position: Position, cell: Cell) {
        if !position.is_within_bounds(self.bounds) {
            return;
        }
        if let Ok(index) = usize::try_from(index_of(position, self.bounds.width)) {
            cells[index] = cell;
        }
    }
}
