use tracing::trace;

use crate::body::Body;
use crate::config::GridSize;
use crate::food::{Food, FoodKind};
use crate::grid::{index_of, position_of};
use crate::random::RandomSource;

/// Produces the next food item after one is eaten.
pub trait FoodSpawner {
    fn spawn(&mut self, bounds: GridSize, body: &Body) -> Food;
}

/// Spawner drawing position and kind from a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RandomFoodSpawner<R> {
    random: R,
}

impl<R: RandomSource> RandomFoodSpawner<R> {
    #[must_use]
    pub fn new(random: R) -> Self {
        Self { random }
    }

    #[must_use]
    pub fn random(&self) -> &R {
        &self.random
    }
}

impl<R: RandomSource> FoodSpawner for RandomFoodSpawner<R> {
    fn spawn(&mut self, bounds: GridSize, body: &Body) -> Food {
        spawn_food(&mut self.random, bounds, body)
    }
}

/// Draws a food position and kind.
///
/// The position roll covers only as many cells as are free. A roll that lands
/// on the body is shifted by the distance from that segment to the end of the
/// body: backwards when the roll is in the upper half of the range, forwards
/// otherwise. The shift is not guaranteed to reach a free cell for every body
/// shape; callers must keep at least one cell free.
pub fn spawn_food<R: RandomSource + ?Sized>(
    random: &mut R,
    bounds: GridSize,
    body: &Body,
) -> Food {
    let free_count = bounds.total_cells().saturating_sub(body.len());
    debug_assert!(free_count > 0, "food spawn requires a free cell");

    let range = u32::try_from(free_count).unwrap_or(u32::MAX);
    let roll = i32::try_from(random.next_int_below(range)).unwrap_or(i32::MAX);
    let candidate = position_of(roll, bounds.width);

    let position = match body.index_of(candidate) {
        Some(segment_index) => {
            let shift = i32::try_from(body.len() - segment_index).unwrap_or(i32::MAX);
            let half = i32::try_from(free_count / 2).unwrap_or(i32::MAX);
            let shifted = if roll > half {
                roll - shift
            } else {
                roll + shift
            };
            trace!(roll, shifted, "food roll landed on the body");
            position_of(shifted, bounds.width)
        }
        None => candidate,
    };

    let kind = FoodKind::from_roll(random.next_int_below(100));
    trace!(
        index = index_of(position, bounds.width),
        ?kind,
        "spawned food"
    );

    Food::new(kind, position)
}
