use crate::game::GameSpeed;
use crate::grid::Position;

/// Food type. Each kind carries one effect, applied when eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FoodKind {
    Normal,
    Accelerate,
    Decelerate,
    Reverse,
    GoThroughWalls,
}

/// Game state produced by eating one food kind.
///
/// Eating always overwrites both fields, so effects never stack.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodEffect {
    pub speed: GameSpeed,
    pub wall_pass: bool,
}

impl FoodKind {
    /// All kinds in roll order.
    pub const ALL: [FoodKind; 5] = [
        FoodKind::Normal,
        FoodKind::Accelerate,
        FoodKind::Decelerate,
        FoodKind::Reverse,
        FoodKind::GoThroughWalls,
    ];

    /// Selects a kind from a percentile roll in `0..100`.
    ///
    /// Weights: 40% normal, 15% each for the four special kinds.
    #[must_use]
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..40 => Self::Normal,
            40..55 => Self::Accelerate,
            55..70 => Self::Decelerate,
            70..85 => Self::Reverse,
            _ => Self::GoThroughWalls,
        }
    }

    /// Speed tier and wall-pass state after eating this kind.
    #[must_use]
    pub fn effect(self) -> FoodEffect {
        let speed = match self {
            Self::Accelerate => GameSpeed::Faster,
            Self::Decelerate => GameSpeed::Slower,
            Self::Normal | Self::Reverse | Self::GoThroughWalls => GameSpeed::Normal,
        };

        FoodEffect {
            speed,
            wall_pass: self == Self::GoThroughWalls,
        }
    }

    /// Short label for the HUD.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Accelerate => "faster",
            Self::Decelerate => "slower",
            Self::Reverse => "reverse",
            Self::GoThroughWalls => "walls",
        }
    }
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    #[must_use]
    pub fn new(kind: FoodKind, position: Position) -> Self {
        Self { position, kind }
    }

    /// Creates a normal food at `position`.
    #[must_use]
    pub fn normal(position: Position) -> Self {
        Self::new(FoodKind::Normal, position)
    }
}

#[cfg(test)]
mod tests {
    use super::{Food, FoodEffect, FoodKind};
    use crate::game::GameSpeed;
    use crate::grid::Position;

    #[test]
    fn roll_thresholds_select_kinds() {
        let cases = [
            (0, FoodKind::Normal),
            (39, FoodKind::Normal),
            (40, FoodKind::Accelerate),
            (54, FoodKind::Accelerate),
            (55, FoodKind::Decelerate),
            (69, FoodKind::Decelerate),
            (70, FoodKind::Reverse),
            (84, FoodKind::Reverse),
            (85, FoodKind::GoThroughWalls),
            (99, FoodKind::GoThroughWalls),
        ];

        for (roll, expected) in cases {
            assert_eq!(FoodKind::from_roll(roll), expected, "roll {roll}");
        }
    }

    #[test]
    fn roll_distribution_matches_weights() {
        let mut counts = [0_u32; 5];
        for roll in 0..100 {
            let kind = FoodKind::from_roll(roll);
            let slot = FoodKind::ALL
                .iter()
                .position(|candidate| *candidate == kind)
                .expect("every kind is listed");
            counts[slot] += 1;
        }

        assert_eq!(counts, [40, 15, 15, 15, 15]);
    }

    #[test]
    fn effect_table() {
        let table = [
            (FoodKind::Normal, GameSpeed::Normal, false),
            (FoodKind::Accelerate, GameSpeed::Faster, false),
            (FoodKind::Decelerate, GameSpeed::Slower, false),
            (FoodKind::Reverse, GameSpeed::Normal, false),
            (FoodKind::GoThroughWalls, GameSpeed::Normal, true),
        ];

        for (kind, speed, wall_pass) in table {
            assert_eq!(kind.effect(), FoodEffect { speed, wall_pass }, "{kind:?}");
        }
    }

    #[test]
    fn normal_constructor_sets_kind() {
        let food = Food::normal(Position::new(1, 2));

        assert_eq!(food.kind, FoodKind::Normal);
        assert_eq!(food.position, Position::new(1, 2));
    }
}
