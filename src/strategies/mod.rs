pub mod actions;

pub use actions::Action;

use crate::wallsnake::models::{Board, Snake};

/// A rule for choosing which action governs the current turn. Stateless;
/// every call works from the turn snapshot alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Chase food no matter what.
    NearestFood,
    /// Wander safely and only chase food once health runs low. The board
    /// height doubles as the danger threshold, tying the health budget to
    /// the grid size.
    FoodOnlyWhenHealthLow,
    /// Patrol the inside of the border ring, leaving it only to eat.
    #[default]
    CircleInnerBorder,
}

impl Strategy {
    pub fn select_action(&self, snake: &Snake, board: &Board) -> Action {
        match self {
            Strategy::NearestFood => Action::CollectNearestFood,
            Strategy::FoodOnlyWhenHealthLow => {
                if snake.health > board.height {
                    Action::MakeSafeMove
                } else {
                    Action::CollectNearestFood
                }
            },
            Strategy::CircleInnerBorder => {
                if snake.health < board.height {
                    Action::CollectNearestFood
                } else if !board.is_at_edge(snake.head) {
                    Action::ApproachBorder
                } else {
                    Action::FollowBorder
                }
            },
        }
    }
}
