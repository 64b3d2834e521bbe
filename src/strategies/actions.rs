use log::debug;

use crate::wallsnake::{
    models::{Board, Snake},
    types::{Coord, Direction},
    utils::{nearest, sort_by_distance},
};

/// A move-selection primitive for a single turn. The set is closed, so the
/// variants live in one enum with `execute` matching over them rather than
/// behind a trait object.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    MakeSafeMove,
    FollowBorder,
    CollectNearestFood,
    ApproachBorder,
}

impl Action {
    pub fn execute(&self, snake: &Snake, board: &Board) -> Direction {
        match self {
            Action::MakeSafeMove => safe_move(snake, board),
            Action::FollowBorder => border_move(snake, board),
            Action::CollectNearestFood => collect_nearest_food(snake, board),
            Action::ApproachBorder => approach_border(snake, board),
        }
    }
}

/// First direction in scan order whose destination cell is safe. A fully
/// boxed-in snake still has to answer, so this degrades to up.
fn safe_move(snake: &Snake, board: &Board) -> Direction {
    for direction in Direction::iter() {
        if board.is_safe(snake.head.neighbour(*direction)) {
            return *direction;
        }
    }

    debug!("no safe move found, going {}", Direction::Up);
    Direction::Up
}

/// Walks the perimeter: first direction in scan order whose destination is
/// safe and still on the border ring.
fn border_move(snake: &Snake, board: &Board) -> Direction {
    for direction in Direction::iter() {
        let destination = snake.head.neighbour(*direction);
        if board.is_safe(destination) && board.is_at_edge(destination) {
            return *direction;
        }
    }

    debug!("no safe border move found");
    safe_move(snake, board)
}

fn collect_nearest_food(snake: &Snake, board: &Board) -> Direction {
    let Some(target) = nearest(snake.head, &board.food) else {
        debug!("no food on the board, going {}", Direction::Up);
        return Direction::Up;
    };

    let movement = Direction::towards(snake.head, target);
    if board.is_safe(snake.head.neighbour(movement)) {
        movement
    } else {
        safe_move(snake, board)
    }
}

fn approach_border(snake: &Snake, board: &Board) -> Direction {
    let candidates = sort_by_distance(snake.head, safe_border_cells(board));

    let Some(target) = candidates.first() else {
        debug!("no safe border cell left to approach");
        return safe_move(snake, board);
    };

    let movement = Direction::towards(snake.head, *target);
    if board.is_safe(snake.head.neighbour(movement)) {
        movement
    } else {
        safe_move(snake, board)
    }
}

/// Border cells that are currently safe, enumerated top and bottom rows
/// column by column, then left and right columns row by row. The enumeration
/// order is the tie-break for equidistant cells.
fn safe_border_cells(board: &Board) -> Vec<Coord> {
    let mut cells = Vec::new();

    for x in 0..board.width {
        for y in [0, board.height - 1] {
            let coord = Coord { x, y };
            if board.is_safe(coord) {
                cells.push(coord);
            }
        }
    }

    for y in 0..board.height {
        for x in [0, board.width - 1] {
            let coord = Coord { x, y };
            if board.is_safe(coord) && !cells.contains(&coord) {
                cells.push(coord);
            }
        }
    }

    cells
}
