use serde::{Deserialize, Serialize};

use crate::wallsnake::types::{APIVersion, Coord, Direction, Head, Tail};

#[derive(Serialize, Debug)]
pub struct Status {
    pub apiversion: APIVersion,
    pub author:     String,
    pub color:      String,
    pub head:       Head,
    pub tail:       Tail,
    pub version:    String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Game {
    pub id:      String,
    pub timeout: i32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Board {
    pub height: i32,
    pub width:  i32,
    pub food:   Vec<Coord>,
    pub snakes: Vec<Snake>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Snake {
    pub id:     String,
    pub name:   String,
    pub health: i32,
    pub body:   Vec<Coord>,
    pub head:   Coord,
    pub length: i32,
    #[serde(default)]
    pub shout:  String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GameState {
    pub game:  Game,
    pub turn:  i32,
    pub board: Board,
    pub you:   Snake,
}

#[derive(Serialize, Debug)]
pub struct Movement {
    #[serde(rename = "move")]
    pub movement: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shout:    Option<String>,
}

impl Board {
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }

    /// True if the coordinate matches any snake's head or body cell,
    /// including our own.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.snakes
            .iter()
            .any(|snake| coord == snake.head || snake.body.contains(&coord))
    }

    pub fn is_safe(&self, coord: Coord) -> bool {
        self.contains(coord) && !self.is_occupied(coord)
    }

    pub fn is_at_edge(&self, coord: Coord) -> bool {
        coord.x == 0
            || coord.x == self.width - 1
            || coord.y == 0
            || coord.y == self.height - 1
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Movement, Snake};
    use crate::wallsnake::types::{Coord, Direction};

    fn snake_at(head: Coord, body: Vec<Coord>) -> Snake {
        Snake {
            id: "1".to_owned(),
            name: "wallflower".to_owned(),
            health: 100,
            length: body.len() as i32 + 1,
            head,
            body,
            shout: String::new(),
        }
    }

    fn board_with(snakes: Vec<Snake>) -> Board {
        Board {
            height: 10,
            width: 10,
            food: vec![],
            snakes,
        }
    }

    #[test]
    fn coords_outside_the_board_are_never_safe() {
        let board = board_with(vec![]);
        for coord in [
            Coord { x: -1, y: 5 },
            Coord { x: 10, y: 5 },
            Coord { x: 5, y: -1 },
            Coord { x: 5, y: 10 },
        ] {
            assert!(!board.contains(coord));
            assert!(!board.is_safe(coord));
        }
    }

    #[test]
    fn snake_cells_are_occupied_and_unsafe() {
        let snake = snake_at(
            Coord { x: 3, y: 3 },
            vec![Coord { x: 3, y: 2 }, Coord { x: 3, y: 1 }],
        );
        let board = board_with(vec![snake]);

        assert!(board.is_occupied(Coord { x: 3, y: 3 }));
        assert!(board.is_occupied(Coord { x: 3, y: 1 }));
        assert!(!board.is_safe(Coord { x: 3, y: 2 }));
        assert!(board.is_safe(Coord { x: 4, y: 3 }));
    }

    #[test]
    fn edge_cells_are_exactly_the_border_ring() {
        let board = board_with(vec![]);
        assert!(board.is_at_edge(Coord { x: 0, y: 5 }));
        assert!(board.is_at_edge(Coord { x: 9, y: 5 }));
        assert!(board.is_at_edge(Coord { x: 5, y: 0 }));
        assert!(board.is_at_edge(Coord { x: 5, y: 9 }));
        assert!(board.is_at_edge(Coord { x: 0, y: 0 }));
        assert!(!board.is_at_edge(Coord { x: 1, y: 1 }));
        assert!(!board.is_at_edge(Coord { x: 5, y: 5 }));
    }

    #[test]
    fn movement_omits_the_shout_when_there_is_none() {
        let quiet = Movement {
            movement: Direction::Left,
            shout:    None,
        };
        assert_eq!(serde_json::to_string(&quiet).unwrap(), r#"{"move":"left"}"#);

        let loud = Movement {
            movement: Direction::Up,
            shout:    Some("coming through".to_owned()),
        };
        assert_eq!(
            serde_json::to_string(&loud).unwrap(),
            r#"{"move":"up","shout":"coming through"}"#
        );
    }

    #[test]
    fn game_state_decodes_from_the_wire_shape() {
        let state: super::GameState = serde_json::from_str(
            r#"{
                "game": {"id": "g-1", "timeout": 500},
                "turn": 3,
                "board": {
                    "height": 11,
                    "width": 11,
                    "food": [{"x": 5, "y": 5}],
                    "snakes": [{
                        "id": "1",
                        "name": "wallflower",
                        "health": 90,
                        "body": [{"x": 1, "y": 0}],
                        "head": {"x": 1, "y": 1},
                        "length": 2,
                        "shout": ""
                    }]
                },
                "you": {
                    "id": "1",
                    "name": "wallflower",
                    "health": 90,
                    "body": [{"x": 1, "y": 0}],
                    "head": {"x": 1, "y": 1},
                    "length": 2,
                    "shout": ""
                }
            }"#,
        )
        .unwrap();

        assert_eq!(state.turn, 3);
        assert_eq!(state.you.head, Coord { x: 1, y: 1 });
        assert_eq!(state.board.food, vec![Coord { x: 5, y: 5 }]);
    }
}
