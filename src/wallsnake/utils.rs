use itertools::Itertools;

use crate::wallsnake::types::Coord;

#[must_use]
pub const fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Picks the candidate closest to `origin`. Ties go to the first-scanned
/// candidate; empty candidate lists yield `None` rather than a bogus
/// minimum.
#[must_use]
pub fn nearest(origin: Coord, candidates: &[Coord]) -> Option<Coord> {
    candidates
        .iter()
        .copied()
        .min_by_key(|candidate| manhattan_distance(origin, *candidate))
}

/// Stable ascending sort by distance to `origin`; equidistant coordinates
/// keep their enumeration order.
#[must_use]
pub fn sort_by_distance(origin: Coord, candidates: Vec<Coord>) -> Vec<Coord> {
    candidates
        .into_iter()
        .sorted_by_key(|candidate| manhattan_distance(origin, *candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{manhattan_distance, nearest, sort_by_distance};
    use crate::wallsnake::types::Coord;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Coord { x: 1, y: 8 };
        let b = Coord { x: 6, y: 2 };
        assert_eq!(manhattan_distance(a, b), 11);
        assert_eq!(manhattan_distance(a, b), manhattan_distance(b, a));
    }

    #[test]
    fn manhattan_distance_is_zero_only_between_equal_coords() {
        let a = Coord { x: 4, y: 4 };
        assert_eq!(manhattan_distance(a, a), 0);
        assert_ne!(manhattan_distance(a, Coord { x: 4, y: 5 }), 0);
    }

    #[test]
    fn nearest_takes_the_first_minimum_on_ties() {
        let origin = Coord { x: 0, y: 0 };
        let candidates = [
            Coord { x: 3, y: 3 },
            Coord { x: 2, y: 0 },
            Coord { x: 0, y: 2 },
        ];
        assert_eq!(nearest(origin, &candidates), Some(Coord { x: 2, y: 0 }));
    }

    #[test]
    fn nearest_guards_against_an_empty_candidate_list() {
        assert_eq!(nearest(Coord { x: 0, y: 0 }, &[]), None);
    }

    #[test]
    fn sort_by_distance_is_stable_on_ties() {
        let origin = Coord { x: 5, y: 5 };
        let sorted = sort_by_distance(
            origin,
            vec![
                Coord { x: 5, y: 9 },
                Coord { x: 9, y: 5 },
                Coord { x: 5, y: 6 },
                Coord { x: 4, y: 5 },
            ],
        );
        assert_eq!(
            sorted,
            vec![
                Coord { x: 5, y: 6 },
                Coord { x: 4, y: 5 },
                Coord { x: 5, y: 9 },
                Coord { x: 9, y: 5 },
            ]
        );
    }
}
