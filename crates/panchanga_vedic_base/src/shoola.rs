//! Disha Shoola: the direction inauspicious for travel on each weekday.

use serde::Serialize;

use crate::vaar::Vaar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::North,
    Direction::South,
];

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "East",
            Self::West => "West",
            Self::North => "North",
            Self::South => "South",
        }
    }
}

/// Sunday first.
const SHOOLA: [Direction; 7] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DishaShoola {
    pub vaar: Vaar,
    pub direction: Direction,
    pub safe_directions: [Direction; 3],
}

pub fn disha_shoola(vaar: Vaar) -> DishaShoola {
    let direction = SHOOLA[usize::from(vaar.index())];
    let mut safe_directions = [Direction::East; 3];
    for (slot, d) in safe_directions
        .iter_mut()
        .zip(ALL_DIRECTIONS.into_iter().filter(|&d| d != direction))
    {
        *slot = d;
    }
    DishaShoola {
        vaar,
        direction,
        safe_directions,
    }
}

pub fn is_direction_safe(vaar: Vaar, direction: Direction) -> bool {
    SHOOLA[usize::from(vaar.index())] != direction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;

    #[test]
    fn sunday_avoids_west() {
        let s = disha_shoola(Vaar::Ravivaar);
        assert_eq!(s.direction, Direction::West);
        assert_eq!(s.safe_directions, [Direction::East, Direction::North, Direction::South]);
        assert!(!is_direction_safe(Vaar::Ravivaar, Direction::West));
        assert!(is_direction_safe(Vaar::Guruvaar, Direction::North));
        assert_eq!(disha_shoola(Vaar::Guruvaar).direction, Direction::South);
    }

    #[test]
    fn safe_directions_exclude_the_shoola() {
        for vaar in ALL_VAARS {
            let s = disha_shoola(vaar);
            assert!(!s.safe_directions.contains(&s.direction));
            assert!(s.safe_directions.iter().all(|&d| is_direction_safe(vaar, d)));
        }
    }
}
