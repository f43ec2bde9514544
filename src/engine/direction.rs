use crate::error::Error;

use super::line::{LineKind, Polarity};

/// Direction represents the direction indicated by the player.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Up and Down act on columns, Left and Right on rows.
    pub fn line_kind(&self) -> LineKind {
        match self {
            Self::Up | Self::Down => LineKind::Column,
            Self::Left | Self::Right => LineKind::Row,
        }
    }

    pub fn polarity(&self) -> Polarity {
        match self {
            Self::Up | Self::Left => Polarity::TowardLow,
            Self::Down | Self::Right => Polarity::TowardHigh,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::up(Direction::Up, LineKind::Column, Polarity::TowardLow)]
    #[case::down(Direction::Down, LineKind::Column, Polarity::TowardHigh)]
    #[case::left(Direction::Left, LineKind::Row, Polarity::TowardLow)]
    #[case::right(Direction::Right, LineKind::Row, Polarity::TowardHigh)]
    fn mapping(#[case] direction: Direction, #[case] kind: LineKind, #[case] polarity: Polarity) {
        assert_eq!(direction.line_kind(), kind);
        assert_eq!(direction.polarity(), polarity);
    }

    #[rstest]
    #[case("up", Direction::Up)]
    #[case("u", Direction::Up)]
    #[case("Down", Direction::Down)]
    #[case("d", Direction::Down)]
    #[case(" left\n", Direction::Left)]
    #[case("l", Direction::Left)]
    #[case("RIGHT", Direction::Right)]
    #[case("r", Direction::Right)]
    fn parse(#[case] input: &str, #[case] expected: Direction) {
        assert_eq!(input.parse::<Direction>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("north")]
    #[case("q")]
    fn parse_invalid(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Direction>(),
            Err(Error::InvalidDirection(_))
        ));
    }

    #[test]
    fn display_parses_back() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }
}
