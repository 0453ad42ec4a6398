use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The color whose advantage is scored positively. Black moves first and
    /// maximizes.
    pub const MAXIMIZING: Color = Color::Black;

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn maximize_score(&self) -> bool {
        *self == Self::MAXIMIZING
    }

    pub fn to_notation_char(&self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err("invalid color; options are: black, white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn test_black_maximizes() {
        assert!(Color::Black.maximize_score());
        assert!(!Color::White.maximize_score());
    }

    #[test]
    fn test_parse_white() {
        assert_eq!(Color::White, Color::from_str("white").unwrap());
        assert_eq!(Color::White, Color::from_str("w").unwrap());
    }

    #[test]
    fn test_parse_black() {
        assert_eq!(Color::Black, Color::from_str("black").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::from_str("red").is_err());
    }
}
