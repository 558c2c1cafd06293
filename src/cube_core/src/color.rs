use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CubeError;

/// One of the six sticker colors. A color also names the side whose center
/// carries it, so `Color` doubles as a side identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Color {
    White = 0,
    Red = 1,
    Orange = 2,
    Yellow = 3,
    Green = 4,
    Blue = 5,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [White, Red, Orange, Yellow, Green, Blue];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The four sides that touch both WHITE and YELLOW.
    pub const RING: [Self; 4] = [Color::Red, Color::Orange, Color::Green, Color::Blue];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single letter notation used by [`crate::Move`].
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Color::ALL
            .into_iter()
            .find(|color| color.letter() == letter.to_ascii_uppercase())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "WHITE",
            Color::Red => "RED",
            Color::Orange => "ORANGE",
            Color::Yellow => "YELLOW",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        }
    }

    /// The side across the cube from this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Yellow,
            Color::Yellow => Color::White,
            Color::Red => Color::Orange,
            Color::Orange => Color::Red,
            Color::Green => Color::Blue,
            Color::Blue => Color::Green,
        }
    }

    /// Whether this side borders both WHITE and YELLOW.
    #[must_use]
    pub const fn is_ring(self) -> bool {
        !matches!(self, Color::White | Color::Yellow)
    }
}

impl TryFrom<u8> for Color {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Color::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CubeError::InvalidColor(value))
    }
}

impl FromStr for Color {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(letter), None) = (chars.next(), chars.next())
            && let Some(color) = Color::from_letter(letter)
        {
            return Ok(color);
        }

        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CubeError::UnknownColorName(s.to_owned()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
