//! The packed state of one side.
//!
//! A side stores its 8 outer facelets clockwise around the center, starting
//! at the top-left corner:
//!
//! ```text
//! 0 1 2
//! 7   3
//! 6 5 4
//! ```
//!
//! Each facelet is one byte of a `u64`. Facelet `i` occupies bits
//! `56 - 8 * i .. 64 - 8 * i`, so facelet 0 is the most significant byte. A
//! quarter turn moves every facelet two ring slots forward, which is exactly a
//! 16 bit rotation of the word: clockwise rotates right, counter-clockwise
//! rotates left.

use std::fmt;

use crate::{Color, CubeError};

pub const TOP_LEFT: usize = 0;
pub const TOP_MIDDLE: usize = 1;
pub const TOP_RIGHT: usize = 2;
pub const MIDDLE_RIGHT: usize = 3;
pub const BOTTOM_RIGHT: usize = 4;
pub const BOTTOM_MIDDLE: usize = 5;
pub const BOTTOM_LEFT: usize = 6;
pub const MIDDLE_LEFT: usize = 7;

/// Number of facelets stored per side.
pub const FACELETS: usize = 8;

/// Ring slots a single quarter turn advances by.
pub const SLOTS_PER_QUARTER_TURN: i32 = 2;

const fn shift_of(index: usize) -> u32 {
    assert!(index < FACELETS, "facelet index out of range");
    (56 - 8 * index) as u32
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face(u64);

impl Face {
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Face(u64::from_ne_bytes([color as u8; 8]))
    }

    #[must_use]
    pub const fn new(colors: [Color; FACELETS]) -> Self {
        let mut packed = 0;
        let mut i = 0;
        while i < FACELETS {
            packed |= (colors[i] as u64) << shift_of(i);
            i += 1;
        }
        Face(packed)
    }

    /// Builds a face from raw scanned values, validating the facelet count and
    /// each color.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidShape`] when `values` is not 8 long and
    /// [`CubeError::InvalidColor`] for any value outside `0..6`.
    pub fn try_from_values(values: &[u8]) -> Result<Self, CubeError> {
        let colors: [u8; FACELETS] = values.try_into().map_err(|_| CubeError::InvalidShape {
            what: "facelets per side",
            expected: FACELETS,
            actual: values.len(),
        })?;
        Face::from_packed(u64::from_be_bytes(colors))
    }

    /// Reinterprets a packed word, rejecting any byte that is not a color.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidColor`] for the first out of range byte.
    pub fn from_packed(packed: u64) -> Result<Self, CubeError> {
        for byte in packed.to_be_bytes() {
            Color::try_from(byte)?;
        }
        Ok(Face(packed))
    }

    #[must_use]
    pub const fn packed(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn get(self, index: usize) -> Color {
        Color::ALL[((self.0 >> shift_of(index)) & 0xff) as usize]
    }

    #[must_use]
    pub fn colors(self) -> [Color; FACELETS] {
        std::array::from_fn(|i| self.get(i))
    }

    #[must_use]
    pub const fn with(self, index: usize, color: Color) -> Self {
        let shift = shift_of(index);
        Face((self.0 & !(0xff << shift)) | ((color as u64) << shift))
    }

    /// Rotates the ring by `slots` positions; positive is clockwise. A quarter
    /// turn is [`SLOTS_PER_QUARTER_TURN`] slots.
    #[must_use]
    pub const fn rotated(self, slots: i32) -> Self {
        let bits = slots.rem_euclid(FACELETS as i32) as u32 * 8;
        Face(self.0.rotate_right(bits))
    }

    #[must_use]
    pub const fn rotated_clockwise(self) -> Self {
        self.rotated(SLOTS_PER_QUARTER_TURN)
    }

    #[must_use]
    pub const fn rotated_counter_clockwise(self) -> Self {
        self.rotated(-SLOTS_PER_QUARTER_TURN)
    }

    #[must_use]
    pub const fn is_solid(self, color: Color) -> bool {
        self.0 == Face::solid(color).0
    }
}

impl From<[Color; FACELETS]> for Face {
    fn from(colors: [Color; FACELETS]) -> Self {
        Face::new(colors)
    }
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.colors()).finish()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.colors() {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}
