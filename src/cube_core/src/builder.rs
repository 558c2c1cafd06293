use crate::{Color, Cube, CubeError, Face};

/// Collects scanned sides one at a time until a whole cube is known.
///
/// Scanning the same side again replaces the earlier scan.
#[derive(Debug, Clone, Default)]
pub struct CubeBuilder {
    sides: [Option<Face>; 6],
}

impl CubeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the scan of `side`.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidShape`] or [`CubeError::InvalidColor`] when `values`
    /// is not a valid side. The builder is left unchanged in that case.
    pub fn add_side(&mut self, side: Color, values: &[u8]) -> Result<&mut Self, CubeError> {
        self.sides[side.index()] = Some(Face::try_from_values(values)?);
        Ok(self)
    }

    pub fn add_face(&mut self, side: Color, face: Face) -> &mut Self {
        self.sides[side.index()] = Some(face);
        self
    }

    /// Sides that still need scanning, in [`Color::ALL`] order.
    #[must_use]
    pub fn missing_sides(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|side| self.sides[side.index()].is_none())
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sides.iter().all(Option::is_some)
    }

    /// # Errors
    ///
    /// [`CubeError::MissingSide`] for the first side never scanned.
    pub fn build(&self) -> Result<Cube, CubeError> {
        let mut faces = [Face::solid(Color::White); 6];
        for (side, face) in Color::ALL.into_iter().zip(&mut faces) {
            *face = self.sides[side.index()].ok_or(CubeError::MissingSide(side))?;
        }
        Ok(Cube::new(faces))
    }
}
