use cube_core::{Color, Move};
use serde::{Serialize, Serializer};

/// A named checkpoint attached to a position in the move list. Purely
/// instructional; nothing reads markers back while solving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveMarker {
    pub id: &'static str,
    pub colors: Vec<Color>,
}

/// The full output of one solve run: every move in order, where each phase
/// begins, and the markers phases left along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveInstructions {
    moves: Vec<Move>,
    #[serde(serialize_with = "ordered_map")]
    stage_indices: Vec<(&'static str, usize)>,
    #[serde(serialize_with = "ordered_map")]
    markers: Vec<(usize, MoveMarker)>,
}

fn ordered_map<S, K, V>(entries: &[(K, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    K: Serialize,
    V: Serialize,
{
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

impl SolveInstructions {
    /// Appends the output of one phase. Marker positions are local to the
    /// phase and get shifted to their place in the whole sequence.
    pub(crate) fn push_phase(
        &mut self,
        id: &'static str,
        moves: Vec<Move>,
        markers: Vec<(usize, MoveMarker)>,
    ) {
        let offset = self.moves.len();
        self.stage_indices.push((id, offset));
        self.markers.extend(
            markers
                .into_iter()
                .map(|(index, marker)| (index + offset, marker)),
        );
        self.moves.extend(moves);
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Phase ids in the order they ran.
    pub fn phases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stage_indices.iter().map(|&(id, _)| id)
    }

    /// Index of the first move belonging to phase `id`.
    #[must_use]
    pub fn phase_start(&self, id: &str) -> Option<usize> {
        self.stage_indices
            .iter()
            .find(|(phase, _)| *phase == id)
            .map(|&(_, start)| start)
    }

    /// The moves recorded by phase `id`, possibly empty.
    #[must_use]
    pub fn phase_moves(&self, id: &str) -> Option<&[Move]> {
        let position = self
            .stage_indices
            .iter()
            .position(|(phase, _)| *phase == id)?;
        let start = self.stage_indices[position].1;
        let end = self
            .stage_indices
            .get(position + 1)
            .map_or(self.moves.len(), |&(_, next)| next);
        Some(&self.moves[start..end])
    }

    /// Markers with their index in [`SolveInstructions::moves`], in the order
    /// they were recorded.
    #[must_use]
    pub fn markers(&self) -> &[(usize, MoveMarker)] {
        &self.markers
    }
}
