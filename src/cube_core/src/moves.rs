use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Color, CubeError};

/// A quarter turn of one side, clockwise as seen looking at that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub side: Color,
    pub clockwise: bool,
}

impl Move {
    #[must_use]
    pub const fn clockwise(side: Color) -> Self {
        Move {
            side,
            clockwise: true,
        }
    }

    #[must_use]
    pub const fn counter_clockwise(side: Color) -> Self {
        Move {
            side,
            clockwise: false,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Move {
            side: self.side,
            clockwise: !self.clockwise,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.side.letter())?;
        if !self.clockwise {
            f.write_str("'")?;
        }
        Ok(())
    }
}

/// Parses whitespace separated notation like `W R' G2`. A trailing `2` expands
/// into two clockwise turns.
///
/// # Errors
///
/// [`CubeError::InvalidMove`] naming the first token that is not a side letter
/// optionally followed by `'` or `2`.
pub fn parse_moves(notation: &str) -> Result<Vec<Move>, CubeError> {
    let mut moves = vec![];
    for token in notation.split_whitespace() {
        let invalid = || CubeError::InvalidMove(token.to_owned());

        let mut chars = token.chars();
        let side = chars.next().and_then(Color::from_letter).ok_or_else(invalid)?;
        match (chars.next(), chars.next()) {
            (None, _) => moves.push(Move::clockwise(side)),
            (Some('\''), None) => moves.push(Move::counter_clockwise(side)),
            (Some('2'), None) => moves.extend([Move::clockwise(side); 2]),
            _ => return Err(invalid()),
        }
    }
    Ok(moves)
}

/// `length` quarter turns drawn uniformly from the twelve possible ones.
pub fn random_scramble(rng: &mut fastrand::Rng, length: usize) -> Vec<Move> {
    std::iter::repeat_with(|| Move {
        side: Color::ALL[rng.usize(..Color::ALL.len())],
        clockwise: rng.bool(),
    })
    .take(length)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    #[test]
    fn parses_notation() {
        assert_eq!(
            parse_moves("W r' G2\tY").unwrap(),
            vec![
                Move::clockwise(White),
                Move::counter_clockwise(Red),
                Move::clockwise(Green),
                Move::clockwise(Green),
                Move::clockwise(Yellow),
            ]
        );
        assert!(parse_moves("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_tokens() {
        for bad in ["X", "W3", "R''", "G'2", "'"] {
            assert_eq!(
                parse_moves(&format!("W {bad}")),
                Err(CubeError::InvalidMove(bad.to_owned()))
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let mut rng = fastrand::Rng::with_seed(3);
        let moves = random_scramble(&mut rng, 40);
        let notation = moves.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(parse_moves(&notation.join(" ")).unwrap(), moves);
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let a = random_scramble(&mut fastrand::Rng::with_seed(11), 25);
        let b = random_scramble(&mut fastrand::Rng::with_seed(11), 25);
        assert_eq!(a.len(), 25);
        assert_eq!(a, b);
    }

    #[test]
    fn inverse_flips_direction() {
        let mv = Move::clockwise(Blue);
        assert_eq!(mv.inverse(), Move::counter_clockwise(Blue));
        assert_eq!(mv.inverse().inverse(), mv);
    }

    #[test]
    fn serializes_like_the_wire_format() {
        let json = serde_json::to_string(&Move::counter_clockwise(Orange)).unwrap();
        assert_eq!(json, r#"{"side":"ORANGE","clockwise":false}"#);
    }
}
