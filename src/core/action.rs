//! Move descriptions: what a player submits for one turn.
//!
//! A move is either a skip or an ordered selection of hand positions, each
//! optionally flagged to use the character's special ability. The textual
//! grammar shared by every front end:
//!
//! - `"0"`: skip
//! - `"2,5s"`: play hand positions 2 and 5 (1-based), the second one special
//! - `"3sd"` / `"3sa"`: special with an explicit Clubs stance (defend/attack)
//!
//! ```
//! use disfida::core::{MoveSpec, Selection};
//!
//! let spec: MoveSpec = "2,5s".parse().unwrap();
//! assert_eq!(
//!     spec,
//!     MoveSpec::play([Selection::card(1), Selection::special(4)]),
//! );
//! assert_eq!(spec.to_string(), "2,5s");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::ParseError;

/// How a Clubs character plays a Clubs card under the special ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubsStance {
    Attack,
    Shield,
}

/// One selected hand card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// 0-based hand index.
    pub index: usize,
    /// Use the character's special ability for this card.
    pub special: bool,
    /// Only meaningful for a Clubs special. `None` means attack.
    pub stance: Option<ClubsStance>,
}

impl Selection {
    /// Play the card at `index` in its default role.
    #[must_use]
    pub const fn card(index: usize) -> Self {
        Self {
            index,
            special: false,
            stance: None,
        }
    }

    /// Play the card at `index` using the special ability.
    #[must_use]
    pub const fn special(index: usize) -> Self {
        Self {
            index,
            special: true,
            stance: None,
        }
    }

    /// Set the Clubs stance.
    #[must_use]
    pub const fn with_stance(mut self, stance: ClubsStance) -> Self {
        self.stance = Some(stance);
        self
    }

    /// The 1-based position a player would type.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index + 1
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.position())?;
        if self.special {
            f.write_str("s")?;
            match self.stance {
                Some(ClubsStance::Attack) => f.write_str("a")?,
                Some(ClubsStance::Shield) => f.write_str("d")?,
                None => {}
            }
        }
        Ok(())
    }
}

/// A complete move for one turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSpec {
    Skip,
    /// Cards in the order they resolve. Never empty.
    Play(SmallVec<[Selection; 4]>),
}

impl MoveSpec {
    /// Build a play from selections.
    pub fn play(selections: impl IntoIterator<Item = Selection>) -> Self {
        MoveSpec::Play(selections.into_iter().collect())
    }

    /// Parse move text and check it against a hand of `hand_size` cards.
    pub fn parse(text: &str, hand_size: usize) -> Result<Self, ParseError> {
        let spec: MoveSpec = text.parse()?;
        spec.check_hand(hand_size)?;
        Ok(spec)
    }

    /// Check that every selection names a distinct card in the hand.
    pub fn check_hand(&self, hand_size: usize) -> Result<(), ParseError> {
        let selections = match self {
            MoveSpec::Skip => return Ok(()),
            MoveSpec::Play(selections) => selections,
        };

        if selections.is_empty() {
            return Err(ParseError::Empty);
        }

        for (i, selection) in selections.iter().enumerate() {
            if selection.index >= hand_size {
                return Err(ParseError::IndexOutOfRange {
                    position: selection.position(),
                    hand_size,
                });
            }
            if selections[..i].iter().any(|s| s.index == selection.index) {
                return Err(ParseError::DuplicateIndex(selection.position()));
            }
        }
        Ok(())
    }

    /// Selections in play order (empty for a skip).
    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        match self {
            MoveSpec::Skip => &[],
            MoveSpec::Play(selections) => selections,
        }
    }

    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, MoveSpec::Skip)
    }
}

fn parse_token(token: &str) -> Result<Selection, ParseError> {
    let lower = token.to_ascii_lowercase();
    let digits_end = lower
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(lower.len());
    let (digits, suffix) = lower.split_at(digits_end);

    let position: usize = digits
        .parse()
        .map_err(|_| ParseError::MalformedToken(token.to_string()))?;

    let (special, stance) = match suffix {
        "" => (false, None),
        "s" => (true, None),
        "sa" => (true, Some(ClubsStance::Attack)),
        "sd" => (true, Some(ClubsStance::Shield)),
        _ => return Err(ParseError::MalformedToken(token.to_string())),
    };

    if position == 0 {
        // "0" only means skip on its own
        return Err(ParseError::IndexOutOfRange {
            position,
            hand_size: 0,
        });
    }

    Ok(Selection {
        index: position - 1,
        special,
        stance,
    })
}

impl FromStr for MoveSpec {
    type Err = ParseError;

    /// Syntax only: positions are not checked against a hand.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text == "0" {
            return Ok(MoveSpec::Skip);
        }

        let selections = text
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(parse_token)
            .collect::<Result<SmallVec<[Selection; 4]>, _>>()?;

        if selections.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(MoveSpec::Play(selections))
    }
}

impl std::fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveSpec::Skip => f.write_str("0"),
            MoveSpec::Play(selections) => {
                for (i, selection) in selections.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", selection)?;
                }
                Ok(())
            }
        }
    }
}
