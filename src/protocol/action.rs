//! The five text transformations the server supports.

use std::fmt;
use std::str::FromStr;

use crate::error::TextwireError;

/// A text transformation requested from the server.
///
/// Each action carries a fixed bit-flag wire tag that occupies the high
/// 5 bits of the request header. Only these five tags are valid; anything
/// else on the wire or from a caller is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Uppercase,
    Lowercase,
    Reverse,
    Shuffle,
    Random,
}

impl Action {
    /// All actions in tag order.
    pub const ALL: [Action; 5] = [
        Action::Uppercase,
        Action::Lowercase,
        Action::Reverse,
        Action::Shuffle,
        Action::Random,
    ];

    /// Wire tag for this action (bit-flag style, 5 bits).
    #[inline]
    pub fn tag(self) -> u32 {
        match self {
            Action::Uppercase => 1,
            Action::Lowercase => 2,
            Action::Reverse => 4,
            Action::Shuffle => 8,
            Action::Random => 16,
        }
    }

    /// Look up an action by its wire tag.
    ///
    /// Returns `InvalidAction` for any value outside the five valid tags.
    pub fn from_tag(tag: u32) -> Result<Self, TextwireError> {
        match tag {
            1 => Ok(Action::Uppercase),
            2 => Ok(Action::Lowercase),
            4 => Ok(Action::Reverse),
            8 => Ok(Action::Shuffle),
            16 => Ok(Action::Random),
            other => Err(TextwireError::InvalidAction(other)),
        }
    }

    /// Protocol name of this action as used in request script files.
    pub fn name(self) -> &'static str {
        match self {
            Action::Uppercase => "uppercase",
            Action::Lowercase => "lowercase",
            Action::Reverse => "reverse",
            Action::Shuffle => "shuffle",
            Action::Random => "random",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = TextwireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uppercase" => Ok(Action::Uppercase),
            "lowercase" => Ok(Action::Lowercase),
            "reverse" => Ok(Action::Reverse),
            "shuffle" => Ok(Action::Shuffle),
            "random" => Ok(Action::Random),
            other => Err(TextwireError::UnknownAction(other.to_string())),
        }
    }
}
