//! Ribbon action names

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The named action for an unrecognized wire name.
#[derive(Debug, Clone, Error)]
#[error("Unknown ribbon action: {0}")]
pub struct UnknownAction(pub String);

/// The four ribbon actions.
///
/// Wire names must match the function names declared in the add-in manifest,
/// which is owned outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FillYellow,
    FillOrange,
    FillGray,
    ClearFill,
}

impl Action {
    /// All actions in manifest order
    pub const ALL: [Action; 4] = [
        Action::FillYellow,
        Action::FillOrange,
        Action::FillGray,
        Action::ClearFill,
    ];

    /// The wire name declared in the manifest
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::FillYellow => "fillYellow",
            Action::FillOrange => "fillOrange",
            Action::FillGray => "fillGray",
            Action::ClearFill => "clearFill",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, UnknownAction> {
        match s {
            "fillYellow" => Ok(Action::FillYellow),
            "fillOrange" => Ok(Action::FillOrange),
            "fillGray" => Ok(Action::FillGray),
            "clearFill" => Ok(Action::ClearFill),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "fillPurple".parse::<Action>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown ribbon action: fillPurple");
    }
}
