//! Drawing tool selection.

use crate::draw::DrawMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing drawing tool.
///
/// A superset of the engine's [`DrawMode`]: `Arrow` has no native engine mode
/// and is drawn as a line with an arrowhead at its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogicalMode {
    /// Freehand drawing - follows the pointer path
    #[default]
    Draw,
    /// Straight line between start and end points
    Line,
    /// Rectangle outline from corner to corner
    Rectangle,
    /// Ellipse outline inscribed in the drag box
    Ellipse,
    /// Line with a directional head at the end point
    Arrow,
}

impl LogicalMode {
    pub const ALL: [LogicalMode; 5] = [
        LogicalMode::Draw,
        LogicalMode::Line,
        LogicalMode::Rectangle,
        LogicalMode::Ellipse,
        LogicalMode::Arrow,
    ];

    /// Engine mode plus arrow-end flag that encode this tool.
    pub fn engine_encoding(self) -> (DrawMode, bool) {
        match self {
            LogicalMode::Draw => (DrawMode::Draw, false),
            LogicalMode::Line => (DrawMode::Line, false),
            LogicalMode::Rectangle => (DrawMode::Rectangle, false),
            LogicalMode::Ellipse => (DrawMode::Ellipse, false),
            LogicalMode::Arrow => (DrawMode::Line, true),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LogicalMode::Draw => "draw",
            LogicalMode::Line => "line",
            LogicalMode::Rectangle => "rectangle",
            LogicalMode::Ellipse => "ellipse",
            LogicalMode::Arrow => "arrow",
        }
    }
}

impl fmt::Display for LogicalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for LogicalMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogicalMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn arrow_is_encoded_as_line_with_head() {
        assert_eq!(LogicalMode::Arrow.engine_encoding(), (DrawMode::Line, true));
    }

    #[test]
    fn native_modes_have_no_head() {
        for mode in LogicalMode::ALL {
            if mode == LogicalMode::Arrow {
                continue;
            }
            let (_, arrow_end) = mode.engine_encoding();
            assert!(!arrow_end, "{mode} should not carry an arrowhead");
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(LogicalMode::from_str("Arrow"), Ok(LogicalMode::Arrow));
        assert_eq!(LogicalMode::from_str("ELLIPSE"), Ok(LogicalMode::Ellipse));
        assert!(LogicalMode::from_str("lasso").is_err());
    }
}
