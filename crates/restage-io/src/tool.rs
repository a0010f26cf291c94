//! Editing tool identifiers.
//!
//! The edit screen has two interaction modes: plain viewing/prompting,
//! and mask painting. The toolbar's paint-roller button toggles between
//! them; the canvas only captures pointer input while the mask tool is
//! active.

use std::fmt;

/// Which interaction mode the edit screen is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Viewing and prompting; the photo is displayed untouched.
    #[default]
    Edit,
    /// Mask painting; pointer input paints overlay strokes.
    Mask,
}

impl Tool {
    /// All tools, in toolbar order.
    pub const ALL: [Self; 2] = [Self::Edit, Self::Mask];

    /// Display label for the tool.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Mask => "Mask",
        }
    }

    /// The mode the paint-roller button switches to from `self`.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Edit => Self::Mask,
            Self::Mask => Self::Edit,
        }
    }

    /// Whether the mask painting surface is active.
    #[must_use]
    pub const fn is_mask(self) -> bool {
        matches!(self, Self::Mask)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_edit() {
        assert_eq!(Tool::default(), Tool::Edit);
        assert!(!Tool::default().is_mask());
    }

    #[test]
    fn toggle_round_trips() {
        for tool in Tool::ALL {
            assert_eq!(tool.toggled().toggled(), tool);
            assert_ne!(tool.toggled(), tool);
        }
    }

    #[test]
    fn labels_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for tool in Tool::ALL {
            assert!(seen.insert(tool.label()), "duplicate label: {tool}");
        }
    }
}
