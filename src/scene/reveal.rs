use super::shape::Shape;

/// Two-state flag that shows interior detail and dims exteriors.
///
/// Collapsed, optional shapes (stairwells, restrooms, rooms) are left out of
/// the render set and primary shapes (buildings, corridors) draw at their
/// own opacity. Revealed, optional shapes are drawn and primary shapes fade
/// to the revealed opacity. Nothing else is affected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealToggle {
    revealed: bool,
}

impl RevealToggle {
    /// Toggle starting in the given state.
    #[must_use]
    pub const fn new(revealed: bool) -> Self {
        Self { revealed }
    }

    /// Flip between collapsed and revealed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// Whether interior detail is currently shown.
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Whether `shape` belongs in the render set under the current state.
    #[must_use]
    pub fn includes(self, shape: &Shape) -> bool {
        self.revealed || !shape.group.is_optional()
    }

    /// Opacity `shape` should draw with under the current state.
    #[must_use]
    pub fn opacity_for(self, shape: &Shape, revealed_opacity: f32) -> f32 {
        if self.revealed && shape.group.is_primary() {
            revealed_opacity
        } else {
            shape.opacity
        }
    }
}
