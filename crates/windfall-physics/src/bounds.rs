//! Out-of-bounds classification.

use rapier2d::prelude::*;
use windfall_common::WindowId;

use crate::body::BodyKind;

/// Result of testing one body against the arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsCheck {
    /// The body (plus margin) no longer overlaps the arena.
    pub out_of_bounds: bool,
    /// The body's top edge is above the discard height.
    pub above_discard: bool,
}

/// What the out-of-bounds pass did to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsAction {
    /// The window must be closed.
    Kill(WindowId),
    /// The window's body was recreated above the arena.
    Respawned(WindowId),
}

/// Arena extents in physics units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaExtent {
    pub width: Real,
    pub ceiling: Real,
    pub discard_height: Real,
    pub margin: Real,
}

impl ArenaExtent {
    /// Classify a body with center `center` and half extents `half`.
    /// Static bodies are placed by the window manager and are exempt.
    pub fn check(&self, kind: BodyKind, center: &Vector<Real>, half: &Vector<Real>) -> BoundsCheck {
        if kind == BodyKind::Static {
            return BoundsCheck::default();
        }
        let reach_x = half.x + self.margin;
        let reach_y = half.y + self.margin;
        let overlaps_x = center.x + reach_x > 0.0 && center.x - reach_x < self.width;
        let overlaps_y = center.y + reach_y > 0.0 && center.y - reach_y < self.ceiling;
        BoundsCheck {
            out_of_bounds: !(overlaps_x && overlaps_y),
            above_discard: center.y + half.y > self.discard_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> ArenaExtent {
        ArenaExtent {
            width: 10.0,
            ceiling: 40.0,
            discard_height: 25.0,
            margin: 0.05,
        }
    }

    fn half() -> Vector<Real> {
        vector![1.0, 0.5]
    }

    #[test]
    fn inside_is_in_bounds() {
        let check = extent().check(BodyKind::Dynamic, &vector![5.0, 0.5], &half());
        assert_eq!(check, BoundsCheck::default());
    }

    #[test]
    fn partially_outside_still_overlaps() {
        let check = extent().check(BodyKind::Dynamic, &vector![-0.9, 3.0], &half());
        assert!(!check.out_of_bounds);
    }

    #[test]
    fn fully_past_a_wall_is_out() {
        let extent = extent();
        assert!(extent.check(BodyKind::Dynamic, &vector![-1.2, 3.0], &half()).out_of_bounds);
        assert!(extent.check(BodyKind::Dynamic, &vector![11.2, 3.0], &half()).out_of_bounds);
        assert!(extent.check(BodyKind::Dynamic, &vector![5.0, -0.6], &half()).out_of_bounds);
        assert!(extent.check(BodyKind::Dynamic, &vector![5.0, 40.6], &half()).out_of_bounds);
    }

    #[test]
    fn discard_uses_top_edge() {
        let extent = extent();
        assert!(!extent.check(BodyKind::Dynamic, &vector![5.0, 24.4], &half()).above_discard);
        let check = extent.check(BodyKind::Dynamic, &vector![5.0, 24.6], &half());
        assert!(check.above_discard);
        assert!(!check.out_of_bounds);
    }

    #[test]
    fn static_bodies_are_exempt() {
        let check = extent().check(BodyKind::Static, &vector![-50.0, 90.0], &half());
        assert_eq!(check, BoundsCheck::default());
    }
}
