//! Mapping between window-manager pixels and the physics frame.
//!
//! The window manager places rectangles by their top-left corner in global
//! pixels with y growing downward. Physics works in workspace-local units:
//! the floor is y = 0, the left wall is x = 0, y grows upward, and bodies
//! are positioned by their center.

use rapier2d::prelude::*;
use windfall_common::Rect;

/// The workspace the arena currently covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaFrame {
    /// Workspace rectangle in global pixels.
    pub rect: Rect,
    pub scale: Real,
}

impl ArenaFrame {
    pub fn new(rect: Rect, scale: Real) -> Self {
        Self { rect, scale }
    }

    pub fn width_units(&self) -> Real {
        self.rect.width as Real * self.scale
    }

    pub fn height_units(&self) -> Real {
        self.rect.height as Real * self.scale
    }

    pub fn to_units(&self, pixels: i32) -> Real {
        pixels as Real * self.scale
    }

    /// Physics-space center of an outer window rectangle.
    pub fn center_of(&self, outer: Rect) -> Vector<Real> {
        let scale = f64::from(self.scale);
        let left = f64::from(outer.x - self.rect.x);
        let bottom = f64::from(self.rect.y + self.rect.height - (outer.y + outer.height));
        vector![
            ((left + f64::from(outer.width) / 2.0) * scale) as Real,
            ((bottom + f64::from(outer.height) / 2.0) * scale) as Real
        ]
    }

    /// Global top-left pixel of a `width` x `height` rectangle centered at
    /// `center`, rounded to the nearest pixel.
    pub fn top_left_of(&self, center: &Vector<Real>, width: i32, height: i32) -> (i32, i32) {
        let scale = f64::from(self.scale);
        let cx = f64::from(center.x) / scale;
        let cy = f64::from(center.y) / scale;
        let x = f64::from(self.rect.x) + cx - f64::from(width) / 2.0;
        let y = f64::from(self.rect.y + self.rect.height) - cy - f64::from(height) / 2.0;
        (x.round() as i32, y.round() as i32)
    }
}
