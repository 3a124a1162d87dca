// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Placement transforms for shape-relative pin offsets

use serde::{Deserialize, Serialize};

use crate::gencad::Component;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Negate x and/or y.
    pub fn mirrored(self, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            x: if mirror_x { -self.x } else { self.x },
            y: if mirror_y { -self.y } else { self.y },
        }
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotated(self, degrees: f64) -> Self {
        let radians = degrees.to_radians();
        let (cos_a, sin_a) = (radians.cos(), radians.sin());
        Self {
            x: self.x * cos_a - self.y * sin_a,
            y: self.x * sin_a + self.y * cos_a,
        }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Component placement: mirror, then rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub mirror_x: bool,
    pub mirror_y: bool,
    pub rotation: f64,
    pub origin: Point,
}

impl Placement {
    pub fn of(component: &Component) -> Self {
        let (x, y) = component.placement.unwrap_or((0.0, 0.0));
        Self {
            mirror_x: component.mirror_x,
            mirror_y: component.mirror_y,
            rotation: f64::from(component.rotation),
            origin: Point::new(x, y),
        }
    }

    /// Map a shape-relative offset to board coordinates. The order of the
    /// three steps matters for any non-zero rotation.
    pub fn apply(&self, offset: Point) -> Point {
        offset
            .mirrored(self.mirror_x, self.mirror_y)
            .rotated(self.rotation)
            .translated(self.origin.x, self.origin.y)
    }
}
