//! CPU ray picking against the axis-aligned boxes of the scene.
//!
//! A click is turned into a world-space ray by unprojecting the cursor
//! through the inverse view-projection, then slab-tested against every
//! candidate box. The nearest hit in front of the eye wins.

use glam::{Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::camera::core::Camera;
use crate::scene::{Shape, ShapeId};

/// World-space ray with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point (on the near plane).
    pub origin: Vec3,
    /// Normalized direction.
    pub dir: Vec3,
}

impl Ray {
    /// Ray through `cursor` (physical pixels, origin top-left) for a viewport
    /// of `viewport` pixels. `None` if the cursor is outside the viewport or
    /// the projection is degenerate.
    #[must_use]
    pub fn from_screen(camera: &Camera, cursor: Vec2, viewport: Vec2) -> Option<Self> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        if cursor.x < 0.0 || cursor.y < 0.0 || cursor.x > viewport.x || cursor.y > viewport.y {
            return None;
        }

        let ndc_x = 2.0 * cursor.x / viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * cursor.y / viewport.y;
        let inv = camera.build_matrix().inverse();

        let near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        if near.w.abs() <= f32::EPSILON || far.w.abs() <= f32::EPSILON {
            return None;
        }
        let near = near.xyz() / near.w;
        let far = far.xyz() / far.w;

        let dir = (far - near).normalize_or_zero();
        (dir != Vec3::ZERO).then_some(Self { origin: near, dir })
    }

    /// Distance along the ray to the first intersection with the box
    /// `[min, max]`, or `None` if it misses or lies behind the origin.
    #[must_use]
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let inv = self.dir.recip();
        let t1 = (min - self.origin) * inv;
        let t2 = (max - self.origin) * inv;

        // NaN from 0 * inf lanes is dropped by min/max_element
        let t_near = t1.min(t2).max_element();
        let t_far = t1.max(t2).min_element();

        if t_far < 0.0 || t_near > t_far {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

/// Nearest candidate hit by `ray`.
pub fn pick_shape<'a>(
    ray: &Ray,
    candidates: impl IntoIterator<Item = (ShapeId, &'a Shape)>,
) -> Option<ShapeId> {
    let mut best: Option<(ShapeId, f32)> = None;
    for (id, shape) in candidates {
        let (min, max) = shape.aabb();
        if let Some(t) = ray.intersect_aabb(min, max) {
            match best {
                Some((_, best_t)) if t >= best_t => {}
                _ => best = Some((id, t)),
            }
        }
    }
    best.map(|(id, _)| id)
}
