//! Two unit boxes on either side of the origin, each focusable.

use glam::Vec3;

use super::shape::{palette, Shape, ShapeGroup};
use crate::camera::CameraPose;

/// Camera offset from a box center when that box is focused.
const FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 4.5, 10.0);

pub(super) fn shapes() -> Vec<Shape> {
    vec![
        Shape::new(
            ShapeGroup::Marker,
            "box-1",
            [-3.0, 0.5, 0.0],
            [1.0, 1.0, 1.0],
            palette::ORANGE,
        ),
        Shape::new(
            ShapeGroup::Marker,
            "box-2",
            [3.0, 0.5, 0.0],
            [1.0, 1.0, 1.0],
            palette::ROYAL_BLUE,
        ),
    ]
}

pub(super) const OVERVIEW: CameraPose =
    CameraPose::new(Vec3::new(20.0, 20.0, 20.0), Vec3::ZERO);

/// Close-up pose for a box centered at `center`.
pub(super) fn focus_pose(center: Vec3) -> CameraPose {
    CameraPose::new(center + FOCUS_OFFSET, center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_pose_looks_at_box() {
        let pose = focus_pose(Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(pose.position, Vec3::new(0.0, 5.0, 10.0));
        assert_eq!(pose.target, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn boxes_have_distinct_colors() {
        let shapes = shapes();
        assert_eq!(shapes.len(), 2);
        assert_ne!(shapes[0].color, shapes[1].color);
        assert_ne!(shapes[0].color, palette::YELLOW);
    }
}
