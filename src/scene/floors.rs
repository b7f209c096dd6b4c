//! Single building made of five stacked wireframe floors.

use glam::Vec3;

use super::shape::{palette, Shape, ShapeGroup};
use crate::camera::CameraPose;

/// Number of floors in the building.
pub const FLOOR_COUNT: usize = 5;

/// Height of one floor.
const FLOOR_HEIGHT: f32 = 1.0;

/// Footprint (width, depth) of each floor, bottom to top.
const FOOTPRINTS: [[f32; 2]; FLOOR_COUNT] =
    [[3.0, 2.0], [3.0, 3.0], [4.0, 2.0], [3.0, 2.5], [2.5, 3.0]];

const COLORS: [u32; FLOOR_COUNT] =
    [0xFF5733, 0x33FF57, 0x3357FF, 0xFF33A1, 0xFFFF33];

/// Vertical center of floor `index`. The stack is centered near the origin.
fn floor_center_y(index: usize) -> f32 {
    index as f32 * FLOOR_HEIGHT - 2.0
}

pub(super) fn shapes() -> Vec<Shape> {
    FOOTPRINTS
        .iter()
        .zip(COLORS)
        .enumerate()
        .map(|(i, (&[width, depth], color))| {
            Shape::new(
                ShapeGroup::Floor,
                format!("Floor {}", i + 1),
                [0.0, floor_center_y(i), 0.0],
                [width, FLOOR_HEIGHT, depth],
                palette::hex(color),
            )
            .wireframe()
        })
        .collect()
}

/// Pose looking at the whole stack. Every floor selection zooms out here
/// first.
pub(super) const OVERVIEW: CameraPose =
    CameraPose::new(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO);

/// Close-up of floor `index`, level with its upper half.
pub(super) fn focus_pose(index: usize) -> CameraPose {
    let y = floor_center_y(index) + 0.5;
    CameraPose::new(Vec3::new(3.0, y, 3.0), Vec3::new(0.0, y, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_stack_bottom_to_top() {
        let shapes = shapes();
        assert_eq!(shapes.len(), FLOOR_COUNT);
        assert_eq!(shapes[0].position.y, -2.0);
        assert_eq!(shapes[4].position.y, 2.0);
        assert_eq!(shapes[2].size, Vec3::new(4.0, 1.0, 2.0));
        assert!(shapes.iter().all(|s| s.wireframe));
        assert_eq!(shapes[3].label, "Floor 4");
    }

    #[test]
    fn focus_pose_is_level_with_floor() {
        let pose = focus_pose(2);
        assert_eq!(pose.position, Vec3::new(3.0, 0.5, 3.0));
        assert_eq!(pose.target, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(focus_pose(0).position.y, -1.5);
    }
}
