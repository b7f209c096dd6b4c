//! Immutable box descriptors and the colors they use.

use glam::{Mat4, Vec3};

/// Index of a shape within its [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub usize);

/// What a shape represents. Drives reveal and focus behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeGroup {
    /// Ground plane.
    Ground,
    /// Building shell. Dimmed while interiors are revealed.
    Building,
    /// Covered walkway between buildings. Dimmed while revealed.
    Corridor,
    /// Stairwell. Only present while revealed.
    Stairwell,
    /// Restroom. Only present while revealed.
    Restroom,
    /// Classroom, office or other room. Only present while revealed.
    Room,
    /// One storey of the stacked-floors building. Focusable.
    Floor,
    /// Generic focusable box.
    Marker,
}

impl ShapeGroup {
    /// Interior detail shown only while the reveal toggle is on.
    #[must_use]
    pub fn is_optional(self) -> bool {
        matches!(self, Self::Stairwell | Self::Restroom | Self::Room)
    }

    /// Always-present exterior geometry whose opacity follows the reveal
    /// toggle.
    #[must_use]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Building | Self::Corridor)
    }

    /// Whether shapes of this group can be the focus target.
    #[must_use]
    pub fn is_focusable(self) -> bool {
        matches!(self, Self::Floor | Self::Marker)
    }
}

/// Named colors used by the scene data (display RGB, 0-1).
pub mod palette {
    /// CSS `lightgrey`.
    pub const LIGHT_GREY: [f32; 3] = [0.827, 0.827, 0.827];
    /// CSS `white`.
    pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
    /// CSS `yellow`.
    pub const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
    /// CSS `blue`.
    pub const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
    /// CSS `red`.
    pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
    /// CSS `lightgreen`.
    pub const LIGHT_GREEN: [f32; 3] = [0.565, 0.933, 0.565];
    /// CSS `green`.
    pub const GREEN: [f32; 3] = [0.0, 0.502, 0.0];
    /// CSS `orange`.
    pub const ORANGE: [f32; 3] = [1.0, 0.647, 0.0];
    /// CSS `royalblue`.
    pub const ROYAL_BLUE: [f32; 3] = [0.255, 0.412, 0.882];

    /// Convert a `0xRRGGBB` literal to an RGB triple.
    #[must_use]
    pub fn hex(rgb: u32) -> [f32; 3] {
        let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

/// An axis-aligned box in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Display name. Not necessarily unique.
    pub label: String,
    /// Role of the shape.
    pub group: ShapeGroup,
    /// Center of the box.
    pub position: Vec3,
    /// Full extents (width, height, depth).
    pub size: Vec3,
    /// Base color.
    pub color: [f32; 3],
    /// Base opacity.
    pub opacity: f32,
    /// Draw edges only.
    pub wireframe: bool,
}

impl Shape {
    /// Opaque, solid shape.
    #[must_use]
    pub fn new(
        group: ShapeGroup,
        label: impl Into<String>,
        position: [f32; 3],
        size: [f32; 3],
        color: [f32; 3],
    ) -> Self {
        Self {
            label: label.into(),
            group,
            position: Vec3::from_array(position),
            size: Vec3::from_array(size),
            color,
            opacity: 1.0,
            wireframe: false,
        }
    }

    /// Render only the edges of this shape.
    #[must_use]
    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    /// Axis-aligned bounds as `(min, max)`.
    #[must_use]
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let half = self.size * 0.5;
        (self.position - half, self.position + half)
    }

    /// Model matrix mapping the unit cube `[-0.5, 0.5]^3` onto this shape.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.size,
            glam::Quat::IDENTITY,
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_roles_are_disjoint() {
        let groups = [
            ShapeGroup::Ground,
            ShapeGroup::Building,
            ShapeGroup::Corridor,
            ShapeGroup::Stairwell,
            ShapeGroup::Restroom,
            ShapeGroup::Room,
            ShapeGroup::Floor,
            ShapeGroup::Marker,
        ];
        for g in groups {
            let roles = [g.is_optional(), g.is_primary(), g.is_focusable()];
            assert!(roles.iter().filter(|&&r| r).count() <= 1, "{g:?}");
        }
    }

    #[test]
    fn hex_decodes_channels() {
        assert_eq!(palette::hex(0xFF0000), [1.0, 0.0, 0.0]);
        let c = palette::hex(0x3357FF);
        assert!((c[0] - 0.2).abs() < 1e-3);
        assert!((c[1] - 0.341).abs() < 1e-3);
        assert_eq!(c[2], 1.0);
    }

    #[test]
    fn aabb_is_centered_on_position() {
        let s = Shape::new(
            ShapeGroup::Room,
            "3-1",
            [140.0, 24.0, 27.0],
            [28.0, 16.0, 20.0],
            palette::WHITE,
        );
        let (min, max) = s.aabb();
        assert_eq!(min, Vec3::new(126.0, 16.0, 17.0));
        assert_eq!(max, Vec3::new(154.0, 32.0, 37.0));
        let corner = s.model_matrix().transform_point3(Vec3::splat(0.5));
        assert!((corner - max).length() < 1e-4);
    }
}
