//! Scene data for each layout and the per-frame render set derived from it.
//!
//! A [`Scene`] is an immutable list of [`Shape`]s plus lookups by label and
//! by floor index. What is actually drawn each frame is a pure function of
//! the scene, the [`RevealToggle`] and the focus machine's exclusive target;
//! see [`Scene::render_set`].

mod boxes;
mod campus;
mod floors;
/// Interior reveal toggle.
pub mod reveal;
mod render_set;
pub mod shape;

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
pub use render_set::RenderItem;
pub use reveal::RevealToggle;
use rustc_hash::FxHashMap;
pub use shape::{palette, Shape, ShapeGroup, ShapeId};

use crate::camera::{CameraPose, OrbitLimits};
use crate::error::ViewError;
use crate::focus::{FocusMachine, FocusPolicy};
use crate::options::{AnimationOptions, CameraOptions};

pub use floors::FLOOR_COUNT;

/// Which of the three viewers to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// School campus with the interior reveal toggle.
    #[default]
    Campus,
    /// Five stacked floors with floor-by-floor zoom.
    Floors,
    /// Two boxes with click-to-focus.
    Boxes,
}

impl Layout {
    /// Every layout, in menu order.
    pub const ALL: [Self; 3] = [Self::Campus, Self::Floors, Self::Boxes];

    /// Lowercase name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Campus => "campus",
            Self::Floors => "floors",
            Self::Boxes => "boxes",
        }
    }

    /// Starting camera pose, and the pose every reset returns to.
    #[must_use]
    pub fn home_pose(self) -> CameraPose {
        match self {
            Self::Campus => CameraPose::new(
                Vec3::new(-250.0, 190.0, 170.0),
                Vec3::new(-50.0, 0.0, 0.0),
            ),
            Self::Floors => floors::OVERVIEW,
            Self::Boxes => boxes::OVERVIEW,
        }
    }

    /// Orbit constraints. The floors building is small enough that its
    /// camera roams freely, including below the lowest floor.
    #[must_use]
    pub fn orbit_limits(self, options: &CameraOptions) -> OrbitLimits {
        match self {
            Self::Campus | Self::Boxes => OrbitLimits::from_options(options),
            Self::Floors => OrbitLimits::UNCONSTRAINED,
        }
    }

    /// How focus moves are sequenced.
    #[must_use]
    pub fn focus_policy(self, options: &AnimationOptions) -> FocusPolicy {
        match self {
            Self::Campus => FocusPolicy::campus(options),
            Self::Floors => FocusPolicy::floors(options),
            Self::Boxes => FocusPolicy::boxes(options),
        }
    }

    /// Vertical field of view the layout was framed for, if it differs
    /// from the configured default.
    #[must_use]
    pub fn fovy_override(self) -> Option<f32> {
        match self {
            Self::Floors => Some(75.0),
            Self::Campus | Self::Boxes => None,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ViewError::UnknownLayout(s.to_owned()))
    }
}

/// Immutable shape list for one layout.
#[derive(Debug, Clone)]
pub struct Scene {
    layout: Layout,
    shapes: Vec<Shape>,
    /// First shape carrying each label.
    by_label: FxHashMap<String, ShapeId>,
    /// Floor shapes, bottom to top.
    floors: Vec<ShapeId>,
}

impl Scene {
    /// Build the shapes for `layout`.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let shapes = match layout {
            Layout::Campus => campus::shapes(),
            Layout::Floors => floors::shapes(),
            Layout::Boxes => boxes::shapes(),
        };

        let mut by_label = FxHashMap::default();
        let mut floors = Vec::new();
        for (i, shape) in shapes.iter().enumerate() {
            let _ = by_label
                .entry(shape.label.clone())
                .or_insert(ShapeId(i));
            if shape.group == ShapeGroup::Floor {
                floors.push(ShapeId(i));
            }
        }

        log::debug!("built {layout} scene with {} shapes", shapes.len());
        Self {
            layout,
            shapes,
            by_label,
            floors,
        }
    }

    /// Layout this scene was built for.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// All shapes in draw order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shape by id.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene has no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.shapes.iter().enumerate().map(|(i, s)| (ShapeId(i), s))
    }

    /// First shape labelled `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<ShapeId> {
        self.by_label.get(label).copied()
    }

    /// Floor `index` (0 = bottom).
    #[must_use]
    pub fn floor(&self, index: usize) -> Option<ShapeId> {
        self.floors.get(index).copied()
    }

    /// Position of `id` among the floors, if it is one.
    #[must_use]
    pub fn floor_index(&self, id: ShapeId) -> Option<usize> {
        self.floors.iter().position(|&f| f == id)
    }

    /// Close-up pose for a focusable shape.
    #[must_use]
    pub fn focus_pose(&self, id: ShapeId) -> Option<CameraPose> {
        let shape = self.shape(id)?;
        match shape.group {
            ShapeGroup::Marker => Some(boxes::focus_pose(shape.position)),
            ShapeGroup::Floor => self.floor_index(id).map(floors::focus_pose),
            _ => None,
        }
    }

    /// Focus machine for this scene with every focusable shape registered.
    #[must_use]
    pub fn focus_machine(
        &self,
        options: &AnimationOptions,
    ) -> FocusMachine<ShapeId> {
        let mut machine = FocusMachine::new(
            self.layout.home_pose(),
            self.layout.focus_policy(options),
        );
        for (id, _) in self.iter().filter(|(_, s)| s.group.is_focusable()) {
            if let Some(pose) = self.focus_pose(id) {
                machine.add_target(id, pose);
            }
        }
        machine
    }
}
