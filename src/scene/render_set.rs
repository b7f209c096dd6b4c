use glam::{Mat4, Vec3};

use super::reveal::RevealToggle;
use super::shape::{Shape, ShapeGroup, ShapeId};
use super::Scene;
use crate::focus::FocusMachine;
use crate::options::DisplayOptions;

/// One shape as it should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    /// Source shape.
    pub id: ShapeId,
    /// Unit cube to world transform.
    pub model: Mat4,
    /// Box center, used for back-to-front sorting.
    pub center: Vec3,
    /// Linear RGBA.
    pub color: [f32; 4],
    /// Edges only.
    pub wireframe: bool,
}

impl RenderItem {
    /// Whether this item needs alpha blending.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.color[3] < 1.0
    }
}

impl Scene {
    /// Shapes drawn this frame, paired with their ids.
    pub fn drawn<'a>(
        &'a self,
        reveal: RevealToggle,
        focus: &'a FocusMachine<ShapeId>,
        display: &'a DisplayOptions,
    ) -> impl Iterator<Item = (ShapeId, &'a Shape)> + 'a {
        self.iter()
            .filter(move |&(id, shape)| is_drawn(id, shape, reveal, focus, display))
    }

    /// Everything to draw this frame, in scene order.
    #[must_use]
    pub fn render_set(
        &self,
        reveal: RevealToggle,
        focus: &FocusMachine<ShapeId>,
        display: &DisplayOptions,
    ) -> Vec<RenderItem> {
        self.drawn(reveal, focus, display)
            .map(|(id, shape)| {
                let [r, g, b] = if focus.is_highlighted(id) {
                    display.highlight_color
                } else {
                    shape.color
                };
                let alpha = reveal.opacity_for(shape, display.revealed_opacity);
                RenderItem {
                    id,
                    model: shape.model_matrix(),
                    center: shape.position,
                    color: [r, g, b, alpha],
                    wireframe: shape.wireframe,
                }
            })
            .collect()
    }
}

fn is_drawn(
    id: ShapeId,
    shape: &Shape,
    reveal: RevealToggle,
    focus: &FocusMachine<ShapeId>,
    display: &DisplayOptions,
) -> bool {
    if shape.group == ShapeGroup::Ground && !display.show_ground {
        return false;
    }
    if !reveal.includes(shape) {
        return false;
    }
    !shape.group.is_focusable() || focus.is_visible(id)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use web_time::Instant;

    use super::*;
    use crate::camera::rig::RecordingRig;
    use crate::options::AnimationOptions;
    use crate::scene::Layout;

    fn groups_in(scene: &Scene, items: &[RenderItem], group: ShapeGroup) -> usize {
        items
            .iter()
            .filter(|item| scene.shape(item.id).is_some_and(|s| s.group == group))
            .count()
    }

    #[test]
    fn collapsed_campus_draws_exteriors_only() {
        let scene = Scene::new(Layout::Campus);
        let focus = scene.focus_machine(&AnimationOptions::default());
        let display = DisplayOptions::default();
        let items = scene.render_set(RevealToggle::default(), &focus, &display);

        assert_eq!(groups_in(&scene, &items, ShapeGroup::Room), 0);
        assert_eq!(groups_in(&scene, &items, ShapeGroup::Stairwell), 0);
        assert_eq!(groups_in(&scene, &items, ShapeGroup::Building), 9);
        assert_eq!(groups_in(&scene, &items, ShapeGroup::Ground), 1);
        assert!(items.iter().all(|i| !i.is_transparent()));
    }

    #[test]
    fn revealed_campus_dims_exteriors_and_shows_interiors() {
        let scene = Scene::new(Layout::Campus);
        let focus = scene.focus_machine(&AnimationOptions::default());
        let display = DisplayOptions::default();
        let items = scene.render_set(RevealToggle::new(true), &focus, &display);

        assert_eq!(groups_in(&scene, &items, ShapeGroup::Restroom), 15);
        assert!(groups_in(&scene, &items, ShapeGroup::Room) > 0);
        for item in &items {
            let group = scene.shape(item.id).map(|s| s.group);
            if group.is_some_and(ShapeGroup::is_primary) {
                assert_eq!(item.color[3], 0.2);
            } else {
                assert_eq!(item.color[3], 1.0);
            }
        }
        assert_eq!(items.len(), scene.len());
    }

    #[test]
    fn ground_can_be_hidden() {
        let scene = Scene::new(Layout::Campus);
        let focus = scene.focus_machine(&AnimationOptions::default());
        let display = DisplayOptions {
            show_ground: false,
            ..DisplayOptions::default()
        };
        let items = scene.render_set(RevealToggle::default(), &focus, &display);
        assert_eq!(groups_in(&scene, &items, ShapeGroup::Ground), 0);
    }

    #[test]
    fn focused_box_is_alone_and_highlighted() {
        let scene = Scene::new(Layout::Boxes);
        let mut focus = scene.focus_machine(&AnimationOptions::default());
        let display = DisplayOptions::default();
        let box_1 = scene.find("box-1").unwrap();
        let box_2 = scene.find("box-2").unwrap();

        let t0 = Instant::now();
        let mut rig = RecordingRig::new(focus.overview());
        let _ = focus.focus(box_1, Some(&mut rig), t0);
        let _ = focus.tick(Some(&mut rig), t0 + Duration::from_secs(1));

        let items = scene.render_set(RevealToggle::default(), &focus, &display);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, box_1);
        let [r, g, b, _] = items[0].color;
        assert_eq!([r, g, b], display.highlight_color);

        let _ = focus.reset(Some(&mut rig), t0 + Duration::from_secs(1));
        let items = scene.render_set(RevealToggle::default(), &focus, &display);
        assert_eq!(items.len(), 2);
        let b2 = scene.shape(box_2).unwrap();
        assert!(items
            .iter()
            .any(|i| i.id == box_2 && i.color[..3] == b2.color[..]));
    }
}
