use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Reveal toggle, highlight and background settings.
pub struct DisplayOptions {
    /// Opacity of buildings and corridors while interiors are revealed.
    #[schemars(title = "Revealed Opacity", range(min = 0.0, max = 1.0))]
    pub revealed_opacity: f32,
    /// Start with interiors revealed.
    #[schemars(title = "Start Revealed")]
    pub start_revealed: bool,
    /// Whether to draw the ground plane.
    #[schemars(title = "Show Ground")]
    pub show_ground: bool,
    /// Color applied to the focused entity.
    #[schemars(skip)]
    pub highlight_color: [f32; 3],
    /// Clear color behind the scene.
    #[schemars(skip)]
    pub background: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            revealed_opacity: 0.2,
            start_revealed: false,
            show_ground: true,
            highlight_color: [1.0, 0.84, 0.0],
            background: [0.94, 0.95, 0.97],
        }
    }
}
