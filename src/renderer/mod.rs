//! Rendering for the box-based scenes.
//!
//! Every shape in every layout is an axis-aligned box, so a single instanced
//! cube pass covers solids, translucent shells and wireframes.

pub mod box_renderer;
pub(crate) mod pipeline_util;

pub use box_renderer::BoxRenderer;
