// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D floor-plan viewer for a school campus.
//!
//! The crate is organised around a small, deterministic core, the camera
//! tween engine and the focus state machine, and a thin wgpu/winit shell
//! that drives it once per frame.
//!
//! # Key entry points
//!
//! - [`engine::ViewEngine`] - owns scene, reveal toggle, camera controls and
//!   focus machine; executes [`engine::ViewCommand`]s
//! - [`animation::tween::TweenEngine`] - cancellable per-frame camera tween
//! - [`focus::FocusMachine`] - overview / focused / transitioning state
//! - [`scene::Scene`] - immutable shape data for the three layouts
//! - [`options::Options`] - TOML-backed runtime configuration
//!
//! # Frame flow
//!
//! ```text
//! input -> ViewCommand -> FocusMachine -> TweenEngine -> OrbitControls
//!                                                      -> render set -> GPU
//! ```

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod focus;
pub mod gpu;
pub mod input;
pub mod options;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{CommandOutcome, ViewCommand, ViewEngine};
pub use error::ViewError;
pub use scene::Layout;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
