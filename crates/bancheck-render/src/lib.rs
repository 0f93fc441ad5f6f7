//! Rendering utilities for terminals and CI surfaces.

#![forbid(unsafe_code)]

mod gha;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use model::{RenderableLocation, RenderableReport, RenderableViolation};
pub use text::{render_text, violation_line};
