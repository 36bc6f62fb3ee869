//! Rendering utilities for CI surfaces (Markdown job summaries, PR comments).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{RenderableReport, RenderableTag, RenderableVerdict};
