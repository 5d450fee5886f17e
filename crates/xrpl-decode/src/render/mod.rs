//! Text rendering for decoded fields.

pub mod emitter;
pub mod text;

pub use emitter::TextEmitter;
pub use text::{render_text, RenderOptions};
