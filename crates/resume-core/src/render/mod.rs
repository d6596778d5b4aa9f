//! LaTeX rendering: escaping of string leaves and template expansion

pub mod escape;
pub mod template;

pub use escape::escape_resume;
pub use template::TexRenderer;
