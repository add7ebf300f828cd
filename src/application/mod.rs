//! Application layer - Use cases and orchestration

pub mod init;
pub mod inject;
pub mod lookup;
pub mod render_head;

pub use inject::{inject_markup, InjectService};
pub use lookup::LookupService;
pub use render_head::RenderService;
