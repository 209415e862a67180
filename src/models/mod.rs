pub mod logo;
pub mod project;

pub use logo::Logo;
pub use project::Project;
