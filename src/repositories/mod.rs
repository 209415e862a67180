pub mod logo;
pub mod project;

pub use logo::LogoRepository;
pub use project::ProjectRepository;
