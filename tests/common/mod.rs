pub mod app;
pub mod factory;

pub use app::TestApp;
pub use factory::{logo_json, project_json, CountingGenerator, FailingGenerator};
