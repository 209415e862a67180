pub mod image_gen;
pub mod logo;

pub use image_gen::{ImageGenerator, ImagenClient};
pub use logo::{LogoService, LOGO_VARIATION_COUNT};
