use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::AppResult;
use crate::services::ImageGenerator;

/// Number of variations produced per logo request
pub const LOGO_VARIATION_COUNT: u32 = 4;

/// Logo generation service: composes prompts and wraps provider output
/// as embeddable data URIs.
pub struct LogoService;

impl LogoService {
    /// Compose the logo prompt from structured fields.
    ///
    /// Clause order is fixed: base sentence, style, colors, industry,
    /// quality suffix. Empty optional fields drop their clause entirely.
    pub fn compose_prompt(company_name: &str, style: &str, colors: &str, industry: &str) -> String {
        let mut prompt = format!("Create a modern professional logo for {}", company_name);
        if !style.is_empty() {
            prompt.push_str(&format!(" in {} style", style));
        }
        if !colors.is_empty() {
            prompt.push_str(&format!(" using {} colors", colors));
        }
        if !industry.is_empty() {
            prompt.push_str(&format!(" suitable for {} industry", industry));
        }
        prompt.push_str(", clean background, high quality, professional design");
        prompt
    }

    /// Wrap raw raster bytes as a `data:image/png;base64,...` URI
    pub fn to_data_uri(image_bytes: &[u8]) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(image_bytes))
    }

    /// Generate `count` images for a verbatim prompt, as data URIs
    pub async fn generate_raw(
        generator: &dyn ImageGenerator,
        prompt: &str,
        count: u32,
    ) -> AppResult<Vec<String>> {
        let images = generator.generate(prompt, count).await?;
        Ok(images.iter().map(|bytes| Self::to_data_uri(bytes)).collect())
    }

    /// Generate 4 logo variations from structured fields.
    ///
    /// Returns the data URIs together with the composed prompt so the
    /// caller can persist the prompt alongside a chosen variation.
    pub async fn generate_variations(
        generator: &dyn ImageGenerator,
        company_name: &str,
        style: &str,
        colors: &str,
        industry: &str,
    ) -> AppResult<(Vec<String>, String)> {
        let prompt = Self::compose_prompt(company_name, style, colors, industry);
        let logos = Self::generate_raw(generator, &prompt, LOGO_VARIATION_COUNT).await?;
        Ok((logos, prompt))
    }
}
