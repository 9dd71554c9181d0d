//! Preview image url synthesis.

/// Builds the preview image url for a record.
///
/// Must be deterministic in `(topic, search_term, id)`, and distinct ids must
/// give distinct urls.
pub trait PreviewProvider: Send + Sync {
    fn preview_url(&self, topic: &str, search_term: &str, id: usize) -> String;
}

/// Keyword image redirect. The image is only loosely related to the texture.
#[derive(Debug, Clone)]
pub struct UnsplashPreview {
    base_url: String,
}

impl Default for UnsplashPreview {
    fn default() -> Self {
        Self { base_url: "https://source.unsplash.com/512x512/".to_string() }
    }
}

impl UnsplashPreview {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl PreviewProvider for UnsplashPreview {
    fn preview_url(&self, topic: &str, search_term: &str, id: usize) -> String {
        let keywords = format!("{topic} texture {search_term}");
        format!("{}?{}&sig={}", self.base_url, urlencoding::encode(&keywords), id)
    }
}
