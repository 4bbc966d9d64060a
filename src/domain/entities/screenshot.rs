use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What gets remembered for one screen capture: the model-produced
/// description and the base64-encoded image it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotDocument {
    pub description: String,
    pub encoded_image: String,
    pub captured_at: DateTime<Utc>,
}

impl ScreenshotDocument {
    pub fn new(description: String, encoded_image: String) -> Self {
        Self {
            description,
            encoded_image,
            captured_at: Utc::now(),
        }
    }
}
