// file: src/models/image.rs
// description: image generation status payloads reported by the backend
// reference: generated listing image endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageState {
    #[default]
    Pending,
    #[serde(alias = "processing")]
    Generating,
    Completed,
    Failed,
}

impl ImageState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ImageState::Completed | ImageState::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub image_type: String,
    #[serde(default)]
    pub status: ImageState,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub failed: usize,
    pub all_completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageStatusReport {
    pub images: Vec<GeneratedImage>,
    pub summary: ImageSummary,
}

impl ImageStatusReport {
    /// True once the backend reports completion or every image reached a terminal state.
    pub fn is_settled(&self) -> bool {
        self.summary.all_completed
            || (!self.images.is_empty() && self.images.iter().all(|i| i.status.is_terminal()))
    }

    pub fn progress_percent(&self) -> u8 {
        if self.summary.total == 0 {
            return 0;
        }
        ((self.summary.completed as f64 / self.summary.total as f64) * 100.0).round() as u8
    }
}
