//! Avatar image store configuration.

use serde::{Deserialize, Serialize};

/// Avatar generation and upload settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Side length in pixels for generated and normalized avatars.
    #[serde(default = "default_side")]
    pub side_px: u32,
    /// Maximum accepted size of an uploaded image payload in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_bytes: usize,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            side_px: default_side(),
            max_upload_bytes: default_max_upload(),
        }
    }
}

fn default_side() -> u32 {
    500
}

fn default_max_upload() -> usize {
    1024 * 1024
}
