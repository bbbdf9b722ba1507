//! Avatar storage and lazy placeholder generation.
//!
//! The rest of the system only ever stores an image reference string; this
//! service is the boundary that turns `(role, id)` into actual PNG bytes.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use bytes::Bytes;
use image::{ImageFormat, Rgb, RgbImage, imageops::FilterType};
use tokio::sync::Mutex;
use tracing::info;

use mentorhub_core::config::avatar::AvatarConfig;
use mentorhub_core::error::AppError;
use mentorhub_core::result::AppResult;
use mentorhub_entity::account::Role;

/// Stores uploaded avatars and lazily generates square placeholders.
///
/// Images are keyed by `(role, id)`, matching the `/images/{role}/{id}`
/// reference stored on profiles. Contents are memory-resident, like the
/// directories.
#[derive(Debug, Clone)]
pub struct AvatarService {
    /// Avatar settings.
    config: AvatarConfig,
    /// PNG bytes per account, uploaded or generated.
    images: Arc<Mutex<HashMap<(Role, i64), Bytes>>>,
}

impl AvatarService {
    /// Creates an empty avatar store.
    pub fn new(config: AvatarConfig) -> Self {
        Self {
            config,
            images: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the avatar for `(role, id)`, generating and caching a
    /// deterministic placeholder if none has been uploaded yet.
    pub async fn fetch(&self, role: Role, id: i64) -> AppResult<Bytes> {
        let mut images = self.images.lock().await;

        if let Some(existing) = images.get(&(role, id)) {
            return Ok(existing.clone());
        }

        let generated = Bytes::from(self.generate_placeholder(role, id)?);
        images.insert((role, id), generated.clone());
        Ok(generated)
    }

    /// Decodes, validates, and normalizes an uploaded base64 image payload,
    /// then stores it under `(role, id)`.
    ///
    /// Accepts both bare base64 and `data:` URLs. The payload must decode
    /// within the configured size cap and parse as an image; it is
    /// re-encoded as a square PNG of the configured side length.
    pub async fn store_upload(&self, role: Role, id: i64, payload: &str) -> AppResult<()> {
        let encoded = match payload.split_once(',') {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => payload,
        };

        let raw = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::validation(format!("Invalid base64 image payload: {e}")))?;

        if raw.len() > self.config.max_upload_bytes {
            return Err(AppError::validation(format!(
                "Image exceeds maximum size of {} bytes",
                self.config.max_upload_bytes
            )));
        }

        let img = image::load_from_memory(&raw)
            .map_err(|e| AppError::validation(format!("Unsupported image payload: {e}")))?;

        let side = self.config.side_px;
        let square = img.resize_to_fill(side, side, FilterType::Triangle);

        let mut buf = Vec::new();
        square
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| AppError::internal(format!("Failed to encode avatar: {e}")))?;

        let mut images = self.images.lock().await;
        images.insert((role, id), Bytes::from(buf));
        info!(account_id = id, role = %role, "Avatar uploaded");

        Ok(())
    }

    /// Renders the deterministic placeholder: a solid color derived from
    /// role and id.
    fn generate_placeholder(&self, role: Role, id: i64) -> AppResult<Vec<u8>> {
        let side = self.config.side_px;
        let img = RgbImage::from_pixel(side, side, placeholder_color(role, id));

        let mut buf = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| AppError::internal(format!("Failed to encode avatar: {e}")))?;

        Ok(buf)
    }
}

/// Mid-brightness color derived from role and id.
fn placeholder_color(role: Role, id: i64) -> Rgb<u8> {
    let salt: u64 = match role {
        Role::Mentor => 97,
        Role::Mentee => 251,
    };
    let seed = (id as u64).wrapping_mul(2_654_435_761).wrapping_add(salt);

    let r = 64 + (seed % 128) as u8;
    let g = 64 + ((seed >> 8) % 128) as u8;
    let b = 64 + ((seed >> 16) % 128) as u8;
    Rgb([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AvatarService {
        AvatarService::new(AvatarConfig {
            side_px: 32,
            max_upload_bytes: 64 * 1024,
        })
    }

    #[tokio::test]
    async fn test_placeholder_is_deterministic_square_png() {
        let service = service();

        let first = service.fetch(Role::Mentor, 1).await.unwrap();
        let second = service.fetch(Role::Mentor, 1).await.unwrap();
        assert_eq!(first, second);

        let img = image::load_from_memory(&first).unwrap();
        assert_eq!(img.width(), 32);
        assert_eq!(img.height(), 32);
    }

    #[tokio::test]
    async fn test_roles_do_not_collide() {
        let service = service();
        let mentor = service.fetch(Role::Mentor, 1).await.unwrap();
        let mentee = service.fetch(Role::Mentee, 1).await.unwrap();
        assert_ne!(mentor, mentee);
    }

    #[tokio::test]
    async fn test_upload_replaces_placeholder() {
        let service = service();
        let placeholder = service.fetch(Role::Mentor, 1).await.unwrap();

        // A tiny valid PNG, base64-encoded.
        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([200, 10, 10])))
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        let payload = base64::engine::general_purpose::STANDARD.encode(&png);

        service.store_upload(Role::Mentor, 1, &payload).await.unwrap();
        let stored = service.fetch(Role::Mentor, 1).await.unwrap();

        assert_ne!(stored, placeholder);
        let img = image::load_from_memory(&stored).unwrap();
        assert_eq!((img.width(), img.height()), (32, 32));
    }

    #[tokio::test]
    async fn test_garbage_payload_is_rejected() {
        let service = service();
        assert!(
            service
                .store_upload(Role::Mentor, 1, "not base64 at all!!!")
                .await
                .is_err()
        );

        let valid_b64_garbage = base64::engine::general_purpose::STANDARD.encode(b"hello");
        assert!(
            service
                .store_upload(Role::Mentor, 1, &valid_b64_garbage)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_oversized_payload_is_rejected() {
        let service = AvatarService::new(AvatarConfig {
            side_px: 32,
            max_upload_bytes: 16,
        });
        let payload = base64::engine::general_purpose::STANDARD.encode(vec![0u8; 64]);
        assert!(
            service
                .store_upload(Role::Mentee, 1, &payload)
                .await
                .is_err()
        );
    }
}
