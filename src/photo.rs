// SPDX-License-Identifier: MPL-2.0
//! Envelope photo loading.
//!
//! The photo is a decorative collaborator supplied by the deployment
//! environment at a fixed relative path. A missing or undecodable file is
//! not an error surface: the envelope falls back to a flat paper fill and
//! a warning is logged.

use crate::config::Config;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::path::Path;

/// Relative path probed when neither the flag nor the config names a photo.
pub const DEFAULT_PHOTO_PATH: &str = "photo.jpg";

/// A decoded photo ready for the envelope canvas.
#[derive(Debug, Clone)]
pub struct PhotoData {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Loads and decodes the photo at `path` into an Iced image handle.
pub fn load(path: &Path) -> Result<PhotoData> {
    let image = image_rs::open(path).map_err(|e| Error::Image(e.to_string()))?;
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PhotoData {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

/// Resolves the envelope photo from the launch flag, the config, or the
/// default relative path. Absence degrades to `None` rather than an error.
pub fn resolve(flag_path: Option<&Path>, config: &Config) -> Option<PhotoData> {
    let path = flag_path
        .or(config.photo_path.as_deref())
        .unwrap_or(Path::new(DEFAULT_PHOTO_PATH));

    match load(path) {
        Ok(photo) => Some(photo),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "envelope photo unavailable, using flat fill");
            None
        }
    }
}
