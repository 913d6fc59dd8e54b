// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{envelope, letter};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Envelope(envelope::Message),
    Letter(letter::Message),
    /// Animation frame tick driving every time-based redraw.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a text file supplying the letter body.
    pub letter_path: Option<PathBuf>,
    /// Optional path to the envelope photo.
    pub photo_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<PathBuf>,
}
