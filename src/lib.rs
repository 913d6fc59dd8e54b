// SPDX-License-Identifier: MPL-2.0
//! `snowletter` is an animated greeting card built with the Iced GUI framework.
//!
//! A clickable envelope opens to reveal a letter while snow falls in the
//! background. The letter body, the envelope photo, and the signature all
//! come from simple external collaborators (CLI flags, a TOML settings
//! file, or embedded defaults), so the same binary carries any greeting.

#![doc(html_root_url = "https://docs.rs/snowletter/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod icon;
pub mod photo;
pub mod ui;
