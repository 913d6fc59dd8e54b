// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Full-window night backdrop behind every layer.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NIGHT)),
        ..Default::default()
    }
}

/// The letter's paper surface, alpha-scaled by the reveal fade so the
/// whole panel appears together with its text.
pub fn letter_paper(fade: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: fade,
            ..palette::PAPER
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: fade * opacity::PREVIEW,
                ..Color::BLACK
            },
            ..shadow::LG
        },
        ..Default::default()
    }
}

/// Decorative red tint strip along the bottom of the letter.
pub fn letter_footer(fade: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: fade * 0.05,
            ..palette::HEADER_RED
        })),
        ..Default::default()
    }
}
