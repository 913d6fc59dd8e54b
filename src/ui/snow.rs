// SPDX-License-Identifier: MPL-2.0
//! Falling-snow ambient layer.
//!
//! A fixed set of particle descriptors is drawn once when the field is
//! constructed and held immutable afterwards; the canvas derives every
//! flake's position from the elapsed time alone, so redrawing never
//! resets the fall. The layer sits at the bottom of the window stack and
//! never intercepts pointer input.

use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Canvas};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use rand::Rng;
use std::time::Duration;

/// Number of snowflakes in a field.
pub const FLAKE_COUNT: usize = 50;

/// How far above the viewport a flake starts, in pixels.
const SPAWN_MARGIN: f32 = 10.0;

/// Horizontal drift amplitude at mid-fall, in pixels.
const DRIFT: f32 = 20.0;

/// How far past the bottom edge a flake travels before looping, as a
/// fraction of the viewport height.
const EXIT_OVERSHOOT: f32 = 0.05;

/// Immutable per-flake animation parameters, fixed at generation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    /// Horizontal position as a fraction of the container width.
    pub x: f32,
    /// Full fall duration for one loop.
    pub duration: Duration,
    /// Delay before the first fall starts.
    pub delay: Duration,
    pub opacity: f32,
    /// Diameter in pixels.
    pub size: f32,
}

impl Snowflake {
    /// Position of this flake at `elapsed` time since the field was
    /// mounted, within a viewport of the given size. `None` until the
    /// flake's start delay has passed.
    pub fn position(&self, elapsed: Duration, viewport: Size) -> Option<Point> {
        let falling = elapsed.checked_sub(self.delay)?;
        let duration = self.duration.as_secs_f32();
        let phase = (falling.as_secs_f32() % duration) / duration;

        let top = -SPAWN_MARGIN;
        let middle = viewport.height * 0.5;
        let bottom = viewport.height * (1.0 + EXIT_OVERSHOOT);

        // Three keyframes: spawn above the viewport, drift right by
        // mid-fall, drift left while exiting below.
        let (y, drift) = if phase < 0.5 {
            let t = phase / 0.5;
            (top + (middle - top) * t, DRIFT * t)
        } else {
            let t = (phase - 0.5) / 0.5;
            (middle + (bottom - middle) * t, DRIFT - 2.0 * DRIFT * t)
        };

        Some(Point::new(self.x * viewport.width + drift, y))
    }
}

/// Generates a fresh set of flake descriptors with independent uniform
/// draws per field.
pub fn generate(count: usize) -> Vec<Snowflake> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| Snowflake {
            x: rng.random_range(0.0..=1.0),
            duration: Duration::from_secs_f32(rng.random_range(5.0..=8.0)),
            delay: Duration::from_secs_f32(rng.random_range(0.0..=5.0)),
            opacity: rng.random_range(0.3..=0.8),
            size: rng.random_range(2.0..=6.0),
        })
        .collect()
}

/// One mounted snow layer. Construction draws the random set; the set is
/// never regenerated for the lifetime of the field.
#[derive(Debug, Clone)]
pub struct Field {
    flakes: Vec<Snowflake>,
}

impl Field {
    #[must_use]
    pub fn new() -> Self {
        Self {
            flakes: generate(FLAKE_COUNT),
        }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Full-window canvas layer for this field at the given animation time.
    pub fn view<Message: 'static>(&self, elapsed: Duration) -> Element<'_, Message> {
        Canvas::new(SnowCanvas {
            flakes: &self.flakes,
            elapsed,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

struct SnowCanvas<'a> {
    flakes: &'a [Snowflake],
    elapsed: Duration,
}

impl<Message> canvas::Program<Message> for SnowCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        for flake in self.flakes {
            if let Some(center) = flake.position(self.elapsed, bounds.size()) {
                let dot = canvas::Path::circle(center, flake.size / 2.0);
                frame.fill(
                    &dot,
                    iced::Color {
                        a: flake.opacity,
                        ..palette::SNOW_WHITE
                    },
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
