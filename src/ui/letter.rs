// SPDX-License-Identifier: MPL-2.0
//! The letter surface and its delayed reveal.
//!
//! Visibility flows down from the application root; the component derives
//! a three-state machine from it: `Hidden` → `Pending` (visible, reveal
//! timer running) → `Revealed` (timer elapsed). The 500 ms timer decouples
//! the envelope opening from the text fading in so the two feel
//! sequential. It is an owned abortable task, never a detached spawn: any
//! exit from `Pending` — the timer firing, visibility dropping, or the
//! state being torn down — cancels it, so no stray reveal can fire on a
//! hidden letter.

use crate::content::{Block, LetterContent};
use crate::ui::anim;
use crate::ui::design_tokens::{motion, opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{rule, scrollable, text, Column, Container, Space, Text};
use iced::{alignment, task, Color, Element, Length, Padding, Task};
use std::fmt;
use std::time::Instant;

/// Distance the surface slides up while fading in, in pixels.
const SLIDE_DISTANCE: f32 = 40.0;

/// First-line indent for body paragraphs (two em spaces).
const PARAGRAPH_INDENT: &str = "\u{2003}\u{2003}";

const HEADER_LABEL: &str = "A  L E T T E R   F O R   Y O U";

/// Reveal lifecycle of a mounted letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Pending,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The one-shot reveal timer elapsed.
    RevealElapsed,
}

pub struct State {
    phase: Phase,
    /// Abort handle for the pending reveal timer, present exactly while
    /// `Pending`. Dropping it cancels the timer.
    reveal: Option<task::Handle>,
    revealed_at: Option<Instant>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").field("phase", &self.phase).finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Hidden,
            reveal: None,
            revealed_at: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the letter contributes anything to the layout.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Applies a visibility change from the container.
    ///
    /// Becoming visible starts the one-shot reveal timer; becoming hidden
    /// cancels it and resets to `Hidden` immediately. Repeated calls with
    /// the same visibility are no-ops, so at most one timer is ever
    /// pending.
    pub fn set_visible(&mut self, visible: bool) -> Task<Message> {
        if visible {
            if self.phase == Phase::Hidden {
                self.phase = Phase::Pending;
                let (task, handle) = Task::perform(
                    async { tokio::time::sleep(motion::REVEAL_DELAY).await },
                    |()| Message::RevealElapsed,
                )
                .abortable();
                self.reveal = Some(handle.abort_on_drop());
                return task;
            }
        } else {
            if let Some(handle) = self.reveal.take() {
                handle.abort();
            }
            self.phase = Phase::Hidden;
            self.revealed_at = None;
        }

        Task::none()
    }

    /// Applies a component message. A late `RevealElapsed` after the
    /// letter was re-hidden is a no-op.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::RevealElapsed => {
                if self.phase == Phase::Pending {
                    self.phase = Phase::Revealed;
                    self.revealed_at = Some(Instant::now());
                    self.reveal = None;
                }
            }
        }
    }

    /// Renders the letter surface. Callers must not invoke this while
    /// `Hidden` — check [`State::is_mounted`] first; the surface is laid
    /// out from `Pending` on, but only starts its fade/slide once
    /// `Revealed`.
    pub fn view<'a>(&self, content: &'a LetterContent, now: Instant) -> Element<'a, Message> {
        let fade = self
            .revealed_at
            .map(|at| anim::eased(now.saturating_duration_since(at), motion::LETTER_FADE))
            .unwrap_or(0.0);
        let offset = (1.0 - fade) * SLIDE_DISTANCE;

        let header = Container::new(
            Text::new(HEADER_LABEL)
                .size(typography::CAPTION)
                .color(faded(palette::HEADER_RED, fade * opacity::TINT)),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::LETTER_HEADER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        let mut body = Column::new().spacing(spacing::MD);
        for block in content.blocks() {
            body = match block {
                Block::Paragraph(line) => body.push(
                    Text::new(format!("{PARAGRAPH_INDENT}{line}"))
                        .size(typography::BODY_LG)
                        .line_height(text::LineHeight::Relative(1.7))
                        .color(faded(palette::INK, fade)),
                ),
                Block::Spacer => body.push(Space::new().height(Length::Fixed(spacing::MD))),
            };
        }

        let signature = Container::new(
            Text::new(content.signature().to_string())
                .size(typography::TITLE_MD)
                .color(faded(palette::SEAL_700, fade * 0.8)),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(Padding {
            top: spacing::XXL,
            right: spacing::LG,
            bottom: spacing::XL,
            left: 0.0,
        });

        let scroll_area = scrollable(
            Column::new()
                .push(body)
                .push(signature)
                .padding(Padding {
                    top: spacing::LG,
                    right: spacing::XL,
                    bottom: spacing::LG,
                    left: spacing::XL,
                }),
        )
        .height(Length::Fill);

        let footer = Container::new(Space::new().width(Length::Fill).height(Length::Shrink))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::LETTER_FOOTER_HEIGHT))
            .style(move |_theme| styles::container::letter_footer(fade));

        let paper = Container::new(
            Column::new()
                .push(header)
                .push(rule::horizontal(1))
                .push(scroll_area)
                .push(footer),
        )
        .max_width(sizing::LETTER_MAX_WIDTH)
        .height(Length::Fill)
        .style(move |_theme| styles::container::letter_paper(fade));

        Container::new(paper)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(Padding {
                top: spacing::XL + offset,
                right: spacing::XL,
                bottom: spacing::XL,
                left: spacing::XL,
            })
            .into()
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
