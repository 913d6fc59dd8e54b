// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a three-layer stack over the night backdrop: snow at the
//! bottom (never interactive), the centered envelope above it, and the
//! letter surface on top once it is mounted. The letter joins the stack
//! only while visible, so a hidden letter is absent from layout rather
//! than merely transparent.

use super::Message;
use crate::content::LetterContent;
use crate::photo::PhotoData;
use crate::ui::{envelope, letter, snow, styles};
use iced::widget::{Container, Stack};
use iced::{alignment, Element, Length};
use std::time::{Duration, Instant};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub opened: bool,
    /// Time since the open transition, `None` while closed.
    pub since_open: Option<Duration>,
    /// Time since the snow field was mounted.
    pub snow_elapsed: Duration,
    pub now: Instant,
    pub envelope: &'a envelope::State,
    pub letter: &'a letter::State,
    pub snow: &'a snow::Field,
    pub photo: Option<&'a PhotoData>,
    pub content: &'a LetterContent,
}

/// Renders the layered card view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let snow_layer = ctx.snow.view(ctx.snow_elapsed);

    let envelope_layer = Container::new(
        envelope::view(
            ctx.envelope,
            envelope::ViewContext {
                is_open: ctx.opened,
                since_open: ctx.since_open,
                photo: ctx.photo,
            },
        )
        .map(Message::Envelope),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(snow_layer)
        .push(envelope_layer);

    if ctx.letter.is_mounted() {
        layers = layers.push(ctx.letter.view(ctx.content, ctx.now).map(Message::Letter));
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
