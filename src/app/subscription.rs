// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{time, Subscription};

/// Creates the periodic animation tick.
///
/// The snow layer animates for the window's whole lifetime, so unlike
/// UI that only ticks while something is in flight, this subscription
/// always runs.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(motion::TICK).map(Message::Tick)
}
