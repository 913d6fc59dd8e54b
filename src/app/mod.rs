// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the three components.
//!
//! The `App` struct owns the single cross-component boolean (`opened`) and
//! the frame clock, and wires the envelope's activation event into the
//! letter's reveal. The open transition is monotone by construction: no
//! message path ever resets `opened`, so the card cannot be re-closed.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content::LetterContent;
use crate::photo::{self, PhotoData};
use crate::ui::{envelope, letter, snow};
use iced::{window, Element, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 440;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

const WINDOW_TITLE: &str = "Snowletter";

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    /// The one cross-component flag: whether the envelope has been opened.
    opened: bool,
    /// When the open transition happened, for animation progress.
    opened_at: Option<Instant>,
    /// Frame clock advanced by the tick subscription.
    now: Instant,
    /// When the snow field was mounted.
    started_at: Instant,
    envelope: envelope::State,
    letter: letter::State,
    snow: snow::Field,
    photo: Option<PhotoData>,
    content: LetterContent,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            opened: false,
            opened_at: None,
            now,
            started_at: now,
            envelope: envelope::State::new(),
            letter: letter::State::new(),
            snow: snow::Field::new(),
            photo: None,
            content: LetterContent::default(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher: loads preferences, then resolves the letter content and
    /// the envelope photo. Both collaborators degrade gracefully, so boot
    /// never fails.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_deref();
        let config = match config::load(config_dir) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "config unreadable, using defaults");
                Config::default()
            }
        };

        // First run: write the default settings file so users can find it.
        if let Some(path) = config::config_path(config_dir) {
            if !path.exists() {
                if let Err(err) = config::save(&config, config_dir) {
                    tracing::warn!(%err, "could not write initial settings file");
                }
            }
        }

        let content = LetterContent::resolve(flags.letter_path.as_deref(), &config);
        let photo = photo::resolve(flags.photo_path.as_deref(), &config);

        let app = App {
            content,
            photo,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Envelope(envelope_message) => {
                if let Some(envelope::Event::Activated) = self.envelope.update(envelope_message) {
                    // The app, not the envelope, is the source of truth for
                    // the open transition; a press after opening is a no-op.
                    if !self.opened {
                        self.opened = true;
                        self.opened_at = Some(Instant::now());
                        return self.letter.set_visible(true).map(Message::Letter);
                    }
                }
                Task::none()
            }
            Message::Letter(letter_message) => {
                self.letter.update(letter_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            opened: self.opened,
            since_open: self
                .opened_at
                .map(|at| self.now.saturating_duration_since(at)),
            snow_elapsed: self.now.saturating_duration_since(self.started_at),
            now: self.now,
            envelope: &self.envelope,
            letter: &self.letter,
            snow: &self.snow,
            photo: self.photo.as_ref(),
            content: &self.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Block;
    use crate::ui::letter::Phase;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::tempdir;

    fn app_with_temp_config() -> (tempfile::TempDir, App) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(temp_dir.path().to_path_buf()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        (temp_dir, app)
    }

    #[test]
    fn new_starts_closed_with_a_hidden_letter() {
        let (_temp_dir, app) = app_with_temp_config();
        assert!(!app.opened);
        assert!(app.opened_at.is_none());
        assert_eq!(app.letter.phase(), Phase::Hidden);
        assert_eq!(app.snow.flakes().len(), snow::FLAKE_COUNT);
    }

    #[test]
    fn new_writes_the_initial_settings_file() {
        let (temp_dir, _app) = app_with_temp_config();
        assert!(temp_dir.path().join("settings.toml").exists());
    }

    #[test]
    fn new_reads_the_letter_from_the_flag_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let letter_file = temp_dir.path().join("note.txt");
        std::fs::File::create(&letter_file)
            .expect("create letter file")
            .write_all(b"Hello there.")
            .expect("write letter file");

        let flags = Flags {
            letter_path: Some(letter_file),
            config_dir: Some(temp_dir.path().to_path_buf()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);

        assert_eq!(
            app.content.blocks(),
            vec![Block::Paragraph("Hello there.".to_string())]
        );
    }

    #[test]
    fn missing_photo_degrades_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            photo_path: Some(temp_dir.path().join("nonexistent.jpg")),
            config_dir: Some(temp_dir.path().to_path_buf()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        assert!(app.photo.is_none());
    }

    #[test]
    fn pressing_the_envelope_opens_and_starts_the_reveal() {
        let mut app = App::default();

        let _ = app.update(Message::Envelope(envelope::Message::Pressed));

        assert!(app.opened);
        assert!(app.opened_at.is_some());
        assert_eq!(app.letter.phase(), Phase::Pending);
    }

    #[test]
    fn a_second_press_after_opening_is_a_no_op() {
        let mut app = App::default();
        let _ = app.update(Message::Envelope(envelope::Message::Pressed));
        let opened_at = app.opened_at;

        let _ = app.update(Message::Envelope(envelope::Message::Pressed));

        assert!(app.opened);
        assert_eq!(app.opened_at, opened_at);
        assert_eq!(app.letter.phase(), Phase::Pending);
    }

    #[test]
    fn open_state_is_monotone_across_message_sequences() {
        let mut app = App::default();
        let _ = app.update(Message::Envelope(envelope::Message::Pressed));

        let _ = app.update(Message::Envelope(envelope::Message::HoverEntered));
        let _ = app.update(Message::Envelope(envelope::Message::HoverLeft));
        let _ = app.update(Message::Tick(Instant::now()));
        let _ = app.update(Message::Letter(letter::Message::RevealElapsed));
        let _ = app.update(Message::Envelope(envelope::Message::Pressed));

        assert!(app.opened);
    }

    #[test]
    fn reveal_message_promotes_the_letter_once_open() {
        let mut app = App::default();
        let _ = app.update(Message::Envelope(envelope::Message::Pressed));

        let _ = app.update(Message::Letter(letter::Message::RevealElapsed));

        assert_eq!(app.letter.phase(), Phase::Revealed);
    }

    #[test]
    fn reveal_message_before_opening_is_ignored() {
        let mut app = App::default();

        let _ = app.update(Message::Letter(letter::Message::RevealElapsed));

        assert_eq!(app.letter.phase(), Phase::Hidden);
        assert!(!app.opened);
    }

    #[test]
    fn hover_controls_the_hint_only_while_closed() {
        let mut app = App::default();

        let _ = app.update(Message::Envelope(envelope::Message::HoverEntered));
        assert!(app.envelope.shows_hint(app.opened));

        let _ = app.update(Message::Envelope(envelope::Message::Pressed));
        assert!(!app.envelope.shows_hint(app.opened));

        let _ = app.update(Message::Envelope(envelope::Message::HoverLeft));
        let _ = app.update(Message::Envelope(envelope::Message::HoverEntered));
        assert!(!app.envelope.shows_hint(app.opened));
    }

    #[test]
    fn tick_advances_the_frame_clock() {
        let mut app = App::default();
        let later = Instant::now() + Duration::from_millis(100);

        let _ = app.update(Message::Tick(later));

        assert_eq!(app.now, later);
    }

    #[test]
    fn end_to_end_opening_flow() {
        let mut app = App::default();

        // Hover shows the hint on the closed envelope.
        let _ = app.update(Message::Envelope(envelope::Message::HoverEntered));
        assert!(app.envelope.shows_hint(app.opened));

        // One click opens; the seal and the press handler are gone with
        // `opened`, and the letter starts waiting on its reveal timer.
        let _ = app.update(Message::Envelope(envelope::Message::Pressed));
        assert!(app.opened);
        assert_eq!(app.letter.phase(), Phase::Pending);
        assert!(app.letter.is_mounted());

        // The reveal timer elapsing promotes the letter to Revealed.
        let _ = app.update(Message::Letter(letter::Message::RevealElapsed));
        assert_eq!(app.letter.phase(), Phase::Revealed);

        // Later ticks keep the card open.
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(2)));
        assert!(app.opened);
        assert_eq!(app.letter.phase(), Phase::Revealed);
    }
}
