// SPDX-License-Identifier: MPL-2.0
//! The clickable envelope and its layered open/close animation.
//!
//! The envelope is drawn by a canvas program as a fixed z-ordered stack of
//! four layers, back to front: the inner lining, the letter panel peeking
//! out of the pocket, the pocket body with a triangular cutout at the top
//! edge, and a flap hinged at that edge. The flap is a two-sided card with
//! exactly two stable orientations: closed (front face, 0°) and open (back
//! face, 180°); the turn is rendered by vertically foreshortening the flap
//! triangle through the hinge. A wax seal sits over the flap apex while
//! closed and unmounts the moment the envelope opens.
//!
//! When the photo collaborator is present, the pocket and the closed flap
//! share one image draw so the closed envelope reads as a single
//! continuous picture; without it, both fall back to flat paper fills.
//!
//! State here is only the hover flag. Opening is owned by the application
//! root: a press while closed surfaces [`Event::Activated`] and the root
//! decides the transition, so repeated clicks can never double-open.

use crate::photo::PhotoData;
use crate::ui::anim;
use crate::ui::design_tokens::{motion, opacity, palette, radius, sizing, typography};
use iced::widget::canvas::{self, Canvas, Path, Stroke};
use iced::widget::image::Handle;
use iced::widget::{mouse_area, Column, Container, Space, Text};
use iced::{alignment, mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::f32::consts::PI;
use std::time::Duration;

const ENVELOPE_WIDTH: f32 = sizing::ENVELOPE_WIDTH;
const ENVELOPE_HEIGHT: f32 = sizing::ENVELOPE_HEIGHT;

/// Horizontal canvas margin so the hover scale never clips.
const SIDE_MARGIN: f32 = 16.0;
/// Vertical canvas room above the envelope for the rising letter panel.
const HEADROOM: f32 = 96.0;
/// Vertical canvas room below the envelope for the retire drop.
const FOOTROOM: f32 = 128.0;

pub const CANVAS_WIDTH: f32 = ENVELOPE_WIDTH + 2.0 * SIDE_MARGIN;
pub const CANVAS_HEIGHT: f32 = HEADROOM + ENVELOPE_HEIGHT + FOOTROOM;

/// Depth of the triangular cutout in the pocket's top edge.
const CUTOUT_DEPTH: f32 = ENVELOPE_HEIGHT * 0.48;
/// Depth of the flap triangle below the hinge while closed.
const FLAP_DEPTH: f32 = ENVELOPE_HEIGHT / 2.0;

/// Letter panel inset from the envelope's left/right edges.
const PEEK_INSET: f32 = 16.0;
const PEEK_CLOSED_TOP: f32 = 88.0;
const PEEK_CLOSED_HEIGHT: f32 = 160.0;
const PEEK_OPEN_TOP: f32 = -56.0;
const PEEK_OPEN_HEIGHT: f32 = 192.0;

/// Retire: drop distance, shrink factor, and the hover grow factor.
const RETIRE_DROP: f32 = 128.0;
const RETIRE_SHRINK: f32 = 0.1;
const HOVER_SCALE: f32 = 1.05;

const HINT_LABEL: &str = "Click to open";

/// Hover flag, the only state the envelope owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    hovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed,
    HoverEntered,
    HoverLeft,
}

/// Event surfaced to the application root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Activated,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a message, returning the event the root should act on.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Pressed => Some(Event::Activated),
            Message::HoverEntered => {
                self.hovered = true;
                None
            }
            Message::HoverLeft => {
                self.hovered = false;
                None
            }
        }
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The hint affordance is visible exactly while hovered and not open.
    #[must_use]
    pub fn shows_hint(&self, is_open: bool) -> bool {
        self.hovered && !is_open
    }
}

/// Context required to render the envelope.
pub struct ViewContext<'a> {
    pub is_open: bool,
    /// Time since the open transition, `None` while closed.
    pub since_open: Option<Duration>,
    pub photo: Option<&'a PhotoData>,
}

/// Renders the hint slot and the envelope canvas. The press handler is
/// only offered while closed; once open the envelope no longer accepts
/// pointer input.
pub fn view<'a>(state: &State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let flap = ctx
        .since_open
        .map(|t| anim::eased(t, motion::FLAP_TURN))
        .unwrap_or(0.0);
    let lift = ctx
        .since_open
        .map(|t| anim::eased(t, motion::LETTER_LIFT))
        .unwrap_or(0.0);
    let retire = ctx
        .since_open
        .map(|t| anim::eased(t, motion::ENVELOPE_RETIRE))
        .unwrap_or(0.0);

    let canvas = Canvas::new(EnvelopeCanvas {
        photo: ctx.photo.map(|p| p.handle.clone()),
        flap,
        lift,
        retire,
        hovered: state.shows_hint(ctx.is_open),
        show_seal: !ctx.is_open,
    })
    .width(Length::Fixed(CANVAS_WIDTH))
    .height(Length::Fixed(CANVAS_HEIGHT));

    // Once open, the envelope stops accepting pointer input entirely: no
    // press, no hover tracking, no pointer cursor.
    let mut area = mouse_area(canvas);
    if !ctx.is_open {
        area = area
            .on_press(Message::Pressed)
            .on_enter(Message::HoverEntered)
            .on_exit(Message::HoverLeft)
            .interaction(mouse::Interaction::Pointer);
    }

    let hint: Element<'a, Message> = if state.shows_hint(ctx.is_open) {
        Text::new(HINT_LABEL)
            .size(typography::BODY)
            .color(Color {
                a: opacity::HINT,
                ..palette::SNOW_WHITE
            })
            .into()
    } else {
        Space::new().width(Length::Shrink).height(Length::Shrink).into()
    };
    let hint_slot = Container::new(hint)
        .height(Length::Fixed(sizing::HINT_SLOT_HEIGHT))
        .align_y(alignment::Vertical::Center);

    Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(hint_slot)
        .push(area)
        .into()
}

/// Vertical position of the flap apex relative to the hinge, for a turn
/// progress in `[0, 1]`. Closed sits at `FLAP_DEPTH`, the hinge plane is
/// crossed at 0.5, open mirrors to `-FLAP_DEPTH` above the top edge.
#[must_use]
fn flap_apex_y(progress: f32) -> f32 {
    FLAP_DEPTH * (progress * PI).cos()
}

/// Past the hinge plane the back face of the flap is showing.
#[must_use]
fn flap_shows_back(progress: f32) -> bool {
    progress > 0.5
}

/// Letter panel rectangle for a lift progress in `[0, 1]`.
#[must_use]
fn peek_rect(lift: f32) -> Rectangle {
    let top = anim::lerp(PEEK_CLOSED_TOP, PEEK_OPEN_TOP, lift);
    let height = anim::lerp(PEEK_CLOSED_HEIGHT, PEEK_OPEN_HEIGHT, lift);
    Rectangle::new(
        Point::new(PEEK_INSET, top),
        Size::new(ENVELOPE_WIDTH - 2.0 * PEEK_INSET, height),
    )
}

/// The pocket cutout triangle: top corners down to the cutout depth.
fn cutout_path() -> Path {
    Path::new(|b| {
        b.move_to(Point::ORIGIN);
        b.line_to(Point::new(ENVELOPE_WIDTH / 2.0, CUTOUT_DEPTH));
        b.line_to(Point::new(ENVELOPE_WIDTH, 0.0));
        b.close();
    })
}

/// The pocket body: the full envelope rectangle minus the cutout.
fn pocket_path() -> Path {
    Path::new(|b| {
        b.move_to(Point::ORIGIN);
        b.line_to(Point::new(ENVELOPE_WIDTH / 2.0, CUTOUT_DEPTH));
        b.line_to(Point::new(ENVELOPE_WIDTH, 0.0));
        b.line_to(Point::new(ENVELOPE_WIDTH, ENVELOPE_HEIGHT));
        b.line_to(Point::new(0.0, ENVELOPE_HEIGHT));
        b.close();
    })
}

fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

struct EnvelopeCanvas {
    photo: Option<Handle>,
    /// Flap turn progress in `[0, 1]`.
    flap: f32,
    /// Letter panel lift progress in `[0, 1]`.
    lift: f32,
    /// Retire (drop/shrink/fade) progress in `[0, 1]`.
    retire: f32,
    hovered: bool,
    show_seal: bool,
}

impl EnvelopeCanvas {
    fn draw_envelope(&self, frame: &mut canvas::Frame, fade: f32) {
        let w = ENVELOPE_WIDTH;
        let h = ENVELOPE_HEIGHT;

        // 1. Inner lining, visible through the cutout once the flap lifts.
        frame.fill(
            &Path::rounded_rectangle(Point::ORIGIN, Size::new(w, h), radius::SM.into()),
            faded(palette::LINING, fade),
        );

        // 2. Letter panel peeking out of the pocket.
        let peek = peek_rect(self.lift);
        frame.fill(
            &Path::rounded_rectangle(peek.position(), peek.size(), radius::SM.into()),
            faded(palette::PAPER, fade),
        );
        for (index, width_frac) in [0.33, 1.0, 1.0, 0.66].into_iter().enumerate() {
            let line = Path::rectangle(
                Point::new(peek.x + PEEK_INSET, peek.y + PEEK_INSET + index as f32 * 12.0),
                Size::new((peek.width - 2.0 * PEEK_INSET) * width_frac, 4.0),
            );
            frame.fill(
                &line,
                faded(palette::INK_FAINT, fade * opacity::PREVIEW),
            );
        }

        // 3. Pocket body. With a photo the pocket and the closed flap are
        // one continuous image; the cutout only becomes visible once the
        // flap starts turning.
        match &self.photo {
            Some(handle) => {
                frame.draw_image(
                    Rectangle::new(Point::ORIGIN, Size::new(w, h)),
                    canvas::Image::new(handle.clone()).opacity(fade),
                );
                if self.flap > 0.0 {
                    frame.fill(&cutout_path(), faded(palette::LINING, fade));
                } else {
                    self.draw_creases(frame, fade);
                }
            }
            None => {
                frame.fill(&pocket_path(), faded(palette::POCKET, fade));
            }
        }

        // 4. Flap. With a photo at rest the flap is already part of the
        // image draw above; everywhere else it is a flat-toned triangle
        // foreshortened through the hinge.
        if self.flap > 0.0 || self.photo.is_none() {
            let apex = flap_apex_y(self.flap);
            let triangle = Path::new(|b| {
                b.move_to(Point::ORIGIN);
                b.line_to(Point::new(w, 0.0));
                b.line_to(Point::new(w / 2.0, apex));
                b.close();
            });
            let face = if flap_shows_back(self.flap) {
                palette::FLAP_BACK
            } else {
                palette::POCKET
            };
            frame.fill(&triangle, faded(face, fade));
            frame.stroke(
                &Path::line(Point::ORIGIN, Point::new(w, 0.0)),
                Stroke::default()
                    .with_width(1.0)
                    .with_color(faded(Color::BLACK, fade * opacity::TRACE)),
            );
        }

        // 5. Wax seal, only while closed.
        if self.show_seal {
            self.draw_seal(frame, fade);
        }
    }

    fn draw_creases(&self, frame: &mut canvas::Frame, fade: f32) {
        let crease = Path::new(|b| {
            b.move_to(Point::ORIGIN);
            b.line_to(Point::new(ENVELOPE_WIDTH / 2.0, CUTOUT_DEPTH));
            b.line_to(Point::new(ENVELOPE_WIDTH, 0.0));
        });
        frame.stroke(
            &crease,
            Stroke::default()
                .with_width(1.5)
                .with_color(faded(Color::BLACK, fade * opacity::TRACE)),
        );
    }

    fn draw_seal(&self, frame: &mut canvas::Frame, fade: f32) {
        let center = Point::new(ENVELOPE_WIDTH / 2.0, ENVELOPE_HEIGHT / 2.0);

        frame.fill(
            &Path::circle(center, sizing::SEAL_RADIUS),
            faded(palette::SEAL_700, fade),
        );
        frame.fill(
            &Path::circle(
                Point::new(center.x - 2.0, center.y - 2.0),
                sizing::SEAL_RADIUS - 2.0,
            ),
            faded(palette::SEAL_500, fade),
        );
        frame.stroke(
            &Path::circle(center, sizing::SEAL_RADIUS - 5.0),
            Stroke::default().with_width(1.0).with_color(faded(
                Color {
                    a: 0.2,
                    ..palette::SNOW_WHITE
                },
                fade,
            )),
        );

        let heart = Path::new(|b| {
            let s = 9.0;
            b.move_to(Point::new(center.x, center.y + 0.9 * s));
            b.bezier_curve_to(
                Point::new(center.x - 1.5 * s, center.y - 0.2 * s),
                Point::new(center.x - 0.7 * s, center.y - 1.1 * s),
                Point::new(center.x, center.y - 0.4 * s),
            );
            b.bezier_curve_to(
                Point::new(center.x + 0.7 * s, center.y - 1.1 * s),
                Point::new(center.x + 1.5 * s, center.y - 0.2 * s),
                Point::new(center.x, center.y + 0.9 * s),
            );
            b.close();
        });
        frame.fill(&heart, faded(palette::SEAL_900, fade));
    }
}

impl<Message> canvas::Program<Message> for EnvelopeCanvas {
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
        let fade = 1.0 - self.retire;
        if fade <= 0.0 {
            return vec![frame.into_geometry()];
        }

        frame.with_save(|frame| {
            frame.translate(Vector::new(
                SIDE_MARGIN,
                HEADROOM + RETIRE_DROP * self.retire,
            ));

            let scale = if self.hovered { HOVER_SCALE } else { 1.0 }
                * (1.0 - RETIRE_SHRINK * self.retire);
            frame.translate(Vector::new(ENVELOPE_WIDTH / 2.0, ENVELOPE_HEIGHT / 2.0));
            frame.scale(scale);
            frame.translate(Vector::new(-ENVELOPE_WIDTH / 2.0, -ENVELOPE_HEIGHT / 2.0));

            self.draw_envelope(frame, fade);
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_surfaces_the_activation_event() {
        let mut state = State::new();
        assert_eq!(state.update(Message::Pressed), Some(Event::Activated));
    }

    #[test]
    fn hover_messages_toggle_the_flag_without_events() {
        let mut state = State::new();
        assert!(!state.is_hovered());

        assert_eq!(state.update(Message::HoverEntered), None);
        assert!(state.is_hovered());

        assert_eq!(state.update(Message::HoverLeft), None);
        assert!(!state.is_hovered());
    }

    #[test]
    fn hint_is_visible_exactly_while_hovered_and_closed() {
        let mut state = State::new();
        assert!(!state.shows_hint(false));

        state.update(Message::HoverEntered);
        assert!(state.shows_hint(false));
        assert!(!state.shows_hint(true));

        state.update(Message::HoverLeft);
        assert!(!state.shows_hint(false));
    }

    #[test]
    fn hint_tracks_arbitrary_enter_leave_sequences() {
        let mut state = State::new();
        let sequence = [
            Message::HoverEntered,
            Message::HoverLeft,
            Message::HoverEntered,
            Message::HoverEntered,
            Message::HoverLeft,
        ];
        let mut hovered = false;
        for message in sequence {
            hovered = match message {
                Message::HoverEntered => true,
                Message::HoverLeft => false,
                Message::Pressed => hovered,
            };
            state.update(message);
            assert_eq!(state.shows_hint(false), hovered);
        }
    }

    #[test]
    fn flap_apex_travels_from_closed_through_hinge_to_open() {
        assert!((flap_apex_y(0.0) - FLAP_DEPTH).abs() < 1e-3);
        assert!(flap_apex_y(0.5).abs() < 1e-3);
        assert!((flap_apex_y(1.0) + FLAP_DEPTH).abs() < 1e-3);
    }

    #[test]
    fn flap_apex_is_monotonically_rising() {
        let mut previous = flap_apex_y(0.0);
        for i in 1..=100 {
            let apex = flap_apex_y(i as f32 / 100.0);
            assert!(apex <= previous);
            previous = apex;
        }
    }

    #[test]
    fn flap_face_flips_past_the_hinge_plane() {
        assert!(!flap_shows_back(0.0));
        assert!(!flap_shows_back(0.5));
        assert!(flap_shows_back(0.51));
        assert!(flap_shows_back(1.0));
    }

    #[test]
    fn peek_rect_rises_and_grows_when_opening() {
        let closed = peek_rect(0.0);
        let open = peek_rect(1.0);

        assert_eq!(closed.y, PEEK_CLOSED_TOP);
        assert_eq!(closed.height, PEEK_CLOSED_HEIGHT);
        assert_eq!(open.y, PEEK_OPEN_TOP);
        assert_eq!(open.height, PEEK_OPEN_HEIGHT);

        // Fully open, the panel clears the envelope's top edge.
        assert!(open.y < 0.0);
        // Closed, it stays inside the envelope body.
        assert!(closed.y > 0.0);
        assert!(closed.y + closed.height < ENVELOPE_HEIGHT);
    }

    #[test]
    fn cutout_fits_inside_the_flap() {
        // The flap triangle at rest must fully cover the pocket cutout so
        // the closed envelope never shows the lining.
        assert!(CUTOUT_DEPTH <= FLAP_DEPTH);
    }

    #[test]
    fn canvas_leaves_room_for_lift_and_retire() {
        assert!(HEADROOM >= -PEEK_OPEN_TOP);
        assert!(FOOTROOM >= RETIRE_DROP);
    }
}
