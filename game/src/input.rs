use macroquad::prelude::*;
use quad_tilt::{Orientation, OrientationListener};

use crate::direction::Dir4;

/// Degrees of tilt away from the baseline before a move fires.
const TILT_THRESHOLD: f32 = 15.0;
/// Seconds an axis stays quiet after firing.
const TILT_COOLDOWN: f64 = 0.2;
/// Seconds without samples after which the next sample becomes the new baseline.
const TILT_IDLE: f64 = 1.0;
/// Seconds a control stays drawn as pressed.
pub(crate) const ACK_DURATION: f64 = 0.15;

/// A raw input event, before it is turned into a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum InputEvent {
    Key(KeyCode),
    /// Click or tap at a screen position.
    Press(Vec2),
    Tilt(Orientation),
}

pub(crate) fn key_direction(key: KeyCode) -> Option<Dir4> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Dir4::Up),
        KeyCode::Down | KeyCode::S => Some(Dir4::Down),
        KeyCode::Left | KeyCode::A => Some(Dir4::Left),
        KeyCode::Right | KeyCode::D => Some(Dir4::Right),
        _ => None,
    }
}

/// The four on-screen direction controls, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ButtonPad {
    buttons: [(Dir4, Rect); 4],
}

impl ButtonPad {
    pub(crate) fn new(buttons: [(Dir4, Rect); 4]) -> Self {
        Self { buttons }
    }

    pub(crate) fn hit(&self, pos: Vec2) -> Option<Dir4> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|&(dir, _)| dir)
    }

    pub(crate) fn buttons(&self) -> impl Iterator<Item = (Dir4, Rect)> + '_ {
        self.buttons.iter().copied()
    }
}

#[derive(Default)]
struct TiltState {
    baseline: Option<(f32, f32)>,
    last_sample: Option<f64>,
    /// Earliest time each axis (front/back, left/right) may fire again.
    ready_at: [f64; 2],
}

impl TiltState {
    fn rearm(&mut self) {
        self.baseline = None;
    }

    fn sample(&mut self, beta: f32, gamma: f32, now: f64) -> Vec<Dir4> {
        let idle = self.last_sample.is_none_or(|t| now - t > TILT_IDLE);
        self.last_sample = Some(now);
        if idle {
            self.baseline = None;
        }
        let Some((base_beta, base_gamma)) = self.baseline else {
            self.baseline = Some((beta, gamma));
            return Vec::new();
        };

        let axes = [
            (beta, base_beta, Dir4::Up, Dir4::Down),
            (gamma, base_gamma, Dir4::Left, Dir4::Right),
        ];
        let mut commands = Vec::new();
        for (axis, (value, base, below, above)) in axes.into_iter().enumerate() {
            if now < self.ready_at[axis] {
                continue;
            }
            let dir = if value < base - TILT_THRESHOLD {
                below
            } else if value > base + TILT_THRESHOLD {
                above
            } else {
                continue;
            };
            self.ready_at[axis] = now + TILT_COOLDOWN;
            commands.push(dir);
        }
        commands
    }
}

/// Turns keys, control presses and tilt samples into directional commands.
pub(crate) struct InputDispatcher {
    buttons: Option<ButtonPad>,
    ack_until: [f64; 4],
    tilt: TiltState,
}

impl InputDispatcher {
    /// Without a control pad, presses are ignored; keys and tilt still work.
    pub(crate) fn new(buttons: Option<ButtonPad>) -> Self {
        if buttons.is_none() {
            log::debug!("No room for on-screen controls, buttons disabled");
        }
        Self {
            buttons,
            ack_until: [f64::NEG_INFINITY; 4],
            tilt: TiltState::default(),
        }
    }

    pub(crate) fn buttons(&self) -> Option<&ButtonPad> {
        self.buttons.as_ref()
    }

    pub(crate) fn set_buttons(&mut self, buttons: Option<ButtonPad>) {
        self.buttons = buttons;
    }

    /// Returns the commands `event` produces, in order. Every command also
    /// lights up its control for [`ACK_DURATION`], whether or not the move
    /// turns out to be legal.
    pub(crate) fn dispatch(&mut self, event: InputEvent, now: f64) -> Vec<Dir4> {
        let commands = match event {
            InputEvent::Key(key) => key_direction(key).into_iter().collect(),
            InputEvent::Press(pos) => self.press(pos),
            InputEvent::Tilt(orientation) => match (orientation.beta, orientation.gamma) {
                (Some(beta), Some(gamma)) if beta.is_finite() && gamma.is_finite() => {
                    self.tilt.sample(beta, gamma, now)
                }
                _ => Vec::new(),
            },
        };
        for dir in &commands {
            self.ack_until[dir.index()] = now + ACK_DURATION;
        }
        commands
    }

    fn press(&mut self, pos: Vec2) -> Vec<Dir4> {
        let Some(dir) = self.buttons.as_ref().and_then(|pad| pad.hit(pos)) else {
            return Vec::new();
        };
        // The phone may have been put down to tap; take a fresh baseline.
        self.tilt.rearm();
        vec![dir]
    }

    pub(crate) fn is_acknowledged(&self, dir: Dir4, now: f64) -> bool {
        now < self.ack_until[dir.index()]
    }
}

/// Collects this frame's raw events from macroquad and the orientation listener.
pub(crate) fn poll_events(listener: Option<&mut OrientationListener>) -> Vec<InputEvent> {
    let mut events: Vec<InputEvent> = get_keys_pressed().into_iter().map(InputEvent::Key).collect();

    let touches = touches();
    for touch in &touches {
        if matches!(touch.phase, TouchPhase::Started) {
            events.push(InputEvent::Press(touch.position));
        }
    }
    // Touches are also reported as mouse clicks.
    if touches.is_empty() && is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.push(InputEvent::Press(vec2(x, y)));
    }

    if let Some(listener) = listener {
        events.extend(listener.poll().into_iter().map(InputEvent::Tilt));
    }
    events
}
