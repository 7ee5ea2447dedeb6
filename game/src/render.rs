use macroquad::prelude::*;

use crate::course::ObstacleKind;
use crate::direction::Dir4;
use crate::input::ButtonPad;
use crate::layout::Layout;
use crate::navigator::{MAZE_ID, Mood, PlayState};
use crate::position::Point;
use crate::session::MazeSession;
use crate::storage::Achievements;

const PADDING: f32 = 12.0;
const TITLE_HEIGHT: f32 = 56.0;
const BUTTON_SIZE: f32 = 56.0;
const BUTTON_SPACING: f32 = 6.0;
/// Width and height of the cross of four controls.
const PAD_EXTENT: f32 = 3.0 * BUTTON_SIZE + 2.0 * BUTTON_SPACING;
/// Controls are dropped rather than shrinking the maze below this.
const MIN_SCALE: f32 = 0.75;

const BACKGROUND: Color = Color::new(0.12, 0.12, 0.16, 1.0);
const WALL_COLOR: Color = Color::new(0.78, 0.78, 0.86, 1.0);
const GOAL_COLOR: Color = Color::new(0.35, 0.75, 0.45, 1.0);
const CONTROL_COLOR: Color = Color::new(0.43, 0.43, 0.52, 1.0);

/// Maps maze pixels to screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct View {
    origin: Vec2,
    scale: f32,
}

impl View {
    pub(crate) fn fit(layout: &Layout, width: f32, height: f32) -> Self {
        let reserved = if reserves_controls(layout, width, height) {
            PAD_EXTENT + PADDING
        } else {
            0.0
        };
        let scale = fit_scale(layout, width, height, reserved).max(0.1);
        let origin = vec2(
            (width - layout.outer_width() as f32 * scale) / 2.0,
            TITLE_HEIGHT + PADDING,
        );
        Self { origin, scale }
    }

    pub(crate) fn point(&self, p: Point) -> Vec2 {
        self.origin + vec2(p.x as f32, p.y as f32) * self.scale
    }

    pub(crate) fn len(&self, l: i32) -> f32 {
        l as f32 * self.scale
    }
}

fn fit_scale(layout: &Layout, width: f32, height: f32, reserved: f32) -> f32 {
    let sx = (width - 2.0 * PADDING) / layout.outer_width() as f32;
    let sy = (height - TITLE_HEIGHT - 2.0 * PADDING - reserved) / layout.outer_height() as f32;
    sx.min(sy)
}

fn reserves_controls(layout: &Layout, width: f32, height: f32) -> bool {
    width >= PAD_EXTENT + 2.0 * PADDING
        && fit_scale(layout, width, height, PAD_EXTENT + PADDING) >= MIN_SCALE
}

/// The on-screen controls for a window of the given size, centered below the
/// maze. None if the window is too small to fit them.
pub(crate) fn control_pad(layout: &Layout, width: f32, height: f32) -> Option<ButtonPad> {
    if !reserves_controls(layout, width, height) {
        return None;
    }
    let view = View::fit(layout, width, height);
    let top = view.origin.y + view.len(layout.outer_height()) + PADDING;
    let center = width / 2.0 - BUTTON_SIZE / 2.0;
    let pitch = BUTTON_SIZE + BUTTON_SPACING;
    let rect = |x: f32, y: f32| Rect::new(x, y, BUTTON_SIZE, BUTTON_SIZE);
    Some(ButtonPad::new([
        (Dir4::Up, rect(center, top)),
        (Dir4::Down, rect(center, top + 2.0 * pitch)),
        (Dir4::Left, rect(center - pitch, top + pitch)),
        (Dir4::Right, rect(center + pitch, top + pitch)),
    ]))
}

fn draw_centered(text: &str, center_x: f32, baseline: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, center_x - dims.width / 2.0, baseline, size as f32, color);
}

fn mood_style(mood: Mood) -> (&'static str, Color) {
    match mood {
        Mood::Waiting => ("._.", Color::from_rgba(200, 200, 220, 255)),
        Mood::Closer => (":)", Color::from_rgba(120, 200, 255, 255)),
        Mood::Farther => (":/", Color::from_rgba(240, 160, 90, 255)),
        Mood::Almost => (":D", Color::from_rgba(250, 220, 90, 255)),
        Mood::Reached => ("\\o/", GOAL_COLOR),
    }
}

pub(crate) fn render_maze(session: &MazeSession, layout: &Layout, now: f64) {
    clear_background(BACKGROUND);
    let view = View::fit(layout, screen_width(), screen_height());
    draw_centered("Not found", screen_width() / 2.0, TITLE_HEIGHT - 12.0, 40, WHITE);

    let navigator = session.navigator();
    for obstacle in navigator.course().obstacles() {
        if !obstacle.is_visible() {
            continue;
        }
        let r = obstacle.rect;
        let at = view.point(Point::new(r.left, r.top));
        // Hairline walls still need to show up on a small screen.
        let (w, h) = (view.len(r.width).max(1.0), view.len(r.height).max(1.0));
        let color = match obstacle.kind {
            ObstacleKind::Frame => Color::from_rgba(150, 150, 170, 255),
            _ => WALL_COLOR,
        };
        draw_rectangle(at.x, at.y, w, h, color);
    }

    if navigator.state() == PlayState::Playing {
        draw_home(view.point(navigator.goal()), view.len(layout.step));
    }

    let (label, color) = mood_style(navigator.mood());
    let actor = view.point(navigator.actor());
    let size = view.len(layout.size);
    draw_rectangle(actor.x + 2.0, actor.y + 2.0, size - 4.0, size - 4.0, color);
    let font_size = (size * 0.55).max(8.0) as u16;
    let dims = measure_text(label, None, font_size, 1.0);
    draw_text(
        label,
        actor.x + (size - dims.width) / 2.0,
        actor.y + (size + dims.offset_y) / 2.0,
        font_size as f32,
        BACKGROUND,
    );

    if let Some(pad) = session.input().buttons() {
        render_controls(pad, |dir| session.input().is_acknowledged(dir, now));
    }
}

/// Little house standing on the goal square.
fn draw_home(at: Vec2, size: f32) {
    let inset = size * 0.2;
    let roof = at.y + size * 0.45;
    draw_triangle(
        vec2(at.x + inset * 0.5, roof),
        vec2(at.x + size / 2.0, at.y + inset * 0.5),
        vec2(at.x + size - inset * 0.5, roof),
        GOAL_COLOR,
    );
    draw_rectangle(
        at.x + inset,
        roof,
        size - 2.0 * inset,
        at.y + size - inset * 0.5 - roof,
        GOAL_COLOR,
    );
}

fn render_controls(pad: &ButtonPad, acknowledged: impl Fn(Dir4) -> bool) {
    for (dir, rect) in pad.buttons() {
        let (mut x, mut y) = (rect.x, rect.y);
        let thickness = if acknowledged(dir) {
            let delta = dir.delta();
            x += delta.dx as f32 * 2.0;
            y += delta.dy as f32 * 2.0;
            4.0
        } else {
            2.0
        };
        draw_rectangle_lines(x, y, rect.w, rect.h, thickness, CONTROL_COLOR);

        let arrow = match dir {
            Dir4::Up => "^",
            Dir4::Down => "v",
            Dir4::Left => "<",
            Dir4::Right => ">",
        };
        draw_centered(arrow, x + rect.w / 2.0, y + rect.h * 0.65, 32, CONTROL_COLOR);
    }
}

pub(crate) fn render_home(achievements: &Achievements) {
    clear_background(BACKGROUND);
    let center_x = screen_width() / 2.0;
    let center_y = screen_height() / 2.0;

    draw_centered("Home", center_x, center_y - 30.0, 64, YELLOW);
    draw_centered(
        "Press any key or tap for another maze",
        center_x,
        center_y + 30.0,
        28,
        WHITE,
    );
    if achievements.contains(MAZE_ID) {
        draw_centered(
            "You found your way out of the maze",
            center_x,
            center_y + 80.0,
            24,
            GOAL_COLOR,
        );
    }
}
