use std::{
    ops::Range,
    time::{Duration, Instant},
};

use minifb::Key;

use palettegen::adjust::{hue_at, HueDrag};
use palettegen::color::{generate_shades, hex_to_rgb, hsl_to_rgb, text_color};
use palettegen::config::{MAX_COLORS, MIN_COLORS};
use palettegen::{Color, ColorId, Palette, PaletteEngine};

use crate::window::WindowHandle;

const TITLE: &str = "palettegen";

const WIDTH: usize = 480;
const HEIGHT: usize = 270;
const HUE_ROW: usize = 20;
const SHADE_ROW: usize = 28;
const SHADE_TOP: usize = HEIGHT - HUE_ROW - SHADE_ROW;
const HUE_TOP: usize = HEIGHT - HUE_ROW;
const SHADE_STEPS: usize = 7;
const MARKER: Range<usize> = 6..16;

const COLOR_EMPTY: u32 = 0x202020;

const FRAME_PERIOD: Duration = Duration::from_micros(1_000_000 / 60);

pub struct Viewer {
    pub engine: PaletteEngine,
    pub window: WindowHandle,
    pub buffer: Vec<u32>,
    pub drag: Option<HueDrag>,
    pub history_cursor: usize,
    pub mouse_was_down: bool,
    pub closing: bool,
}

impl Viewer {
    pub fn new(engine: PaletteEngine) -> anyhow::Result<Self> {
        let window = WindowHandle::open(TITLE, WIDTH, HEIGHT)?;

        let mut viewer = Viewer {
            engine,
            window,
            buffer: vec![COLOR_EMPTY; WIDTH * HEIGHT],
            drag: None,
            history_cursor: 0,
            mouse_was_down: false,
            closing: false,
        };

        viewer.update_title();

        Ok(viewer)
    }

    pub fn step(&mut self) -> anyhow::Result<()> {
        let frame_start = Instant::now();

        if !self.window.is_open() {
            self.quit();
        }

        if !self.closing {
            self.read_inputs();
            self.read_pointer();
        }

        self.render();
        self.window.present(&self.buffer)?;

        if let Some(rest) = FRAME_PERIOD.checked_sub(frame_start.elapsed()) {
            spin_sleep::sleep(rest);
        }

        Ok(())
    }

    fn read_inputs(&mut self) {
        for key in self.window.keys_pressed() {
            match key {
                Key::Escape => match self.drag.take() {
                    Some(drag) => drag.cancel(),
                    None => self.quit(),
                },
                Key::Space => {
                    self.engine.generate_random_palette();
                    self.history_cursor = 0;
                }
                Key::Up => self.resize(1),
                Key::Down => self.resize(-1),
                Key::Left => self.browse_history(1),
                Key::Right => self.browse_history(-1),
                Key::S => println!("{}", self.engine.shareable_url()),
                key => {
                    if let Some(index) = swatch_key(key) {
                        if let Some(id) = self.swatch(index).map(Color::id) {
                            self.engine.toggle_color_lock(id);
                        }
                    }
                }
            }

            self.update_title();
        }
    }

    fn read_pointer(&mut self) {
        let down = self.window.mouse_down();
        let pressed = down && !self.mouse_was_down;
        self.mouse_was_down = down;

        let pos = self.window.mouse_pos();

        if let Some(id) = self.drag.as_ref().map(HueDrag::color_id) {
            if down {
                if let Some((x, _)) = pos {
                    let (left, width) = self.column_of(id);
                    let hue = hue_at(x - left as f32, width as f32);

                    if let Some(drag) = self.drag.as_mut() {
                        drag.preview(hue);
                    }
                }
            } else if let Some(drag) = self.drag.take() {
                let hue = drag.hue();
                drag.commit(&mut self.engine, hue);
                self.history_cursor = 0;
                self.update_title();
            }

            return;
        }

        let (x, y) = match (pressed, pos) {
            (true, Some((x, y))) => (x.max(0.0) as usize, y.max(0.0) as usize),
            _ => return,
        };

        let count = self.engine.current().map(Palette::len).unwrap_or(0);
        let width = match column_width(count) {
            Some(width) => width,
            None => return,
        };
        let index = (x / width).min(count - 1);
        let color = match self.swatch(index) {
            Some(color) => color.clone(),
            None => return,
        };

        if y >= HUE_TOP {
            self.drag = Some(HueDrag::begin(&color));
        } else if y >= SHADE_TOP {
            let left = index * width;
            let step = (x.saturating_sub(left) * SHADE_STEPS / width).min(SHADE_STEPS - 1);

            if let Ok(shades) = color.shades(SHADE_STEPS) {
                self.engine.update_color(color.id(), &shades[step].hex);
                self.history_cursor = 0;
                self.update_title();
            }
        }
    }

    fn render(&mut self) {
        let (palette, column) = match self.engine.current() {
            Some(palette) => match column_width(palette.len()) {
                Some(column) => (palette, column),
                None => {
                    fill(&mut self.buffer, 0..WIDTH, 0..HEIGHT, COLOR_EMPTY);
                    return;
                }
            },
            None => {
                fill(&mut self.buffer, 0..WIDTH, 0..HEIGHT, COLOR_EMPTY);
                return;
            }
        };

        let count = palette.len();

        for (i, color) in palette.colors().iter().enumerate() {
            let left = i * column;
            let right = if i + 1 == count { WIDTH } else { left + column };
            let width = right - left;

            let hex = match &self.drag {
                Some(drag) if drag.color_id() == color.id() => drag.hex(),
                _ => color.hex().to_string(),
            };
            let rgb = hex_to_rgb(&hex);

            fill(&mut self.buffer, left..right, 0..SHADE_TOP, rgb.to_u32());

            if color.is_locked() && width >= MARKER.end {
                let marker = hex_to_rgb(text_color(&hex)).to_u32();
                let x = left + MARKER.start..left + MARKER.end;
                fill(&mut self.buffer, x, MARKER, marker);
            }

            if let Ok(shades) = generate_shades(&hex, SHADE_STEPS) {
                for (j, shade) in shades.iter().enumerate() {
                    let x = left + j * width / SHADE_STEPS..left + (j + 1) * width / SHADE_STEPS;
                    fill(&mut self.buffer, x, SHADE_TOP..HUE_TOP, hex_to_rgb(&shade.hex).to_u32());
                }
            }

            let hsl = rgb.to_hsl();
            for x in left..right {
                let hue = hue_at((x - left) as f32, width as f32);
                let px = hsl_to_rgb(hue.into(), hsl.s.into(), hsl.l.into()).to_u32();
                fill(&mut self.buffer, x..x + 1, HUE_TOP..HEIGHT, px);
            }
        }
    }

    fn swatch(&self, index: usize) -> Option<&Color> {
        self.engine.current().and_then(|p| p.colors().get(index))
    }

    fn column_of(&self, id: ColorId) -> (usize, usize) {
        let (palette, width) = match self.engine.current() {
            Some(palette) => match column_width(palette.len()) {
                Some(width) => (palette, width),
                None => return (0, WIDTH),
            },
            None => return (0, WIDTH),
        };

        let index = palette.position(id).unwrap_or(0);

        (index * width, width)
    }

    fn resize(&mut self, delta: isize) {
        let count = self.engine.color_count() as isize + delta;
        let count = count.clamp(MIN_COLORS as isize, MAX_COLORS as isize) as usize;

        if count != self.engine.color_count() {
            self.engine.update_color_count(count);
        }
    }

    fn browse_history(&mut self, delta: isize) {
        let len = self.engine.history().len();
        if len == 0 {
            return;
        }

        let cursor = (self.history_cursor as isize + delta).clamp(0, len as isize - 1) as usize;
        let id = self.engine.history().get(cursor).map(Palette::id);

        if let Some(id) = id {
            self.history_cursor = cursor;
            self.engine.load_palette_from_history(id);
        }
    }

    fn update_title(&mut self) {
        let title = format!(
            "{} - {} colors - history {}/{}",
            TITLE,
            self.engine.color_count(),
            self.history_cursor + 1,
            self.engine.history().len()
        );

        self.window.set_title(&title);
    }

    pub fn quit(&mut self) {
        self.closing = true;
        self.window.set_title(&format!("CLOSING - {}", TITLE));
    }

    pub fn close(self) -> PaletteEngine {
        self.engine
    }
}

/// Pixel width of one swatch column, `None` when `count` columns do not fit.
fn column_width(count: usize) -> Option<usize> {
    match WIDTH.checked_div(count) {
        Some(0) | None => None,
        width => width,
    }
}

fn swatch_key(key: Key) -> Option<usize> {
    let index = match key {
        Key::Key1 => 0,
        Key::Key2 => 1,
        Key::Key3 => 2,
        Key::Key4 => 3,
        Key::Key5 => 4,
        Key::Key6 => 5,
        Key::Key7 => 6,
        Key::Key8 => 7,
        _ => return None,
    };

    Some(index)
}

fn fill(buffer: &mut [u32], x: Range<usize>, y: Range<usize>, color: u32) {
    for row in y {
        let start = row * WIDTH;
        for px in &mut buffer[start + x.start..start + x.end] {
            *px = color;
        }
    }
}
