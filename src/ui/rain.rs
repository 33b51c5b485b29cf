// Matrix Tools Hub - ui/rain.rs
//
// Decorative matrix-rain background painter. Purely cosmetic: it owns no
// application state and nothing reads back from it.
//
// Model: one "drop" per glyph-wide column, advancing one cell per frame.
// A column that has left the bottom of the viewport resets to the top with
// a small per-frame probability, which staggers the streams. egui repaints
// the whole layer every frame, so the fading trail is drawn explicitly as
// a run of glyphs above each head with decreasing alpha.

use crate::core::config::MatrixRainSettings;
use crate::ui::theme;
use crate::util::constants;
use rand::Rng;
use std::time::Instant;

pub struct MatrixRain {
    /// Current head row per column, in cell units.
    drops: Vec<i32>,
    glyphs: Vec<char>,
    frame_interval_ms: u64,
    font_size: f32,
    opacity: f32,
    last_step: Instant,
}

impl MatrixRain {
    pub fn new(settings: &MatrixRainSettings) -> Self {
        Self {
            drops: Vec::new(),
            glyphs: settings.characters.chars().collect(),
            frame_interval_ms: settings.frame_interval_ms,
            font_size: settings.font_size,
            opacity: settings.opacity.clamp(0.0, 1.0),
            last_step: Instant::now(),
        }
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// Advance (when the frame interval elapsed) and paint into `rect`.
    pub fn paint(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        if self.glyphs.is_empty() || self.font_size <= 0.0 {
            return;
        }

        let columns = (rect.width() / self.font_size).ceil().max(1.0) as usize;
        let rows = (rect.height() / self.font_size).ceil() as i32;
        // New columns appear at the top when the window widens.
        self.drops.resize(columns, 0);

        let mut rng = rand::rng();

        if self.last_step.elapsed().as_millis() as u64 >= self.frame_interval_ms {
            self.last_step = Instant::now();
            for drop in &mut self.drops {
                if *drop > rows && rng.random_bool(constants::RAIN_RESET_PROBABILITY) {
                    *drop = 0;
                }
                *drop += 1;
            }
        }

        let font = egui::FontId::monospace(self.font_size);
        let head_alpha = (self.opacity * 3.0).clamp(0.0, 1.0);

        for (column, &head) in self.drops.iter().enumerate() {
            let x = rect.left() + column as f32 * self.font_size;

            for offset in 0..=constants::RAIN_TRAIL_LEN {
                let row = head - offset as i32;
                if row < 0 || row > rows {
                    continue;
                }
                let fade =
                    1.0 - offset as f32 / (constants::RAIN_TRAIL_LEN as f32 + 1.0);
                let alpha = if offset == 0 {
                    head_alpha
                } else {
                    self.opacity * fade
                };

                let glyph = self.glyphs[rng.random_range(0..self.glyphs.len())];
                painter.text(
                    egui::pos2(x, rect.top() + row as f32 * self.font_size),
                    egui::Align2::LEFT_TOP,
                    glyph,
                    font.clone(),
                    theme::MATRIX_GREEN.gamma_multiply(alpha),
                );
            }
        }
    }
}
