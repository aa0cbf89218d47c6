//! Minimal 5x7 bitmap glyphs, just enough to label the UI chrome without
//! pulling in a font rasterizer. Unknown characters render as blanks.

use anyhow::anyhow;
use sdl2::{pixels::Color, rect::Rect, render::Canvas, video::Window};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance between characters, including a 1px gap.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows top to bottom, the low 5 bits of each row left to right from the
/// most significant of the 5.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        'C' => [
            0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110,
        ],
        'l' => [
            0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110,
        ],
        'e' => [
            0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b10001, 0b01110,
        ],
        'a' => [
            0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b10001, 0b01111,
        ],
        'r' => [
            0b00000, 0b10110, 0b01001, 0b01000, 0b01000, 0b01000, 0b01000,
        ],
        _ => return None,
    };
    Some(rows)
}

fn draw_glyph(
    canvas: &mut Canvas<Window>,
    rows: [u8; 7],
    x: i32,
    y: i32,
) -> anyhow::Result<()> {
    for (row_index, row) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if row & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                canvas
                    .fill_rect(Rect::new(
                        x + col as i32,
                        y + row_index as i32,
                        1,
                        1,
                    ))
                    .map_err(|e| anyhow!(e))?;
            }
        }
    }
    Ok(())
}

/// Draws `text` centered on `(cx, cy)` in the current draw color.
pub fn draw_text_centered(
    canvas: &mut Canvas<Window>,
    text: &str,
    cx: i32,
    cy: i32,
    color: Color,
) -> anyhow::Result<()> {
    canvas.set_draw_color(color);
    let width_px = text.chars().count() as u32 * GLYPH_ADVANCE;
    let mut x = cx - width_px as i32 / 2;
    let y = cy - GLYPH_HEIGHT as i32 / 2;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            draw_glyph(canvas, rows, x, y)?;
        }
        x += GLYPH_ADVANCE as i32;
    }
    Ok(())
}
