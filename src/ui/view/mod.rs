//! 视图层模块
//!
//! 纯函数：由场景、帧计数和视口合成一整帧的转义序列缓冲区

pub mod components;

use std::io;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::heart::curve::{self, CellMapper};
use crate::heart::shading::Shader;
use crate::heart::text;
use crate::heart::Viewport;
use crate::models::Scene;
use components::{blank_cell, end_line, fill_cell, glyph_cell, padding};

/// 合成第 t 帧
///
/// 整帧写入同一个缓冲区，由调用方一次性输出，避免撕裂。
pub fn render_frame(
    scene: &Scene,
    t: u64,
    viewport: &Viewport,
    clear: bool,
) -> io::Result<Vec<u8>> {
    let Viewport {
        cols,
        rows,
        left_pad,
        top_pad,
    } = *viewport;

    let pulse = curve::pulse(&scene.timing, t);
    let mapper = CellMapper::new(&scene.shape, cols, rows, pulse);
    let shine_phase = scene.timing.seconds(t) * scene.timing.shine_speed;
    let shader = Shader::new(&scene.palette, &scene.shape, shine_phase);
    let placed = text::layout_text(&scene.message, cols, rows, |row| mapper.row_mask(row));

    // 每格最多约 40 字节的转义序列
    let mut out = Vec::with_capacity(cols * rows * 40 + (left_pad + 8) * rows);

    if clear {
        queue!(out, Clear(ClearType::All))?;
    }
    queue!(out, MoveTo(0, 0))?;
    for _ in 0..top_pad {
        queue!(out, Print("\r\n"))?;
    }

    for row in 0..rows {
        padding(&mut out, left_pad)?;
        let text = placed.iter().find(|p| p.row == row);

        for col in 0..cols {
            let sample = mapper.sample(col, row);
            if !sample.inside() {
                blank_cell(&mut out)?;
                continue;
            }

            let background = shader.shade(&sample);
            match text.and_then(|p| p.char_at(col)) {
                Some(ch) => glyph_cell(&mut out, background, shader.text_color(background), ch)?,
                None => fill_cell(&mut out, background)?,
            }
        }
        end_line(&mut out)?;
    }

    Ok(out)
}
