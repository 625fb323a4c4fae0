//! 心形着色：纵向渐变 + 边缘高光 + 斜向流光

use crate::heart::curve::Sample;
use crate::models::{Palette, Rgb, Shape};

const EDGE_MAX: f64 = 0.6;
const EDGE_FALLOFF: f64 = 3.0;
const SHINE_FREQ: f64 = 2.0;
const SHINE_CUTOFF: f64 = 0.35;
const SHINE_POWER: f64 = 1.8;

#[inline]
fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> [i32; 3] {
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as i32;
    [lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2)]
}

/// 按比例叠加增量，并把每个通道限制在 [0, 255]
fn boost(base: [i32; 3], amount: Rgb, factor: f64) -> [i32; 3] {
    let add = |c: i32, a: u8| (c + (a as f64 * factor).round() as i32).clamp(0, 255);
    [add(base[0], amount.0), add(base[1], amount.1), add(base[2], amount.2)]
}

/// 单帧着色参数
#[derive(Debug, Clone, Copy)]
pub struct Shader<'a> {
    palette: &'a Palette,
    y_span: f64,
    shine_phase: f64,
}

impl<'a> Shader<'a> {
    /// `shine_phase` 随时间缓慢漂移：seconds · shine_speed
    pub fn new(palette: &'a Palette, shape: &Shape, shine_phase: f64) -> Self {
        Self {
            palette,
            y_span: shape.y_span,
            shine_phase,
        }
    }

    /// 计算心形内部格子的背景色
    pub fn shade(&self, sample: &Sample) -> Rgb {
        let gv = clamp01((sample.y + self.y_span) / (2.0 * self.y_span));
        let base = lerp_rgb(self.palette.top, self.palette.bottom, gv);

        // 越靠近边界越亮
        let edge = (EDGE_MAX - sample.f.abs() * EDGE_FALLOFF).clamp(0.0, EDGE_MAX);
        let lit = boost(base, self.palette.edge_boost, edge);

        let band = ((sample.x + sample.y) * SHINE_FREQ + self.shine_phase).sin() * 0.5 + 0.5;
        let shine = clamp01(band - SHINE_CUTOFF).powf(SHINE_POWER);
        let [r, g, b] = boost(lit, self.palette.shine_boost, shine);

        Rgb(r as u8, g as u8, b as u8)
    }

    /// 根据背景亮度选择文字颜色
    pub fn text_color(&self, background: Rgb) -> Rgb {
        if background.luminance() > self.palette.contrast_threshold {
            self.palette.text_dark
        } else {
            self.palette.text_light
        }
    }
}
