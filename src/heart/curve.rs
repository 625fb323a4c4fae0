//! 隐式心形曲线
//!
//! f(x, y) = (x² + y² − 1)³ − x²·y³，f ≤ 0 的区域即心形内部。

use std::f64::consts::PI;

use crate::models::{Shape, Timing};

/// 心形隐函数
#[inline]
pub fn heart_f(x: f64, y: f64) -> f64 {
    let x2 = x * x;
    let y2 = y * y;
    (x2 + y2 - 1.0).powi(3) - x2 * y * y2
}

/// 第 t 帧的脉动缩放系数：1 + A·sin(2π·hz·t/fps)
pub fn pulse(timing: &Timing, t: u64) -> f64 {
    let omega = 2.0 * PI * timing.pulse_hz;
    1.0 + timing.pulse_amplitude * (timing.seconds(t) * omega).sin()
}

/// 单个字符格在归一化坐标系中的采样结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub f: f64,
}

impl Sample {
    #[inline]
    pub fn inside(&self) -> bool {
        self.f <= 0.0
    }
}

/// 把视口内的字符格映射到曲线坐标系
#[derive(Debug, Clone, Copy)]
pub struct CellMapper<'a> {
    shape: &'a Shape,
    cols: usize,
    rows: usize,
    pulse: f64,
}

impl<'a> CellMapper<'a> {
    pub fn new(shape: &'a Shape, cols: usize, rows: usize, pulse: f64) -> Self {
        Self {
            shape,
            cols,
            rows,
            pulse,
        }
    }

    /// 对 (col, row) 采样：格子中心点，y 轴向上
    pub fn sample(&self, col: usize, row: usize) -> Sample {
        let half_w = self.cols as f64 / 2.0;
        let half_h = self.rows as f64 / 2.0;
        let x0 = ((col as f64 - half_w + 0.5) / half_w) * self.shape.x_span;
        let y0 = -((row as f64 - half_h + 0.5) / half_h) * self.shape.y_span;

        let x = x0 / self.pulse;
        let y = y0 / (self.pulse * self.shape.y_squash);
        Sample {
            x,
            y,
            f: heart_f(x, y),
        }
    }

    /// 一整行的内外判定
    pub fn row_mask(&self, row: usize) -> Vec<bool> {
        (0..self.cols).map(|c| self.sample(c, row).inside()).collect()
    }
}
