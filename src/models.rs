use serde::Deserialize;

/// RGB 颜色（TOML 中写作 `[r, g, b]`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// 相对亮度（Rec. 709 权重）
    pub fn luminance(self) -> f64 {
        0.2126 * self.0 as f64 + 0.7152 * self.1 as f64 + 0.0722 * self.2 as f64
    }
}

/// 心形中嵌入的文字
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub single: String,
    pub split: Vec<String>, // 窄视口时上下两行各放一个词
}

impl Message {
    /// 单行文字的字符数
    pub fn single_len(&self) -> usize {
        self.single.chars().count()
    }
}

/// 动画节奏
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Timing {
    pub fps: u32,
    pub pulse_hz: f64,
    pub pulse_amplitude: f64,
    pub shine_speed: f64,
}

impl Timing {
    /// 帧间隔（毫秒，四舍五入）
    pub fn interval_ms(&self) -> u64 {
        (1000.0 / self.fps.max(1) as f64).round() as u64
    }

    /// 第 t 帧对应的秒数
    pub fn seconds(&self, t: u64) -> f64 {
        t as f64 / self.fps.max(1) as f64
    }
}

/// 曲线坐标映射
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shape {
    pub x_span: f64,
    pub y_span: f64,
    #[serde(default = "default_y_squash")]
    pub y_squash: f64,
}

fn default_y_squash() -> f64 {
    0.95
}

/// 配色
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Palette {
    pub top: Rgb,
    pub bottom: Rgb,
    pub edge_boost: Rgb,
    pub shine_boost: Rgb,
    pub text_dark: Rgb,
    pub text_light: Rgb,
    pub contrast_threshold: f64,
}

/// 场景（scene.toml 的完整结构）
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    pub message: Message,
    pub timing: Timing,
    pub shape: Shape,
    pub palette: Palette,
}
