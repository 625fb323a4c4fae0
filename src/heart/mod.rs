//! 心形渲染的纯计算部分
//!
//! - curve: 隐式曲线与坐标映射
//! - viewport: 视口尺寸与居中
//! - shading: 着色
//! - text: 文字排布

pub mod curve;
pub mod shading;
pub mod text;
pub mod viewport;

pub use viewport::Viewport;
