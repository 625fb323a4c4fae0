//! App 状态定义 (Model)
//!
//! 渲染循环的全部可变状态都集中在这里，只由 dispatch 修改

use crate::heart::Viewport;
use crate::models::Scene;

/// 一次待执行的重绘
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redraw {
    pub size: (u16, u16),
    pub clear: bool,   // 尺寸变化后先清屏
    pub advance: bool, // 绘制成功后推进帧计数
}

/// 应用状态
pub struct App {
    pub scene: Scene,
    pub frame: u64, // 帧计数 t
    pub paused: bool,
    pub last_size: (u16, u16),
    pending: Option<Redraw>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(scene: Scene, size: (u16, u16)) -> Self {
        Self {
            scene,
            frame: 0,
            paused: false,
            last_size: size,
            pending: None,
        }
    }

    /// 给定终端尺寸下的视口
    pub fn viewport(&self, size: (u16, u16)) -> Viewport {
        Viewport::compute(size.0, size.1, self.scene.message.single_len())
    }

    /// 登记重绘请求，与尚未执行的请求合并
    pub fn request_redraw(&mut self, redraw: Redraw) {
        self.pending = Some(match self.pending.take() {
            Some(prev) => Redraw {
                size: redraw.size,
                clear: prev.clear || redraw.clear,
                advance: prev.advance || redraw.advance,
            },
            None => redraw,
        });
    }

    /// 取出待执行的重绘
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        self.pending.take()
    }

    /// 帧绘制成功后调用
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}
