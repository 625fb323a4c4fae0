//! 业务逻辑处理 (Update/Dispatch)

use tracing::debug;

use super::actions::Action;
use super::state::{App, Redraw};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::TogglePause => self.toggle_pause(),
            Action::Resize(cols, rows) => self.on_resize((cols, rows)),
            Action::Tick(cols, rows) => self.on_tick((cols, rows)),
        }
        false
    }

    /// 切换暂停
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, frame = self.frame, "toggle pause");
    }

    /// 终端尺寸变化：立即重绘，不推进帧计数
    fn on_resize(&mut self, size: (u16, u16)) {
        debug!(cols = size.0, rows = size.1, "resize");
        self.last_size = size;
        self.request_redraw(Redraw {
            size,
            clear: true,
            advance: false,
        });
    }

    /// 定时器：未暂停时推进动画；尺寸变化时无论是否暂停都重绘
    fn on_tick(&mut self, size: (u16, u16)) {
        let resized = size != self.last_size;
        if resized {
            debug!(cols = size.0, rows = size.1, "size changed since last tick");
            self.last_size = size;
        }

        if !self.paused || resized {
            self.request_redraw(Redraw {
                size,
                clear: resized,
                advance: !self.paused,
            });
        }
    }
}
