//! Action 枚举定义 (Intent)
//!
//! 按键、终端事件和定时器都转化为明确的语义化 Action

/// 用户操作 / 运行时事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause, // 空格 / 回车
    Resize(u16, u16),
    Tick(u16, u16), // 定时器触发，携带当前终端尺寸
}
