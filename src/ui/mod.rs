//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，渲染循环的全部状态
//! - View (view/): 纯函数，将 State 映射为一帧转义序列
//! - Intent (actions.rs): 按键 / 定时器 / 尺寸变化转化为 Action
//!
//! runtime.rs 驱动循环，backend.rs 隔离真实终端。

pub mod actions;
pub mod backend;
pub mod input;
pub mod logic;
pub mod runtime;
pub mod state;
pub mod view;

// Re-export for convenience
pub use backend::CrosstermBackend;
pub use runtime::{Exit, SystemClock, Ticker};
pub use state::App;
