//! 键盘事件映射 (Input -> Action)

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::actions::Action;
use super::state::App;

/// 根据终端事件获取对应的 Action
pub fn get_action(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_action(key),
        Event::Resize(cols, rows) => Some(Action::Resize(*cols, *rows)),
        _ => None,
    }
}

fn key_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        // 原始模式下 Ctrl+C 不会产生 SIGINT，只会作为按键到达
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Action::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::TogglePause),
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: &Event) -> bool {
    match get_action(event) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
