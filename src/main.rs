mod heart;
mod logging;
mod models;
mod preset;
mod terminal;
mod ui;

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use crossterm::tty::IsTty;
use tracing::{error, info};

use crate::terminal::{SignalFlags, TerminalGuard};
use crate::ui::backend::Backend;
use crate::ui::{App, CrosstermBackend, Exit, SystemClock, Ticker, runtime};

fn main() -> ExitCode {
    let _logging = logging::init();

    match panic::catch_unwind(run) {
        Ok(Ok(exit)) => {
            info!(?exit, code = exit.code(), "退出");
            ExitCode::from(exit.code())
        }
        Ok(Err(err)) => {
            error!(%err, "fatal error");
            eprintln!("heartbeat: {err}");
            ExitCode::FAILURE
        }
        // panic hook 已恢复终端并打印了信息
        Err(_) => ExitCode::FAILURE,
    }
}

fn run() -> io::Result<Exit> {
    let scene = preset::load_scene()?;
    let interactive = io::stdin().is_tty();
    let signals = SignalFlags::register()?;

    // 设置终端
    let guard = TerminalGuard::new(interactive)?;
    terminal::install_panic_hook(guard.restorer());

    let mut backend = CrosstermBackend::new(io::stdout(), interactive);
    let mut app = App::new(scene, backend.size());
    let interval = Duration::from_millis(app.scene.timing.interval_ms());
    let mut ticker = Ticker::new(SystemClock, interval);

    info!(
        interactive,
        size = ?app.last_size,
        viewport = ?app.viewport(app.last_size),
        interval_ms = ticker.interval().as_millis() as u64,
        "start"
    );

    // 主循环
    let result = runtime::run(&mut app, &mut backend, &mut ticker, &signals);

    // 恢复终端后再由 main 打印错误
    drop(guard);

    result
}
