//! 运行循环与定时器
//!
//! 单线程：等待输入的超时即为距下一次 tick 的剩余时间，
//! 事件处理和 tick 依次执行，互不重叠。

use std::io;
use std::time::{Duration, Instant};

use tracing::trace;

use super::actions::Action;
use super::backend::Backend;
use super::input;
use super::state::App;
use super::view;
use crate::terminal::{SignalFlags, TerminationSignal};

/// 时间源（测试中可替换为手动时钟）
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// 固定间隔的 tick 源，第一次 tick 立即到期
pub struct Ticker<C: Clock> {
    clock: C,
    interval: Duration,
    next: Instant,
}

impl<C: Clock> Ticker<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        let next = clock.now();
        Self {
            clock,
            interval: interval.max(Duration::from_millis(1)),
            next,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 距下一次 tick 的剩余时间
    pub fn remaining(&self) -> Duration {
        self.next.saturating_duration_since(self.clock.now())
    }

    /// 到期则消费一次 tick 并返回 true；落后太多时不补发
    pub fn fire(&mut self) -> bool {
        let now = self.clock.now();
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}

/// 循环结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Signal(TerminationSignal),
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Quit => 0,
            Exit::Signal(signal) => signal.exit_code(),
        }
    }
}

/// 主循环：直到退出键或终止信号
pub fn run<B: Backend, C: Clock>(
    app: &mut App,
    backend: &mut B,
    ticker: &mut Ticker<C>,
    signals: &SignalFlags,
) -> io::Result<Exit> {
    loop {
        if let Some(signal) = signals.pending() {
            return Ok(Exit::Signal(signal));
        }

        if let Some(event) = backend.poll_event(ticker.remaining())? {
            if input::handle_event(app, &event) {
                return Ok(Exit::Quit);
            }
        }

        if ticker.fire() {
            let (cols, rows) = backend.size();
            app.dispatch(Action::Tick(cols, rows));
        }

        draw_pending(app, backend)?;
    }
}

/// 执行待处理的重绘；写出成功后才推进帧计数
fn draw_pending<B: Backend>(app: &mut App, backend: &mut B) -> io::Result<()> {
    let Some(redraw) = app.take_redraw() else {
        return Ok(());
    };

    let viewport = app.viewport(redraw.size);
    let frame = view::render_frame(&app.scene, app.frame, &viewport, redraw.clear)?;
    backend.write_frame(&frame)?;
    trace!(frame = app.frame, bytes = frame.len(), "frame written");

    if redraw.advance {
        app.advance();
    }
    Ok(())
}
