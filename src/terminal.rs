//! 终端接管与恢复
//!
//! 启动时进入备用屏幕、隐藏光标；任何退出路径（正常退出、信号、panic）
//! 都通过同一个一次性的 `TerminalRestorer` 恢复终端。

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::ResetColor,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// 进入全屏：备用屏幕、隐藏光标、清屏、光标归位
pub fn write_setup<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, EnterAlternateScreen, Hide, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

/// 退出全屏：恢复颜色、显示光标、离开备用屏幕
pub fn write_restore<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, ResetColor, Show, LeaveAlternateScreen)?;
    out.flush()
}

/// 直接操作真实终端；`raw_input` 仅在 stdin 是交互终端时开启
#[derive(Debug)]
pub struct CrosstermTerminalOps {
    raw_input: bool,
}

impl CrosstermTerminalOps {
    pub fn new(raw_input: bool) -> Self {
        Self { raw_input }
    }
}

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        write_setup(&mut io::stdout())?;
        if self.raw_input {
            enable_raw_mode()?;
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        // 尽力恢复：即使某一步失败也继续后面的步骤
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = write_restore(&mut io::stdout()) {
            first_err.get_or_insert(err);
        }
        if self.raw_input {
            if let Err(err) = disable_raw_mode() {
                first_err.get_or_insert(err);
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// 一次性恢复句柄，可克隆给 panic hook 使用
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

/// 终端守卫：创建时接管终端，析构时恢复
pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new(raw_input: bool) -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps::new(raw_input)))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        // setup 可能只完成了一半，失败时也要撤销已经生效的部分
        if let Err(err) = ops.setup() {
            let _ = ops.restore();
            return Err(err);
        }
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

/// panic 时先恢复终端，再交给默认 hook 打印信息
pub fn install_panic_hook(restorer: TerminalRestorer) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restorer.restore();
        tracing::error!(panic = %info, "panic");
        default_hook(info);
    }));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    /// SIGINT 视同按 q 退出
    pub fn exit_code(self) -> u8 {
        match self {
            TerminationSignal::SigInt => 0,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// 信号标志：由信号处理器置位，主循环轮询
#[derive(Debug, Clone, Default)]
pub struct SignalFlags {
    interrupt: Arc<AtomicBool>,
    terminate: Arc<AtomicBool>,
}

impl SignalFlags {
    #[cfg(unix)]
    pub fn register() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        use signal_hook::flag;

        let flags = Self::default();
        flag::register(SIGINT, Arc::clone(&flags.interrupt))?;
        flag::register(SIGTERM, Arc::clone(&flags.terminate))?;
        Ok(flags)
    }

    #[cfg(not(unix))]
    pub fn register() -> io::Result<Self> {
        Ok(Self::default())
    }

    /// 取出已到达的信号（SIGTERM 优先）
    pub fn pending(&self) -> Option<TerminationSignal> {
        if self.terminate.load(Ordering::SeqCst) {
            Some(TerminationSignal::SigTerm)
        } else if self.interrupt.load(Ordering::SeqCst) {
            Some(TerminationSignal::SigInt)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn raise(&self, signal: TerminationSignal) {
        match signal {
            TerminationSignal::SigInt => self.interrupt.store(true, Ordering::SeqCst),
            TerminationSignal::SigTerm => self.terminate.store(true, Ordering::SeqCst),
        }
    }
}
