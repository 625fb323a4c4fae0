use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// 持有到进程结束，析构时把缓冲的日志刷到文件
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// 获取日志目录 (~/.local/share/heartbeat/logs/)
fn get_log_dir() -> io::Result<PathBuf> {
    let log_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("heartbeat")
        .join("logs");

    fs::create_dir_all(&log_dir)?;

    Ok(log_dir)
}

/// 初始化日志：只写文件，标准输出留给画面
///
/// 失败时返回 None，程序照常运行。
pub fn init() -> Option<LoggingGuard> {
    let log_dir = get_log_dir()
        .or_else(|_| -> io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("heartbeat").join("logs");
            fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "heartbeat.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("heartbeat=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
