//! 终端 I/O 后端
//!
//! 运行循环只通过这个 trait 读尺寸、等事件、写帧，测试中可替换为脚本化实现。

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;

use crate::heart::viewport::FALLBACK_SIZE;

pub trait Backend {
    /// 终端报告的尺寸（列, 行）
    fn size(&self) -> (u16, u16);

    /// 最多等待 `timeout`，返回期间到达的一个事件
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;

    /// 一次性写出整帧
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;
}

pub struct CrosstermBackend<W: Write> {
    out: W,
    interactive: bool,
}

impl<W: Write> CrosstermBackend<W> {
    /// `interactive` 为 false 时不读取任何输入，只按超时休眠
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }
}

impl<W: Write> Backend for CrosstermBackend<W> {
    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or(FALLBACK_SIZE)
    }

    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !self.interactive {
            thread::sleep(timeout);
            return Ok(None);
        }
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.out.write_all(frame)?;
        self.out.flush()
    }
}
