//! 单元格绘制组件
//!
//! 每个函数向缓冲区追加一个字符格对应的转义序列和字符

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::models::Rgb;

#[inline]
fn true_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// [组件] 心形内部的纯色格
pub fn fill_cell<W: Write>(out: &mut W, background: Rgb) -> io::Result<()> {
    queue!(out, SetBackgroundColor(true_color(background)), Print(' '))
}

/// [组件] 心形内部的文字格
pub fn glyph_cell<W: Write>(
    out: &mut W,
    background: Rgb,
    foreground: Rgb,
    ch: char,
) -> io::Result<()> {
    queue!(
        out,
        SetBackgroundColor(true_color(background)),
        SetForegroundColor(true_color(foreground)),
        Print(ch)
    )
}

/// [组件] 心形外部：默认颜色的空格
pub fn blank_cell<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, ResetColor, Print(' '))
}

/// [组件] 左侧留白（默认颜色）
pub fn padding<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    if width > 0 {
        queue!(out, Print(" ".repeat(width)))?;
    }
    Ok(())
}

/// [组件] 行尾：恢复颜色并换行
///
/// 原始模式关闭了输出处理，换行必须带上回车。
pub fn end_line<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, ResetColor, Print("\r\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fill_cell_uses_true_color_background() {
        let s = render(|out| fill_cell(out, Rgb(255, 45, 85)));
        assert_eq!(s, "\x1b[48;2;255;45;85m ");
    }

    #[test]
    fn test_glyph_cell() {
        let s = render(|out| glyph_cell(out, Rgb(1, 2, 3), Rgb(20, 20, 20), 'h'));
        assert_eq!(s, "\x1b[48;2;1;2;3m\x1b[38;2;20;20;20mh");
    }

    #[test]
    fn test_blank_and_end_line_reset_colors() {
        assert_eq!(render(|out| blank_cell(out)), "\x1b[0m ");
        assert_eq!(render(|out| end_line(out)), "\x1b[0m\r\n");
    }

    #[test]
    fn test_padding() {
        assert_eq!(render(|out| padding(out, 3)), "   ");
        assert_eq!(render(|out| padding(out, 0)), "");
    }
}
