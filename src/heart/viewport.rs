//! 视口计算：限制绘制区域大小并在终端中居中

pub const MIN_COLS: usize = 48;
pub const MAX_COLS: usize = 80;
pub const MIN_ROWS: usize = 24;
pub const MAX_ROWS: usize = 30;

/// 终端尺寸不可用时的默认值
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// 单帧的绘制区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: usize,
    pub rows: usize,
    pub left_pad: usize,
    pub top_pad: usize,
}

impl Viewport {
    /// 由终端报告的尺寸计算视口（纯函数，无隐藏状态）
    ///
    /// `phrase_len` 为单行文字长度，视口会尽量留出放下它的宽度。
    pub fn compute(term_cols: u16, term_rows: u16, phrase_len: usize) -> Self {
        let (term_cols, term_rows) = normalize_size(term_cols, term_rows);

        let max_cols = MAX_COLS.min(term_cols);
        let max_rows = MAX_ROWS.min(term_rows);

        let min_cols_for_phrase = max_cols.min((phrase_len + 4).max(MIN_COLS));
        let cols = max_cols
            .min(MIN_COLS.max(min_cols_for_phrase))
            .clamp(MIN_COLS, MAX_COLS);
        let rows = max_rows
            .min(MIN_ROWS.max(max_cols * 2 / 5))
            .clamp(MIN_ROWS, MAX_ROWS);

        Self {
            cols,
            rows,
            left_pad: term_cols.saturating_sub(cols) / 2,
            top_pad: term_rows.saturating_sub(rows) / 2,
        }
    }
}

/// 尺寸为 0 时视为不可用，回退到 80×24
pub fn normalize_size(cols: u16, rows: u16) -> (usize, usize) {
    if cols == 0 || rows == 0 {
        (FALLBACK_SIZE.0 as usize, FALLBACK_SIZE.1 as usize)
    } else {
        (cols as usize, rows as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_hold_for_any_terminal() {
        for (w, h) in [(20, 10), (500, 200), (80, 24), (48, 24), (1, 1), (u16::MAX, u16::MAX)] {
            for phrase_len in [0, 8, 14, 60, 200] {
                let vp = Viewport::compute(w, h, phrase_len);
                assert!((MIN_COLS..=MAX_COLS).contains(&vp.cols), "{w}x{h}: {vp:?}");
                assert!((MIN_ROWS..=MAX_ROWS).contains(&vp.rows), "{w}x{h}: {vp:?}");
            }
        }
    }

    #[test]
    fn test_standard_terminal() {
        let vp = Viewport::compute(80, 24, 14);
        assert_eq!(vp.cols, 48);
        assert_eq!(vp.rows, 24);
        assert_eq!(vp.left_pad, 16);
        assert_eq!(vp.top_pad, 0);
    }

    #[test]
    fn test_large_terminal_is_centered() {
        let vp = Viewport::compute(500, 200, 14);
        assert_eq!(vp.cols, 48);
        assert_eq!(vp.rows, 30);
        assert_eq!(vp.left_pad, (500 - 48) / 2);
        assert_eq!(vp.top_pad, (200 - 30) / 2);
    }

    #[test]
    fn test_tiny_terminal_has_no_padding() {
        let vp = Viewport::compute(20, 10, 14);
        assert_eq!((vp.cols, vp.rows), (48, 24));
        assert_eq!((vp.left_pad, vp.top_pad), (0, 0));
    }

    #[test]
    fn test_long_phrase_widens_viewport() {
        let vp = Viewport::compute(120, 40, 60);
        assert_eq!(vp.cols, 64);
        let capped = Viewport::compute(120, 40, 200);
        assert_eq!(capped.cols, MAX_COLS);
    }

    #[test]
    fn test_zero_size_falls_back() {
        assert_eq!(Viewport::compute(0, 0, 14), Viewport::compute(80, 24, 14));
    }

    #[test]
    fn test_compute_is_pure() {
        let a = Viewport::compute(133, 41, 14);
        let b = Viewport::compute(133, 41, 14);
        assert_eq!(a, b);
    }
}
