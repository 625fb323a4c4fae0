//! 文字排布：选行、找最长内部区段、居中放置

use crate::models::Message;

/// 行内连续的内部区段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

/// 某一行上要绘制的文字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow<'a> {
    pub row: usize,
    pub text: &'a str,
}

/// 已确定起始列的文字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedText<'a> {
    pub row: usize,
    pub text: &'a str,
    pub start: usize,
}

impl PlacedText<'_> {
    /// 第 col 列对应的字符（不在文字范围内则为 None）
    pub fn char_at(&self, col: usize) -> Option<char> {
        col.checked_sub(self.start)
            .and_then(|offset| self.text.chars().nth(offset))
    }
}

/// 选择文字所在的行
///
/// 宽度足够时单行放整句，否则上下两行各放一个词。
pub fn pick_text_rows<'a>(message: &'a Message, cols: usize, rows: usize) -> Vec<TextRow<'a>> {
    if cols >= message.single_len() + 4 {
        vec![TextRow {
            row: rows * 52 / 100,
            text: &message.single,
        }]
    } else {
        [rows * 46 / 100, rows * 6 / 10]
            .into_iter()
            .zip(message.split.iter())
            .map(|(row, word)| TextRow { row, text: word })
            .collect()
    }
}

/// 从左到右贪心扫描，返回最长的连续 true 区段（长度相同取靠左者）
pub fn longest_run(mask: &[bool]) -> Run {
    let mut best = Run::default();
    let mut current: Option<usize> = None;

    for (col, &inside) in mask.iter().enumerate() {
        match (inside, current) {
            (true, None) => current = Some(col),
            (false, Some(start)) => {
                if col - start > best.len {
                    best = Run {
                        start,
                        len: col - start,
                    };
                }
                current = None;
            }
            _ => {}
        }
    }

    // 延伸到行尾的区段
    if let Some(start) = current {
        if mask.len() - start > best.len {
            best = Run {
                start,
                len: mask.len() - start,
            };
        }
    }

    best
}

/// 计算文字起始列
///
/// 优先在最长内部区段中居中；区段太短时在整行居中；
/// 整行也放不下则不绘制。
pub fn place_text(run: Run, text_len: usize, cols: usize) -> Option<usize> {
    if run.len >= text_len + 2 {
        Some(run.start + (run.len - text_len) / 2)
    } else if cols >= text_len + 2 {
        Some((cols - text_len) / 2)
    } else {
        None
    }
}

/// 对选中的行逐一定位文字，`row_mask` 给出该行的内外判定
pub fn layout_text<'a, F>(
    message: &'a Message,
    cols: usize,
    rows: usize,
    mut row_mask: F,
) -> Vec<PlacedText<'a>>
where
    F: FnMut(usize) -> Vec<bool>,
{
    pick_text_rows(message, cols, rows)
        .into_iter()
        .filter_map(|TextRow { row, text }| {
            let run = longest_run(&row_mask(row));
            place_text(run, text.chars().count(), cols).map(|start| PlacedText { row, text, start })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(single: &str) -> Message {
        Message {
            single: single.to_string(),
            split: vec!["happy".to_string(), "birthday".to_string()],
        }
    }

    fn mask(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '#').collect()
    }

    #[test]
    fn test_single_row_when_wide_enough() {
        let msg = message("happy birthday");
        let rows = pick_text_rows(&msg, 48, 24);
        assert_eq!(rows, vec![TextRow { row: 12, text: "happy birthday" }]);

        // 恰好等于长度 + 4 也算放得下
        let rows = pick_text_rows(&msg, 18, 24);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_two_rows_when_narrow() {
        let msg = message("a phrase that is much too long for the viewport width");
        let cols = 48;
        assert!(cols < msg.single_len() + 4);

        let rows = pick_text_rows(&msg, cols, 30);
        assert_eq!(
            rows,
            vec![
                TextRow { row: 13, text: "happy" },
                TextRow { row: 18, text: "birthday" },
            ]
        );
    }

    #[test]
    fn test_longest_run_basic() {
        assert_eq!(longest_run(&mask("..###..#####..")), Run { start: 7, len: 5 });
        assert_eq!(longest_run(&mask("......")), Run { start: 0, len: 0 });
        assert_eq!(longest_run(&mask("######")), Run { start: 0, len: 6 });
    }

    #[test]
    fn test_longest_run_reaching_last_column() {
        assert_eq!(longest_run(&mask("##....####")), Run { start: 6, len: 4 });
    }

    #[test]
    fn test_longest_run_tie_keeps_leftmost() {
        assert_eq!(longest_run(&mask(".###.###.")), Run { start: 1, len: 3 });
    }

    #[test]
    fn test_place_text_in_run() {
        let run = Run { start: 10, len: 20 };
        assert_eq!(place_text(run, 14, 48), Some(13));
        // 边界：区段长度正好是文字长度 + 2
        assert_eq!(place_text(Run { start: 4, len: 10 }, 8, 48), Some(5));
    }

    #[test]
    fn test_place_text_falls_back_to_row_center() {
        // 48 列视口，唯一的内部区段长度为 3，文字长度为 8
        let run = Run { start: 22, len: 3 };
        assert_eq!(place_text(run, 8, 48), Some(20));
    }

    #[test]
    fn test_place_text_none_when_nothing_fits() {
        let run = Run { start: 2, len: 3 };
        assert_eq!(place_text(run, 8, 9), None);
        assert_eq!(place_text(Run::default(), 14, 15), None);
    }

    #[test]
    fn test_layout_text_skips_rows_without_room() {
        let msg = message("happy birthday");
        let placed = layout_text(&msg, 48, 24, |_| vec![false; 48]);
        // 没有内部区段，但整行宽度足够
        assert_eq!(placed, vec![PlacedText { row: 12, text: "happy birthday", start: 17 }]);

        let narrow = Message {
            single: "x".repeat(60),
            split: vec!["a".repeat(47), "b".repeat(10)],
        };
        let placed = layout_text(&narrow, 48, 24, |_| vec![false; 48]);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].text, "bbbbbbbbbb");
    }

    #[test]
    fn test_char_at() {
        let placed = PlacedText { row: 0, text: "love", start: 5 };
        assert_eq!(placed.char_at(4), None);
        assert_eq!(placed.char_at(5), Some('l'));
        assert_eq!(placed.char_at(8), Some('e'));
        assert_eq!(placed.char_at(9), None);
    }
}
