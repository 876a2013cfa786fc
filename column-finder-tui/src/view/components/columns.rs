//! 列区域组件
//!
//! 按滚动偏移横向排布各列，视口外的列不渲染，
//! 边缘的列按可见部分裁剪。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use column_finder_core::{Item, Section};

use crate::model::App;
use crate::view::layout::COLUMN_WIDTH;
use crate::view::theme::colors;

/// 渲染列区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.finder.state();

    for (index, section) in state.sections.iter().enumerate() {
        let index_i64 = i64::try_from(index).unwrap_or(i64::MAX);
        let left = index_i64 * i64::from(COLUMN_WIDTH) - app.scroll.offset;
        let right = left + i64::from(COLUMN_WIDTH);
        if right <= 0 || left >= i64::from(area.width) {
            continue;
        }

        let x0 = left.max(0);
        let width = right.min(i64::from(area.width)) - x0;
        if width < 3 {
            continue;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rect = Rect::new(area.x + x0 as u16, area.y, width as u16, area.height);
        render_section(app, frame, rect, index, section);
    }
}

/// 渲染单列
fn render_section(app: &App, frame: &mut Frame, area: Rect, index: usize, section: &Section) {
    let c = colors();
    let is_focused = app.finder.state().focus == Some(index);

    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {} ", section.name))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if section.loading {
        let loading = Paragraph::new(Line::from(Span::styled(
            " Loading…",
            Style::default().fg(c.loading),
        )));
        frame.render_widget(loading, inner);
        return;
    }

    let label_width = usize::from(inner.width.saturating_sub(6));
    let under_cursor = app.cursor.section == index;

    let items: Vec<ListItem> = section
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let content = format!(
                "{} {}{}",
                marker(item),
                truncate_label(&item.label, label_width),
                if item.has_children { " ▸" } else { "" }
            );

            let style = if item.selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else if item.disabled {
                Style::default().fg(c.muted)
            } else {
                Style::default().fg(c.fg)
            };

            let style = if under_cursor && i == app.cursor.item {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

/// 单选标记
fn marker(item: &Item) -> &'static str {
    if item.checked {
        "(●)"
    } else {
        "( )"
    }
}

/// 按显示宽度截断文本，超出部分以省略号结尾
fn truncate_label(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_label_keeps_short_text() {
        assert_eq!(truncate_label("Jazz", 20), "Jazz");
    }

    #[test]
    fn truncate_label_ends_long_text_with_ellipsis() {
        let out = truncate_label("A very long label indeed", 10);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 10);
    }

    #[test]
    fn truncate_label_counts_wide_characters() {
        let out = truncate_label("目录导航测试文本", 8);
        assert!(out.ends_with('…'));
    }
}
