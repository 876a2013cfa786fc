//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use column_finder_core::FinderState;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FinderMessage};
use crate::model::App;
use crate::view::layout::{self, COLUMN_WIDTH};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        // 终端窗口大小改变，自动重绘
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }

    match key.code {
        // ← 或 h: 左移一列
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Finder(FinderMessage::CursorLeft),
        // → 或 l: 右移一列
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Finder(FinderMessage::CursorRight),
        // ↑ 或 k: 上移一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Finder(FinderMessage::CursorUp),
        // ↓ 或 j: 下移一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Finder(FinderMessage::CursorDown),
        // Enter 或空格: 激活光标所在项
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::Finder(FinderMessage::Activate),
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return AppMessage::Noop;
    }

    let area = layout::finder_area(app.frame_area);
    hit_test(
        area,
        app.scroll.offset,
        app.finder.state(),
        mouse.column,
        mouse.row,
    )
}

/// 把列区域内的坐标换算成列/项下标
///
/// 项区域从列边框内第一行开始；点到边框或项列表之外算列的空白区域。
fn hit_test(area: Rect, offset: i64, state: &FinderState, x: u16, y: u16) -> AppMessage {
    if !area.contains(Position::new(x, y)) {
        return AppMessage::Noop;
    }

    let content_x = i64::from(x - area.x) + offset;
    if content_x < 0 {
        return AppMessage::Noop;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let section = (content_x / i64::from(COLUMN_WIDTH)) as usize;
    if section >= state.sections.len() {
        return AppMessage::Noop;
    }

    let row = y - area.y;
    if row == 0 || row + 1 >= area.height {
        // 上下边框
        return AppMessage::Finder(FinderMessage::SectionClick { section });
    }

    let item = usize::from(row - 1);
    if item < state.sections[section].items.len() {
        AppMessage::Finder(FinderMessage::ItemClick { section, item })
    } else {
        AppMessage::Finder(FinderMessage::SectionClick { section })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use column_finder_core::{Item, Section};

    fn state() -> FinderState {
        let mut state = FinderState::new();
        state.sections = vec![
            Section::with_items("col1", vec![Item::new("a1", "Alpha"), Item::new("a2", "Beta")]),
            Section::with_items("col2", vec![Item::new("b1", "Gamma")]),
        ];
        state
    }

    #[test]
    fn click_on_an_item_row_maps_to_its_indices() {
        let area = Rect::new(0, 1, 80, 20);
        // 第二列（x=30 落在 28..56），边框下第二行
        let msg = hit_test(area, 0, &state(), 30, 3);

        match msg {
            AppMessage::Finder(FinderMessage::ItemClick { section, item }) => {
                assert_eq!(section, 1);
                assert_eq!(item, 1 /* row 3 - area.y 1 - border 1 */);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn click_accounts_for_the_scroll_offset() {
        let area = Rect::new(0, 1, 80, 20);
        // 偏移 28 后，x=5 命中第二列
        let msg = hit_test(area, 28, &state(), 5, 2);

        match msg {
            AppMessage::Finder(FinderMessage::ItemClick { section, item }) => {
                assert_eq!(section, 1);
                assert_eq!(item, 0);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn click_below_the_items_is_a_section_click() {
        let area = Rect::new(0, 1, 80, 20);
        let msg = hit_test(area, 0, &state(), 2, 10);

        assert!(matches!(
            msg,
            AppMessage::Finder(FinderMessage::SectionClick { section: 0 })
        ));
    }

    #[test]
    fn click_outside_the_columns_is_ignored() {
        let area = Rect::new(0, 1, 80, 20);
        // 两列共 56 宽，x=70 在列之外
        let msg = hit_test(area, 0, &state(), 70, 2);
        assert!(matches!(msg, AppMessage::Noop));

        // 列区域之外
        let msg = hit_test(area, 0, &state(), 2, 0);
        assert!(matches!(msg, AppMessage::Noop));
    }
}
