//! 应用主状态结构

use std::sync::Arc;

use ratatui::layout::Rect;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedReceiver;

use column_finder_core::traits::ItemTemplate;
use column_finder_core::{
    Finder, FinderOptions, FinderState, Item, ScrollGeometry, Section,
};

use crate::backend::{AppConfig, ChildService};
use crate::message::AppMessage;
use crate::view::layout::{self, COLUMN_WIDTH};

use super::ScrollState;

/// 键盘光标位置（列 + 项）
#[derive(Debug, Default, Clone, Copy)]
pub struct Cursor {
    /// 光标所在列
    pub section: usize,
    /// 光标所在项
    pub item: usize,
}

impl Cursor {
    /// 把光标收回合法范围（列结构变化后调用）
    pub fn clamp(&mut self, state: &FinderState) {
        if state.sections.is_empty() {
            self.section = 0;
            self.item = 0;
            return;
        }
        self.section = self.section.min(state.sections.len() - 1);
        let len = state.sections[self.section].items.len();
        self.item = if len == 0 { 0 } else { self.item.min(len - 1) };
    }

    /// 左移一列
    pub fn move_left(&mut self, state: &FinderState) {
        self.section = self.section.saturating_sub(1);
        self.clamp(state);
    }

    /// 右移一列
    pub fn move_right(&mut self, state: &FinderState) {
        self.section = self.section.saturating_add(1);
        self.clamp(state);
    }

    /// 上移一项
    pub fn move_up(&mut self) {
        self.item = self.item.saturating_sub(1);
    }

    /// 下移一项
    pub fn move_down(&mut self, state: &FinderState) {
        self.item = self.item.saturating_add(1);
        self.clamp(state);
    }
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 列浏览器引擎
    pub finder: Finder,

    /// 横向滚动状态（偏移 + 进行中的动画）
    pub scroll: ScrollState,

    /// 键盘光标
    pub cursor: Cursor,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 最近一帧的终端区域
    pub frame_area: Rect,

    /// 子节点加载服务
    pub children: ChildService,

    /// 异步消息入口（加载结果、回调通知）
    pub messages: UnboundedReceiver<AppMessage>,
}

impl App {
    /// 创建应用实例
    ///
    /// `root` 是启动时取到的根层数据，渲染为第一列。
    pub fn new(
        config: &AppConfig,
        children: ChildService,
        messages: UnboundedReceiver<AppMessage>,
        root: &Value,
    ) -> Self {
        let status_tx = children.sender();
        let added_tx = children.sender();

        let options = FinderOptions {
            horizontal_scroll: config.horizontal_scroll,
            loading: config.loading,
            cache: config.cache,
            last_child_selected_callback: Some(Arc::new(move |item: &Item| {
                let _ = status_tx.send(AppMessage::Status(format!("Selected: {}", item.label)));
            })),
            items_added_callback: Some(Arc::new(move |items: &[Item]| {
                let _ = added_tx.send(AppMessage::Status(format!("{} items loaded", items.len())));
            })),
            ..FinderOptions::default()
        };

        let mut finder = Finder::new(options);
        let items = column_finder_core::traits::JsonItemTemplate.render(root);
        finder.init(vec![Section::with_items("col1", items)]);

        Self {
            should_quit: false,
            finder,
            scroll: ScrollState::new(),
            cursor: Cursor::default(),
            status_message: None,
            frame_area: Rect::new(0, 0, 80, 24),
            children,
            messages,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前帧下的滚动容器几何
    pub fn scroll_geometry(&self) -> ScrollGeometry {
        let inner = layout::finder_area(self.frame_area);
        ScrollGeometry::uniform(
            self.scroll.offset,
            i64::from(inner.width),
            self.finder.state().sections.len(),
            i64::from(COLUMN_WIDTH),
        )
    }

    /// 滚动偏移上限（内容宽度超出视口的部分）
    pub fn max_scroll(&self) -> i64 {
        let inner = layout::finder_area(self.frame_area);
        let count = i64::try_from(self.finder.state().sections.len()).unwrap_or(i64::MAX);
        let content = count.saturating_mul(i64::from(COLUMN_WIDTH));
        (content - i64::from(inner.width)).max(0)
    }
}
