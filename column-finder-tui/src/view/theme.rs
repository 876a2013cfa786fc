//! 主题和样式定义

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub loading: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            loading: Color::Rgb(206, 145, 120),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            loading: Color::Rgb(176, 136, 0),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 状态栏快捷键样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Rgb(0, 122, 204))
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(128, 128, 128))
    }

    /// 状态栏底色
    pub fn statusbar() -> Style {
        Style::default().bg(Color::Rgb(30, 30, 30))
    }
}
