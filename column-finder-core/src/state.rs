//! 显式导航状态
//!
//! 列序列、焦点与列数以普通数据形式持有，
//! 状态迁移是纯函数，不与任何渲染宿主耦合。

use crate::types::{Item, Section};

/// 浏览器的全部可见状态
///
/// 焦点用下标表示，天然保证同一时刻至多一列持有焦点。
#[derive(Debug, Default)]
pub struct FinderState {
    /// 有序的列序列
    pub sections: Vec<Section>,
    /// 当前焦点列（可能没有）
    pub focus: Option<usize>,
    /// 列数（对外可见的布局属性）
    pub cols: usize,
}

impl FinderState {
    /// 创建空状态
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            focus: None,
            cols: 1,
        }
    }

    /// 读取某个项
    pub fn item(&self, section: usize, item: usize) -> Option<&Item> {
        self.sections.get(section).and_then(|s| s.items.get(item))
    }

    /// 设置列数
    ///
    /// 每次列结构变更后调用。
    pub fn update_number_cols(&mut self, cols: usize) {
        self.cols = cols;
    }

    /// 让某列获得焦点（其余列随之失去焦点）
    pub fn focus_section(&mut self, section: usize) {
        self.focus = Some(section);
    }

    /// 清除焦点
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// 勾选某个项（列内单选语义：兄弟项取消勾选）
    pub fn check_item(&mut self, section: usize, item: usize) {
        if let Some(sec) = self.sections.get_mut(section) {
            if item < sec.items.len() {
                for (i, it) in sec.items.iter_mut().enumerate() {
                    it.checked = i == item;
                }
            }
        }
    }

    /// 选中标记同步：`selected` 跟随勾选谓词
    ///
    /// 幂等：连续调用两次与调用一次结果相同。
    pub fn mark_selected(&mut self, predicate: &dyn Fn(&Item) -> bool) {
        for section in &mut self.sections {
            for item in &mut section.items {
                let on = predicate(item);
                item.selected = on;
                item.checked = on;
            }
        }
    }

    /// 清空严格位于 `after` 之后的所有列的内容（列本身保留）
    pub fn empty_after(&mut self, after: usize) {
        for section in self.sections.iter_mut().skip(after.saturating_add(1)) {
            section.clear_items();
        }
    }

    /// 清空从 `from` 起（含 `from`）的所有列的内容
    pub fn empty_from(&mut self, from: usize) {
        for section in self.sections.iter_mut().skip(from) {
            section.clear_items();
        }
    }

    /// 取消某列所有项的勾选与选中
    pub fn deselect_section(&mut self, section: usize) {
        if let Some(sec) = self.sections.get_mut(section) {
            sec.deselect_all();
        }
    }

    /// 移除严格位于 `keep` 之后的所有列
    pub fn truncate_after(&mut self, keep: usize) {
        let end = keep.saturating_add(1);
        if end < self.sections.len() {
            self.sections.truncate(end);
        }
    }
}
