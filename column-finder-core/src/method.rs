//! 方法调度
//!
//! 统一入口以操作名（或省略操作名）调用部件：
//! 省略视为初始化，未知名称报 [`FinderError::UnknownMethod`]，不会 panic。

use crate::error::{FinderError, FinderResult};
use crate::finder::StepOutcome;
use crate::scroll::ScrollGeometry;
use crate::types::Section;

/// 可调度的方法名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// 初始化
    Init,
    /// 选中标记同步
    MarkSelected,
    /// 设置列数
    UpdateNumberCols,
    /// 计算横向滚动目标
    HorzScroll,
    /// 点击项
    ItemClick,
    /// 点击列空白区域
    SectionClick,
}

impl Method {
    /// 解析操作名
    ///
    /// `None`（省略操作名）等价于初始化。
    pub fn parse(name: Option<&str>) -> FinderResult<Self> {
        match name {
            None | Some("init") => Ok(Self::Init),
            Some("mark_selected") => Ok(Self::MarkSelected),
            Some("update_number_cols") => Ok(Self::UpdateNumberCols),
            Some("horz_scroll") => Ok(Self::HorzScroll),
            Some("item_click") => Ok(Self::ItemClick),
            Some("section_click") => Ok(Self::SectionClick),
            Some(other) => Err(FinderError::UnknownMethod(other.to_string())),
        }
    }

    /// 方法的对外名称
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::MarkSelected => "mark_selected",
            Self::UpdateNumberCols => "update_number_cols",
            Self::HorzScroll => "horz_scroll",
            Self::ItemClick => "item_click",
            Self::SectionClick => "section_click",
        }
    }
}

/// 带参数的方法调用
#[derive(Debug)]
pub enum MethodCall {
    /// 初始化
    Init {
        /// 初始列
        sections: Vec<Section>,
    },
    /// 选中标记同步
    MarkSelected,
    /// 设置列数
    UpdateNumberCols {
        /// 新列数
        cols: usize,
    },
    /// 计算横向滚动目标
    HorzScroll {
        /// 滚动容器几何
        geometry: ScrollGeometry,
        /// 焦点列将成为最后一列
        last: bool,
    },
    /// 点击项
    ItemClick {
        /// 列下标
        section: usize,
        /// 项下标
        item: usize,
    },
    /// 点击列空白区域
    SectionClick {
        /// 列下标
        section: usize,
    },
}

impl MethodCall {
    /// 调用对应的方法名
    pub fn method(&self) -> Method {
        match self {
            Self::Init { .. } => Method::Init,
            Self::MarkSelected => Method::MarkSelected,
            Self::UpdateNumberCols { .. } => Method::UpdateNumberCols,
            Self::HorzScroll { .. } => Method::HorzScroll,
            Self::ItemClick { .. } => Method::ItemClick,
            Self::SectionClick { .. } => Method::SectionClick,
        }
    }
}

/// 调度结果
#[derive(Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// 状态迁移结果
    Step(StepOutcome),
    /// 滚动目标（`None` 表示无需动画）
    ScrollTarget(Option<i64>),
    /// 无返回值的方法已执行
    Done,
}
