//! 横向滚动目标计算
//!
//! 只做几何运算，动画由前端执行。
//! 返回 `None` 表示无需动画（未开启横向滚动，或目标等于当前偏移）。

use crate::state::FinderState;

/// 单列的布局几何（相对内容原点，与滚动偏移无关）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGeometry {
    /// 左边缘位置
    pub left: i64,
    /// 外宽度
    pub width: i64,
}

/// 滚动容器的几何信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollGeometry {
    /// 当前滚动偏移
    pub current: i64,
    /// 容器内宽度
    pub inner_width: i64,
    /// 各列几何，与状态中的列一一对应
    pub sections: Vec<SectionGeometry>,
}

impl ScrollGeometry {
    /// 等宽列的便捷构造
    pub fn uniform(current: i64, inner_width: i64, count: usize, column_width: i64) -> Self {
        let sections = (0..count)
            .map(|i| SectionGeometry {
                left: i64::try_from(i).unwrap_or(i64::MAX) * column_width,
                width: column_width,
            })
            .collect();
        Self {
            current,
            inner_width,
            sections,
        }
    }
}

/// 计算滚动目标
///
/// 规则：
/// - 无焦点列时目标为 0；
/// - 焦点列有前一列时，目标为前一列的左边缘（把前一列贴到容器左侧）；
/// - `last` 表示焦点列将成为最后一列，再向左收
///   `inner_width - 焦点列宽 - 前一列宽`，使右侧不留空白。
pub fn scroll_target(
    state: &FinderState,
    geometry: &ScrollGeometry,
    last: bool,
    enabled: bool,
) -> Option<i64> {
    if !enabled {
        return None;
    }

    let mut target = 0;
    if let Some(focus) = state.focus {
        if focus > 0 {
            if let (Some(prev), Some(cur)) = (
                geometry.sections.get(focus - 1),
                geometry.sections.get(focus),
            ) {
                target = prev.left;
                if last {
                    target -= geometry.inner_width - cur.width - prev.width;
                }
            }
        }
    }

    if target == geometry.current {
        None
    } else {
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Section;

    fn state_with(sections: usize, focus: Option<usize>) -> FinderState {
        let mut state = FinderState::new();
        state.sections = (0..sections)
            .map(|i| Section::new(format!("col{}", i + 1)))
            .collect();
        state.focus = focus;
        state
    }

    #[test]
    fn target_is_zero_without_focus_whatever_the_offset() {
        let state = state_with(3, None);
        let geometry = ScrollGeometry::uniform(50, 80, 3, 28);

        assert_eq!(scroll_target(&state, &geometry, false, true), Some(0));
    }

    #[test]
    fn no_animation_when_disabled() {
        let state = state_with(3, Some(2));
        let geometry = ScrollGeometry::uniform(50, 80, 3, 28);

        assert_eq!(scroll_target(&state, &geometry, false, false), None);
    }

    #[test]
    fn no_animation_when_target_equals_current() {
        // 焦点列的前一列在 28，当前偏移也是 28
        let state = state_with(3, Some(2));
        let geometry = ScrollGeometry::uniform(28, 80, 3, 28);

        assert_eq!(scroll_target(&state, &geometry, false, true), None);
    }

    #[test]
    fn target_is_previous_section_left_edge() {
        let state = state_with(4, Some(2));
        let geometry = ScrollGeometry::uniform(0, 80, 4, 28);

        assert_eq!(scroll_target(&state, &geometry, false, true), Some(28));
    }

    #[test]
    fn last_variant_removes_trailing_gap() {
        let state = state_with(3, Some(2));
        let geometry = ScrollGeometry::uniform(0, 100, 3, 30);

        // 前一列左边缘 30，再向左收 100 - 30 - 30 = 40
        assert_eq!(scroll_target(&state, &geometry, true, true), Some(-10));
    }

    #[test]
    fn focused_first_section_scrolls_home() {
        let state = state_with(3, Some(0));
        let geometry = ScrollGeometry::uniform(40, 80, 3, 28);

        assert_eq!(scroll_target(&state, &geometry, false, true), Some(0));
    }
}
