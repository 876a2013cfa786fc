//! 列表项定义

/// 列中的一个可选项
///
/// `checked` 是控件本身的勾选状态（单选语义），
/// `selected` 是完成标记同步后的选中标记。
/// 两者在每次结构变更后由 `mark_selected` 重新对齐。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// 唯一标识
    pub id: String,
    /// 显示文本
    pub label: String,
    /// 控件勾选状态
    pub checked: bool,
    /// 选中标记
    pub selected: bool,
    /// 是否禁用（点击只聚焦所在列）
    pub disabled: bool,
    /// 是否有子节点
    pub has_children: bool,
    /// 子节点请求地址（仅在 `has_children` 时存在）
    pub url: Option<String>,
}

impl Item {
    /// 创建叶子项
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
            selected: false,
            disabled: false,
            has_children: false,
            url: None,
        }
    }

    /// 标记为有子节点，并记录子节点地址
    #[must_use]
    pub fn with_children(mut self, url: impl Into<String>) -> Self {
        self.has_children = true;
        self.url = Some(url.into());
        self
    }

    /// 创建时即为勾选状态
    #[must_use]
    pub fn with_checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// 创建时即为禁用状态
    #[must_use]
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
