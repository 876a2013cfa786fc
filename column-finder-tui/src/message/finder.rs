//! 列浏览器相关消息

use serde_json::Value;

use column_finder_core::{FinderResult, LoadRequest};

/// 列浏览器消息
#[derive(Debug)]
pub enum FinderMessage {
    /// 点击某个项
    ItemClick {
        /// 列下标
        section: usize,
        /// 项下标
        item: usize,
    },

    /// 点击某列的空白区域
    SectionClick {
        /// 列下标
        section: usize,
    },

    /// 光标左移一列
    CursorLeft,
    /// 光标右移一列
    CursorRight,
    /// 光标上移一项
    CursorUp,
    /// 光标下移一项
    CursorDown,
    /// 激活光标所在项（等价于点击）
    Activate,

    /// 滚动动画结束
    ScrollFinished,

    /// 子节点请求结束
    ChildrenLoaded {
        /// 对应的加载请求
        request: LoadRequest,
        /// 请求结果
        result: FinderResult<Value>,
    },
}
