//! 部件引擎
//!
//! [`Finder`] 持有显式状态、实例级缓存与配置，
//! 对外暴露与点击分支一一对应的状态迁移方法。
//!
//! 滚动动画与网络请求都由前端执行：迁移方法返回
//! [`StepOutcome`]（滚动请求 / 加载请求），前端在动画结束后调用
//! [`Finder::scroll_finished`]，在请求结束后调用 [`Finder::complete_load`]。
//! 依赖滚动完成的破坏性列移除因此严格排在动画之后。

use serde_json::Value;

use crate::cache::ResponseCache;
use crate::error::FinderResult;
use crate::method::{DispatchOutcome, MethodCall};
use crate::options::FinderOptions;
use crate::scroll::{self, ScrollGeometry};
use crate::state::FinderState;
use crate::types::Section;

/// 横向滚动请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// 焦点列将成为最后一列（右侧不留空白的滚动变体）
    pub last: bool,
}

/// 子节点加载请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// 请求地址
    pub url: String,
    /// 等待数据的列下标
    pub section: usize,
    /// 等待数据的列名
    pub colname: String,
}

/// 一次状态迁移对前端的全部要求
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// 需要执行的滚动（动画结束后调用 `scroll_finished`）
    pub scroll: Option<ScrollRequest>,
    /// 需要发起的子节点请求（结束后调用 `complete_load`）
    pub load: Option<LoadRequest>,
}

/// 滚动结束后才执行的后续操作
#[derive(Debug)]
enum Deferred {
    /// 移除 `keep` 之后的所有列并重算列数
    TrimAfter { keep: usize },
    /// 替换（或插入）`container` 之后的新列并解析其数据
    ReplaceColumn {
        container: usize,
        url: Option<String>,
    },
}

/// 列浏览器部件
pub struct Finder {
    state: FinderState,
    cache: ResponseCache,
    options: FinderOptions,
    deferred: Option<Deferred>,
}

impl Finder {
    /// 创建部件实例
    pub fn new(options: FinderOptions) -> Self {
        Self {
            state: FinderState::new(),
            cache: ResponseCache::new(),
            options,
            deferred: None,
        }
    }

    /// 读取当前状态
    pub fn state(&self) -> &FinderState {
        &self.state
    }

    /// 读取响应缓存
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// 读取配置
    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// 初始化
    ///
    /// 列数取 `max(1, 列个数)`，并完成一次选中标记同步。
    /// 不发起任何网络请求。重复调用会重置列状态（调用方错误，不做防护）。
    pub fn init(&mut self, sections: Vec<Section>) {
        let count = sections.len().max(1);
        self.state.sections = sections;
        self.state.focus = None;
        self.deferred = None;
        self.state.update_number_cols(count);
        self.mark_selected();
    }

    /// 选中标记同步（幂等）
    pub fn mark_selected(&mut self) {
        self.state
            .mark_selected(&*self.options.selected_predicate);
    }

    /// 设置列数
    pub fn update_number_cols(&mut self, cols: usize) {
        self.state.update_number_cols(cols);
    }

    /// 计算横向滚动目标
    ///
    /// `None` 表示无需动画（未启用，或目标等于当前偏移）。
    pub fn scroll_target(&self, geometry: &ScrollGeometry, last: bool) -> Option<i64> {
        scroll::scroll_target(&self.state, geometry, last, self.options.horizontal_scroll)
    }

    /// 点击某列的空白区域：聚焦该列
    pub fn section_click(&mut self, section: usize) -> StepOutcome {
        if section >= self.state.sections.len() {
            return StepOutcome::default();
        }
        self.state.focus_section(section);
        StepOutcome {
            scroll: Some(ScrollRequest { last: false }),
            load: None,
        }
    }

    /// 点击某个项
    ///
    /// 三个分支：重复点击已选项 / 选定叶子项 / 展开子层。
    /// 越界下标是空操作。
    pub fn item_click(&mut self, section: usize, item: usize) -> StepOutcome {
        let Some(clicked) = self.state.item(section, item) else {
            return StepOutcome::default();
        };
        if clicked.disabled {
            // 禁用项的点击只聚焦所在列
            return self.section_click(section);
        }
        let already_selected = clicked.selected;
        let has_children = clicked.has_children;
        let url = self.options.url_resolver.url(clicked);
        let target = section + 1;

        // 原生控件行为：点击先落勾选，再进入分支处理
        self.state.check_item(section, item);

        let mut outcome = StepOutcome::default();

        if already_selected {
            // 重复点击已选项：只调整焦点、清理后续列，不发请求
            if self.state.focus != Some(section) {
                self.state.focus_section(section);
            } else if target < self.state.sections.len() {
                self.state.focus_section(target);
            }
            self.state.empty_after(target);
            self.state.deselect_section(target);
            self.deferred = Some(Deferred::TrimAfter { keep: target });
            outcome.scroll = Some(ScrollRequest { last: false });
            if has_children {
                self.invoke_item_selected(section, item);
            }
        } else if !has_children {
            // 叶子项：聚焦本列，滚动结束后移除后续列
            self.state.focus_section(section);
            self.deferred = Some(Deferred::TrimAfter { keep: section });
            outcome.scroll = Some(ScrollRequest { last: true });
            self.invoke_last_child_selected(section, item);
            self.mark_selected();
        } else {
            // 展开子层
            let target_exists = target < self.state.sections.len();
            if target_exists && self.state.focus != Some(target) {
                // 目标列已存在且未聚焦：先清空并聚焦，滚动结束后再替换
                self.state.empty_from(target);
                self.state.focus_section(target);
                self.deferred = Some(Deferred::ReplaceColumn {
                    container: section,
                    url,
                });
                outcome.scroll = Some(ScrollRequest { last: true });
            } else {
                outcome = self.add_or_replace_column(section, url);
            }
            self.invoke_item_selected(section, item);
            self.mark_selected();
        }

        outcome
    }

    /// 滚动动画结束
    ///
    /// 执行点击时挂起的后续操作；动画未被触发时（目标等于当前偏移，
    /// 或未启用横向滚动）由前端立即调用。
    pub fn scroll_finished(&mut self) -> StepOutcome {
        match self.deferred.take() {
            Some(Deferred::TrimAfter { keep }) => {
                self.state.truncate_after(keep);
                let count = self.state.sections.len();
                self.state.update_number_cols(count);
                StepOutcome::default()
            }
            Some(Deferred::ReplaceColumn { container, url }) => {
                self.add_or_replace_column(container, url)
            }
            None => StepOutcome::default(),
        }
    }

    /// 子节点请求结束（成功或失败）
    ///
    /// 成功时总是写缓存（若启用）；目标列已被后续点击移除或替换时，
    /// 渲染被丢弃（忽略被超越的响应）。加载标记在两种结局下都会摘除。
    pub fn complete_load(&mut self, request: &LoadRequest, result: FinderResult<Value>) -> StepOutcome {
        let column_intact = self
            .state
            .sections
            .get(request.section)
            .is_some_and(|s| s.name == request.colname);

        if column_intact {
            if let Some(sec) = self.state.sections.get_mut(request.section) {
                sec.loading = false;
            }
        }

        match result {
            Ok(data) => {
                if self.options.cache {
                    self.cache.insert(request.url.clone(), data.clone());
                }
                if column_intact {
                    self.add_items(&data, request.section, &request.colname)
                } else {
                    log::debug!("[FINDER] dropping superseded response for {}", request.url);
                    StepOutcome::default()
                }
            }
            Err(e) => {
                log::warn!("[FINDER] loading children from {} failed: {e}", request.url);
                StepOutcome::default()
            }
        }
    }

    /// 统一入口：按方法调用分发
    pub fn dispatch(&mut self, call: MethodCall) -> DispatchOutcome {
        match call {
            MethodCall::Init { sections } => {
                self.init(sections);
                DispatchOutcome::Done
            }
            MethodCall::MarkSelected => {
                self.mark_selected();
                DispatchOutcome::Done
            }
            MethodCall::UpdateNumberCols { cols } => {
                self.update_number_cols(cols);
                DispatchOutcome::Done
            }
            MethodCall::HorzScroll { geometry, last } => {
                DispatchOutcome::ScrollTarget(self.scroll_target(&geometry, last))
            }
            MethodCall::ItemClick { section, item } => {
                DispatchOutcome::Step(self.item_click(section, item))
            }
            MethodCall::SectionClick { section } => {
                DispatchOutcome::Step(self.section_click(section))
            }
        }
    }

    // ========== 内部步骤 ==========

    /// 在 `container` 之后替换（或插入）新列，并解析其数据
    fn add_or_replace_column(&mut self, container: usize, url: Option<String>) -> StepOutcome {
        if container >= self.state.sections.len() {
            return StepOutcome::default();
        }
        let target = container + 1;
        let target_exists = target < self.state.sections.len();

        // 新列插入后没有任何列持有焦点，聚焦由后续点击重新建立
        self.state.clear_focus();

        let cols = container + 2;
        self.state.update_number_cols(cols);
        let colname = format!("col{cols}");
        let new_section = self.options.column_template.render(&colname);

        if target_exists {
            self.state.truncate_after(target);
            self.state.sections[target] = new_section;
        } else {
            self.state.sections.push(new_section);
        }

        let Some(url) = url else {
            log::warn!("[FINDER] item reports children but carries no url; {colname} left empty");
            return StepOutcome::default();
        };

        if self.options.cache {
            if let Some(cached) = self.cache.get(&url).cloned() {
                log::debug!("[FINDER] cache hit for {url}");
                return self.add_items(&cached, target, &colname);
            }
        }

        if self.options.loading {
            if let Some(sec) = self.state.sections.get_mut(target) {
                sec.loading = true;
            }
        }

        StepOutcome {
            scroll: None,
            load: Some(LoadRequest {
                url,
                section: target,
                colname,
            }),
        }
    }

    /// 渲染子节点数据到指定列
    fn add_items(&mut self, data: &Value, section: usize, colname: &str) -> StepOutcome {
        let mut payload = data.clone();
        if let Value::Object(map) = &mut payload {
            map.insert("colname".to_string(), Value::String(colname.to_string()));
        }

        let items = self.options.item_template.render(&payload);
        if let Some(sec) = self.state.sections.get_mut(section) {
            sec.items = items;
            if let Some(cb) = &self.options.items_added_callback {
                cb(&sec.items);
            }
        }

        StepOutcome {
            scroll: Some(ScrollRequest { last: false }),
            load: None,
        }
    }

    fn invoke_item_selected(&self, section: usize, item: usize) {
        if let Some(cb) = &self.options.item_selected_callback {
            if let Some(it) = self.state.item(section, item) {
                cb(it);
            }
        }
    }

    fn invoke_last_child_selected(&self, section: usize, item: usize) {
        if let Some(cb) = &self.options.last_child_selected_callback {
            if let Some(it) = self.state.item(section, item) {
                cb(it);
            }
        }
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new(FinderOptions::default())
    }
}
