use std::sync::Arc;

use domain_console_core::{Domain, SortMode, ViewQuery};

/// 域名页面状态
#[derive(Debug, Default)]
pub struct DomainsState {
    /// 最近一次读到的列表
    pub domains: Arc<Vec<Domain>>,
    /// 搜索文本和排序方式
    pub query: ViewQuery,
    /// 当前选中的索引（在派生视图中）
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 是否已经拿到过数据
    pub loaded: bool,
    /// 列表读取失败信息
    pub error: Option<String>,
}

impl DomainsState {
    /// 创建新的域名状态
    pub fn new(sort: SortMode) -> Self {
        Self {
            query: ViewQuery::new(sort),
            ..Self::default()
        }
    }

    /// 当前显示的记录（搜索 + 排序之后）
    pub fn view(&self) -> Vec<&Domain> {
        self.query.apply(&self.domains)
    }

    /// 获取当前选中的域名
    pub fn selected_domain(&self) -> Option<&Domain> {
        self.view().get(self.selected).copied()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.view().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.view().len().saturating_sub(1);
    }

    /// 设置域名列表
    ///
    /// 如果原选中的记录仍然可见，保持选中它。
    pub fn set_domains(&mut self, domains: Arc<Vec<Domain>>) {
        let selected_id = self.selected_domain().map(|d| d.id.clone());

        self.domains = domains;
        self.loading = false;
        self.loaded = true;
        self.error = None;

        let position = selected_id.and_then(|id| self.view().iter().position(|d| d.id == id));
        match position {
            Some(pos) => self.selected = pos,
            None => self.clamp_selection(),
        }
    }

    /// 记录读取失败（保留已有数据）
    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn search_push(&mut self, ch: char) {
        self.query.search.push(ch);
        self.selected = 0;
    }

    pub fn search_pop(&mut self) {
        self.query.search.pop();
        self.selected = 0;
    }

    pub fn search_clear(&mut self) {
        self.query.search.clear();
        self.selected = 0;
    }

    pub fn next_sort(&mut self) {
        self.query.sort = self.query.sort.next();
        self.selected = 0;
    }

    pub fn prev_sort(&mut self) {
        self.query.sort = self.query.sort.previous();
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.view().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_console_core::DomainStatus;

    fn domain(id: &str, url: &str, is_active: bool, created_date: i64) -> Domain {
        Domain {
            id: id.to_string(),
            domain: url.to_string(),
            status: DomainStatus::Pending,
            is_active,
            created_date,
        }
    }

    fn state() -> DomainsState {
        let mut state = DomainsState::new(SortMode::Newest);
        state.set_domains(Arc::new(vec![
            domain("1", "a.com", true, 100),
            domain("2", "b.com", false, 200),
            domain("3", "c.org", true, 300),
        ]));
        state
    }

    #[test]
    fn selection_follows_view_order() {
        let mut state = state();
        assert_eq!(state.selected_domain().map(|d| d.id.as_str()), Some("3"));
        state.select_last();
        assert_eq!(state.selected_domain().map(|d| d.id.as_str()), Some("1"));
        state.select_next();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn search_narrows_and_resets_selection() {
        let mut state = state();
        state.select_last();
        for ch in ".COM".chars() {
            state.search_push(ch);
        }
        let ids: Vec<_> = state.view().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn reload_keeps_selected_record() {
        let mut state = state();
        state.select_next(); // "2"
        state.set_domains(Arc::new(vec![
            domain("2", "b.com", false, 200),
            domain("4", "d.com", true, 400),
        ]));
        assert_eq!(state.selected_domain().map(|d| d.id.as_str()), Some("2"));
    }

    #[test]
    fn reload_clamps_when_selected_record_is_gone() {
        let mut state = state();
        state.select_last();
        state.set_domains(Arc::new(vec![domain("9", "z.com", true, 1)]));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_domain().map(|d| d.id.as_str()), Some("9"));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut state = DomainsState::new(SortMode::Newest);
        state.select_next();
        state.select_last();
        assert!(state.selected_domain().is_none());
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn error_keeps_previous_rows() {
        let mut state = state();
        state.loading = true;
        state.set_error("Network error: offline".to_string());
        assert!(!state.loading);
        assert_eq!(state.view().len(), 3);
    }
}
