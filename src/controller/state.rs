//! 查询状态
//!
//! 问题文本、答案与请求状态三者相互独立：新请求在途或失败时，
//! 上一次的答案仍然保留

use std::fmt::Display;

use crate::models::Answer;

/// 请求编号，按发出顺序递增
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 请求状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    /// 空闲，没有在途请求
    #[default]
    Idle,
    /// 请求在途
    Loading(RequestId),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading(_))
    }
}

/// 控制器持有的全部可变状态
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    query: String,
    answer: Option<Answer>,
    request: RequestState,
    issued: u64,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前问题
    pub fn query(&self) -> &str {
        &self.query
    }

    /// 最近一次成功获取的答案
    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    pub fn request(&self) -> RequestState {
        self.request
    }

    /// 已发出的请求数量
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// 无条件替换问题文本
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// 问题去掉首尾空白后非空，且没有在途请求
    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty() && !self.request.is_loading()
    }

    /// Idle → Loading，分配新的请求编号
    ///
    /// 不满足 `can_submit` 时返回 `None`，状态不变
    pub(crate) fn begin_request(&mut self) -> Option<RequestId> {
        if !self.can_submit() {
            return None;
        }
        self.issued += 1;
        let id = RequestId(self.issued);
        self.request = RequestState::Loading(id);
        Some(id)
    }

    /// Loading → Idle，并覆盖答案
    pub(crate) fn finish_success(&mut self, id: RequestId, text: String) {
        debug_assert_eq!(self.request, RequestState::Loading(id));
        self.answer = Some(Answer::new(text));
        self.request = RequestState::Idle;
    }

    /// Loading → Idle，答案保持不变
    pub(crate) fn finish_failure(&mut self, id: RequestId) {
        debug_assert_eq!(self.request, RequestState::Loading(id));
        self.request = RequestState::Idle;
    }
}
