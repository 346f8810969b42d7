//! 查询交互控制器
//!
//! 流程：set_query / select_sample → submit → 更新答案或保留旧答案

use tracing::{debug, error, info};

use crate::clients::AnswerSource;
use crate::controller::state::{QueryState, RequestState};
use crate::error::{AppError, AppResult, AskError};
use crate::logger::truncate_text;
use crate::models::{Answer, SAMPLE_QUESTIONS};

/// 一次 `submit` 的结果
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 收到答案并已更新
    Answered,
    /// 请求失败，已记录日志，答案未变
    Failed(AskError),
    /// 不满足提交条件，没有发出请求
    Skipped,
}

/// 查询交互控制器
///
/// - 持有问题、答案、请求状态
/// - 只依赖 `AnswerSource` 能力
/// - `submit` 在整个请求期间独占 `&mut self`，同一控制器上无法并发提交
pub struct QueryController<S: AnswerSource> {
    source: S,
    state: QueryState,
}

impl<S: AnswerSource> QueryController<S> {
    /// 创建新的控制器，初始问题为空、没有答案
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: QueryState::new(),
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    pub fn answer(&self) -> Option<&Answer> {
        self.state.answer()
    }

    pub fn request_state(&self) -> RequestState {
        self.state.request()
    }

    /// 提交按钮是否可用
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// 无条件替换问题文本，不做校验
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.set_query(text);
    }

    /// 选中示例问题，等同于 `set_query`，不会触发提交
    pub fn select_sample(&mut self, text: impl Into<String>) {
        self.set_query(text);
    }

    /// 按编号（从 1 开始）选中示例问题
    pub fn select_sample_at(&mut self, index: usize) -> AppResult<&'static str> {
        let sample = index
            .checked_sub(1)
            .and_then(|i| SAMPLE_QUESTIONS.get(i))
            .copied()
            .ok_or(AppError::SampleOutOfRange {
                index,
                max: SAMPLE_QUESTIONS.len(),
            })?;
        self.select_sample(sample);
        Ok(sample)
    }

    /// 提交当前问题
    ///
    /// 问题为空白或已有请求在途时不发请求。否则恰好发出一次请求，
    /// 无论成功失败最终都回到 `Idle`
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(id) = self.state.begin_request() else {
            debug!("提交条件不满足，忽略本次提交");
            return SubmitOutcome::Skipped;
        };

        // 原样发送，不做 trim
        let query = self.state.query().to_string();
        info!("[请求 {}] 📤 提交问题: {}", id, truncate_text(&query, 80));

        match self.source.ask(&query).await {
            Ok(text) => {
                info!(
                    "[请求 {}] ✓ 收到答案 ({} 字符)",
                    id,
                    text.chars().count()
                );
                self.state.finish_success(id, text);
                SubmitOutcome::Answered
            }
            Err(e) => {
                error!("[请求 {}] ⚠️ 获取答案失败: {}", id, e);
                self.state.finish_failure(id);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
