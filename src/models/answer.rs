use chrono::{DateTime, Local};

/// 最近一次成功获取的答案
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// 答案文本
    pub text: String,
    /// 收到答案的本地时间
    pub received_at: DateTime<Local>,
}

impl Answer {
    /// 以当前时间创建答案
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            received_at: Local::now(),
        }
    }
}
