//! 提问页
//!
//! 输入框、提交按钮、示例问题、答案面板和提示卡片

use super::{heading, section};
use crate::controller::QueryState;
use crate::models::SAMPLE_QUESTIONS;

/// 请求在途时的提交按钮
pub const LOADING_INDICATOR: &str = "[ ⏳ Analyzing... ] (disabled)";

const PLACEHOLDER: &str = "e.g., How do I implement a binary search tree?";

const TIPS: [(&str, &str); 3] = [
    (
        "💡 Pro Tip",
        "Be specific in your questions. Instead of \"sorting\", ask \"when should I use quicksort vs mergesort?\"",
    ),
    (
        "🎯 Focus Areas",
        "Ask about time complexity, edge cases, and alternative approaches to deepen your understanding.",
    ),
    (
        "📚 Study Method",
        "Use this tool to clarify concepts, then practice implementing the solutions on your own.",
    ),
];

/// 提交按钮
///
/// 请求在途时显示 "Analyzing..."；不可提交时标记为禁用
pub fn render_submit_control(state: &QueryState) -> String {
    if state.request().is_loading() {
        LOADING_INDICATOR.to_string()
    } else if state.can_submit() {
        "[ ✨ Get Answer ]".to_string()
    } else {
        "[ ✨ Get Answer ] (disabled)".to_string()
    }
}

pub fn render(state: &QueryState) -> String {
    let mut out = heading("Interview Preparation Assistant");
    out.push_str(
        "Ask any coding interview question and get detailed explanations powered by \
         \"Cracking the Coding Interview\"\n",
    );

    out.push_str(&section("Ask Your Question"));
    if state.query().is_empty() {
        out.push_str(&format!("> ({})\n", PLACEHOLDER));
    } else {
        out.push_str(&format!("> {}\n", state.query()));
    }
    out.push_str(&render_submit_control(state));
    out.push('\n');

    out.push_str(&section("Try These Sample Questions"));
    for (i, sample) in SAMPLE_QUESTIONS.iter().enumerate() {
        out.push_str(&format!("  [{}] {}\n", i + 1, sample));
    }

    if let Some(answer) = state.answer() {
        out.push_str(&section(&format!(
            "Answer · Generated by RAG · {}",
            answer.received_at.format("%H:%M:%S")
        )));
        out.push_str(&answer.text);
        out.push('\n');
    }

    for (title, body) in TIPS {
        out.push_str(&section(title));
        out.push_str(body);
        out.push('\n');
    }
    out
}
