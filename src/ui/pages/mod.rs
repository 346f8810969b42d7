pub mod about;
pub mod not_found;
pub mod prepare;

/// 页面标题，下方加一条同宽分隔线
pub(crate) fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

/// 卡片小节标题
pub(crate) fn section(title: &str) -> String {
    format!("\n── {} ──\n", title)
}
