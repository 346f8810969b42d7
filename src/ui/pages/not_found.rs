//! 404 页面

use super::heading;

/// 渲染 404 页面（日志在导航时记录，重绘不重复记录）
pub fn render() -> String {
    let mut out = heading("404");
    out.push_str("Page Not Found\n\n");
    out.push_str("Oops! The page you're looking for doesn't exist. Let's get you back on track.\n");
    out.push_str("→ Return to Prepare with `:go /`\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_back_to_prepare() {
        let text = render();
        assert!(text.contains("Page Not Found"));
        assert!(text.contains(":go /"));
    }
}
