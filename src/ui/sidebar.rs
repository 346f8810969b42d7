//! 侧边栏导航

/// 导航项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// 固定的导航项
pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        title: "About",
        url: "/about",
        description: "Learn about the RAG pipeline",
    },
    NavItem {
        title: "Prepare",
        url: "/",
        description: "Ask coding interview questions",
    },
];

/// 导航项是否处于激活状态
///
/// `/` 只在当前路径恰好为 `/` 时激活，其它项按前缀匹配
pub fn is_active(item_url: &str, current_path: &str) -> bool {
    if item_url == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(item_url)
    }
}

/// 侧边栏
#[derive(Debug, Clone, Copy, Default)]
pub struct Sidebar {
    pub collapsed: bool,
}

impl Sidebar {
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// 渲染侧边栏，折叠时只显示标记
    pub fn render(&self, current_path: &str) -> String {
        let mut out = String::new();

        if self.collapsed {
            out.push_str("[◆]\n");
            for item in NAV_ITEMS {
                let marker = if is_active(item.url, current_path) { "▶" } else { "·" };
                out.push_str(&format!(" {}\n", marker));
            }
            return out;
        }

        out.push_str("◆ CodePrep AI\n  Interview Assistant\n\n");
        out.push_str("NAVIGATION\n");
        for item in NAV_ITEMS {
            let marker = if is_active(item.url, current_path) { "▶" } else { " " };
            out.push_str(&format!(
                "{} {:<8} {:<7} {}\n",
                marker, item.title, item.url, item.description
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_only_active_on_exact_match() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
        assert!(!is_active("/", "/missing"));
    }

    #[test]
    fn test_prefix_match_for_other_items() {
        assert!(is_active("/about", "/about"));
        assert!(is_active("/about", "/about/pipeline"));
        assert!(!is_active("/about", "/"));
        assert!(!is_active("/about", "/abou"));
    }

    #[test]
    fn test_render_marks_active_item() {
        let sidebar = Sidebar::new(false);
        let text = sidebar.render("/about");
        assert!(text.contains("CodePrep AI"));
        assert!(text.contains("▶ About"));
        assert!(text.contains("  Prepare"));
    }

    #[test]
    fn test_collapsed_hides_titles() {
        let mut sidebar = Sidebar::new(false);
        sidebar.toggle();
        let text = sidebar.render("/");
        assert!(!text.contains("About"));
        assert!(!text.contains("Ask coding interview questions"));
        assert_eq!(text.matches('▶').count(), 1);
    }
}
