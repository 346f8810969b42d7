//! 展示层
//!
//! 路由、侧边栏以及各页面的文本渲染。只读取控制器状态，不发请求

pub mod pages;
pub mod router;
pub mod sidebar;

pub use router::Route;
pub use sidebar::Sidebar;
