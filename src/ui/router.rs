/// 页面路由
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/` 提问页
    #[default]
    Prepare,
    /// `/about` 流程介绍页
    About,
    /// 其它任何路径
    NotFound(String),
}

impl Route {
    /// 按路径解析路由，路径按字面匹配
    pub fn resolve(path: &str) -> Self {
        match path {
            "/" => Route::Prepare,
            "/about" => Route::About,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// 路由对应的路径
    pub fn path(&self) -> &str {
        match self {
            Route::Prepare => "/",
            Route::About => "/about",
            Route::NotFound(path) => path,
        }
    }
}
