//! # CodePrep
//!
//! RAG 面试准备助手的终端客户端：输入问题，调用外部问答服务的
//! `/ask` 接口，展示返回的答案
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - `AnswerClient`，唯一发出 HTTP 请求的地方
//! - `AnswerSource` - 控制器依赖的答案能力
//!
//! ### ② 业务层（Controller）
//! - `controller/` - `QueryController`，管理问题、答案和请求状态
//!
//! ### ③ 展示层（UI）
//! - `ui/` - 路由、侧边栏、About / Prepare / 404 页面
//!
//! ### ④ 编排层（App）
//! - `app` - 终端交互循环，把输入映射到导航和控制器操作
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod models;
pub mod ui;

// 重新导出常用类型
pub use app::{App, Command};
pub use clients::{AnswerClient, AnswerSource};
pub use config::Config;
pub use controller::{QueryController, RequestState, SubmitOutcome};
pub use error::{AppError, AppResult, AskError};
pub use ui::Route;
