//! 查询交互控制器 - 业务层
//!
//! 在用户输入与远端问答服务之间做中介，维护当前问题、最近一次答案
//! 以及请求状态，保证同一时间最多只有一个请求在途

pub mod query_controller;
pub mod state;

pub use query_controller::{QueryController, SubmitOutcome};
pub use state::{QueryState, RequestId, RequestState};
