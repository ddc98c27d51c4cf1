//! SchoolSys 前端支撑库
//!
//! 前端进程持有会话级令牌并消费 API 服务，这里是其中与 UI 无关的部分：
//! - `token`: 会话内存中的令牌槽
//! - `api`: 自动携带 Bearer 令牌的 HTTP 客户端
//! - `session`: 客户端侧解析令牌声明（不验签），驱动界面上的角色判断
//! - `dtos`: API 传输对象的客户端侧形态（标识符一律为不透明字符串）
//! - `gpa`: 组合多个 API 调用的按课程平均分聚合

pub mod api;
pub mod dtos;
pub mod gpa;
pub mod session;
pub mod token;

pub use api::{ApiClient, ClientError};
pub use session::SessionIdentity;
pub use token::TokenStore;
