//! Admin Console - 电商管理后台客户端层
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User / Order / Product / DashboardStats 数据模型
//!
//! 应用层 (application/):
//! - Ports: 端口定义（HttpTransport, TokenStore, Navigator）
//! - Client: ApiClient 与拦截器链（Bearer 注入、401 跳转、信封解析）
//! - Facades: auth / orders / products / dashboard 接口封装
//! - Session: 登录态管理
//! - Routing: 路由表与登录守卫
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: reqwest / 进程内传输, 文件 token 存储, 导航历史
//! - Memory: 内存 token 存储, Mock 数据存储
//! - HTTP: axum Mock 后端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
