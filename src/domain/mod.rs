//! Domain Layer - 领域层
//!
//! 后台管理系统的核心数据模型:
//! - User: 登录用户
//! - Order: 订单（状态由后端维护，客户端只读取并修改 status）
//! - Product: 商品（完整 CRUD）
//! - DashboardStats: 仪表盘统计
//!
//! 所有类型的线上字段名均为 camelCase，与后端信封中的 `data` 保持一致。

mod dashboard;
mod order;
mod product;
mod user;

pub use dashboard::DashboardStats;
pub use order::{DeliveryMethod, Order, OrderStatus, OrderStatusUpdate};
pub use product::{NewProduct, Product, ProductPatch, ProductStatus, ProductType};
pub use user::{Credentials, LoginResponse, User};
