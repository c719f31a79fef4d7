//! Application Context
//!
//! 把客户端、会话状态、API 门面和路由器显式组装在一起，
//! 不依赖任何全局单例。

use std::sync::Arc;

use super::client::{ApiClient, ApiClientConfig, BearerAuth, EnvelopeUnwrap, UnauthorizedRedirect};
use super::facades::{AuthApi, DashboardApi, OrderApi, ProductApi};
use super::ports::{HttpTransportPort, NavigatorPort, TokenStorePort};
use super::routing::{RouteGuard, RouteTable, Router};
use super::session::AuthStore;

/// 应用上下文
pub struct AppContext {
    pub client: Arc<ApiClient>,
    pub auth_api: AuthApi,
    pub orders: OrderApi,
    pub products: ProductApi,
    pub dashboard: DashboardApi,
    pub auth: Arc<AuthStore>,
    pub router: Router,
    pub navigator: Arc<dyn NavigatorPort>,
}

impl AppContext {
    /// 使用后台管理路由表创建上下文
    pub fn new(
        config: ApiClientConfig,
        transport: Arc<dyn HttpTransportPort>,
        token_store: Arc<dyn TokenStorePort>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self::with_routes(config, transport, token_store, navigator, RouteTable::admin())
    }

    /// 标准拦截器链：BearerAuth → 传输 → UnauthorizedRedirect → EnvelopeUnwrap
    pub fn with_routes(
        config: ApiClientConfig,
        transport: Arc<dyn HttpTransportPort>,
        token_store: Arc<dyn TokenStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        routes: RouteTable,
    ) -> Self {
        let client = Arc::new(
            ApiClient::new(config, transport)
                .with_request_interceptor(BearerAuth::new(token_store.clone()))
                .with_response_interceptor(UnauthorizedRedirect::new(navigator.clone()))
                .with_response_interceptor(EnvelopeUnwrap),
        );

        let auth_api = AuthApi::new(client.clone());
        let auth = Arc::new(AuthStore::new(auth_api.clone(), token_store));
        let routes = Arc::new(routes);
        let guard = RouteGuard::new(auth.clone(), routes.clone());
        let router = Router::new(routes, guard, navigator.clone());

        Self {
            orders: OrderApi::new(client.clone()),
            products: ProductApi::new(client.clone()),
            dashboard: DashboardApi::new(client.clone()),
            client,
            auth_api,
            auth,
            router,
            navigator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApiError;
    use crate::application::ports::TokenStorePort;
    use crate::domain::{NewProduct, OrderStatus, ProductPatch, ProductStatus, ProductType};
    use crate::infrastructure::adapters::{HistoryNavigator, RouterTransport};
    use crate::infrastructure::http::MockApiConfig;
    use crate::infrastructure::memory::{InMemoryTokenStore, MockDataStore, MockSeed};

    struct Harness {
        ctx: AppContext,
        navigator: Arc<HistoryNavigator>,
        token_store: Arc<InMemoryTokenStore>,
        store: Arc<MockDataStore>,
    }

    fn harness_with(config: MockApiConfig, token_store: InMemoryTokenStore) -> Harness {
        let store = Arc::new(MockDataStore::seeded(MockSeed {
            orders: 10,
            products: 10,
        }));
        let navigator = Arc::new(HistoryNavigator::new("/login"));
        let token_store = Arc::new(token_store);
        let ctx = AppContext::new(
            ApiClientConfig::default(),
            Arc::new(RouterTransport::mock(config, store.clone())),
            token_store.clone(),
            navigator.clone(),
        );
        Harness {
            ctx,
            navigator,
            token_store,
            store,
        }
    }

    fn harness() -> Harness {
        harness_with(MockApiConfig::instant(), InMemoryTokenStore::new())
    }

    #[tokio::test]
    async fn test_login_then_navigate_to_redirect_target() {
        let h = harness();

        let nav = h.ctx.router.push("/orders").unwrap();
        assert_eq!(nav.location.full_path(), "/login?redirect=/orders");

        let user = h.ctx.auth.login("admin", "123456").await.unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, "admin");
        assert_eq!(h.ctx.auth.token().as_deref(), Some("mock-token"));
        assert_eq!(h.token_store.load().unwrap().as_deref(), Some("mock-token"));

        let nav = h.ctx.router.push_after_login().unwrap();
        assert_eq!(nav.location.path, "/orders");
        assert!(h.navigator.hard_redirects().is_empty());
    }

    #[tokio::test]
    async fn test_bad_credentials_do_not_redirect() {
        let h = harness();

        let err = h.ctx.auth.login("admin", "wrong").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Business {
                code: Some(401),
                message: "用户名或密码错误".to_string()
            }
        );
        assert!(!h.ctx.auth.is_authenticated());
        assert!(h.token_store.load().unwrap().is_none());
        assert!(h.navigator.hard_redirects().is_empty());
    }

    #[tokio::test]
    async fn test_http_401_triggers_hard_redirect() {
        let h = harness_with(
            MockApiConfig::instant(),
            InMemoryTokenStore::with_token("stale-token"),
        );

        let err = h.ctx.orders.get_orders().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(h.navigator.hard_redirects(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_orders_flow() {
        let h = harness();
        h.ctx.auth.login("admin", "123456").await.unwrap();

        let orders = h.ctx.orders.get_orders().await.unwrap();
        assert_eq!(orders.len(), 10);

        let pending = h
            .store
            .list_orders()
            .into_iter()
            .find(|o| o.status == OrderStatus::Pending);
        if let Some(order) = pending {
            h.ctx
                .orders
                .update_order_status(order.id, OrderStatus::Paid)
                .await
                .unwrap();
            let updated = h.ctx.orders.get_order(order.id).await.unwrap();
            assert_eq!(updated.status, OrderStatus::Paid);
            assert!(updated.pay_time.is_some());
        }

        let err = h.ctx.orders.get_order(99_999).await.unwrap_err();
        assert!(matches!(err, ApiError::Business { code: Some(404), .. }));
    }

    #[tokio::test]
    async fn test_products_flow() {
        let h = harness();
        h.ctx.auth.login("admin", "123456").await.unwrap();

        let created = h
            .ctx
            .products
            .create_product(&NewProduct {
                name: "游戏点卡".to_string(),
                description: "面值 100".to_string(),
                price: 98.0,
                stock: 50,
                product_type: ProductType::Virtual,
                status: ProductStatus::Active,
            })
            .await
            .unwrap();
        assert!((1000..=9999).contains(&created.id));

        let updated = h
            .ctx
            .products
            .update_product(
                created.id,
                &ProductPatch::default().with_stock(0).with_status(ProductStatus::Inactive),
            )
            .await
            .unwrap();
        assert_eq!(updated.stock, 0);
        assert_eq!(updated.status, ProductStatus::Inactive);
        assert_eq!(updated.name, "游戏点卡");

        h.ctx.products.delete_product(created.id).await.unwrap();
        assert_eq!(h.ctx.products.get_products().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_dashboard_stats() {
        let h = harness();
        h.ctx.auth.login("admin", "123456").await.unwrap();

        let stats = h.ctx.dashboard.get_stats().await.unwrap();
        assert_eq!(stats.total_orders, 10);
        assert_eq!(stats.total_products, 10);
        assert!(stats.pending_orders <= stats.total_orders);
        assert!(stats.today_income >= 0.0);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_guards_routes() {
        let h = harness();
        h.ctx.auth.login("admin", "123456").await.unwrap();
        h.ctx.auth.get_profile().await.unwrap();
        assert!(h.ctx.auth.user().is_some());

        h.ctx.auth.logout().await;

        assert!(!h.ctx.auth.is_authenticated());
        assert!(h.ctx.auth.user().is_none());
        assert!(h.token_store.load().unwrap().is_none());

        let nav = h.ctx.router.push("/products").unwrap();
        assert_eq!(nav.location.path, "/login");
        assert_eq!(nav.location.query_value("redirect"), Some("/products"));
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_error() {
        let config = MockApiConfig {
            latency_min_ms: 200,
            latency_max_ms: 200,
            require_auth: false,
        };
        let store = Arc::new(MockDataStore::new());
        let ctx = AppContext::new(
            ApiClientConfig::default().with_timeout(std::time::Duration::from_millis(20)),
            Arc::new(RouterTransport::mock(config, store)),
            Arc::new(InMemoryTokenStore::new()),
            Arc::new(HistoryNavigator::default()),
        );

        let err = ctx.dashboard.get_stats().await.unwrap_err();
        assert_eq!(err, ApiError::Timeout);
    }
}
