//! Mock Data Store - Mock 后端的内存数据
//!
//! 启动时随机生成订单与商品，之后的增删改都作用在同一份数据上，
//! 让详情查询、状态更新和统计彼此一致。

use chrono::{Duration, Local, NaiveDateTime};
use dashmap::DashMap;
use rand::Rng;

use crate::domain::{
    DashboardStats, DeliveryMethod, NewProduct, Order, OrderStatus, Product, ProductPatch,
    ProductStatus, ProductType,
};

/// 时间字段格式
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const PRODUCT_NAMES: &[&str] = &[
    "游戏点卡",
    "视频会员月卡",
    "云存储扩容包",
    "软件激活码",
    "在线课程兑换券",
    "电子书合集",
    "机械键盘",
    "蓝牙耳机",
    "保温杯",
    "数据线套装",
];

const DESCRIPTIONS: &[&str] = &[
    "下单后自动发货，请在订单详情中查看卡密。",
    "官方授权渠道，支持七天无理由退换。",
    "限时特惠，每个账号限购一次。",
    "人工发货，工作日两小时内处理。",
];

const DELIVERY_CONTENTS: &[&str] = &[
    "卡号：8812-3345-9920 密码：a8k2m9",
    "激活码已发送至绑定邮箱，请注意查收。",
    "快递单号：SF1234567890",
];

/// 初始数据数量
#[derive(Debug, Clone, Copy)]
pub struct MockSeed {
    pub orders: usize,
    pub products: usize,
}

impl MockSeed {
    /// 各 10-20 条
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self {
            orders: rng.random_range(10..=20),
            products: rng.random_range(10..=20),
        }
    }
}

/// Mock 后端数据存储
#[derive(Debug, Default)]
pub struct MockDataStore {
    orders: DashMap<i64, Order>,
    products: DashMap<i64, Product>,
}

impl MockDataStore {
    /// 空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成随机初始数据，id 从 1 开始递增
    pub fn seeded(seed: MockSeed) -> Self {
        let store = Self::new();
        let mut rng = rand::rng();

        for id in 1..=seed.products as i64 {
            store.products.insert(id, random_product(&mut rng, id));
        }

        let products = store.list_products();
        for id in 1..=seed.orders as i64 {
            store.orders.insert(id, random_order(&mut rng, id, &products));
        }

        tracing::debug!(
            orders = seed.orders,
            products = seed.products,
            "Mock data seeded"
        );
        store
    }

    // ========== Orders ==========

    pub fn list_orders(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.iter().map(|e| e.value().clone()).collect();
        orders.sort_by_key(|o| o.id);
        orders
    }

    pub fn get_order(&self, id: i64) -> Option<Order> {
        self.orders.get(&id).map(|o| o.clone())
    }

    pub fn insert_order(&self, order: Order) {
        self.orders.insert(order.id, order);
    }

    /// 更新订单状态，不校验迁移方向；首次进入付款/发货状态时补齐对应时间
    pub fn update_order_status(&self, id: i64, status: OrderStatus) -> Option<Order> {
        let mut order = self.orders.get_mut(&id)?;
        let now = Local::now().format(DATETIME_FORMAT).to_string();

        if status.is_paid() && order.pay_time.is_none() {
            order.pay_time = Some(now.clone());
        }
        if matches!(status, OrderStatus::Delivered | OrderStatus::Completed)
            && order.delivery_time.is_none()
        {
            order.delivery_time = Some(now);
        }
        order.status = status;
        Some(order.clone())
    }

    // ========== Products ==========

    pub fn list_products(&self) -> Vec<Product> {
        let mut products: Vec<Product> =
            self.products.iter().map(|e| e.value().clone()).collect();
        products.sort_by_key(|p| p.id);
        products
    }

    pub fn get_product(&self, id: i64) -> Option<Product> {
        self.products.get(&id).map(|p| p.clone())
    }

    /// 创建商品，id 在 1000-9999 中随机分配
    pub fn create_product(&self, new: NewProduct) -> Product {
        let id = self.allocate_product_id();
        let product = Product::from_new(id, new);
        self.products.insert(id, product.clone());
        product
    }

    pub fn update_product(&self, id: i64, patch: ProductPatch) -> Option<Product> {
        let mut product = self.products.get_mut(&id)?;
        product.apply(patch);
        Some(product.clone())
    }

    pub fn delete_product(&self, id: i64) -> bool {
        self.products.remove(&id).is_some()
    }

    // ========== Dashboard ==========

    /// 今日收入 = 今天创建且已付款订单的金额之和
    pub fn stats(&self) -> DashboardStats {
        let today = Local::now().date_naive();
        let mut pending_orders = 0;
        let mut today_income = 0.0;

        for entry in self.orders.iter() {
            let order = entry.value();
            if order.status == OrderStatus::Pending {
                pending_orders += 1;
            } else if created_on(order, today) {
                today_income += order.price;
            }
        }

        DashboardStats {
            total_orders: self.orders.len() as u64,
            pending_orders,
            today_income: (today_income * 100.0).round() / 100.0,
            total_products: self.products.len() as u64,
        }
    }

    fn allocate_product_id(&self) -> i64 {
        let mut rng = rand::rng();
        for _ in 0..32 {
            let id = rng.random_range(1000..=9999);
            if !self.products.contains_key(&id) {
                return id;
            }
        }
        // 随机区间冲突过多时退回到最大 id + 1
        self.products.iter().map(|e| *e.key()).max().unwrap_or(999) + 1
    }
}

fn created_on(order: &Order, day: chrono::NaiveDate) -> bool {
    NaiveDateTime::parse_from_str(&order.create_time, DATETIME_FORMAT)
        .map(|t| t.date() == day)
        .unwrap_or(false)
}

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn random_product(rng: &mut impl Rng, id: i64) -> Product {
    Product {
        id,
        name: pick(rng, PRODUCT_NAMES).to_string(),
        description: pick(rng, DESCRIPTIONS).to_string(),
        price: rng.random_range(1..=1000) as f64,
        stock: rng.random_range(0..=100),
        product_type: if rng.random_bool(0.5) {
            ProductType::Virtual
        } else {
            ProductType::Physical
        },
        status: if rng.random_bool(0.5) {
            ProductStatus::Active
        } else {
            ProductStatus::Inactive
        },
    }
}

fn random_order(rng: &mut impl Rng, id: i64, products: &[Product]) -> Order {
    let (product_id, product_name) = if products.is_empty() {
        (
            rng.random_range(1..=100),
            pick(rng, PRODUCT_NAMES).to_string(),
        )
    } else {
        let product = &products[rng.random_range(0..products.len())];
        (product.id, product.name.clone())
    };

    let status = OrderStatus::ALL[rng.random_range(0..OrderStatus::ALL.len())];
    let created = Local::now().naive_local() - Duration::minutes(rng.random_range(0..60 * 24 * 30));
    let paid = created + Duration::minutes(rng.random_range(1..=30));
    let delivered = paid + Duration::minutes(rng.random_range(1..=120));
    let delivered_or_later = matches!(status, OrderStatus::Delivered | OrderStatus::Completed);

    Order {
        id,
        order_no: uuid::Uuid::new_v4().to_string(),
        product_id,
        product_name,
        price: rng.random_range(1..=1000) as f64,
        status,
        create_time: created.format(DATETIME_FORMAT).to_string(),
        pay_time: status
            .is_paid()
            .then(|| paid.format(DATETIME_FORMAT).to_string()),
        delivery_time: delivered_or_later.then(|| delivered.format(DATETIME_FORMAT).to_string()),
        delivery_method: delivered_or_later.then(|| {
            if rng.random_bool(0.5) {
                DeliveryMethod::Auto
            } else {
                DeliveryMethod::Manual
            }
        }),
        delivery_content: delivered_or_later.then(|| pick(rng, DELIVERY_CONTENTS).to_string()),
    }
}
