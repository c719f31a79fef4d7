//! Route Table - 路由记录
//!
//! 路由以树形定义，构造时展开为绝对路径的扁平记录；
//! 子路由继承父路由的 requires_auth，自身显式设置时覆盖。

/// 路由定义（树形）
#[derive(Debug, Clone, Default)]
pub struct RouteDef {
    path: String,
    name: Option<String>,
    requires_auth: Option<bool>,
    redirect: Option<String>,
    children: Vec<RouteDef>,
}

impl RouteDef {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn requires_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = Some(requires_auth);
        self
    }

    pub fn redirect(mut self, to: impl Into<String>) -> Self {
        self.redirect = Some(to.into());
        self
    }

    pub fn child(mut self, child: RouteDef) -> Self {
        self.children.push(child);
        self
    }
}

/// 展开后的路由记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// 绝对路径
    pub path: String,
    pub name: Option<String>,
    pub requires_auth: bool,
    pub redirect: Option<String>,
}

/// 路由表
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new(defs: Vec<RouteDef>) -> Self {
        let mut records = Vec::new();
        for def in &defs {
            flatten(def, "", false, &mut records);
        }
        Self { records }
    }

    /// 后台管理路由
    ///
    /// - /login 无需登录
    /// - / 及其子路由 dashboard、orders、products、delivery 需要登录，
    ///   根路径重定向到 /dashboard
    pub fn admin() -> Self {
        Self::new(vec![
            RouteDef::new("/login").name("Login").requires_auth(false),
            RouteDef::new("/")
                .requires_auth(true)
                .child(RouteDef::new("").redirect("/dashboard"))
                .child(RouteDef::new("dashboard").name("Dashboard"))
                .child(RouteDef::new("orders").name("Orders"))
                .child(RouteDef::new("products").name("Products"))
                .child(RouteDef::new("delivery").name("Delivery")),
        ])
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// 按路径匹配（子路由优先于父路由）
    pub fn resolve(&self, path: &str) -> Option<&RouteRecord> {
        self.records.iter().find(|r| r.path == path)
    }

    /// 未匹配的路径不需要登录
    pub fn requires_auth(&self, path: &str) -> bool {
        self.resolve(path).map(|r| r.requires_auth).unwrap_or(false)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.records
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
    }
}

fn flatten(def: &RouteDef, parent: &str, inherited_auth: bool, out: &mut Vec<RouteRecord>) {
    let path = join_path(parent, &def.path);
    let requires_auth = def.requires_auth.unwrap_or(inherited_auth);

    for child in &def.children {
        flatten(child, &path, requires_auth, out);
    }

    out.push(RouteRecord {
        path,
        name: def.name.clone(),
        requires_auth,
        redirect: def.redirect.clone(),
    });
}

fn join_path(parent: &str, segment: &str) -> String {
    if segment.starts_with('/') {
        return segment.to_string();
    }
    let parent = parent.trim_end_matches('/');
    if segment.is_empty() {
        if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        }
    } else {
        format!("{}/{}", parent, segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_table() {
        let table = RouteTable::admin();
        assert!(!table.requires_auth("/login"));
        assert!(table.requires_auth("/"));
        assert!(table.requires_auth("/orders"));
        assert!(table.requires_auth("/delivery"));
        assert!(!table.requires_auth("/not-a-route"));
    }

    #[test]
    fn test_root_resolves_to_redirecting_child() {
        let table = RouteTable::admin();
        let record = table.resolve("/").unwrap();
        assert_eq!(record.redirect.as_deref(), Some("/dashboard"));
        assert!(record.requires_auth);
    }

    #[test]
    fn test_child_override() {
        let table = RouteTable::new(vec![RouteDef::new("/")
            .requires_auth(true)
            .child(RouteDef::new("about").requires_auth(false))]);
        assert!(!table.requires_auth("/about"));
    }

    #[test]
    fn test_find_by_name() {
        let table = RouteTable::admin();
        assert_eq!(table.find_by_name("Products").unwrap().path, "/products");
    }
}
