use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;

use crate::core::Config;
use crate::db::Store;

/// Resource names tracked by [`ResourceVersions`]
pub const RESOURCES: [&str; 7] = [
    "users",
    "customers",
    "engineers",
    "service_plans",
    "complaints",
    "notifications",
    "support_tickets",
];

/// 资源版本管理器
///
/// 每个资源类型一个单调递增的版本号，每次成功的增删改都会递增。
/// 控制台轮询 `/api/sync/versions`，版本变化时重新拉取列表。
#[derive(Debug)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    /// 创建空的版本管理器
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// 递增指定资源的版本号并返回新值
    ///
    /// 如果资源不存在，从 0 开始递增（返回 1）
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取指定资源的当前版本号
    ///
    /// 如果资源不存在，返回 0
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }

    /// All tracked resources, including those never changed (version 0)
    pub fn snapshot(&self) -> Vec<ResourceVersion> {
        RESOURCES
            .iter()
            .map(|resource| ResourceVersion {
                resource: (*resource).to_string(),
                version: self.get(resource),
            })
            .collect()
    }
}

impl Default for ResourceVersions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResourceVersion {
    pub resource: String,
    pub version: u64,
}

/// 服务器状态 - 持有所有共享组件
///
/// 使用 Arc 实现浅拷贝，axum 每个请求克隆一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<Store> | 内存仓库 |
/// | resource_versions | Arc<ResourceVersions> | 资源版本管理 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 内存仓库
    pub store: Arc<Store>,
    /// 资源版本管理
    pub resource_versions: Arc<ResourceVersions>,
}

impl ServerState {
    pub fn new(config: Config, store: Store) -> Self {
        Self {
            config,
            store: Arc::new(store),
            resource_versions: Arc::new(ResourceVersions::new()),
        }
    }

    /// 初始化服务器状态
    ///
    /// `seed_fixtures` 为 true 时加载示例数据，否则从空仓库开始。
    pub fn initialize(config: &Config) -> Self {
        let store = if config.seed_fixtures {
            Store::seeded()
        } else {
            tracing::info!("Starting with an empty store");
            Store::new()
        };
        Self::new(config.clone(), store)
    }

    /// 记录一次资源变更，返回新版本号
    pub fn bump_version(&self, resource: &str) -> u64 {
        let version = self.resource_versions.increment(resource);
        tracing::debug!(resource, version, "Resource version bumped");
        version
    }
}
