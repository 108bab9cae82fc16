//! 业务逻辑服务层

mod domain_service;

pub use domain_service::DomainService;

use std::sync::Arc;

use crate::cache::DomainListCache;
use crate::traits::{Clock, DomainGateway, SystemClock};

/// 服务上下文 - 持有所有依赖
///
/// Built once by the application root. Owns the list cache, so the cache
/// lives exactly as long as the console session that created it.
pub struct ServiceContext {
    /// 远程数据网关
    pub gateway: Arc<dyn DomainGateway>,
    /// 域名列表缓存
    pub cache: Arc<DomainListCache>,
    /// 时间来源
    pub clock: Arc<dyn Clock>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        gateway: Arc<dyn DomainGateway>,
        cache: Arc<DomainListCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            gateway,
            cache,
            clock,
        }
    }

    /// Context with an empty cache and the wall clock.
    #[must_use]
    pub fn with_gateway(gateway: Arc<dyn DomainGateway>) -> Self {
        Self::new(
            gateway,
            Arc::new(DomainListCache::new()),
            Arc::new(SystemClock),
        )
    }
}
