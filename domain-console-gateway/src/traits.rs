use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CreateDomainRequest, Domain, UpdateDomainRequest};

/// 域名记录数据源 Trait
///
/// The single collection of domain records exposed by the remote store.
/// Every call is one network round trip; implementations never retry.
#[async_trait]
pub trait DomainGateway: Send + Sync {
    /// 获取全部域名记录
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    /// 创建域名记录，返回带有服务端 id 的记录
    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<Domain>;

    /// 部分更新域名记录
    async fn update_domain(&self, id: &str, req: &UpdateDomainRequest) -> Result<Domain>;

    /// 删除域名记录
    async fn delete_domain(&self, id: &str) -> Result<()>;
}
