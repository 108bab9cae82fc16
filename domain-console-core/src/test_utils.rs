//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};

use domain_console_gateway::{
    CreateDomainRequest, Domain, DomainGateway, DomainStatus, GatewayError, UpdateDomainRequest,
};

use crate::cache::DomainListCache;
use crate::services::{DomainService, ServiceContext};
use crate::traits::Clock;

// ===== MockGateway =====

/// In-memory record store standing in for the remote collection.
pub struct MockGateway {
    domains: RwLock<Vec<Domain>>,
    next_id: AtomicU64,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    /// 如果 Some，所有调用都返回此错误
    failure: RwLock<Option<GatewayError>>,
    /// 如果 Some，变更操作等待通知后才完成
    hold: RwLock<Option<Arc<Notify>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            domains: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(100),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            failure: RwLock::new(None),
            hold: RwLock::new(None),
        }
    }

    pub async fn seed(&self, domains: Vec<Domain>) {
        *self.domains.write().await = domains;
    }

    pub async fn fail_with(&self, err: Option<GatewayError>) {
        *self.failure.write().await = err;
    }

    /// Make every later mutation wait for a `notify_one` on the returned handle.
    pub async fn hold_mutations(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.hold.write().await = Some(Arc::clone(&notify));
        notify
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    async fn check_failure(&self) -> domain_console_gateway::Result<()> {
        match self.failure.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn wait_for_release(&self) {
        let hold = self.hold.read().await.clone();
        if let Some(notify) = hold {
            notify.notified().await;
        }
    }

    fn not_found(id: &str) -> GatewayError {
        GatewayError::NotFound {
            resource: format!("domain/{id}"),
            raw_message: Some("\"Not found\"".to_string()),
        }
    }
}

#[async_trait]
impl DomainGateway for MockGateway {
    async fn list_domains(&self) -> domain_console_gateway::Result<Vec<Domain>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        Ok(self.domains.read().await.clone())
    }

    async fn create_domain(
        &self,
        request: &CreateDomainRequest,
    ) -> domain_console_gateway::Result<Domain> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_release().await;
        self.check_failure().await?;

        let domain = Domain {
            id: self.next_id.fetch_add(1, Ordering::SeqCst).to_string(),
            domain: request.domain.clone(),
            status: request.status,
            is_active: request.is_active,
            created_date: request.created_date,
        };
        self.domains.write().await.push(domain.clone());
        Ok(domain)
    }

    async fn update_domain(
        &self,
        id: &str,
        request: &UpdateDomainRequest,
    ) -> domain_console_gateway::Result<Domain> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_release().await;
        self.check_failure().await?;

        let mut domains = self.domains.write().await;
        let record = domains
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(url) = &request.domain {
            record.domain.clone_from(url);
        }
        if let Some(status) = request.status {
            record.status = status;
        }
        if let Some(is_active) = request.is_active {
            record.is_active = is_active;
        }
        Ok(record.clone())
    }

    async fn delete_domain(&self, id: &str) -> domain_console_gateway::Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_release().await;
        self.check_failure().await?;

        let mut domains = self.domains.write().await;
        let before = domains.len();
        domains.retain(|d| d.id != id);
        if domains.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

// ===== ManualClock =====

/// Clock that only moves when told to.
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockGateway>, Arc<ManualClock>) {
    let gateway = Arc::new(MockGateway::new());
    let clock = Arc::new(ManualClock::new(0));

    let ctx = Arc::new(ServiceContext::new(
        gateway.clone(),
        Arc::new(DomainListCache::new()),
        clock.clone(),
    ));

    (ctx, gateway, clock)
}

/// 创建测试用 `DomainService`
pub fn create_test_domain_service() -> (DomainService, Arc<MockGateway>, Arc<ManualClock>) {
    let (ctx, gateway, clock) = create_test_context();
    (DomainService::new(ctx), gateway, clock)
}

/// 创建一个用于测试的 `Domain`
pub fn test_domain(
    id: &str,
    url: &str,
    status: DomainStatus,
    is_active: bool,
    created_date: i64,
) -> Domain {
    Domain {
        id: id.to_string(),
        domain: url.to_string(),
        status,
        is_active,
        created_date,
    }
}
