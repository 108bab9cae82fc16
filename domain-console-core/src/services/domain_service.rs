//! 域名操作编排服务

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use domain_console_gateway::{Domain, DomainStatus, UpdateDomainRequest};

use crate::cache::{CacheTag, QueryStatus, LIST_DOMAINS_KEY};
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    DomainForm, EditSession, OperationKind, OperationStatus, SessionTarget, VerifyOutcome,
};

/// 域名操作编排服务
///
/// Runs the create / update / delete / verify mutations, keeps the edit
/// session, and publishes a status per operation. Every method also returns
/// its outcome directly.
pub struct DomainService {
    ctx: Arc<ServiceContext>,
    session: watch::Sender<EditSession>,
    next_session_id: AtomicU64,
    operations: [watch::Sender<OperationStatus>; 4],
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            session: watch::channel(EditSession::Closed).0,
            next_session_id: AtomicU64::new(1),
            operations: std::array::from_fn(|_| watch::channel(OperationStatus::Idle).0),
        }
    }

    // ========== 列表 ==========

    /// 获取域名列表（经过缓存）
    pub async fn list(&self) -> CoreResult<Arc<Vec<Domain>>> {
        let gateway = Arc::clone(&self.ctx.gateway);
        let domains = self
            .ctx
            .cache
            .query(LIST_DOMAINS_KEY, &[CacheTag::Domain], move || async move {
                gateway.list_domains().await
            })
            .await?;
        Ok(domains)
    }

    /// Watch the list query (fetching / ready / stale / failed).
    pub async fn subscribe_list(&self) -> watch::Receiver<QueryStatus> {
        self.ctx.cache.subscribe(LIST_DOMAINS_KEY).await
    }

    // ========== 编辑会话 ==========

    /// Current edit session.
    pub fn session(&self) -> EditSession {
        self.session.borrow().clone()
    }

    pub fn subscribe_session(&self) -> watch::Receiver<EditSession> {
        self.session.subscribe()
    }

    /// Open the panel for a new record. Returns the session id.
    pub fn open_add(&self) -> u64 {
        self.open(SessionTarget::New)
    }

    /// Open the panel for `domain`. Returns the session id.
    pub fn open_edit(&self, domain: Domain) -> u64 {
        self.open(SessionTarget::Existing(domain))
    }

    /// Close the panel without submitting.
    pub fn close(&self) {
        self.session.send_if_modified(|session| {
            let was_open = session.is_open();
            *session = EditSession::Closed;
            was_open
        });
    }

    fn open(&self, target: SessionTarget) -> u64 {
        let id = self.next_session_id.fetch_add(1, Ordering::Relaxed);
        self.session.send_replace(EditSession::Open { id, target });
        id
    }

    /// Close the session only if it is still the one a mutation started from.
    fn close_if_current(&self, session_id: Option<u64>) {
        let Some(session_id) = session_id else {
            return;
        };
        self.session.send_if_modified(|session| {
            if session.id() == Some(session_id) {
                *session = EditSession::Closed;
                true
            } else {
                false
            }
        });
    }

    // ========== 操作状态 ==========

    pub fn operation_status(&self, kind: OperationKind) -> OperationStatus {
        self.operations[kind.index()].borrow().clone()
    }

    pub fn subscribe_operation(&self, kind: OperationKind) -> watch::Receiver<OperationStatus> {
        self.operations[kind.index()].subscribe()
    }

    fn set_status(&self, kind: OperationKind, status: OperationStatus) {
        self.operations[kind.index()].send_replace(status);
    }

    fn fail(&self, kind: OperationKind, err: CoreError) -> CoreError {
        if err.is_expected() {
            log::warn!("Failed to {kind} domain: {err}");
        } else {
            log::error!("Failed to {kind} domain: {err}");
        }
        self.set_status(kind, OperationStatus::Failed(err.to_string()));
        err
    }

    async fn succeed(&self, kind: OperationKind) {
        self.ctx.cache.invalidate_tags(&[CacheTag::Domain]).await;
        self.set_status(kind, OperationStatus::Succeeded);
    }

    // ========== 变更操作 ==========

    /// 创建域名记录
    ///
    /// `session_id` is the panel the form was submitted from; only that
    /// session is closed on success. `createdDate` is taken from the clock
    /// now, at submission.
    pub async fn create(&self, session_id: Option<u64>, form: &DomainForm) -> CoreResult<Domain> {
        form.validate().map_err(|e| self.fail(OperationKind::Create, e))?;

        let request = form.to_create_request(self.ctx.clock.now_millis());
        self.set_status(OperationKind::Create, OperationStatus::Pending);

        match self.ctx.gateway.create_domain(&request).await {
            Ok(domain) => {
                log::info!("Domain created: {} ({})", domain.domain, domain.id);
                self.succeed(OperationKind::Create).await;
                self.close_if_current(session_id);
                Ok(domain)
            }
            Err(e) => Err(self.fail(OperationKind::Create, e.into())),
        }
    }

    /// 更新会话中选中的域名记录
    ///
    /// The target is the record of session `session_id`. If that session is
    /// no longer open, or edits a new record, nothing is sent.
    pub async fn update(&self, session_id: Option<u64>, form: &DomainForm) -> CoreResult<Domain> {
        let Some(selected) = self.selected_in(session_id) else {
            return Err(self.fail(OperationKind::Update, CoreError::NoSelection));
        };
        form.validate().map_err(|e| self.fail(OperationKind::Update, e))?;

        self.set_status(OperationKind::Update, OperationStatus::Pending);

        match self
            .ctx
            .gateway
            .update_domain(&selected.id, &form.to_update_request())
            .await
        {
            Ok(domain) => {
                log::info!("Domain updated: {}", domain.id);
                self.succeed(OperationKind::Update).await;
                self.close_if_current(session_id);
                Ok(domain)
            }
            Err(e) => Err(self.fail(OperationKind::Update, e.into())),
        }
    }

    fn selected_in(&self, session_id: Option<u64>) -> Option<Domain> {
        let session = self.session.borrow();
        if session_id.is_some() && session.id() == session_id {
            session.selected().cloned()
        } else {
            None
        }
    }

    /// 删除域名记录
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        self.set_status(OperationKind::Delete, OperationStatus::Pending);

        match self.ctx.gateway.delete_domain(id).await {
            Ok(()) => {
                log::info!("Domain removed: {id}");
                self.succeed(OperationKind::Delete).await;
                Ok(())
            }
            Err(e) => Err(self.fail(OperationKind::Delete, e.into())),
        }
    }

    /// 将域名标记为已验证
    ///
    /// Nothing is sent when the record is already verified.
    pub async fn verify(&self, id: &str) -> CoreResult<VerifyOutcome> {
        let domains = self
            .list()
            .await
            .map_err(|e| self.fail(OperationKind::Verify, e))?;
        let Some(current) = domains.iter().find(|d| d.id == id) else {
            return Err(self.fail(
                OperationKind::Verify,
                CoreError::DomainNotFound(id.to_string()),
            ));
        };
        if current.status == DomainStatus::Verified {
            log::debug!("Domain {id} already verified, skipping");
            return Ok(VerifyOutcome::AlreadyVerified);
        }

        self.set_status(OperationKind::Verify, OperationStatus::Pending);

        match self
            .ctx
            .gateway
            .update_domain(id, &UpdateDomainRequest::verify())
            .await
        {
            Ok(domain) => {
                log::info!("Domain verified: {id}");
                self.succeed(OperationKind::Verify).await;
                Ok(VerifyOutcome::Verified(domain))
            }
            Err(e) => Err(self.fail(OperationKind::Verify, e.into())),
        }
    }
}
