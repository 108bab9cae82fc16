//! 核心服务
//!
//! 封装 domain-console-core 的服务，
//! 提供给 TUI 层使用的统一接口

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use domain_console_core::types::OperationKind;
use domain_console_core::{CacheTag, DomainService, RestGateway, ServiceContext};

use crate::message::{AppMessage, BackendMessage, Command};

use super::AppConfig;

/// TUI 核心服务
///
/// 持有域名服务，在运行时上执行 `Command`，并把结果和状态变化
/// 通过通道推送给主循环。
pub struct CoreService {
    /// 服务上下文
    ctx: Arc<ServiceContext>,
    /// 域名服务
    domains: Arc<DomainService>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(config: &AppConfig, runtime: Handle, tx: UnboundedSender<AppMessage>) -> Result<Self> {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        let gateway = RestGateway::with_timeout(&config.base_url, timeout)?;
        log::info!("Using data service at {}", gateway.base_url());

        let ctx = Arc::new(ServiceContext::with_gateway(Arc::new(gateway)));
        let domains = Arc::new(DomainService::new(Arc::clone(&ctx)));

        Ok(Self {
            ctx,
            domains,
            runtime,
            tx,
        })
    }

    /// 启动：转发会话与列表状态变化，读取首屏数据
    pub fn start(&self) {
        self.forward_session();
        self.forward_list_status();
        self.execute(Command::LoadDomains);
    }

    /// 执行 Update 层产生的指令
    pub fn execute(&self, command: Command) {
        log::debug!("Executing {command:?}");

        match command {
            Command::LoadDomains => {
                let domains = Arc::clone(&self.domains);
                self.spawn(async move {
                    BackendMessage::ListLoaded(domains.list().await.map_err(|e| e.to_string()))
                });
            }

            Command::Refresh => {
                let ctx = Arc::clone(&self.ctx);
                let domains = Arc::clone(&self.domains);
                self.spawn(async move {
                    ctx.cache.invalidate_tags(&[CacheTag::Domain]).await;
                    BackendMessage::ListLoaded(domains.list().await.map_err(|e| e.to_string()))
                });
            }

            Command::OpenAdd => {
                self.domains.open_add();
            }

            Command::OpenEdit(domain) => {
                self.domains.open_edit(domain);
            }

            Command::CloseSession => self.domains.close(),

            Command::Create { session_id, form } => {
                let domains = Arc::clone(&self.domains);
                self.spawn(async move {
                    let result = domains
                        .create(Some(session_id), &form)
                        .await
                        .map_err(|e| e.to_string());
                    BackendMessage::Saved {
                        session_id,
                        kind: OperationKind::Create,
                        result,
                    }
                });
            }

            Command::Update { session_id, form } => {
                let domains = Arc::clone(&self.domains);
                self.spawn(async move {
                    let result = domains
                        .update(Some(session_id), &form)
                        .await
                        .map_err(|e| e.to_string());
                    BackendMessage::Saved {
                        session_id,
                        kind: OperationKind::Update,
                        result,
                    }
                });
            }

            Command::Delete { id } => {
                let domains = Arc::clone(&self.domains);
                self.spawn(async move {
                    let result = domains.delete(&id).await;
                    BackendMessage::Deleted(result.map(|()| id).map_err(|e| e.to_string()))
                });
            }

            Command::Verify { id } => {
                let domains = Arc::clone(&self.domains);
                self.spawn(async move {
                    BackendMessage::Verified(domains.verify(&id).await.map_err(|e| e.to_string()))
                });
            }
        }
    }

    /// 在运行时上执行任务，完成后把结果送回主循环
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = BackendMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = task.await;
            // 接收端关闭说明应用正在退出
            let _ = tx.send(AppMessage::Backend(msg));
        });
    }

    fn forward_session(&self) {
        let mut rx = self.domains.subscribe_session();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            while rx.changed().await.is_ok() {
                let session = rx.borrow_and_update().clone();
                if tx
                    .send(AppMessage::Backend(BackendMessage::Session(session)))
                    .is_err()
                {
                    break;
                }
            }
        });
    }

    fn forward_list_status(&self) {
        let domains = Arc::clone(&self.domains);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let mut rx = domains.subscribe_list().await;
            while rx.changed().await.is_ok() {
                let status = rx.borrow_and_update().clone();
                if tx
                    .send(AppMessage::Backend(BackendMessage::ListStatus(status)))
                    .is_err()
                {
                    break;
                }
            }
        });
    }
}
