//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Ok(msg) = rx.try_recv() { ... }       // 取出后台任务送回的消息
//!     if let Some(event) = poll_event() { ... }       // 轮询按键，最多等待 100ms
//!     dispatch(Tick)                                  // 通知过期检查
//! }
//!
//! 每条消息都经过 update::update，若返回 Command 则交给 CoreService。
//! 网络请求都在 tokio 运行时上执行，主循环从不等待网络。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &CoreService,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台结果
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, backend, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(app, backend, msg);
        }

        // 5. 通知过期
        dispatch(app, backend, AppMessage::Tick);
    }

    Ok(())
}

/// 更新状态，并执行产生的指令
fn dispatch(app: &mut App, backend: &CoreService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        backend.execute(command);
    }
}
