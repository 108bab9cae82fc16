use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.focus.is_search() {
        return handle_search_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    handle_list_keys(key)
}

/// 处理列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::ACTION_ADD.matches(&key) {
        ContentMessage::Add
    } else if DefaultKeymap::ACTION_EDIT.matches(&key) {
        ContentMessage::Edit
    } else if DefaultKeymap::ACTION_DELETE.matches(&key) {
        ContentMessage::Delete
    } else if DefaultKeymap::ACTION_VERIFY.matches(&key) {
        ContentMessage::Verify
    } else if DefaultKeymap::SEARCH.matches(&key) {
        ContentMessage::FocusSearch
    } else if DefaultKeymap::SORT_NEXT.matches(&key) {
        ContentMessage::NextSort
    } else {
        match key.code {
            // Shift+s: 上一种排序
            KeyCode::Char('S') => ContentMessage::PrevSort,
            KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
            KeyCode::Home => ContentMessage::SelectFirst,
            KeyCode::End => ContentMessage::SelectLast,
            KeyCode::Enter => ContentMessage::Edit,
            _ => return AppMessage::Noop,
        }
    };

    AppMessage::Content(msg)
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            ContentMessage::LeaveSearch
        }
        KeyCode::Backspace => ContentMessage::SearchBackspace,
        KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => {
            ContentMessage::SearchClear
        }
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            ContentMessage::SearchInput(ch)
        }
        _ => return AppMessage::Noop,
    };

    AppMessage::Content(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let accepts_text = matches!(app.modal.active, Some(Modal::DomainForm(_)));

    let msg = match key.code {
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Tab | KeyCode::Down => ModalMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => ModalMessage::PrevField,
        KeyCode::Left => ModalMessage::Left,
        KeyCode::Right => ModalMessage::Right,
        KeyCode::Backspace => ModalMessage::Backspace,
        KeyCode::Char(ch)
            if accepts_text
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            ModalMessage::Input(ch)
        }
        KeyCode::Char('q') => ModalMessage::Close,
        _ => return AppMessage::Noop,
    };

    AppMessage::Modal(msg)
}
