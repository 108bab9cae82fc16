use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, Modal, NotificationLevel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 通知显示在提示之后
    if let Some(ref notification) = app.notification {
        let c = colors();
        let (icon, color) = match notification.level {
            NotificationLevel::Success => ("✓", c.success),
            NotificationLevel::Error => ("✗", c.error),
            NotificationLevel::Info => ("•", c.fg),
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{icon} {}", notification.message),
            Style::default().fg(color),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.modal.active {
        Some(Modal::DomainForm(_)) => vec![
            ("Tab", "Next Field"),
            ("←→/Space", "Change"),
            ("Enter", "Submit"),
            ("Esc", "Cancel"),
        ],
        Some(Modal::Help) => vec![("Esc", "Close")],
        None if app.focus.is_search() => vec![("Enter/Esc", "Done"), ("Ctrl+u", "Clear")],
        None => {
            let mut hints = vec![("↑↓", "Select"), ("Alt+a", "Add"), ("Enter", "Edit")];
            // 已验证的记录不提供验证操作
            let can_verify = app
                .domains
                .selected_domain()
                .is_some_and(|d| d.status != domain_console_core::DomainStatus::Verified);
            if can_verify {
                hints.push(("Alt+v", "Verify"));
            }
            hints.extend([
                ("Alt+d", "Delete"),
                ("/", "Search"),
                ("s", "Sort"),
                ("?", "Help"),
                ("q", "Quit"),
            ]);
            hints
        }
    }
}
