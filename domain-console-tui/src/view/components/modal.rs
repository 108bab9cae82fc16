use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use domain_console_core::DomainStatus;

use crate::model::state::DomainFormModal;
use crate::model::{App, FormField, Modal};
use crate::util::fit_tail;
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::DomainForm(form) => render_domain_form(frame, form),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距区域
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// 渲染新增 / 编辑表单
fn render_domain_form(frame: &mut Frame, modal: &DomainFormModal) {
    let c = colors();
    let area = centered_rect(56, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", modal.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let inner = inner_rect(area);
    let mut lines = Vec::new();

    // === Domain URL ===
    let url_focused = modal.focus == FormField::DomainUrl;
    lines.push(Line::from(vec![
        Span::styled("Domain URL", label_style(url_focused)),
        Span::styled(" *", Style::default().fg(c.error)),
    ]));
    let url_width = usize::from(inner.width.saturating_sub(4));
    let url_line = if modal.form.domain.is_empty() && !url_focused {
        Line::styled("  https://example.com", Style::default().fg(Color::DarkGray))
    } else {
        let cursor = if url_focused { "▎" } else { "" };
        Line::styled(
            format!("  {}{cursor}", fit_tail(&modal.form.domain, url_width)),
            Style::default().fg(Color::White),
        )
    };
    lines.push(url_line);
    match modal.error {
        Some(ref err) => lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(Color::Red),
        )),
        None => lines.push(Line::from("")),
    }

    // === Status ===
    let status_focused = modal.focus == FormField::Status;
    lines.push(Line::styled("Status", label_style(status_focused)));
    let mut status_spans = vec![Span::raw("  ")];
    for status in DomainStatus::ALL {
        let style = if status == modal.form.status {
            Style::default().fg(Color::Black).bg(if status_focused {
                Color::Cyan
            } else {
                Color::White
            })
        } else {
            Style::default().fg(Color::DarkGray)
        };
        status_spans.push(Span::styled(format!(" {} ", status.as_str()), style));
        status_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(status_spans));
    lines.push(Line::from(""));

    // === Active ===
    let active_focused = modal.focus == FormField::Active;
    lines.push(Line::styled("Active", label_style(active_focused)));
    let (switch, switch_color) = if modal.form.is_active {
        ("  [■ ON ]", c.success)
    } else {
        ("  [ OFF□]", c.muted)
    };
    lines.push(Line::styled(switch, Style::default().fg(switch_color)));
    lines.push(Line::from(""));

    // === 按钮 ===
    let submit = if modal.submitting {
        format!(" ⟳ {}… ", modal.submit_label())
    } else {
        format!(" {} ", modal.submit_label())
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" Cancel ", Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled(
            submit,
            Style::default()
                .fg(Color::Black)
                .bg(if modal.submitting { Color::DarkGray } else { Color::Cyan }),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Next | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Submit | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(50, 19, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let section = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled("List", section),
        help_line("↑↓/jk", "Move Up/Down"),
        help_line("/", "Search by domain"),
        help_line("s / S", "Next / previous sort"),
        help_line("Alt+r", "Refresh"),
        help_line("q", "Quit"),
        Line::from(""),
        Line::styled("Actions", section),
        help_line("Alt+a", "Add domain"),
        help_line("Enter", "Edit selected"),
        help_line("Alt+v", "Verify selected"),
        help_line("Alt+d", "Remove selected"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
