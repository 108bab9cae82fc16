use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use domain_console_core::{Domain, DomainStatus};

use crate::model::App;
use crate::util::fit_tail;
use crate::view::theme::{colors, Styles};

const SKELETON_ROWS: usize = 5;

/// 渲染域名页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 操作栏
            Constraint::Length(1), // 错误提示
            Constraint::Min(1),    // 表格
        ])
        .split(area);

    render_action_bar(app, frame, chunks[0]);

    if app.domains.error.is_some() {
        let notice = Paragraph::new(Line::styled(
            " There was an error on loading domains.",
            Style::default().fg(colors().error),
        ));
        frame.render_widget(notice, chunks[1]);
    }

    if !app.domains.loaded {
        if app.domains.error.is_none() {
            render_skeleton(frame, chunks[2]);
        }
        return;
    }

    let view = app.domains.view();
    if view.is_empty() {
        render_empty(app, frame, chunks[2]);
    } else {
        render_table(app, &view, frame, chunks[2]);
    }
}

/// 渲染操作栏：排序选择 + 搜索框
fn render_action_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let query = &app.domains.query;
    let searching = app.focus.is_search();

    let label_style = Style::default().fg(c.muted);
    let search_style = if searching {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.fg)
    };

    let search_width = usize::from(area.width / 3);
    let search_text = if query.search.is_empty() && !searching {
        Span::styled("Search domains", Style::default().fg(c.muted))
    } else {
        let cursor = if searching { "▎" } else { "" };
        Span::styled(
            format!("{}{cursor}", fit_tail(&query.search, search_width)),
            search_style,
        )
    };

    let mut spans = vec![
        Span::styled(" Sort ", label_style),
        Span::styled(
            format!("◀ {} ▶", query.sort.label()),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Search ", label_style),
        search_text,
    ];
    if app.domains.loading && app.domains.loaded {
        spans.push(Span::styled("   ⟳", Style::default().fg(c.muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 加载中的占位行
fn render_skeleton(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(colors().border);
    let rows = (0..SKELETON_ROWS).map(|_| {
        Row::new(vec![
            Cell::from("░".repeat(24)),
            Cell::from("░".repeat(10)),
            Cell::from("░".repeat(8)),
            Cell::from("░".repeat(16)),
        ])
        .style(style)
    });

    let table = Table::new(rows, column_widths()).header(header());
    frame.render_widget(table, area);
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let message = if app.domains.query.search.is_empty() {
        "  No domains yet.".to_string()
    } else {
        format!("  No domains match \"{}\".", app.domains.query.search)
    };

    let content = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled("  Alt+a to add a domain", Style::default().fg(c.border)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染域名表格
fn render_table(app: &App, view: &[&Domain], frame: &mut Frame, area: Rect) {
    let rows = view.iter().copied().map(domain_row);

    let table = Table::new(rows, column_widths())
        .header(header())
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.domains.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

fn column_widths() -> [Constraint; 4] {
    [
        Constraint::Min(24),
        Constraint::Length(14),
        Constraint::Length(21),
        Constraint::Length(18),
    ]
}

fn header() -> Row<'static> {
    Row::new(vec!["Domain URL", "Active Status", "Verification status", "Created"])
        .style(Styles::header())
}

fn domain_row(domain: &Domain) -> Row<'_> {
    let c = colors();

    let marker = if domain.is_active {
        Span::styled("● ", Style::default().fg(c.success))
    } else {
        Span::styled("! ", Style::default().fg(c.error).add_modifier(Modifier::BOLD))
    };
    let url = Line::from(vec![marker, Span::raw(domain.domain.as_str())]);

    let active = if domain.is_active {
        "Active"
    } else {
        "Not Active"
    };

    let status_color = match domain.status {
        DomainStatus::Verified => c.success,
        DomainStatus::Pending => c.warning,
        DomainStatus::Rejected => c.error,
    };

    Row::new(vec![
        Cell::from(url),
        Cell::from(active),
        Cell::from(Span::styled(
            domain.status.label(),
            Style::default().fg(status_color),
        )),
        Cell::from(format_created(domain.created_date)),
    ])
}

/// 本地时间显示创建时间
fn format_created(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
