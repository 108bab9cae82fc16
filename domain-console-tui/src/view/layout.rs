use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " Domain Console v{}  ·  {}",
        env!("CARGO_PKG_VERSION"),
        app.base_url
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染域名页面
fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.modal.is_open() {
        Style::default().fg(c.border)
    } else {
        Style::default().fg(c.border_focused)
    };

    let block = Block::default()
        .title(" Domains ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::domains::render(app, frame, inner_area);
}
