//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  This makes it easy to change the
//! visual layout without touching business logic.
//!
//! ## For contributors
//!
//! * The layout is a header (countdown and position), the article body, an
//!   optional link panel and a one-line status bar.
//! * Colours and styles are defined inline.
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Draw the complete UI for one frame.
///
/// `now` drives the refresh countdown in the header.
pub fn draw(app: &App, frame: &mut Frame, now: Instant) {
    let link_height = if app.show_link { 3 } else { 0 };
    let [header_area, body_area, link_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(link_height),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(app, frame, header_area, now);
    draw_article(app, frame, body_area);
    if app.show_link {
        draw_link(app, frame, link_area);
    }
    draw_status_bar(app, frame, status_area);
}

/// Title line, countdown and `i/n` position.
fn draw_header(app: &App, frame: &mut Frame, area: Rect, now: Instant) {
    let position = if app.store.is_empty() {
        String::new()
    } else {
        format!("{}/{}", app.store.index() + 1, app.store.len())
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "RSS Reader",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(app.clock.countdown(now), Style::default().fg(Color::DarkGray)),
            Span::raw("   "),
            Span::styled(position, Style::default().fg(Color::DarkGray)),
        ]),
    ]);
    frame.render_widget(header, area);
}

/// Render the current article, or a placeholder when nothing is loaded.
fn draw_article(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let Some(article) = app.store.current() else {
        let empty = Paragraph::new("No articles loaded")
            .style(Style::default().fg(Color::White))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            article.title.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            article.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(body, area);
}

/// The article URL, shown on request so it can be opened elsewhere.
fn draw_link(app: &App, frame: &mut Frame, area: Rect) {
    let link = app
        .store
        .current()
        .map(|a| a.link.as_str())
        .filter(|l| !l.is_empty())
        .unwrap_or("(no link)");

    let panel = Paragraph::new(Span::styled(link, Style::default().fg(Color::Cyan)))
        .block(Block::default().title(" Link ").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  ←: newer  →: older  o: link  r: refresh  q: quit"),
    ]));
    frame.render_widget(status, area);
}
