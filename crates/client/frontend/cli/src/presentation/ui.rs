//! UI rendering composed from widgets over the stats view model.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    presentation::{theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};
use client_frontend_core::{CategoryPanel, MessageLog, StatsViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a StatsViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Render the terminal UI.
///
/// The confirmation dialog for "Reset All" is drawn as an overlay on top of
/// the regular layout.
pub fn render<B: Backend>(terminal: &mut Terminal<B>, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        render_stats_ui(frame, ctx, &theme);

        if ctx.app_state.mode == AppMode::ConfirmReset {
            let area = centered_rect(50, 30, frame.area());
            widgets::confirm_reset::render(frame, area);
        }
    })?;

    Ok(())
}

/// Render header, metric tiles, category panels, messages and footer.
fn render_stats_ui(frame: &mut ratatui::Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(3),                        // Metric tiles
            Constraint::Min(0),                           // Category panels
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(3),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model);
    widgets::metrics::render(frame, chunks[1], &ctx.view_model.metrics, theme);
    render_panels(frame, chunks[2], ctx, theme);

    // Panel borders take two lines
    let visible = ctx.message_panel_height.saturating_sub(2) as usize;
    let recent_messages: Vec<_> = ctx.messages.recent(visible).cloned().collect();
    widgets::messages::render(frame, chunks[3], &recent_messages, visible, theme);

    widgets::footer::render(frame, chunks[4], ctx.app_state, theme);
}

/// Lay the category panels out in two columns, preserving category order
/// top-to-bottom then left-to-right.
fn render_panels(frame: &mut ratatui::Frame, area: Rect, ctx: &RenderContext, theme: &RatatuiTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let selected = ctx.app_state.selected_field();
    let (left, right) = ctx
        .view_model
        .panels
        .split_at(ctx.view_model.panels.len().div_ceil(2));

    for (column, panels) in columns.iter().zip([left, right]) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(panel_constraints(panels))
            .split(*column);

        for (panel, rect) in panels.iter().zip(rows.iter()) {
            widgets::category_panel::render(frame, *rect, panel, selected, theme);
        }
    }
}

/// Each panel gets its rows plus borders; leftover space goes to the end.
fn panel_constraints(panels: &[CategoryPanel]) -> Vec<Constraint> {
    panels
        .iter()
        .map(|panel| Constraint::Length(panel.rows.len() as u16 + 2))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect()
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
