//! Frame composition: header, school list, status line, detail overlay and alerts.
//!
//! Drawing is independent of the backend so the same code renders to the real
//! terminal and to ratatui's `TestBackend`.

use crate::app::state::AppState;
use crate::data::LoadState;
use crate::render::detail::{detail_lines, DetailLine};
use crate::render::layout::{
    AlertLayout, OverlayLayout, ScreenLayout, CLOSE_BUTTON, OK_BUTTON, VIEW_BUTTON,
};
use crate::render::text::{truncate, wrap};
use crate::render::ui::state::ViewState;
use crate::render::ui::theme::ColorTheme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const TITLE: &str = "New York City Schools";
pub const EMPTY_LIST: &str = "No schools found";

/// Draw the whole screen for the current state.
pub fn draw(frame: &mut Frame, state: &AppState, view: &ViewState, theme: &ColorTheme) {
    let area = frame.size();
    let layout = ScreenLayout::compute(area);

    frame.render_widget(Block::default().style(theme.base), area);
    draw_header(frame, layout.header, theme);
    draw_list(frame, &layout, state, view, theme);
    draw_status(frame, layout.status, state, view, theme);

    if let Some(detail) = state.detail() {
        let overlay = OverlayLayout::for_detail(area, &detail);
        let lines: Vec<Line> = detail_lines(&detail, overlay.body.width, overlay.body.height)
            .into_iter()
            .map(|line| styled_detail_line(line, theme))
            .collect();

        frame.render_widget(Clear, overlay.outer);
        frame.render_widget(
            Block::default().borders(Borders::ALL).style(theme.overlay),
            overlay.outer,
        );
        frame.render_widget(Paragraph::new(lines), overlay.body);
        frame.render_widget(
            Paragraph::new(CLOSE_BUTTON).style(theme.button),
            overlay.close_button,
        );
    }

    if let Some(message) = state.alert() {
        draw_alert(frame, area, message, theme);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let rows = area.height as usize;
    // Vertically centre the title inside the header band.
    let mut lines = vec![Line::from(""); rows / 2];
    lines.push(Line::from(TITLE));
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(theme.header);
    frame.render_widget(header, area);
}

fn draw_list(
    frame: &mut Frame,
    layout: &ScreenLayout,
    state: &AppState,
    view: &ViewState,
    theme: &ColorTheme,
) {
    let schools = state.schools();
    match schools.state() {
        // Nothing to show until the directory arrives.
        LoadState::Unloaded => {}
        LoadState::Empty => {
            let placeholder = Paragraph::new(EMPTY_LIST).alignment(Alignment::Center);
            frame.render_widget(placeholder, layout.list);
        }
        LoadState::Populated => {
            let name_width = layout.name_width() as usize;
            let total = schools.len();
            for (offset, index) in view.visible_range(total).enumerate() {
                let Some(school) = schools.get(index) else {
                    break;
                };
                let row_style = if index == view.cursor {
                    theme.selection
                } else {
                    theme.row
                };
                let name = format!(
                    " {:<width$}",
                    truncate(&school.school_name, name_width.saturating_sub(1)),
                    width = name_width.saturating_sub(1)
                );
                let row_area = Rect::new(
                    layout.list.x,
                    layout.list.y + offset as u16,
                    layout.name_width().min(layout.list.width),
                    1,
                );
                frame.render_widget(Paragraph::new(name).style(row_style), row_area);
                frame.render_widget(
                    Paragraph::new(VIEW_BUTTON).style(theme.button),
                    layout.view_button(offset as u16),
                );
            }
        }
    }
}

/// Load progress plus key hints for the current mode.
pub fn status_text(state: &AppState, view: &ViewState) -> String {
    let schools = state.schools();
    let schools_part = match schools.state() {
        LoadState::Unloaded => "Loading schools...".to_string(),
        LoadState::Empty => "0 schools".to_string(),
        LoadState::Populated => format!("School {}/{}", view.cursor + 1, schools.len()),
    };
    let scores_part = match state.scores().state() {
        LoadState::Unloaded => "SAT scores loading".to_string(),
        _ => format!("{} SAT records", state.scores().len()),
    };
    let hints = if state.alert().is_some() {
        "Enter dismiss  q quit"
    } else if state.is_overlay_open() {
        "Enter/c close  Esc back  q quit"
    } else {
        "j/k move  Enter view  q quit"
    };
    format!(" {schools_part} | {scores_part} | {hints}")
}

fn draw_status(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &ViewState,
    theme: &ColorTheme,
) {
    let status = Paragraph::new(status_text(state, view)).style(theme.status);
    frame.render_widget(status, area);
}

fn styled_detail_line(line: DetailLine, theme: &ColorTheme) -> Line<'static> {
    match line {
        DetailLine::Title(text) => Line::from(Span::styled(text, theme.overlay_title)),
        DetailLine::Heading(text) => Line::from(Span::styled(text, theme.overlay_heading)),
        DetailLine::Text(text) => Line::from(text),
        DetailLine::Score { label, value } => Line::from(vec![
            Span::styled(label, theme.overlay_heading),
            Span::raw(" "),
            Span::raw(value),
        ]),
        DetailLine::Blank => Line::from(""),
    }
}

fn draw_alert(frame: &mut Frame, area: Rect, message: &str, theme: &ColorTheme) {
    let text_width = AlertLayout::text_width(area);
    let message_lines = wrap(message, text_width as usize);
    let alert = AlertLayout::compute(area, message_lines.len() as u16);

    frame.render_widget(Clear, alert.outer);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .style(theme.alert),
        alert.outer,
    );
    let lines: Vec<Line> = message_lines.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        alert.message,
    );
    frame.render_widget(Paragraph::new(OK_BUTTON).style(theme.button), alert.ok_button);
}
