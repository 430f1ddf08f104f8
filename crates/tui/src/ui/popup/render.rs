//! Popup rendering implementation.
//!
//! This module provides the `render_popup` function for rendering modal popup
//! dialogs with appropriate styling based on popup type.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use settings_config::Theme;

use crate::app::App;
use crate::ui::popup::{ABOUT_BUTTONS, POPUP_HEIGHT_PERCENT, POPUP_WIDTH_PERCENT, Popup, PopupType};

/// Render a modal popup dialog.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `popup` - The popup to render
/// * `theme` - The color theme to use
/// * `app` - The app state (tutorial text, color field)
pub fn render_popup(f: &mut Frame, popup: &Popup, theme: &Theme, app: &App) {
    let popup_area = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, popup_area);

    let border_color = match &popup.kind {
        PopupType::Error => theme.error,
        PopupType::Info | PopupType::ColorPicker => theme.border,
        PopupType::About { .. } | PopupType::Tutorial => theme.title,
    };

    let lines = match &popup.kind {
        PopupType::Info | PopupType::Error => vec![
            Line::from(""),
            Line::from(popup.content.as_str()),
            Line::from(""),
            button_line("OK", true, theme),
        ],
        PopupType::About { selected } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "About Settings",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            lines.extend(
                ABOUT_BUTTONS
                    .iter()
                    .enumerate()
                    .map(|(i, label)| button_line(label, i == *selected, theme)),
            );
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                popup.content.as_str(),
                Style::default().fg(theme.text_dim),
            )));
            lines
        }
        PopupType::Tutorial => {
            let message = app.tutorial.message().unwrap_or_default();
            let control = app
                .tutorial
                .control()
                .map(|c| c.label())
                .unwrap_or("Close");
            vec![
                Line::from(""),
                Line::from(message),
                Line::from(""),
                button_line(control, true, theme),
            ]
        }
        PopupType::ColorPicker => {
            let value = if app.color_input.is_empty() {
                Span::styled(
                    app.color_input.placeholder().unwrap_or_default(),
                    Style::default().fg(theme.text_dim),
                )
            } else {
                Span::raw(app.color_input.value())
            };
            let mut lines = vec![
                Line::from(popup.content.as_str()),
                Line::from(""),
                Line::from(vec![Span::raw("> "), value]),
            ];
            if let Some(error) = &app.color_error {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    error.as_str(),
                    Style::default().fg(theme.error),
                )));
            }
            lines
        }
    };

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(popup.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .style(Style::default().fg(theme.text).bg(theme.content_bg))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, popup_area);
}

fn button_line<'a>(label: &'a str, selected: bool, theme: &Theme) -> Line<'a> {
    let style = if selected {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    Line::from(Span::styled(format!("[ {label} ]"), style))
}

/// Centered sub-rectangle taking the given percentages of `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
