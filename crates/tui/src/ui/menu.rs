//! Slide-in side menu.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use settings_config::constants::{MENU_CLOSED_OFFSET, MENU_OPEN_OFFSET};

use crate::app::{App, Focus, MENU_WIDTH, side_menu_entries};

/// Columns of the menu on screen for the current offset.
pub fn visible_width(offset: i32) -> u16 {
    let travel = (MENU_OPEN_OFFSET - MENU_CLOSED_OFFSET) as u32;
    let shown = (offset - MENU_CLOSED_OFFSET).clamp(0, travel as i32) as u32;
    (shown * u32::from(MENU_WIDTH) / travel) as u16
}

/// Draw the menu over the left edge of `area`, cut to its slide position.
pub fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let width = visible_width(app.menu.offset()).min(area.width);
    if width == 0 {
        return;
    }
    let theme = &app.theme;
    let menu_area = Rect { width, ..area };

    let mut lines = vec![
        Line::styled(
            " User Account ",
            Style::default()
                .fg(theme.text)
                .bg(theme.border)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for (i, (label, _)) in side_menu_entries().iter().enumerate() {
        let selected = app.focus == Focus::Menu && i == app.menu_selected;
        let style = if selected {
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::styled(format!(" {label}"), style));
    }

    // Content slides in from the left: hide the columns still off screen.
    let hidden = MENU_WIDTH.saturating_sub(width);
    let p = Paragraph::new(lines)
        .style(Style::default().bg(theme.menu_bg))
        .scroll((0, hidden))
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(Clear, menu_area);
    f.render_widget(p, menu_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_width_scales_with_offset() {
        assert_eq!(visible_width(MENU_CLOSED_OFFSET), 0);
        assert_eq!(visible_width(MENU_OPEN_OFFSET), MENU_WIDTH);
        assert_eq!(visible_width(-125), MENU_WIDTH / 2);
    }
}
