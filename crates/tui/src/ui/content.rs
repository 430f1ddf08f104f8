//! Content area drawing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::animation::Backdrop;
use crate::app::{App, Focus};
use crate::view::Element;

pub fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = match app.backdrop {
        Backdrop::Normal => theme.content_bg,
        Backdrop::Highlight => theme.flash_bg,
    };
    let selected = match app.focus {
        Focus::Content => app.navigator.selected(),
        Focus::Search | Focus::Menu => None,
    };

    let mut lines = Vec::new();
    let mut button_index = 0;
    for element in app.navigator.content().elements() {
        match element {
            Element::Heading(text) => {
                lines.push(Line::styled(
                    text.as_str(),
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::from(""));
            }
            Element::SubHeading(text) => lines.push(Line::styled(
                text.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Element::Label(text) => lines.push(Line::from(text.as_str())),
            Element::UpdateStatus => lines.push(Line::from(app.update_status.as_str())),
            Element::Button { label, .. } => {
                let style = if selected == Some(button_index) {
                    Style::default()
                        .fg(theme.highlight_fg)
                        .bg(theme.highlight_bg)
                } else {
                    Style::default().fg(theme.text)
                };
                lines.push(Line::styled(format!("[ {label} ]"), style));
                button_index += 1;
            }
        }
    }

    let p = Paragraph::new(lines)
        .style(Style::default().fg(theme.text).bg(bg))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(p, area);
}
