//! Top bar and recommended bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus, RECOMMENDED_ITEMS};

/// Title, search field, Wi-Fi indicator, About and hamburger buttons.
pub fn render_top_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bar = Style::default().fg(theme.top_bar_fg).bg(theme.top_bar_bg);

    let search = if app.focus == Focus::Search {
        Span::styled(
            format!(" {}_ ", app.search_input.value()),
            Style::default().fg(theme.text).bg(theme.content_bg),
        )
    } else if app.search_input.is_empty() {
        Span::styled(
            format!(" {} ", app.search_input.placeholder().unwrap_or_default()),
            bar.add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(format!(" {} ", app.search_input.value()), bar)
    };

    let line = Line::from(vec![
        Span::styled(" Settings ", bar.add_modifier(Modifier::BOLD)),
        Span::styled("  🔍", bar),
        search,
        Span::styled("   📶 ", bar),
        Span::styled(" ⬆ About (a) ", bar),
        Span::styled(" ☰ Menu (m) ", bar),
    ]);

    let p = Paragraph::new(line).style(bar).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(bar),
    );
    f.render_widget(p, area);
}

/// Shortcut buttons along the bottom, bound to F1..F7.
pub fn render_recommended_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let style = Style::default().fg(theme.text).bg(theme.recommended_bg);

    let spans: Vec<Span> = RECOMMENDED_ITEMS
        .iter()
        .enumerate()
        .flat_map(|(i, item)| {
            [
                Span::styled(
                    format!(" F{} ", i + 1),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{item}  "), style),
            ]
        })
        .collect();

    let p = Paragraph::new(Line::from(spans)).style(style).block(
        Block::default()
            .title(" Recommended ")
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(p, area);
}
