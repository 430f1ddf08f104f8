//! Toast notification widgets for transient feedback messages.
//!
//! Toasts are the non-blocking notifications of the simulator: a search
//! with no match raises an info toast, a background color the desktop
//! refused raises a warning. Expired toasts are pruned on tick.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use settings_config::Theme;
use std::time::{Duration, Instant};

use crate::app::{RECOMMENDED_BAR_HEIGHT, TOP_BAR_HEIGHT};

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Informational message
    Info,
    /// Something the user asked for did not happen
    Warning,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info => Duration::from_secs(5),
            Self::Warning => Duration::from_secs(8),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// Severity level
    pub level: ToastLevel,
    /// When this toast was created
    pub created_at: Instant,
    /// Time-to-live before auto-expiry
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the given message and level.
    pub fn new(message: String, level: ToastLevel) -> Self {
        let ttl = level.ttl();
        Self {
            message,
            level,
            created_at: Instant::now(),
            ttl,
        }
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }
}

/// Maximum number of toasts to display at once (prevents screen overflow).
const MAX_TOASTS: usize = 5;

const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 50;

/// Renders all active toasts in the bottom-right corner of the content area.
///
/// Toasts are stacked vertically with the most recent at the bottom.
/// Expired toasts are skipped; at most `MAX_TOASTS` are shown.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let skip = active.len().saturating_sub(MAX_TOASTS);
    let active = &active[skip..];

    let total_height = active.len() as u16 * TOAST_HEIGHT;
    let area = f.area();
    if area.height < TOP_BAR_HEIGHT + RECOMMENDED_BAR_HEIGHT + total_height + 2
        || area.width < TOAST_WIDTH + 2
    {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 2),
        y: area
            .height
            .saturating_sub(RECOMMENDED_BAR_HEIGHT + total_height + 1),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(TOAST_HEIGHT), active.len()).collect::<Vec<_>>(),
        )
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Warning => theme.warning,
    };

    // Single line; truncate on a char boundary
    let max_chars = area.width.saturating_sub(4 + toast.level.label().len() as u16 + 2) as usize;
    let message: String = if toast.message.chars().count() > max_chars {
        let kept: String = toast
            .message
            .chars()
            .take(max_chars.saturating_sub(3))
            .collect();
        format!("{kept}...")
    } else {
        toast.message.clone()
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", toast.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(theme.text)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .style(Style::default().bg(theme.content_bg))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiration() {
        let toast = Toast::info("Test message");
        assert!(!toast.is_expired(), "Fresh toast should not be expired");

        let mut expired_toast = Toast::info("Test");
        expired_toast.ttl = Duration::from_millis(1);
        expired_toast.created_at = Instant::now() - Duration::from_secs(1);
        assert!(expired_toast.is_expired(), "Old toast should be expired");
    }

    #[test]
    fn test_toast_level_ttl() {
        assert_eq!(ToastLevel::Info.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Warning.ttl(), Duration::from_secs(8));
    }

    #[test]
    fn test_toast_constructors() {
        let info = Toast::info("info");
        assert_eq!(info.level, ToastLevel::Info);
        assert_eq!(info.ttl, ToastLevel::Info.ttl());

        let warning = Toast::warning("warning");
        assert_eq!(warning.level, ToastLevel::Warning);
        assert_eq!(warning.message, "warning");
    }
}
