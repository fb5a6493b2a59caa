use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use notetaker_core::{Role, SentimentStyle};

/// Iceberg color theme for the notetaker TUI
///
/// Based on iceberg.vim color scheme (https://github.com/cocopon/iceberg.vim)
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Primary background: deep blue-black (fills terminal)
    pub const BG: Color = Color::Rgb(22, 24, 33);

    /// Foreground: light blue-gray (primary text)
    pub const FG: Color = Color::Rgb(198, 200, 209);

    /// Secondary background: panels and input
    pub const PANEL_BG: Color = Color::Rgb(30, 33, 50);

    pub const BLUE: Color = Color::Rgb(132, 160, 198);

    pub const CYAN: Color = Color::Rgb(137, 184, 194);

    pub const PURPLE: Color = Color::Rgb(160, 147, 199);

    /// Reassured sentiment, idle status
    pub const GREEN: Color = Color::Rgb(180, 190, 130);

    /// Anxious sentiment, pending exchanges
    pub const YELLOW: Color = Color::Rgb(226, 164, 120);

    pub const RED: Color = Color::Rgb(226, 120, 120);

    /// Muted text: dimmed foreground
    pub const MUTED: Color = Color::Rgb(107, 112, 137);

    pub const BORDER: Color = Color::Rgb(60, 65, 90);

    /// Base style for all text
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Primary accent style
    pub fn primary() -> Style {
        Style::default().fg(Self::BLUE).bg(Self::BG)
    }

    /// Muted style (for secondary text)
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::BG)
    }

    /// Panel style
    pub fn panel() -> Style {
        Style::default().fg(Self::FG).bg(Self::PANEL_BG)
    }

    /// Border style
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Panel title style
    pub fn title() -> Style {
        Style::default().fg(Self::CYAN).add_modifier(Modifier::BOLD)
    }

    /// Get sentiment color
    pub fn sentiment_color(style: SentimentStyle) -> Color {
        match style {
            SentimentStyle::Anxious => Self::YELLOW,
            SentimentStyle::Reassured => Self::GREEN,
            SentimentStyle::Neutral => Self::MUTED,
        }
    }

    /// Get span with sentiment styling
    pub fn sentiment_span(text: &str, style: SentimentStyle) -> Span<'_> {
        Span::styled(
            text,
            Style::default().fg(Self::sentiment_color(style)).add_modifier(Modifier::BOLD),
        )
    }

    /// Get role label color
    pub fn role_color(role: Role) -> Color {
        match role {
            Role::Patient => Self::BLUE,
            Role::Physician => Self::PURPLE,
        }
    }
}
