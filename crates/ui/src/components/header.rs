use crate::{controller::ControllerState, theme::Theme};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Header line: application name, backend, exchange status
pub struct Header<'a> {
    state: ControllerState,
    backend: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(state: ControllerState, backend: &'a str) -> Self {
        Self { state, backend }
    }

    /// Render the header to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let status = self.state.label();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(status.len() as u16 + 2)])
            .split(area);

        let title = Line::from(vec![
            Span::styled(
                "Physician Notetaker",
                Style::default().fg(Theme::CYAN).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" @ ", Style::default().fg(Theme::MUTED)),
            Span::styled(self.backend.to_string(), Style::default().fg(Theme::BLUE)),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let status_color = match self.state {
            ControllerState::Idle => Theme::GREEN,
            ControllerState::AwaitingReply { .. } => Theme::YELLOW,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(status, Style::default().fg(status_color))).alignment(Alignment::Right),
            chunks[1],
        );
    }
}
