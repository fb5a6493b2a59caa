use crate::{layout::TuiLayout, state::InputState, theme::Theme};

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Footer: bordered input line with key hints on the right
pub struct Footer<'a> {
    input: &'a InputState,
}

impl<'a> Footer<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self { input }
    }

    /// Render footer to the given frame and place the cursor
    pub fn render(&self, frame: &mut Frame<'_>, layout: &TuiLayout) {
        let input_area = layout.footer_input();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(Span::styled(" Message ", Theme::title()));
        let inner = block.inner(input_area);
        frame.render_widget(block, input_area);

        let (visible, cursor_col) = self.visible_input(inner.width as usize);
        let line = if self.input.buffer().is_empty() {
            Line::from(Span::styled("Describe how you are feeling...", Style::default().fg(Theme::MUTED)))
        } else {
            Line::from(Span::styled(visible, Style::default().fg(Theme::FG)))
        };
        frame.render_widget(Paragraph::new(line), inner);

        if inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
        }

        self.render_hints(frame, layout.footer_hints());
    }

    /// The slice of the buffer that fits `width`, kept around the cursor, and the cursor column in it
    fn visible_input(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }

        let chars: Vec<char> = self.input.buffer().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let mut start = 0;
        while start < cursor && chars[start..cursor].iter().collect::<String>().width() >= width {
            start += 1;
        }

        let mut visible = String::new();
        for ch in &chars[start..] {
            visible.push(*ch);
            if visible.width() > width {
                visible.pop();
                break;
            }
        }

        let cursor_col = chars[start..cursor].iter().collect::<String>().width();
        (visible, cursor_col)
    }

    fn render_hints(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut spans = Vec::new();
        if let Some(position) = self.input.history_position() {
            spans.push(Span::styled(format!("[{}] ", position), Style::default().fg(Theme::PURPLE)));
        }
        spans.extend([
            Span::styled("[Enter]", Style::default().fg(Theme::BLUE)),
            Span::styled(" send ", Style::default().fg(Theme::MUTED)),
            Span::styled("[Esc]", Style::default().fg(Theme::BLUE)),
            Span::styled(" quit", Style::default().fg(Theme::MUTED)),
        ]);

        let hints_area = Rect { y: area.y + area.height.saturating_sub(2), height: 1.min(area.height), ..area };
        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), hints_area);
    }
}
