use crate::theme::Theme;
use crate::transcript::Transcript;

use notetaker_core::ChatMessage;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Turns transcript messages into wrapped, styled lines
///
/// Message text is emitted as plain spans; nothing in it is interpreted.
pub struct TranscriptRenderer<'a> {
    transcript: &'a Transcript,
}

impl<'a> TranscriptRenderer<'a> {
    pub fn new(transcript: &'a Transcript) -> Self {
        Self { transcript }
    }

    /// All lines for the transcript at `width` columns
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (idx, message) in self.transcript.messages().iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            self.render_message(message, width, &mut lines);
        }

        lines
    }

    fn render_message(&self, message: &ChatMessage, width: usize, lines: &mut Vec<Line<'static>>) {
        let role = message.role();
        lines.push(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::MUTED)),
            Span::styled(
                role.as_str(),
                Style::default().fg(Theme::role_color(role)).add_modifier(Modifier::BOLD),
            ),
            Span::styled("] ", Style::default().fg(Theme::MUTED)),
            Span::styled(message.time_label(), Style::default().fg(Theme::MUTED)),
        ]));

        if message.text().is_empty() {
            lines.push(Line::default());
        } else {
            lines.extend(wrap_text(message.text(), Style::default().fg(Theme::FG), width));
        }
    }
}

/// Wrap text into lines based on width
///
/// Respects newlines in the source text, wraps at word boundaries and
/// breaks words longer than the width. Widths are Unicode-aware.
pub fn wrap_text(text: &str, style: Style, max_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if max_width == 0 {
        return lines;
    }

    let styled = |content: String| Line::from(vec![Span::styled(content, style)]);

    for source_line in text.lines() {
        let words: Vec<&str> = source_line.split_whitespace().collect();
        if words.is_empty() {
            lines.push(Line::default());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for word in words {
            let word_width = word.width();
            let space_width = if current_line.is_empty() { 0 } else { 1 };

            if current_width + space_width + word_width > max_width {
                if !current_line.is_empty() {
                    lines.push(styled(std::mem::take(&mut current_line)));
                    current_width = 0;
                }

                if word_width > max_width {
                    let mut chunk = String::new();
                    let mut chunk_width = 0;

                    for ch in word.chars() {
                        let ch_width = ch.width().unwrap_or(0);
                        if chunk_width + ch_width > max_width {
                            lines.push(styled(std::mem::take(&mut chunk)));
                            chunk_width = 0;
                        }
                        chunk.push(ch);
                        chunk_width += ch_width;
                    }

                    if !chunk.is_empty() {
                        lines.push(styled(chunk));
                    }
                    continue;
                }
            }

            if !current_line.is_empty() {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }

        if !current_line.is_empty() {
            lines.push(styled(current_line));
        }
    }

    lines
}
