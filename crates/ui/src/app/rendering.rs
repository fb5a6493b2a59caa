use super::App;
use crate::components::{Footer, Header, SentimentPanel, SoapPanel, SummaryPanel, Transcript};
use crate::layout::TuiLayout;
use crate::theme::Theme;

use ratatui::{Frame, Terminal, backend::CrosstermBackend, widgets::Block};
use std::io::Result;

pub fn draw(app: &mut App, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    terminal.draw(|frame| render_frame(app, frame))?;
    Ok(())
}

/// Draw every region of the chat view into `frame`
pub fn render_frame(app: &mut App, frame: &mut Frame<'_>) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::base()), area);

    let layout = TuiLayout::calculate(area);

    Header::new(app.controller().state(), app.backend_label()).render(frame, layout.header);
    Transcript::new(&mut app.view_mut().transcript).render(frame, layout.transcript);

    let view = app.view();
    SummaryPanel::new(&view.summary).render(frame, layout.summary);
    SentimentPanel::new(&view.sentiment).render(frame, layout.sentiment);
    SoapPanel::new(&view.soap).render(frame, &layout);
    Footer::new(&view.input).render(frame, &layout);
}
