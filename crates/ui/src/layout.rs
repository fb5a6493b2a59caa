use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout breakpoints for responsive TUI
///
/// - >= 100 cols: transcript, summary and SOAP note side by side
/// - < 100 cols: summary and SOAP note side by side under the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Side-by-side layout (>= 100 columns)
    Wide,
    /// Stacked layout (<= 99 columns)
    Narrow,
}

impl From<u16> for LayoutMode {
    fn from(width: u16) -> Self {
        match width {
            w if w >= 100 => Self::Wide,
            _ => Self::Narrow,
        }
    }
}

/// Calculated layout for the TUI
#[derive(Debug, Clone)]
pub struct TuiLayout {
    pub mode: LayoutMode,
    /// Header area (1 line)
    pub header: Rect,
    pub transcript: Rect,
    pub summary: Rect,
    /// Sentiment label (one line inside a border)
    pub sentiment: Rect,
    /// Container for the four SOAP regions
    pub soap: Rect,
    /// Footer area (input line with hints)
    pub footer: Rect,
}

impl TuiLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let mode = LayoutMode::from(area.width);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let header = chunks[0];
        let main = chunks[1];
        let footer = chunks[2];

        let (transcript, summary_column, soap) = match mode {
            LayoutMode::Wide => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(30), Constraint::Percentage(30)])
                    .split(main);
                (columns[0], columns[1], columns[2])
            }
            LayoutMode::Narrow => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(main);
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(rows[1]);
                (rows[0], columns[0], columns[1])
            }
        };

        let summary_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(summary_column);

        Self {
            mode,
            header,
            transcript,
            summary: summary_chunks[0],
            sentiment: summary_chunks[1],
            soap,
            footer,
        }
    }

    /// Get footer input area
    pub fn footer_input(&self) -> Rect {
        self.footer_chunks()[0]
    }

    /// Get footer hints area
    pub fn footer_hints(&self) -> Rect {
        self.footer_chunks()[1]
    }

    fn footer_chunks(&self) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(28)])
            .split(self.footer)
    }

    /// Get the four SOAP regions, sharing the column in proportion to `heights`
    pub fn soap_sections(&self, heights: [u16; 4]) -> SoapSections {
        SoapSections::new(self.soap, heights)
    }
}

/// One region per SOAP section, in Subjective, Objective, Assessment, Plan order
///
/// Each region gets a share of the column proportional to the rows its text
/// needs, so every section fits whenever the whole note does.
pub struct SoapSections {
    pub subjective: Rect,
    pub objective: Rect,
    pub assessment: Rect,
    pub plan: Rect,
}

impl SoapSections {
    fn new(area: Rect, heights: [u16; 4]) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(heights.map(|h| Constraint::Fill(h.max(1))))
            .split(area);

        Self { subjective: chunks[0], objective: chunks[1], assessment: chunks[2], plan: chunks[3] }
    }
}
