/// Actions that can be triggered by key events
///
/// Plain editing keys are applied to the input directly and produce no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send the current input
    Send,
    /// Scroll the transcript one page towards older messages
    PageUp,
    /// Scroll the transcript one page towards newer messages
    PageDown,
    /// Leave the application
    Quit,
}
