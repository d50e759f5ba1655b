/// Actions that can be triggered by input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Scroll towards older content
    ScrollUp { rows: usize },
    /// Scroll towards newer content
    ScrollDown { rows: usize },
    /// Jump to the newest content and re-engage following
    JumpToBottom,
    /// Move focus to the next assistant/tool entry
    FocusNext,
    /// Move focus to the previous assistant/tool entry
    FocusPrev,
    /// Drop focus
    ClearFocus,
    /// Expand or collapse the focused tool response
    ToggleDisclosure,
    /// Copy the focused (or latest) assistant content to the clipboard
    CopyContent,
    /// Ask the host to regenerate the last assistant turn
    Regenerate,
    /// Leave the application
    Quit,
}
