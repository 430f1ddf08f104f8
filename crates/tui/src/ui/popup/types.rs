//! Popup type definitions for different dialog variants.

/// Buttons of the "About Settings" dialog, in display order.
pub const ABOUT_BUTTONS: [&str; 2] = ["Full Tutorial", "Close"];

/// The type/kind of popup dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupType {
    /// Informational message box
    Info,
    /// Failure report
    Error,
    /// "About Settings" dialog (holds the selected button index)
    About { selected: usize },
    /// Guided tutorial overlay; message and control come from the sequencer
    Tutorial,
    /// Background color entry; the field lives on the app
    ColorPicker,
}
