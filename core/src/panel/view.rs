use crate::error::ViewClosed;

/// The host's read-only text field, seen only at this boundary.
pub trait LogView: Send + Sync {
    /// Replace the displayed text. `Err` means the field is gone.
    fn set_text(&self, text: &str) -> Result<(), ViewClosed>;
}
