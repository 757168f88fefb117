use crate::channel::Channel;
use serde::{Deserialize, Serialize};

/// What Backspace/Escape do to the pending numeric entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CancelMode {
    /// Drop the last typed digit
    #[default]
    RemoveLastDigit,
    /// Reset the whole entry to 0
    Clear,
}

impl CancelMode {
    pub fn apply(self, pending: u32) -> u32 {
        match self {
            Self::RemoveLastDigit => pending / 10,
            Self::Clear => 0,
        }
    }
}

/// Actions produced by key presses and on-screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectChannel(Channel),
    /// Append a decimal digit (0-9) to the pending value
    AppendDigit(u8),
    /// Move the pending value into the active paint value
    CommitValue,
    CancelEntry,
    TogglePreview,
    /// Write the buffer to the export path
    ExportImage,
    /// Capture the window to the screenshot path
    SaveScreenshot,
}

impl Command {
    /// Commands the session cannot carry out on its own and hands back to the app
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::ExportImage | Self::SaveScreenshot)
    }

    /// Label used in the log
    pub fn describe(&self) -> String {
        match self {
            Self::SelectChannel(channel) => format!("Select channel {}", channel),
            Self::AppendDigit(digit) => format!("Append digit {}", digit),
            Self::CommitValue => "Commit value".to_owned(),
            Self::CancelEntry => "Cancel entry".to_owned(),
            Self::TogglePreview => "Toggle preview".to_owned(),
            Self::ExportImage => "Export image".to_owned(),
            Self::SaveScreenshot => "Save screenshot".to_owned(),
        }
    }
}
