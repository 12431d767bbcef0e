//! Status icons for check lines and summary rows.

use crate::runner::CheckStatus;

use super::theme::ShopcheckTheme;

/// What a console line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Failed,
    Skipped,
    /// Not a check status; used for warnings such as a halted run.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Warning => "⚠",
        }
    }

    /// Fixed-width tag for CI logs, matching the report's status words.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[PASS]",
            Self::Failed => "[FAIL]",
            Self::Skipped => "[SKIP]",
            Self::Warning => "[WARN]",
        }
    }

    pub fn styled(self, theme: &ShopcheckTheme) -> String {
        theme.status(self).apply_to(self.icon()).to_string()
    }

    /// Icon and message, the message in the status color.
    pub fn format(self, theme: &ShopcheckTheme, msg: &str) -> String {
        theme
            .status(self)
            .apply_to(format!("{} {}", self.icon(), msg))
            .to_string()
    }

    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Pass => Self::Success,
            CheckStatus::Fail => Self::Failed,
            CheckStatus::Skipped => Self::Skipped,
        }
    }
}
