//! Colors for console output.

use console::Style;

use super::icons::StatusKind;

/// Styles used by the terminal UI.
#[derive(Debug, Clone)]
pub struct ShopcheckTheme {
    pub pass: Style,
    pub fail: Style,
    pub skip: Style,
    pub warning: Style,
    /// Suite titles and the summary title.
    pub header: Style,
    /// Durations in check lines and summary rows.
    pub duration: Style,
    /// Box-drawing around the summary.
    pub border: Style,
    pub hint: Style,
    pub key: Style,
}

impl Default for ShopcheckTheme {
    fn default() -> Self {
        Self::colored()
    }
}

impl ShopcheckTheme {
    /// Green passes, red failures, dim skips.
    pub fn colored() -> Self {
        Self {
            pass: Style::new().green(),
            fail: Style::new().red().bold(),
            skip: Style::new().dim(),
            warning: Style::new().color256(208),
            header: Style::new().bold().cyan(),
            duration: Style::new().dim(),
            border: Style::new().dim(),
            hint: Style::new().cyan().dim(),
            key: Style::new().bold(),
        }
    }

    /// No styling at all, for pipes and `--no-color`.
    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            pass: none.clone(),
            fail: none.clone(),
            skip: none.clone(),
            warning: none.clone(),
            header: none.clone(),
            duration: none.clone(),
            border: none.clone(),
            hint: none.clone(),
            key: none,
        }
    }

    /// Colored when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Style for a status icon.
    pub fn status(&self, kind: StatusKind) -> &Style {
        match kind {
            StatusKind::Success => &self.pass,
            StatusKind::Failed => &self.fail,
            StatusKind::Skipped => &self.skip,
            StatusKind::Warning => &self.warning,
        }
    }

    /// Suite banner, e.g. `◆ Admin Workflow Test`.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("◆"), self.header.apply_to(title))
    }

    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", key)), value)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}
