//! How much a run prints.

/// Output verbosity, picked from `--verbose`, `--quiet` and `--json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Check lines plus the extra lines of multi-line details.
    Verbose,
    #[default]
    Normal,
    /// Check lines and the summary box; no extra messages or hints.
    Quiet,
    /// Errors only. Used with `--json` so stdout carries just the report.
    Silent,
}

impl OutputMode {
    /// `--json` wins over `--quiet`, which wins over `--verbose`.
    pub fn from_flags(verbose: bool, quiet: bool, json: bool) -> Self {
        match (json, quiet, verbose) {
            (true, _, _) => Self::Silent,
            (false, true, _) => Self::Quiet,
            (false, false, true) => Self::Verbose,
            (false, false, false) => Self::Normal,
        }
    }

    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Headers, hints and other messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// The summary box is shown unless silent.
    pub fn shows_summary(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_precedence() {
        assert_eq!(OutputMode::from_flags(true, true, true), OutputMode::Silent);
        assert_eq!(OutputMode::from_flags(true, true, false), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(true, false, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, false, false), OutputMode::Normal);
    }

    #[test]
    fn quiet_keeps_check_lines_and_summary() {
        let quiet = OutputMode::Quiet;
        assert!(quiet.shows_spinners());
        assert!(quiet.shows_summary());
        assert!(!quiet.shows_status());
        assert!(!quiet.shows_details());
    }

    #[test]
    fn silent_shows_nothing() {
        let silent = OutputMode::Silent;
        assert!(!silent.shows_spinners());
        assert!(!silent.shows_summary());
        assert!(!silent.shows_status());
    }

    #[test]
    fn verbose_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
