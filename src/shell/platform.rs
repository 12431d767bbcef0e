//! Platform shell and CI detection.

/// Shell used to run external commands.
pub fn shell_program() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Flag that makes [`shell_program`] run a command string.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

/// Variables whose presence means we run under CI.
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
];

/// Check if running in a CI environment.
///
/// Used by `main()` to pick the non-interactive UI.
pub fn is_ci() -> bool {
    ci_marker(|name| std::env::var_os(name).is_some()).is_some()
}

fn ci_marker(is_set: impl Fn(&str) -> bool) -> Option<&'static str> {
    CI_MARKERS.iter().copied().find(|name| is_set(name))
}
