//! Shell command execution.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{Result, ShopcheckError};

use super::platform::{shell_flag, shell_program};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long output readers get to finish after a timeout kill.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timeout).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed at the timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Last non-empty line of stderr, falling back to stdout.
    pub fn last_output_line(&self) -> Option<&str> {
        last_line(&self.stderr).or_else(|| last_line(&self.stdout))
    }
}

fn last_line(s: &str) -> Option<&str> {
    s.lines().rev().map(str::trim).find(|l| !l.is_empty())
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Kill the command after this long (None = no timeout).
    pub timeout: Option<Duration>,
}

/// Execute a command through the platform shell, capturing its output.
///
/// A non-zero exit or a timeout is still `Ok`; only a command that could not
/// be started is an error.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(shell_program());
    cmd.arg(shell_flag()).arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    for (key, value) in &options.env {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    own_process_group(&mut cmd);

    debug!(command, cwd = ?options.cwd, timeout = ?options.timeout, "Starting command");

    let mut child = cmd.spawn().map_err(|e| {
        debug!(command, error = %e, "Command failed to start");
        ShopcheckError::CommandFailed {
            command: command.to_string(),
        }
    })?;

    let stdout_handle = child.stdout.take().map(collect_output);
    let stderr_handle = child.stderr.take().map(collect_output);

    let (status, timed_out) = wait_with_timeout(&mut child, options.timeout)?;
    let duration = start.elapsed();

    // A grandchild that outlived the kill may still hold the pipes open.
    let drain_deadline = timed_out.then(|| Instant::now() + DRAIN_GRACE);
    let stdout = join_output(stdout_handle, drain_deadline);
    let stderr = join_output(stderr_handle, drain_deadline);

    if timed_out {
        warn!(command, ?duration, "Command timed out and was killed");
    }

    let success = !timed_out && status.is_some_and(|s| s.success());
    Ok(CommandResult {
        exit_code: if timed_out {
            None
        } else {
            status.and_then(|s| s.code())
        },
        stdout,
        stderr,
        duration,
        success,
        timed_out,
    })
}

fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
) -> Result<(Option<std::process::ExitStatus>, bool)> {
    let Some(timeout) = timeout else {
        return Ok((Some(child.wait()?), false));
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((Some(status), false));
        }
        if Instant::now() >= deadline {
            kill_process_tree(child);
            child.wait().ok();
            return Ok((None, true));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Start the shell as the leader of a new process group, so a timeout can
/// take down everything it spawned.
#[cfg(unix)]
fn own_process_group(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(not(unix))]
fn own_process_group(_cmd: &mut Command) {}

fn kill_process_tree(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pid) = libc::pid_t::try_from(child.id()) {
            // SAFETY: kill() only sends a signal; a negative pid addresses the
            // group the child leads.
            unsafe {
                libc::kill(-pid, libc::SIGKILL);
            }
        }
    }
    child.kill().ok();
}

fn collect_output<R: Read + Send + 'static>(stream: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    })
}

fn join_output(handle: Option<JoinHandle<String>>, deadline: Option<Instant>) -> String {
    let Some(handle) = handle else {
        return String::new();
    };
    if let Some(deadline) = deadline {
        while !handle.is_finished() {
            if Instant::now() >= deadline {
                debug!("Output reader still blocked after kill, leaving it behind");
                return String::new();
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
    handle.join().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello", &CommandOptions::default()).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
        assert!(!result.timed_out);
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("echo broken >&2; exit 3", &CommandOptions::default()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.last_output_line(), Some("broken"));
    }

    #[test]
    fn execute_with_env() {
        let mut env = HashMap::new();
        env.insert("SHOPCHECK_TEST_VAR".to_string(), "from-env".to_string());
        let options = CommandOptions {
            env,
            ..Default::default()
        };
        let result = execute("echo $SHOPCHECK_TEST_VAR", &options).unwrap();
        assert!(result.stdout.contains("from-env"));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let result = execute("ls", &options).unwrap();
        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn execute_kills_on_timeout() {
        let options = CommandOptions {
            timeout: Some(Duration::from_millis(200)),
            ..Default::default()
        };
        let result = execute("exec sleep 5", &options).unwrap();
        assert!(result.timed_out);
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert!(result.duration < Duration::from_secs(5));
    }

    #[test]
    fn timeout_kills_commands_started_by_the_shell() {
        let options = CommandOptions {
            timeout: Some(Duration::from_secs(1)),
            ..Default::default()
        };
        let start = Instant::now();
        let result = execute("sleep 8; echo done", &options).unwrap();

        assert!(result.timed_out);
        assert!(!result.stdout.contains("done"));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn missing_cwd_fails_to_start() {
        let options = CommandOptions {
            cwd: Some(PathBuf::from("/definitely/not/a/dir")),
            ..Default::default()
        };
        let err = execute("echo hi", &options).unwrap_err();
        assert!(matches!(err, ShopcheckError::CommandFailed { .. }));
    }
}
