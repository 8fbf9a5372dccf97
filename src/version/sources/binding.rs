//! Runtime binding source
//!
//! Runs a shell command that loads the binding and prints the version it
//! reports, e.g. `node -p "require('./index.js').version()"` or
//! `solc --version`.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use regex::Regex;
use tracing::{debug, info, warn};

use crate::config::BINDING_POLL_INTERVAL_MS;
use crate::version::checker::VersionString;
use crate::version::error::SourceError;
use crate::version::source::VersionSource;

pub struct BindingSource {
    label: String,
    command: String,
    timeout: Duration,
    /// Regex for a token that starts like a version: `0.8.21`, `v1.2.3-rc.1+commit.abc`
    version_re: Regex,
}

impl BindingSource {
    pub fn new(label: impl Into<String>, command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
            timeout,
            version_re: Regex::new(r"^v?\d+\.\d+\.\d+").expect("version pattern is a valid regex"),
        }
    }

    /// Pick the reported version out of the command output.
    ///
    /// Output that is a single token is returned unchanged. Otherwise the
    /// first whitespace-delimited token that starts like a version is
    /// returned whole, so `0.8.21.1` or `0.8.21-` stay intact and fail the
    /// check. When there is no such token, the first non-empty line is
    /// returned as-is so that the check reports it as an invalid version.
    fn extract_version(&self, output: &str) -> Option<String> {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            return None;
        }
        if !trimmed.contains(char::is_whitespace) {
            return Some(trimmed.to_string());
        }

        if let Some(token) = trimmed
            .split_whitespace()
            .find(|token| self.version_re.is_match(token))
        {
            return Some(token.to_string());
        }

        trimmed
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
    }

    fn shell_command(&self) -> Command {
        let (shell, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };
        let mut command = Command::new(shell);
        command.arg(flag).arg(&self.command);
        command
    }

    /// Poll the child until it exits, killing it once the timeout elapses
    fn wait_with_timeout(&self, child: &mut Child) -> Result<ExitStatus, SourceError> {
        let deadline = Instant::now() + self.timeout;

        loop {
            let status = child
                .try_wait()
                .map_err(|e| SourceError::unavailable(&self.label, e))?;
            if let Some(status) = status {
                return Ok(status);
            }

            if Instant::now() >= deadline {
                warn!(
                    "Binding command `{}` timed out after {:?}, killing it",
                    self.command, self.timeout
                );
                if let Err(e) = child.kill() {
                    warn!("Failed to kill binding command: {}", e);
                }
                let _ = child.wait();
                return Err(SourceError::unavailable(
                    &self.label,
                    format!("`{}` timed out after {:?}", self.command, self.timeout),
                ));
            }

            thread::sleep(Duration::from_millis(BINDING_POLL_INTERVAL_MS));
        }
    }
}

/// Drain a pipe on its own thread so a chatty child never blocks on a full pipe
fn spawn_reader(pipe: Option<impl Read + Send + 'static>) -> Option<JoinHandle<String>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut bytes = Vec::new();
            if let Err(e) = pipe.read_to_end(&mut bytes) {
                warn!("Failed to read binding command output: {}", e);
            }
            String::from_utf8_lossy(&bytes).into_owned()
        })
    })
}

fn join_reader(reader: Option<JoinHandle<String>>) -> String {
    reader
        .map(|handle| handle.join().unwrap_or_default())
        .unwrap_or_default()
}

impl VersionSource for BindingSource {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn provide(&self) -> Result<VersionString, SourceError> {
        debug!("Running binding command: {}", self.command);

        let mut child = self
            .shell_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                SourceError::unavailable(
                    &self.label,
                    format!("failed to run `{}`: {}", self.command, e),
                )
            })?;

        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        // On timeout the readers are left detached: a grandchild may still hold the pipes
        let status = self.wait_with_timeout(&mut child)?;
        let stdout = join_reader(stdout_reader);
        let stderr = join_reader(stderr_reader);

        if !status.success() {
            return Err(SourceError::unavailable(
                &self.label,
                format!("`{}` exited with {}: {}", self.command, status, stderr.trim()),
            ));
        }

        let version = self.extract_version(&stdout).ok_or_else(|| {
            SourceError::unavailable(
                &self.label,
                format!("`{}` printed no version", self.command),
            )
        })?;

        info!("Binding reported version {}", version);
        Ok(VersionString::new(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn source() -> BindingSource {
        BindingSource::new("solcVersion", "true", Duration::from_secs(5))
    }

    #[rstest]
    #[case("0.8.21+commit.d9974bed.Emscripten.clang\n", Some("0.8.21+commit.d9974bed.Emscripten.clang"))]
    // the token is kept whole, even when it is not valid semver
    #[case(
        "solc, the solidity compiler commandline interface\nVersion: 0.8.21+commit.d9974bed.Linux.g++\n",
        Some("0.8.21+commit.d9974bed.Linux.g++")
    )]
    #[case("v1.2.3-rc.1\n", Some("v1.2.3-rc.1"))]
    #[case("tool 2.0.0 (built 2024-01-01)", Some("2.0.0"))]
    #[case("0.8.21.1", Some("0.8.21.1"))]
    #[case("0.8.21-", Some("0.8.21-"))]
    #[case("0.8.21garbage x", Some("0.8.21garbage"))]
    #[case("  0.8.21garbage\n", Some("0.8.21garbage"))]
    #[case("\n  unknown  \nmore", Some("unknown"))] // falls back to the first line
    #[case("1.2\n", Some("1.2"))]
    #[case("", None)]
    #[case("  \n\n", None)]
    fn extract_version_returns_expected(#[case] output: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            source().extract_version(output),
            expected.map(str::to_string)
        );
    }

    #[cfg(unix)]
    #[test]
    fn provide_returns_command_output() {
        let source = BindingSource::new("solcVersion", "echo 0.8.21", Duration::from_secs(5));
        assert_eq!(source.provide().unwrap().as_str(), "0.8.21");
    }

    #[cfg(unix)]
    #[test]
    fn provide_fails_when_command_fails() {
        let source = BindingSource::new(
            "solcVersion",
            "echo binding not loaded >&2; exit 3",
            Duration::from_secs(5),
        );

        let err = source.provide().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("solcVersion unavailable: "), "{message}");
        assert!(message.contains("binding not loaded"), "{message}");
    }

    #[cfg(unix)]
    #[test]
    fn provide_fails_when_command_prints_nothing() {
        let source = BindingSource::new("solcVersion", "true", Duration::from_secs(5));
        let err = source.provide().unwrap_err();
        assert!(err.to_string().contains("printed no version"));
    }

    #[cfg(unix)]
    #[rstest]
    #[case("head -c 200000 /dev/zero | tr '\\0' w >&2; echo 0.8.21")]
    #[case("head -c 200000 /dev/zero | tr '\\0' w; echo; echo 0.8.21")]
    fn provide_drains_large_output_while_waiting(#[case] command: &str) {
        let source = BindingSource::new("solcVersion", command, Duration::from_secs(10));
        assert_eq!(source.provide().unwrap().as_str(), "0.8.21");
    }

    #[cfg(unix)]
    #[rstest]
    #[case("printf '0.8.21.1'", "0.8.21.1")]
    #[case("printf '0.8.21-'", "0.8.21-")]
    #[case("printf '0.8.21garbage x'", "0.8.21garbage")]
    fn provide_keeps_malformed_token_intact(#[case] command: &str, #[case] expected: &str) {
        let source = BindingSource::new("solcVersion", command, Duration::from_secs(5));
        assert_eq!(source.provide().unwrap().as_str(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn provide_fails_after_timeout() {
        let source = BindingSource::new("solcVersion", "sleep 5", Duration::from_millis(100));

        let started = Instant::now();
        let err = source.provide().unwrap_err();

        assert!(err.to_string().contains("timed out"));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
