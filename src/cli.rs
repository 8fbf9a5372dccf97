//! Invocation layer: obtain both versions, report them, decide the exit status

use std::io::{self, Write};

use tracing::{error, info};

use crate::config::{EXIT_ERROR, EXIT_MATCH, EXIT_MISMATCH};
use crate::version::checker::{ComparisonResult, check};
use crate::version::error::CheckError;
use crate::version::source::VersionSource;

/// Final outcome of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Mismatch,
    /// A version could not be obtained or was not a valid semantic version
    Failed,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Match => EXIT_MATCH,
            Outcome::Mismatch => EXIT_MISMATCH,
            Outcome::Failed => EXIT_ERROR,
        }
    }
}

impl From<ComparisonResult> for Outcome {
    fn from(result: ComparisonResult) -> Self {
        match result {
            ComparisonResult::Match => Outcome::Match,
            ComparisonResult::Mismatch => Outcome::Mismatch,
        }
    }
}

/// Run the check and write the report.
///
/// Prints the actual version, the declared version and the verdict to `out`;
/// failures go to `err` as `error: <message>`. Both versions are obtained
/// before anything is printed.
pub fn run(
    declared: &dyn VersionSource,
    actual: &dyn VersionSource,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    let versions = declared
        .provide()
        .and_then(|declared_version| Ok((declared_version, actual.provide()?)));

    let (declared_version, actual_version) = match versions {
        Ok(versions) => versions,
        Err(e) => return report_failure(err, e.into()),
    };

    writeln!(out, "{}: {}", actual.label(), actual_version)?;
    writeln!(out, "{}: {}", declared.label(), declared_version)?;

    match check(&declared_version, &actual_version) {
        Ok(result) => {
            let verdict = match result {
                ComparisonResult::Match => "Version matching",
                ComparisonResult::Mismatch => "Version mismatch",
            };
            info!(
                "Compared declared {} with actual {}: {:?}",
                declared_version, actual_version, result
            );
            writeln!(out, "{}", verdict)?;
            Ok(result.into())
        }
        Err(e) => report_failure(err, e),
    }
}

fn report_failure(err: &mut impl Write, e: CheckError) -> io::Result<Outcome> {
    error!("Version check failed: {}", e);
    writeln!(err, "error: {}", e)?;
    Ok(Outcome::Failed)
}
