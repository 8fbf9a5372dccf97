use std::fmt;

use thiserror::Error;

/// Which side of the comparison a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Version recorded in the manifest
    Declared,
    /// Version self-reported by the runtime binding
    Actual,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Declared => "declared",
            Side::Actual => "actual",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{source_label} unavailable: {reason}")]
    Unavailable {
        source_label: String,
        reason: String,
    },
}

impl SourceError {
    pub fn unavailable(source_label: impl Into<String>, reason: impl fmt::Display) -> Self {
        SourceError::Unavailable {
            source_label: source_label.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid {which} version format: {raw:?}")]
    InvalidVersionFormat { which: Side, raw: String },

    #[error(transparent)]
    SourceUnavailable(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_version_format_names_side_and_raw_value() {
        let err = CheckError::InvalidVersionFormat {
            which: Side::Actual,
            raw: "not-a-version".to_string(),
        };

        assert_eq!(
            err.to_string(),
            r#"Invalid actual version format: "not-a-version""#
        );
    }

    #[test]
    fn source_unavailable_is_transparent() {
        let err: CheckError =
            SourceError::unavailable("package solcVersion", "No such file or directory").into();

        assert_eq!(
            err.to_string(),
            "package solcVersion unavailable: No such file or directory"
        );
    }
}
