use thiserror::Error;

/// Unified error type for release-notes operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Command `{command}` failed with exit code {code}\nStdout: {stdout}\nStderr: {stderr}")]
    ExternalCommand {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("Invalid version '{input}': {source}")]
    VersionParse {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("Unknown category '{prefix}' in commit subject: {subject}")]
    UnknownCategory { prefix: String, subject: String },

    #[error("Malformed commit subject, expected '<category>: <module>: <description>': {subject}")]
    MalformedSubject { subject: String },

    #[error("No release tag precedes version {version}")]
    NoPrecedingRelease { version: String },

    #[error("Malformed git log line, expected 4 fields: {line}")]
    MalformedLogLine { line: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in release-notes
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        ReleaseError::Template(msg.into())
    }

    pub fn malformed_subject(subject: impl Into<String>) -> Self {
        ReleaseError::MalformedSubject {
            subject: subject.into(),
        }
    }
}
