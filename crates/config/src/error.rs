//! Errors raised while extracting the [`Config`](crate::Config).

use crate::Config;
use std::{error::Error, fmt};

/// The message shown when the config could not be extracted from the figment.
pub const FAILED_TO_EXTRACT_CONFIG_MSG: &str = "failed to extract wave portal config:";

/// Represents a failed attempt to extract `Config` from a `Figment`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    pub(crate) error: figment::Error,
}

impl ExtractConfigError {
    /// Wraps the figment error
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }

    /// One line per invalid setting, naming the setting and the source of its value.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.error.count());
        for err in self.error.clone() {
            let line = describe(&err);
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
        lines
    }
}

fn describe(err: &figment::Error) -> String {
    let setting = match err.path.first().map(String::as_str) {
        Some(name) if Config::SETTINGS.contains(&name) => format!("`{name}`"),
        Some(_) => format!("`{}`", err.path.join(".")),
        None => "config".to_string(),
    };
    let source = err.metadata.as_ref().map(|meta| match &meta.source {
        Some(source) => source.to_string(),
        None => meta.name.to_string(),
    });
    match source {
        Some(source) => format!("{setting} from {source}: {}", err.kind),
        None => format!("{setting}: {}", err.kind),
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FAILED_TO_EXTRACT_CONFIG_MSG}")?;
        for line in self.lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}
