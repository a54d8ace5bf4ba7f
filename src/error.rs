/// The coarse category a [`ScrapeError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Decode,
    Selector,
    MalformedInput,
}

/// A failure confined to a single site. Never aborts the other sites of a run.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("status code error: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("unable to decode page: {0}")]
    Decode(String),

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("malformed input: {0}")]
    MalformedInput(&'static str),

    #[error("scrape task aborted: {0}")]
    Aborted(String),
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Fetch(_) | ScrapeError::HttpStatus { .. } => ErrorKind::Fetch,
            ScrapeError::Decode(_) => ErrorKind::Decode,
            ScrapeError::Selector { .. } => ErrorKind::Selector,
            ScrapeError::MalformedInput(_) | ScrapeError::Aborted(_) => ErrorKind::MalformedInput,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file")]
    Io(#[from] std::io::Error),

    #[error("invalid config file")]
    Parse(#[from] toml::de::Error),

    #[error("invalid weekday table: {0}")]
    Weekdays(String),

    #[error("unable to build http client")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_reason() {
        let err = ScrapeError::HttpStatus {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "status code error: 500 Internal Server Error");
        assert_eq!(err.kind(), ErrorKind::Fetch);
    }

    #[test]
    fn aborted_task_is_an_internal_failure() {
        let err = ScrapeError::Aborted("panicked".to_string());
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }
}
