use std::{collections::BTreeMap, fmt, io, sync::Arc};

/// Decode error: a static key, string arguments and an optional cause chain.
#[derive(Debug, Clone)]
pub struct MatError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<MatCause>,
}

#[derive(Debug, Clone)]
pub enum MatCause {
    Mat(Box<MatError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

pub type MatResult<T> = Result<T, MatError>;

/// Keys carried by decode errors.
pub mod keys {
    pub const IO: &str = "io-error";
    pub const OPEN_FAILED: &str = "open-failed";
    pub const UNEXPECTED_EOF: &str = "unexpected-eof";
    pub const SEEK_OVERFLOW: &str = "seek-overflow";
    pub const TRUNCATED_HEADER: &str = "truncated-header";
    pub const TRUNCATED_RECORD: &str = "truncated-record";
    pub const UNSUPPORTED_FORMAT: &str = "unsupported-format";
    pub const ALLOCATION_FAILED: &str = "allocation-failed";
}

impl MatError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    /// A header or payload at `offset` needs more bytes than the stream has left.
    pub fn truncated(key: &'static str, offset: u64, needed: u64, remaining: u64) -> Self {
        Self::new(key)
            .with_arg("offset", offset)
            .with_arg("needed", needed)
            .with_arg("remaining", remaining)
    }

    pub fn is(&self, key: &str) -> bool {
        self.key == key
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_mat(mut self, cause: MatError) -> Self {
        self.causes.push(MatCause::Mat(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(MatCause::Std(Arc::new(cause)));
        self
    }

    pub fn arg(&self, k: &str) -> Option<&str> {
        self.args.get(k).map(String::as_str)
    }
}

impl fmt::Display for MatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for MatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            MatCause::Mat(e) => Some(e.as_ref() as &dyn std::error::Error),
            MatCause::Std(e) => Some(e.as_ref()),
        })
    }
}

impl From<io::Error> for MatError {
    fn from(err: io::Error) -> Self {
        MatError::new(keys::IO).push_std(err)
    }
}

impl From<std::collections::TryReserveError> for MatError {
    fn from(err: std::collections::TryReserveError) -> Self {
        MatError::new(keys::ALLOCATION_FAILED).push_std(err)
    }
}
