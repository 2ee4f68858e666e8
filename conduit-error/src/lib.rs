#![no_std]

use core::fmt;

use alloc::{borrow::Cow, boxed::Box, collections::btree_map::BTreeMap};

extern crate alloc;

pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

pub type Result<T> = core::result::Result<T, Error>;

/// What went wrong on a channel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The cancellation token fired before the operation completed.
    Cancelled,
    /// Every handle on the other side of the channel is gone.
    Closed,
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Cancelled => write!(f, "operation cancelled"),
            ErrorKind::Closed => write!(f, "channel closed"),
            ErrorKind::Other => write!(f, "error"),
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    inner: Option<BoxError>,
    values: BTreeMap<Cow<'static, str>, Cow<'static, str>>,
}

impl Error {
    pub fn new<T: Into<BoxError>>(error: T) -> Error {
        Error {
            kind: ErrorKind::Other,
            inner: Some(error.into()),
            values: Default::default(),
        }
    }

    pub fn cancelled() -> Error {
        Error::from(ErrorKind::Cancelled)
    }

    pub fn closed() -> Error {
        Error::from(ErrorKind::Closed)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == ErrorKind::Cancelled
    }

    pub fn is_closed(&self) -> bool {
        self.kind == ErrorKind::Closed
    }

    pub fn value(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|value| value.as_ref())
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind,
            inner: None,
            values: Default::default(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => write!(f, "{}", inner)?,
            None => write!(f, "{}", self.kind)?,
        }

        if !self.values.is_empty() {
            write!(f, " [")?;
            for (key, value) in self.values.iter() {
                write!(f, "{}: {}, ", key, value)?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.inner.as_deref().map(|inner| inner as _)
    }
}

impl From<BoxError> for Error {
    fn from(value: BoxError) -> Self {
        Error::new(value)
    }
}
