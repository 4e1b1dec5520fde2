pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when searching a book catalog.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    status: Option<u16>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a response, e.g. a timeout, DNS failure or connection reset.
    Transport,
    /// The catalog responded with a status other than `200 OK`.
    Http,
    /// The catalog responded with `403 Forbidden`, usually an invalid key or an exhausted quota.
    Forbidden,
    /// The provider requires a credential and none was given.
    MissingCredential,
    /// The query was empty or only contained whitespace.
    EmptyQuery,
}

impl ErrorKind {
    /// A stable, machine friendly name for the kind of error.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Transport => "transport_error",
            Self::Http => "http_error",
            Self::Forbidden => "forbidden_or_quota",
            Self::MissingCredential => "missing_credential",
            Self::EmptyQuery => "empty_query",
        }
    }
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            status: None,
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            status: None,
            source: Some(source.into()),
        }
    }

    /// Creates the [`Error`] for a response with an unsuccessful HTTP status.
    ///
    /// A `403` status is reported as [`ErrorKind::Forbidden`], anything else as
    /// [`ErrorKind::Http`].
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        let kind = if status == 403 {
            ErrorKind::Forbidden
        } else {
            ErrorKind::Http
        };

        Self {
            kind,
            message: None,
            status: Some(status),
            source: None,
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status code when the error was caused by an unsuccessful response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Transport => f.write_str("Transport error")?,
            ErrorKind::Http => f.write_str("HTTP error")?,
            ErrorKind::Forbidden => f.write_str("Forbidden or quota exceeded")?,
            ErrorKind::MissingCredential => f.write_str("Missing credential")?,
            ErrorKind::EmptyQuery => f.write_str("Empty query")?,
        };

        if let Some(status) = self.status {
            write!(f, ": status {status}")?;
        }

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
