use log::{debug, trace};

use crate::{
    api::{google_books, open_library, Client},
    BookRecord, Error, ErrorKind, Provider,
};

/// The number of records returned by a [`Searcher`] unless changed with
/// [`Searcher::display_cap`].
pub const DEFAULT_DISPLAY_CAP: usize = 10;

/// Searches a single [`Provider`] by title.
///
/// The credential and display cap are fixed when the searcher is built, every call to
/// [`Searcher::search`] is a single independent request.
///
/// # Examples
///
/// ```no_run
/// use bookfind::{Provider, Searcher};
///
/// let searcher = Searcher::new(Provider::OpenLibrary).display_cap(Some(2));
/// for book in searcher.search("Dune")? {
///     println!("{} by {}", book.title(), book.authors().join(", "));
/// }
/// # Ok::<(), bookfind::Error>(())
/// ```
#[derive(Debug)]
pub struct Searcher<C: Client = reqwest::blocking::Client> {
    client: C,
    provider: Provider,
    credential: Option<String>,
    cap: Option<usize>,
}

impl Searcher {
    /// Creates a [`Searcher`] for the `provider` that uses a default HTTP client.
    #[must_use]
    pub fn new(provider: Provider) -> Self {
        Self::with_client(provider, reqwest::blocking::Client::default())
    }
}

impl<C: Client> Searcher<C> {
    /// Creates a [`Searcher`] for the `provider` that sends requests through `client`.
    pub fn with_client(provider: Provider, client: C) -> Self {
        Self {
            client,
            provider,
            credential: None,
            cap: Some(DEFAULT_DISPLAY_CAP),
        }
    }

    /// Sets the credential sent to providers that use one.
    ///
    /// An empty string is the same as no credential.
    #[must_use]
    pub fn credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential.filter(|c| !c.is_empty());
        self
    }

    /// Sets the maximum number of records returned from a search, `None` returns all of them.
    #[must_use]
    pub fn display_cap(mut self, cap: Option<usize>) -> Self {
        self.cap = cap;
        self
    }

    /// The provider this searcher sends requests to.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.provider
    }

    /// Search the provider for books matching the `query` title.
    ///
    /// Records are returned in the order the provider lists them, at most the display cap.
    /// A response that cannot be understood is treated as no results.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::EmptyQuery`] is returned when `query` is blank.
    /// An `Err` with [`ErrorKind::MissingCredential`] is returned when the provider requires a
    /// credential and none was set, no request is made.
    /// An `Err` with [`ErrorKind::Forbidden`] is returned for a `403` response and
    /// [`ErrorKind::Http`] for any other status that is not `200`.
    /// An `Err` with [`ErrorKind::Transport`] is returned when no response was received.
    pub fn search(&self, query: &str) -> Result<Vec<BookRecord>, Error> {
        if query.trim().is_empty() {
            return Err(Error::new(ErrorKind::EmptyQuery, "Enter a title to search for"));
        }

        trace!("Search {} for title of '{query}'", self.provider);

        match self.provider {
            Provider::GoogleBooks => {
                let key = self.credential.as_deref().ok_or_else(|| {
                    Error::new(
                        ErrorKind::MissingCredential,
                        "Google Books requires an API key",
                    )
                })?;
                google_books::get_books_by_title(&self.client, query, key, self.cap)
            }
            Provider::OpenLibrary => {
                if self.credential.is_some() {
                    debug!("Open Library does not use a credential - ignoring it");
                }
                open_library::get_books_by_title(&self.client, query, self.cap)
            }
        }
    }
}
