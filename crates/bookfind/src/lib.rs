#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # bookfind
//!
//! bookfind is a library for searching public book catalogs by title. Each supported
//! [`Provider`] has its own request format and response shape, results from all of them are
//! normalized into [`BookRecord`]s with defaults filled in for anything the catalog left out.

mod api;
mod error;
mod provider;
pub mod record;
mod search;

pub use api::{Client, Reply};
pub use error::{Error, ErrorKind};
pub use provider::Provider;
pub use record::BookRecord;
pub use search::{Searcher, DEFAULT_DISPLAY_CAP};

use log::trace;

/// Search the `provider` for books with a title matching `query` using the default HTTP client.
///
/// At most `cap` records are returned, `None` returns every record in the response.
///
/// # Errors
///
/// An `Err` is returned when the query is blank.
/// An `Err` is returned when the provider requires a `credential` and none is given.
/// An `Err` is returned when the request fails or the response status is not `200 OK`.
///
/// A response with a body that cannot be understood is not an error, an empty [`Vec`] is
/// returned.
#[inline]
pub fn search(
    provider: Provider,
    query: &str,
    credential: Option<&str>,
    cap: Option<usize>,
) -> Result<Vec<BookRecord>, Error> {
    trace!("Search {provider} for books with a title of '{query}'");
    Searcher::new(provider)
        .credential(credential.map(ToOwned::to_owned))
        .display_cap(cap)
        .search(query)
}
