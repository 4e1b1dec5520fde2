//! The normalized form of a single catalog result.

use serde::Serialize;

/// Title used when a result does not have one.
pub const NO_TITLE: &str = "No Title Found";
/// Author used when a result does not list any.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Published date used when a result does not have one.
pub const NO_DATE: &str = "N/A";
/// Description used when a result does not have one.
pub const NO_DESCRIPTION: &str = "No description available.";

/// A book found in a catalog, with every missing field filled by its default.
///
/// Records are only ever produced by the provider adapters from a single response and are not
/// changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    title: String,
    authors: Vec<String>,
    published_date: String,
    cover_url: Option<String>,
    description: String,
}

impl BookRecord {
    /// Title of the book.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Authors in the order the catalog lists them, never empty.
    #[must_use]
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Published date as given by the catalog, the format varies between providers and entries.
    #[must_use]
    pub fn published_date(&self) -> &str {
        &self.published_date
    }

    /// Link to a cover image, if the catalog has one.
    #[must_use]
    pub fn cover_url(&self) -> Option<&str> {
        self.cover_url.as_deref()
    }

    /// Description of the book.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Default for BookRecord {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_owned(),
            authors: vec![UNKNOWN_AUTHOR.to_owned()],
            published_date: NO_DATE.to_owned(),
            cover_url: None,
            description: NO_DESCRIPTION.to_owned(),
        }
    }
}

/// Optional fields pulled out of a raw catalog result by a provider adapter.
///
/// [`Fields::build`] applies the defaults so that a [`BookRecord`] is always complete.
#[derive(Debug, Default)]
pub(crate) struct Fields {
    pub(crate) title: Option<String>,
    pub(crate) authors: Option<Vec<String>>,
    pub(crate) published_date: Option<String>,
    pub(crate) cover_url: Option<String>,
    pub(crate) description: Option<String>,
}

impl Fields {
    pub(crate) fn build(self) -> BookRecord {
        let Self {
            title,
            authors,
            published_date,
            cover_url,
            description,
        } = self;

        let mut record = BookRecord {
            cover_url,
            ..BookRecord::default()
        };

        if let Some(title) = title {
            record.title = title;
        }

        if let Some(mut authors) = authors {
            authors.retain(|author| !author.is_empty());
            if !authors.is_empty() {
                record.authors = authors;
            }
        }

        if let Some(published_date) = published_date {
            record.published_date = published_date;
        }

        if let Some(description) = description {
            record.description = description;
        }

        record
    }
}
