use log::info;
use serde::Deserialize;

use crate::{record::Fields, BookRecord, Error};

use super::{get_json, Client};

const OPEN_LIBRARY_URL: &str = "https://openlibrary.org/search.json";

macro_rules! cover_url {
    ($cover_id: expr) => {
        format!("http://covers.openlibrary.org/b/id/{}-M.jpg", $cover_id)
    };
}

pub(crate) fn get_books_by_title<C: Client>(
    client: &C,
    title: &str,
    cap: Option<usize>,
) -> Result<Vec<BookRecord>, Error> {
    info!("Searching for title '{title}' using Open Library API");

    let model: Option<SearchModel> = get_json(client, OPEN_LIBRARY_URL, &[("title", title)])?;

    Ok(model
        .map(|SearchModel { docs }| {
            docs.into_iter()
                .take(cap.unwrap_or(usize::MAX))
                .map(BookRecord::from)
                .collect()
        })
        .unwrap_or_default())
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchModel {
    #[serde(default, deserialize_with = "super::skip_invalid")]
    docs: Vec<Doc>,
}

/// A search result from Open Library, unlike Google Books the fields are not nested.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Doc {
    title: Option<String>,
    author_name: Option<Vec<String>>,
    first_publish_year: Option<i32>,
    cover_i: Option<u64>,
}

impl From<Doc> for BookRecord {
    fn from(doc: Doc) -> Self {
        let Doc {
            title,
            author_name,
            first_publish_year,
            cover_i,
        } = doc;

        Fields {
            title,
            authors: author_name,
            published_date: first_publish_year.map(|year| year.to_string()),
            cover_url: cover_i.map(|id| cover_url!(id)),
            description: None,
        }
        .build()
    }
}
