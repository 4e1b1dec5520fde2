use log::info;
use serde::Deserialize;

use crate::{record::Fields, BookRecord, Error};

use super::{get_json, Client};

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

pub(crate) fn get_books_by_title<C: Client>(
    client: &C,
    title: &str,
    key: &str,
    cap: Option<usize>,
) -> Result<Vec<BookRecord>, Error> {
    info!("Searching for title '{title}' using Google Books API");

    let model: Option<GoogleModel> =
        get_json(client, GOOGLE_BOOKS_URL, &[("q", title), ("key", key)])?;

    Ok(model
        .map(|GoogleModel { items }| {
            items
                .into_iter()
                .take(cap.unwrap_or(usize::MAX))
                .map(BookRecord::from)
                .collect()
        })
        .unwrap_or_default())
}

/// A query without any matches has no `items` at all.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    #[serde(default, deserialize_with = "super::skip_invalid")]
    items: Vec<Item>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    #[serde(rename = "volumeInfo", default)]
    volume_info: Option<VolumeInfo>,
}

/// Volume information from the Google Books API
#[derive(Deserialize, Default)]
#[cfg_attr(test, derive(Debug))]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
    description: Option<String>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct ImageLinks {
    thumbnail: Option<String>,
}

impl From<Item> for BookRecord {
    fn from(item: Item) -> Self {
        // Deconstruct item to take ownership of fields (avoids cloning).
        let VolumeInfo {
            title,
            authors,
            published_date,
            image_links,
            description,
        } = item.volume_info.unwrap_or_default();

        Fields {
            title,
            authors,
            published_date,
            cover_url: image_links.and_then(|links| links.thumbnail),
            description,
        }
        .build()
    }
}
