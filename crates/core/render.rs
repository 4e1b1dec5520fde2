use std::str::FromStr;

use bookfind::{BookRecord, Error, ErrorKind};
use eyre::{Result, WrapErr};

pub const NO_RESULTS: &str = "No books found. Please try another title.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Markdown,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}', expected one of: markdown, json"
            )),
        }
    }
}

pub fn render(books: &[BookRecord], format: Format) -> Result<String> {
    match format {
        Format::Markdown => Ok(markdown(books)),
        Format::Json => serde_json::to_string_pretty(books)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .wrap_err("Cannot render books as json"),
    }
}

fn markdown(books: &[BookRecord]) -> String {
    if books.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    let mut s = String::new();
    for book in books {
        s.push_str(&format!("### {}\n", book.title()));
        s.push_str(&format!("**Author(s):** {}\n", book.authors().join(", ")));
        s.push_str(&format!("**Published Date:** {}\n", book.published_date()));
        if let Some(cover) = book.cover_url() {
            s.push_str(&format!("![cover]({cover})\n"));
        }
        s.push_str(&format!("**Description:** {}\n", book.description()));
        s.push_str("---\n");
    }
    s
}

/// The message shown to the user in place of results when a search fails.
pub fn error_message(err: &Error) -> String {
    match err.kind() {
        ErrorKind::Forbidden => "Access to the book catalog was denied (HTTP 403). Check that the \
            API key is valid and that its quota has not been used up."
            .to_owned(),
        ErrorKind::Http => match err.status() {
            Some(status) => format!("Error fetching data from the book catalog (HTTP {status})."),
            None => "Error fetching data from the book catalog.".to_owned(),
        },
        ErrorKind::Transport => {
            "Could not reach the book catalog, check the network connection.".to_owned()
        }
        ErrorKind::MissingCredential => "This book catalog requires an API key, use --key or \
            set GOOGLE_BOOKS_API_KEY."
            .to_owned(),
        ErrorKind::EmptyQuery => "Enter a book title to search for.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use bookfind::{Client, Error, ErrorKind, Provider, Reply, Searcher};

    use super::{error_message, render, Format, NO_RESULTS};

    #[derive(Default)]
    struct DuneClient;

    impl Client for DuneClient {
        fn fetch(&self, _: &str, _: &[(&str, &str)]) -> Result<Reply, Error> {
            Ok(Reply::new(
                200,
                r#"{"docs":[
                    {"title":"Dune","author_name":["Frank Herbert"],"first_publish_year":1965,"cover_i":7},
                    {"title":"Dune Messiah","author_name":["Frank Herbert","Brian Herbert"]}
                ]}"#,
            ))
        }
    }

    fn dune_books() -> Vec<bookfind::BookRecord> {
        Searcher::with_client(Provider::OpenLibrary, DuneClient)
            .search("Dune")
            .expect("DuneClient always replies with valid json")
    }

    #[test]
    fn markdown_renders_each_book_with_separator() {
        let out = render(&dune_books(), Format::Markdown).unwrap();

        assert_eq!(
            "### Dune\n\
             **Author(s):** Frank Herbert\n\
             **Published Date:** 1965\n\
             ![cover](http://covers.openlibrary.org/b/id/7-M.jpg)\n\
             **Description:** No description available.\n\
             ---\n\
             ### Dune Messiah\n\
             **Author(s):** Frank Herbert, Brian Herbert\n\
             **Published Date:** N/A\n\
             **Description:** No description available.\n\
             ---\n",
            out
        );
    }

    #[test]
    fn no_books_renders_no_results_message() {
        let out = render(&[], Format::Markdown).unwrap();
        assert_eq!(format!("{NO_RESULTS}\n"), out);
    }

    #[test]
    fn json_renders_every_field() {
        let out = render(&dune_books(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(2, value.as_array().unwrap().len());
        assert_eq!("Dune", value[0]["title"]);
        assert_eq!("Frank Herbert", value[0]["authors"][0]);
        assert_eq!("1965", value[0]["published_date"]);
        assert_eq!(
            "http://covers.openlibrary.org/b/id/7-M.jpg",
            value[0]["cover_url"]
        );
        assert!(value[1]["cover_url"].is_null());
        assert_eq!("No description available.", value[1]["description"]);
    }

    #[test]
    fn format_names_parse() {
        assert_eq!(Ok(Format::Markdown), "markdown".parse());
        assert_eq!(Ok(Format::Markdown), "MD".parse());
        assert_eq!(Ok(Format::Json), "json".parse());
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn error_messages_are_specific_to_the_failure() {
        let forbidden = error_message(&Error::from_status(403));
        assert!(forbidden.contains("403"), "{forbidden}");
        assert!(forbidden.contains("quota"), "{forbidden}");

        let http = error_message(&Error::from_status(500));
        assert!(http.contains("HTTP 500"), "{http}");

        let missing = error_message(&Error::new(ErrorKind::MissingCredential, "no key"));
        assert!(missing.contains("GOOGLE_BOOKS_API_KEY"), "{missing}");

        let transport = error_message(&Error::new(ErrorKind::Transport, "reset"));
        assert!(transport.contains("network"), "{transport}");
    }
}
