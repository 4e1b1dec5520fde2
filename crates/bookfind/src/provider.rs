use std::{fmt, str::FromStr};

/// A book catalog that can be searched by title.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Provider {
    /// The Google Books volumes API, requires an API key.
    #[default]
    GoogleBooks,
    /// The Open Library search API, no credential is used.
    OpenLibrary,
}

impl Provider {
    /// Whether searches against this provider need a credential.
    #[must_use]
    pub const fn requires_credential(self) -> bool {
        matches!(self, Self::GoogleBooks)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoogleBooks => f.write_str("Google Books"),
            Self::OpenLibrary => f.write_str("Open Library"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" | "google-books" | "googlebooks" => Ok(Self::GoogleBooks),
            "openlibrary" | "open-library" => Ok(Self::OpenLibrary),
            other => Err(format!(
                "unknown provider '{other}', expected one of: google, openlibrary"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Provider;

    #[test]
    fn provider_names_parse_case_insensitively() {
        assert_eq!(Ok(Provider::GoogleBooks), "google".parse());
        assert_eq!(Ok(Provider::GoogleBooks), "Google-Books".parse());
        assert_eq!(Ok(Provider::OpenLibrary), "openlibrary".parse());
        assert_eq!(Ok(Provider::OpenLibrary), "OPEN-LIBRARY".parse());
        assert!("amazon".parse::<Provider>().is_err());
    }

    #[test]
    fn only_google_books_requires_a_credential() {
        assert!(Provider::GoogleBooks.requires_credential());
        assert!(!Provider::OpenLibrary.requires_credential());
    }
}
