use log::{trace, warn};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

pub(crate) mod google_books;
pub(crate) mod open_library;

/// The status and body of a catalog response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    /// Creates a new [`Reply`] from a HTTP status code and the response body.
    #[must_use]
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// The response body as text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// The seam between the catalog adapters and the network.
///
/// A single `GET` is issued per call; implementations must not retry.
pub trait Client
where
    Self: Default,
{
    /// Issue a `GET` to `url` with the query `params` URL-encoded and appended.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::Transport`] is returned when no response could be read.
    fn fetch(&self, url: &str, params: &[(&str, &str)]) -> Result<Reply, Error>;
}

impl Client for reqwest::blocking::Client {
    fn fetch(&self, url: &str, params: &[(&str, &str)]) -> Result<Reply, Error> {
        let resp = self
            .get(url)
            .query(params)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))?;

        Ok(Reply { status, body })
    }
}

/// Fetch `url` and deserialize the body as JSON.
///
/// A body that does not match `T` is not an error, `Ok(None)` is returned instead so callers
/// can treat it as an empty result set.
pub(crate) fn get_json<C, T>(
    client: &C,
    url: &str,
    params: &[(&str, &str)],
) -> Result<Option<T>, Error>
where
    C: Client,
    T: DeserializeOwned,
{
    let reply = client.fetch(url, params)?;

    if reply.status() != 200 {
        return Err(Error::from_status(reply.status()));
    }

    trace!("Request was successful");

    match serde_json::from_str(reply.body()) {
        Ok(model) => Ok(Some(model)),
        Err(e) => {
            warn!("Response from '{url}' had an unexpected shape, treating as no results: {e}");
            Ok(None)
        }
    }
}

/// Deserialize a list, dropping the elements that do not match `T` instead of failing the list.
pub(crate) fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let total = values.len();

    let items: Vec<T> = values
        .into_iter()
        .filter_map(|value| T::deserialize(value).ok())
        .collect();

    if items.len() < total {
        warn!(
            "Skipped {} result(s) with an unexpected shape",
            total - items.len()
        );
    }

    Ok(items)
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_reply_producer, take_requested_url, MockClient, NetworkErrorProducer,
    Producer,
};

use crate::{Error, ErrorKind};


#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::{get_json, impl_reply_producer, MockClient, NetworkErrorProducer, Reply};
    use crate::ErrorKind;

    #[derive(Debug, Deserialize)]
    struct Model {
        items: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    struct LenientModel {
        #[serde(deserialize_with = "super::skip_invalid")]
        items: Vec<String>,
    }

    impl_reply_producer! {
        OkProducer => Ok(Reply::new(200, r#"{ "items": ["a", "b"] }"#)),
        NotFoundProducer => Ok(Reply::new(404, "Not Found")),
        ForbiddenProducer => Ok(Reply::new(403, r#"{ "error": { "code": 403 } }"#)),
        HtmlProducer => Ok(Reply::new(200, "<html>maintenance</html>")),
    }

    #[test]
    fn ok_reply_is_deserialized() {
        let model: Model = get_json(&MockClient::<OkProducer>::default(), "https://test/", &[])
            .expect("200 reply")
            .expect("body matches model");

        assert_eq!(vec!["a", "b"], model.items);
    }

    #[test]
    fn non_200_reply_is_an_error_even_with_a_body() {
        let err = get_json::<_, Model>(
            &MockClient::<NotFoundProducer>::default(),
            "https://test/",
            &[],
        )
        .expect_err("404 is not a success");
        assert_eq!(ErrorKind::Http, err.kind());
        assert_eq!(Some(404), err.status());

        let err = get_json::<_, Model>(
            &MockClient::<ForbiddenProducer>::default(),
            "https://test/",
            &[],
        )
        .expect_err("403 is not a success");
        assert_eq!(ErrorKind::Forbidden, err.kind());
    }

    #[test]
    fn unexpected_body_is_not_an_error() {
        let res = get_json::<_, Model>(
            &MockClient::<HtmlProducer>::default(),
            "https://test/",
            &[],
        )
        .expect("malformed body is not a hard failure");
        assert!(res.is_none());

        let res = get_json::<_, Model>(&<MockClient>::default(), "https://test/", &[])
            .expect("empty body is not a hard failure");
        assert!(res.is_none());
    }

    #[test]
    fn invalid_elements_are_skipped_not_the_whole_list() {
        let model: LenientModel =
            serde_json::from_str(r#"{ "items": ["a", null, 3, "b", {"c": 1}] }"#).unwrap();
        assert_eq!(vec!["a", "b"], model.items);

        assert!(serde_json::from_str::<LenientModel>(r#"{ "items": "a" }"#).is_err());
    }

    #[test]
    fn transport_errors_are_passed_through() {
        let err = get_json::<_, Model>(
            &MockClient::<NetworkErrorProducer>::default(),
            "https://test/",
            &[],
        )
        .expect_err("producer always fails");
        assert_eq!(ErrorKind::Transport, err.kind());
        assert_eq!(None, err.status());
    }
}
