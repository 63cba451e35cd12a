//! Request-level query decoding with failure logging.

use flatkey::decoder::Decoder;

use crate::error::Result;
use crate::query::{FromQuery, Values};

/// Parses a raw query string into `T`.
///
/// On failure a warning is logged and the error is returned unchanged; use
/// [`Error::status_code`](crate::Error::status_code) to answer the client.
pub fn parse_query<T: FromQuery + Default>(raw: &str) -> Result<T> {
    let values = Values::parse(raw);
    Decoder::<Values, T>::decode(&values).inspect_err(|err| {
        tracing::warn!(
            event = "http.parse.err",
            error = %err,
            status = err.status_code(),
            "cannot parse request query"
        );
    })
}

#[cfg(test)]
mod tests {
    use flatkey::decoder::DecodableFrom;

    use super::parse_query;
    use crate::error::Error;
    use crate::query::{FromQuery, Schema, Values};

    #[derive(Debug, Default)]
    struct Search {
        term: String,
        page: Option<u16>,
    }

    impl DecodableFrom<Values> for Search {}

    impl FromQuery for Search {
        fn describe(schema: &mut Schema<Self>) {
            schema
                .field("term,required", |s| &mut s.term)
                .field("page", |s| &mut s.page);
        }
    }

    #[test]
    fn test_parse_query() {
        let search: Search = parse_query("?term=rust%20lang&page=2").unwrap();
        assert_eq!("rust lang", search.term);
        assert_eq!(Some(2), search.page);
    }

    #[test]
    fn test_parse_query_error_is_bad_request() {
        let err = parse_query::<Search>("page=2").unwrap_err();
        assert!(matches!(&err, Error::MissingField { key } if key == "term"));
        assert!(err.is_bad_request());
        assert_eq!(400, err.status_code());
    }
}
