/// Decoding of the search service's JSON answer
///
/// The service has answered in two shapes over time:
/// - a bare array: `[{"filename": "x.jpg", "similarity": 0.93}, ...]`
/// - a wrapper: `{"matches": [...]}`
///
/// A wrapper without `matches` (or with `null`) means nothing was found.

use serde::Deserialize;

use crate::state::data::SearchResult;

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum SearchResponse {
    List(Vec<SearchResult>),
    Wrapped {
        #[serde(default)]
        matches: Option<Vec<SearchResult>>,
    },
}

/// Parse a response body into the ranked match list, preserving order
pub fn parse_matches(body: &[u8]) -> Result<Vec<SearchResult>, serde_json::Error> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    Ok(match response {
        SearchResponse::List(matches) => matches,
        SearchResponse::Wrapped { matches } => matches.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_list() {
        let body = br#"[{"filename": "x.jpg", "similarity": 0.93}, {"filename": "y.jpg", "similarity": 0.81}]"#;
        let matches = parse_matches(body).unwrap();
        assert_eq!(
            matches,
            vec![SearchResult::new("x.jpg", 0.93), SearchResult::new("y.jpg", 0.81)]
        );
    }

    #[test]
    fn test_wrapped_list() {
        let body = br#"{"matches": [{"filename": "z.png", "similarity": 0.5}]}"#;
        assert_eq!(parse_matches(body).unwrap(), vec![SearchResult::new("z.png", 0.5)]);
    }

    #[test]
    fn test_no_matches_shapes() {
        assert!(parse_matches(b"[]").unwrap().is_empty());
        assert!(parse_matches(b"{}").unwrap().is_empty());
        assert!(parse_matches(br#"{"matches": null}"#).unwrap().is_empty());
        assert!(parse_matches(br#"{"detail": "nothing indexed"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(parse_matches(b"").is_err());
        assert!(parse_matches(b"<html>502 Bad Gateway</html>").is_err());
        assert!(parse_matches(br#""ok""#).is_err());
        assert!(parse_matches(br#"[{"filename": "x.jpg"}]"#).is_err());
        assert!(parse_matches(br#"{"matches": "x.jpg"}"#).is_err());
    }
}
