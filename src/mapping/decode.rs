//! Redirects document decoding.
//!
//! # Responsibilities
//! - Deserialize YAML or JSON bytes into an ordered list of records
//! - Reject documents that are not a list of `{path, url}` objects
//! - Pick a format from a file extension or a name

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mapping::PathUrlRecord;

/// Serialization format of a redirects document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[serde(alias = "yml")]
    Yaml,
    Json,
}

impl Format {
    /// Infer the format from a file extension (`yaml`, `yml`, `json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => f.write_str("yaml"),
            Format::Json => f.write_str("json"),
        }
    }
}

/// Returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown redirects format `{0}` (expected yaml, yml or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Errors produced while decoding a redirects document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed YAML or a YAML document of the wrong shape.
    #[error("invalid YAML redirects document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed JSON or a JSON document of the wrong shape.
    #[error("invalid JSON redirects document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode `bytes` into records, preserving document order.
pub fn decode(format: Format, bytes: &[u8]) -> Result<Vec<PathUrlRecord>, DecodeError> {
    match format {
        Format::Yaml => decode_yaml(bytes),
        Format::Json => decode_json(bytes),
    }
}

fn decode_yaml(bytes: &[u8]) -> Result<Vec<PathUrlRecord>, DecodeError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

fn decode_json(bytes: &[u8]) -> Result<Vec<PathUrlRecord>, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML_DOC: &str = "\
- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /urlshort-final
  url: https://github.com/gophercises/urlshort/tree/solution
";

    #[test]
    fn test_yaml_preserves_order() {
        let records = decode(Format::Yaml, YAML_DOC.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                PathUrlRecord::new("/urlshort", "https://github.com/gophercises/urlshort"),
                PathUrlRecord::new(
                    "/urlshort-final",
                    "https://github.com/gophercises/urlshort/tree/solution"
                ),
            ]
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let records = vec![
            PathUrlRecord::new("/b", "https://example.com/b"),
            PathUrlRecord::new("/a", "https://example.com/a"),
            PathUrlRecord::new("/b", "https://example.com/b2"),
        ];
        let encoded = serde_yaml::to_string(&records).unwrap();

        let decoded = decode(Format::Yaml, encoded.as_bytes()).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_yaml_missing_url_fails() {
        let doc = "- path: /a\n  url: https://example.com\n- path: /b\n";
        let err = decode(Format::Yaml, doc.as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::Yaml(_)));
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_yaml_non_list_fails() {
        let doc = "path: /a\nurl: https://example.com\n";
        assert!(matches!(
            decode(Format::Yaml, doc.as_bytes()),
            Err(DecodeError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_malformed_fails() {
        let doc = "- path: /a\n  url: [unterminated\n";
        assert!(decode(Format::Yaml, doc.as_bytes()).is_err());
    }

    #[test]
    fn test_yaml_blank_document_is_empty() {
        assert!(decode(Format::Yaml, b"").unwrap().is_empty());
        assert!(decode(Format::Yaml, b"  \n\n").unwrap().is_empty());
        assert!(decode(Format::Yaml, b"# no redirects yet\n").unwrap().is_empty());
        assert!(decode(Format::Yaml, b"---\n").unwrap().is_empty());
    }

    #[test]
    fn test_json_two_records() {
        let doc = r#"[
            {"path": "/slack", "url": "https://slack.com"},
            {"path": "/github", "url": "https://github.com/user"}
        ]"#;

        let records = decode(Format::Json, doc.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PathUrlRecord::new("/slack", "https://slack.com"));
        assert_eq!(records[1], PathUrlRecord::new("/github", "https://github.com/user"));
    }

    #[test]
    fn test_json_ignores_unknown_fields() {
        let doc = r#"[{"path": "/a", "url": "https://a.example", "note": "x"}]"#;
        let records = decode(Format::Json, doc.as_bytes()).unwrap();
        assert_eq!(records, vec![PathUrlRecord::new("/a", "https://a.example")]);
    }

    #[test]
    fn test_json_wrong_shape_fails() {
        for doc in [
            "",
            r#"{"path": "/a", "url": "https://a.example"}"#,
            r#"[{"path": "/a"}]"#,
            r#"[{"path": "/a", "url": 7}]"#,
            "[",
        ] {
            assert!(
                matches!(decode(Format::Json, doc.as_bytes()), Err(DecodeError::Json(_))),
                "expected failure for {doc:?}"
            );
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("paths.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("conf/paths.YML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("paths.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("paths.toml")), None);
        assert_eq!(Format::from_path(Path::new("paths")), None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
        assert_eq!(
            "xml".parse::<Format>(),
            Err(UnknownFormat("xml".to_string()))
        );
    }
}
