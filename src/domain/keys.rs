use crate::error::ParseError;

/// An object key split into its parent prefix and the identifier it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// First `offset` segments of the key, joined with `/`
    pub prefix: String,
    /// Segment at `offset`, up to its first `.`
    pub identifier: String,
    /// The key this record was parsed from (trimmed)
    pub source_key: String,
}

/// Parse an object key using a nesting offset.
///
/// `aa2019/abc.mp4` with offset 1 gives prefix `aa2019` and identifier `abc`.
/// `aa2019/abc/abc.mp4` with offset 2 gives prefix `aa2019/abc` and identifier `abc`.
/// A segment without a `.` is taken whole as the identifier. An empty segment
/// (`2019/`) or one starting with `.` yields an empty identifier.
pub fn parse_key(key: &str, offset: usize) -> Result<ParsedRecord, ParseError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey);
    }

    let segments: Vec<&str> = key.split('/').collect();
    if segments.len() < offset + 1 {
        return Err(ParseError::MalformedPrefix {
            key: key.to_string(),
            offset,
        });
    }

    let identifier = segments[offset].split('.').next().unwrap_or_default();

    Ok(ParsedRecord {
        prefix: segments[..offset].join("/"),
        identifier: identifier.to_string(),
        source_key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level_prefix() {
        let record = parse_key("a/b.mp4", 1).unwrap();
        assert_eq!(record.prefix, "a");
        assert_eq!(record.identifier, "b");
        assert_eq!(record.source_key, "a/b.mp4");
    }

    #[test]
    fn test_two_level_prefix() {
        let record = parse_key("a/b/c.mp4", 2).unwrap();
        assert_eq!(record.prefix, "a/b");
        assert_eq!(record.identifier, "c");
    }

    #[test]
    fn test_empty_and_blank_keys() {
        for offset in 0..4 {
            assert_eq!(parse_key("", offset), Err(ParseError::EmptyKey));
            assert_eq!(parse_key("   ", offset), Err(ParseError::EmptyKey));
        }
    }

    #[test]
    fn test_too_few_segments() {
        let err = parse_key("a", 1).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedPrefix {
                key: "a".to_string(),
                offset: 1
            }
        );
    }

    #[test]
    fn test_segment_without_extension_is_whole_identifier() {
        let record = parse_key("2019/dQw4w9WgXcQ", 1).unwrap();
        assert_eq!(record.identifier, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_only_first_dot_token_is_kept() {
        let record = parse_key("clips/abc.part1.mp4", 1).unwrap();
        assert_eq!(record.identifier, "abc");
    }

    #[test]
    fn test_offset_zero_has_empty_prefix() {
        let record = parse_key("abc.mp4/ignored", 0).unwrap();
        assert_eq!(record.prefix, "");
        assert_eq!(record.identifier, "abc");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let record = parse_key("  a/b.mp4\n", 1).unwrap();
        assert_eq!(record.source_key, "a/b.mp4");
        assert_eq!(record.identifier, "b");
    }

    #[test]
    fn test_deeper_keys_ignore_trailing_segments() {
        let record = parse_key("a/b/c/d.mp4", 1).unwrap();
        assert_eq!(record.prefix, "a");
        assert_eq!(record.identifier, "b");
    }

    #[test]
    fn test_empty_identifier_segment_still_parses() {
        let record = parse_key("a/.mp4", 1).unwrap();
        assert_eq!(record.prefix, "a");
        assert_eq!(record.identifier, "");

        let record = parse_key("2019/", 1).unwrap();
        assert_eq!(record.prefix, "2019");
        assert_eq!(record.identifier, "");
        assert_eq!(record.source_key, "2019/");

        let record = parse_key("a//b.mp4", 1).unwrap();
        assert_eq!(record.identifier, "");
    }

    #[test]
    fn test_prefix_and_identifier_reconstruct_key_start() {
        let keys = [
            "2019/abc.mp4",
            "x/y/z.webm",
            "top/mid/leaf/file.tar.gz",
            "noext/segment",
        ];
        for key in keys {
            for offset in 0..key.split('/').count() {
                let record = parse_key(key, offset).unwrap();
                let rebuilt = if record.prefix.is_empty() {
                    record.identifier.clone()
                } else {
                    format!("{}/{}", record.prefix, record.identifier)
                };
                assert!(key.starts_with(&rebuilt), "{} vs {}", key, rebuilt);
                assert_eq!(parse_key(key, offset).unwrap(), record);
            }
        }
    }
}
