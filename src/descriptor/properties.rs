// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Line-oriented key/value reader for descriptor resources.
//!
//! The format is the familiar `.properties` layout:
//!
//! ```text
//! # comment
//! ! also a comment
//! processor.Foo.path = p.Foo
//! processor.Foo.consumes: alpha
//! processor.Foo.produces = beta, \
//!                          gamma
//! ```
//!
//! Unlike a map-backed reader, every entry is returned in file order and
//! repeated keys are kept, so callers can report duplicates precisely.
//!
//! Resources are read as UTF-8 when they are valid UTF-8 and as ISO-8859-1
//! otherwise; characters outside Latin-1 can always be written as `\uXXXX`.

use crate::errors::PropertiesError;

/// One `key = value` entry together with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// Decode the raw bytes of a descriptor resource.
///
/// Bytes that are not valid UTF-8 are mapped one to one onto ISO-8859-1
/// characters, so decoding never fails.
pub fn decode_resource(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|error| {
        error
            .into_bytes()
            .into_iter()
            .map(char::from)
            .collect()
    })
}

/// Read every entry of a properties document, in order.
pub fn parse_properties(text: &str) -> Result<Vec<Property>, PropertiesError> {
    let mut properties = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let trimmed = raw.trim_start();

        let (start, mut logical) = match pending.take() {
            Some((start, buffer)) => (start, buffer),
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (number, String::new())
            }
        };

        if ends_with_continuation(trimmed) {
            logical.push_str(&trimmed[..trimmed.len() - 1]);
            pending = Some((start, logical));
            continue;
        }

        logical.push_str(trimmed);
        if let Some(property) = split_entry(&logical, start)? {
            properties.push(property);
        }
    }

    // A trailing backslash on the last line continues into nothing.
    if let Some((start, logical)) = pending {
        if let Some(property) = split_entry(&logical, start)? {
            properties.push(property);
        }
    }

    Ok(properties)
}

fn ends_with_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|b| *b == b'\\').count() % 2 == 1
}

/// Strip trailing whitespace that is not protected by a backslash.
fn trim_unescaped_end(raw: &str) -> &str {
    let mut end = raw.len();
    for (offset, c) in raw.char_indices().rev() {
        if !c.is_whitespace() {
            break;
        }
        let backslashes = raw[..offset].bytes().rev().take_while(|b| *b == b'\\').count();
        if backslashes % 2 == 1 {
            break;
        }
        end = offset;
    }
    &raw[..end]
}

fn split_entry(logical: &str, line: usize) -> Result<Option<Property>, PropertiesError> {
    let logical = trim_unescaped_end(logical.trim_start());
    if logical.is_empty() {
        return Ok(None);
    }

    let mut key_end = logical.len();
    let mut escaped = false;
    for (offset, c) in logical.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = offset;
                break;
            }
            c if c.is_whitespace() => {
                key_end = offset;
                break;
            }
            _ => {}
        }
    }

    let raw_key = &logical[..key_end];
    let mut rest = logical[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start();
    }

    Ok(Some(Property {
        key: unescape(raw_key, line)?,
        value: unescape(rest, line)?,
        line,
    }))
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let digits: String = chars.by_ref().take(4).collect();
                let decoded = (digits.len() == 4)
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}
