//! Markup fragment validation
//!
//! A message value is accepted when `<root>` + value + `</root>` is a well-formed XML document.
//! This is a syntactic check only: no schema, no sanitizing, no escaping of the input.

use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Synthetic wrapper element the fragment is parsed inside
const ROOT_OPEN: &str = "<root>";
const ROOT_CLOSE: &str = "</root>";

/// Why a fragment was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupError {
    /// Byte offset into the fragment where the problem was detected
    pub position: usize,
    pub detail: String,
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at byte {}: {}", self.position, self.detail)
    }
}

impl std::error::Error for MarkupError {}

/// Returns `true` when `fragment` is well-formed once wrapped in a single root element.
pub fn is_valid_fragment(fragment: &str) -> bool {
    validate_fragment(fragment).is_ok()
}

/// Checks `fragment` and reports the first well-formedness problem.
pub fn validate_fragment(fragment: &str) -> Result<(), MarkupError> {
    if let Some((position, c)) = fragment.char_indices().find(|&(_, c)| !is_xml_char(c)) {
        return Err(MarkupError {
            position,
            detail: format!("character U+{:04X} is not allowed", u32::from(c)),
        });
    }

    let document = format!("{ROOT_OPEN}{fragment}{ROOT_CLOSE}");
    let mut reader = Reader::from_str(&document);

    // (element name, namespace prefixes it declares)
    let mut open: Vec<(String, Vec<String>)> = Vec::new();
    let mut root_closed = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| error_at(&reader, e.to_string()))?;

        if root_closed {
            match event {
                Event::Eof => break,
                Event::Comment(_) | Event::PI(_) => continue,
                Event::Text(ref t) if t.iter().all(u8::is_ascii_whitespace) => continue,
                _ => return Err(error_at(&reader, "content after the root element")),
            }
        }

        match event {
            Event::Start(ref e) => {
                let (name, declared) = check_element(e, &open)
                    .map_err(|detail| error_at(&reader, detail))?;
                open.push((name, declared));
            }
            Event::Empty(ref e) => {
                check_element(e, &open).map_err(|detail| error_at(&reader, detail))?;
            }
            Event::End(ref e) => {
                let name = utf8(e.name().into_inner()).map_err(|d| error_at(&reader, d))?;
                match open.pop() {
                    Some((expected, _)) if expected == name => {}
                    Some((expected, _)) => {
                        return Err(error_at(
                            &reader,
                            format!("expected </{expected}>, found </{name}>"),
                        ));
                    }
                    None => return Err(error_at(&reader, format!("stray </{name}>"))),
                }
                root_closed = open.is_empty();
            }
            Event::Text(ref t) => {
                if contains(t, b"]]>") {
                    return Err(error_at(&reader, "']]>' in text"));
                }
                let text = t.unescape().map_err(|e| error_at(&reader, e.to_string()))?;
                check_chars(&text).map_err(|d| error_at(&reader, d))?;
            }
            Event::Comment(ref c) => {
                if contains(c, b"--") || c.ends_with(b"-") {
                    return Err(error_at(&reader, "'--' inside a comment"));
                }
            }
            Event::CData(_) | Event::PI(_) => {}
            Event::Decl(_) => {
                return Err(error_at(&reader, "XML declaration inside the fragment"));
            }
            Event::DocType(_) => {
                return Err(error_at(&reader, "DOCTYPE inside the fragment"));
            }
            Event::Eof => {
                let innermost = open.last().map_or("root", |(name, _)| name.as_str());
                return Err(error_at(&reader, format!("unclosed <{innermost}>")));
            }
        }
    }

    Ok(())
}

fn error_at(reader: &Reader<&[u8]>, detail: impl Into<String>) -> MarkupError {
    let offset = usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX);
    MarkupError {
        position: offset.saturating_sub(ROOT_OPEN.len()),
        detail: detail.into(),
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Text with character references resolved must still be XML `Char`s.
fn check_chars(resolved: &str) -> Result<(), String> {
    match resolved.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(format!("reference to U+{:04X} is not allowed", u32::from(c))),
        None => Ok(()),
    }
}

fn utf8(bytes: &[u8]) -> Result<&str, String> {
    std::str::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Validates an element's name and attributes; returns the name and the prefixes it declares.
fn check_element(
    e: &BytesStart<'_>,
    open: &[(String, Vec<String>)],
) -> Result<(String, Vec<String>), String> {
    let name = utf8(e.name().as_ref())?.to_string();
    if !is_xml_name(&name) {
        return Err(format!("invalid element name '{name}'"));
    }

    let mut declared = Vec::new();
    let mut prefixed_attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = utf8(attr.key.as_ref())?;
        if !is_xml_name(key) {
            return Err(format!("invalid attribute name '{key}'"));
        }
        if attr.value.contains(&b'<') {
            return Err(format!("'<' in the value of '{key}'"));
        }
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        check_chars(&value)?;

        if let Some(prefix) = key.strip_prefix("xmlns:") {
            if value.is_empty() {
                return Err(format!("prefix '{prefix}' bound to an empty namespace"));
            }
            declared.push(prefix.to_string());
        } else if let Some((prefix, _)) = key.split_once(':') {
            if prefix != "xmlns" {
                prefixed_attrs.push(prefix.to_string());
            }
        }
    }

    let in_scope = |prefix: &str| {
        prefix == "xml"
            || declared.iter().any(|p| p == prefix)
            || open.iter().any(|(_, ds)| ds.iter().any(|p| p == prefix))
    };
    if let Some((prefix, _)) = name.split_once(':') {
        if !in_scope(prefix) {
            return Err(format!("undeclared namespace prefix '{prefix}'"));
        }
    }
    if let Some(prefix) = prefixed_attrs.iter().find(|p| !in_scope(p.as_str())) {
        return Err(format!("undeclared namespace prefix '{prefix}'"));
    }

    Ok((name, declared))
}

/// XML `Name` production, restricted to what message markup uses in practice.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
}
