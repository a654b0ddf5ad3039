//! Support for Apple `.strings` localization files.
//!
//! Reading and writing both run the [`scan_sections`] scanner first, so
//! comments are never parsed and always survive a rewrite untouched.
//! Content sections are split into statements on `;`. A semicolon inside
//! a quoted value therefore splits the statement too; files relying on
//! that are rejected or rewritten just like the quote pattern dictates.

use std::{fs::File, io::Read, ops::Range, path::Path};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    formats::FormatType,
    scanner::scan_sections,
    traits::{MappingFormat, Rendered},
    types::{Entry, Mapping, WriteOutcome},
};

lazy_static! {
    static ref WHITESPACE_ONLY_REGEX: Regex = Regex::new(r"^\s*$").unwrap();
    // key: the last quoted run before the `=`; value: the last quoted run of
    // the statement. Breaks on keys or values containing `\"`.
    static ref KEY_VALUE_REGEX: Regex =
        Regex::new(r#"(?s)^.*"([^"]*)"[^"]*=[^=]*"([^"]*)"[^"]*$"#).unwrap();
}

/// Codec for Apple `.strings` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Format;

impl MappingFormat for Format {
    const FORMAT: FormatType = FormatType::Strings;

    fn parse_entries(text: &str) -> Result<Mapping, Error> {
        let mut entries = Vec::new();
        for section in scan_sections(text).iter().filter(|s| !s.is_comment) {
            for fragment in section.content.split(';') {
                if is_blank(fragment) {
                    continue;
                }
                let statement = Statement::parse(fragment)?;
                entries.push(Entry::new(statement.key(), statement.value()));
            }
        }
        Ok(entries)
    }

    fn render(text: &str, mapping: &[Entry], add_new_entries: bool) -> Result<Rendered, Error> {
        // Each mapping entry is applied at most once per file.
        let mut remaining = mapping.to_vec();
        let mut outcome = WriteOutcome::default();
        let mut result = String::with_capacity(text.len());

        for section in scan_sections(text) {
            if section.is_comment {
                result.push_str(section.content);
                continue;
            }
            for fragment in section.content.split(';') {
                if is_blank(fragment) {
                    // keeps line breaks and spacing between statements
                    result.push_str(fragment);
                    continue;
                }
                let statement = Statement::parse(fragment)?;
                match remaining.iter().position(|e| e.name == statement.key()) {
                    Some(index) => {
                        let entry = remaining.remove(index);
                        result.push_str(&statement.replaced_with(&entry));
                        outcome.record_moved(&entry.name);
                    }
                    None => {
                        result.push_str(fragment);
                        outcome.record_unmoved(statement.key());
                    }
                }
                result.push(';');
            }
        }

        if add_new_entries {
            for entry in &remaining {
                result.push('\n');
                result.push_str(&entry.to_string());
                result.push(';');
                outcome.record_moved(&entry.name);
            }
        }

        Ok(Rendered {
            text: result,
            outcome,
        })
    }

    /// Auto-detects a BOM (e.g. UTF-16 Apple `.strings`) and decodes to UTF-8.
    fn read_text(path: &Path) -> Result<String, Error> {
        let file = File::open(path)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded)?;
        Ok(decoded)
    }
}

fn is_blank(fragment: &str) -> bool {
    WHITESPACE_ONLY_REGEX.is_match(fragment)
}

/// One `"key" = "value"` statement with the byte ranges of its key and value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Statement<'a> {
    text: &'a str,
    key: Range<usize>,
    value: Range<usize>,
}

impl<'a> Statement<'a> {
    fn parse(text: &'a str) -> Result<Self, Error> {
        let captures = KEY_VALUE_REGEX
            .captures(text)
            .ok_or_else(|| Error::FormatError(format!("Tried to extract name from:\n\t{}", text)))?;
        match (captures.get(1), captures.get(2)) {
            (Some(key), Some(value)) => Ok(Statement {
                text,
                key: key.range(),
                value: value.range(),
            }),
            _ => Err(Error::FormatError(format!(
                "matching failed for key-value pair in:\n\t{}",
                text
            ))),
        }
    }

    fn key(&self) -> &'a str {
        &self.text[self.key.clone()]
    }

    fn value(&self) -> &'a str {
        &self.text[self.value.clone()]
    }

    /// Swaps in the entry's name and content, keeping every other byte.
    fn replaced_with(&self, entry: &Entry) -> String {
        let mut result = String::with_capacity(self.text.len() + entry.content.len());
        result.push_str(&self.text[..self.key.start]);
        result.push_str(&entry.name);
        result.push_str(&self.text[self.key.end..self.value.start]);
        result.push_str(&entry.content);
        result.push_str(&self.text[self.value.end..]);
        result
    }
}
