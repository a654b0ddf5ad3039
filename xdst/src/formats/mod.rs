//! All supported localization file formats for xdst.
//!
//! This module re-exports the codec of each format and provides the
//! [`FormatType`] enum used to dispatch on a file's extension.

pub mod android_strings;
pub mod strings;

use std::path::Path;

// Reexporting the formats for easier access
pub use android_strings::Format as AndroidStringsFormat;
pub use strings::Format as StringsFormat;

use crate::{
    Error,
    traits::MappingFormat,
    types::{Entry, Mapping, WriteOutcome},
};

/// The two file formats a translation job may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Android `strings.xml` resources.
    AndroidStrings,
    /// Apple `.strings` key/value files.
    Strings,
}

impl FormatType {
    /// Returns the file extension for this format, without the dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            FormatType::AndroidStrings => "xml",
            FormatType::Strings => "strings",
        }
    }

    /// Reads all entries of `path` with this format's codec.
    pub fn read_map<P: AsRef<Path>>(&self, path: P) -> Result<Mapping, Error> {
        match self {
            FormatType::AndroidStrings => AndroidStringsFormat::read_map(path),
            FormatType::Strings => StringsFormat::read_map(path),
        }
    }

    /// Writes `mapping` into `path` with this format's codec.
    pub fn write_mapping<P: AsRef<Path>>(
        &self,
        mapping: &[Entry],
        path: P,
        add_new_entries: bool,
    ) -> Result<WriteOutcome, Error> {
        match self {
            FormatType::AndroidStrings => {
                AndroidStringsFormat::write_mapping(mapping, path, add_new_entries)
            }
            FormatType::Strings => StringsFormat::write_mapping(mapping, path, add_new_entries),
        }
    }
}

/// Infers the format from the file extension of `path`.
///
/// # Example
/// ```rust
/// use xdst::formats::{FormatType, infer_format_from_extension};
/// assert_eq!(infer_format_from_extension("values/strings.xml"), Some(FormatType::AndroidStrings));
/// assert_eq!(infer_format_from_extension("en.lproj/Localizable.strings"), Some(FormatType::Strings));
/// assert_eq!(infer_format_from_extension("en.json"), None);
/// ```
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Option<FormatType> {
    match path.as_ref().extension().and_then(|s| s.to_str()) {
        Some("xml") => Some(FormatType::AndroidStrings),
        Some("strings") => Some(FormatType::Strings),
        _ => None,
    }
}

/// Reads all `<string>` entries of an Android resource file.
pub fn read_xml_map<P: AsRef<Path>>(path: P) -> Result<Mapping, Error> {
    AndroidStringsFormat::read_map(path)
}

/// Reads all `"key" = "value";` entries of a `.strings` file.
pub fn read_dot_strings_map<P: AsRef<Path>>(path: P) -> Result<Mapping, Error> {
    StringsFormat::read_map(path)
}

/// Applies `mapping` to an Android resource file in place.
pub fn write_xml_mapping<P: AsRef<Path>>(
    mapping: &[Entry],
    path: P,
    add_new_entries: bool,
) -> Result<WriteOutcome, Error> {
    AndroidStringsFormat::write_mapping(mapping, path, add_new_entries)
}

/// Applies `mapping` to a `.strings` file in place.
pub fn write_dot_strings_mapping<P: AsRef<Path>>(
    mapping: &[Entry],
    path: P,
    add_new_entries: bool,
) -> Result<WriteOutcome, Error> {
    StringsFormat::write_mapping(mapping, path, add_new_entries)
}
