//! The trait every supported file format implements.

use std::{fs, path::Path};

use log::debug;

use crate::{
    error::Error,
    formats::{FormatType, infer_format_from_extension},
    types::{Entry, Mapping, WriteOutcome},
};

/// The result of rendering a mapping into the text of an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The complete new file content.
    pub text: String,
    pub outcome: WriteOutcome,
}

/// Reading entries from, and writing a mapping back into, one kind of file.
///
/// Implementors only deal with text; the provided methods take care of
/// checking the path, reading the file and writing the result back.
///
/// # Example
///
/// ```rust,no_run
/// use xdst::{Entry, traits::MappingFormat};
/// use xdst::formats::StringsFormat;
///
/// let entries = StringsFormat::read_map("en.lproj/Localizable.strings")?;
/// StringsFormat::write_mapping(&entries, "de.lproj/Localizable.strings", false)?;
/// # Ok::<(), xdst::Error>(())
/// ```
pub trait MappingFormat {
    /// The format handled by the implementor.
    const FORMAT: FormatType;

    /// Extracts all entries of a file's text, in document order.
    fn parse_entries(text: &str) -> Result<Mapping, Error>;

    /// Applies `mapping` to the text of an existing file.
    ///
    /// With `add_new_entries`, entries the text does not contain yet are
    /// appended in mapping order.
    fn render(text: &str, mapping: &[Entry], add_new_entries: bool) -> Result<Rendered, Error>;

    /// Reads the whole file as text.
    fn read_text(path: &Path) -> Result<String, Error> {
        Ok(fs::read_to_string(path)?)
    }

    /// Fails with [`Error::FileNotFound`] unless `path` exists and carries
    /// this format's extension.
    fn check_path(path: &Path) -> Result<(), Error> {
        if !path.exists() || infer_format_from_extension(path) != Some(Self::FORMAT) {
            return Err(Error::file_not_found(
                &format!(".{}", Self::FORMAT.extension()),
                path,
            ));
        }
        Ok(())
    }

    /// Reads all entries of the file at `path`.
    fn read_map<P: AsRef<Path>>(path: P) -> Result<Mapping, Error> {
        let path = path.as_ref();
        Self::check_path(path)?;
        let entries = Self::parse_entries(&Self::read_text(path)?)?;
        debug!("read {} entries from {}", entries.len(), path.display());
        Ok(entries)
    }

    /// Applies `mapping` to the file at `path` and overwrites it with the result.
    fn write_mapping<P: AsRef<Path>>(
        mapping: &[Entry],
        path: P,
        add_new_entries: bool,
    ) -> Result<WriteOutcome, Error> {
        let path = path.as_ref();
        Self::check_path(path)?;
        let rendered = Self::render(&Self::read_text(path)?, mapping, add_new_entries)?;
        fs::write(path, rendered.text)?;
        debug!(
            "wrote {}: {} moved, {} unmoved",
            path.display(),
            rendered.outcome.moved.len(),
            rendered.outcome.unmoved.len()
        );
        Ok(rendered.outcome)
    }
}
