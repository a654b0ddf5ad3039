//! All error types for the xdst crate.
//!
//! Every variant carries a short category tag (see [`Error::tag`]) that is
//! printed in front of the human readable message, e.g.
//! `[FILE NOT FOUND] Could not find .strings file under: ...`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A source, destination or config file is missing, or has the wrong
    /// extension for the codec asked to handle it.
    #[error("[FILE NOT FOUND] {0}")]
    FileNotFound(String),

    /// The configuration references something the translator cannot handle.
    #[error("[ILLEGAL CONFIG] {0}")]
    IllegalConfig(String),

    /// A `.strings` statement did not contain a `"key" = "value"` pair.
    #[error("[FORMAT ERROR] {0}")]
    FormatError(String),

    /// An unrecognized command line flag.
    #[error("[ILLEGAL ARGUMENT] {0}")]
    IllegalArgument(String),

    #[error("[INVALID RESOURCE] {0}")]
    InvalidResource(String),

    #[error("[XML ERROR] {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("[IO ERROR] {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the bracketed category tag of this error.
    pub fn tag(&self) -> &'static str {
        match self {
            Error::FileNotFound(_) => "[FILE NOT FOUND]",
            Error::IllegalConfig(_) => "[ILLEGAL CONFIG]",
            Error::FormatError(_) => "[FORMAT ERROR]",
            Error::IllegalArgument(_) => "[ILLEGAL ARGUMENT]",
            Error::InvalidResource(_) => "[INVALID RESOURCE]",
            Error::XmlParse(_) => "[XML ERROR]",
            Error::Io(_) => "[IO ERROR]",
        }
    }

    /// Creates an error for a file that is missing or has the wrong extension.
    pub fn file_not_found(kind: &str, path: impl AsRef<std::path::Path>) -> Self {
        Error::FileNotFound(format!(
            "Could not find {} file under:\n\t{}",
            kind,
            path.as_ref().display()
        ))
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(quick_xml::Error::InvalidAttr(value))
    }
}
