#![forbid(unsafe_code)]
//! Keeps Android `strings.xml` resources and Apple `.strings` files in sync.
//!
//! A translation job reads one or more source files, merges their entries
//! (first source wins), and writes the result into every destination file.
//! Destinations are rewritten in place: only the values of known entries
//! change, comments and layout are kept.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xdst::{RootConfig, TranslateOptions, Translator};
//!
//! let config = RootConfig::load("XMLDotStringConfig.yaml")?;
//! let translator = Translator::new(config, TranslateOptions::new());
//! for report in translator.run()? {
//!     println!("translation: {}\n{}", report.number, report.tracker);
//! }
//! # Ok::<(), xdst::Error>(())
//! ```
//!
//! # Supported Formats
//!
//! - **Android `strings.xml`**: `<string name="...">` elements of a `<resources>` document
//! - **Apple `.strings`**: `"key" = "value";` statements with `//` and `/* */` comments

pub mod config;
pub mod error;
pub mod formats;
pub mod merge;
pub mod observer;
pub mod scanner;
pub mod traits;
pub mod translator;
pub mod types;

pub use crate::{
    config::{DEFAULT_CONFIG_FILE, RootConfig, Translation},
    error::Error,
    formats::{
        FormatType, infer_format_from_extension, read_dot_strings_map, read_xml_map,
        write_dot_strings_mapping, write_xml_mapping,
    },
    merge::merge_mappings,
    observer::MoveTracker,
    scanner::{Section, scan_sections},
    translator::{JobReport, TranslateOptions, Translator},
    types::{Entry, Mapping, WriteOutcome},
};
