//! Runs the translation jobs of a [`RootConfig`].

use log::{debug, info};

use crate::{
    config::{RootConfig, Translation},
    error::Error,
    formats::{FormatType, infer_format_from_extension},
    merge::merge_mappings,
    observer::MoveTracker,
};

/// Options shared by every job of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslateOptions {
    /// Append merged entries that a destination does not contain yet.
    pub add_new_entries: bool,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_add_new_entries(mut self, add_new_entries: bool) -> Self {
        self.add_new_entries = add_new_entries;
        self
    }
}

/// Diagnostics of one finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    /// Position of the job in the configuration, starting at 1.
    pub number: usize,
    pub tracker: MoveTracker,
}

/// Applies the jobs of a configuration, strictly in order.
#[derive(Debug, Clone)]
pub struct Translator {
    config: RootConfig,
    options: TranslateOptions,
}

impl Translator {
    pub fn new(config: RootConfig, options: TranslateOptions) -> Self {
        Translator { config, options }
    }

    /// Checks that every file of every job has a supported extension.
    pub fn validate(&self) -> Result<(), Error> {
        self.config.translations().iter().try_for_each(validate_job)
    }

    /// Runs every job. Nothing is read or written unless the whole
    /// configuration passes [`Translator::validate`]. The first failing
    /// job aborts the run; files written before stay written.
    pub fn run(&self) -> Result<Vec<JobReport>, Error> {
        self.validate()?;
        self.config
            .translations()
            .iter()
            .enumerate()
            .map(|(index, job)| {
                info!("running translation {}", index + 1);
                let tracker = self.run_job(job)?;
                Ok(JobReport {
                    number: index + 1,
                    tracker,
                })
            })
            .collect()
    }

    /// Reads and merges all sources of `job`, then writes the merged
    /// mapping into each destination.
    pub fn run_job(&self, job: &Translation) -> Result<MoveTracker, Error> {
        validate_job(job)?;
        let mut tracker = MoveTracker::new();

        let mut mappings = Vec::with_capacity(job.sources().len());
        for from in job.sources() {
            let mapping = source_format(from)?.read_map(self.config.resolve(from))?;
            tracker.record_read(from, mapping.iter().map(|e| e.name.as_str()));
            mappings.push(mapping);
        }

        let merged = merge_mappings(&mappings);
        debug!("merged {} sources into {} entries", mappings.len(), merged.len());

        for to in job.destinations() {
            let outcome = destination_format(to)?.write_mapping(
                &merged,
                self.config.resolve(to),
                self.options.add_new_entries,
            )?;
            tracker.record_write(to, &outcome);
        }

        Ok(tracker)
    }
}

fn validate_job(job: &Translation) -> Result<(), Error> {
    for from in job.sources() {
        source_format(from)?;
    }
    for to in job.destinations() {
        destination_format(to)?;
    }
    Ok(())
}

fn source_format(file: &str) -> Result<FormatType, Error> {
    infer_format_from_extension(file).ok_or_else(|| illegal_file("from", file))
}

fn destination_format(file: &str) -> Result<FormatType, Error> {
    infer_format_from_extension(file).ok_or_else(|| illegal_file("to", file))
}

fn illegal_file(direction: &str, file: &str) -> Error {
    Error::IllegalConfig(format!(
        "{}: {} is not a valid .xml or .strings file, please check your yaml config.",
        direction, file
    ))
}
