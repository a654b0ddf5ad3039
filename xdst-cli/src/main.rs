use std::{env, path::PathBuf, process::ExitCode};

use clap::{
    Parser,
    error::{ContextKind, ContextValue, ErrorKind},
};
use log::{LevelFilter, debug};
use xdst::{DEFAULT_CONFIG_FILE, Error, JobReport, RootConfig, TranslateOptions, Translator};

const GREETING: &str = "\nWelcome to the XMl and Dot String resource transporter.\n\
                        -------------------------------------------------------\n";

/// Moves string resources between Android XML and Apple .strings files.
///
/// Reads XMLDotStringConfig.yaml from the current directory unless
/// another file is given with --config.
#[derive(Parser, Debug)]
#[command(name = "xdst", version)]
struct Args {
    /// Add entries into target files, which did not exist before
    #[arg(long)]
    add_new_entries: bool,

    /// Set a different config Yaml file for this translation
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug console messages and print which changes were applied
    #[arg(long)]
    debug_mode: bool,
}

fn main() -> ExitCode {
    println!("{}", GREETING);

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", illegal_argument(&e));
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::new()
        .filter_level(if args.debug_mode {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();

    if args.add_new_entries {
        println!("\n[ADDITIONAL MODE] elected to add new entries in each output file\n");
    }
    if args.debug_mode {
        println!("Debug Mode selected.");
    }

    match run(&args) {
        Ok(reports) => {
            if args.debug_mode {
                println!("{}", debug_printout(&reports));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Vec<JobReport>, Error> {
    let config_path = if args.config.is_absolute() {
        args.config.clone()
    } else {
        env::current_dir()?.join(&args.config)
    };
    debug!("loading config from {}", config_path.display());

    let config = RootConfig::load(&config_path)?;
    let options = TranslateOptions::new().with_add_new_entries(args.add_new_entries);
    Translator::new(config, options).run()
}

fn illegal_argument(e: &clap::Error) -> Error {
    let argument = match e.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(argument)) => argument.clone(),
        _ => e.to_string().lines().next().unwrap_or_default().to_string(),
    };
    let problem = match e.kind() {
        // clap reports the flag together with its value name, e.g. `--config <PATH>`
        ErrorKind::InvalidValue => format!(
            "the argument {} needs a value",
            argument.split_whitespace().next().unwrap_or_default()
        ),
        _ => format!("the argument {} is not allowed", argument),
    };
    Error::IllegalArgument(format!(
        "{}, please use the flag \n\n\t--help\n\nfor further information",
        problem
    ))
}

/// One block per job: `translation: N` followed by its tab-indented report.
fn debug_printout(reports: &[JobReport]) -> String {
    let mut printout = String::new();
    for report in reports {
        printout.push_str(&format!("\ntranslation: {}\n", report.number));
        for line in report.tracker.to_string().lines() {
            printout.push('\t');
            printout.push_str(line);
            printout.push('\n');
        }
    }
    printout
}
