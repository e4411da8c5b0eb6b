//! `logpat cat`.

use crate::cli::CatArgs;
use crate::cli::util::{Settings, open_input};
use crate::config::Config;
use crate::error::Result;
use crate::internal;
use crate::output::{JsonWriter, Output, compile_writer};
use crate::reader::compile_reader;
use std::io::{self, BufRead};
use std::process::ExitCode;

/// Handles `logpat cat`.
#[must_use]
pub fn cmd_cat(args: &CatArgs, config: &Config) -> ExitCode {
    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CAT", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CatArgs, config: &Config) -> Result<()> {
    let settings = Settings::resolve(
        config,
        args.preset.as_deref(),
        args.input.as_deref(),
        args.output.as_deref(),
        args.json,
    )?;
    internal::debug("CAT", &format!("pattern: {}", settings.pattern));

    let input = open_input(args.file.as_deref())?;
    let stdout = io::stdout().lock();
    let mut output: Box<dyn Output> = if settings.json {
        Box::new(JsonWriter::new(stdout))
    } else {
        Box::new(compile_writer(stdout, &settings.template)?)
    };
    copy(input, &settings, output.as_mut())
}

fn copy(input: Box<dyn BufRead>, settings: &Settings, output: &mut dyn Output) -> Result<()> {
    let mut reader = compile_reader(input, &settings.pattern, &settings.filter)?;
    let mut written = 0u64;
    while let Some(entry) = reader.read()? {
        output.write(&entry)?;
        written += 1;
    }
    internal::info(
        "CAT",
        &format!(
            "{written} entries from {} lines ({} skipped)",
            reader.lines_read(),
            reader.lines_skipped()
        ),
    );
    Ok(())
}
