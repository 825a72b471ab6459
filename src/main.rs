mod cli;

use std::env;
use std::fs;

use anyhow::{Context, Result};
use log::info;

use timetable_to_ics::{Converter, MismatchPolicy, Prompt};

fn setup_logging(verbose: bool) {
    if env::var("LOG").is_err() {
        let level = if verbose { "debug" } else { "info" };
        env::set_var("LOG", format!("timetable_to_ics={level}"));
    }

    pretty_env_logger::init_custom_env("LOG");
}

fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());
    setup_logging(args.verbose);

    let policy = if args.strict {
        MismatchPolicy::Abort
    } else {
        MismatchPolicy::Skip
    };

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read timetable export {}", args.input.display()))?;

    let mut converter = Converter::with_policy(Prompt, policy);
    converter.convert(&text)?;

    let schedule = converter.into_schedule();
    info!("parsed {} course events", schedule.events.len());

    fs::write(&args.output, schedule.to_ics().to_string())
        .with_context(|| format!("failed to write calendar file {}", args.output.display()))?;

    info!("calendar written to {}", args.output.display());

    Ok(())
}
