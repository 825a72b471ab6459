use std::path::PathBuf;
use std::process;

use getopts::Options;

pub struct Args {
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
    pub strict: bool,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optflag(
        "V",
        "version",
        concat!("Print the version of ", env!("CARGO_PKG_NAME")),
    );
    opts.optflag("v", "verbose", "Enable debug logging");
    opts.optflag(
        "s",
        "strict",
        "Abort on the first paragraph that does not match the timetable format \
         instead of skipping it",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        let brief = format!("Usage: {} [options] TIMETABLE OUTPUT", env!("CARGO_PKG_NAME"));
        println!("{}", opts.usage(&brief));
        process::exit(0);
    }

    if matches.opt_present("version") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let [input, output] = matches.free.as_slice() else {
        eprintln!("Expected two arguments: the timetable export to read and the calendar file to write");
        process::exit(1);
    };

    Args {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        verbose: matches.opt_present("verbose"),
        strict: matches.opt_present("strict"),
    }
}
