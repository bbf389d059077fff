use clap::{App, Arg};
use geowkt::{
    commands::{self, Options},
    error::Error,
    stac, text,
};
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn is_integer(v: String) -> Result<(), String> {
    v.parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a valid integer", v))
}

fn run() -> Result<String, Error> {
    let default_timeout = stac::DEFAULT_TIMEOUT_SECS.to_string();
    let matches = App::new("geowkt")
        .version(VERSION)
        .about(text::ABOUT)
        .after_help(text::AFTER_HELP)
        .arg(
            Arg::with_name("geo")
                .help(text::GEO_HELP)
                .long("geo")
                .short("g")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("stac")
                .help(text::STAC_HELP)
                .long("stac")
                .short("s")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("recipe")
                .help(text::RECIPE_HELP)
                .long("recipe")
                .short("r")
                .takes_value(true)
                .possible_values(&["wkt", "epsg"])
                .case_insensitive(true)
                .default_value("wkt"),
        )
        .arg(
            Arg::with_name("target-epsg")
                .help(text::TARGET_EPSG_HELP)
                .long("target-epsg")
                .short("e")
                .takes_value(true)
                .validator(is_integer),
        )
        .arg(
            Arg::with_name("timeout")
                .help(text::TIMEOUT_HELP)
                .long("timeout")
                .short("t")
                .takes_value(true)
                .default_value(&default_timeout)
                .validator(is_integer),
        )
        .get_matches();

    let opts = Options::from_matches(&matches)?;
    commands::run(&opts)
}

fn main() {
    geowkt::init_logging();

    match run() {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("Application error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
