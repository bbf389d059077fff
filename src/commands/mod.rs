use crate::{error::Error, stac::HttpOptions};
use clap::ArgMatches;
use std::{str::FromStr, time::Duration};
use tracing::debug;

pub mod epsg;
pub mod wkt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recipe {
    #[default]
    Wkt,
    Epsg,
}

impl FromStr for Recipe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Recipe, Error> {
        if s.eq_ignore_ascii_case("wkt") {
            Ok(Recipe::Wkt)
        } else if s.eq_ignore_ascii_case("epsg") {
            Ok(Recipe::Epsg)
        } else {
            Err(Error::BadParameter(format!(
                "Invalid value for --recipe: '{}' is not one of 'wkt', 'epsg'",
                s
            )))
        }
    }
}

/// One validated invocation of the CLI.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub geo: Option<String>,
    pub stac: Option<String>,
    pub recipe: Recipe,
    pub target_epsg: Option<u32>,
    pub http: HttpOptions,
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Result<Options, Error> {
        let recipe = match matches.value_of("recipe") {
            Some(r) => r.parse()?,
            None => Recipe::default(),
        };
        let target_epsg = match matches.value_of("target-epsg") {
            Some(code) => Some(code.parse::<u32>().map_err(|_| {
                Error::BadParameter(format!("Invalid value for --target-epsg: '{}' is not a valid integer", code))
            })?),
            None => None,
        };
        let http = match matches.value_of("timeout") {
            Some(secs) => HttpOptions {
                timeout: Duration::from_secs(secs.parse::<u64>().map_err(|_| {
                    Error::BadParameter(format!("Invalid value for --timeout: '{}' is not a valid integer", secs))
                })?),
            },
            None => HttpOptions::default(),
        };

        Ok(Options {
            geo: matches.value_of("geo").map(String::from),
            stac: matches.value_of("stac").map(String::from),
            recipe,
            target_epsg,
            http,
        })
    }
}

/// Run the selected recipe and return the line to print.
pub fn run(opts: &Options) -> Result<String, Error> {
    debug!(recipe = ?opts.recipe, "dispatching");
    match opts.recipe {
        Recipe::Wkt => wkt::run(opts),
        Recipe::Epsg => epsg::run(opts),
    }
}
