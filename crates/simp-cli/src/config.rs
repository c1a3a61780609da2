//! Run configuration assembled from command-line flags and the environment.

use clap::{builder::PossibleValuesParser, value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// Budget applied to programs known not to terminate when the user gave
/// no `--max-steps`.
pub const DIVERGENT_STEP_BUDGET: u64 = 10_000;

/// One of the three execution strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    SmallStep,
    BigStep,
    Denotational,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::SmallStep, Strategy::BigStep, Strategy::Denotational];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::SmallStep => "small-step",
            Strategy::BigStep => "big-step",
            Strategy::Denotational => "denotational",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| CliError::UnknownStrategy(s.to_string()))
    }
}

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything a run of the driver needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Sample program names; empty means all of them.
    pub scenarios: Vec<String>,
    pub strategies: Vec<Strategy>,
    /// Step budget for every run; `None` keeps the unbounded semantics.
    pub max_steps: Option<u64>,
    /// Print the small-step trace.
    pub trace: bool,
    pub format: OutputFormat,
    pub list: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scenarios: Vec::new(),
            strategies: Strategy::ALL.to_vec(),
            max_steps: None,
            trace: true,
            format: OutputFormat::Text,
            list: false,
        }
    }
}

impl RunConfig {
    /// Step budget for one program: the configured one, or the divergent
    /// fallback for programs that would otherwise never return.
    pub fn budget_for(&self, diverges: bool) -> Option<u64> {
        match self.max_steps {
            Some(limit) => Some(limit),
            None if diverges => Some(DIVERGENT_STEP_BUDGET),
            None => None,
        }
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let strategies = match matches.get_one::<String>("strategy").map(String::as_str) {
            None | Some("all") => Strategy::ALL.to_vec(),
            Some(name) => vec![name.parse()?],
        };
        Ok(Self {
            scenarios: matches
                .get_many::<String>("scenario")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
            strategies,
            max_steps: matches.get_one::<u64>("max-steps").copied(),
            trace: !matches.get_flag("quiet"),
            format: if matches.get_flag("json") {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            list: matches.get_flag("list"),
        })
    }
}

/// The `simp` command line.
pub fn command() -> Command {
    Command::new("simp")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Runs sample imperative programs under small-step, big-step and \
            denotational semantics and checks that all three agree.",
        )
        .arg(
            Arg::new("scenario")
                .value_name("SCENARIO")
                .num_args(0..)
                .help("Sample programs to run (default: all). See --list."),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .short('s')
                .value_name("STRATEGY")
                .value_parser(PossibleValuesParser::new([
                    "small-step",
                    "big-step",
                    "denotational",
                    "all",
                ]))
                .default_value("all")
                .help("Which semantics to run."),
        )
        .arg(
            Arg::new("max-steps")
                .long("max-steps")
                .value_name("N")
                .env("SIMP_MAX_STEPS")
                .value_parser(value_parser!(u64))
                .help("Abort any run that takes more than N steps."),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Do not print the small-step trace."),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print one JSON report per program."),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List the sample programs and exit."),
        )
}
