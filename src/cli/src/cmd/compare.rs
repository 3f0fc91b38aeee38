use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use std::path::{Path, PathBuf};

use libtabcompare::command;
use libtabcompare::config::CompareConfig;
use libtabcompare::constants::DEFAULT_CONFIG_FILENAME;
use libtabcompare::core::df::pretty_print;
use libtabcompare::error::TabCompareError;
use libtabcompare::model::CompareReport;

use crate::cmd::RunCmd;
pub const NAME: &str = "compare";
pub struct CompareCmd;

// How many of the worst matching keys to print
const NUM_WORST_MATCHES: usize = 10;

impl RunCmd for CompareCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("Compare two csv or xlsx files row by row on a key column and save an xlsx report.")
            .arg(Arg::new("FILE_1")
                .required(false)
                .help("First file (.csv or .xlsx). Can be set as `file_1` in the config file.")
                .index(1))
            .arg(Arg::new("FILE_2")
                .required(false)
                .help("Second file (.csv or .xlsx). Can be set as `file_2` in the config file.")
                .index(2))
            .arg(Arg::new("key")
                .long("key")
                .short('k')
                .help("Column present in both files that identifies a row.")
                .action(ArgAction::Set))
            .arg(Arg::new("output")
                .long("output")
                .short('o')
                .help("Directory to write comparison_result_<timestamp>.xlsx to. Defaults to the current directory.")
                .action(ArgAction::Set))
            .arg(Arg::new("config")
                .long("config")
                .short('c')
                .help(format!("TOML config file. Defaults to ./{DEFAULT_CONFIG_FILENAME} if it exists."))
                .action(ArgAction::Set))
            .arg(Arg::new("json")
                .long("json")
                .help("Print the result counts as json.")
                .action(ArgAction::SetTrue))
    }

    fn run(&self, args: &clap::ArgMatches) -> Result<(), TabCompareError> {
        let config = CompareCmd::load_config(args.get_one::<String>("config"))?;
        let opts = config.merge(CompareCmd::parse_args(args)).to_opts()?;

        let report = command::compare(&opts)?;

        if args.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&report.view())?);
        } else {
            CompareCmd::print_report(&report);
        }

        Ok(())
    }
}

impl CompareCmd {
    /// Command line values, these take precedence over the config file.
    pub fn parse_args(args: &clap::ArgMatches) -> CompareConfig {
        CompareConfig {
            file_1: args.get_one::<String>("FILE_1").map(PathBuf::from),
            file_2: args.get_one::<String>("FILE_2").map(PathBuf::from),
            key_column: args.get_one::<String>("key").cloned(),
            output_dir: args.get_one::<String>("output").map(PathBuf::from),
        }
    }

    fn load_config(path: Option<&String>) -> Result<CompareConfig, TabCompareError> {
        match path {
            Some(path) => CompareConfig::from_path(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    log::info!("Using config file {:?}", default_path);
                    CompareConfig::from_path(default_path)
                } else {
                    Ok(CompareConfig::default())
                }
            }
        }
    }

    fn print_report(report: &CompareReport) {
        let result = &report.result;
        let counts = result.counts();

        println!(
            "Compared {} and {} on {}",
            result.left_name.bold(),
            result.right_name.bold(),
            result.key_column.bold()
        );
        println!("{}", pretty_print::counts_to_str(result, &counts));

        if counts.num_mismatch_keys > 0 {
            println!("\nWorst matching keys");
            println!(
                "{}",
                pretty_print::worst_matches_to_str(result, NUM_WORST_MATCHES)
            );
        }

        if result.is_identical() {
            println!("{}", "Files match on every key and column".green());
        } else {
            let status = format!(
                "{} mismatched cells, {} keys missing from one file",
                counts.num_mismatch_cells,
                counts.num_left_only_keys + counts.num_right_only_keys
            );
            println!("{}", status.red());
        }

        println!("Report saved to {}", report.output_path.display());
    }
}
