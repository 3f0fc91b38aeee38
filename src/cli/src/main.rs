use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;
use libtabcompare::util;

pub mod cmd;

fn main() -> ExitCode {
    util::logging::init_logging();

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![Box::new(cmd::CompareCmd), Box::new(cmd::SchemaCmd)];

    let mut command = Command::new("tabcompare")
        .version(libtabcompare::constants::TABCOMPARE_VERSION)
        .about("Compare two csv or xlsx files on a key column and write an xlsx report")
        .subcommand_required(true)
        .arg_required_else_help(true);

    // Add all the commands to the command line
    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    // Parse the command line args and run the appropriate command
    let matches = command.get_matches();
    match matches.subcommand() {
        Some((command, args)) => {
            // Lookup command in runners and run on args
            if let Some(runner) = runners.get(command) {
                if let Err(err) = runner.run(args) {
                    log::error!("tabcompare {command} failed: {err:?}");
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
            } else {
                eprintln!("Unknown command `tabcompare {command}`");
                return ExitCode::FAILURE;
            }
        }
        None => unreachable!(), // subcommand_required
    }

    ExitCode::SUCCESS
}
