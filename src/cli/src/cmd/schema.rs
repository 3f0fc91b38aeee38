use clap::{Arg, Command};

use libtabcompare::command;
use libtabcompare::core::df::pretty_print;
use libtabcompare::error::TabCompareError;

use crate::cmd::RunCmd;
pub const NAME: &str = "schema";
pub struct SchemaCmd;

impl RunCmd for SchemaCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Print the columns of a csv or xlsx file and the types they are compared as")
            .arg(Arg::new("FILE").required(true).index(1).help("Path to a .csv or .xlsx file"))
    }

    fn run(&self, args: &clap::ArgMatches) -> Result<(), TabCompareError> {
        let Some(path) = args.get_one::<String>("FILE") else {
            return Err(TabCompareError::missing_argument("FILE"));
        };

        let fields = command::schema(path)?;
        println!("{}", pretty_print::fields_to_str(&fields));
        Ok(())
    }
}
