use libtabcompare::error::TabCompareError;

pub mod compare;
pub use compare::CompareCmd;

pub mod schema;
pub use schema::SchemaCmd;

pub trait RunCmd {
    fn name(&self) -> &str;
    fn args(&self) -> clap::Command;
    fn run(&self, args: &clap::ArgMatches) -> Result<(), TabCompareError>;
}
