mod cli;
mod commands;
mod error;

pub use error::Error;

use structopt::StructOpt;

fn main() -> Result<(), crate::Error> {
    cli::Cli::from_args().execute()
}
