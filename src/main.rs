use clap::Parser;
use log::LevelFilter;

use mst_archive::error::MstError;

use crate::command::{MstCommand, MstTool};

mod command;

fn main() -> Result<(), MstError> {
    let args = MstTool::parse();
    env_logger::Builder::new()
        .filter_level(match args.global_args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    args.subcommand.run(args.global_args)
}
