use clap::{Parser, Subcommand};

use mst_archive::error::MstError;

use crate::command::global_args::GlobalArgs;

mod global_args;
mod info;
mod list;

pub trait MstCommand {
    fn run(self, global_args: GlobalArgs) -> Result<(), MstError>;
}

#[derive(Parser, Debug)]
#[clap(about = "MST package index reader", version)]
pub struct MstTool {
    #[clap(flatten)]
    pub global_args: GlobalArgs,
    /// Thing to do.
    #[clap(subcommand)]
    pub subcommand: MstSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MstSubcommand {
    Info(info::Info),
    List(list::List),
}

impl MstCommand for MstSubcommand {
    fn run(self, global_args: GlobalArgs) -> Result<(), MstError> {
        match self {
            MstSubcommand::Info(v) => v.run(global_args),
            MstSubcommand::List(v) => v.run(global_args),
        }
    }
}
