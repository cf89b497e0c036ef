use std::path::PathBuf;

use clap::Args;
use owo_colors::Style;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use mst_archive::console::format_archive_for_console;
use mst_archive::error::MstError;
use mst_archive::uwu_colors::ErrStyle;
use mst_archive::{Archive, StandardLoaders};

use crate::command::global_args::GlobalArgs;
use crate::command::MstCommand;

/// Show the header of one or more archives.
#[derive(Args, Debug)]
pub struct Info {
    /// The archives to read.
    #[clap(required(true))]
    archives: Vec<PathBuf>,
}

impl MstCommand for Info {
    fn run(self, global_args: GlobalArgs) -> Result<(), MstError> {
        let failures: Vec<(PathBuf, MstError)> = self
            .archives
            .into_par_iter()
            .filter_map(|path| {
                match Archive::load_from_path(
                    &path,
                    &StandardLoaders,
                    global_args.disable_formatting,
                ) {
                    Ok(archive) => {
                        log::info!("{}", format_archive_for_console(&path, &archive));
                        None
                    }
                    Err(e) => {
                        log::warn!(
                            "Failed to read {}: {}",
                            path.display().errstyle(Style::new().green()),
                            e
                        );
                        Some((path, e))
                    }
                }
            })
            .collect();

        match failures.into_iter().next() {
            Some((_, e)) => Err(e),
            None => Ok(()),
        }
    }
}
