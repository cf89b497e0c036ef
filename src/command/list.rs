use std::path::PathBuf;

use clap::Args;
use strum::EnumString;

use mst_archive::console::{format_archive_for_console, format_entry_for_console};
use mst_archive::error::MstError;
use mst_archive::{Archive, Entry, StandardLoaders};

use crate::command::global_args::GlobalArgs;
use crate::command::MstCommand;

/// List the entries of an archive.
#[derive(Args, Debug)]
pub struct List {
    /// The archive to list.
    archive: PathBuf,
    /// Order to list entries in
    #[clap(short, long, default_value = "table")]
    sort: SortOrder,
}

#[derive(EnumString, Copy, Clone, Debug)]
#[strum(serialize_all = "snake_case")]
enum SortOrder {
    Table,
    Name,
    Location,
    Size,
}

impl SortOrder {
    fn sort(&self, entries: &mut [&Entry]) {
        match self {
            Self::Table => {}
            Self::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
            Self::Location => entries.sort_by_key(|e| e.location),
            Self::Size => entries.sort_by_key(|e| e.length),
        }
    }
}

impl MstCommand for List {
    fn run(self, global_args: GlobalArgs) -> Result<(), MstError> {
        let archive = Archive::load_from_path(
            &self.archive,
            &StandardLoaders,
            global_args.disable_formatting,
        )?;
        log::info!("{}", format_archive_for_console(&self.archive, &archive));

        let mut entries: Vec<&Entry> = archive.files.iter().collect();
        self.sort.sort(&mut entries);
        for entry in entries {
            log::info!("{}", format_entry_for_console(entry));
        }

        Ok(())
    }
}
