use std::path::Path;

use binrw::Endian;
use owo_colors::Style;

use crate::data::archive::Archive;
use crate::data::entry::Entry;
use crate::uwu_colors::ErrStyle;

pub fn format_archive_for_console<P: AsRef<Path>>(path: P, archive: &Archive) -> String {
    let version = archive.version();
    format!(
        "{}: {}, version {}.{}.{}, platform mask {}, {}",
        path.as_ref().display().errstyle(Style::new().green()),
        archive.errstyle(Style::new().yellow()),
        version.major,
        version.minor,
        version.sub,
        format!("0x{:02X}", version.platform_mask).errstyle(Style::new().blue()),
        match archive.byte_order() {
            Endian::Little => "little-endian",
            Endian::Big => "big-endian",
        },
    )
}

pub fn format_entry_for_console(entry: &Entry) -> String {
    format!(
        "{} at {}, {} bytes, created {}, {} loader -> {}",
        entry.name.errstyle(Style::new().green()),
        format!("0x{:X}", entry.location).errstyle(Style::new().yellow()),
        entry.length.errstyle(Style::new().yellow()),
        entry.create_date,
        entry.loader.kind().errstyle(Style::new().blue()),
        entry.loader.output_name(),
    )
}
