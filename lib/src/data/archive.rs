use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use binrw::{BinRead, Endian};

use crate::data::entry::{Entry, ENTRY_FIXED_SIZE};
use crate::data::header::{
    read_byte_order, MstHeader, Platform, VersionWord, HEADER_SIZE, SUFFIX_UNKNOWN_COUNT,
};
use crate::error::MstError;
use crate::loaders::LoaderRegistry;

/// A decoded MST package index: the header and every entry in table order.
#[derive(Debug)]
pub struct Archive {
    byte_order: Endian,
    version: VersionWord,
    pub platform: Platform,
    pub package_size: u32,
    pub file_count: u32,
    pub suffix_unknowns: [u32; SUFFIX_UNKNOWN_COUNT],
    pub files: Vec<Entry>,
}

impl Archive {
    /// Decode an archive from the start of [reader]. Every entry gets a loader from [registry].
    pub fn read_from<R: Read + Seek, L: LoaderRegistry + ?Sized>(
        reader: &mut R,
        registry: &L,
        disable_formatting: bool,
    ) -> Result<Self, MstError> {
        let byte_order = read_byte_order(reader)?;
        let header = MstHeader::read_options(reader, byte_order, ())
            .map_err(|e| MstError::from_binrw("header", e))?;
        let platform = header.platform();
        let name_width = header.name_width();
        log::debug!(
            "{:?} archive v{}.{}.{} for {} (mask 0x{:02X}), {} entries of {} bytes",
            byte_order,
            header.version.major,
            header.version.minor,
            header.version.sub,
            platform,
            header.version.platform_mask,
            header.file_count,
            name_width + ENTRY_FIXED_SIZE,
        );
        if platform == Platform::Unknown {
            log::warn!(
                "Platform mask 0x{:02X} matches no known platform",
                header.version.platform_mask
            );
        }

        // Not trusting file_count for the allocation, it comes straight from the file.
        let mut files = Vec::with_capacity(header.file_count.min(1024) as usize);
        for _ in 0..header.file_count {
            files.push(Entry::read(
                reader,
                byte_order,
                name_width,
                registry,
                disable_formatting,
            )?);
        }

        Ok(Self {
            byte_order,
            version: header.version,
            platform,
            package_size: header.package_size,
            file_count: header.file_count,
            suffix_unknowns: header.suffix_unknowns,
            files,
        })
    }

    pub fn load_from_path<P: AsRef<Path>, L: LoaderRegistry + ?Sized>(
        path: P,
        registry: &L,
        disable_formatting: bool,
    ) -> Result<Self, MstError> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path).map_err(|e| {
            MstError::Io(format!("Couldn't open archive {}", path.display()), e)
        })?);
        Self::read_from(&mut reader, registry, disable_formatting)
    }

    /// The byte order the magic marker selected.
    pub fn byte_order(&self) -> Endian {
        self.byte_order
    }

    pub fn version(&self) -> VersionWord {
        self.version
    }

    pub fn major_version(&self) -> u8 {
        self.version.major
    }

    pub fn minor_version(&self) -> u8 {
        self.version.minor
    }

    pub fn sub_version(&self) -> u8 {
        self.version.sub
    }

    pub fn platform_mask(&self) -> u8 {
        self.version.platform_mask
    }

    /// Offset of the first entry record.
    pub fn table_offset(&self) -> usize {
        HEADER_SIZE
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.files.iter().find(|e| e.name == name)
    }
}

impl Display for Archive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MST({}, {} bytes, {} files)",
            self.platform, self.package_size, self.file_count
        )
    }
}
