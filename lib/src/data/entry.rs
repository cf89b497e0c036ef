use std::fmt::{Debug, Formatter};
use std::io::{Read, Seek};
use std::ops::Range;

use binrw::{binread, BinRead, Endian};
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::MstError;
use crate::loaders::{Loader, LoaderRegistry};

// Location + length + timestamp + unknown, the name comes on top.
pub const ENTRY_FIXED_SIZE: usize = 4 + 4 + 4 + 4;

/// One record of the entry table, as it is stored.
#[binread]
#[derive(Debug, Clone)]
#[br(import { name_width: usize })]
pub struct EntryRecord {
    #[br(temp, count = name_width)]
    name_bytes: Vec<u8>,
    #[br(calc = decode_name(&name_bytes))]
    pub name: String,
    pub location: u32,
    pub length: u32,
    pub timestamp: u32,
    pub unknown: u32,
}

/// Cut the name at the first terminator. Whatever follows it is junk, not necessarily zeroes.
fn decode_name(bytes: &[u8]) -> String {
    let len = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..len]).into_owned()
}

impl EntryRecord {
    pub fn read<R: Read + Seek>(
        reader: &mut R,
        endian: Endian,
        name_width: usize,
    ) -> Result<Self, MstError> {
        Self::read_options(
            reader,
            endian,
            EntryRecordBinReadArgs::builder()
                .name_width(name_width)
                .finalize(),
        )
        .map_err(|e| MstError::from_binrw("entry record", e))
    }

    /// The lowercased text after the last dot. Names without a dot are all extension.
    pub fn extension(&self) -> String {
        extension_of(&self.name)
    }

    pub fn create_date(&self) -> Result<NaiveDate, MstError> {
        timestamp_to_date(self.timestamp).ok_or_else(|| MstError::DateConversion {
            name: self.name.clone(),
            timestamp: self.timestamp,
        })
    }
}

pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Only the UTC date survives, the time of day is dropped.
pub fn timestamp_to_date(timestamp: u32) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(i64::from(timestamp), 0).map(|d| d.date_naive())
}

/// A decoded entry, with its loader attached.
pub struct Entry {
    pub name: String,
    pub location: u32,
    pub length: u32,
    pub create_date: NaiveDate,
    pub unknown: u32,
    pub loader: Box<dyn Loader>,
}

impl Entry {
    /// Read the next record and resolve its date and loader.
    pub fn read<R: Read + Seek, L: LoaderRegistry + ?Sized>(
        reader: &mut R,
        endian: Endian,
        name_width: usize,
        registry: &L,
        disable_formatting: bool,
    ) -> Result<Self, MstError> {
        let record = EntryRecord::read(reader, endian, name_width)?;
        Self::from_record(record, registry, disable_formatting)
    }

    pub fn from_record<L: LoaderRegistry + ?Sized>(
        record: EntryRecord,
        registry: &L,
        disable_formatting: bool,
    ) -> Result<Self, MstError> {
        let create_date = record.create_date()?;
        let extension = record.extension();
        let loader = registry
            .loader_for(&extension, disable_formatting, &record)
            .map_err(|e| MstError::Loader(extension, e))?;
        log::trace!(
            "Entry '{}' at 0x{:X}, {} bytes, created {}",
            record.name,
            record.location,
            record.length,
            create_date
        );

        Ok(Self {
            name: record.name,
            location: record.location,
            length: record.length,
            create_date,
            unknown: record.unknown,
            loader,
        })
    }

    pub fn extension(&self) -> String {
        extension_of(&self.name)
    }

    /// Where the asset's bytes live within the package.
    pub fn data_range(&self) -> Range<u64> {
        let start = u64::from(self.location);
        start..start + u64::from(self.length)
    }
}

impl Debug for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("location", &format_args!("0x{:X}", self.location))
            .field("length", &self.length)
            .field("create_date", &self.create_date)
            .field("unknown", &self.unknown)
            .field("loader", &self.loader)
            .finish()
    }
}
