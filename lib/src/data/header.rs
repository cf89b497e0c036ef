use std::io::{Read, Seek};

use binrw::{binread, BinRead, Endian};
use bitvec::prelude::*;
use strum::{Display, EnumString};

use crate::error::MstError;

/// Magic for archives stored little-endian. Big-endian archives store it reversed.
pub const MAGIC_LE: [u8; 4] = *b"FANG";
pub const MAGIC_BE: [u8; 4] = *b"GNAF";

/// Number of reserved words trailing the header.
pub const SUFFIX_UNKNOWN_COUNT: usize = 23;

/// Gotta keep this in sync with the MstHeader below, plus the magic.
pub const HEADER_SIZE: usize =
    // for the magic
    4 +
    // for the version word
    4 +
    // for the package size
    4 +
    // for the file count
    4 +
    // for the reserved words
    4 * SUFFIX_UNKNOWN_COUNT;

/// Read the magic marker and work out which byte order the rest of the archive uses.
pub fn read_byte_order<R: Read + Seek>(reader: &mut R) -> Result<Endian, MstError> {
    let magic = <[u8; 4]>::read_options(reader, Endian::Little, ())
        .map_err(|e| MstError::from_binrw("magic", e))?;
    byte_order_for_magic(magic)
}

pub fn byte_order_for_magic(magic: [u8; 4]) -> Result<Endian, MstError> {
    match magic {
        MAGIC_LE => Ok(Endian::Little),
        MAGIC_BE => Ok(Endian::Big),
        other => Err(MstError::BadMagic(other)),
    }
}

/// Everything between the magic and the entry table. Has no endianness of its own, it is
/// read with whatever the magic said.
#[binread]
#[derive(Debug, Clone)]
pub struct MstHeader {
    #[br(map = VersionWord::from_raw)]
    pub version: VersionWord,
    pub package_size: u32,
    pub file_count: u32,
    pub suffix_unknowns: [u32; SUFFIX_UNKNOWN_COUNT],
}

impl MstHeader {
    pub fn platform(&self) -> Platform {
        self.version.platform()
    }

    /// Width of the name field of every entry in this archive.
    pub fn name_width(&self) -> usize {
        name_width(self.version.major, self.version.minor, self.platform())
    }
}

/// The packed version word: three version bytes plus the platform mask in the top byte.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VersionWord {
    pub major: u8,
    pub minor: u8,
    pub sub: u8,
    pub platform_mask: u8,
}

impl VersionWord {
    pub fn from_raw(raw: u32) -> Self {
        let packed = BitArray::<u32, Lsb0>::new(raw);
        Self {
            sub: packed[0..8].load_le::<u8>(),
            minor: packed[8..16].load_le::<u8>(),
            major: packed[16..24].load_le::<u8>(),
            platform_mask: packed[24..32].load_le::<u8>(),
        }
    }

    pub fn platform(&self) -> Platform {
        Platform::from_mask(self.platform_mask)
    }
}

#[derive(Display, EnumString, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[strum(serialize_all = "snake_case")]
#[allow(clippy::upper_case_acronyms)]
pub enum Platform {
    Xbox,
    #[strum(serialize = "playstation")]
    PlayStation,
    #[strum(serialize = "gamecube")]
    GameCube,
    #[strum(serialize = "pc")]
    PC,
    Unknown,
}

/// Checked top to bottom, the first bit that is set wins.
const PLATFORM_BITS: [(u8, Platform); 4] = [
    (0x01, Platform::Xbox),
    (0x10, Platform::GameCube),
    (0x20, Platform::PlayStation),
    (0x04, Platform::PC),
];

impl Platform {
    pub fn from_mask(mask: u8) -> Self {
        PLATFORM_BITS
            .iter()
            .find(|(bit, _)| mask & bit != 0)
            .map_or(Self::Unknown, |&(_, platform)| platform)
    }
}

/// Old archives (1.0 through 1.7) always use short names, otherwise it depends on the platform.
pub fn name_width(major: u8, minor: u8, platform: Platform) -> usize {
    if major == 1 && minor <= 7 {
        16
    } else if platform == Platform::PlayStation {
        24
    } else {
        20
    }
}

#[cfg(test)]
mod header_tests {
    use std::io::Cursor;
    use std::str::FromStr;

    use binrw::{BinRead, Endian};

    use crate::data::header::{
        byte_order_for_magic, name_width, read_byte_order, MstHeader, Platform, VersionWord,
    };
    use crate::error::MstError;

    #[test]
    fn magic_picks_byte_order() {
        assert_eq!(byte_order_for_magic(*b"FANG").unwrap(), Endian::Little);
        assert_eq!(byte_order_for_magic(*b"GNAF").unwrap(), Endian::Big);
    }

    #[test]
    fn bad_magic_rejected() {
        for magic in [*b"XXXX", *b"fang", *b"FAN\0", [0; 4], *b"GANF"] {
            match byte_order_for_magic(magic) {
                Err(MstError::BadMagic(found)) => assert_eq!(found, magic),
                other => panic!("expected BadMagic for {:?}, got {:?}", magic, other),
            }
        }
    }

    #[test]
    fn short_magic_is_truncated() {
        let mut reader = Cursor::new(b"FA".to_vec());
        assert!(matches!(
            read_byte_order(&mut reader),
            Err(MstError::Truncated(..))
        ));
    }

    #[test]
    fn version_word_split() {
        let version = VersionWord::from_raw(0x01020304);
        assert_eq!(version.major, 2);
        assert_eq!(version.minor, 3);
        assert_eq!(version.sub, 4);
        assert_eq!(version.platform_mask, 0x01);
        assert_eq!(version.platform(), Platform::Xbox);
    }

    #[test]
    fn platform_priority() {
        assert_eq!(Platform::from_mask(0x11), Platform::Xbox);
        assert_eq!(Platform::from_mask(0x30), Platform::GameCube);
        assert_eq!(Platform::from_mask(0x24), Platform::PlayStation);
        assert_eq!(Platform::from_mask(0x04), Platform::PC);
        assert_eq!(Platform::from_mask(0xFF), Platform::Xbox);
        assert_eq!(Platform::from_mask(0x00), Platform::Unknown);
        assert_eq!(Platform::from_mask(0x4A), Platform::Unknown);
    }

    #[test]
    fn platform_names() {
        assert_eq!(Platform::PlayStation.to_string(), "playstation");
        assert_eq!(Platform::GameCube.to_string(), "gamecube");
        assert_eq!(Platform::PC.to_string(), "pc");
        assert_eq!(Platform::from_str("xbox").unwrap(), Platform::Xbox);
    }

    #[test]
    fn name_widths() {
        assert_eq!(name_width(1, 7, Platform::PlayStation), 16);
        assert_eq!(name_width(1, 0, Platform::PC), 16);
        assert_eq!(name_width(1, 8, Platform::PlayStation), 24);
        assert_eq!(name_width(2, 0, Platform::PC), 20);
        assert_eq!(name_width(1, 8, Platform::Unknown), 20);
        assert_eq!(name_width(0, 3, Platform::Xbox), 20);
    }

    #[test]
    fn header_honours_endian() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x20010803u32.to_be_bytes());
        bytes.extend_from_slice(&4096u32.to_be_bytes());
        bytes.extend_from_slice(&3u32.to_be_bytes());
        for i in 0..23u32 {
            bytes.extend_from_slice(&i.to_be_bytes());
        }

        let header = MstHeader::read_options(&mut Cursor::new(bytes), Endian::Big, ()).unwrap();
        assert_eq!(header.version.major, 1);
        assert_eq!(header.version.minor, 8);
        assert_eq!(header.version.sub, 3);
        assert_eq!(header.platform(), Platform::PlayStation);
        assert_eq!(header.package_size, 4096);
        assert_eq!(header.file_count, 3);
        assert_eq!(header.suffix_unknowns.len(), 23);
        assert_eq!(header.suffix_unknowns[22], 22);
        assert_eq!(header.name_width(), 24);
    }
}
