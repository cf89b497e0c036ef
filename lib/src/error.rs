use thiserror::Error;

#[derive(Error, Debug)]
pub enum MstError {
    #[error("Unrecognized magic {0:?}, expected \"FANG\" or \"GNAF\"")]
    BadMagic([u8; 4]),
    #[error("Stream ended early: {0}, {1}")]
    Truncated(String, #[source] binrw::Error),
    #[error("Entry '{name}' has a timestamp ({timestamp}) that can't be a date")]
    DateConversion { name: String, timestamp: u32 },
    #[error("No loader for extension '{0}': {1}")]
    Loader(String, #[source] LoaderError),
    #[error("I/O error: {0}, {1}")]
    Io(String, #[source] std::io::Error),
    #[error("binrw error: {0}, {1}")]
    BinRW(String, #[source] binrw::Error),
}

impl MstError {
    /// Wrap a [binrw::Error] from reading [what], sorting out running off the end of the stream.
    pub(crate) fn from_binrw(what: &str, error: binrw::Error) -> Self {
        if error.is_eof() {
            Self::Truncated(format!("Couldn't read {}", what), error)
        } else {
            Self::BinRW(format!("Couldn't read {}", what), error)
        }
    }
}

pub type LoaderError = Box<dyn std::error::Error + Send + Sync>;
