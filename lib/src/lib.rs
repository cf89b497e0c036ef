//! Reader for the index of MST (`FANG`) game asset packages.

pub mod console;
pub mod data;
pub mod error;
pub mod loaders;
pub mod uwu_colors;

pub use data::archive::Archive;
pub use data::entry::Entry;
pub use data::header::{Platform, VersionWord};
pub use error::MstError;
pub use loaders::{Loader, LoaderKind, LoaderRegistry, StandardLoaders};
