pub mod archive;
pub mod entry;
pub mod header;
