use std::borrow::Cow;
use std::fmt::Debug;

use strum::{Display, EnumString};

use crate::data::entry::EntryRecord;
use crate::error::LoaderError;
use crate::loaders::standard::StandardLoader;

pub mod standard;

/// Asset-specific handling attached to each entry of an archive.
pub trait Loader: Debug + Send + Sync {
    /// What sort of content this loader understands.
    fn kind(&self) -> LoaderKind;

    /// The lowercased extension the loader was picked with.
    fn extension(&self) -> &str;

    /// Whether the loader will format the asset on export, or hand it over untouched.
    fn formatting_enabled(&self) -> bool;

    /// Get the file name the asset would be exported under.
    fn output_name(&self) -> Cow<str>;
}

/// Picks a [Loader] for an entry, from its extension.
pub trait LoaderRegistry {
    fn loader_for(
        &self,
        extension: &str,
        disable_formatting: bool,
        record: &EntryRecord,
    ) -> Result<Box<dyn Loader>, LoaderError>;
}

impl<F> LoaderRegistry for F
where
    F: Fn(&str, bool, &EntryRecord) -> Result<Box<dyn Loader>, LoaderError>,
{
    fn loader_for(
        &self,
        extension: &str,
        disable_formatting: bool,
        record: &EntryRecord,
    ) -> Result<Box<dyn Loader>, LoaderError> {
        self(extension, disable_formatting, record)
    }
}

#[derive(Display, EnumString, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum LoaderKind {
    Texture,
    Sound,
    Model,
    Text,
    Raw,
}

impl LoaderKind {
    pub fn for_extension(extension: &str) -> Self {
        match extension {
            "tex" | "xpr" | "tm2" | "tga" | "bmp" | "dds" | "png" => Self::Texture,
            "wav" | "vag" | "xwb" | "adx" | "dsp" => Self::Sound,
            "mdl" | "xbg" | "msh" => Self::Model,
            "txt" | "ini" | "cfg" | "xml" | "csv" => Self::Text,
            _ => Self::Raw,
        }
    }

    /// Extension of the file once formatted, if formatting changes it.
    pub fn formatted_extension(&self) -> Option<&'static str> {
        match self {
            Self::Texture => Some("png"),
            Self::Sound => Some("wav"),
            Self::Model | Self::Text | Self::Raw => None,
        }
    }
}

/// The built-in extension mapping. Anything it doesn't know gets a [LoaderKind::Raw] loader.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardLoaders;

impl LoaderRegistry for StandardLoaders {
    fn loader_for(
        &self,
        extension: &str,
        disable_formatting: bool,
        record: &EntryRecord,
    ) -> Result<Box<dyn Loader>, LoaderError> {
        let kind = LoaderKind::for_extension(extension);
        log::trace!("Using {} loader for '{}'", kind, record.name);
        Ok(Box::new(StandardLoader::new(
            kind,
            extension,
            !disable_formatting,
            &record.name,
        )))
    }
}
