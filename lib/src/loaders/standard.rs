use std::borrow::Cow;
use std::path::Path;

use crate::loaders::{Loader, LoaderKind};

/// Loader handed out by [crate::loaders::StandardLoaders].
#[derive(Debug, Clone)]
pub struct StandardLoader {
    kind: LoaderKind,
    extension: String,
    formatting_enabled: bool,
    file: String,
}

impl StandardLoader {
    pub fn new(kind: LoaderKind, extension: &str, formatting_enabled: bool, file: &str) -> Self {
        Self {
            kind,
            extension: extension.to_string(),
            formatting_enabled,
            file: file.to_string(),
        }
    }
}

impl Loader for StandardLoader {
    fn kind(&self) -> LoaderKind {
        self.kind
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn formatting_enabled(&self) -> bool {
        self.formatting_enabled
    }

    fn output_name(&self) -> Cow<str> {
        match self.kind.formatted_extension() {
            Some(new_ext) if self.formatting_enabled => Cow::Owned(
                Path::new(&self.file)
                    .with_extension(new_ext)
                    .to_string_lossy()
                    .into_owned(),
            ),
            _ => Cow::Borrowed(&self.file),
        }
    }
}
