use crate::libpubquiz::error::Error;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const LATEX_HEADER: &str = "latex_header";
pub const BEAMER_HEADER: &str = "beamer_header";
pub const BEAMER_PREAMBLE: &str = "beamer_preamble";
pub const PICTURE_SLIDES: &str = "picture_slides";

pub const NAMES: [&str; 4] = [LATEX_HEADER, BEAMER_HEADER, BEAMER_PREAMBLE, PICTURE_SLIDES];

/// Boilerplate LaTeX blocks that the renderers copy into their output
/// without looking inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    latex_header: String,
    beamer_header: String,
    beamer_preamble: String,
    picture_slides: String,
}

impl TemplateSet {
    pub fn builtin() -> Self {
        TemplateSet {
            latex_header: include_str!("latex_templates/latex_header.tex").to_string(),
            beamer_header: include_str!("latex_templates/beamer_header.tex").to_string(),
            beamer_preamble: include_str!("latex_templates/beamer_preamble.tex").to_string(),
            picture_slides: include_str!("latex_templates/picture_slides.tex").to_string(),
        }
    }

    /// Templates from `dir/<name>.tex`, falling back to the built-in copy for
    /// every file that isn't there.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let mut templates = Self::builtin();
        for name in NAMES {
            let path = dir.join(format!("{}.tex", name));
            match fs::read_to_string(&path) {
                Ok(text) => {
                    info!("[Templates] Using {:?} for {}", path, name);
                    *templates.slot_mut(name) = text;
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    debug!("[Templates] No {:?}, using built-in {}", path, name);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(templates)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            LATEX_HEADER => Some(&self.latex_header),
            BEAMER_HEADER => Some(&self.beamer_header),
            BEAMER_PREAMBLE => Some(&self.beamer_preamble),
            PICTURE_SLIDES => Some(&self.picture_slides),
            _ => None,
        }
    }

    fn slot_mut(&mut self, name: &str) -> &mut String {
        match name {
            LATEX_HEADER => &mut self.latex_header,
            BEAMER_HEADER => &mut self.beamer_header,
            BEAMER_PREAMBLE => &mut self.beamer_preamble,
            _ => &mut self.picture_slides,
        }
    }

    pub fn latex_header(&self) -> &str {
        &self.latex_header
    }

    pub fn beamer_header(&self) -> &str {
        &self.beamer_header
    }

    /// Writes this set's `name` block to `path` unless something is already
    /// there. Returns whether a file was written.
    pub fn ensure_fragment(&self, name: &str, path: &Path) -> Result<bool, Error> {
        if path.exists() {
            debug!("[Templates] {:?} already exists", path);
            return Ok(false);
        }
        let text = self
            .get(name)
            .ok_or_else(|| Error::UnknownTemplate(name.to_string()))?;
        fs::write(path, text)?;
        info!("[Templates] {:?} was missing, wrote the default {}", path, name);
        Ok(true)
    }
}

/// Where the slide deck expects its `\include`d fragments, relative to the
/// output directory.
pub fn slide_fragments(output_dir: &Path) -> [(&'static str, PathBuf); 2] {
    [
        (BEAMER_PREAMBLE, output_dir.join("preamble.tex")),
        (PICTURE_SLIDES, output_dir.join("picture_slides.tex")),
    ]
}
