use std::fmt;
use std::path::{Path, PathBuf};

/// Text of a question, answer or slide override.
///
/// A value that names an existing file when the quiz is loaded becomes a
/// [`Content::File`] and is rendered as an `\input{...}` directive, so the
/// file gets embedded by LaTeX. Anything else is kept as literal text.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    File(PathBuf),
}

impl Content {
    pub fn resolve(raw: String) -> Content {
        if !raw.is_empty() && Path::new(&raw).exists() {
            Content::File(PathBuf::from(raw))
        } else {
            Content::Text(raw)
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Content::File(_))
    }

    /// Joins a relative file reference onto `base`. Text is left alone.
    pub fn anchor(&mut self, base: &Path) {
        if let Content::File(path) = self {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => f.write_str(text),
            Content::File(path) => write!(f, "\\input{{{}}}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn existing_path_becomes_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "What is the capital of Peru?").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let content = Content::resolve(path.clone());
        assert!(content.is_file());
        assert_eq!(content.to_string(), format!("\\input{{{}}}", path));
    }

    #[test]
    fn dangling_path_stays_text() {
        let content = Content::resolve("no/such/file.tex".to_string());
        assert_eq!(content, Content::Text("no/such/file.tex".to_string()));
        assert_eq!(content.to_string(), "no/such/file.tex");
    }

    #[test]
    fn anchor_only_moves_relative_files() {
        let mut relative = Content::File(PathBuf::from("rounds/music.tex"));
        relative.anchor(Path::new("/srv/quiz"));
        assert_eq!(relative, Content::File(PathBuf::from("/srv/quiz/rounds/music.tex")));

        let mut absolute = Content::File(PathBuf::from("/tmp/music.tex"));
        absolute.anchor(Path::new("/srv/quiz"));
        assert_eq!(absolute, Content::File(PathBuf::from("/tmp/music.tex")));

        let mut text = Content::Text("rounds/music.tex".to_string());
        text.anchor(Path::new("/srv/quiz"));
        assert_eq!(text, Content::Text("rounds/music.tex".to_string()));
    }

    #[test]
    fn empty_string_is_text() {
        assert!(!Content::resolve(String::new()).is_file());
    }
}
