use crate::libpubquiz::error::Error;
use crate::libpubquiz::round::Round;
use crate::libpubquiz::templates::TemplateSet;
use log::{debug, info};
use rand::{rng, Rng};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::slice;

/// Rounds with this title get question slides but no answer slides.
pub const UNDERWORKED: &str = "Underworked";

fn default_date() -> String {
    r"\today".to_string()
}

/// Rounds that live outside the generated sheets (pictures.tex, puzzles.tex).
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtraRound {
    Pictures,
    Puzzles,
}

impl fmt::Display for ExtraRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraRound::Pictures => f.write_str("picture"),
            ExtraRound::Puzzles => f.write_str("puzzle"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Quiz {
    title: String,
    author: String,
    #[serde(default = "default_date")]
    date: String,
    #[serde(default)]
    rounds: Vec<Round>,
    #[serde(default)]
    extra_rounds: Vec<ExtraRound>,
}

fn separator_slide(title: &str) -> String {
    [
        r"\begin{frame}",
        r"\begin{center}",
        r"\Huge",
        title,
        r"\end{center}",
        r"\end{frame}",
    ]
    .join("\n")
}

fn finish_document(lines: Vec<String>) -> String {
    let mut document = lines.join("\n");
    document.push('\n');
    document
}

impl Quiz {
    pub fn new(title: &str, author: &str, rounds: Vec<Round>) -> Self {
        Quiz {
            title: title.to_string(),
            author: author.to_string(),
            date: default_date(),
            rounds,
            extra_rounds: Vec::new(),
        }
    }

    /// Reads a quiz document, YAML or JSON depending on the file extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let quiz = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?)?,
            _ => return Err(Error::UnknownFormat(path.to_path_buf())),
        };
        info!(
            "[Load] {:?}: '{}' with {} rounds",
            path,
            quiz.title,
            quiz.len()
        );
        Ok(quiz)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a quiz from an already parsed document. The document is left
    /// untouched.
    pub fn from_mapping(mapping: &serde_yaml::Value) -> Result<Self, Error> {
        Ok(serde_yaml::from_value(mapping.clone())?)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn iter(&self) -> slice::Iter<'_, Round> {
        self.rounds.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Round> {
        self.rounds.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Shuffles the questions inside every round. Round order stays put.
    pub fn shuffle_rounds_questions(&mut self) {
        self.shuffle_rounds_questions_with(&mut rng());
    }

    pub fn shuffle_rounds_questions_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for round in self.rounds.iter_mut() {
            round.shuffle_with(&mut *rng);
        }
    }

    /// Makes every relative file reference and picture path absolute against
    /// `base`, so the documents still compile when written elsewhere.
    pub fn anchor_paths(&mut self, base: &Path) {
        debug!("[Load] Anchoring relative paths at {:?}", base);
        for round in self.rounds.iter_mut() {
            round.anchor_paths(base);
        }
    }

    fn title_page(&self) -> Vec<String> {
        let mut lines: Vec<String> = [
            r"\centering",
            r"\Huge",
            self.title.as_str(),
            r"\vspace{2cm}",
            "",
            r"\LARGE",
            r"Team Name: \underline{\hphantom{XXXXXXXXXXXXXXXXXXXXXXXXXX}}",
            "",
            r"\vspace{3cm}",
            "",
            r"\LARGE",
            r"\begin{tabular}{ll}",
            r"\hline",
            r"Round & Score \\",
            r"\hline",
        ]
        .iter()
        .map(|line| line.to_string())
        .collect();
        lines.extend(self.rounds.iter().map(|r| format!(r"{} & \\", r.title())));
        lines.extend(
            [
                r"Picture: Overpaid & \\",
                r"Puzzles: Connect four & \\",
                r"TOTAL \\",
                r"\hline",
                r"\end{tabular}",
                r"\thispagestyle{empty}",
                r"\Huge",
            ]
            .iter()
            .map(|line| line.to_string()),
        );
        lines
    }

    /// Printable sheets: question sheets (title page with score table, then
    /// one page of blank numbered slots per round) or, `with_answers`, the
    /// marking sheets.
    ///
    /// # Errors
    ///
    /// [`Error::Unimplemented`] if the quiz asks for picture or puzzle rounds.
    pub fn render_sheets(&self, templates: &TemplateSet, with_answers: bool) -> Result<String, Error> {
        let mut lines = vec![
            templates.latex_header().trim_end().to_string(),
            r"\begin{document}".to_string(),
        ];

        if !with_answers {
            lines.extend(self.title_page());
        }

        for (i, round) in self.rounds.iter().enumerate() {
            lines.push(round.render_sheet(with_answers, i + 1));
        }

        if let Some(extra) = self.extra_rounds.first() {
            return Err(Error::Unimplemented(*extra));
        }

        lines.push(r"\end{document}".to_string());
        debug!(
            "[Render] Sheets for '{}' (answers: {})",
            self.title, with_answers
        );
        Ok(finish_document(lines))
    }

    /// Beamer deck: per round a title slide, the question slides, an
    /// "Answers" slide and the answer slides.
    pub fn render_slides(&self, templates: &TemplateSet) -> String {
        let mut lines = vec![
            templates.beamer_header().trim_end().to_string(),
            format!(r"\title{{{}}}", self.title),
            format!(r"\author{{{}}}", self.author),
            format!(r"\date{{{}}}", self.date),
            r"\begin{document}".to_string(),
            r"\include{preamble}".to_string(),
            r"\frame{\titlepage}".to_string(),
        ];

        for (i, round) in self.rounds.iter().enumerate() {
            lines.push(separator_slide(&format!("Round {}: {}", i + 1, round.title())));
            if !round.is_empty() {
                lines.push(round.render_slides(false));
            }

            lines.push(separator_slide("Answers"));
            if round.title() == UNDERWORKED {
                debug!("[Render] No answer slides for round {}", i + 1);
                continue;
            }
            if !round.is_empty() {
                lines.push(round.render_slides(true));
            }
        }

        lines.push(r"\include{picture_slides}".to_string());
        lines.push(r"\end{document}".to_string());
        debug!("[Render] Slides for '{}'", self.title);
        finish_document(lines)
    }
}
