use crate::libpubquiz::question::Question;
use log::debug;
use rand::seq::SliceRandom;
use rand::{rng, Rng};
use serde::Deserialize;
use std::path::Path;
use std::slice;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Round {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    questions: Vec<Question>,
}

impl Round {
    pub fn new(title: &str, description: &str, questions: Vec<Question>) -> Self {
        Round {
            title: title.to_string(),
            description: description.to_string(),
            questions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
        debug!("[Setup] Shuffled {} questions in '{}'", self.len(), self.title);
    }

    pub fn anchor_paths(&mut self, base: &Path) {
        for question in self.questions.iter_mut() {
            question.anchor_paths(base);
        }
    }

    /// Sheet page for this round. Question sheets get an empty numbered slot
    /// per question; answer sheets list "question (answer)".
    pub fn render_sheet(&self, with_answers: bool, index: usize) -> String {
        let mut lines: Vec<String> = vec![
            r"\newpage".into(),
            r"\begin{center}".into(),
            r"\Huge".into(),
            format!("Round {}: {}", index, self.title),
            r"\end{center}".into(),
            r"\LARGE".into(),
        ];
        if !self.description.is_empty() {
            if !with_answers {
                lines.push(r"\vspace{-1cm}".into());
            }
            lines.push(self.description.clone());
        }
        if with_answers {
            lines.push(r"\large".into());
            lines.push(r"\begin{enumerate}".into());
            lines.extend(self.questions.iter().map(|q| format!(r"\item {}", q)));
            lines.push(r"\end{enumerate}".into());
            lines.push(r"\LARGE".into());
        } else {
            lines.push(r"\Huge".into());
            lines.push(r"\begin{enumerate}".into());
            lines.extend(self.questions.iter().map(|_| r"\item".to_string()));
            lines.push(r"\end{enumerate}".into());
            lines.push(String::new());
        }
        lines.join("\n")
    }

    pub fn render_slides(&self, with_answers: bool) -> String {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| q.render_slide(i + 1, with_answers))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
