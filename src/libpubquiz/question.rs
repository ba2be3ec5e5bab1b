use crate::libpubquiz::content::Content;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

const DEFAULT_PIC_HEIGHT: f64 = 0.6;

fn default_pic_height() -> f64 {
    DEFAULT_PIC_HEIGHT
}

/// Question as written in the quiz document, before any file references are
/// resolved.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct QuestionSpec {
    question: Option<String>,
    answer: Option<String>,
    question_pic: Option<PathBuf>,
    #[serde(default = "default_pic_height")]
    question_pic_height: f64,
    question_pic_credit: Option<String>,
    question_slide: Option<String>,
    answer_pic: Option<PathBuf>,
    #[serde(default = "default_pic_height")]
    answer_pic_height: f64,
    answer_pic_credit: Option<String>,
    answer_slide: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "QuestionSpec")]
pub struct Question {
    pub question: Option<Content>,
    pub answer: Option<Content>,
    pub question_pic: Option<PathBuf>,
    pub question_pic_height: f64,
    pub question_pic_credit: Option<String>,
    pub question_slide: Option<Content>,
    pub answer_pic: Option<PathBuf>,
    pub answer_pic_height: f64,
    pub answer_pic_credit: Option<String>,
    pub answer_slide: Option<Content>,
}

impl From<QuestionSpec> for Question {
    fn from(spec: QuestionSpec) -> Self {
        Question {
            question: spec.question.map(Content::resolve),
            answer: spec.answer.map(Content::resolve),
            question_pic: spec.question_pic,
            question_pic_height: spec.question_pic_height,
            question_pic_credit: spec.question_pic_credit,
            question_slide: spec.question_slide.map(Content::resolve),
            answer_pic: spec.answer_pic,
            answer_pic_height: spec.answer_pic_height,
            answer_pic_credit: spec.answer_pic_credit,
            answer_slide: spec.answer_slide.map(Content::resolve),
        }
    }
}

impl Default for Question {
    fn default() -> Self {
        Question {
            question: None,
            answer: None,
            question_pic: None,
            question_pic_height: DEFAULT_PIC_HEIGHT,
            question_pic_credit: None,
            question_slide: None,
            answer_pic: None,
            answer_pic_height: DEFAULT_PIC_HEIGHT,
            answer_pic_credit: None,
            answer_slide: None,
        }
    }
}

/// Heights always carry a decimal point: `0.6`, `1.0`. A YAML height of `1`
/// is printed as `1.0`.
fn format_height(height: f64) -> String {
    format!("{:?}", height)
}

fn graphic(path: &Path, height: f64) -> String {
    format!(
        r"\vspace{{0.5em}}\includegraphics[height={}\paperheight]{{{}}}",
        format_height(height),
        path.display()
    )
}

fn photo_credit(credit: &str) -> String {
    format!(r"\blfootnote{{photo credit: {}}}", credit)
}

fn text_or_empty(content: &Option<Content>) -> String {
    content.as_ref().map(|c| c.to_string()).unwrap_or_default()
}

impl Question {
    pub fn new(question: &str, answer: &str) -> Self {
        Question {
            question: Some(Content::resolve(question.to_string())),
            answer: Some(Content::resolve(answer.to_string())),
            ..Default::default()
        }
    }

    /// Makes relative file references and picture paths absolute against
    /// `base`, for documents compiled somewhere other than where they were
    /// loaded.
    pub fn anchor_paths(&mut self, base: &Path) {
        for content in [
            &mut self.question,
            &mut self.answer,
            &mut self.question_slide,
            &mut self.answer_slide,
        ]
        .into_iter()
        .flatten()
        {
            content.anchor(base);
        }
        for pic in [&mut self.question_pic, &mut self.answer_pic]
            .into_iter()
            .flatten()
        {
            if pic.is_relative() {
                *pic = base.join(&*pic);
            }
        }
    }

    /// Beamer frame for this question, numbered `index`.
    ///
    /// With `with_answer` the frame gets two reveal steps: step 1 shows the
    /// question (and its picture), step 2 brings in the answer picture and
    /// the answer text. A hand-written `question_slide`/`answer_slide`
    /// replaces the whole frame body for its mode.
    pub fn render_slide(&self, index: usize, with_answer: bool) -> String {
        let manual = if with_answer {
            &self.answer_slide
        } else {
            &self.question_slide
        };
        if let Some(slide) = manual {
            return [r"\begin{frame}".to_string(), slide.to_string(), r"\end{frame}".to_string()]
                .join("\n");
        }

        let mut lines: Vec<String> = vec![
            r"\begin{frame}".into(),
            r"\begin{center}".into(),
            r"\Large".into(),
            format!("{}. {}", index, text_or_empty(&self.question)),
        ];

        if let Some(question_pic) = &self.question_pic {
            let pic = graphic(question_pic, self.question_pic_height);
            if let Some(credit) = &self.question_pic_credit {
                lines.push(photo_credit(credit));
            }
            lines.push(r"\\".into());
            if with_answer && self.answer_pic.is_some() {
                lines.push(format!(r"\only<1>{{{}}}", pic));
            } else {
                lines.push(pic);
            }
        }

        if with_answer {
            if let Some(answer_pic) = &self.answer_pic {
                let pic = graphic(answer_pic, self.answer_pic_height);
                // Only printed when the question picture is credited too.
                if self.question_pic_credit.is_some() {
                    if let Some(credit) = &self.answer_pic_credit {
                        lines.push(photo_credit(credit));
                    }
                }
                if self.question_pic.is_some() {
                    lines.push(format!(r"\only<2>{{{}}}", pic));
                } else {
                    lines.push(r"\\".into());
                    lines.push(format!(r"\onslide<2>{{{}}}", pic));
                }
            }
            let after_input = lines.last().is_some_and(|line| line.contains(r"\input"));
            if !after_input {
                lines.push(r"\\".into());
            }
            if let Some(answer) = &self.answer {
                lines.push(format!(
                    r"\onslide<2->{{\vspace{{1em}}\textit{{{}}}}}",
                    answer
                ));
            }
        }

        lines.push(r"\end{center}".into());
        lines.push(r"\end{frame}".into());
        lines.join("\n")
    }
}

/// The "question (answer)" form used on answer sheets.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            text_or_empty(&self.question),
            text_or_empty(&self.answer)
        )
    }
}
