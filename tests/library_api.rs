use pubquiz::libpubquiz::content::Content;
use pubquiz::libpubquiz::question::Question;
use pubquiz::libpubquiz::quiz::Quiz;
use pubquiz::libpubquiz::round::Round;
use pubquiz::libpubquiz::templates::TemplateSet;

fn trivia_night() -> Quiz {
    Quiz::new(
        "Trivia Night",
        "Quizmaster",
        vec![
            Round::new(
                "Warm-up",
                "Easy ones first",
                vec![Question::new("2+2?", "4"), Question::new("3+3?", "6")],
            ),
            Round::new("Underworked", "", vec![Question::new("Hours in a week?", "168")]),
        ],
    )
}

#[test]
fn build_and_render_from_outside_the_crate() {
    let quiz = trivia_night();
    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz.rounds()[0].description(), "Easy ones first");
    assert!(!quiz.get(0).unwrap().get(0).unwrap().question.as_ref().unwrap().is_file());

    let templates = TemplateSet::builtin();
    let answers = quiz.render_sheets(&templates, true).unwrap();
    assert!(answers.contains(r"\item 2+2? (4)"));
    assert!(answers.contains(r"\item Hours in a week? (168)"));

    let slides = quiz.render_slides(&templates);
    assert!(!slides.contains(r"\textit{168}"));
    assert!(slides.contains(r"\textit{6}"));
}

#[test]
fn shuffle_a_single_round() {
    let mut quiz = trivia_night();
    let before: Vec<String> = quiz.get(0).unwrap().iter().map(|q| q.to_string()).collect();

    quiz.get_mut(0).unwrap().shuffle();

    let mut after: Vec<String> = quiz.get(0).unwrap().iter().map(|q| q.to_string()).collect();
    after.sort();
    let mut expected = before.clone();
    expected.sort();
    assert_eq!(after, expected);
    assert_eq!(quiz.get(1).unwrap().title(), "Underworked");
}

#[test]
fn from_mapping_matches_from_yaml() {
    let yaml = "title: Trivia Night\nauthor: Quizmaster\nrounds:\n  - title: Warm-up\n    questions:\n      - question: 2+2?\n        answer: \"4\"\n";
    let mapping: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    let from_mapping = Quiz::from_mapping(&mapping).unwrap();
    assert_eq!(from_mapping, Quiz::from_yaml_str(yaml).unwrap());
    assert_eq!(from_mapping.get(0).unwrap().questions()[0].answer, Some(Content::Text("4".to_string())));
}
