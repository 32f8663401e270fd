use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fmt;

lazy_static! {
    static ref ANSWER_SEPARATOR_REGEX: Regex = Regex::new(r"\s*,\s*").unwrap();
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AnswerLabel {
    A,
    B,
    C,
    D,
}

impl AnswerLabel {
    pub const ALL: [AnswerLabel; 4] = [
        AnswerLabel::A,
        AnswerLabel::B,
        AnswerLabel::C,
        AnswerLabel::D,
    ];

    pub fn parse(token: &str) -> Option<AnswerLabel> {
        match token.trim().to_uppercase().as_ref() {
            "A" => Some(AnswerLabel::A),
            "B" => Some(AnswerLabel::B),
            "C" => Some(AnswerLabel::C),
            "D" => Some(AnswerLabel::D),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            AnswerLabel::A => "A",
            AnswerLabel::B => "B",
            AnswerLabel::C => "C",
            AnswerLabel::D => "D",
        };
        f.write_str(letter)
    }
}

/// One row of the question sheet, after header trimming.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawQuestion {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Answer")]
    pub answer: String,
    #[serde(rename = "Answer Option A")]
    pub option_a: String,
    #[serde(rename = "Answer Option B")]
    pub option_b: String,
    #[serde(rename = "Answer Option C")]
    pub option_c: String,
    #[serde(rename = "Answer Option D")]
    pub option_d: String,
    #[serde(rename = "Hint", default)]
    pub hint: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub correct_answers: Vec<AnswerLabel>,
    pub hint: String,
}

impl Question {
    /// Any one of the correct labels is enough.
    pub fn is_correct(&self, label: AnswerLabel) -> bool {
        self.correct_answers.contains(&label)
    }

    pub fn answer_display(&self) -> String {
        self.correct_answers.iter().join(", ")
    }
}

fn parse_answer_labels(answer: &str) -> Result<Vec<AnswerLabel>, String> {
    let mut labels = Vec::new();
    for token in ANSWER_SEPARATOR_REGEX.split(answer.trim()) {
        if token.is_empty() {
            continue;
        }
        let label = AnswerLabel::parse(token)
            .ok_or_else(|| format!("answer `{}` is not one of A, B, C or D", token))?;
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    if labels.is_empty() {
        return Err("answer is blank".to_owned());
    }
    Ok(labels)
}

impl std::convert::TryFrom<RawQuestion> for Question {
    type Error = String;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        let RawQuestion {
            question,
            answer,
            option_a,
            option_b,
            option_c,
            option_d,
            hint,
        } = raw_question;

        let text = question.trim().to_owned();
        if text.is_empty() {
            return Err("question text is blank".to_owned());
        }

        let options = [
            option_a.trim().to_owned(),
            option_b.trim().to_owned(),
            option_c.trim().to_owned(),
            option_d.trim().to_owned(),
        ];
        for (label, option) in AnswerLabel::ALL.iter().zip(options.iter()) {
            if option.is_empty() {
                return Err(format!("option {} is blank", label));
            }
        }

        let correct_answers = parse_answer_labels(&answer)?;

        let hint = hint
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| answer.trim().to_owned());

        Ok(Question {
            text,
            options,
            correct_answers,
            hint,
        })
    }
}
