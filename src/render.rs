use std::io::Write;

use anyhow::Result;
use wiki_quiz::{related_topic_url, QuizRecord};

/// Prints a record read-only: summary, entities, every question with its
/// correct answers marked, and related topics.
pub fn render(record: &QuizRecord, mut output: impl Write) -> Result<()> {
    let data = &record.data;

    writeln!(output, "{}", record.title)?;
    writeln!(output, "{}", "=".repeat(record.title.chars().count()))?;

    if let Some(summary) = &data.summary {
        writeln!(output, "\nSummary\n-------\n{summary}")?;
    }

    if !data.key_entities.is_empty() {
        writeln!(output, "\nKey Entities\n------------")?;

        for entity in &data.key_entities {
            writeln!(output, "* {} ({})", entity.name, entity.kind)?;
            if !entity.description.is_empty() {
                writeln!(output, "  {}", entity.description)?;
            }
        }
    }

    if !data.quiz_questions.is_empty() {
        writeln!(output, "\nQuiz Questions\n--------------")?;

        for (index, question) in data.quiz_questions.iter().enumerate() {
            writeln!(
                output,
                "\nQuestion {} [{}]: {}",
                index + 1,
                question.difficulty,
                question.question
            )?;

            for (option_index, option) in question.options.iter().enumerate() {
                let marker = if option.is_correct {
                    "  <- Correct Answer"
                } else {
                    ""
                };
                writeln!(output, "  {}. {}{marker}", option_index + 1, option.text)?;
            }

            if let Some(explanation) = &question.explanation {
                writeln!(output, "  Explanation: {explanation}")?;
            }
        }
    }

    if !data.related_topics.is_empty() {
        writeln!(output, "\nRelated Topics\n--------------")?;

        for topic in &data.related_topics {
            writeln!(output, "* {topic} <{}>", related_topic_url(topic))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiki_quiz::{KeyEntity, Question, QuizOption, QuizPayload};

    fn render_to_string(record: &QuizRecord) -> String {
        let mut output = Vec::new();
        render(record, &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn renders_all_sections() {
        let mut question = Question::new(
            "Who wrote the first algorithm?".to_owned(),
            vec![
                QuizOption::new("Ada Lovelace", true),
                QuizOption::new("Charles Dickens", false),
            ],
        );
        question.explanation = Some("Her notes on the Analytical Engine.".to_owned());

        let record = QuizRecord::new(
            "Ada Lovelace".to_owned(),
            QuizPayload {
                summary: Some("English mathematician.".to_owned()),
                key_entities: vec![KeyEntity {
                    name: "Analytical Engine".to_owned(),
                    kind: "invention".to_owned(),
                    description: "Proposed mechanical computer".to_owned(),
                }],
                quiz_questions: vec![question],
                related_topics: vec!["Charles Babbage".to_owned()],
            },
        );

        let output = render_to_string(&record);

        assert!(output.starts_with("Ada Lovelace\n============\n"));
        assert!(output.contains("English mathematician."));
        assert!(output.contains("* Analytical Engine (invention)"));
        assert!(output.contains("Question 1 [medium]: Who wrote the first algorithm?"));
        assert!(output.contains("  1. Ada Lovelace  <- Correct Answer\n"));
        assert!(output.contains("  2. Charles Dickens\n"));
        assert!(output.contains("Explanation: Her notes on the Analytical Engine."));
        assert!(output.contains("* Charles Babbage <https://en.wikipedia.org/wiki/Charles_Babbage>"));
    }

    #[test]
    fn skips_empty_sections() {
        let record = QuizRecord::new("Bare".to_owned(), QuizPayload::default());

        assert_eq!(render_to_string(&record), "Bare\n====\n");
    }
}
