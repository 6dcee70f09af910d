use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use wiki_quiz::{EngineError, OptionMark, QuizRecord, QuizSession};

/// Runs an interactive quiz over line-based input.
///
/// Every question has to be answered before the quiz can be submitted.
/// Answers can be changed until then. End of input abandons the attempt.
pub fn take(record: Arc<QuizRecord>, input: impl BufRead, output: impl Write) -> Result<()> {
    let session = match QuizSession::new(record) {
        Ok(session) => session,
        Err(EngineError::NoQuestions) => {
            let mut output = output;
            writeln!(output, "{}", EngineError::NoQuestions)?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    Taker {
        session,
        input,
        output,
    }
    .run()
}

struct Taker<R, W> {
    session: QuizSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Taker<R, W> {
    fn run(mut self) -> Result<()> {
        writeln!(self.output, "Take the Quiz: {}", self.session.record().title)?;

        loop {
            for question_index in 0..self.session.question_count() {
                if !self.ask(question_index)? {
                    return self.abandon();
                }
            }

            if !self.confirm_submit()? {
                return self.abandon();
            }

            let score = self.session.submit();
            self.print_results()?;
            writeln!(self.output, "\nScore: {score}")?;

            match self.prompt("Reset quiz and try again? [y/N]: ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => self.session.reset(),
                _ => return Ok(()),
            }
        }
    }

    /// Asks one question until a valid option is chosen. Returns `false`
    /// when the input ends.
    fn ask(&mut self, question_index: usize) -> Result<bool> {
        let question = &self.session.questions()[question_index];
        let option_count = question.options.len();

        writeln!(
            self.output,
            "\nQuestion {}: {}",
            question_index + 1,
            question.question
        )?;
        for (option_index, option) in question.options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", option_index + 1, option.text)?;
        }

        if option_count == 0 {
            writeln!(self.output, "  (no options, skipped)")?;
            return Ok(true);
        }

        loop {
            let Some(line) = self.prompt(&format!("Answer [1-{option_count}]: "))? else {
                return Ok(false);
            };

            let selection = line
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1));

            match selection.map(|option_index| self.session.select_answer(question_index, option_index)) {
                Some(Ok(())) => return Ok(true),
                Some(Err(err)) => tracing::debug!(%err, "Rejected selection"),
                None => {}
            }

            writeln!(
                self.output,
                "Please enter a number between 1 and {option_count}."
            )?;
        }
    }

    fn confirm_submit(&mut self) -> Result<bool> {
        loop {
            let answered = self.session.answered_count();
            let total = self.session.question_count();

            let ready = self.is_ready();

            if !ready {
                writeln!(
                    self.output,
                    "\n{answered} of {total} questions answered; the quiz cannot be submitted yet."
                )?;
            }

            let Some(choice) = self.prompt("\nSubmit quiz? [y]es / [c]hange an answer: ")? else {
                return Ok(false);
            };

            match choice.to_ascii_lowercase().as_str() {
                "y" | "yes" if ready => return Ok(true),
                "c" | "change" => {
                    let Some(line) = self.prompt(&format!("Question number [1-{total}]: "))? else {
                        return Ok(false);
                    };

                    match line.parse::<usize>() {
                        Ok(number) if (1..=total).contains(&number) => {
                            if !self.ask(number - 1)? {
                                return Ok(false);
                            }
                        }
                        _ => writeln!(self.output, "No question {line}.")?,
                    }
                }
                _ => {}
            }
        }
    }

    /// Complete, ignoring questions that offer no options to choose from.
    fn is_ready(&self) -> bool {
        self.session.is_complete()
            || self
                .session
                .questions()
                .iter()
                .enumerate()
                .all(|(index, question)| {
                    question.options.is_empty() || self.session.selected(index).is_some()
                })
    }

    fn print_results(&mut self) -> Result<()> {
        writeln!(self.output, "\nResults\n-------")?;

        for (question_index, question) in self.session.questions().iter().enumerate() {
            writeln!(
                self.output,
                "\nQuestion {}: {}",
                question_index + 1,
                question.question
            )?;

            for (option_index, option) in question.options.iter().enumerate() {
                let marker = match self.session.option_mark(question_index, option_index) {
                    OptionMark::Correct => "  [Correct]",
                    OptionMark::Wrong => "  [Wrong]",
                    OptionMark::Selected | OptionMark::Unmarked => "",
                };
                writeln!(self.output, "  {}. {}{marker}", option_index + 1, option.text)?;
            }

            if let Some(explanation) = self.session.explanation(question_index) {
                writeln!(self.output, "  Explanation: {explanation}")?;
            }
        }

        Ok(())
    }

    fn abandon(mut self) -> Result<()> {
        writeln!(self.output, "\nQuiz abandoned.")?;

        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }
}
