//! Interactive drill: exercises, then remediation rounds until the
//! session completes.

use std::io::{BufRead, Write};

use anyhow::bail;

use conjuga_core::models::PronounSlot;
use conjuga_session::{
    AdvanceOutcome, CompletionStatus, DrillEngine, PersistenceWarning, RemediationOutcome,
};

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> anyhow::Result<String> {
    write!(out, "{label}: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn report_warnings<W: Write>(out: &mut W, warnings: &[PersistenceWarning]) -> anyhow::Result<()> {
    for warning in warnings {
        writeln!(out, "  (not saved: {warning})")?;
    }
    Ok(())
}

pub fn run<R: BufRead, W: Write>(
    engine: &DrillEngine,
    learner: &str,
    batch_size: usize,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let started = engine.start(learner, batch_size)?;
    report_warnings(out, &started.warnings)?;
    if started.nothing_available() {
        writeln!(out, "Nothing to practise. Adjust preferences or come back later.")?;
        return Ok(());
    }

    loop {
        let prompt = engine.current_exercise(learner)?;
        writeln!(
            out,
            "\n[{}/{}] {} ({})",
            prompt.index + 1,
            prompt.total,
            prompt.verb,
            prompt.tense_name
        )?;

        let mut answers: [String; PronounSlot::COUNT] = Default::default();
        for (slot, pronoun) in PronounSlot::ALL.iter().zip(prompt.pronouns) {
            answers[slot.index()] = read_answer(input, out, pronoun)?;
        }

        let submitted = engine.submit_exercise(learner, &answers)?;
        for result in &submitted.results {
            if result.is_correct {
                writeln!(out, "  ✓ {} {}", result.pronoun_slot, result.correct_form)?;
            } else {
                writeln!(
                    out,
                    "  ✗ {} {} (you wrote \"{}\")",
                    result.pronoun_slot, result.correct_form, result.user_answer
                )?;
            }
        }
        report_warnings(out, &submitted.warnings)?;

        match engine.advance(learner)? {
            AdvanceOutcome::NextExercise(_) => continue,
            AdvanceOutcome::Complete(status) => return finish(engine, learner, status, out),
            AdvanceOutcome::RemediationPending {
                sentence_queue,
                word_queue,
            } => {
                writeln!(
                    out,
                    "\nReview: {sentence_queue} sentence(s), {word_queue} word(s)."
                )?;
                break;
            }
        }
    }

    loop {
        let outcome = remediation_round(engine, learner, input, out)?;
        if let Some(status) = outcome.completion {
            return finish(engine, learner, status, out);
        }
        writeln!(
            out,
            "\nStill to review: {} sentence(s), {} word(s).",
            outcome.remaining_sentences, outcome.remaining_words
        )?;
    }
}

fn remediation_round<R: BufRead, W: Write>(
    engine: &DrillEngine,
    learner: &str,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<RemediationOutcome> {
    let prompt = engine.remediation_prompt(learner)?;

    let mut word_answers = Vec::with_capacity(prompt.word_queue.len());
    if !prompt.word_queue.is_empty() {
        writeln!(out, "\nType the correct form:")?;
    }
    for task in &prompt.word_queue {
        let label = format!("{} ({}, {})", task.pronoun, task.error.verb, task.tense_name);
        word_answers.push(read_answer(input, out, &label)?);
    }

    let mut sentence_answers = Vec::with_capacity(prompt.sentence_queue.len());
    if !prompt.sentence_queue.is_empty() {
        writeln!(out, "\nWrite a sentence using the form shown:")?;
    }
    for task in &prompt.sentence_queue {
        let label = format!(
            "\"{}\" ({}, {}, {})",
            task.error.correct_form, task.pronoun, task.error.verb, task.tense_name
        );
        sentence_answers.push(read_answer(input, out, &label)?);
    }

    let outcome = engine.submit_remediation(learner, &word_answers, &sentence_answers)?;

    for verdict in &outcome.results.words {
        let mark = if verdict.is_correct { "✓" } else { "✗" };
        writeln!(out, "  {mark} {}", verdict.error.correct_form)?;
    }
    for verdict in &outcome.results.sentences {
        if !verdict.is_correct {
            writeln!(
                out,
                "  ✗ \"{}\" does not use \"{}\"",
                verdict.sentence, verdict.error.correct_form
            )?;
            continue;
        }
        writeln!(out, "  ✓ \"{}\"", verdict.sentence)?;
        let critique = engine.sentence_feedback(&verdict.sentence, &verdict.error.correct_form);
        if let Some(critique) = critique {
            if !critique.grammar_notes.is_empty() {
                writeln!(out, "    grammar: {}", critique.grammar_notes)?;
            }
            for fix in &critique.spelling_errors {
                writeln!(out, "    spelling: {} → {}", fix.error, fix.correction)?;
            }
            if !critique.naturalness_note.is_empty() {
                writeln!(out, "    naturalness: {}", critique.naturalness_note)?;
            }
            for suggestion in &critique.suggestions {
                writeln!(out, "    try: {suggestion}")?;
            }
            if let Some(comment) = &critique.overall_comment {
                writeln!(out, "    {comment}")?;
            }
        }
    }
    report_warnings(out, &outcome.warnings)?;
    Ok(outcome)
}

fn finish<W: Write>(
    engine: &DrillEngine,
    learner: &str,
    status: CompletionStatus,
    out: &mut W,
) -> anyhow::Result<()> {
    match status {
        CompletionStatus::AllCorrect => writeln!(out, "\nAll correct. Session complete.")?,
        CompletionStatus::Remediated => writeln!(out, "\nAll errors reviewed. Session complete.")?,
    }
    engine.reset(learner)?;
    Ok(())
}
