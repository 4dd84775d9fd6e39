//! Sentences written during remediation.

use std::io::Write;

use conjuga_session::DrillEngine;

pub fn run<W: Write>(engine: &DrillEngine, learner: &str, out: &mut W) -> anyhow::Result<()> {
    let sentences = engine.sentences(learner)?;
    if sentences.is_empty() {
        writeln!(out, "No sentences yet.")?;
        return Ok(());
    }
    for s in &sentences {
        writeln!(
            out,
            "{}  {} {} ({}, {})\n    {}",
            s.recorded_at.format("%Y-%m-%d %H:%M"),
            s.pronoun_slot,
            s.correct_form,
            s.verb,
            engine.catalog().tense_name(&s.tense),
            s.sentence
        )?;
    }
    Ok(())
}
