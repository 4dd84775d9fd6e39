//! Mastery table per verb and tense.

use std::io::Write;

use conjuga_session::{DrillEngine, RecordRow};

fn slot_mark(row: &RecordRow, index: usize) -> &'static str {
    match &row.latest[index] {
        Some(attempt) if attempt.is_correct => "✓",
        Some(_) => "✗",
        None => "·",
    }
}

fn flag_list(row: &RecordRow) -> String {
    let mut flags = Vec::new();
    if row.preferences.never_show {
        flags.push("never");
    }
    if row.preferences.always_show {
        flags.push("always");
    }
    if row.preferences.show_primarily {
        flags.push("primary");
    }
    flags.join(",")
}

pub fn run<W: Write>(engine: &DrillEngine, learner: &str, out: &mut W) -> anyhow::Result<()> {
    let rows = engine.records(learner)?;
    let attempted = rows.iter().filter(|r| r.attempted()).count();
    let mastered = rows.iter().filter(|r| r.mastered).count();

    writeln!(out, "{:<12} {:<36} {:<8} {:<9} flags", "verb", "tense", "slots", "mastered")?;
    for row in &rows {
        let slots: String = (0..row.latest.len()).map(|i| slot_mark(row, i)).collect();
        writeln!(
            out,
            "{:<12} {:<36} {:<8} {:<9} {}",
            row.verb,
            row.tense_name,
            slots,
            if row.mastered { "yes" } else { "" },
            flag_list(row)
        )?;
    }
    writeln!(out, "\n{attempted} attempted, {mastered} mastered, {} total", rows.len())?;
    Ok(())
}
