//! Set visibility flags for one verb and tense.

use std::io::Write;

use conjuga_core::models::PreferenceFlags;
use conjuga_session::DrillEngine;

pub fn run<W: Write>(
    engine: &DrillEngine,
    learner: &str,
    verb: &str,
    tense: &str,
    flags: PreferenceFlags,
    out: &mut W,
) -> anyhow::Result<()> {
    engine.update_preference(learner, verb, tense, flags)?;
    writeln!(
        out,
        "{verb} ({}): never_show={} always_show={} show_primarily={}",
        engine.catalog().tense_name(tense),
        flags.never_show,
        flags.always_show,
        flags.show_primarily
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use conjuga_core::config::SessionConfig;
    use conjuga_session::Phase;
    use test_fixtures::{falar_catalog, MemoryStore};

    use super::*;

    fn engine() -> DrillEngine {
        DrillEngine::new(
            Arc::new(falar_catalog()),
            Arc::new(MemoryStore::new()),
            SessionConfig::default(),
        )
    }

    #[test]
    fn never_show_hides_the_pair() {
        let engine = engine();
        let flags = PreferenceFlags {
            never_show: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        run(&engine, "ana", "falar", "presente", flags, &mut out).unwrap();

        assert!(engine.start("ana", 5).unwrap().nothing_available());
        assert_eq!(engine.phase("ana"), Phase::Idle);
    }

    #[test]
    fn unknown_pair_is_rejected() {
        let mut out = Vec::new();
        let result = run(&engine(), "ana", "ser", "presente", PreferenceFlags::default(), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
