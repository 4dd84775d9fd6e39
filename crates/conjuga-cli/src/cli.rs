//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use conjuga_core::constants::DEFAULT_LEARNER_ID;

#[derive(Parser, Debug)]
#[command(name = "conjuga")]
#[command(about = "Adaptive verb conjugation drills with staged remediation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "CONJUGA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Learner identity
    #[arg(short, long, env = "CONJUGA_LEARNER", default_value = DEFAULT_LEARNER_ID)]
    pub learner: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one drill session, remediation included
    Drill {
        /// Exercises in the batch (default from config)
        #[arg(short, long)]
        batch_size: Option<usize>,
    },
    /// Show mastery per verb and tense
    Records,
    /// List sentences written during remediation
    Sentences,
    /// Set visibility flags for one verb and tense
    Prefs {
        #[arg(long)]
        verb: String,
        #[arg(long)]
        tense: String,
        /// Never select this pair
        #[arg(long)]
        never_show: bool,
        /// Select even when mastered
        #[arg(long)]
        always_show: bool,
        /// Draw from the priority pool
        #[arg(long)]
        show_primarily: bool,
    },
}
