use anyhow::Result;
use clap::{Parser, Subcommand};
use fungus_review::commands;

/// Reviewer CLI for FUNGUS plagiarism-detection results.
///
/// This CLI is a thin wrapper around `review-core` (exposed in code as
/// `review_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "fungus-review",
    version,
    about = "Review plagiarism-detection results and record verdicts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a plagiarism results file: project pairs and loader warnings.
    ReportInfo {
        /// Path to the FUNGUS results file (JSON).
        #[arg(long)]
        report: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List project pairs with per-pair verdict counts.
    Pairs {
        /// Path to the FUNGUS results file (JSON).
        #[arg(long)]
        report: String,

        /// Path to the verdicts file. Missing file means no prior verdicts.
        #[arg(long)]
        verdicts: String,

        /// Only show matches with these verdicts (repeatable). Accepts the
        /// three verdict labels plus `no-verdict`. Default: show everything.
        #[arg(long)]
        show: Vec<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show one match side by side, with highlight segments when the student
    /// projects directory is given.
    ShowMatch {
        /// Path to the FUNGUS results file (JSON).
        #[arg(long)]
        report: String,

        /// Path to the verdicts file.
        #[arg(long)]
        verdicts: String,

        /// Index of the project pair (as listed by `pairs`).
        #[arg(long)]
        pair: usize,

        /// Index of the match within the pair.
        #[arg(long = "match")]
        match_index: usize,

        /// Directory containing the student projects; enables source
        /// highlighting.
        #[arg(long)]
        projects_dir: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Record a verdict for a pair of code locations (`file:start-end`).
    SetVerdict {
        /// Path to the verdicts file (created if missing).
        #[arg(long)]
        verdicts: String,

        /// First location, as `file:start-end`.
        #[arg(long)]
        location1: String,

        /// Second location, as `file:start-end`.
        #[arg(long)]
        location2: String,

        /// One of: no-plagiarism, potential-plagiarism, plagiarism.
        #[arg(long)]
        verdict: String,
    },

    /// Print the stored verdict for a pair of code locations.
    GetVerdict {
        /// Path to the verdicts file.
        #[arg(long)]
        verdicts: String,

        /// First location, as `file:start-end`.
        #[arg(long)]
        location1: String,

        /// Second location, as `file:start-end`.
        #[arg(long)]
        location2: String,
    },

    /// Mark two locations as the same plagiarized code (equivalence mode).
    Accept {
        /// Path to the equivalence-relation file (created if missing).
        #[arg(long)]
        relation: String,

        /// First location, as `file:start-end`.
        #[arg(long)]
        location1: String,

        /// Second location, as `file:start-end`.
        #[arg(long)]
        location2: String,
    },

    /// Mark two locations as definitely different code (equivalence mode).
    Reject {
        /// Path to the equivalence-relation file (created if missing).
        #[arg(long)]
        relation: String,

        /// First location, as `file:start-end`.
        #[arg(long)]
        location1: String,

        /// Second location, as `file:start-end`.
        #[arg(long)]
        location2: String,
    },

    /// Print the accept/reject/unknown judgment for two locations
    /// (equivalence mode).
    Judge {
        /// Path to the equivalence-relation file.
        #[arg(long)]
        relation: String,

        /// First location, as `file:start-end`.
        #[arg(long)]
        location1: String,

        /// Second location, as `file:start-end`.
        #[arg(long)]
        location2: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::ReportInfo { report, json } => commands::report_info_command(&report, json)?,
        Command::Pairs { report, verdicts, show, json } => {
            commands::pairs_command(&report, &verdicts, &show, json)?
        }
        Command::ShowMatch { report, verdicts, pair, match_index, projects_dir, json } => {
            commands::show_match_command(
                &report,
                &verdicts,
                pair,
                match_index,
                projects_dir.as_deref(),
                json,
            )?
        }
        Command::SetVerdict { verdicts, location1, location2, verdict } => {
            commands::set_verdict_command(&verdicts, &location1, &location2, &verdict)?
        }
        Command::GetVerdict { verdicts, location1, location2 } => {
            commands::get_verdict_command(&verdicts, &location1, &location2)?
        }
        Command::Accept { relation, location1, location2 } => {
            commands::accept_command(&relation, &location1, &location2)?
        }
        Command::Reject { relation, location1, location2 } => {
            commands::reject_command(&relation, &location1, &location2)?
        }
        Command::Judge { relation, location1, location2 } => {
            commands::judge_command(&relation, &location1, &location2)?
        }
    }

    Ok(())
}
