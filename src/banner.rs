//! Terminal output: startup banner, evaluation results, and summaries.

use std::path::Path;

use crate::consts::{AUTHOR, HOMEPAGE, REPO, format_index, format_value};
use crate::engine::{Evaluation, ReferenceThresholds, Weights};

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub config: &'a str,
    pub report_dir: &'a Path,
    pub weights: &'a Weights,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║            A Q U A S E N S            ║
   ║   water quality against WHO limits    ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   config    {}
   reports   {}
   weights   pH {} · turbidity {} · arsenic {}

   enter a sample as: <pH> <turbidity NTU> <arsenic µg/L>   (/help for commands)
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.config,
        info.report_dir.display(),
        info.weights.ph,
        info.weights.turbidity,
        info.weights.arsenic,
    );
}

/// Render an evaluation the way the REPL and `assess` show it.
pub fn evaluation_text(evaluation: &Evaluation) -> String {
    let mut out = format!(
        "\n  {} {}\n  {}\n\n",
        evaluation.decision.icon(),
        evaluation.decision,
        evaluation.decision_text
    );
    for (parameter, assessment) in evaluation.assessments.iter() {
        out.push_str(&format!(
            "  {:<10} {:<12} {:>3}  {}\n",
            parameter.label(),
            assessment.status.to_string(),
            assessment.score,
            assessment.message
        ));
    }
    out.push_str(&format!(
        "\n  quality index (0-100): {}\n",
        format_index(evaluation.index)
    ));
    out
}

pub fn print_evaluation(evaluation: &Evaluation) {
    print!("{}", evaluation_text(evaluation));
}

/// Render reference thresholds and active weights.
pub fn thresholds_text(thresholds: &ReferenceThresholds, weights: &Weights) -> String {
    format!(
        "  pH         {} – {}                weight {}\n\
         \x20 turbidity  ideal ≤ {}, acceptable ≤ {}    weight {}\n\
         \x20 arsenic    guideline ≤ {}             weight {}\n",
        format_value(thresholds.ph.min, ""),
        format_value(thresholds.ph.max, ""),
        weights.ph,
        format_value(thresholds.turbidity.good, "NTU"),
        format_value(thresholds.turbidity.acceptable, "NTU"),
        weights.turbidity,
        format_value(thresholds.arsenic, "µg/L"),
        weights.arsenic,
    )
}

/// Print the session summary (sample count + farewell).
pub fn print_session_summary(samples: usize) {
    if samples > 0 {
        println!("session: {samples} sample(s) evaluated");
    }
    println!("goodbye.");
}
