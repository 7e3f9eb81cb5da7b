//! Compare command - Train all four variants under the same settings

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{config::LearnerArgs, output},
    pipeline::{Comparison, ComparisonEntry},
    q_learning::{LearnerConfig, Variant},
};

#[derive(Parser, Debug)]
#[command(about = "Compare the learner variants side-by-side")]
pub struct CompareArgs {
    /// Variants to run (defaults to all four)
    #[arg(long, short = 'v', value_delimiter = ',')]
    pub variants: Vec<Variant>,

    #[command(flatten)]
    pub learner: LearnerArgs,
}

#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    config: &'a LearnerConfig,
    runs: &'a [ComparisonEntry],
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let config = args.learner.learner_config();
    let mut comparison = Comparison::new(config.clone()).with_progress(args.learner.show_progress());
    if !args.variants.is_empty() {
        comparison = comparison.with_variants(args.variants.iter().copied());
    }

    if !args.learner.json {
        output::print_section(&format!(
            "Comparing {} variants",
            comparison.variants().len()
        ));
        output::print_config(&config);
    }

    let runs = comparison.run()?;

    if args.learner.json {
        let report = CompareReport {
            config: &config,
            runs: &runs,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &runs {
        output::print_result(&entry.result, &entry.metrics);
    }

    output::print_subsection("Summary");
    println!(
        "  {:<12} {:>10} {:>12} {:>16}",
        "Variant", "Episodes", "Probe Q", "Recent max diff"
    );
    for entry in &runs {
        println!(
            "  {:<12} {:>10} {:>12} {:>16}",
            entry.result.variant.name(),
            output::format_number(entry.result.episodes),
            output::format_optional(entry.result.final_probe_value()),
            output::format_optional(entry.result.recent_max_diff(output::RECENT_WINDOW)),
        );
    }

    Ok(())
}
