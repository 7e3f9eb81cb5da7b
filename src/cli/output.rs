//! Output formatting for CLI

use crate::{
    pipeline::MetricsSummary,
    q_learning::{LearnerConfig, TrainingResult},
};

/// Samples used for the "recent max diff" convergence figure
pub const RECENT_WINDOW: usize = 100;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format an optional float, printing `n/a` when absent
pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.6}"))
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

pub fn print_config(config: &LearnerConfig) {
    print_kv("Steps", &format_number(config.steps));
    print_kv("Alpha", &config.alpha.to_string());
    print_kv("Gamma", &config.gamma.to_string());
    print_kv(
        "Seed",
        &config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string()),
    );
    print_kv("Policy", &config.policy.to_string());
}

/// Print the summary of a finished run
pub fn print_result(result: &TrainingResult, metrics: &MetricsSummary) {
    print_subsection(result.variant.name());
    print_kv("Episodes", &format_number(result.episodes));
    print_kv(
        "Scored / conceded",
        &format!(
            "{} / {} ({:.1}%)",
            format_number(result.scored),
            format_number(result.conceded),
            metrics.score_rate * 100.0
        ),
    );
    print_kv("Avg episode length", &format!("{:.2}", metrics.avg_episode_length));
    print_kv("Final alpha", &format!("{:.6}", result.final_alpha));
    print_kv("Probe updates", &format_number(result.trace.len()));
    print_kv("Probe Q", &format_optional(result.final_probe_value()));
    print_kv(
        "Recent max diff",
        &format_optional(result.recent_max_diff(RECENT_WINDOW)),
    );
    if let Some(policy) = result.trace.last().and_then(|s| s.policy) {
        let formatted: Vec<String> = policy.iter().map(|p| format!("{p:.3}")).collect();
        print_kv("Probe policy", &format!("[{}]", formatted.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None), "n/a");
        assert_eq!(format_optional(Some(0.5)), "0.500000");
    }
}
