//! Initial duration and probability estimates from TRL metadata.

use crate::SchedulerConfig;
use techtree_types::{trl, Diagnostic, Node};
use tracing::warn;

/// Starting point of a node before any simulated year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialEstimate {
    /// Estimated years of work. May be zero or negative for mature nodes.
    pub duration: f64,

    /// Probability of success before any risk is retired.
    pub probability: f64,
}

impl InitialEstimate {
    /// Estimate a node, appending a diagnostic for every defaulted value.
    pub fn for_node(
        node: &Node,
        config: &SchedulerConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            duration: initial_duration(node, config, diagnostics),
            probability: initial_probability(node, config, diagnostics),
        }
    }
}

/// Estimated years of work for a node.
///
/// A projected TRL wins outright; otherwise the leading level of the current
/// TRL is converted at `years_per_trl_level` per missing level.
pub fn initial_duration(
    node: &Node,
    config: &SchedulerConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> f64 {
    if node.trl_projected_5_10_years.is_some() {
        return config.projected_duration_years;
    }

    let Some(raw) = node.trl_current.as_deref() else {
        return config.fallback_duration_years;
    };

    match trl::leading_level(raw) {
        Some(level) => trl::years_to_maturity(level, config.years_per_trl_level),
        None => {
            let diagnostic = Diagnostic::UnparsedTrl {
                node: node.id.clone(),
                value: raw.to_string(),
            };
            warn!(%diagnostic, "Using fallback duration");
            diagnostics.push(diagnostic);
            config.fallback_duration_years
        }
    }
}

/// Initial probability of success for a node.
pub fn initial_probability(
    node: &Node,
    config: &SchedulerConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> f64 {
    let Some(raw) = node.trl_current.as_deref() else {
        return config.trl.default_probability;
    };

    match config.trl.get(trl::probability_key(raw)) {
        Some(probability) => probability,
        None => {
            let diagnostic = Diagnostic::UnknownTrlBucket {
                node: node.id.clone(),
                value: raw.to_string(),
            };
            warn!(%diagnostic, "Using default probability");
            diagnostics.push(diagnostic);
            config.trl.default_probability
        }
    }
}
