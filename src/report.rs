//! Per-cycle check reports.
//!
//! A [`CycleReport`] bundles everything one polling cycle produced: the
//! detected device, the discovered services and their results. It renders
//! as monitoring-plugin text or as JSON for export.

use anyhow::{Context, Result};
use pduwatch_types::{CheckResult, Direction, RowTable, Section, State, ThresholdConfig};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::data::{discover, evaluate, parse, service_name};

/// Results of one discovered phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceReport {
    pub item: String,
    pub service_name: String,
    /// Worst state of all results, OK when there are none.
    pub state: State,
    pub results: Vec<CheckResult>,
}

impl ServiceReport {
    /// Evaluate one item of a section.
    pub fn check(item: &str, config: &ThresholdConfig, section: &Section) -> Self {
        let results = evaluate(item, config, section);
        Self {
            item: item.to_string(),
            service_name: service_name(item),
            state: State::worst_of(results.iter().map(|r| r.state)),
            results,
        }
    }

    /// One line of plugin output: `Phase 1: WARN - Voltage: 215.00 V (warn/crit below 220.00/210.00) | V=215`.
    pub fn render(&self) -> String {
        let head = format!("{}: {}", self.service_name, self.state);

        if self.results.is_empty() {
            return format!("{head} - no data");
        }

        let summaries: Vec<String> = self.results.iter().map(render_summary).collect();
        let perfdata: Vec<String> = self.results.iter().map(render_perfdata).collect();
        format!("{head} - {} | {}", summaries.join(", "), perfdata.join(" "))
    }
}

fn render_summary(result: &CheckResult) -> String {
    match (&result.levels, result.state) {
        (Some(levels), State::Warn | State::Crit) => {
            let relation = match levels.direction {
                Direction::Upper => "at",
                Direction::Lower => "below",
            };
            format!(
                "{} (warn/crit {} {:.2}/{:.2})",
                result.summary, relation, levels.warn, levels.crit
            )
        }
        _ => result.summary.clone(),
    }
}

fn render_perfdata(result: &CheckResult) -> String {
    let metric = &result.metric;
    match metric.levels {
        Some((warn, crit)) => format!("{}={};{};{}", metric.name, metric.value, warn, crit),
        None => format!("{}={}", metric.name, metric.value),
    }
}

/// Everything one polling cycle produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    /// Section name of the detected device.
    pub device: String,
    pub section: Section,
    pub services: Vec<ServiceReport>,
}

impl CycleReport {
    /// Worst state across all services.
    pub fn state(&self) -> State {
        State::worst_of(self.services.iter().map(|s| s.state))
    }

    /// Look up a service by item.
    pub fn service(&self, item: &str) -> Option<&ServiceReport> {
        self.services.iter().find(|s| s.item == item)
    }

    /// Plugin output, one line per service.
    pub fn render(&self) -> String {
        self.services
            .iter()
            .map(ServiceReport::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }
}

/// Run one full cycle over a row table: detect, parse, discover, evaluate.
///
/// A table without a sysObjectID is accepted when `settings.device` names
/// the model. Unknown devices and unparsable rows fail the whole cycle.
pub fn check_cycle(table: &RowTable, settings: &Settings) -> Result<CycleReport> {
    let variant = match (&table.sys_object_id, settings.device) {
        (Some(_), configured) => {
            let detected = pduwatch_adapters::accept(table)?;
            if let Some(configured) = configured.filter(|c| *c != detected) {
                warn!(%detected, %configured, "device signature differs from configured device");
            }
            detected
        }
        (None, Some(configured)) => configured,
        (None, None) => return Err(pduwatch_adapters::AdapterError::MissingSignature.into()),
    };

    let section = parse(&table.rows).with_context(|| format!("{variant}: unusable row table"))?;
    debug!(device = %variant, phases = section.len(), "parsed section");

    let services = discover(&section)
        .iter()
        .map(|item| ServiceReport::check(item, &settings.levels, &section))
        .collect();

    Ok(CycleReport {
        device: variant.name().to_string(),
        section,
        services,
    })
}
