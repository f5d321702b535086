use crate::{AutoAction, AutoplayError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Winner,
    MaxSteps,
    NoLegalAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepRecord {
    pub step: u32,
    pub round: u32,
    pub seat: usize,
    pub phase_before: usize,
    pub action: AutoAction,
    #[serde(default)]
    pub action_detail: Option<String>,
    pub phase_after: usize,
    pub hand_after: usize,
    pub score_after: u32,
    pub event_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSummary {
    pub seat: usize,
    pub name: String,
    /// 1..=10, or 11 once finished.
    pub phase: usize,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub steps: u32,
    pub rounds: u32,
    pub wall_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayResult {
    pub status: RunStatus,
    pub seed: u64,
    #[serde(default)]
    pub winner: Option<usize>,
    pub players: Vec<PlayerSummary>,
    pub steps: Vec<StepRecord>,
    pub summary: SummaryStats,
}

impl AutoplayResult {
    pub fn to_text_report(&self) -> String {
        let winner = self
            .winner
            .and_then(|seat| self.players.get(seat))
            .map_or_else(|| "none".to_string(), |player| player.name.clone());
        let mut lines = vec![
            format!("status: {}", run_status_label(&self.status)),
            format!("seed: {}", self.seed),
            format!("winner: {winner}"),
            format!(
                "summary: steps={} rounds={} wall_ms={}",
                self.summary.steps, self.summary.rounds, self.summary.wall_time_ms
            ),
            String::new(),
            "players:".to_string(),
        ];
        for player in &self.players {
            lines.push(format!(
                "  seat {:>1} {:<8} phase={:<2} score={}",
                player.seat,
                player.name,
                phase_label(player.phase),
                player.score
            ));
        }
        lines.push(String::new());
        lines.push("steps:".to_string());
        for step in &self.steps {
            lines.push(format!(
                "  step {:>5} | round {:>2} | seat {} | {}",
                step.step,
                step.round,
                step.seat,
                step.action.short_label()
            ));
            if step.phase_after != step.phase_before {
                lines.push(format!(
                    "    phase: {} -> {}",
                    phase_label(step.phase_before),
                    phase_label(step.phase_after)
                ));
            }
            lines.push(format!(
                "    hand={} score={} events={}",
                step.hand_after, step.score_after, step.event_count
            ));
            if let Some(detail) = step.action_detail.as_ref() {
                push_block(&mut lines, "detail", detail);
            }
        }
        lines.join("\n")
    }
}

fn push_block(lines: &mut Vec<String>, label: &str, text: &str) {
    for row in text.lines() {
        lines.push(format!("    {label}: {row}"));
    }
}

fn phase_label(ordinal: usize) -> String {
    if ordinal > phaseten_core::PHASE_COUNT {
        "done".to_string()
    } else {
        ordinal.to_string()
    }
}

fn run_status_label(status: &RunStatus) -> &'static str {
    match status {
        RunStatus::Winner => "Winner",
        RunStatus::MaxSteps => "MaxSteps",
        RunStatus::NoLegalAction => "NoLegalAction",
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}
