use crate::{
    AutoplayConfig, AutoplayError, AutoplayResult, PlayerSummary, RunStatus, Simulator,
    StepRecord, SummaryStats,
};
use phaseten_core::GameConfig;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Plays a fresh seeded game until someone clears phase ten or the step budget runs out.
pub fn run_autoplay(
    game_config: GameConfig,
    config: &AutoplayConfig,
) -> Result<AutoplayResult, AutoplayError> {
    let mut sim = Simulator::new(game_config, config)?;
    run_simulator(&mut sim, config)
}

/// Drives `sim` in place so the caller can inspect or save the final game.
pub fn run_simulator(
    sim: &mut Simulator,
    config: &AutoplayConfig,
) -> Result<AutoplayResult, AutoplayError> {
    let started_at = Instant::now();
    let mut records: Vec<StepRecord> = Vec::new();
    let mut status = None;

    for step in 0..config.max_steps {
        if sim.game.is_over() {
            status = Some(RunStatus::Winner);
            break;
        }
        let Some(action) = sim.next_action() else {
            warn!(step, "no legal action");
            status = Some(RunStatus::NoLegalAction);
            break;
        };

        let seat = sim.game.turn_index();
        let round = sim.game.round();
        let phase_before = phase_of(sim, seat);
        let action_detail = sim.describe_action(&action);
        let event_count = match sim.apply_action(&action) {
            Ok(count) => count,
            Err(AutoplayError::InvalidAction(reason)) => {
                warn!(step, seat, %reason, "action refused");
                status = Some(RunStatus::NoLegalAction);
                break;
            }
            Err(err) => return Err(err),
        };
        debug!(step, seat, action = %action.short_label(), "applied");
        records.push(StepRecord {
            step,
            round,
            seat,
            phase_before,
            action,
            action_detail,
            phase_after: phase_of(sim, seat),
            hand_after: sim.game.hand(seat).map_or(0, <[_]>::len),
            score_after: sim.game.score(seat),
            event_count,
        });
    }

    if status.is_none() && sim.game.is_over() {
        status = Some(RunStatus::Winner);
    }
    let status = status.unwrap_or(RunStatus::MaxSteps);
    let winner = sim.game.winner();
    info!(?status, ?winner, steps = records.len(), "autoplay finished");

    let players = sim
        .game
        .players()
        .iter()
        .map(|player| PlayerSummary {
            seat: player.seat,
            name: player.name.clone(),
            phase: player.progress.ordinal(),
            score: sim.game.score(player.seat),
        })
        .collect();
    Ok(AutoplayResult {
        status,
        seed: config.seed,
        winner,
        players,
        summary: SummaryStats {
            steps: records.len() as u32,
            rounds: sim.game.round(),
            wall_time_ms: started_at.elapsed().as_millis() as u64,
        },
        steps: records,
    })
}

fn phase_of(sim: &Simulator, seat: usize) -> usize {
    sim.game
        .player(seat)
        .map_or(0, |player| player.progress.ordinal())
}
