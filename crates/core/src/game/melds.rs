use super::*;
use crate::{PhaseProgress, STAGING_SLOTS};
use tracing::info;

impl Game {
    pub fn stage_card(&mut self, seat: usize, slot: usize, card: Card) -> Result<(), GameError> {
        if slot >= STAGING_SLOTS {
            return Err(GameError::InvalidStagingSlot(slot));
        }
        let player = self.player_mut(seat)?;
        if !player.remove_from_hand(&card) {
            return Err(GameError::CardNotHeld { seat, card });
        }
        player.staging[slot].push(card);
        Ok(())
    }

    pub fn unstage_card(&mut self, seat: usize, slot: usize, card: Card) -> Result<(), GameError> {
        if slot >= STAGING_SLOTS {
            return Err(GameError::InvalidStagingSlot(slot));
        }
        let player = self.player_mut(seat)?;
        let Some(pos) = player.staging[slot].iter().position(|held| *held == card) else {
            return Err(GameError::CardNotHeld { seat, card });
        };
        player.staging[slot].remove(pos);
        player.hand.push(card);
        Ok(())
    }

    pub fn is_phase_cleared(&self, seat: usize, groups: &[Vec<Card>]) -> bool {
        self.players
            .get(seat)
            .and_then(|player| player.phase())
            .map_or(false, |phase| phase.is_cleared_by(groups))
    }

    /// Accepts a meld the seat actually holds. On success the cards go to the
    /// discard pile and the seat moves to its next phase; on rejection nothing
    /// changes.
    pub fn validate_phase(
        &mut self,
        seat: usize,
        groups: &[Vec<Card>],
        events: &mut EventBus,
    ) -> Result<bool, GameError> {
        let player = self.players.get(seat).ok_or(GameError::UnknownSeat(seat))?;
        let submitted: Vec<Card> = groups.iter().flatten().copied().collect();
        if let Some(card) = player.missing_card(&submitted) {
            return Err(GameError::CardNotHeld { seat, card });
        }
        if !self.is_phase_cleared(seat, groups) {
            debug!(seat, "meld rejected");
            return Ok(false);
        }
        let player = self.player_mut(seat)?;
        for card in &submitted {
            player.take_held(card);
        }
        self.discard_pile.extend(submitted);
        self.move_player_to_next_phase(seat, events)?;
        Ok(true)
    }

    pub fn submit_staged(&mut self, seat: usize, events: &mut EventBus) -> Result<bool, GameError> {
        let groups: Vec<Vec<Card>> = self
            .players
            .get(seat)
            .ok_or(GameError::UnknownSeat(seat))?
            .staging
            .to_vec();
        self.validate_phase(seat, &groups, events)
    }

    /// Advances the phase pointer; clearing phase ten finishes the seat and,
    /// if nobody has yet, makes it the winner.
    pub fn move_player_to_next_phase(
        &mut self,
        seat: usize,
        events: &mut EventBus,
    ) -> Result<PhaseProgress, GameError> {
        let player = self.player_mut(seat)?;
        let cleared = match &player.progress {
            PhaseProgress::Active(phase) => phase.clone(),
            PhaseProgress::Finished => return Ok(PhaseProgress::Finished),
        };
        player.progress = match cleared.next() {
            Some(next) => PhaseProgress::Active(next),
            None => PhaseProgress::Finished,
        };
        let progress = player.progress.clone();
        info!(seat, phase = cleared.ordinal(), "phase cleared");
        events.push(Event::PhaseCleared {
            seat,
            phase: cleared.ordinal(),
        });
        if progress.is_finished() {
            events.push(Event::PlayerFinished { seat });
            if self.winner.is_none() {
                info!(seat, "game won");
                self.winner = Some(seat);
            }
        }
        Ok(progress)
    }
}
