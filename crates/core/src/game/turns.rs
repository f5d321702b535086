use super::*;
use crate::{PickupSource, TurnAction};

impl Game {
    pub fn discard(
        &mut self,
        seat: usize,
        card: Card,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        let player = self.player_mut(seat)?;
        if !player.remove_from_hand(&card) {
            return Err(GameError::CardNotHeld { seat, card });
        }
        self.discard_pile.push(card);
        debug!(seat, %card, "discarded");
        events.push(Event::CardDiscarded { seat, card });
        self.record_action(seat, TurnAction::Discard(card), events);
        Ok(())
    }

    pub fn pickup_from_discard(
        &mut self,
        seat: usize,
        events: &mut EventBus,
    ) -> Result<Option<Card>, GameError> {
        self.check_seat(seat)?;
        let Some(card) = self.discard_pile.pop() else {
            return Ok(None);
        };
        self.give(seat, card, PickupSource::DiscardPile, events)?;
        Ok(Some(card))
    }

    pub fn draw_from_deck(
        &mut self,
        seat: usize,
        events: &mut EventBus,
    ) -> Result<Option<Card>, GameError> {
        self.check_seat(seat)?;
        if self.deck.is_empty() {
            self.replenish_deck(events);
        }
        let Some(card) = self.deck.draw() else {
            return Ok(None);
        };
        self.give(seat, card, PickupSource::Deck, events)?;
        Ok(Some(card))
    }

    fn give(
        &mut self,
        seat: usize,
        card: Card,
        source: PickupSource,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        self.player_mut(seat)?.hand.push(card);
        debug!(seat, %card, ?source, "picked up");
        events.push(Event::CardPickedUp { seat, card, source });
        self.record_action(seat, TurnAction::Pickup(card), events);
        Ok(())
    }

    fn record_action(&mut self, seat: usize, action: TurnAction, events: &mut EventBus) {
        if seat != self.turn_index || self.players.is_empty() {
            return;
        }
        self.turn.add_action(action);
        if self.turn.is_complete() {
            let next = (self.turn_index + 1) % self.players.len();
            debug!(seat, next, "turn complete");
            events.push(Event::TurnCompleted { seat, next });
            self.turn_index = next;
            self.turn.reset();
        }
    }
}
