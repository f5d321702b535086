use super::*;
use tracing::info;

impl Game {
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        events: &mut EventBus,
    ) -> Result<usize, GameError> {
        let max = self.config.max_players;
        if self.players.len() >= max {
            info!(max, "roster full, player rejected");
            return Err(GameError::RosterFull { max });
        }
        let seat = self.players.len();
        let player = Player::new(name, seat);
        info!(seat, name = %player.name, "player joined");
        events.push(Event::PlayerJoined {
            seat,
            name: player.name.clone(),
        });
        self.players.push(player);
        Ok(seat)
    }

    pub fn deal_round(&mut self, events: &mut EventBus) -> usize {
        let mut dealt = 0;
        for seat in 0..self.players.len() {
            dealt += self.deal_to(seat, events);
        }
        dealt
    }

    /// Fills an empty hand from the front of the deck. A seat that already
    /// holds cards, or has finished, is left alone.
    pub fn begin_round_for_player(
        &mut self,
        seat: usize,
        events: &mut EventBus,
    ) -> Result<usize, GameError> {
        self.check_seat(seat)?;
        Ok(self.deal_to(seat, events))
    }

    fn deal_to(&mut self, seat: usize, events: &mut EventBus) -> usize {
        let Some(player) = self.players.get(seat) else {
            return 0;
        };
        if player.held_count() > 0 || player.is_finished() {
            return 0;
        }
        let needed = self.config.hand_size;
        if self.deck.len() < needed {
            self.replenish_deck(events);
        }
        let mut cards = self.deck.draw_cards(needed);
        let count = cards.len();
        if let Some(player) = self.players.get_mut(seat) {
            player.hand.append(&mut cards);
        }
        if count > 0 {
            debug!(seat, count, "dealt hand");
            events.push(Event::CardsDealt { seat, count });
        }
        count
    }

    /// Scores every hand still held, returns those cards to the discard pile and
    /// deals again. The winner is neither scored nor dealt back in.
    pub fn begin_new_round(&mut self, events: &mut EventBus) {
        for seat in 0..self.players.len() {
            let held = self.players[seat].drain_held();
            if self.winner != Some(seat) {
                let points = self.config.hand_penalty(&held);
                let total = {
                    let entry = self.scores.entry(seat).or_insert(0);
                    *entry += points;
                    *entry
                };
                debug!(seat, points, total, "scored hand");
                events.push(Event::RoundScored {
                    seat,
                    points,
                    total,
                });
            }
            self.discard_pile.extend(held);
        }
        self.round += 1;
        self.turn.reset();
        info!(round = self.round, "new round");
        events.push(Event::RoundStarted { round: self.round });
        self.deal_round(events);
    }
}
