use crate::{choose_discard, plan_melds, wants_discard, AutoAction, AutoplayConfig, AutoplayError};
use phaseten_core::{Card, Event, EventBus, Game, GameConfig};
use tracing::{debug, info};

/// One seeded game plus the per-round bookkeeping the policy needs.
#[derive(Debug)]
pub struct Simulator {
    pub game: Game,
    pub events: EventBus,
    laid_down: Vec<bool>,
    /// Turns left in the round once somebody has laid down.
    turns_left: Option<usize>,
}

impl Simulator {
    pub fn new(game_config: GameConfig, config: &AutoplayConfig) -> Result<Self, AutoplayError> {
        let mut events = EventBus::default();
        let mut game = Game::new(game_config, config.seed);
        for seat in 0..config.players {
            game.add_player(format!("p{seat}"), &mut events)?;
        }
        game.deal_round(&mut events);
        events.drain().for_each(drop);
        Ok(Self::from_game(game))
    }

    /// Picks up an existing game mid-round, e.g. one restored from a snapshot.
    pub fn from_game(game: Game) -> Self {
        let seats = game.players().len();
        Self {
            game,
            events: EventBus::default(),
            laid_down: vec![false; seats],
            turns_left: None,
        }
    }

    pub fn round_finished(&self) -> bool {
        self.game.round_over() || self.turns_left == Some(0)
    }

    /// The policy's choice for the current state. `None` when nothing can move.
    pub fn next_action(&self) -> Option<AutoAction> {
        if self.game.is_over() {
            return None;
        }
        if self.round_finished() {
            return Some(AutoAction::NewRound);
        }
        let seat = self.game.current_seat()?;
        let player = self.game.player(seat)?;
        let phase = player.phase();

        let Some(picked) = self.game.turn().pickup() else {
            if let Some(top) = self.game.top_discard() {
                if wants_discard(phase, &player.hand, top) {
                    return Some(AutoAction::PickupDiscard);
                }
            }
            if !self.game.deck().is_empty() || self.game.discard_pile().len() > 1 {
                return Some(AutoAction::DrawDeck);
            }
            return self.game.top_discard().map(|_| AutoAction::PickupDiscard);
        };

        if !self.laid_down.get(seat).copied().unwrap_or(true) {
            if let Some(groups) = phase.and_then(|phase| plan_melds(phase, &player.hand)) {
                return Some(AutoAction::LayDown { groups });
            }
        }
        choose_discard(self.game.config(), phase, &player.hand, Some(picked))
            .map(|card| AutoAction::Discard { card })
    }

    /// Applies `action` for the current seat and returns how many events it raised.
    pub fn apply_action(&mut self, action: &AutoAction) -> Result<usize, AutoplayError> {
        let seat = self.game.turn_index();
        match action {
            AutoAction::DrawDeck => {
                self.game
                    .draw_from_deck(seat, &mut self.events)?
                    .ok_or_else(|| AutoplayError::InvalidAction("no card to draw".to_string()))?;
            }
            AutoAction::PickupDiscard => {
                self.game
                    .pickup_from_discard(seat, &mut self.events)?
                    .ok_or_else(|| AutoplayError::InvalidAction("discard pile empty".to_string()))?;
            }
            AutoAction::LayDown { groups } => {
                if !self.game.validate_phase(seat, groups, &mut self.events)? {
                    return Err(AutoplayError::InvalidAction("meld rejected".to_string()));
                }
                if let Some(flag) = self.laid_down.get_mut(seat) {
                    *flag = true;
                }
                if self.turns_left.is_none() {
                    debug!(seat, "first lay-down of the round");
                    self.turns_left = Some(self.game.players().len());
                }
            }
            AutoAction::Discard { card } => {
                self.game.discard(seat, *card, &mut self.events)?;
            }
            AutoAction::NewRound => {
                self.game.begin_new_round(&mut self.events);
                self.laid_down.iter_mut().for_each(|flag| *flag = false);
                self.turns_left = None;
                info!(round = self.game.round(), "autoplay round started");
            }
        }
        let mut event_count = 0;
        for event in self.events.drain() {
            event_count += 1;
            if let Event::TurnCompleted { .. } = event {
                if let Some(left) = self.turns_left.as_mut() {
                    *left = left.saturating_sub(1);
                }
            }
        }
        Ok(event_count)
    }

    pub fn describe_action(&self, action: &AutoAction) -> Option<String> {
        let seat = self.game.turn_index();
        match action {
            AutoAction::PickupDiscard => {
                let top = self.game.top_discard()?;
                Some(format!("take {top} from the discard pile"))
            }
            AutoAction::LayDown { groups } => {
                let requirement = self.game.requirement_text(seat)?;
                let groups = groups
                    .iter()
                    .map(|group| format_cards(group))
                    .collect::<Vec<_>>()
                    .join(" + ");
                Some(format!("{requirement}\nmeld: {groups}"))
            }
            AutoAction::Discard { card } => {
                let hand = self.game.hand(seat)?;
                Some(format!("hand: {}\nthrow: {card}", format_cards(hand)))
            }
            AutoAction::NewRound => {
                let held = self
                    .game
                    .players()
                    .iter()
                    .map(|player| format!("{}={}", player.name, player.held_count()))
                    .collect::<Vec<_>>()
                    .join(" ");
                Some(format!("cards left: {held}"))
            }
            AutoAction::DrawDeck => None,
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    let cards = cards.iter().map(Card::to_string).collect::<Vec<_>>();
    format!("[{}]", cards.join(", "))
}
