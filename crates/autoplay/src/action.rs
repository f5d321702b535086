use phaseten_core::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    DrawDeck,
    PickupDiscard,
    LayDown { groups: Vec<Vec<Card>> },
    Discard { card: Card },
    NewRound,
}

impl AutoAction {
    pub fn short_label(&self) -> String {
        match self {
            Self::DrawDeck => "draw".to_string(),
            Self::PickupDiscard => "take discard".to_string(),
            Self::LayDown { groups } => {
                let cards: usize = groups.iter().map(Vec::len).sum();
                format!("lay down {cards} cards")
            }
            Self::Discard { card } => format!("discard {card}"),
            Self::NewRound => "new round".to_string(),
        }
    }
}
