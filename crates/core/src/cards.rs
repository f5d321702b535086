use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SPECIAL_CARD_VALUE: u32 = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Skip,
    Wild,
}

impl Face {
    pub const ALL: [Face; 14] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Eleven,
        Face::Twelve,
        Face::Skip,
        Face::Wild,
    ];

    pub const NUMERIC: [Face; 12] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Eleven,
        Face::Twelve,
    ];

    /// Zero-based position in the catalog; this is the number used in card descriptors.
    pub fn ordinal(self) -> u8 {
        match self {
            Face::One => 0,
            Face::Two => 1,
            Face::Three => 2,
            Face::Four => 3,
            Face::Five => 4,
            Face::Six => 5,
            Face::Seven => 6,
            Face::Eight => 7,
            Face::Nine => 8,
            Face::Ten => 9,
            Face::Eleven => 10,
            Face::Twelve => 11,
            Face::Skip => 12,
            Face::Wild => 13,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Face> {
        Face::ALL.get(ordinal as usize).copied()
    }

    pub fn value(self) -> u32 {
        if self.is_numeric() {
            u32::from(self.ordinal()) + 1
        } else {
            SPECIAL_CARD_VALUE
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Face::Skip | Face::Wild)
    }

    pub fn label(self) -> String {
        match self {
            Face::Skip => "Skip".to_string(),
            Face::Wild => "Wild".to_string(),
            other => other.value().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Orange,
    Black,
}

impl CardColor {
    pub const PLAYABLE: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Orange,
        CardColor::Green,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Orange => "orange",
            CardColor::Black => "black",
        }
    }

    pub fn from_name(name: &str) -> Option<CardColor> {
        match name {
            "red" => Some(CardColor::Red),
            "blue" => Some(CardColor::Blue),
            "green" => Some(CardColor::Green),
            "orange" => Some(CardColor::Orange),
            "black" => Some(CardColor::Black),
            _ => None,
        }
    }

    pub fn is_placeholder(self) -> bool {
        self == CardColor::Black
    }
}

/// A single card. Two cards are equal when face and color match; the deck holds
/// indistinguishable copies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub face: Face,
    pub color: CardColor,
}

impl Card {
    pub fn new(face: Face, color: CardColor) -> Self {
        let color = if face.is_numeric() {
            color
        } else {
            CardColor::Black
        };
        Self { face, color }
    }

    pub fn wild() -> Self {
        Self::new(Face::Wild, CardColor::Black)
    }

    pub fn skip() -> Self {
        Self::new(Face::Skip, CardColor::Black)
    }

    pub fn value(&self) -> u32 {
        self.face.value()
    }

    pub fn is_numeric(&self) -> bool {
        self.face.is_numeric()
    }

    pub fn descriptor(&self) -> String {
        format!("{} {}", self.color.name(), self.face.ordinal())
    }

    pub fn from_descriptor(desc: &str) -> Option<Card> {
        desc.parse().ok()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_numeric() {
            write!(f, "{} {}", self.color.name(), self.face.label())
        } else {
            f.write_str(&self.face.label())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("descriptor must have two fields, got {0:?}")]
    Shape(String),
    #[error("unknown color {0:?}")]
    Color(String),
    #[error("invalid face ordinal {0:?}")]
    Face(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [color, face] = parts.as_slice() else {
            return Err(CardParseError::Shape(s.to_string()));
        };
        let color =
            CardColor::from_name(color).ok_or_else(|| CardParseError::Color(color.to_string()))?;
        let face = face
            .parse::<u8>()
            .ok()
            .and_then(Face::from_ordinal)
            .ok_or_else(|| CardParseError::Face(face.to_string()))?;
        Ok(Card::new(face, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_value_is_face_plus_one() {
        assert_eq!(Face::One.value(), 1);
        assert_eq!(Face::Twelve.value(), 12);
        assert_eq!(Face::Skip.value(), 20);
        assert_eq!(Face::Wild.value(), 20);
    }

    #[test]
    fn specials_force_placeholder_color() {
        let card = Card::new(Face::Wild, CardColor::Red);
        assert_eq!(card.color, CardColor::Black);
        assert_eq!(card, Card::wild());
    }

    #[test]
    fn descriptor_parses_back() {
        let card = Card::new(Face::Nine, CardColor::Orange);
        assert_eq!(card.descriptor(), "orange 8");
        assert_eq!(Card::from_descriptor("orange 8"), Some(card));
        assert_eq!(Card::from_descriptor("black 12"), Some(Card::skip()));
    }

    #[test]
    fn malformed_descriptor_is_no_card() {
        assert_eq!(Card::from_descriptor(""), None);
        assert_eq!(Card::from_descriptor("purple 3"), None);
        assert_eq!(Card::from_descriptor("red 14"), None);
        assert_eq!(Card::from_descriptor("red three"), None);
        assert!(matches!(
            "hand red 3".parse::<Card>(),
            Err(CardParseError::Shape(_))
        ));
    }
}
