use phaseten_core::{Card, CardColor, Deck, EventBus, Game, GameConfig, Phase, PhaseProgress};

fn c(value: u8, color: CardColor) -> Card {
    Card::new(phaseten_core::Face::from_ordinal(value - 1).expect("face"), color)
}

fn run(values: std::ops::RangeInclusive<u8>) -> Vec<Card> {
    let colors = [CardColor::Green, CardColor::Red, CardColor::Blue, CardColor::Orange];
    values
        .enumerate()
        .map(|(idx, value)| c(value, colors[idx % colors.len()]))
        .collect()
}

fn set(value: u8, len: usize) -> Vec<Card> {
    let colors = [CardColor::Green, CardColor::Red, CardColor::Orange, CardColor::Blue];
    (0..len).map(|idx| c(value, colors[idx % colors.len()])).collect()
}

fn canonical_submission(ordinal: usize) -> Vec<Vec<Card>> {
    match ordinal {
        1 => vec![set(3, 3), set(4, 3)],
        2 => vec![set(3, 3), run(1..=4)],
        3 => vec![set(3, 4), run(1..=4)],
        4 => vec![run(1..=7)],
        5 => vec![run(1..=8)],
        6 => vec![run(1..=9)],
        7 => vec![set(3, 4), set(4, 4)],
        8 => vec![(1..=7).map(|v| c(v, CardColor::Green)).collect()],
        9 => vec![set(3, 5), set(4, 2)],
        10 => vec![set(3, 5), set(4, 3)],
        _ => Vec::new(),
    }
}

fn config() -> GameConfig {
    GameConfig {
        flip_initial_discard: false,
        ..GameConfig::default()
    }
}

/// Deck laid out so that each round deals the next canonical meld, padded with Wilds.
fn rigged_deck(hand_size: usize) -> Deck {
    let mut cards = Vec::new();
    for ordinal in 1..=10 {
        let mut hand: Vec<Card> = canonical_submission(ordinal).into_iter().flatten().collect();
        assert!(hand.len() <= hand_size);
        hand.resize(hand_size, Card::wild());
        cards.extend(hand);
    }
    Deck::from_cards(cards)
}

#[test]
fn every_canonical_meld_clears_its_phase() {
    for phase in Phase::all() {
        assert!(
            phase.is_cleared_by(&canonical_submission(phase.ordinal())),
            "phase {} rejected its canonical meld",
            phase.ordinal()
        );
    }
}

#[test]
fn validate_walks_all_ten_phases() {
    let config = config();
    let mut events = EventBus::default();
    let mut game = Game::with_deck(config.clone(), rigged_deck(config.hand_size));
    let seat = game.add_player("ada", &mut events).expect("seat");
    game.deal_round(&mut events);

    for ordinal in 1..=10 {
        assert_eq!(game.players()[seat].progress.ordinal(), ordinal);
        let groups = canonical_submission(ordinal);
        assert!(game.validate_phase(seat, &groups, &mut events).expect("held"));
        assert_eq!(game.players()[seat].progress.ordinal(), ordinal + 1);
        if ordinal < 10 {
            assert!(game.winner().is_none());
            game.begin_new_round(&mut events);
        }
    }

    assert_eq!(game.players()[seat].progress, PhaseProgress::Finished);
    assert_eq!(game.winner(), Some(seat));
    assert!(game.requirement_text(seat).is_none());
}

#[test]
fn phase_seven_needs_two_distinct_faces() {
    let phase = Phase::from_ordinal(7).expect("phase seven");
    let same_face = vec![set(3, 4), set(3, 4)];
    assert!(!phase.is_cleared_by(&same_face));
}

#[test]
fn two_requirement_phase_checks_both_groups() {
    let phase = Phase::from_ordinal(2).expect("phase two");
    assert!(!phase.is_cleared_by(&[set(3, 3), run(1..=3)]));
    assert!(!phase.is_cleared_by(&[set(3, 2), run(1..=4)]));
    assert!(!phase.is_cleared_by(&[set(3, 3)]));
    // Groups are matched by position.
    assert!(!phase.is_cleared_by(&[run(1..=4), set(3, 3)]));
}

#[test]
fn composite_phase_uses_union_of_groups() {
    let phase = Phase::first();
    let mut all = set(3, 3);
    all.extend(set(4, 3));
    assert!(phase.is_cleared_by(&[all]));
    assert!(phase.is_cleared_by(&[set(3, 2), {
        let mut rest = set(3, 1);
        rest.extend(set(4, 3));
        rest
    }]));
}
