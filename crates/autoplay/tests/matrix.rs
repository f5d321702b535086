use phaseten_autoplay::{
    choose_discard, plan_melds, run_autoplay, run_simulator, AutoAction, AutoplayConfig,
    RunStatus, Simulator,
};
use phaseten_core::{Card, CardColor, Deck, EventBus, Face, Game, GameConfig, Phase};

fn card(value: u8, color: char) -> Card {
    let color = match color {
        'r' => CardColor::Red,
        'b' => CardColor::Blue,
        'g' => CardColor::Green,
        'o' => CardColor::Orange,
        _ => CardColor::Black,
    };
    match value {
        0 => Card::wild(),
        13 => Card::skip(),
        v => Card::new(Face::from_ordinal(v - 1).expect("numeric face"), color),
    }
}

fn cards(pairs: &[(u8, char)]) -> Vec<Card> {
    pairs.iter().map(|(value, color)| card(*value, *color)).collect()
}

macro_rules! plan_case {
    ($name:ident, $phase:expr, [$($card:expr),* $(,)?], $expected:expr) => {
        #[test]
        fn $name() {
            let phase = Phase::from_ordinal($phase).expect("phase");
            let hand = cards(&[$($card),*]);
            let plan = plan_melds(&phase, &hand);
            assert_eq!(plan.is_some(), $expected);
            if let Some(groups) = plan {
                assert!(phase.is_cleared_by(&groups));
            }
        }
    };
}

plan_case!(
    plan_two_sets,
    1,
    [(3, 'r'), (9, 'g'), (3, 'b'), (3, 'g'), (4, 'r'), (4, 'b'), (4, 'o'), (0, 'k')],
    true
);
plan_case!(
    plan_two_sets_short,
    1,
    [(3, 'r'), (3, 'b'), (3, 'g'), (4, 'r'), (4, 'b'), (0, 'k'), (0, 'k')],
    false
);
plan_case!(
    plan_set_and_run_sharing_a_face,
    2,
    [(3, 'r'), (3, 'b'), (3, 'g'), (1, 'o'), (2, 'o'), (4, 'o'), (9, 'b')],
    false
);
plan_case!(
    plan_set_and_run,
    2,
    [(3, 'r'), (3, 'b'), (3, 'g'), (3, 'o'), (1, 'o'), (2, 'o'), (4, 'o')],
    true
);
plan_case!(
    plan_run_of_seven,
    4,
    [(5, 'r'), (6, 'b'), (7, 'g'), (8, 'o'), (9, 'r'), (10, 'b'), (11, 'g'), (11, 'r')],
    true
);
plan_case!(
    plan_run_with_gap,
    4,
    [(5, 'r'), (6, 'b'), (7, 'g'), (9, 'o'), (10, 'r'), (11, 'b'), (12, 'g'), (0, 'k')],
    false
);
plan_case!(
    plan_seven_of_color,
    8,
    [(1, 'b'), (3, 'b'), (3, 'b'), (6, 'b'), (8, 'b'), (10, 'b'), (12, 'b'), (2, 'r')],
    true
);
plan_case!(
    plan_set_of_five_and_pair,
    9,
    [(7, 'r'), (7, 'b'), (7, 'g'), (7, 'o'), (7, 'r'), (2, 'b'), (2, 'g'), (13, 'k')],
    true
);

#[test]
fn discard_prefers_dead_weight() {
    let config = GameConfig::default();
    let phase = Phase::first();
    let hand = cards(&[(3, 'r'), (3, 'b'), (3, 'g'), (4, 'r'), (4, 'b'), (12, 'o'), (0, 'k')]);
    assert_eq!(
        choose_discard(&config, Some(&phase), &hand, None),
        Some(Card::wild())
    );
    let without_wild = &hand[..6];
    assert_eq!(
        choose_discard(&config, Some(&phase), without_wild, None),
        Some(card(12, 'o'))
    );
}

#[test]
fn discard_never_returns_the_picked_card() {
    let config = GameConfig::default();
    let phase = Phase::first();
    let hand = cards(&[(3, 'r'), (3, 'b'), (3, 'g'), (4, 'r'), (4, 'b'), (12, 'o')]);
    let choice = choose_discard(&config, Some(&phase), &hand, Some(card(12, 'o')));
    assert_ne!(choice, Some(card(12, 'o')));
    assert!(choice.is_some());
}

#[test]
fn simulator_lays_down_when_a_meld_is_held() {
    let config = GameConfig {
        flip_initial_discard: false,
        ..GameConfig::default()
    };
    let mut deck = cards(&[
        (3, 'r'),
        (3, 'b'),
        (3, 'g'),
        (4, 'r'),
        (4, 'b'),
        (4, 'o'),
        (9, 'g'),
        (11, 'o'),
        (12, 'r'),
        (13, 'k'),
    ]);
    deck.extend(std::iter::repeat(card(1, 'r')).take(10));
    deck.push(card(6, 'b'));
    let mut events = EventBus::default();
    let mut game = Game::with_deck(config, Deck::from_cards(deck));
    game.add_player("ada", &mut events).expect("seat");
    game.add_player("bo", &mut events).expect("seat");
    game.deal_round(&mut events);

    let mut sim = Simulator::from_game(game);
    assert_eq!(sim.next_action(), Some(AutoAction::DrawDeck));
    sim.apply_action(&AutoAction::DrawDeck).expect("draw");
    let Some(AutoAction::LayDown { groups }) = sim.next_action() else {
        panic!("expected a lay-down");
    };
    sim.apply_action(&AutoAction::LayDown { groups }).expect("lay down");
    assert_eq!(sim.game.players()[0].progress.ordinal(), 2);
    let discard = sim.next_action().expect("discard");
    assert!(matches!(discard, AutoAction::Discard { .. }));
    sim.apply_action(&discard).expect("discard");
    assert_eq!(sim.game.turn_index(), 1);
    assert!(!sim.round_finished());
}

#[test]
fn round_ends_one_rotation_after_first_lay_down() {
    let config = GameConfig {
        flip_initial_discard: false,
        ..GameConfig::default()
    };
    let mut deck = cards(&[
        (3, 'r'),
        (3, 'b'),
        (3, 'g'),
        (4, 'r'),
        (4, 'b'),
        (4, 'o'),
        (9, 'g'),
        (11, 'o'),
        (12, 'r'),
        (13, 'k'),
    ]);
    let filler = [
        (1, 'r'),
        (2, 'b'),
        (5, 'g'),
        (6, 'o'),
        (7, 'r'),
        (8, 'b'),
        (10, 'g'),
        (12, 'o'),
        (11, 'b'),
        (9, 'r'),
    ];
    deck.extend(cards(&filler));
    deck.extend(cards(&filler));
    let mut events = EventBus::default();
    let mut game = Game::with_deck(config, Deck::from_cards(deck));
    game.add_player("ada", &mut events).expect("seat");
    game.add_player("bo", &mut events).expect("seat");
    game.deal_round(&mut events);

    let mut sim = Simulator::from_game(game);
    let mut new_rounds = 0;
    for _ in 0..6 {
        let action = sim.next_action().expect("action");
        if action == AutoAction::NewRound {
            new_rounds += 1;
            break;
        }
        sim.apply_action(&action).expect("apply");
    }
    assert_eq!(new_rounds, 1);
    assert!(sim.round_finished());
}

#[test]
fn same_seed_replays_identically() {
    let config = AutoplayConfig {
        seed: 2024,
        players: 3,
        max_steps: 600,
    };
    let first = run_autoplay(GameConfig::default(), &config).expect("first");
    let second = run_autoplay(GameConfig::default(), &config).expect("second");
    assert_eq!(first.steps, second.steps);
    assert_eq!(first.players, second.players);
    assert_eq!(first.status, second.status);
}

#[test]
fn long_run_makes_progress_and_keeps_every_card() {
    let config = AutoplayConfig {
        seed: 7,
        players: 3,
        max_steps: 4000,
    };
    let mut sim = Simulator::new(GameConfig::default(), &config).expect("sim");
    let result = run_simulator(&mut sim, &config).expect("run");
    assert_eq!(sim.game.total_cards(), 102);
    assert!(matches!(result.status, RunStatus::Winner | RunStatus::MaxSteps));
    assert!(result.steps.len() <= 4000);
    assert!(result.players.iter().any(|player| player.phase > 1));
    if result.status == RunStatus::Winner {
        let winner = result.winner.expect("winner seat");
        assert_eq!(result.players[winner].phase, 11);
    }
    let text = result.to_text_report();
    assert!(text.starts_with("status: "));
}

#[test]
fn too_many_players_is_an_error() {
    let config = AutoplayConfig {
        players: 6,
        ..AutoplayConfig::default()
    };
    assert!(Simulator::new(GameConfig::default(), &config).is_err());
}
