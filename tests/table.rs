//! Table integration tests.

#![allow(clippy::float_cmp)]

use std::sync::{Arc, Mutex};

use bjtable::{
    ActionError, BetError, Card, DECK_SIZE, DealError, Hand, NoticeKind, NotifySink, Outcome,
    ReshuffleError, RoundState, RoundingMode, Seat, Shoe, StartError, Step, StepError, Suit, Table,
    TableOptions, ValueOptions, payout, round_signed,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank, 0)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    hand.add(cards.iter().copied());
    hand
}

/// Rigs the shoe so draws come out in the listed order.
fn rig_shoe(table: &Table, draws: &[Card]) {
    let mut cards = draws.to_vec();
    cards.reverse();
    *table.shoe.lock() = Shoe::from(cards);
}

/// Runs the pending chain to completion.
fn drive(table: &Table) {
    while table.is_busy() {
        table.advance().unwrap();
    }
}

/// Opens a table in the betting state with the given chips riding.
fn table_with_bet(options: TableOptions, chips: usize, bet: usize) -> Table {
    let table = Table::new(options, 1);
    table.buy_in(chips);
    table.start_round().unwrap();
    table.add_bet(bet).unwrap();
    table
}

#[derive(Default)]
struct RecordingSink(Mutex<Vec<(NoticeKind, String)>>);

impl RecordingSink {
    fn messages(&self) -> Vec<(NoticeKind, String)> {
        self.0.lock().unwrap().clone()
    }
}

impl NotifySink for RecordingSink {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.0.lock().unwrap().push((kind, message.to_string()));
    }
}

#[test]
fn hand_values_without_aces() {
    let hand = hand_of(&[card(Suit::Diamonds, 10), card(Suit::Clubs, 13)]);
    assert_eq!(hand.value(), 20);
    assert!(!hand.is_blackjack());
    assert_eq!(hand.display(), "20");
    assert_eq!(hand.value_options(), ValueOptions::Single(20));
}

#[test]
fn ace_and_king_is_blackjack() {
    let hand = hand_of(&[card(Suit::Spades, 1), card(Suit::Hearts, 13)]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_blackjack());
    assert!(hand.is_twenty_one());
    assert_eq!(hand.display(), "blackjack!");
}

#[test]
fn flexible_ace_shows_both_readings() {
    let hand = hand_of(&[card(Suit::Spades, 1), card(Suit::Clubs, 6)]);
    assert_eq!(
        hand.value_options(),
        ValueOptions::Flexible { low: 7, high: 17 }
    );
    assert_eq!(hand.value(), 17);
    assert_eq!(hand.display(), "7/17");
    assert!(hand.can_hit());
}

#[test]
fn multi_ace_hands_stay_correct() {
    let pair = hand_of(&[card(Suit::Spades, 1), card(Suit::Hearts, 1)]);
    assert_eq!(pair.display(), "2/12");
    assert_eq!(pair.value(), 12);

    let three = hand_of(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 9),
    ]);
    assert_eq!(three.value(), 21);
    assert!(!three.is_blackjack());
    assert_eq!(three.display(), "21");

    let aces = hand_of(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Diamonds, 1),
    ]);
    assert_eq!(aces.display(), "3/13");

    let busted = hand_of(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 9),
    ]);
    assert_eq!(busted.value(), 25);
    assert!(busted.is_bust());
}

#[test]
fn split_and_double_eligibility() {
    let pair = hand_of(&[card(Suit::Clubs, 7), card(Suit::Diamonds, 7)]);
    assert!(pair.can_split());
    assert!(pair.can_double_down());

    let mixed = hand_of(&[card(Suit::Clubs, 7), card(Suit::Diamonds, 8)]);
    assert!(!mixed.can_split());

    let natural = hand_of(&[card(Suit::Spades, 1), card(Suit::Hearts, 13)]);
    assert!(!natural.can_double_down());

    let three = hand_of(&[
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 7),
        card(Suit::Hearts, 7),
    ]);
    assert!(!three.can_split());
    assert!(!three.can_double_down());
}

#[test]
fn hit_and_stay_legality_edges() {
    let twenty_one = hand_of(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 5),
        card(Suit::Hearts, 6),
    ]);
    assert!(!twenty_one.can_hit());
    assert!(twenty_one.can_stay());

    let busted = hand_of(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 5),
    ]);
    assert!(!busted.can_hit());
    assert!(!busted.can_stay());

    let single = hand_of(&[card(Suit::Clubs, 10)]);
    assert!(!single.can_hit());
    assert!(!single.can_stay());

    assert_eq!(Hand::new().display(), "");
}

#[test]
fn shoe_builds_counts_and_deck_tags() {
    let mut shoe = Shoe::new();
    shoe.add_decks(8);
    assert_eq!(shoe.len(), 8 * DECK_SIZE);

    for deck in 0..8 {
        let tagged = shoe.cards().iter().filter(|c| c.deck == deck).count();
        assert_eq!(tagged, DECK_SIZE);
    }

    for _ in 0..(8 * DECK_SIZE) {
        assert_eq!(shoe.remove(1).len(), 1);
    }
    assert!(shoe.is_empty());
    assert!(shoe.remove(1).is_empty());

    shoe.add_decks(1);
    assert_eq!(shoe.remove(60).len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation() {
    use rand::SeedableRng;

    let mut shoe = Shoe::new();
    shoe.add_decks(2);
    let before: Vec<String> = shoe.cards().iter().map(Card::key).collect();

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
    shoe.shuffle(&mut rng);
    let after: Vec<String> = shoe.cards().iter().map(Card::key).collect();

    assert_ne!(before, after);

    let mut sorted_before = before;
    let mut sorted_after = after;
    sorted_before.sort();
    sorted_after.sort();
    assert_eq!(sorted_before, sorted_after);
}

#[test]
fn payout_matrix() {
    let bust = hand_of(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 5),
    ]);
    let twenty = hand_of(&[card(Suit::Clubs, 10), card(Suit::Diamonds, 13)]);
    let nineteen = hand_of(&[card(Suit::Clubs, 10), card(Suit::Diamonds, 9)]);
    let natural = hand_of(&[card(Suit::Spades, 1), card(Suit::Hearts, 13)]);
    let three_card_21 = hand_of(&[
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 7),
        card(Suit::Hearts, 7),
    ]);

    // Player bust loses no matter what the dealer holds.
    assert_eq!(payout(100, &bust, &twenty, 1.5), -100.0);
    assert_eq!(payout(100, &bust, &bust, 1.5), -100.0);

    assert_eq!(payout(100, &twenty, &bust, 1.5), 100.0);
    assert_eq!(payout(100, &twenty, &nineteen, 1.5), 100.0);
    assert_eq!(payout(100, &nineteen, &twenty, 1.5), -100.0);

    assert_eq!(payout(100, &natural, &twenty, 1.5), 150.0);
    assert_eq!(payout(100, &twenty, &twenty, 1.5), 0.0);

    // Equal 21s: a natural beats a made 21, naturals push each other.
    assert_eq!(payout(100, &natural, &three_card_21, 1.5), 150.0);
    assert_eq!(payout(100, &three_card_21, &natural, 1.5), -100.0);
    assert_eq!(payout(100, &natural, &natural, 1.5), 0.0);

    // The ratio is a parameter, not a constant.
    assert_eq!(payout(100, &natural, &twenty, 1.2), 120.0);
}

#[test]
fn payout_rounding_modes() {
    assert_eq!(round_signed(7.5, RoundingMode::Down), 7);
    assert_eq!(round_signed(7.5, RoundingMode::Up), 8);
    assert_eq!(round_signed(7.5, RoundingMode::Nearest), 8);
    assert_eq!(round_signed(-100.0, RoundingMode::Down), -100);
}

#[test]
fn round_flow_staggers_cards_and_settles() {
    let options = TableOptions::default()
        .with_deal_pace_ms(7)
        .with_dealer_pace_ms(11)
        .with_settle_display_ms(13);
    let table = table_with_bet(options, 150, 50);
    assert_eq!(table.get_bankroll().total(), 100);
    assert_eq!(table.get_bankroll().current_bet(), Some(50));

    rig_shoe(
        &table,
        &[
            card(Suit::Hearts, 8),    // player
            card(Suit::Clubs, 6),     // dealer
            card(Suit::Diamonds, 7),  // player
            card(Suit::Spades, 10),   // dealer
            card(Suit::Clubs, 5),     // dealer draw
        ],
    );

    table.deal().unwrap();
    assert_eq!(table.state(), RoundState::Dealing);
    assert!(table.is_busy());
    assert_eq!(table.next_delay(), Some(0));

    // One card per step, alternating seats.
    assert_eq!(table.advance().unwrap(), Step::DealCard);
    assert_eq!(table.get_player_hand().len(), 1);
    assert_eq!(table.get_dealer_hand().len(), 0);
    assert_eq!(table.active_seat(), Seat::Dealer);
    assert_eq!(table.next_delay(), Some(7));

    table.advance().unwrap();
    assert_eq!(table.get_dealer_hand().len(), 1);

    table.advance().unwrap();
    assert_eq!(table.get_player_hand().len(), 2);

    table.advance().unwrap();
    assert_eq!(table.get_dealer_hand().len(), 2);
    assert_eq!(table.state(), RoundState::PlayerTurn);
    assert!(!table.is_busy());

    let player = table.get_player_hand();
    assert_eq!(player.value(), 15);
    assert!(player.can_hit());
    assert!(player.can_stay());

    table.stay().unwrap();
    assert_eq!(table.state(), RoundState::DealerTurn);
    assert_eq!(table.next_delay(), Some(11));

    // Dealer sits at 16 and must draw to 21.
    assert_eq!(table.advance().unwrap(), Step::DealerDraw);
    assert_eq!(table.get_dealer_hand().value(), 21);

    assert_eq!(table.advance().unwrap(), Step::DealerDraw);
    assert_eq!(table.state(), RoundState::Settling);
    assert_eq!(table.next_delay(), Some(0));

    assert_eq!(table.advance().unwrap(), Step::Settle);
    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.net, -50);
    assert_eq!(result.player_value, 15);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(table.get_bankroll().total(), 100);
    assert_eq!(table.get_bankroll().current_bet(), None);
    assert_eq!(table.next_delay(), Some(13));

    assert_eq!(table.advance().unwrap(), Step::FinishRound);
    assert_eq!(table.state(), RoundState::Betting);
    assert!(!table.is_busy());
    assert!(table.get_player_hand().is_empty());
    assert!(table.get_dealer_hand().is_empty());
    assert_eq!(table.discard_count(), 5);
}

#[test]
fn dealt_blackjack_skips_player_turn() {
    let sink = Arc::new(RecordingSink::default());
    let table = table_with_bet(TableOptions::default(), 100, 10);
    table.set_sink(Box::new(Arc::clone(&sink)));

    rig_shoe(
        &table,
        &[
            card(Suit::Spades, 1),   // player
            card(Suit::Clubs, 9),    // dealer
            card(Suit::Hearts, 13),  // player
            card(Suit::Diamonds, 7), // dealer
            card(Suit::Clubs, 2),    // dealer draw to 18
        ],
    );

    table.deal().unwrap();
    drive(&table);

    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert!(result.player_blackjack);
    assert_eq!(result.net, 15);
    assert_eq!(table.get_bankroll().total(), 115);
    assert_eq!(table.state(), RoundState::Betting);

    let messages = sink.messages();
    assert_eq!(messages, vec![(NoticeKind::Info, "won +15".to_string())]);
}

#[test]
fn hit_to_bust_ends_round_without_dealer_draws() {
    let table = table_with_bet(TableOptions::default(), 150, 50);

    rig_shoe(
        &table,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 2),    // dealer
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 3),   // dealer
            card(Suit::Diamonds, 13), // player hit, bust
        ],
    );

    table.deal().unwrap();
    drive(&table);
    assert_eq!(table.state(), RoundState::PlayerTurn);

    let drawn = table.hit().unwrap();
    assert_eq!(drawn.rank, 13);
    assert_eq!(table.state(), RoundState::DealerTurn);
    assert!(table.is_busy());

    drive(&table);

    // The dealer never draws into a decided round.
    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.dealer_value, 5);
    assert_eq!(table.get_bankroll().total(), 100);
}

#[test]
fn hit_to_twenty_one_passes_turn_automatically() {
    let table = table_with_bet(TableOptions::default(), 150, 50);

    rig_shoe(
        &table,
        &[
            card(Suit::Hearts, 10), // player
            card(Suit::Clubs, 10),  // dealer
            card(Suit::Diamonds, 5), // player
            card(Suit::Spades, 8),  // dealer
            card(Suit::Hearts, 6),  // player hit to 21
        ],
    );

    table.deal().unwrap();
    drive(&table);

    table.hit().unwrap();
    assert_eq!(table.state(), RoundState::DealerTurn);

    drive(&table);

    // A made 21 wins at even money, no blackjack bonus.
    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert!(!result.player_blackjack);
    assert_eq!(result.net, 50);
    assert_eq!(table.get_bankroll().total(), 200);
}

#[test]
fn busy_table_rejects_player_calls() {
    let table = table_with_bet(TableOptions::default(), 150, 50);

    table.deal().unwrap();
    assert!(table.is_busy());

    assert_eq!(table.add_bet(10).unwrap_err(), BetError::Busy);
    assert_eq!(table.clear_bet().unwrap_err(), BetError::Busy);
    assert_eq!(table.deal().unwrap_err(), DealError::Busy);
    assert_eq!(table.hit().unwrap_err(), ActionError::Busy);
    assert_eq!(table.stay().unwrap_err(), ActionError::Busy);
    assert_eq!(table.start_round().unwrap_err(), StartError::Busy);
    assert_eq!(table.reshuffle().unwrap_err(), ReshuffleError::Busy);
}

#[test]
fn out_of_state_calls_are_rejected() {
    let table = Table::new(TableOptions::default(), 1);
    table.buy_in(100);

    assert_eq!(table.add_bet(10).unwrap_err(), BetError::InvalidState);
    assert_eq!(table.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.advance().unwrap_err(), StepError::NothingPending);

    table.start_round().unwrap();
    assert_eq!(table.start_round().unwrap_err(), StartError::InvalidState);
    assert_eq!(table.add_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(table.deal().unwrap_err(), DealError::NoBet);
    assert_eq!(table.stay().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn bet_increments_are_atomic() {
    let table = Table::new(TableOptions::default(), 1);
    table.buy_in(30);
    table.start_round().unwrap();

    assert_eq!(table.add_bet(50).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(table.get_bankroll().total(), 30);
    assert_eq!(table.get_bankroll().current_bet(), None);

    table.add_bet(20).unwrap();
    assert_eq!(table.add_bet(20).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(table.get_bankroll().total(), 10);
    assert_eq!(table.get_bankroll().current_bet(), Some(20));
}

#[test]
fn clear_bet_restores_any_number_of_increments() {
    let table = Table::new(TableOptions::default(), 1);
    table.buy_in(150);
    table.start_round().unwrap();

    table.add_bet(25).unwrap();
    table.add_bet(25).unwrap();
    assert_eq!(table.get_bankroll().total(), 100);
    assert_eq!(table.get_bankroll().current_bet(), Some(50));

    assert_eq!(table.clear_bet().unwrap(), 50);
    assert_eq!(table.get_bankroll().total(), 150);
    assert_eq!(table.get_bankroll().current_bet(), None);

    table.add_bet(50).unwrap();
    assert_eq!(table.clear_bet().unwrap(), 50);
    assert_eq!(table.get_bankroll().total(), 150);
}

#[test]
fn unimplemented_actions_warn_and_change_nothing() {
    let sink = Arc::new(RecordingSink::default());
    let table = table_with_bet(TableOptions::default(), 150, 50);
    table.set_sink(Box::new(Arc::clone(&sink)));

    rig_shoe(
        &table,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 6),    // dealer
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 10),  // dealer
        ],
    );

    table.deal().unwrap();
    drive(&table);
    assert_eq!(table.state(), RoundState::PlayerTurn);
    assert!(table.get_player_hand().can_split());

    assert_eq!(
        table.double_down().unwrap_err(),
        ActionError::Unimplemented
    );
    assert_eq!(table.split().unwrap_err(), ActionError::Unimplemented);

    assert_eq!(table.state(), RoundState::PlayerTurn);
    assert_eq!(table.get_player_hand().len(), 2);
    assert_eq!(table.get_bankroll().current_bet(), Some(50));

    assert_eq!(
        sink.messages(),
        vec![
            (NoticeKind::Warning, "double down not implemented yet".to_string()),
            (NoticeKind::Warning, "split not implemented yet".to_string()),
        ]
    );

    table.stay().unwrap();
}

#[test]
fn short_shoe_aborts_the_deal() {
    let sink = Arc::new(RecordingSink::default());
    let table = table_with_bet(TableOptions::default(), 150, 50);
    table.set_sink(Box::new(Arc::clone(&sink)));

    rig_shoe(
        &table,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 8),
        ],
    );

    table.deal().unwrap();
    table.advance().unwrap();
    table.advance().unwrap();
    table.advance().unwrap();

    assert_eq!(table.advance().unwrap_err(), StepError::ShoeExhausted);
    assert_eq!(table.state(), RoundState::Idle);
    assert!(!table.is_busy());

    // The bet comes back and no short hand survives.
    assert_eq!(table.get_bankroll().total(), 150);
    assert_eq!(table.get_bankroll().current_bet(), None);
    assert!(table.get_player_hand().is_empty());
    assert!(table.get_dealer_hand().is_empty());
    assert_eq!(table.discard_count(), 3);

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, NoticeKind::Error);

    table.reshuffle().unwrap();
    table.start_round().unwrap();
    assert_eq!(table.state(), RoundState::Betting);
}

#[test]
fn hit_on_empty_shoe_aborts_the_round() {
    let table = table_with_bet(TableOptions::default(), 150, 50);

    rig_shoe(
        &table,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 10),
        ],
    );

    table.deal().unwrap();
    drive(&table);
    assert_eq!(table.state(), RoundState::PlayerTurn);

    assert_eq!(table.hit().unwrap_err(), ActionError::ShoeExhausted);
    assert_eq!(table.state(), RoundState::Idle);
    assert_eq!(table.get_bankroll().total(), 150);
}

#[test]
fn reshuffle_merges_the_discard_pool() {
    let table = table_with_bet(TableOptions::default(), 150, 50);

    rig_shoe(
        &table,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 5),
        ],
    );

    table.deal().unwrap();
    drive(&table);
    table.stay().unwrap();
    drive(&table);

    assert_eq!(table.state(), RoundState::Betting);
    assert_eq!(table.cards_remaining(), 0);
    assert_eq!(table.discard_count(), 5);

    table.reshuffle().unwrap();
    assert_eq!(table.cards_remaining(), 5);
    assert_eq!(table.discard_count(), 0);
}

#[test]
fn reshuffle_rejected_mid_round() {
    let table = table_with_bet(TableOptions::default(), 150, 50);

    table.deal().unwrap();
    drive(&table);

    if table.state() == RoundState::PlayerTurn {
        assert_eq!(
            table.reshuffle().unwrap_err(),
            ReshuffleError::RoundInProgress
        );
    }
}

#[test]
fn penetration_advises_and_explicit_reshuffle_restores() {
    let options = TableOptions::default().with_decks(1).with_penetration(0.5);
    let table = Table::new(options, 1);

    let kept: Vec<Card> = table.shoe.lock().cards()[..10].to_vec();
    let spent: Vec<Card> = table.shoe.lock().cards()[10..].to_vec();
    *table.shoe.lock() = Shoe::from(kept);
    table.discard.lock().extend(spent);

    assert!(table.needs_reshuffle());
    assert!(table.check_and_reshuffle().unwrap());
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert!(!table.needs_reshuffle());
}

#[test]
fn same_seed_builds_the_same_shoe() {
    let a = Table::new(TableOptions::default(), 9);
    let b = Table::new(TableOptions::default(), 9);
    let c = Table::new(TableOptions::default(), 10);

    let keys = |table: &Table| -> Vec<String> {
        table.shoe.lock().cards().iter().map(Card::key).collect()
    };

    assert_eq!(keys(&a), keys(&b));
    assert_ne!(keys(&a), keys(&c));
}
