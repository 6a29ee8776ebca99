//! Game integration tests.

use unors::{
    Card, Color, DECK_SIZE, DealError, Deck, DeckExhaustedError, DiscardPile, Effect, Game,
    GameOptions, GameState, Hand, IllegalMoveError, JoinError, Symbol, TurnError,
    build_canonical,
};

const fn card(symbol: Symbol, color: Color) -> Card {
    Card::new(symbol, color)
}

fn identity_game(options: GameOptions) -> Game {
    Game::with_deck(options, Deck::from_cards(build_canonical()), 1)
}

/// Deals a game for `hands.len()` players, then replaces every hand, the
/// discard pile and the deck. `pile` and `deck` list cards bottom first.
fn rigged_game(options: GameOptions, hands: &[Vec<Card>], pile: &[Card], deck: &[Card]) -> Game {
    let game = identity_game(options);
    for i in 0..hands.len() {
        game.join(format!("P{i}")).unwrap();
    }
    game.deal().unwrap();

    {
        let mut game_hands = game.hands.lock();
        for (id, cards) in hands.iter().enumerate() {
            game_hands.insert(id as u8, Hand::from_cards(cards.clone()));
        }
    }
    *game.discard.lock() = DiscardPile::from_cards(pile.to_vec());
    *game.deck.lock() = Deck::from_cards(deck.to_vec());
    game
}

fn filler(n: usize) -> Vec<Card> {
    vec![card(Symbol::Eight, Color::Yellow); n]
}

#[test]
fn deal_with_identity_deck() {
    let game = identity_game(GameOptions::default());
    let a = game.join("Alice").unwrap();
    let b = game.join("Bob").unwrap();
    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.current_player(), None);
    assert_eq!(game.top_card(), None);

    game.deal().unwrap();

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 5 - 5 - 1);
    assert_eq!(game.discard_len(), 1);
    assert_eq!(game.hand(a).unwrap().len(), 5);
    assert_eq!(game.hand(b).unwrap().len(), 5);
    assert_eq!(game.current_player(), Some(a));
    assert_eq!(game.current_player_name().as_deref(), Some("Alice"));
    assert_eq!(game.turn_order(), vec![b]);

    // The last canonical card seeds the pile; Alice is dealt before Bob.
    assert_eq!(game.top_card(), Some(card(Symbol::DrawFour, Color::Wild)));
    assert_eq!(
        game.hand(a).unwrap().cards(),
        &[
            card(Symbol::Wild, Color::Wild),
            card(Symbol::DrawFour, Color::Wild),
            card(Symbol::Wild, Color::Wild),
            card(Symbol::DrawFour, Color::Wild),
            card(Symbol::Wild, Color::Wild),
        ]
    );
    assert_eq!(
        game.hand(b).unwrap().cards()[2..],
        [
            card(Symbol::DrawTwo, Color::Yellow),
            card(Symbol::DrawTwo, Color::Yellow),
            card(Symbol::DrawTwo, Color::Red),
        ]
    );
}

#[test]
fn seeded_games_are_reproducible() {
    let deal = |seed| {
        let game = Game::new(GameOptions::default(), seed);
        game.join("A").unwrap();
        game.join("B").unwrap();
        game.deal().unwrap();
        (game.hand(0), game.hand(1), game.top_card())
    };
    assert_eq!(deal(9), deal(9));
}

#[test]
fn join_and_deal_errors() {
    let game = identity_game(GameOptions::default());
    assert_eq!(game.deal().unwrap_err(), DealError::NoPlayers);

    let big = identity_game(GameOptions::default().with_hand_size(60));
    big.join("A").unwrap();
    big.join("B").unwrap();
    assert_eq!(big.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(big.cards_remaining(), DECK_SIZE);
    assert_eq!(big.state(), GameState::WaitingForPlayers);

    game.join("A").unwrap();
    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.join("Late").unwrap_err(), JoinError::InvalidState);
}

#[test]
fn play_before_deal_is_rejected() {
    let game = identity_game(GameOptions::default());
    game.join("A").unwrap();
    assert_eq!(game.play_turn(0, None).unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.draw_until_playable().unwrap_err(), TurnError::InvalidState);
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.render_current_hand(), None);
}

#[test]
fn number_card_advances_turn() {
    let game = rigged_game(
        GameOptions::default(),
        &[
            vec![card(Symbol::Five, Color::Red), card(Symbol::One, Color::Blue)],
            filler(2),
            filler(2),
        ],
        &[card(Symbol::Two, Color::Red)],
        &filler(10),
    );

    let result = game.play_turn(0, None).unwrap();
    assert_eq!(result.player_id, 0);
    assert_eq!(result.effect, Effect::None);
    assert_eq!(result.next_player, 1);
    assert_eq!(game.top_card(), Some(card(Symbol::Five, Color::Red)));
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(game.turn_order(), vec![2, 0]);
    assert_eq!(game.hand(0).unwrap().len(), 1);
    assert_eq!(game.discard_len(), 2);
}

#[test]
fn skip_passes_over_next_player() {
    let game = rigged_game(
        GameOptions::default(),
        &[vec![card(Symbol::Skip, Color::Red)], filler(2), filler(2)],
        &[card(Symbol::Two, Color::Red)],
        &filler(10),
    );

    let result = game.play_turn(0, None).unwrap();
    assert_eq!(result.effect, Effect::Skip);
    assert_eq!(game.current_player(), Some(2));
    assert_eq!(game.turn_order(), vec![0, 1]);
    assert_eq!(game.hand(1).unwrap().len(), 2);
}

#[test]
fn reverse_flips_order_before_advancing() {
    let game = rigged_game(
        GameOptions::default(),
        &[vec![card(Symbol::Reverse, Color::Red)], filler(2), filler(2)],
        &[card(Symbol::Two, Color::Red)],
        &filler(10),
    );

    let result = game.play_turn(0, None).unwrap();
    assert_eq!(result.effect, Effect::Reverse);
    assert_eq!(game.current_player(), Some(2));
    assert_eq!(game.turn_order(), vec![1, 0]);
}

#[test]
fn draw_two_penalizes_next_player_without_skipping() {
    let game = rigged_game(
        GameOptions::default(),
        &[vec![card(Symbol::DrawTwo, Color::Red)], filler(2), filler(2)],
        &[card(Symbol::Two, Color::Red)],
        &filler(10),
    );

    let result = game.play_turn(0, None).unwrap();
    assert_eq!(result.effect, Effect::DrawTwo);
    assert_eq!(result.penalized, Some(1));
    assert_eq!(result.penalty_cards, 2);
    assert_eq!(game.hand(1).unwrap().len(), 4);
    assert_eq!(game.hand(2).unwrap().len(), 2);
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(game.cards_remaining(), 8);
}

#[test]
fn draw_four_with_color_choice() {
    let game = rigged_game(
        GameOptions::default(),
        &[
            vec![card(Symbol::DrawFour, Color::Wild), card(Symbol::One, Color::Blue)],
            filler(2),
        ],
        &[card(Symbol::Two, Color::Red)],
        &filler(10),
    );

    let result = game.play_turn(0, Some(Color::Green)).unwrap();
    assert_eq!(result.effect, Effect::DrawFour);
    assert_eq!(result.card, card(Symbol::DrawFour, Color::Wild));
    assert_eq!(result.chosen_color, Some(Color::Green));
    assert_eq!(game.top_card(), Some(card(Symbol::DrawFour, Color::Green)));
    assert_eq!(game.hand(1).unwrap().len(), 6);
    assert_eq!(game.current_player(), Some(1));
}

#[test]
fn wild_color_drives_next_legality() {
    let game = rigged_game(
        GameOptions::default(),
        &[
            vec![card(Symbol::Wild, Color::Wild), card(Symbol::One, Color::Blue)],
            vec![card(Symbol::Three, Color::Yellow), card(Symbol::Two, Color::Red)],
        ],
        &[card(Symbol::Two, Color::Blue)],
        &filler(10),
    );

    let result = game.play_turn(0, Some(Color::Yellow)).unwrap();
    assert_eq!(result.effect, Effect::None);
    assert_eq!(game.top_card(), Some(card(Symbol::Wild, Color::Yellow)));
    assert_eq!(game.legal_moves(), vec![card(Symbol::Three, Color::Yellow)]);
    assert_eq!(
        game.play_turn(1, None).unwrap_err(),
        TurnError::IllegalMove(IllegalMoveError::NotPlayable(1))
    );
}

#[test]
fn illegal_moves_change_nothing() {
    let game = rigged_game(
        GameOptions::default(),
        &[
            vec![card(Symbol::Three, Color::Green), card(Symbol::Wild, Color::Wild)],
            filler(2),
        ],
        &[card(Symbol::One, Color::Blue), card(Symbol::Two, Color::Red)],
        &filler(3),
    );
    let hand = game.hand(0);
    let pile = game.discard.lock().clone();
    let deck = game.deck.lock().clone();

    assert_eq!(
        game.play_turn(0, None).unwrap_err(),
        TurnError::IllegalMove(IllegalMoveError::NotPlayable(0))
    );
    assert_eq!(
        game.play_turn(7, None).unwrap_err(),
        TurnError::IllegalMove(IllegalMoveError::IndexOutOfRange(7))
    );
    assert_eq!(
        game.play_turn(1, None).unwrap_err(),
        TurnError::IllegalMove(IllegalMoveError::MissingColor)
    );
    assert_eq!(
        game.play_turn(1, Some(Color::Wild)).unwrap_err(),
        TurnError::IllegalMove(IllegalMoveError::InvalidColor)
    );

    assert_eq!(game.hand(0), hand);
    assert_eq!(*game.discard.lock(), pile);
    assert_eq!(*game.deck.lock(), deck);
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn discard_recycles_before_appending() {
    let game = rigged_game(
        GameOptions::default(),
        &[vec![card(Symbol::Five, Color::Red)], filler(2)],
        &[
            card(Symbol::One, Color::Blue),
            card(Symbol::Wild, Color::Green),
            card(Symbol::Two, Color::Red),
        ],
        &[],
    );

    game.play_turn(0, None).unwrap();

    assert_eq!(
        game.discard.lock().cards(),
        &[card(Symbol::Two, Color::Red), card(Symbol::Five, Color::Red)]
    );
    let deck = game.deck.lock();
    assert_eq!(deck.len(), 2);
    assert!(deck.cards().contains(&card(Symbol::One, Color::Blue)));
    assert!(deck.cards().contains(&card(Symbol::Wild, Color::Wild)));
}

#[test]
fn draw_until_playable_stops_at_first_match() {
    let game = rigged_game(
        GameOptions::default(),
        &[vec![card(Symbol::One, Color::Green)], filler(2)],
        &[card(Symbol::Nine, Color::Red)],
        &[
            card(Symbol::Four, Color::Red),
            card(Symbol::Nine, Color::Blue),
            card(Symbol::Two, Color::Blue),
        ],
    );
    assert!(game.legal_moves().is_empty());

    let drawn = game.draw_until_playable().unwrap();
    assert_eq!(
        drawn,
        vec![card(Symbol::Two, Color::Blue), card(Symbol::Nine, Color::Blue)]
    );
    assert_eq!(game.legal_moves(), vec![card(Symbol::Nine, Color::Blue)]);
    assert!(game.draw_until_playable().unwrap().is_empty());
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn exhausted_deck_finishes_the_match() {
    let game = rigged_game(
        GameOptions::default(),
        &[vec![card(Symbol::One, Color::Green)], filler(2)],
        &[card(Symbol::Nine, Color::Red)],
        &[card(Symbol::Two, Color::Blue)],
    );

    assert_eq!(
        game.draw_until_playable().unwrap_err(),
        TurnError::DeckExhausted(DeckExhaustedError)
    );
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.winner(), None);
}

#[test]
fn uncoverable_penalty_finishes_without_playing() {
    let game = rigged_game(
        GameOptions::default(),
        &[vec![card(Symbol::DrawTwo, Color::Red)], filler(2)],
        &[card(Symbol::Two, Color::Red)],
        &[],
    );

    assert_eq!(
        game.play_turn(0, None).unwrap_err(),
        TurnError::DeckExhausted(DeckExhaustedError)
    );
    assert_eq!(game.hand(0).unwrap().len(), 1);
    assert_eq!(game.hand(1).unwrap().len(), 2);
    assert_eq!(game.state(), GameState::Finished);
}

#[test]
fn empty_hand_does_not_end_game_by_default() {
    let game = rigged_game(
        GameOptions::default(),
        &[vec![card(Symbol::Five, Color::Red)], filler(2)],
        &[card(Symbol::Two, Color::Red)],
        &filler(10),
    );

    let result = game.play_turn(0, None).unwrap();
    assert_eq!(result.winner, None);
    assert!(game.hand(0).unwrap().is_empty());
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.current_player(), Some(1));
}

#[test]
fn empty_hand_wins_when_enabled() {
    let game = rigged_game(
        GameOptions::default().with_win_on_empty_hand(true),
        &[vec![card(Symbol::DrawTwo, Color::Red)], filler(2)],
        &[card(Symbol::Two, Color::Red)],
        &filler(10),
    );

    let result = game.play_turn(0, None).unwrap();
    assert_eq!(result.winner, Some(0));
    assert_eq!(result.next_player, 0);
    assert_eq!(game.hand(1).unwrap().len(), 4);
    assert_eq!(game.winner(), Some(0));
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.play_turn(0, None).unwrap_err(), TurnError::InvalidState);
}

#[test]
fn render_current_hand_flags_playable_cards() {
    let game = rigged_game(
        GameOptions::default(),
        &[
            vec![card(Symbol::Two, Color::Blue), card(Symbol::Seven, Color::Red)],
            filler(2),
        ],
        &[card(Symbol::Seven, Color::Green)],
        &filler(2),
    );

    assert_eq!(
        game.render_current_hand().as_deref(),
        Some("0. Blue Two: not possible\n1. Red Seven: possible\n")
    );
}

#[test]
fn reset_returns_to_waiting() {
    let game = Game::new(GameOptions::default(), 5);
    game.join("A").unwrap();
    game.join("B").unwrap();
    game.deal().unwrap();

    game.reset();

    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.discard_len(), 0);
    assert_eq!(game.hand(0), None);
    assert_eq!(game.current_player(), None);
    assert_eq!(game.player_count(), 2);

    game.deal().unwrap();
    assert_eq!(game.hand(1).unwrap().len(), 5);
}

#[test]
fn concurrent_joins_are_all_dealt_or_rejected() {
    use std::sync::Arc;
    use std::thread;

    for seed in 0..50 {
        let game = Arc::new(Game::new(GameOptions::default(), seed));
        game.join("Host").unwrap();

        let joiners: Vec<_> = (0..4)
            .map(|i| {
                let game = Arc::clone(&game);
                thread::spawn(move || game.join(format!("Guest {i}")))
            })
            .collect();
        let dealer = {
            let game = Arc::clone(&game);
            thread::spawn(move || game.deal())
        };

        let joined: Vec<_> = joiners
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        dealer.join().unwrap().unwrap();

        for result in &joined {
            match result {
                Ok(id) => assert_eq!(game.hand(*id).map(|hand| hand.len()), Some(5)),
                Err(err) => assert_eq!(*err, JoinError::InvalidState),
            }
        }
        assert_eq!(game.turn_order().len() + 1, game.player_count());
        assert_eq!(
            game.cards_remaining(),
            DECK_SIZE - 1 - 5 * game.player_count()
        );
    }
}
