//! CLI Uno example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use unors::{COLORS, Color, Effect, Game, GameOptions, GameState, PlayerId, TurnError};

#[derive(Parser, Debug)]
#[command(about = "Play Uno at the terminal, passing the keyboard between players")]
struct Args {
    /// Player names, in turn order
    #[arg(default_values_t = [String::from("Player 1")])]
    players: Vec<String>,

    /// Cards dealt to each player
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// End the game when a player empties their hand
    #[arg(short, long, default_value_t = false)]
    win: bool,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_hand_size(args.hand_size)
        .with_win_on_empty_hand(args.win);
    let game = Game::new(options, seed);

    for name in &args.players {
        if let Err(err) = game.join(name.as_str()) {
            println!("Join error: {err}");
            return;
        }
    }
    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    println!("Uno CLI example (type 'q' to quit)");

    while game.state() == GameState::InProgress {
        let name = game.current_player_name().unwrap_or_default();
        println!("\nPlaying as {name}:");
        print_table(&game);

        match game.draw_until_playable() {
            Ok(drawn) if !drawn.is_empty() => {
                for card in drawn {
                    println!("You are forced to draw a card: {card}");
                }
                print_table(&game);
            }
            Ok(_) => {}
            Err(err) => {
                println!("Game over: {err}");
                break;
            }
        }

        loop {
            let Some(index) =
                prompt_usize("Please enter the number of the card you wish to play: ")
            else {
                println!("Goodbye.");
                return;
            };

            let needs_color = game
                .current_player()
                .and_then(|id| game.hand(id))
                .and_then(|hand| hand.cards().get(index).copied())
                .is_some_and(|card| card.color == Color::Wild);
            let color = if needs_color {
                let Some(color) = prompt_color() else {
                    println!("Goodbye.");
                    return;
                };
                Some(color)
            } else {
                None
            };

            match game.play_turn(index, color) {
                Ok(result) => {
                    describe_effect(&game, result.effect, result.penalized);
                    if let Some(winner) = result.winner {
                        let name = game.player_name(winner).unwrap_or_default();
                        println!("{name} has no cards left and wins!");
                    }
                    break;
                }
                Err(TurnError::IllegalMove(err)) => println!("{err}, try again."),
                Err(err) => {
                    println!("Game over: {err}");
                    return;
                }
            }
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}

fn print_table(game: &Game) {
    if let Some(top) = game.top_card() {
        println!("Top card: {top}");
    }
    println!("Deck: {} cards remaining", game.cards_remaining());
    print!("{}", game.render_current_hand().unwrap_or_default());
}

fn describe_effect(game: &Game, effect: Effect, penalized: Option<PlayerId>) {
    let victim = penalized
        .and_then(|id| game.player_name(id))
        .unwrap_or_default();
    match effect {
        Effect::None => {}
        Effect::Skip => println!("The next player is skipped."),
        Effect::Reverse => println!("Play order reversed."),
        Effect::DrawTwo => println!("{victim} draws two cards."),
        Effect::DrawFour => println!("{victim} draws four cards."),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => return String::from("q"),
        Ok(_) => {}
        Err(_) => return String::new(),
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_color() -> Option<Color> {
    loop {
        let code = prompt_usize(
            "Please enter the color you wish to switch to ((1-4), [Blue, Green, Red, Yellow]): ",
        )?;
        match code.checked_sub(1).and_then(|i| COLORS.get(i)) {
            Some(&color) => return Some(color),
            None => println!("Please enter a number from 1 to 4."),
        }
    }
}
