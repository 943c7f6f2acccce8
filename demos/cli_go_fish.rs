//! CLI Go Fish example.
//!
//! Set `RUST_LOG=gofish=debug` to see the engine's diagnostic events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use gofish::{ActorKind, Card, Game, GameOptions, HUMAN_SEAT, PLAYER_COUNT, Rank, player_name};
use tracing_subscriber::EnvFilter;

const RULES: &str = "\
How to play Go Fish:
  - Four players. You are Player 1; Players 2-4 are bots.
  - Everyone is dealt 5 cards; the rest form the deck.
  - On your turn, ask another player for a rank you hold.
    If they have any, they hand over all of them.
    If not, you \"go fish\" and draw a card from the deck.
  - Four cards of one rank make a book, which is set aside and scored.
  - The game ends when every hand and the deck are empty.
    Most books wins; ties share the victory.

Commands:
  ask <player 2-4> <rank>   e.g. `ask 3 q` or `a 2 10`
  pass                      when your hand is empty: go fish for one card
  new                       start a new game
  help                      show this text
  quit                      leave";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Go Fish CLI example (type 'help' for rules, 'q' to quit)");

    let mut game = Game::new(GameOptions::default(), seed());
    let mut shown = 0;

    loop {
        shown = print_new_log(&game, shown);

        if game.is_game_over() {
            print_scores(&game);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.restart(seed());
                    shown = 0;
                    continue;
                }
                _ => break,
            }
        }

        if game.current_turn() != HUMAN_SEAT {
            if let Err(err) = game.bot_turn() {
                println!("Bot error: {err}");
            }
            continue;
        }

        print_table(&game);
        let input = prompt_line("> ");
        let words: Vec<&str> = input.split_whitespace().collect();

        let result = match words.as_slice() {
            ["a" | "ask", seat, rank] => {
                let Some(target) = parse_seat(seat) else {
                    println!("Pick a player between 2 and {PLAYER_COUNT}.");
                    continue;
                };
                let Ok(rank) = rank.parse::<Rank>() else {
                    println!("Unknown rank. Use 2-10, J, Q, K or A.");
                    continue;
                };
                if !game.players()[HUMAN_SEAT].hand().has_rank(rank) {
                    println!("You can only ask for a rank you hold.");
                    continue;
                }
                game.human_request(target, rank).map(|_| ())
            }
            ["p" | "pass"] => game.pass().map(|_| ()),
            ["n" | "new"] => {
                game.restart(seed());
                shown = 0;
                println!("New game dealt.");
                continue;
            }
            ["h" | "help"] => {
                println!("{RULES}");
                continue;
            }
            ["q" | "quit"] => return,
            _ => {
                println!("Unknown command. Type 'help'.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn parse_seat(input: &str) -> Option<usize> {
    let seat = input.parse::<usize>().ok()?.checked_sub(1)?;
    (seat != HUMAN_SEAT && seat < PLAYER_COUNT).then_some(seat)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "quit".to_string();
    }
    input.trim().to_lowercase()
}

fn print_new_log(game: &Game, shown: usize) -> usize {
    for entry in game.log().entries().iter().skip(shown) {
        let tag = match entry.actor {
            ActorKind::Human => colorize("you", "36"),
            ActorKind::Bot => colorize("bot", "33"),
            ActorKind::System => colorize("===", "35"),
        };
        println!("[{tag}] {}", entry.message);
    }
    game.log().len()
}

fn print_table(game: &Game) {
    println!(
        "\nDeck: {} cards | Books: {}",
        game.cards_remaining(),
        format_books(game)
    );

    for (seat, player) in game.players().iter().enumerate().skip(1) {
        println!("  {}: {} cards", player_name(seat), player.hand().len());
    }

    let hand = game.players()[HUMAN_SEAT].hand();
    if hand.is_empty() {
        println!("Your hand: (empty) - type 'pass' to go fish");
    } else {
        let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
        println!("Your hand: {}", cards.join(" "));
    }
}

fn print_scores(game: &Game) {
    let Some(scores) = game.final_scores() else {
        return;
    };

    println!("\nFinal scores:");
    for (seat, books) in scores.book_counts.iter().enumerate() {
        let marker = if scores.is_winner(seat) { "*" } else { " " };
        println!("{marker} {}: {books} books", player_name(seat));
    }
    if scores.is_winner(HUMAN_SEAT) {
        println!("{}", colorize("You win!", "32"));
    }
}

fn format_books(game: &Game) -> String {
    game.book_counts()
        .iter()
        .enumerate()
        .map(|(seat, books)| format!("P{} {books}", seat + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "37" };
    colorize(&card.to_string(), code)
}
