//! CLI blackjack example.
//!
//! Chips are kept in `chips.txt` (or the path in `BJTABLE_CHIPS`). Pass `-v`
//! to log engine events to stderr.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, Chip, FileLedger, Game, GameOptions, GamePhase, Hand, HandScore, RoundResult,
};
use tracing::Level;

fn main() {
    let verbose = std::env::args().any(|arg| arg == "-v");
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let path = std::env::var("BJTABLE_CHIPS").unwrap_or_else(|_| "chips.txt".to_string());
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), FileLedger::new(path), seed);

    loop {
        if !betting(&mut game) {
            break;
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        while game.phase() == GamePhase::PlayerTurn {
            print_table(&game);
            println!("{}", format_actions(&game));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&game);
        if let Some(settlement) = game.settlement() {
            let label = match settlement.result {
                RoundResult::Win => colorize("Win", "32"),
                RoundResult::Lose => colorize("Lose", "31"),
                RoundResult::Push => colorize("Push", "33"),
                RoundResult::None => String::new(),
            };
            println!("{label}: payout {} (net {})", settlement.payout, settlement.net());
        }

        if let Err(err) = game.clear_hand() {
            println!("Clear error: {err}");
        }
    }
}

/// Runs the betting phase. Returns `false` when the player quits.
fn betting(game: &mut Game<FileLedger>) -> bool {
    loop {
        if game.can_reset_chips() {
            println!("You have {} chips.", game.balance());
            match prompt_line("Reset to the starting stack? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Err(err) = game.reset_chips() {
                        println!("Reset error: {err}");
                    }
                }
                _ => {
                    println!("Out of chips. Goodbye.");
                    return false;
                }
            }
        }

        let chips = Chip::ALL
            .iter()
            .filter(|chip| game.can_raise(**chip))
            .map(|chip| format!("[{}]", chip.value()))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "\nChips: {} | Bet: {} | add {chips} [c]lear [d]eal",
            game.balance(),
            game.bet()
        );

        match prompt_line("Bet: ").as_str() {
            "q" | "quit" => return false,
            "c" | "clear" => {
                if let Err(err) = game.clear_bet() {
                    println!("Bet error: {err}");
                }
            }
            "d" | "deal" => {
                if game.can_deal() {
                    return true;
                }
                println!("Place a bet first.");
            }
            input => match input.parse::<usize>() {
                Ok(amount) => {
                    if let Err(err) = game.place_bet_amount(amount) {
                        println!("Bet error: {err}");
                    }
                }
                Err(_) => println!("Unknown command."),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game<FileLedger>) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    let dealer = game
        .visible_dealer_cards()
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    let dealer_value = game
        .visible_dealer_score()
        .map_or_else(|| "?".to_string(), format_score);
    println!("Dealer: {dealer} (value {dealer_value})");

    println!(
        "Player: {} (value {}) | bet {}",
        format_hand(game.player_hand()),
        format_score(game.player_score()),
        game.bet()
    );
    println!();
}

fn format_actions(game: &Game<FileLedger>) -> String {
    format!(
        "Actions: {} {}",
        format_action("hit", "h", game.can_hit()),
        format_action("stand", "s", true)
    )
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_score(score: HandScore) -> String {
    let mut text = score.score.to_string();
    if let Some(soft) = score.soft() {
        text.push_str(&format!(" / {soft}"));
    }
    if bjtable::is_bust(score) {
        text.push_str(" bust");
    }
    text
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), color_code)
}
