//! CLI blackjack round example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    Card, CardView, PacedScheduler, RoundError, RoundOptions, RoundState, ShuffledDecks, Snapshot,
    Suit, Table,
};

/// Prints the table whenever the round changes.
struct Printer {
    last_message: String,
}

impl bjround::Presenter for Printer {
    fn present(&mut self, snapshot: &Snapshot) {
        if snapshot.state == RoundState::Idle && snapshot.player_hand.is_empty() {
            println!("{}", snapshot.message);
            return;
        }

        let dealer_value = snapshot
            .dealer_score
            .map_or_else(|| "?".to_string(), |score| score.to_string());
        println!(
            "\nDealer: {} (value {dealer_value})",
            format_dealer(&snapshot.dealer_hand)
        );
        println!(
            "You:    {} (value {})",
            format_cards(&snapshot.player_hand),
            snapshot.player_score
        );

        if snapshot.message != self.last_message {
            println!("{}", colorize(&snapshot.message, "33"));
            self.last_message.clone_from(&snapshot.message);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack round example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(
        RoundOptions::default(),
        ShuffledDecks::new(seed),
        PacedScheduler::new(),
        Printer {
            last_message: String::new(),
        },
    );

    loop {
        let state = table.round().state();
        let result = if table.round().is_retryable() {
            match prompt_line("[r]etry or [q]uit: ").as_str() {
                "r" | "retry" => table.retry(),
                "q" | "quit" => return,
                _ => continue,
            }
        } else if state == RoundState::PlayerTurn {
            match prompt_line("[h]it, [s]tand or [q]uit: ").as_str() {
                "h" | "hit" => table.hit(),
                "s" | "stand" => table.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            }
        } else {
            if let Some(result) = table.round().result() {
                println!(
                    "Round over: {:?} ({} vs {})",
                    result.outcome, result.player_score, result.dealer_score
                );
            }
            match prompt_line("Deal a new round? (y/n): ").as_str() {
                "y" | "yes" | "" => table.new_round(),
                _ => {
                    println!("Goodbye.");
                    return;
                }
            }
        };

        match result {
            Ok(()) | Err(RoundError::SourceUnavailable) => {}
            Err(err) => println!("Action error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn format_dealer(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|view| match view {
            CardView::Up(card) => format_card(card),
            CardView::Down => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    let rank = match card.rank.as_str() {
        "ACE" => "A",
        "JACK" => "J",
        "QUEEN" => "Q",
        "KING" => "K",
        number => number,
    };
    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
