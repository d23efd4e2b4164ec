//! CLI table example.
//!
//! Drives the step chain with a real clock so the staggered dealing is
//! visible: each pending step is advanced after its advisory delay and the
//! table is re-printed in between.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjtable::{NoticeKind, NotifySink, RoundState, Table, TableOptions};

struct StdoutSink;

impl NotifySink for StdoutSink {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let prefix = match kind {
            NoticeKind::Info => "*",
            NoticeKind::Warning => "!",
            NoticeKind::Error => "x",
        };
        println!("{prefix} {message}");
    }
}

fn main() {
    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_settle_display_ms(900);
    let table = Table::new(options, seed);
    table.set_sink(Box::new(StdoutSink));

    table.buy_in(500);
    if let Err(err) = table.start_round() {
        println!("Start error: {err}");
        return;
    }

    loop {
        if table.state() == RoundState::Idle {
            // A shoe-exhausted abort parks the table here.
            let _ = table.reshuffle();
            if table.start_round().is_err() {
                break;
            }
        }

        let chips = table.get_bankroll().total();
        if chips == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        if table.check_and_reshuffle() == Ok(true) {
            println!("Shoe reshuffled.");
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{chips}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = table.add_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = table.deal() {
            println!("Deal error: {err}");
            let _ = table.clear_bet();
            continue;
        }

        run_chain(&table);

        while table.state() == RoundState::PlayerTurn {
            println!("{}", format_actions(&table));
            let action = prompt_line("Action: ");

            let result = match action.as_str() {
                "h" | "hit" => table.hit().map(|_| ()),
                "s" | "stay" => table.stay(),
                "d" | "double" => table.double_down(),
                "p" | "split" => table.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }

            run_chain(&table);
        }

        println!("Chips: {}", table.get_bankroll().total());
    }
}

/// Advances the pending chain at its advisory pace, re-printing the table
/// after every discrete step.
fn run_chain(table: &Table) {
    while table.is_busy() {
        if let Some(delay) = table.next_delay() {
            thread::sleep(Duration::from_millis(delay));
        }

        if table.advance().is_err() {
            break;
        }

        print_table(table);
    }
}

fn print_table(table: &Table) {
    let dealer = table.get_dealer_hand();
    let player = table.get_player_hand();
    if dealer.is_empty() && player.is_empty() {
        return;
    }

    // Concealing the hole card is this layer's choice; the engine always
    // exposes both dealer cards.
    let conceal = matches!(
        table.state(),
        RoundState::Dealing | RoundState::PlayerTurn
    );

    let dealer_cards: Vec<String> = dealer
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if conceal && index > 0 {
                String::from("??")
            } else {
                card.name()
            }
        })
        .collect();

    if conceal {
        println!("dealer: {}", dealer_cards.join(" "));
    } else {
        println!("dealer: {} ({})", dealer_cards.join(" "), dealer.display());
    }

    let player_cards: Vec<String> = player.cards().iter().map(|card| card.name()).collect();
    println!("player: {} ({})", player_cards.join(" "), player.display());
    println!();
}

fn format_actions(table: &Table) -> String {
    let hand = table.get_player_hand();
    let mut actions = Vec::new();

    if hand.can_hit() {
        actions.push("(h)it");
    }
    if hand.can_stay() {
        actions.push("(s)tay");
    }
    if hand.can_double_down() {
        actions.push("(d)ouble");
    }
    if hand.can_split() {
        actions.push("s(p)lit");
    }
    actions.push("(q)uit");

    actions.join(" ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" || line == "quit" {
            return None;
        }
        if let Ok(value) = line.parse() {
            return Some(value);
        }
        println!("Enter a number.");
    }
}
