//! Moderator console (default binary).
//!
//! A line-oriented host for the engine: loads a board file, builds the
//! roster, and drives the game from stdin commands. This is the reference
//! controller; graphical hosts replace this loop but speak the same
//! `Action`/snapshot contract.
//!
//! Usage:
//!   quizboard BOARD.json --player Alice --player Bob [--rules classic|hard]

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};

use quizboard::adapter::{dispatch, Action, BoardSpec};
use quizboard::core::{Game, GameRules, GameSnapshot, Player};

struct ConsoleConfig {
    board_path: String,
    player_names: Vec<String>,
    rules: GameRules,
}

fn parse_args(args: &[String]) -> Result<ConsoleConfig> {
    let mut board_path = None;
    let mut player_names = Vec::new();
    let mut rules = GameRules::classic();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--player" => {
                i += 1;
                let name = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --player"))?;
                player_names.push(name.clone());
            }
            "--rules" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --rules"))?;
                rules = match v.as_str() {
                    "classic" => GameRules::classic(),
                    "hard" => GameRules::hard(),
                    other => return Err(anyhow!("unknown ruleset: {other}")),
                };
            }
            path if board_path.is_none() => board_path = Some(path.to_string()),
            other => return Err(anyhow!("unexpected argument: {other}")),
        }
        i += 1;
    }

    Ok(ConsoleConfig {
        board_path: board_path.ok_or_else(|| anyhow!("missing board file argument"))?,
        player_names,
        rules,
    })
}

fn build_game(config: &ConsoleConfig) -> Result<Game> {
    let raw = fs::read_to_string(&config.board_path)
        .with_context(|| format!("reading board file {}", config.board_path))?;
    let spec: BoardSpec = serde_json::from_str(&raw)
        .with_context(|| format!("parsing board file {}", config.board_path))?;
    let board = spec.into_board().context("invalid board")?;

    if config.player_names.is_empty() {
        return Err(anyhow!("at least one --player is required"));
    }
    let players = config
        .player_names
        .iter()
        .map(|name| Player::new(name.to_lowercase(), name.clone()))
        .collect();

    Game::new(players, board, config.rules).map_err(|e| anyhow!("{e}"))
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    let game = build_game(&config)?;
    run(game)
}

fn run(mut game: Game) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("quizboard - type 'help' for commands");
    print_status(&game);

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(()); // EOF
        }

        match parse_command(line.trim()) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Help) => print_help(),
            Some(Command::Scores) => print_scores(&game),
            Some(Command::Board) => print_board(&game),
            Some(Command::Act(action)) => {
                // Rejected commands print and the loop keeps going; the
                // engine guarantees they were no-ops.
                match dispatch(&mut game, &action) {
                    Ok(()) => print_status(&game),
                    Err(e) => println!("! {e}"),
                }
                if game.is_finished() {
                    println!("board exhausted - final scores:");
                    print_scores(&game);
                    return Ok(());
                }
            }
            None => println!("! unrecognized command (try 'help')"),
        }
    }
}

enum Command {
    Act(Action),
    Scores,
    Board,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = match parts.next()? {
        "select" => {
            let category = parts.next()?.parse().ok()?;
            let question = parts.next()?.parse().ok()?;
            Command::Act(Action::SelectQuestion { category, question })
        }
        "right" => Command::Act(Action::Answer { correct: true }),
        "wrong" => Command::Act(Action::Answer { correct: false }),
        "buzz" => Command::Act(Action::Buzz {
            player_id: parts.next()?.to_string(),
        }),
        "pass" => Command::Act(Action::Pass),
        "continue" => Command::Act(Action::Continue),
        "scores" => Command::Scores,
        "board" => Command::Board,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    // Trailing junk means a typo; reject rather than guess.
    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

fn print_help() {
    println!("  select C Q   pick the question at category C, row Q");
    println!("  right        judge the active answer correct");
    println!("  wrong        judge the active answer incorrect");
    println!("  buzz ID      player ID buzzes in");
    println!("  pass         nobody else wants to answer");
    println!("  continue     close the revealed answer, next turn");
    println!("  scores       show the score table");
    println!("  board        show tile availability");
    println!("  quit         leave the console");
}

fn print_status(game: &Game) {
    let snapshot = GameSnapshot::capture(game);
    let Some(state) = snapshot.turn_state else {
        return;
    };
    match (&snapshot.active_question, &snapshot.active_player) {
        (Some(q), Some(active)) => println!(
            "[{state}] {} for {} - {} answering: {}",
            q.category_name, q.value, active, q.text
        ),
        _ => println!(
            "[{state}] {} picks a question",
            snapshot.starting_player.as_deref().unwrap_or("?")
        ),
    }
    if !snapshot.eligible_buzzers.is_empty() {
        println!("  may buzz: {}", snapshot.eligible_buzzers.join(", "));
    }
    if snapshot.can_continue {
        if let Some(q) = &snapshot.active_question {
            println!("  answer was: {}", q.answer);
        }
    }
}

fn print_scores(game: &Game) {
    for player in game.players() {
        println!("  {:20} {:>6}", player.name(), player.score());
    }
}

fn print_board(game: &Game) {
    let snapshot = GameSnapshot::capture(game);
    for (i, category) in snapshot.categories.iter().enumerate() {
        let tiles: Vec<String> = category
            .tiles
            .iter()
            .map(|t| {
                if t.is_available {
                    t.value.to_string()
                } else {
                    "---".to_string()
                }
            })
            .collect();
        println!("  [{i}] {:15} {}", category.name, tiles.join(" "));
    }
}
