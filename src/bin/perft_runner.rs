//! Perft runner for validating and timing move generation.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 5 --threads`
//! `cargo run --release --bin perft_runner -- --fen "<fen>" --depth 3 --divide`

use std::sync::Arc;
use std::time::Instant;

use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use mailbox_chess::move_generation::move_generator::MoveGenerator;
use mailbox_chess::move_generation::perft::{perft, perft_divide, perft_multi_threaded};
use mailbox_chess::utils::render_game_state::render_game_state;

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn parse_arg_string(flag: &str, default: &str) -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    default.to_owned()
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn run() -> Result<(), String> {
    let depth = parse_arg_u8("--depth", 4);
    let fen = parse_arg_string("--fen", STARTING_POSITION_FEN);
    let divide = has_flag("--divide");
    let threads = has_flag("--threads");

    let mut game = GameState::from_fen(&fen).map_err(|e| e.to_string())?;
    println!("{}", render_game_state(&game));
    println!("fen=\"{}\" depth={depth}", game.get_fen());

    let generator = LegalMoveGenerator;

    if divide {
        let divided = perft_divide(&generator, &mut game, depth).map_err(|e| e.to_string())?;
        let mut total = 0usize;
        for (mv, nodes) in &divided {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!("moves={} nodes={total}", divided.len());
        return Ok(());
    }

    let started = Instant::now();
    let counts = if threads {
        let shared: Arc<dyn MoveGenerator> = Arc::new(generator);
        perft_multi_threaded(shared, &game, depth)
    } else {
        perft(&generator, &mut game, depth)
    }
    .map_err(|e| e.to_string())?;
    let elapsed = started.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        (counts.nodes as f64 / elapsed.as_secs_f64()) as u64
    } else {
        0
    };

    println!(
        "nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates
    );
    println!(
        "threads={} elapsed_ms={} nps={nps}",
        threads,
        elapsed.as_millis()
    );

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error={e}");
        std::process::exit(1);
    }
}
