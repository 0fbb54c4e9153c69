use indicatif::{ProgressBar, ProgressStyle};
use pawnline::context::{EngineContext, parse_position};
use pawnline::logger::{DEFAULT_LOG_FILE, init_logging};
use pawnline::moves::movegen::pawn_moves;
use pawnline::moves::perft::perft_divide_with;
use std::io::{self, BufRead};
use std::time::Instant;
use tracing::{info, warn};

fn main() {
    let log_file = std::env::var("PAWNLINE_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.into());
    let filter = std::env::var("PAWNLINE_LOG").unwrap_or_else(|_| "info".into());
    if let Err(err) = init_logging(&log_file, &filter) {
        eprintln!("info string logging disabled: {err}");
    }

    let mut ctx = EngineContext::new();

    // Main command loop
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "uci" => handle_uci(),
            "isready" => println!("readyok"),
            "ucinewgame" => ctx.new_game(),
            "position" => handle_position(&parts, &mut ctx),
            "go" => handle_go(&parts, &ctx),
            "divide" => match parse_depth(parts.get(1)) {
                Some(depth) => run_divide(&ctx, depth),
                None => println!("info string usage: divide <depth>"),
            },
            "moves" => {
                let list: Vec<String> = pawn_moves(ctx.board()).iter().map(|m| m.to_uci()).collect();
                println!("{}", list.join(" "));
            }
            "fen" => println!("{}", ctx.fen()),
            "d" | "display" => print!("{}", ctx.display()),
            "quit" => break,
            _ => {
                warn!(%line, "unknown command");
                println!("info string unknown command: {command}");
            }
        }
    }
}

fn handle_uci() {
    println!("id name Pawnline {}", env!("CARGO_PKG_VERSION"));
    println!("id author the Pawnline developers");
    println!("uciok");
}

fn handle_position(parts: &[&str], ctx: &mut EngineContext) {
    let (start, moves) = parse_position(parts);
    if let Err(err) = ctx.set_position(&start, moves) {
        warn!(%err, "position rejected");
        println!("info string position rejected: {err}");
    }
}

fn handle_go(parts: &[&str], ctx: &EngineContext) {
    // Only `go perft N` is served here; searching belongs to another component.
    if parts.get(1) != Some(&"perft") {
        println!("info string only `go perft <depth>` is supported");
        return;
    }
    let Some(depth) = parse_depth(parts.get(2)) else {
        println!("info string usage: go perft <depth>");
        return;
    };

    let start = Instant::now();
    let nodes = ctx.perft(depth);
    let secs = start.elapsed().as_secs_f64().max(1e-9);
    info!(depth, nodes, secs, "perft");
    println!(
        "info depth {depth} nodes {nodes} time {} nps {}",
        (secs * 1000.0) as u64,
        (nodes as f64 / secs) as u64
    );
}

fn run_divide(ctx: &EngineContext, depth: u32) {
    let root = pawn_moves(ctx.board()).len() as u64;
    let bar = ProgressBar::new(root);
    if let Ok(style) = ProgressStyle::with_template("{bar:32} {pos}/{len} {msg}") {
        bar.set_style(style);
    }

    let mut rows = Vec::with_capacity(root as usize);
    perft_divide_with(ctx.board(), depth, |mv, count| {
        bar.set_message(mv.to_uci());
        bar.inc(1);
        rows.push((mv, count));
    });
    bar.finish_and_clear();

    for (mv, count) in &rows {
        println!("{mv}: {count}");
    }
    println!();
    println!("Total: {}", rows.iter().map(|(_, n)| n).sum::<u64>());
}

fn parse_depth(arg: Option<&&str>) -> Option<u32> {
    arg.and_then(|s| s.parse().ok())
}
