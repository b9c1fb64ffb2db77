//! Gobang engine CLI
//!
//! A command-line driver for exercising the decision engine against a
//! handful of fixed scenarios. Run with `RUST_LOG=debug` for per-depth
//! search diagnostics.

use gobang::{Board, Difficulty, Engine, Pos, SearchLimits, Stone, BOARD_SIZE};

fn main() {
    env_logger::init();

    println!("===========================================");
    println!("        Gobang Engine v0.1.0");
    println!("===========================================\n");

    let limits = SearchLimits::from(Difficulty::Normal);

    println!("--- Scenario 1: Empty Board ---");
    run_empty_board(limits);

    println!("\n--- Scenario 2: Complete a Four ---");
    run_winning_move(limits);

    println!("\n--- Scenario 3: Block Opponent Four ---");
    run_block_opponent(limits);

    println!("\n--- Scenario 4: Mid-game Search ---");
    run_midgame(limits);

    println!("\n--- Scenario 5: Self-play Opening ---");
    run_self_play();
}

fn run_empty_board(limits: SearchLimits) {
    let mut board = Board::new();
    let engine = Engine::new(Stone::Black);
    let result = engine.find_best_move(&mut board, limits);

    report(&result);
    match result.best_move {
        Some(pos) if pos == Pos::new(7, 7) => println!("  Result: center, as expected"),
        Some(pos) => println!("  Result: ({}, {}) instead of center", pos.row, pos.col),
        None => println!("  Result: FAIL, no move found"),
    }
}

fn run_winning_move(limits: SearchLimits) {
    let mut board = Board::new();
    // White four in a row at (5,5)-(5,8); White to move.
    for c in 5..9 {
        board.place(Pos::new(5, c), Stone::White).ok();
    }
    board.place(Pos::new(9, 9), Stone::Black).ok();

    let engine = Engine::new(Stone::White);
    let result = engine.find_best_move(&mut board, limits);

    println!("  Position: White four at row 5, cols 5-8");
    report(&result);
    match result.best_move {
        Some(pos) if pos == Pos::new(5, 4) || pos == Pos::new(5, 9) => {
            println!("  Result: five completed");
        }
        _ => println!("  Result: FAIL, expected (5, 4) or (5, 9)"),
    }
}

fn run_block_opponent(limits: SearchLimits) {
    let mut board = Board::new();
    // Black vertical four, rows 7-10 at column 7; White to move.
    for r in 7..11 {
        board.place(Pos::new(r, 7), Stone::Black).ok();
    }
    board.place(Pos::new(0, 0), Stone::White).ok();

    let engine = Engine::new(Stone::White);
    let result = engine.find_best_move(&mut board, limits);

    println!("  Position: Black four at column 7, rows 7-10");
    report(&result);
    match result.best_move {
        Some(pos) if pos == Pos::new(6, 7) || pos == Pos::new(11, 7) => {
            println!("  Result: threat blocked");
        }
        _ => println!("  Result: FAIL, expected (6, 7) or (11, 7)"),
    }
}

fn run_midgame(limits: SearchLimits) {
    let mut board = Board::new();
    let moves = [
        (7, 7, Stone::Black),
        (8, 8, Stone::White),
        (6, 6, Stone::Black),
        (8, 6, Stone::White),
        (7, 5, Stone::Black),
        (7, 8, Stone::White),
        (5, 7, Stone::Black),
        (9, 7, Stone::White),
    ];
    for (r, c, stone) in moves {
        board.place(Pos::new(r, c), stone).ok();
    }

    println!("  Position: mid-game with {} stones", board.stone_count());
    print_board(&board);

    let engine = Engine::new(Stone::Black);
    let result = engine.find_best_move(&mut board, limits);
    report(&result);

    let budget_ms = limits.time_budget.as_millis() as u64;
    if result.time_ms <= budget_ms + 50 {
        println!("  Result: within the {budget_ms}ms budget");
    } else {
        println!("  Result: SLOW, {}ms over a {budget_ms}ms budget", result.time_ms);
    }
}

fn run_self_play() {
    let mut board = Board::new();
    let limits = SearchLimits::from(Difficulty::Easy);
    let black = Engine::new(Stone::Black);
    let white = Engine::new(Stone::White);

    for ply in 0..8 {
        let engine = if ply % 2 == 0 { black } else { white };
        let result = engine.find_best_move(&mut board, limits);
        let Some(pos) = result.best_move else {
            println!("  Ply {ply}: no move, stopping");
            break;
        };
        if board.place(pos, engine.color()).is_err() {
            println!("  Ply {ply}: illegal move ({}, {}), stopping", pos.row, pos.col);
            break;
        }
        println!(
            "  Ply {ply}: {:?} plays ({}, {}) [{:?}, depth {}, {}ms]",
            engine.color(),
            pos.row,
            pos.col,
            result.kind,
            result.depth,
            result.time_ms
        );
    }
    print_board(&board);
}

fn report(result: &gobang::MoveResult) {
    if let Some(pos) = result.best_move {
        println!("  Move: ({}, {})", pos.row, pos.col);
    } else {
        println!("  Move: none");
    }
    println!("  Kind: {:?}", result.kind);
    println!("  Score: {}", result.score);
    println!("  Depth: {}", result.depth);
    println!("  Nodes: {}", result.nodes);
    println!("  Time: {}ms", result.time_ms);
}

fn print_board(board: &Board) {
    print!("     ");
    for c in 0..BOARD_SIZE {
        print!("{c:2}");
    }
    println!();

    for r in 0..BOARD_SIZE {
        print!("  {r:2} ");
        for c in 0..BOARD_SIZE {
            let ch = match board.get(Pos::new(r as u8, c as u8)) {
                Stone::Black => " X",
                Stone::White => " O",
                Stone::Empty => " .",
            };
            print!("{ch}");
        }
        println!();
    }
}
