//! Demo harness: runs two hardcoded triangles through the pipeline.
//!
//! Pipeline events go to the logger (`RUST_LOG=info` to see them);
//! blackboard dumps and per-run results go to stdout.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin demo
//! ```

use std::sync::Arc;

use triboard::agents::{RULES_KEY, TRIANGLE_KEY};
use triboard::blackboard::{self, Blackboard};
use triboard::domain::{Angle, RuleSet, Triangle};
use triboard::events::LogSink;
use triboard::pipeline::Pipeline;

fn run_case(board: &mut Blackboard, title: &str, triangle: Triangle) {
    board.put(TRIANGLE_KEY, triangle, "caller");

    println!("=== {title} ===");
    print!("{}", blackboard::render(board));

    let mut pipeline = Pipeline::new(Arc::new(LogSink));
    let result = pipeline.run(board);

    print!("{}", blackboard::render(board));
    match result {
        Ok(is_right) => println!(
            "Result: OK ({})\n",
            if is_right { "right-angled" } else { "not right-angled" }
        ),
        Err(err) => println!("Result: ERROR ({err})\n"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut board = Blackboard::new();
    board.put(RULES_KEY, RuleSet::default(), "caller");

    run_case(
        &mut board,
        "Test 1: right triangle",
        Triangle::new(Angle::known(90.0), Angle::known(45.0), Angle::unknown()),
    );

    run_case(
        &mut board,
        "Test 2: non-right triangle",
        Triangle::new(Angle::known(60.0), Angle::known(60.0), Angle::unknown()),
    );
}
