//! Cantor demo driver
//!
//! Runs the reference workload end-to-end: pointwise-equality checks between
//! the two reference predicates and the modulus of continuity of each,
//! printing every result with its wall-clock time.
//!
//! Usage: cantor [-h | -v]
//!
//! Set RUST_LOG=debug (or trace) to watch the engine grow its search space.

use std::time::{Duration, Instant};

use cantor::predicates::{func_f, func_g};
use cantor::{equal, modulus, Bit};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn usage() {
    println!("Usage: cantor [options]");
    println!();
    println!("Options:");
    println!("  -h, --help      Show this help and exit");
    println!("  -v, --version   Show version and exit");
    println!();
    println!("Set RUST_LOG=debug to log each search round.");
}

/// Render a duration the way a human scans it: µs below a millisecond,
/// ms below a second, seconds otherwise.
fn human(elapsed: Duration) -> String {
    let us = elapsed.as_micros();
    if us < 1_000 {
        format!("{us}us")
    } else if us < 1_000_000 {
        format!("{:.3}ms", us as f64 / 1_000.0)
    } else {
        format!("{:.3}s", us as f64 / 1_000_000.0)
    }
}

fn timed<T: std::fmt::Display>(name: &str, compute: impl FnOnce() -> T) {
    let start = Instant::now();
    let value = compute();
    println!("{name} = {value}  [{}]", human(start.elapsed()));
}

fn main() {
    env_logger::init();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                usage();
                return;
            }
            "-v" | "--version" => {
                println!("cantor {VERSION}");
                return;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                usage();
                std::process::exit(1);
            }
        }
    }

    let start = Instant::now();

    timed("equal(func_f, func_f)", || equal::<Bit, _, _>(func_f, func_f));
    timed("equal(func_g, func_g)", || equal::<Bit, _, _>(func_g, func_g));
    timed("equal(func_f, func_g)", || equal::<Bit, _, _>(func_f, func_g));
    timed("equal(func_g, func_f)", || equal::<Bit, _, _>(func_g, func_f));

    timed("modulus(func_f)", || modulus::<Bit, _>(func_f));
    timed("modulus(func_g)", || modulus::<Bit, _>(func_g));

    println!("Total time: {}", human(start.elapsed()));
}
