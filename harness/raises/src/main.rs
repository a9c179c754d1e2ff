//! raises CLI
//!
//! Runs the built-in sample suite of exception-contract tests.

use raises::commands::{list_units, run_units};
use raises::sample::sample_target;
use raises::RunnerConfig;

fn main() {
    raises::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut config = RunnerConfig::default();
    let mut list = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            "version" | "--version" | "-V" => {
                println!("raises {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--verbose" | "-v" => config.verbose = true,
            "--list" => list = true,
            other => {
                if let Some(filter) = other.strip_prefix("--filter=") {
                    config.filter = Some(filter.to_string());
                } else {
                    eprintln!("Unknown option: {other}");
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
    }

    let code = if list {
        list_units(sample_target())
    } else {
        run_units(sample_target(), &config)
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("raises - exception-contract test runner");
    println!();
    println!("Usage: raises [options]");
    println!();
    println!("Options:");
    println!("  --filter=<pattern>  Only run units whose name contains pattern");
    println!("  --verbose, -v       Also report passing units");
    println!("  --list              List units and the faults they expect");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Exit codes:");
    println!("  0  all units passed");
    println!("  1  at least one unit failed");
    println!("  2  no units ran");
    println!();
    println!("Set RUST_LOG=raises=debug for per-unit tracing on stderr.");
}
