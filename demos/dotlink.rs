//! Terminal driver for the dotlink search.
//!
//! Run: cargo run --bin dotlink -- --rows 20 --density 0.25 --trace
//!      cargo run --bin dotlink -- --map demos/maps/walls.txt

use clap::Parser;
use dotlink_demos::{Args, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let report = run(&args)?;
    println!("{}", report.grid);
    println!("{}", report.summary());

    let code = report.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
