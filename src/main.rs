//! Ethereum Vanity Address Generator CLI
//!
//! Usage:
//!   genaddr -p "dead*"                 # Find address starting with "dead"
//!   genaddr -p "*cafe*,*babe*" -c      # Report every address containing cafe or babe
//!   genaddr -p "###*" -w 8 -o out.txt  # 8 workers, save matches to out.txt

use std::io::{self, Write};
use std::process;
use std::time::Duration;

use clap::Parser;

use genaddr::{Config, OutputSink, PatternSet, WorkerPool};

const STATUS_INTERVAL: Duration = Duration::from_secs(1);

fn main() {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let patterns = match PatternSet::compile(&config.pattern) {
        Ok(patterns) => patterns,
        Err(e) => {
            eprintln!("Invalid pattern: {}", e);
            process::exit(1);
        }
    };

    // The sink must open before any worker starts; a bad path is fatal.
    let mut sink = match config.output.as_deref().map(OutputSink::open).transpose() {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("Error opening output file: {}", e);
            process::exit(1);
        }
    };

    println!("Ethereum Vanity Address Generator");
    println!("==================================");
    println!(
        "Patterns: {}",
        patterns
            .patterns()
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Workers:  {}", config.workers);
    println!(
        "Mode:     {}",
        if config.continue_search {
            "continue until interrupted"
        } else {
            "stop after first match"
        }
    );
    if let Some(sink) = &sink {
        println!("Output:   {}", sink.path().display());
    }
    println!("\nSearching... (Press Ctrl+C to stop)\n");

    let pool = WorkerPool::new(config.workers, patterns);

    let stop_flag = pool.stop_flag_clone();
    ctrlc::set_handler(move || {
        stop_flag.store(true, std::sync::atomic::Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");

    // Coordinator loop: matches on the channel, status ticks on timeout.
    loop {
        match pool.wait_for_result(STATUS_INTERVAL) {
            Some(result) => {
                println!("\n\nFound matching address!\n{}\n", result);
                if let Some(sink) = &mut sink {
                    // Non-fatal: the match is already on the console.
                    if let Err(e) = sink.write_match(&result) {
                        eprintln!("Error writing to file: {}", e);
                    }
                }
                if !config.continue_search {
                    break;
                }
            }
            None => {
                print!(
                    "\rAddresses checked: {} | Speed: {:.2} addr/sec",
                    pool.attempts(),
                    pool.rate()
                );
                let _ = io::stdout().flush();
            }
        }

        if pool.is_stopped() {
            break;
        }
    }

    println!("\n\nFinal Statistics:");
    println!("Total addresses checked: {}", pool.attempts());
    println!("Average speed: {:.2} addr/sec", pool.rate());
    println!("Search time: {:.2} sec", pool.elapsed().as_secs_f64());

    pool.join();
}
