//! Minimal `curl` or `wget` to be used for container health checks.
//!
//! It's convenient to avoid using third-party libraries because:
//!
//! - They are harder to maintain.
//! - They introduce new attack vectors.
use std::{env, process};

const DEFAULT_HEALTH_CHECK_URL: &str = "http://127.0.0.1:8080/api/health_check";

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    let url = match args.len() {
        1 => DEFAULT_HEALTH_CHECK_URL.to_string(),
        2 => args[1].clone(),
        _ => {
            eprintln!("Usage:   cargo run --bin http_health_check [HEALTH_URL]");
            eprintln!("Example: cargo run --bin http_health_check {DEFAULT_HEALTH_CHECK_URL}");
            std::process::exit(1);
        }
    };

    println!("Health check ...");

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("STATUS: {}", response.status());
                process::exit(0);
            } else {
                println!("Non-success status received.");
                process::exit(1);
            }
        }
        Err(err) => {
            println!("ERROR: {err}");
            process::exit(1);
        }
    }
}
