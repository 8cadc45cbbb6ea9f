//! Classify command implementation.

use rangehop_schemes::classify_address;

pub fn run(url: String) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", classify_address(&url));
    Ok(())
}
