//! # Door Calculator CLI
//!
//! Reads an order JSON file (or stdin when no path is given), runs the
//! dimension calculation, and prints a shop-floor summary plus the JSON
//! result for piping into other tools.

use std::io::Read;
use std::{env, fs, io, process};

use door_core::{calculate, OrderInput};

fn read_order_json() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    println!("Door Calculator CLI");
    println!("===================");
    println!();

    let raw = match read_order_json() {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error reading order: {}", e);
            process::exit(1);
        }
    };

    let order: OrderInput = match serde_json::from_str(&raw) {
        Ok(order) => order,
        Err(e) => {
            eprintln!("Error parsing order JSON: {}", e);
            process::exit(1);
        }
    };

    match calculate(&order) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  DOOR CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Doors in order:  {}", result.door_quantity);
            println!("Frame height:    {} mm (adjusted)", result.vertical_adjusted);
            println!();
            println!("Leaves:");
            for entry in &result.horizontal_quantities {
                println!(
                    "  {:<24} {} mm  x{}",
                    entry.leaf_description, entry.leaf_size, entry.quantity
                );
            }
            println!("  Total segments (all doors): {}", result.total_horizontal_quantity);
            println!();
            println!("Reinforcement:");
            println!("  Bar length:      {} mm", result.reinforcement.reinforcement_length);
            println!("  Per door:        {}", result.reinforcement.total_reinforcements_per_door);
            println!("  All doors:       {}", result.reinforcement.total_reinforcements_all_doors);
            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            process::exit(1);
        }
    }
}
