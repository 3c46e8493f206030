//! Interactive text-menu front-end for the conversion engine

use std::io::{self, BufRead, Write};

use uuc::convert::{ConversionGraph, ConvertError};

fn main() {
    let mut graph = ConversionGraph::with_standard_units();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the Universal Unit Converter!");

    loop {
        println!();
        println!("Options:");
        println!("1. Convert Units");
        println!("2. Add/Modify Units");
        println!("3. Exit");

        match prompt_integer(&mut lines, "Enter your choice: ") {
            Some(1) => perform_conversion(&graph, &mut lines),
            Some(2) => modify_units(&mut graph, &mut lines),
            Some(3) => {
                println!("Exiting the system. Goodbye!");
                return;
            }
            Some(_) => println!("Invalid choice. Please try again."),
            // End of input
            None => return,
        }
    }
}

/// Ask for a source unit, target unit, and value, then run the conversion
fn perform_conversion(
    graph: &ConversionGraph,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(from_unit) = prompt_line(lines, "Enter the source unit: ") else {
        return;
    };
    let Some(to_unit) = prompt_line(lines, "Enter the target unit: ") else {
        return;
    };
    let Some(value) = prompt_double(lines, "Enter the value to convert: ") else {
        return;
    };

    match graph.convert(&from_unit, &to_unit, value) {
        Ok(result) => println!(
            "{:.4} {} is equal to {:.4} {}",
            value,
            from_unit.to_lowercase(),
            result,
            to_unit.to_lowercase()
        ),
        Err(ConvertError::UnknownUnit { .. }) => {
            println!("Error: Invalid unit(s) entered.");
        }
        Err(ConvertError::NoConversionPath { from, to }) => {
            println!("Error: Conversion path not found between {} and {}", from, to);
        }
    }
}

/// Ask for a unit pair and factor, then register the rule
fn modify_units(
    graph: &mut ConversionGraph,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(from_unit) = prompt_line(lines, "Enter the source unit: ") else {
        return;
    };
    let Some(to_unit) = prompt_line(lines, "Enter the target unit: ") else {
        return;
    };
    let Some(factor) = prompt_double(lines, "Enter the conversion factor (from -> to): ") else {
        return;
    };

    graph.register(&from_unit, &to_unit, factor);
    println!("Conversion rule added/updated successfully.");
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();

    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

/// Read an integer, re-prompting until the input parses
fn prompt_integer(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Option<i32> {
    loop {
        let line = prompt_line(lines, prompt)?;
        match line.parse::<i32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Invalid input. Please enter a valid integer."),
        }
    }
}

/// Read a number, re-prompting until the input parses
fn prompt_double(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Option<f64> {
    loop {
        let line = prompt_line(lines, prompt)?;
        match line.parse::<f64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Invalid input. Please enter a numeric value."),
        }
    }
}
