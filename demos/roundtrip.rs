//! Standalone demo: parses gradient strings given on the command line and writes them back.

use floem_gradient::{PickerValue, parse_gradient};

fn main() {
    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs.push("linear-gradient(to right, #d7006c, #feb47b, #aab47b, #af706c)".to_string());
    }

    for input in &inputs {
        match parse_gradient(input) {
            Ok(gradients) => {
                println!("{input}");
                for gradient in &gradients {
                    println!("  {} stops, angle {}", gradient.color_stops.len(), gradient.angle());
                }
                println!("  => {}", PickerValue::resolve(input, "").to_css());
            }
            Err(e) => println!("{e}"),
        }
    }
}
