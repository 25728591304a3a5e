use std::io::{self, BufRead, Write};

use clap::Parser;
use shunt::calculate;

/// shunt is a console calculator for infix arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match calculate(&expression) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
        return;
    }

    println!("Console calculator");
    println!("To exit, write: 'exit'");
    println!("{}", "-".repeat(50));

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("Enter the expression: ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let expression = line.trim();
        if expression.eq_ignore_ascii_case("exit") {
            println!("Bye-bye!");
            break;
        }
        if expression.is_empty() {
            continue;
        }

        match calculate(expression) {
            Ok(result) => println!("Result: {result}"),
            Err(e) => println!("Error: {e}"),
        }
    }
}
