use smartcalc::{calculate, VariableStore};

// Inherited help text; the evaluator actually handles only +/- chains.
const HELP: &str = "The program calculates the sum, subtraction, multiplication, \
                    and division of numbers. Variables can be stored and accessed \
                    later if required. Bracketed expressions are supported.";

fn main() {
    let mut variables = VariableStore::new();

    for line in std::io::stdin().lines() {
        let line = line.unwrap();
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input.starts_with('/') {
            match input {
                "/exit" => {
                    println!("Bye!");
                    break;
                }
                "/help" => println!("{HELP}"),
                _ => println!("Unknown command"),
            }
        } else {
            match calculate(input, &mut variables) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => {}
                Err(error) => println!("{error}"),
            }
        }
    }
}
