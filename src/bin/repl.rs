use dice_expression::DiceExpression;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next() {
        let line = line?;
        if !line.trim().is_empty() {
            match DiceExpression::new(&line) {
                Ok(mut expr) => {
                    let result = expr.roll();
                    println!("{} ({}..={}) = {}", expr, expr.min(), expr.max(), result);
                }
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
