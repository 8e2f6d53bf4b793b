use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use tally::{Context, evaluate_line, interpreter::evaluator::function::core::BUILTIN_FUNCTIONS};

/// tally is an interactive arithmetic expression evaluator with variables,
/// built-in functions, and a result history.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates the expressions in a file, one per line, instead of
    /// starting the interactive session.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// A single expression to evaluate directly.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut context = Context::new();

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does \
                                    not exist?",
                                   path.display());
                         std::process::exit(1);
                     });
        run_script(&script, &mut context);
    } else if let Some(expression) = args.expression {
        match evaluate_line(&expression, &mut context) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
    } else if let Err(e) = run_repl(&mut context) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Evaluates a script line by line, continuing past failures.
///
/// Blank lines and `#` comments are skipped. Each successful line prints as
/// `<line> = <result>`; a failing line prints its error and the run moves
/// on, keeping earlier assignments and history intact.
fn run_script(script: &str, context: &mut Context) {
    for line in script.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match evaluate_line(line, context) {
            Ok(value) => println!("{line} = {value}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

/// Runs the interactive read-evaluate-print loop until `quit` or
/// end of input.
fn run_repl(context: &mut Context) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("tally: type an expression, or 'help' for commands.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "help" => print_help(),
            "vars" => print_variables(context),
            "history" => print_history(context),
            "clear" => {
                context.clear_history();
                println!("History cleared.");
            },
            _ => match evaluate_line(line, context) {
                Ok(value) => println!("{value}"),
                Err(e) => eprintln!("Error: {e}"),
            },
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  help      Show this message.");
    println!("  vars      List all variables and their values.");
    println!("  history   List previous results ($1, $2, ...).");
    println!("  clear     Clear the result history.");
    println!("  quit      Leave the session (also: exit).");
    println!();
    println!("Operators: + - * / % ^, unary -, grouping with ( ), assignment with =.");
    println!("Built-in functions: {}.", BUILTIN_FUNCTIONS.join(", "));
    println!("Built-in constants: pi, e.");
    println!("$n refers to the n-th previous result.");
}

fn print_variables(context: &Context) {
    let mut names: Vec<_> = context.variables().keys().collect();
    names.sort();

    for name in names {
        if let Some(value) = context.variables().get(name) {
            println!("{name} = {value}");
        }
    }
}

fn print_history(context: &Context) {
    if context.history().is_empty() {
        println!("History is empty.");
        return;
    }

    for (i, value) in context.history().iter().enumerate() {
        println!("${} = {value}", i + 1);
    }
}
