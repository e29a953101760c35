use std::{fs, process::ExitCode};

use clap::Parser;
use nestcalc::{
    error::Status,
    interpreter::{
        environment::{Environment, EnvironmentConfig},
        evaluator::core::DEFAULT_MAX_DEPTH,
        store::DEFAULT_CAPACITY,
    },
    session::{BANNER, Reply, Session},
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// nestcalc evaluates nested integer arithmetic with variables, one line at a
/// time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells nestcalc to read the lines from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of variables.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Maximum number of nested frames one line may open.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Lines to evaluate. Starts the interactive shell when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let config = EnvironmentConfig { capacity:  args.capacity,
                                     max_depth: args.max_depth, };

    let Some(contents) = args.contents else {
        return repl(config);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    run_script(&script, config)
}

/// Evaluates each non-blank line, printing values, and stops at the first
/// failure with its status code.
fn run_script(script: &str, config: EnvironmentConfig) -> ExitCode {
    let mut env = Environment::new(config);

    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        let result = env.evaluate(line);
        match &result {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                env.teardown();
                return ExitCode::from(Status::of(&result).code());
            },
        }
    }

    env.teardown();
    ExitCode::SUCCESS
}

fn repl(config: EnvironmentConfig) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the shell: {e}");
            return ExitCode::FAILURE;
        },
    };
    let mut session = Session::new(config);

    println!("{BANNER}");
    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = editor.add_history_entry(line.as_str()) {
                        tracing::debug!(error = %e, "failed to record history entry");
                    }
                }
                match session.respond(&line) {
                    Reply::Exit => break,
                    Reply::Nothing => {},
                    reply @ Reply::Failure(_) => eprintln!("{reply}"),
                    Reply::Variables(variables) if variables.is_empty() => {
                        println!("No variables defined.");
                    },
                    reply => println!("{reply}"),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted. Use Ctrl+D or \"exit\" to exit.");
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=nestcalc=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
