//! Tongo CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tongo_runtime::{Repl, Session, format_explanation};

use tongo_explain::to_json;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    numbers: Vec<i64>,
    reference: Option<PathBuf>,
    explain: bool,
    json: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-e" | "--explain" => config.explain = true,
            "--json" => config.json = true,
            "-r" | "--reference" => {
                i += 1;
                if i >= args.len() {
                    return Err("--reference requires a path".into());
                }
                config.reference = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') && arg.parse::<i64>().is_err() => {
                return Err(format!("unknown option: {arg}").into());
            }
            number => {
                config.numbers.push(
                    number
                        .parse()
                        .map_err(|_| format!("not a number: {number}"))?,
                );
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tongo {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut session = Session::new();

    // Reference data is optional: report the failure once, continue rule-only.
    if let Some(path) = &config.reference {
        match session.load_reference(path) {
            Ok(count) => {
                eprintln!("loaded {count} reference entries from {}", path.display());
            }
            Err(e) => {
                eprintln!("\x1b[33mWarning: {e}; continuing rule-only\x1b[0m");
            }
        }
    }

    if config.numbers.is_empty() {
        let mut repl = Repl::new()?.with_session(session);
        if config.reference.is_some() {
            repl = repl.without_banner();
        }
        repl.run()?;
        return Ok(());
    }

    for &n in &config.numbers {
        if config.json {
            let explanation = session.explain(n)?;
            println!("{}", to_json(&explanation)?);
        } else if config.explain {
            let explanation = session.explain(n)?;
            println!("{}", format_explanation(&explanation));
        } else {
            let phrase = session.translate(n)?;
            println!("{n}: {phrase}");
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTongo\x1b[0m - Susu numeral generation and explanation

\x1b[1mUSAGE:\x1b[0m
    tongo [OPTIONS] [NUMBERS...]

\x1b[1mARGUMENTS:\x1b[0m
    [NUMBERS...]    Numbers to translate; with none, start the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -e, --explain         Show construction steps for each number
        --json            Print JSON reports instead of plain phrases
    -r, --reference PATH  Load reference data (Number;Translation CSV)

\x1b[1mEXAMPLES:\x1b[0m
    tongo                          Start the interactive explorer
    tongo 1234                     Translate one number
    tongo -e 35                    Translate with construction steps
    tongo --json 11                Emit the JSON report for 11
    tongo -r numbers.csv 7         Translate with reference overrides

\x1b[1mREPL COMMANDS:\x1b[0m
    N                Translate the number N
    :explain N       Show the construction steps for N
    :json N          Print the JSON report for N
    :load PATH       Load reference data
    :eval            Compare rule output against reference data
    Ctrl+D           Exit"
    );
}
