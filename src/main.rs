mod debug_report;

use lis_translator::{Direction, Options, Whitespace, default_rules, translate_verbose_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    for line in config.input.lines() {
        let res = translate_verbose_with(line, config.direction, default_rules(), &config.options);
        if config.verbose {
            debug_report::print_run(&res, config.color);
        } else {
            println!("{}", res.output);
        }
    }
}

struct CliConfig {
    input: String,
    direction: Direction,
    options: Options,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut direction = Direction::Forward;
    let mut options = Options::default();
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("lis-translator {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-f" | "--forward" => direction = Direction::Forward,
            "-r" | "--reverse" => direction = Direction::Reverse,
            "--collapse-whitespace" => options.whitespace = Whitespace::Collapse,
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--max-window" => {
                let value = args.next().ok_or_else(|| "error: --max-window expects a value".to_string())?;
                options.max_phrase_window = parse_window(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--max-window=") => {
                let value = arg.trim_start_matches("--max-window=");
                options.max_phrase_window = parse_window(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, direction, options, verbose, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_window(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n >= 2 => Ok(n),
        _ => Err(format!("error: invalid --max-window '{value}' (expected an integer >= 2)")),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "lis-translator {version}

Rule-based Lis <-> Chinese translator.

Usage:
  lis-translator [OPTIONS] [--] <input...>
  lis-translator [OPTIONS] --input <text>

Input is translated line by line.

Options:
  -i, --input <text>         Input text to translate. If omitted, reads remaining
                             args or stdin when no args are provided.
  -f, --forward              Translate Lis to Chinese (default).
  -r, --reverse              Translate Chinese to Lis.
  --collapse-whitespace      Treat runs of whitespace as one separator.
  --max-window <n>           Longest phrase window to try. Default: {window}
  -v, --verbose              Print a per-unit match report.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  LIS_DEBUG_RULES            Print matcher traces to stderr when set.

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        window = Options::default().max_phrase_window
    )
}
