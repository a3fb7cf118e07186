use clap::builder::RangedU64ValueParser;
use clap::Parser;
use log::LevelFilter;
use serde::Serialize;
use wcalc::{CalcConfig, Calculator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Value,
    Tree,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "wcalc",
    version,
    about = "Evaluate arithmetic expressions",
    long_about = "wcalc evaluates arithmetic expressions with the operators\n\
        + - * / % ^ ** log, the functions neg abs sqrt exp ld ln lg sin cos tan\n\
        asin acos atan (negation is also ~ or _), and the constants pi e rand.\n\n\
        EXAMPLES:\n\
        \n  wcalc '(2 + 3) * 4'        Print 20\n\
        \n  wcalc --tree '2 ^ 3 ^ 2'   Print the grouping (^ 2 (^ 3 2))\n\
        \n  wcalc                      Start an interactive session"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print how each expression groups instead of its value
    #[arg(long, conflicts_with = "json")]
    tree: bool,

    /// Print one JSON object per expression
    #[arg(long)]
    json: bool,

    /// Entries per arena (nodes, values, leaf slots), at most 16384
    #[arg(
        long,
        value_name = "N",
        default_value_t = CalcConfig::DEFAULT_CAPACITY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=CalcConfig::MAX_CAPACITY as u64)
    )]
    capacity: usize,

    /// Longest accepted expression in bytes, at most 8192
    #[arg(
        long = "max-len",
        value_name = "BYTES",
        default_value_t = CalcConfig::DEFAULT_MAX_INPUT_LEN,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=CalcConfig::MAX_INPUT_LEN as u64)
    )]
    max_len: usize,

    /// Expressions to evaluate (starts an interactive session if none)
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.tree {
            OutputMode::Tree
        } else {
            OutputMode::Value
        }
    }

    fn config(&self) -> CalcConfig {
        CalcConfig {
            capacity: self.capacity,
            max_input_len: self.max_len,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Render one expression; `Err` carries the line to print for a failure.
fn render(calc: &mut Calculator, input: &str, mode: OutputMode) -> Result<String, String> {
    match mode {
        OutputMode::Value => calc
            .evaluate(input)
            .map(|v| v.to_string())
            .map_err(|e| format!("error: {e}")),
        OutputMode::Tree => calc
            .parse(input)
            .map(|tree| tree.to_string())
            .map_err(|e| format!("error: {e}")),
        OutputMode::Json => {
            let result = calc.evaluate(input);
            let report = JsonReport {
                input,
                value: result.as_ref().ok().copied(),
                error: result.as_ref().err().map(ToString::to_string),
            };
            let line = serde_json::to_string(&report).map_err(|e| format!("error: {e}"))?;
            if result.is_ok() {
                Ok(line)
            } else {
                Err(line)
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_repl(calc: &mut Calculator, mode: OutputMode) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    let mut rl = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                match render(calc, trimmed, mode) {
                    Ok(out) | Err(out) => println!("{out}"),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!("exit");
                return 0;
            }
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = cli.output_mode();
    let mut calc = Calculator::with_config(cli.config());
    if cli.expressions.is_empty() {
        return run_repl(&mut calc, mode);
    }

    let mut rc = 0;
    for input in &cli.expressions {
        match render(&mut calc, input, mode) {
            Ok(out) => println!("{out}"),
            Err(out) => {
                println!("{out}");
                rc = 1;
            }
        }
    }
    rc
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["wcalc", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3, "verbose count should be 3 for -vvv");
        assert!(cli.expressions.is_empty());
    }

    #[test]
    fn cli_parses_expressions_and_limits() {
        let cli =
            Cli::try_parse_from(["wcalc", "--capacity", "32", "--max-len", "64", "1+1", "2*2"])
                .unwrap();
        assert_eq!(cli.expressions, vec!["1+1".to_string(), "2*2".to_string()]);
        assert_eq!(
            cli.config(),
            CalcConfig {
                capacity: 32,
                max_input_len: 64
            }
        );
        assert_eq!(cli.output_mode(), OutputMode::Value);
    }

    #[test]
    fn cli_rejects_limits_above_maximum() {
        assert!(Cli::try_parse_from(["wcalc", "--capacity", "60010", "1"]).is_err());
        assert!(Cli::try_parse_from(["wcalc", "--max-len", "60010", "1"]).is_err());
        assert!(Cli::try_parse_from(["wcalc", "--capacity", "0", "1"]).is_err());

        let cli = Cli::try_parse_from(["wcalc", "--capacity", "16384", "--max-len", "8192"])
            .unwrap();
        assert_eq!(
            cli.config(),
            CalcConfig {
                capacity: CalcConfig::MAX_CAPACITY,
                max_input_len: CalcConfig::MAX_INPUT_LEN,
            }
        );
    }

    #[test]
    fn cli_rejects_tree_with_json() {
        assert!(Cli::try_parse_from(["wcalc", "--tree", "--json", "1"]).is_err());
    }

    #[test]
    fn render_value_and_error() {
        let mut calc = Calculator::new();
        assert_eq!(render(&mut calc, "2^10", OutputMode::Value), Ok("1024".to_string()));
        assert_eq!(
            render(&mut calc, "2 3", OutputMode::Value),
            Err("error: Too many operands".to_string())
        );
    }

    #[test]
    fn render_tree() {
        let mut calc = Calculator::new();
        assert_eq!(
            render(&mut calc, "2-3-4", OutputMode::Tree),
            Ok("(- (- 2 3) 4)".to_string())
        );
    }

    #[test]
    fn render_json() {
        let mut calc = Calculator::new();
        assert_eq!(
            render(&mut calc, "1+1", OutputMode::Json),
            Ok(r#"{"input":"1+1","value":2.0}"#.to_string())
        );
        assert_eq!(
            render(&mut calc, "1+", OutputMode::Json),
            Err(r#"{"input":"1+","error":"Not enough operands"}"#.to_string())
        );
    }
}
