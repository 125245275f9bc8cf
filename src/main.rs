// crepe CLI

use clap::{Args, Parser as ClapParser, Subcommand};
use console::style;
use crepe::interpreter::{InputSource, ScriptedInput, StdinInput};
use crepe::lexer_tokenizer::Token;
use crepe::pipeline::{
    self, AstResponse, CompileError, Compilation, ErrorResponse, OutputResponse, TokensResponse,
};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CREPE_LOG";

#[derive(ClapParser)]
#[command(name = "crepe", version, about = "Lexer, parser, intermediate code and interpreter for the crêpe teaching language")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    output: OutputOptions,
}

#[derive(Args)]
struct OutputOptions {
    /// Print the JSON response envelope instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Hide the pipeline progress bar
    #[arg(long, global = true)]
    no_progress: bool,

    /// More log output on stderr (-v debug, -vv trace); CREPE_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print every token as a record
    Lex { file: Option<PathBuf> },
    /// Print the abstract syntax tree
    Parse { file: Option<PathBuf> },
    /// Print the three-address code and the target listing
    Translate { file: Option<PathBuf> },
    /// Run the program and print its output
    Run {
        file: Option<PathBuf>,
        /// Line handed to `lire`, repeatable; without it `lire` reads stdin
        #[arg(long = "input", value_name = "VALUE")]
        inputs: Vec<String>,
    },
    /// Lex and parse only
    Check { file: Option<PathBuf> },
}

impl Command {
    fn file(&self) -> Option<&Path> {
        match self {
            Command::Lex { file }
            | Command::Parse { file }
            | Command::Translate { file }
            | Command::Run { file, .. }
            | Command::Check { file } => file.as_deref(),
        }
    }

    fn pipeline(&self) -> &'static [&'static str] {
        match self {
            Command::Lex { .. } => &["Lexer"],
            Command::Parse { .. } | Command::Check { .. } => &["Lexer", "Parser"],
            Command::Translate { .. } => &["Lexer", "Parser", "IR Codegen"],
            Command::Run { .. } => &["Lexer", "Parser", "Interpreter"],
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.output.verbose);

    let source = match read_source(cli.command.file()) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "could not read source");
            eprintln!(
                "{} could not read source file: {}",
                style("✘").red().bold(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    let progress = Progress::new(cli.command.pipeline(), cli.output.json || cli.output.no_progress);
    match run_command(&cli.command, &source, &cli.output, &progress) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            progress.finish();
            error!(stage = e.stage(), error = %e, "pipeline failed");
            if cli.output.json {
                print_json(&ErrorResponse::from(&e));
            } else {
                print_error(&e, &source);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// A file, or stdin up to the first blank line; later stdin lines stay for `lire`
fn read_source(file: Option<&Path>) -> io::Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path);
    }
    let stdin = io::stdin();
    let mut lines = Vec::new();
    let mut handle = stdin.lock();
    loop {
        let mut line = String::new();
        if handle.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn run_command(
    command: &Command,
    source: &str,
    options: &OutputOptions,
    progress: &Progress,
) -> Result<(), CompileError> {
    info!(command = command.pipeline().last().copied().unwrap_or(""), "pipeline start");
    let tokens = pipeline::tokenize(source)?;
    progress.advance();

    if let Command::Lex { .. } = command {
        progress.finish();
        print_tokens(&tokens, options.json);
        return Ok(());
    }

    let program = pipeline::parse(&tokens)?;
    progress.advance();

    match command {
        Command::Parse { .. } => {
            progress.finish();
            print_json(&AstResponse { ast: &program });
        }
        Command::Check { .. } => {
            progress.finish();
            if options.json {
                print_json(&AstResponse { ast: &program });
            } else {
                println!("{} Syntax check passed successfully!", style("✔").green().bold());
            }
        }
        Command::Translate { .. } => {
            let intermediate_code = pipeline::translate(&program);
            let target_code = pipeline::generate_target_code(&intermediate_code);
            progress.advance();
            progress.finish();
            let compilation = Compilation {
                intermediate_code,
                target_code,
            };
            if options.json {
                print_json(&compilation);
            } else {
                print_compilation(&compilation);
            }
        }
        Command::Run { inputs, .. } => {
            progress.finish();
            let mut scripted;
            let mut stdin_input;
            let input: &mut dyn InputSource = if inputs.is_empty() {
                stdin_input = StdinInput;
                &mut stdin_input
            } else {
                scripted = ScriptedInput::new(inputs.iter().cloned());
                &mut scripted
            };
            let output = pipeline::interpret_with_input(&program, input)?;
            if options.json {
                print_json(&OutputResponse { output: &output });
            } else if !output.is_empty() {
                println!("{}", output);
            }
        }
        Command::Lex { .. } => {}
    }
    Ok(())
}

fn print_tokens(tokens: &[Token], json: bool) {
    if json {
        print_json(&TokensResponse { tokens });
        return;
    }
    for token in tokens {
        match serde_json::to_string(token) {
            Ok(line) => println!("{}", line),
            Err(e) => error!(error = %e, "could not serialize token"),
        }
    }
}

fn print_compilation(compilation: &Compilation) {
    println!("{}", style("Intermediate code").cyan().bold());
    println!(
        "{}",
        style(format!("{:<9} {:<10} {:<10} {}", "OP", "ARG1", "ARG2", "RESULT")).dim()
    );
    for instr in &compilation.intermediate_code {
        println!("{}", instr);
    }
    println!();
    println!("{}", style("Target code").cyan().bold());
    println!("{}", compilation.target_code);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => error!(error = %e, "could not serialize response"),
    }
}

fn print_error(e: &CompileError, source: &str) {
    eprintln!(
        "\n{} Stage: {}",
        style("✘").red().bold(),
        style(e.stage()).red().bold()
    );
    eprintln!("{} {}", style("error:").red().bold(), e);

    if let Some(line_num) = e.line() {
        if let Some(line_text) = source.lines().nth(line_num.saturating_sub(1)) {
            eprintln!("{:>4} | {}", line_num, style(line_text).dim());
            if let CompileError::Syntax(syntax) = e {
                if let Some(column) = syntax.column {
                    eprintln!("     | {}{}", " ".repeat(column), style("^").red().bold());
                }
            }
        }
    }

    if let CompileError::Syntax(syntax) = e {
        if let Some(suggestion) = &syntax.suggestion {
            eprintln!("{} {}", style("Hint:").cyan().bold(), style(suggestion).cyan());
        }
    }
}

// Stage progress on stderr, drawn only when stderr is a terminal
struct Progress {
    bar: ProgressBar,
    pipeline: &'static [&'static str],
}

impl Progress {
    fn new(pipeline: &'static [&'static str], hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::with_draw_target(Some(pipeline.len() as u64), ProgressDrawTarget::stderr())
        };
        let style = ProgressStyle::with_template("PIPELINE [{bar:40.green}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━━-");
        bar.set_style(style);
        bar.set_message(pipeline.first().copied().unwrap_or("Done"));
        Progress { bar, pipeline }
    }

    fn advance(&self) {
        self.bar.inc(1);
        let stage = self.bar.position() as usize;
        self.bar
            .set_message(self.pipeline.get(stage).copied().unwrap_or("Done"));
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
