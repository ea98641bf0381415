use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::io::stdout;
use std::path::PathBuf;
use std::process;

use snipcat_lib::exit_codes::exit;
use snipcat_lib::{Conversion, convert_file, language};

#[derive(Parser)]
#[command(
    name = "snipcat",
    author,
    version,
    about = "Converts annotated code-snippet files into per-language JSON catalogs",
    long_about = None
)]
struct Cli {
    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a snippet file and merge it into `<language>.json`
    Convert {
        /// Path to the snippet file
        input: PathBuf,

        /// Target language; inferred from the file extension or the
        /// header's comment marker when omitted
        language: Option<String>,

        /// Directory the catalog files live in
        #[arg(long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,
    },

    /// List the languages snipcat can infer
    Languages,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (auto-detected from $SHELL
        /// when omitted)
        shell: Option<Shell>,

        /// List available shells
        #[arg(long)]
        list: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Convert {
            ref input,
            ref language,
            ref output_dir,
        } => handle_convert(input, language.as_deref(), output_dir, cli.quiet),
        Commands::Languages => handle_languages(),
        Commands::Completions { shell, list } => handle_completions(shell, list),
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn handle_convert(
    input: &std::path::Path,
    language: Option<&str>,
    output_dir: &std::path::Path,
    quiet: bool,
) -> ! {
    match convert_file(input, language, output_dir) {
        Ok(outcome) => {
            if !quiet {
                print_success(&outcome);
            }
            exit::success();
        }
        Err(err) => {
            eprintln!("{} {err}", "Error:".red().bold());
            process::exit(err.exit_code());
        }
    }
}

fn print_success(outcome: &Conversion) {
    let action = if outcome.created_category {
        format!("into new category `{}`", outcome.category)
    } else {
        format!("into category `{}`", outcome.category)
    };
    println!(
        "{} Added `{}` {} in {}",
        "Success:".green().bold(),
        outcome.title,
        action,
        outcome.output_path.display()
    );
}

fn handle_languages() -> ! {
    println!("Supported languages:");
    for spec in language::LANGUAGES {
        let extensions: Vec<String> = spec.extensions.iter().map(|e| format!(".{e}")).collect();
        println!(
            "  {:<12} marker {:<3} {}",
            spec.name,
            spec.comment_marker,
            extensions.join(", ")
        );
    }
    exit::success();
}

fn handle_completions(shell: Option<Shell>, list: bool) -> ! {
    const AVAILABLE_SHELLS: &[(&str, &str)] = &[
        ("bash", "Bourne Again SHell"),
        ("zsh", "Z shell"),
        ("fish", "Friendly Interactive SHell"),
        ("powershell", "PowerShell"),
        ("elvish", "Elvish shell"),
    ];

    if list {
        println!("Available shells:");
        for (name, description) in AVAILABLE_SHELLS {
            println!("  {name:<12} {description}");
        }
        exit::success();
    }

    let shell = match shell {
        Some(s) => s,
        None => detect_shell_from_env().unwrap_or_else(|| {
            eprintln!(
                "{} Could not detect shell from $SHELL environment variable",
                "Error:".red().bold()
            );
            eprintln!();
            eprintln!("Please specify a shell explicitly, e.g. `snipcat completions bash`,");
            eprintln!("or use --list to see all available shells");
            exit::tool_error();
        }),
    };

    generate(shell, &mut Cli::command(), "snipcat", &mut stdout());
    exit::success();
}

fn detect_shell_from_env() -> Option<Shell> {
    let shell_path = std::env::var("SHELL").ok()?;
    let shell_name = std::path::Path::new(&shell_path).file_name()?.to_str()?;

    match shell_name {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "pwsh" | "powershell" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
