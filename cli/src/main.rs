//! marktypist CLI - Markdown and Typst conversion tool

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use marktypist::{
    convert_file_with_options, detect_format_from_path, ConvertOptions, JsonFormat, Marktypist,
    OutputFormat, ParseOptions,
};

#[derive(Parser)]
#[command(name = "marktypist")]
#[command(version)]
#[command(about = "Convert between Markdown and Typst", long_about = None)]
struct Cli {
    /// Input file (.md or .typ)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Markdown to Typst or Typst to Markdown
    Convert {
        /// Input file (.md or .typ)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Target format (inferred from the output extension, else the other language)
        #[arg(short, long, value_enum)]
        to: Option<Target>,

        /// Treat Markdown tables as plain paragraphs
        #[arg(long)]
        no_tables: bool,

        /// Join soft line breaks with a space
        #[arg(long)]
        join_lines: bool,
    },

    /// Dump the parsed document model as JSON
    Json {
        /// Input file (.md or .typ)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input file (.md or .typ)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    /// Markdown
    #[value(alias = "markdown")]
    Md,
    /// Typst
    Typst,
    /// JSON dump of the document model
    Json,
}

impl From<Target> for OutputFormat {
    fn from(target: Target) -> Self {
        match target {
            Target::Md => OutputFormat::Markdown,
            Target::Typst => OutputFormat::Typst,
            Target::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            to,
            no_tables,
            join_lines,
        }) => cmd_convert(&input, output.as_deref(), to, no_tables, join_lines),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), None, false, false)
            } else {
                println!("{}", "Usage: marktypist <FILE> [OUTPUT]".yellow());
                println!("       marktypist --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Pick the output format: explicit flag first, then the output extension.
fn infer_target(to: Option<Target>, output: Option<&Path>) -> Option<OutputFormat> {
    to.map(OutputFormat::from).or_else(|| {
        output
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .and_then(OutputFormat::from_extension)
    })
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    to: Option<Target>,
    no_tables: bool,
    join_lines: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parse_options = ParseOptions::new()
        .with_tables(!no_tables)
        .with_line_breaks(!join_lines);
    let mut options = ConvertOptions::new().with_parse_options(parse_options);
    if let Some(target) = infer_target(to, output) {
        options = options.with_format(target);
    }
    log::debug!("Requested output format: {:?}", options.output_format);

    let name = input.file_name().unwrap_or_default().to_string_lossy();
    eprintln!("{} {}...", "Converting".cyan(), name);

    match convert_file_with_options(input, output, &options)? {
        Some(content) => println!("{}", content),
        None => {
            if let Some(path) = output {
                eprintln!("{} {}", "Saved to".green(), path.display());
            }
        }
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = Marktypist::new().parse_file(input)?.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let doc = Marktypist::new().parse_file(input)?.into_document();

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for block in &doc.content {
        *kinds.entry(block.kind_name()).or_default() += 1;
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{:<12} {}", "File:".bold(), input.display());
    println!("{:<12} {}", "Format:".bold(), format);
    println!("{:<12} {}", "Converts to:".bold(), format.counterpart());
    println!("{:<12} {}", "Blocks:".bold(), doc.block_count());
    for (kind, count) in &kinds {
        println!("  {} {}: {}", "-".dimmed(), kind, count);
    }
    println!(
        "{:<12} {}",
        "Characters:".bold(),
        doc.plain_text().chars().count()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "marktypist".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown and Typst conversion tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_target_wins() {
        assert_eq!(
            infer_target(Some(Target::Json), Some(Path::new("out.typ"))),
            Some(OutputFormat::Json)
        );
    }

    #[test]
    fn test_target_from_output_extension() {
        assert_eq!(
            infer_target(None, Some(Path::new("out.md"))),
            Some(OutputFormat::Markdown)
        );
        assert_eq!(infer_target(None, Some(Path::new("out.txt"))), None);
        assert_eq!(infer_target(None, None), None);
    }

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::parse_from(["marktypist", "convert", "a.md", "-o", "b.typ", "-t", "typst"]);
        match cli.command {
            Some(Commands::Convert { input, output, to, .. }) => {
                assert_eq!(input, PathBuf::from("a.md"));
                assert_eq!(output, Some(PathBuf::from("b.typ")));
                assert_eq!(to, Some(Target::Typst));
            }
            _ => panic!("expected convert command"),
        }
    }
}
