//! XML documentation example-code extractor CLI

use clap::Parser;
use colored::Colorize;
use std::process;

use xmldoc_examples::ExampleCodeParser;

#[derive(Parser)]
#[command(name = "xmldoc-examples")]
#[command(about = "Extract example code from XML documentation files")]
#[command(version)]
struct Cli {
    /// Glob pattern selecting documentation XML files
    pattern: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Quiet mode (suppress summary output)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let parser = ExampleCodeParser::new();
    let examples = match parser.parse_files(&cli.pattern) {
        Ok(examples) => examples,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            process::exit(1);
        }
    };

    match cli.format.to_lowercase().as_str() {
        "text" => {
            for example in &examples {
                let name = example.member_name.as_deref().unwrap_or("<unnamed>");
                println!("{}", name.cyan().bold());
                println!("{}", example.code);
                println!();
            }
        }
        "json" => match serde_json::to_string_pretty(&examples) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                process::exit(1);
            }
        },
        _ => {
            eprintln!(
                "{}: Unknown format '{}'. Use text or json.",
                "Error".red().bold(),
                cli.format
            );
            process::exit(1);
        }
    }

    if !cli.quiet {
        eprintln!(
            "{} Extracted {} example(s) from '{}'",
            "✓".green().bold(),
            examples.len(),
            cli.pattern
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::parse_from(["xmldoc-examples", "docs/*.xml"]);
        assert_eq!(cli.pattern, "docs/*.xml");
        assert_eq!(cli.format, "text");
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_custom_args() {
        let cli = Cli::parse_from(["xmldoc-examples", "*.xml", "-f", "json", "-q"]);
        assert_eq!(cli.pattern, "*.xml");
        assert_eq!(cli.format, "json");
        assert!(cli.quiet);
    }
}
