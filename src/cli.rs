//! Command-line interface implementation for notefill.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for notefill.
#[derive(Parser, Debug)]
#[command(author, version, about = "notefill: fill reusable note templates", long_about = None)]
pub struct Args {
    /// Key of the template to fill
    #[arg(value_name = "TEMPLATE", required_unless_present = "list")]
    pub template: Option<String>,

    /// Additional catalog file (JSON or YAML) merged over the built-in templates
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Read answers from a JSON file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Read answers as JSON from stdin instead of prompting
    #[arg(short, long)]
    pub stdin: bool,

    /// Type each prompted value in $EDITOR so it may span several lines
    #[arg(short, long)]
    pub editor: bool,

    /// Write the filled template to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// List available templates and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
