//! Command-line interface implementation for vitae.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::template::TemplateCategory;

/// Command-line arguments structure for vitae.
#[derive(Parser, Debug)]
#[command(author, version, about = "vitae: assemble HTML resumes from templates", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble a template against resume data
    Render(RenderArgs),
    /// List the templates of a library directory
    List(ListArgs),
    /// Print the built-in sample resume as JSON
    Sample,
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Template file, or a library key when --library is given
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Resume data file (JSON or YAML), `-` for stdin.
    /// Defaults to the built-in sample resume.
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,

    /// Template library directory used to resolve TEMPLATE by key
    #[arg(short, long, value_name = "DIR")]
    pub library: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Wrap the resume in a standalone HTML page
    #[arg(short, long)]
    pub document: bool,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ListArgs {
    /// Template library directory
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Only templates in this category (repeatable)
    #[arg(short, long = "category", value_name = "CATEGORY")]
    pub categories: Vec<TemplateCategory>,

    /// Only templates carrying this tag (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Glob matched against template keys
    #[arg(short, long, value_name = "GLOB")]
    pub name: Option<String>,

    /// Free-text search over name, description and tags
    #[arg(short, long)]
    pub query: Option<String>,

    /// Hide templates that are not public
    #[arg(long)]
    pub public_only: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if a required argument or the
///   subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
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
