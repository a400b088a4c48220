//! vitae's main application entry point.
//! Handles command-line argument parsing and dispatches to the render, list
//! and sample commands.

use vitae::{
    assembler::assemble,
    cli::{get_args, Command, ListArgs, RenderArgs},
    document::{render_document, MiniJinjaRenderer},
    error::{default_error_handler, Result},
    library::{TemplateFilter, TemplateLibrary},
    loader::{load_data, TemplateSource},
    logger::init_logger,
    output::{ensure_output_file, write_output},
    sample::sample_resume,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let result = match args.command {
        Command::Render(render_args) => render(render_args),
        Command::List(list_args) => list(list_args),
        Command::Sample => sample(),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}

/// Assembles a template against resume data.
///
/// # Flow
/// 1. Checks the output file can be written
/// 2. Loads the template from a file or a library entry
/// 3. Loads the resume data, or falls back to the sample resume
/// 4. Assembles (optionally wrapped in a document) and writes the result
fn render(args: RenderArgs) -> Result<()> {
    let output = args
        .output
        .as_ref()
        .map(|path| ensure_output_file(path, args.force))
        .transpose()?;

    let template = TemplateSource::from_arg(&args.template, args.library.as_deref()).load()?;

    let data = match &args.data {
        Some(path) => load_data(path)?,
        None => {
            log::debug!("No data given, using the sample resume");
            sample_resume()
        }
    };

    let html = if args.document {
        render_document(&MiniJinjaRenderer::new(), &template, &data)?
    } else {
        assemble(&template, &data)
    };

    match output {
        Some(path) => {
            write_output(&html, &path)?;
            println!("Resume written to '{}'.", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

/// Prints the library entries that match the given filters.
fn list(args: ListArgs) -> Result<()> {
    let mut filter = TemplateFilter {
        categories: args.categories,
        tags: args.tags,
        query: args.query,
        public_only: args.public_only,
        ..Default::default()
    };
    if let Some(pattern) = &args.name {
        filter = filter.with_name_pattern(pattern)?;
    }

    let library = TemplateLibrary::discover(&args.dir)?;
    for (key, template) in library.filter(&filter) {
        println!(
            "{key}\t{}\t{}\t{}",
            template.name,
            template.category.label(),
            template.tags.join(", ")
        );
    }
    Ok(())
}

fn sample() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&sample_resume())?);
    Ok(())
}
