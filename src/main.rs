//! notefill's main application entry point.
//! Handles command-line argument parsing, answer collection and output of the
//! filled template.

use std::path::Path;

use notefill::{
    answers::{load_answers, AnswerSource},
    cli::{get_args, Args},
    config::{get_catalog, Catalog},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    parser::split_blocks,
    processor::generate,
    prompt::{collect_answers, DialoguerPrompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn write_output<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(dest_path, content)
        .map_err(|e| Error::OutputError(format!("{}: {e}", dest_path.display())))
}

fn list_templates(catalog: &Catalog) {
    for (key, entry) in catalog.iter() {
        println!("{key}\t{}", entry.name);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template catalog
/// 2. Loads preloaded answers, or prompts for them
/// 3. Renders the selected template
/// 4. Writes the output and reports the subject prefix
fn run(args: Args) -> Result<()> {
    let catalog = get_catalog(args.catalog.as_ref())?;

    if args.list {
        list_templates(&catalog);
        return Ok(());
    }

    let key = args.template.unwrap_or_default();
    let entry = catalog.get(&key)?;

    let answers = match load_answers(AnswerSource::from_args(args.stdin, args.answers))? {
        Some(answers) => answers,
        None => {
            let prompt = if args.editor {
                DialoguerPrompter::multiline()
            } else {
                DialoguerPrompter::new()
            };
            collect_answers(&split_blocks(&entry.source), &prompt)?
        }
    };

    let generated = generate(entry, &answers);

    if let Some(prefix) = &generated.subject_prefix {
        eprintln!("Subject prefix: {prefix}");
    }

    match args.output {
        Some(path) => {
            write_output(&generated.body, &path)?;
            log::debug!("Output written to {}", path.display());
        }
        None => println!("{}", generated.body),
    }

    Ok(())
}
