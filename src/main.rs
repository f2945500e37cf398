mod archive;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod templates;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::archive::{archive_inputs, archive_reports};
use crate::input::discover_class_files;
use crate::model::thresholds::RoutingTable;
use crate::pipeline::RunError;
use crate::pipeline::batch::{ClassOutcome, run_batch};
use crate::pipeline::rules::CommentEngine;
use crate::report::json::{build_summary, write_summary};
use crate::report::tsv::TsvReportWriter;
use crate::templates::loader::load_templates;

#[derive(Parser, Debug)]
#[command(
    name = "subject-comments",
    version,
    about = "Generate templated subject comments from class mark sheets"
)]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate comments for every class file in a directory.
    Run(RunArgs),
    /// Load and validate the comment templates without processing classes.
    Check {
        #[arg(long)]
        comments: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Directory holding one CSV file per class.
    #[arg(long)]
    input: PathBuf,
    /// Directory holding the comment template files.
    #[arg(long)]
    comments: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Seed for template selection; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Move processed class files here after the run.
    #[arg(long)]
    archive: Option<PathBuf>,
    #[arg(long, default_value = "ENG")]
    subject_marker: String,
    #[arg(long, default_value = "HL")]
    home_marker: String,
    #[arg(long, default_value = "FAL")]
    additional_marker: String,
}

impl RunArgs {
    fn routing(&self) -> RoutingTable {
        RoutingTable {
            subject_marker: self.subject_marker.clone(),
            home_marker: self.home_marker.clone(),
            additional_marker: self.additional_marker.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), RunError> {
    match command {
        Command::Run(args) => run_comments(&args).map(|_| ()),
        Command::Check { comments } => check_templates(&comments),
    }
}

fn check_templates(comments: &Path) -> Result<(), RunError> {
    let store = load_templates(comments)?;
    let count = store.lint()?;
    for set in store.sets() {
        tracing::info!(
            file = crate::templates::defs::file_name_for(set.key),
            templates = set.len(),
            "template set ok"
        );
    }
    tracing::info!(dir = %comments.display(), templates = count, "templates valid");
    Ok(())
}

fn run_comments(args: &RunArgs) -> Result<Vec<ClassOutcome>, RunError> {
    let store = load_templates(&args.comments)?;
    let count = store.lint()?;
    tracing::info!(dir = %args.comments.display(), templates = count, "templates loaded");

    let files = discover_class_files(&args.input)?;
    if files.is_empty() {
        tracing::warn!(dir = %args.input.display(), "no class files found");
    } else {
        tracing::info!(count = files.len(), "discovered class files");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "template selection seed");
    let mut rng = StdRng::seed_from_u64(seed);

    let engine = CommentEngine::new(&store);
    let routing = args.routing();
    let mut writer = TsvReportWriter::new(&args.out);
    let outcomes = run_batch(&files, &engine, &routing, &mut rng, &mut writer)?;
    tracing::info!(
        classes = writer.written().len(),
        out = %args.out.display(),
        "class reports written"
    );

    let summary = build_summary(seed, &outcomes);
    let summary_path = write_summary(&summary, &args.out).map_err(|source| RunError::Output {
        class: "summary".to_string(),
        source,
    })?;
    tracing::info!(path = %summary_path.display(), "summary written");

    if let Some(archive_dir) = &args.archive {
        let processed: Vec<PathBuf> = outcomes
            .iter()
            .filter(|o| o.failure.is_none())
            .map(|o| o.path.clone())
            .collect();
        archive_inputs(&processed, archive_dir).map_err(RunError::Archive)?;
        let report_dirs: Vec<PathBuf> = writer
            .written()
            .iter()
            .filter_map(|p| p.parent().map(Path::to_path_buf))
            .collect();
        archive_reports(&report_dirs, archive_dir).map_err(RunError::Archive)?;
    }

    Ok(outcomes)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
