use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use docmark::annotation::{AnnotationAction, AnnotationEvent};
use docmark::find::{DocumentFind, FindOptions, Page, TextLayerFind, effective_options};
use docmark::panic_handler::initialize_panic_handler;
use docmark::replay::{self, Step};
use docmark::settings;
use docmark::widget::AnnotationToolbar;

/// Horizontal advance and line height used to lay out plain-text pages
const CHAR_ADVANCE: f32 = 6.0;
const LINE_HEIGHT: f32 = 12.0;

#[derive(Parser)]
#[command(name = "docmark", version, about = "Find text and arm annotation modes in paginated documents")]
struct Cli {
    /// Write debug log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a plain-text document (pages separated by form feeds)
    Find {
        file: PathBuf,
        text: String,
        #[arg(long)]
        case_sensitive: bool,
        #[arg(long)]
        whole_words: bool,
        /// Make these find options the defaults in the settings file
        #[arg(long)]
        save: bool,
    },
    /// Replay steps against the annotation toolbar and print its events
    Annotate {
        /// select:<type>, press, release or finish
        #[arg(required = true)]
        steps: Vec<Step>,
        /// Remember the last highlight color in the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    initialize_panic_handler();
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(path).with_context(|| format!("creating log file {path:?}"))?,
        )?;
    }

    info!("Starting docmark");
    settings::load_settings();

    match cli.command {
        Command::Find {
            file,
            text,
            case_sensitive,
            whole_words,
            save,
        } => run_find(&file, &text, case_sensitive, whole_words, save),
        Command::Annotate { steps, save } => run_annotate(&steps, save),
    }
}

fn run_find(
    file: &Path,
    text: &str,
    case_sensitive: bool,
    whole_words: bool,
    save: bool,
) -> Result<()> {
    let content = fs::read_to_string(file).with_context(|| format!("reading {file:?}"))?;
    let backend = TextLayerFind::from_plain_text(&content, CHAR_ADVANCE, LINE_HEIGHT);

    let mut requested = settings::get_find_options();
    if case_sensitive {
        requested |= FindOptions::CASE_SENSITIVE;
    }
    if whole_words {
        requested |= FindOptions::WHOLE_WORDS_ONLY;
    }
    let options = effective_options(&backend, requested);
    if options != requested {
        warn!("Backend ignores {:?}", requested - options);
    }

    let mut total = 0;
    for index in 0..backend.page_count() {
        let page = Page::new(index);
        for rect in backend.find_text_with_options(&page, text, options) {
            println!(
                "page {}: ({:.1}, {:.1})-({:.1}, {:.1})",
                index + 1,
                rect.x1,
                rect.y1,
                rect.x2,
                rect.y2
            );
            total += 1;
        }
    }

    info!("Found {total} matches for {text:?} in {file:?}");
    if total == 0 {
        println!("No matches");
    }

    if save {
        settings::set_find_options(requested);
        settings::save_settings();
    }
    Ok(())
}

fn run_annotate(steps: &[Step], save: bool) -> Result<()> {
    let mut action = AnnotationAction::with_last_used_highlight(settings::get_last_used_highlight());

    for (step, events) in replay::run(&mut action, steps) {
        println!("{step}");
        for event in events {
            match event {
                AnnotationEvent::Activated => println!("  activated"),
                AnnotationEvent::CancelAddAnnot => println!("  cancel-add-annot"),
                AnnotationEvent::BeginAddAnnot(s) => println!(
                    "  begin-add-annot {:?} {:?} {:?}",
                    s.annot_type, s.markup, s.color
                ),
            }
        }
    }
    println!("state: {:?}", action.state());
    println!("toolbar: [{}]", AnnotationToolbar::new(&action).to_plain_string());

    if save {
        settings::set_last_used_highlight(action.last_used_highlight_color());
        settings::save_settings();
    }
    Ok(())
}
