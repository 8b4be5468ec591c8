use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod data;
mod gui;
mod sections;
mod settings;
mod state;
mod theme;

use sections::{Section, SECTIONS};
use settings::{default_base_path, ensure_base_folders, load_or_init_settings, save_settings};

#[derive(Parser, Debug)]
#[command(
    name = "mt-portal",
    version,
    about = "Portal Media Técnica shell (offline, single window)"
)]
struct CliArgs {
    /// Choose GUI (default) or a plain-text dump of the portal data
    #[arg(long, value_enum, default_value = "gui")]
    mode: RunMode,
    /// Override data base path (defaults to ./data next to the exe)
    #[arg(long)]
    base_path: Option<PathBuf>,
    /// Section id to open on launch (e.g. "forum")
    #[arg(long)]
    section: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RunMode {
    Gui,
    Cli,
}

fn main() {
    let args = CliArgs::parse();
    let base_path = args.base_path.unwrap_or_else(default_base_path);

    if let Err(e) = ensure_base_folders(&base_path) {
        eprintln!(
            "Failed to create base folders at {}: {}",
            base_path.display(),
            e
        );
        return;
    }

    let mut settings = match load_or_init_settings(&base_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            return;
        }
    };

    if let Some(id) = &args.section {
        if Section::from_id(id).is_some() {
            settings.ui.start_section = Some(id.clone());
        } else {
            eprintln!("[portal] Unknown section id '{}', keeping the default", id);
        }
    }

    // Persist before launching; the GUI saves its own preference changes.
    if let Err(e) = save_settings(&settings, &base_path) {
        eprintln!("Could not save settings: {}", e);
    }

    match args.mode {
        RunMode::Gui => {
            if let Err(e) = gui::launch_gui(base_path, settings) {
                eprintln!("Failed to start GUI: {}", e);
            }
        }
        RunMode::Cli => run_cli(),
    }
}

fn run_cli() {
    println!("Portal Media Técnica");
    println!("Programación de Software (10-1, 11-1) | Preprensa Digital (10-2, 11-2)");
    println!();

    println!("Secciones:");
    for info in &SECTIONS {
        let note = if info.section.has_panel() {
            ""
        } else {
            " (en desarrollo)"
        };
        println!("  {:<14} {}{}", info.id, info.title, note);
    }

    println!();
    println!("Horario (muestra):");
    for event in &data::SCHEDULE_EVENTS {
        println!(
            "  {:<18} {} [{} | {} | {}]",
            event.time,
            event.title,
            event.course,
            event.room,
            event.kind.label()
        );
    }

    println!();
    println!("Foro (muestra):");
    for post in &data::FORUM_POSTS {
        println!(
            "  [{}] {} - {} ({} respuestas)",
            post.course, post.title, post.author, post.replies
        );
    }
}
