use clap::Parser;
use directories::ProjectDirs;
use knolib::api::LibraryApi;
use knolib::error::{KnolibError, Result};
use knolib::store::DATA_FILE_NAME;
use std::path::PathBuf;
use uuid::Uuid;

mod args;
mod cli;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let parsed = Cli::parse();
    let mut api = LibraryApi::open(resolve_data_file(&parsed))?;

    match parsed.command {
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::Show { id }) => handle_show(&api, id),
        Some(Commands::Search { term }) => handle_search(&api, &term),
        Some(Commands::Add { title, parent }) => handle_add(&mut api, &title, parent),
        Some(Commands::Rm { id }) => handle_rm(&mut api, id),
        Some(Commands::AddExample {
            topic,
            name,
            content,
            language,
        }) => handle_add_example(&mut api, topic, &name, &content, &language),
        Some(Commands::Backup { path }) => handle_backup(&api, path),
        Some(Commands::Export { path }) => handle_export(&api, &path),
        Some(Commands::Import { path }) => handle_import(&mut api, &path),
        Some(Commands::Path) => {
            println!("{}", api.data_file_path().display());
            Ok(())
        }
    }
}

fn resolve_data_file(parsed: &Cli) -> PathBuf {
    if let Some(file) = &parsed.file {
        return file.clone();
    }
    if let Ok(file) = std::env::var("KNOLIB_DATA_FILE") {
        return PathBuf::from(file);
    }
    let proj_dirs =
        ProjectDirs::from("com", "knolib", "knolib").expect("Could not determine data dir");
    proj_dirs.data_dir().join(DATA_FILE_NAME)
}

fn handle_list(api: &LibraryApi) -> Result<()> {
    cli::print_tree(api.library()?);
    Ok(())
}

fn handle_show(api: &LibraryApi, id: Uuid) -> Result<()> {
    let topic = api
        .find_topic(id)?
        .ok_or(KnolibError::TopicNotFound(id))?;
    let breadcrumb = api.breadcrumb(id)?;
    let examples = api.example_summaries(id)?;
    cli::print_topic(topic, &breadcrumb, &examples);
    Ok(())
}

fn handle_search(api: &LibraryApi, term: &str) -> Result<()> {
    cli::print_hits(&api.search(term)?);
    Ok(())
}

fn handle_add(api: &mut LibraryApi, title: &str, parent: Option<Uuid>) -> Result<()> {
    let id = api.add_topic(title, parent)?;
    api.save()?;
    cli::success(&format!("Added \"{}\" ({})", title, id));
    Ok(())
}

fn handle_rm(api: &mut LibraryApi, id: Uuid) -> Result<()> {
    if api.delete_topic(id)? {
        api.save()?;
        cli::success("Deleted.");
    } else {
        println!("Topic not found.");
    }
    Ok(())
}

fn handle_add_example(
    api: &mut LibraryApi,
    topic: Uuid,
    name: &str,
    content: &str,
    language: &str,
) -> Result<()> {
    let id = api.add_example(topic, name, content, language)?;
    api.save()?;
    cli::success(&format!("Added example \"{}\" ({})", name, id));
    Ok(())
}

fn handle_backup(api: &LibraryApi, path: Option<PathBuf>) -> Result<()> {
    let written = api.create_backup(path.as_deref())?;
    cli::success(&format!("Backup written to {}", written.display()));
    Ok(())
}

fn handle_export(api: &LibraryApi, path: &std::path::Path) -> Result<()> {
    api.export_to_file(path)?;
    cli::success(&format!("Exported to {}", path.display()));
    Ok(())
}

fn handle_import(api: &mut LibraryApi, path: &std::path::Path) -> Result<()> {
    api.import_from_file(path)?;
    cli::success(&format!("Imported from {}", path.display()));
    Ok(())
}
