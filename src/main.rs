use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use dumpr::application::{
    init, manage_config::CONFIG_KEYS, resolve_entry, AddEntryService, ConfigService,
    DeleteEntryService, DeleteOutcome, EditEntryService, ExportService, ImportService,
    ListTagsService, SearchEntriesService, SuggestTagsService,
};
use dumpr::cli::{self, Cli, Commands};
use dumpr::domain::{now_ms, transfer::export_filename};
use dumpr::error::Result;
use dumpr::infrastructure::{EditorSession, FileSystemRepository, WorkspaceRepository};
use std::io::Read;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr; `DUMPR_LOG` takes an `EnvFilter` directive.
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("DUMPR_LOG")
        .or_else(|_| EnvFilter::try_new("dumpr=warn"))
        .context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Add { text } => {
            let content = if text.len() == 1 && text[0] == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                text.join(" ")
            };

            let repo = FileSystemRepository::discover()?;
            let entry = AddEntryService::new(repo.store()).execute(&content, now_ms())?;
            println!("Saved {}  {}", entry.short_id(), entry.display_title());
            Ok(())
        }
        Commands::List { query, limit } => {
            let repo = FileSystemRepository::discover()?;
            let results = SearchEntriesService::new(repo.store()).execute(&query.join(" "), limit)?;

            if results.entries.is_empty() {
                println!("{}", cli::empty_message(!results.query.is_empty()));
            } else {
                print!("{}", cli::format_entry_list(&results.entries, now_ms()));
            }
            println!("{}", cli::format_result_status(results.matched));
            Ok(())
        }
        Commands::Show { id } => {
            let repo = FileSystemRepository::discover()?;
            let entry = resolve_entry(&repo.store(), &id)?;
            print!("{}", cli::format_entry_detail(&entry, now_ms()));
            Ok(())
        }
        Commands::Edit { id, content } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = EditEntryService::new(repo.store(), config.autosave_wait());

            let outcome = match content {
                Some(text) => service.replace(&id, &text)?,
                None => {
                    let entry = resolve_entry(&repo.store(), &id)?;
                    let editor = EditorSession::new(config.get_editor());
                    service.run_in_editor(&entry.id, &editor, &repo.edit_buffer_path(&entry.id))?
                }
            };

            if outcome.saves == 0 {
                println!("No changes to {}", outcome.entry.short_id());
            } else {
                println!("{} {}", outcome.state.label(), outcome.entry.short_id());
            }
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let repo = FileSystemRepository::discover()?;
            match DeleteEntryService::new(repo.store()).execute(&id, yes)? {
                DeleteOutcome::Deleted(entry) => {
                    println!("Deleted {}  {}", entry.short_id(), entry.display_title());
                }
                DeleteOutcome::NotConfirmed(entry) => {
                    println!(
                        "Delete this note permanently? {}  {}",
                        entry.short_id(),
                        entry.display_title()
                    );
                    println!("Re-run with --yes to confirm.");
                }
            }
            Ok(())
        }
        Commands::Tags => {
            let repo = FileSystemRepository::discover()?;
            let counts = ListTagsService::new(repo.store()).execute()?;
            println!("{}", cli::format_tag_counts(&counts).trim_end());
            Ok(())
        }
        Commands::Suggest {
            text,
            cursor,
            pick,
            limit,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = SuggestTagsService::new(repo.store());

            if let Some(tag) = pick {
                let (new_text, new_cursor) = service.pick(&text, cursor, &tag);
                println!("{}", new_text);
                eprintln!("cursor: {}", new_cursor);
                return Ok(());
            }

            let limit = match limit {
                Some(n) => n,
                None => repo.load_config()?.suggestion_limit,
            };
            let tags = service.suggest(&text, cursor, limit)?;
            println!("{}", cli::format_suggestions(&tags).trim_end());
            Ok(())
        }
        Commands::Export { output, stdout } => {
            let repo = FileSystemRepository::discover()?;
            let service = ExportService::new(repo.store());

            if stdout {
                println!("{}", service.document(now_ms())?.to_json_pretty()?);
                return Ok(());
            }

            let path = output.unwrap_or_else(|| export_filename(Utc::now().date_naive()).into());
            let count = service.write_to(&path, now_ms())?;
            println!(
                "{}",
                cli::format_export_status(count, &path.display().to_string())
            );
            Ok(())
        }
        Commands::Import { file, yes } => {
            let repo = FileSystemRepository::discover()?;
            if !yes {
                println!(
                    "Import will merge entries from {} into this workspace; newer updates win.",
                    file.display()
                );
                println!("Re-run with --yes to continue.");
                return Ok(());
            }

            let data = std::fs::read(&file)?;
            let report = ImportService::new(repo.store()).execute(&data, now_ms())?;
            println!("{}", cli::format_import_report(&report));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("autosave_ms = {}", config.autosave_ms);
                println!("suggestion_limit = {}", config.suggestion_limit);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: dumpr config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS);
                Ok(())
            }
        }
    }
}
