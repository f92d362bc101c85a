//! # CLI Layer
//!
//! One client of the kennel library. This is the only place that reads
//! arguments, talks to stdin/stdout and decides exit codes.
//!
//! ## Two ways in
//!
//! - **One-shot subcommands** (`kennel add ...`, `kennel list`, ...) load the
//!   registry file if there is one, run a single API call, and save the file
//!   again when that call changed something. The id counter is not stored,
//!   so each run starts it at the largest saved id plus one: deleting the
//!   animal with the highest id and then adding another reissues that id.
//!   Lower ids are never handed out again.
//! - **The interactive menu** (`kennel` or `kennel shell`) starts empty and
//!   loads or saves only when asked.
//!
//! ## Structure
//!
//! - `run()`: parsing and dispatch (called by `main.rs`)
//! - `init_context()`: builds `AppContext` from the data directory and config
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::render::{
    print_messages, render_animal_list, render_commands, render_config, render_summary,
};
use super::setup::{init_logging, Cli, Commands};
use super::shell::Shell;
use chrono::NaiveDate;
use clap::Parser;
use kennel::api::{CmdMessage, CmdResult, ConfigAction, KennelApi};
use kennel::config::Locale;
use kennel::error::{KennelError, Result};
use kennel::init::initialize;
use kennel::model::{parse_commands, AnimalKind, NewAnimal};
use kennel::registry::AnimalUpdate;
use kennel::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

struct AppContext {
    api: KennelApi<FileStore>,
    locale: Locale,
    today: NaiveDate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(cli.file)?;

    match cli.command {
        Some(Commands::Add {
            kind,
            name,
            birth_date,
            commands,
            force,
        }) => handle_add(&mut ctx, &kind, name, birth_date, &commands, force),
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Filter { kind }) => handle_filter(&mut ctx, &kind),
        Some(Commands::Summary) => handle_summary(&mut ctx),
        Some(Commands::ListCommands { id }) => handle_list_commands(&mut ctx, id),
        Some(Commands::Train { id, command }) => handle_train(&mut ctx, id, command.join(" ")),
        Some(Commands::Edit {
            id,
            name,
            birth_date,
            commands,
        }) => handle_edit(&mut ctx, id, name, birth_date, &commands),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

fn init_context(file: Option<PathBuf>) -> Result<AppContext> {
    let context = initialize(file)?;
    Ok(AppContext {
        api: context.api,
        locale: context.config.locale,
        today: chrono::Local::now().date_naive(),
    })
}

/// Loads the saved registry, runs `call`, and writes the registry back if
/// the call changed anything.
fn with_registry<F>(ctx: &mut AppContext, call: F) -> Result<CmdResult>
where
    F: FnOnce(&mut KennelApi<FileStore>) -> Result<CmdResult>,
{
    ctx.api.load_if_present()?;
    let result = call(&mut ctx.api)?;
    if result.is_mutation() {
        ctx.api.save()?;
    }
    Ok(result)
}

fn handle_add(
    ctx: &mut AppContext,
    kind: &str,
    name: String,
    birth_date: NaiveDate,
    commands: &str,
    force: bool,
) -> Result<()> {
    let kind = AnimalKind::from_str(kind)?;
    let new = NewAnimal::new(kind, name, birth_date).with_commands(parse_commands(commands));

    match with_registry(ctx, |api| api.add_animal(new, force)) {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e @ KennelError::DuplicateFound(_)) => {
            print_messages(&[CmdMessage::warning(
                "Run again with --force to register it anyway.",
            )]);
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = with_registry(ctx, |api| api.list_by_birth_date())?;
    print!(
        "{}",
        render_animal_list(&result.listed_animals, ctx.today, ctx.locale)
    );
    Ok(())
}

fn handle_filter(ctx: &mut AppContext, kind: &str) -> Result<()> {
    let kind = AnimalKind::from_str(kind)?;
    let result = with_registry(ctx, |api| api.filter_by_kind(kind))?;
    print!(
        "{}",
        render_animal_list(&result.listed_animals, ctx.today, ctx.locale)
    );
    Ok(())
}

fn handle_summary(ctx: &mut AppContext) -> Result<()> {
    let result = with_registry(ctx, |api| api.summary())?;
    let counts = result.counts.unwrap_or_default();
    print!(
        "{}",
        render_summary(&counts, &result.listed_animals, ctx.today, ctx.locale)
    );
    Ok(())
}

fn handle_list_commands(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = with_registry(ctx, |api| api.list_commands(id))?;
    print!("{}", render_commands(&result.commands, ctx.locale));
    Ok(())
}

fn handle_train(ctx: &mut AppContext, id: u64, command: String) -> Result<()> {
    let result = with_registry(ctx, |api| api.train(id, &command))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: u64,
    name: String,
    birth_date: NaiveDate,
    commands: &str,
) -> Result<()> {
    let update = AnimalUpdate::new(name, birth_date, parse_commands(commands));
    let result = with_registry(ctx, |api| api.edit_animal(id, update))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = with_registry(ctx, |api| api.delete_animal(id))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(
        &mut ctx.api,
        stdin.lock(),
        stdout.lock(),
        ctx.locale,
        ctx.today,
    )
    .run()
}
