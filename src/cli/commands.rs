//! Command dispatch: builds the tree and runs the selected command.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, info, instrument};

use crate::application::services::{SearchOutcome, SearchService};
use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::domain::{Layout, TaggedTree, TreeBuilder};
use crate::exitcode;
use crate::infrastructure::{make_rng, stdin_tags};

/// Run the command selected on the command line, returning the exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    match &cli.command {
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(exitcode::OK)
        }
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Dump) => _dump(&load_settings(cli)?),
        Some(Commands::Tree) => _tree(&load_settings(cli)?),
        Some(Commands::Find { tag }) => _find(&load_settings(cli)?, *tag),
        Some(Commands::Search) | None => _search(&load_settings(cli)?),
    }
}

/// Layered settings with command-line flags applied last.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(text_len) = cli.text_len {
        settings.text_len = text_len;
    }
    if cli.quiet {
        settings.echo_construction = false;
    }
    debug!("load_settings: {:?}", settings);
    Ok(settings)
}

/// Build the standard tree, optionally echoing each node to `echo`.
pub fn build_tree(settings: &Settings, echo: Option<&mut dyn Write>) -> CliResult<TaggedTree> {
    let mut builder = TreeBuilder::new(make_rng(settings.seed))
        .text_len(settings.text_len)
        .unique_tags(settings.unique_tags);
    if let Some(sink) = echo {
        builder = builder.observer(sink);
    }
    let tree = builder
        .build(&Layout::standard())
        .map_err(ApplicationError::from)?;
    info!("built tree: {} nodes, depth {}", tree.len(), tree.depth());
    Ok(tree)
}

#[instrument(skip_all)]
fn _search(settings: &Settings) -> CliResult<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let tree = if settings.echo_construction {
        build_tree(settings, Some(&mut out as &mut dyn Write))?
    } else {
        build_tree(settings, None)?
    };

    let service = SearchService::new(settings.sentinel);
    let summary = service.run(&tree, &mut stdin_tags(), &mut out)?;
    info!(
        "search finished: {} queries, {} hits, {} misses",
        summary.queries, summary.hits, summary.misses
    );
    Ok(exitcode::OK)
}

#[instrument(skip_all)]
fn _dump(settings: &Settings) -> CliResult<i32> {
    let tree = build_tree(settings, None)?;
    let stdout = io::stdout();
    tree.render_all(&mut stdout.lock())
        .with_context("write tree dump")?;
    Ok(exitcode::OK)
}

#[instrument(skip_all)]
fn _tree(settings: &Settings) -> CliResult<i32> {
    let tree = build_tree(settings, None)?;
    output::header(&format!("{} nodes, depth {}", tree.len(), tree.depth()));
    print!("{}", tree.to_display_tree());
    Ok(exitcode::OK)
}

#[instrument(skip(settings))]
fn _find(settings: &Settings, tag: char) -> CliResult<i32> {
    let tree = build_tree(settings, None)?;
    let stdout = io::stdout();
    let outcome = SearchService::new(settings.sentinel).lookup(&tree, tag, &mut stdout.lock())?;
    match outcome {
        SearchOutcome::Found(_) => Ok(exitcode::OK),
        SearchOutcome::NotFound(_) => Ok(exitcode::NOT_FOUND),
    }
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::note("no config directory available"),
        },
    }
    Ok(exitcode::OK)
}
