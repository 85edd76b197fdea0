//! Command dispatch

use tracing::{debug, instrument};

use crate::application::{render, RenderOptions};
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::{HierarchyPath, ParameterTree};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::ParameterQuery;

/// Message printed when the query returned no parameters.
pub const NOTHING_TO_SHOW: &str = "Nothing to show.";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = resolve_settings(cli)?;

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let path = cli
        .path
        .clone()
        .ok_or_else(|| CliError::InvalidArgs("--path is required".to_string()))?;
    let container = ServiceContainer::new(settings)?;
    show_tree(&container, path, !cli.no_recursion)
}

/// Load layered settings and apply command line flags on top.
pub fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(region) = &cli.region {
        settings.region = Some(region.clone());
    }
    if let Some(profile) = &cli.profile {
        settings.profile = Some(profile.clone());
    }
    if let Some(identity) = cli.identity {
        settings.identity = identity;
    }
    if cli.details {
        settings.details = true;
    }
    settings.validate()?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// What the tree command prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeOutput {
    NothingToShow,
    Tree(String),
}

/// Render `tree`, or `NothingToShow` when the query matched no parameters.
pub fn tree_output(tree: &ParameterTree, options: &RenderOptions) -> TreeOutput {
    if tree.is_empty() {
        TreeOutput::NothingToShow
    } else {
        TreeOutput::Tree(render(tree, options))
    }
}

/// Query `path` and render the result with the container's settings.
#[instrument(skip(container))]
pub fn build_tree_output(
    container: &ServiceContainer,
    path: HierarchyPath,
    recursive: bool,
) -> CliResult<TreeOutput> {
    let query = ParameterQuery::new(path, recursive).with_page_size(container.settings.page_size);
    let tree = container.tree_service().build(&query)?;
    let options = RenderOptions {
        details: container.settings.details,
    };
    Ok(tree_output(&tree, &options))
}

/// Query `path` and print the resulting tree, or a notice if there is nothing to print.
pub fn show_tree(container: &ServiceContainer, path: HierarchyPath, recursive: bool) -> CliResult<()> {
    match build_tree_output(container, path, recursive)? {
        TreeOutput::NothingToShow => output::info(NOTHING_TO_SHOW),
        TreeOutput::Tree(rendered) => output::tree(&rendered),
    }
    Ok(())
}
