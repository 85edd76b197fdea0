//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::domain::{DomainError, HierarchyPath, NodeIdentity};

/// SSM Tree is a tool that provides a tree visualization of the
/// parameters hierarchy from AWS Systems Manager Parameter Store.
#[derive(Parser, Debug)]
#[command(name = "ssm-tree")]
#[command(author, about, long_about = None)]
#[command(version = concat!("- version ", env!("CARGO_PKG_VERSION")))]
pub struct Cli {
    /// The hierarchy for the parameter. Hierarchies start with a forward slash (/)
    /// and end with the parameter name, e.g. /Servers/Prod
    #[arg(
        short,
        long,
        value_parser = parse_hierarchy_path,
        required_unless_present_any = ["completions", "show_config"]
    )]
    pub path: Option<HierarchyPath>,

    /// Prevents recursion into descending levels
    #[arg(long)]
    pub no_recursion: bool,

    /// Specifies which AWS Region to send this request to
    #[arg(long)]
    pub region: Option<String>,

    /// Named AWS profile to use
    #[arg(long)]
    pub profile: Option<String>,

    /// Show parameter type and version
    #[arg(long)]
    pub details: bool,

    /// Node identity: 'path' keeps equal names at different levels apart, 'name' merges them
    #[arg(long, value_parser = parse_identity)]
    pub identity: Option<NodeIdentity>,

    /// Config file (default: ~/.config/ssm-tree/ssm-tree.toml)
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

fn parse_hierarchy_path(raw: &str) -> Result<HierarchyPath, String> {
    HierarchyPath::parse(raw).map_err(|e| e.to_string())
}

fn parse_identity(raw: &str) -> Result<NodeIdentity, String> {
    raw.parse().map_err(|e: DomainError| e.to_string())
}
