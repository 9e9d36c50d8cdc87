//! This module provides the command line interface of `kustedit` using the `clap` crate.
//!
//! ```
//! use clap::Parser;
//! use kustedit::{cli::Cli, kvp::MetadataKind};
//!
//! let cli = Cli::parse_from(["kustedit", "edit", "add", "label", "app:web,tier:frontend"]);
//! let (kind, args) = cli.command.metadata_arguments();
//!
//! assert_eq!(kind, MetadataKind::Label);
//! assert_eq!(args, ["app:web,tier:frontend"]);
//! ```
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::kvp::MetadataKind;

/// Edits kustomization files.
#[derive(Debug, PartialEq, Eq, Parser)]
#[command(name = "kustedit", author, version, about)]
pub struct Cli {
    /// Directory containing the kustomization.yaml file
    #[arg(
        long,
        short = 'C',
        global = true,
        value_name = "DIR",
        env = "KUSTEDIT_DIRECTORY",
        default_value = "."
    )]
    pub directory: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Edit the kustomization file.
    #[command(subcommand)]
    Edit(EditCommand),
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum EditCommand {
    /// Add an item to the kustomization file.
    #[command(subcommand)]
    Add(AddCommand),
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum AddCommand {
    /// Add common labels to the kustomization file.
    #[command(
        after_help = "Example:\n  kustedit edit add label labelKey1:labelValue1,labelKey2:labelValue2"
    )]
    Label(MetadataArguments),

    /// Add common annotations to the kustomization file.
    #[command(
        after_help = "Example:\n  kustedit edit add annotation annotationKey1:annotationValue1,annotationKey2:annotationValue2"
    )]
    Annotation(MetadataArguments),
}

/// Positional arguments of the `edit add label` and `edit add annotation` commands.
#[derive(Debug, PartialEq, Eq, Args)]
pub struct MetadataArguments {
    /// Comma-separated list of key:value pairs, without any spaces
    //
    // Any number of values is accepted here, kvp::parse checks the count.
    #[arg(value_name = "KEY:VALUE,...")]
    pub entries: Vec<String>,
}

impl Command {
    /// Returns the targeted metadata kind together with the raw positional arguments.
    pub fn metadata_arguments(&self) -> (MetadataKind, &[String]) {
        match self {
            Self::Edit(EditCommand::Add(AddCommand::Label(args))) => {
                (MetadataKind::Label, &args.entries)
            }
            Self::Edit(EditCommand::Add(AddCommand::Annotation(args))) => {
                (MetadataKind::Annotation, &args.entries)
            }
        }
    }
}
