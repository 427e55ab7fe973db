use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::merge::CollisionPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "kubemerge",
    about = "Merge an additional kubeconfig into your main kubeconfig at ~/.kube/config",
    long_about = "Kubemerge merges the clusters, contexts and users of an additional
kubeconfig into your main one, then optionally repoints current-context.

Entries are matched by name within each section. A new name is appended,
an identical entry is skipped, and a conflicting entry is resolved per the
chosen strategy:
  • prompt     ask per conflict (default)
  • keep       always keep the existing entry
  • overwrite  always take the incoming entry

Entries are never merged field by field.

The target kubeconfig is ~/.kube/config, or $KUBECONFIG / --kubeconfig when set.

Examples:
  # Merge interactively and pick a context afterwards
  kubemerge ./new-cluster.yaml

  # Merge without prompts, keeping existing entries on conflict
  kubemerge ./new-cluster.yaml --strategy keep --skip-context

  # Merge, then switch to a named context without prompting
  kubemerge ./new-cluster.yaml --strategy overwrite --set-context staging

  # Preview the merge decisions without writing anything
  kubemerge ./new-cluster.yaml --strategy keep --dry-run",
    version,
    author
)]
pub struct Cli {
    /// Path to the kubeconfig file to merge
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Target kubeconfig (defaults to ~/.kube/config)
    #[arg(short, long, env = "KUBECONFIG", value_hint = clap::ValueHint::FilePath)]
    pub kubeconfig: Option<PathBuf>,

    /// How to resolve entries that exist in both files with different content
    #[arg(short, long, value_enum, default_value_t = Strategy::Prompt)]
    pub strategy: Strategy,

    /// Set current-context to this name after merging, without prompting
    #[arg(long, value_name = "NAME", conflicts_with = "skip_context")]
    pub set_context: Option<String>,

    /// Skip the post-merge context selection entirely
    #[arg(long)]
    pub skip_context: bool,

    /// Report merge decisions without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Create a timestamped backup of the target kubeconfig before writing
    #[arg(short, long)]
    pub backup: bool,

    /// Enable debug output (shows INFO and DEBUG messages)
    #[arg(long)]
    pub debug: bool,

    /// Enable trace output (shows all log messages including TRACE)
    #[arg(short = 't', long)]
    pub trace: bool,
}

/// CLI-facing collision strategies. `prompt` needs a terminal; the other two
/// are safe for scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Ask per conflicting entry
    Prompt,
    /// Keep the existing entry on conflict
    Keep,
    /// Overwrite with the incoming entry on conflict
    Overwrite,
}

impl From<Strategy> for CollisionPolicy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Prompt => Self::Prompt,
            Strategy::Keep => Self::KeepExisting,
            Strategy::Overwrite => Self::Overwrite,
        }
    }
}
