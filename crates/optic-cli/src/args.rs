use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the optic binary.
#[derive(Parser, Debug)]
#[command(
    name = "optic",
    version,
    about = "Static usage checker for optional-value types"
)]
pub struct CliArgs {
    /// Unit files or directories to check. Directories are searched
    /// recursively for `*.unit.json` files.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Print names of files that would be checked and then stop.
    #[arg(long = "listFilesOnly", alias = "list-files-only")]
    pub list_files_only: bool,

    /// Suppress the trailing summary line.
    #[arg(short, long)]
    pub quiet: bool,
}
