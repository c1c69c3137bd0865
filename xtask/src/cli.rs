use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Development tasks for anybadge", long_about = None)]
pub struct XtaskCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the sample badges used in the README
    Gallery(GalleryArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GalleryArgs {
    /// Directory the sample badges are written to
    #[arg(long, default_value = "docs/examples")]
    pub out_dir: PathBuf,

    /// Path prefix for badge links in the printed table
    #[arg(long, default_value = "docs/examples")]
    pub link_prefix: String,
}
