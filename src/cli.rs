use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gradle-miner",
    about = "Mine dependency declarations and project coordinates from Gradle build scripts",
    version
)]
pub struct Cli {
    /// Project path to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: ./.gradle-miner/config.toml, fallback ~/.config/gradle-miner/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for the JSON inventory [default: ./results]
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// List every extracted dependency in the terminal report
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}
