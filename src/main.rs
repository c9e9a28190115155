use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use devops_info_service::config::{load_settings, settings_schema};
use devops_info_service::startup;
use devops_info_service::utils::logger::init_logging;

/// DevOps course info service.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// YAML configuration file, layered under the environment.
    #[arg(long, env = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Print the JSON schema of the configuration and exit.
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_schema {
        return match settings_schema() {
            Ok(schema) => {
                println!("{}", schema);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error rendering configuration schema: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging());

    if let Err(e) = startup::run(Arc::new(settings)).await {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
