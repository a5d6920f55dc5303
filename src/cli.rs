// Command-line interface: six mutually exclusive action flags, the
// upload/transport modifiers, and the dispatcher that runs the one
// selected action. No action flag prints the usage help.

use anyhow::Result;
use clap::{ArgGroup, CommandFactory, Parser};
use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::{export, import, logging, ui};

/// Back up and restore Grafana datasources, folders and dashboards as
/// JSON files, one file per object.
#[derive(Parser, Debug)]
#[command(name = "grafana-backup-cli", version)]
#[command(about = "Back up and restore Grafana datasources, folders and dashboards")]
#[command(group = ArgGroup::new("action").multiple(false))]
pub struct Cli {
    /// Download datasources as json files
    #[arg(long, group = "action")]
    pub get_datasources: bool,

    /// Download folders as json files
    #[arg(long, group = "action")]
    pub get_folders: bool,

    /// Download dashboards as json files
    #[arg(long, group = "action")]
    pub get_dashboards: bool,

    /// Upload datasources from json files
    #[arg(long, group = "action")]
    pub upload_datasources: bool,

    /// Upload folders from json files
    #[arg(long, group = "action")]
    pub upload_folders: bool,

    /// Upload dashboards from json files
    #[arg(long, group = "action")]
    pub upload_dashboards: bool,

    /// Skip the interactive confirmation before uploads
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Disable TLS certificate verification (self-signed instances only)
    #[arg(long)]
    pub insecure: bool,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    GetDatasources,
    GetFolders,
    GetDashboards,
    UploadDatasources,
    UploadFolders,
    UploadDashboards,
}

impl Cli {
    fn action(&self) -> Option<Action> {
        if self.get_datasources {
            Some(Action::GetDatasources)
        } else if self.get_folders {
            Some(Action::GetFolders)
        } else if self.get_dashboards {
            Some(Action::GetDashboards)
        } else if self.upload_datasources {
            Some(Action::UploadDatasources)
        } else if self.upload_folders {
            Some(Action::UploadFolders)
        } else if self.upload_dashboards {
            Some(Action::UploadDashboards)
        } else {
            None
        }
    }
}

/// Run the one selected action. Called from `main` with parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    let Some(action) = cli.action() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    logging::init();
    let config = Config::from_env(cli.insecure)?;
    let api = ApiClient::new(&config)?;

    match action {
        Action::GetDatasources => export::datasources(&api, &config.dir_datasources),
        Action::GetFolders => export::folders(&api, &config.dir_folders),
        Action::GetDashboards => export::dashboards(&api, &config.dir_dashboards),
        Action::UploadDatasources => {
            if !ui::confirm_upload("Datasources", &config.grafana_url, cli.yes) {
                info!("Upload aborted");
                return Ok(());
            }
            import::datasources(&api, &config.dir_datasources)
        }
        Action::UploadFolders => {
            if !ui::confirm_upload("Folders", &config.grafana_url, cli.yes) {
                info!("Upload aborted");
                return Ok(());
            }
            import::folders(&api, &config.dir_folders)
        }
        Action::UploadDashboards => {
            if !ui::confirm_upload("Dashboards", &config.grafana_url, cli.yes) {
                info!("Upload aborted");
                return Ok(());
            }
            import::dashboards(&api, &config.dir_dashboards)
        }
    }
}
