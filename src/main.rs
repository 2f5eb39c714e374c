use anyhow::Context;
use clap::Parser;
use route_viewer::{
    sdk::util::log::init_logging,
    sdk::view::{ConsoleNotifier, ConsoleSurface, LineStyle},
    AppConfig, BingRouteProvider, RouteController, ViewSettings,
};
use std::{fs::File, io::Write, path::PathBuf};

/// Fetches a driving route and prints markers, directions and a summary
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start location (e.g., "Seattle, WA")
    #[arg(short, long)]
    from: String,

    /// End location (e.g., "Portland, OR")
    #[arg(short, long)]
    to: String,

    /// [Optional] Write the rendered view state as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// [Optional] Route line color as #RRGGBB
    #[arg(long, default_value = "#FF0000")]
    line_color: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging("info");

    let cli = Cli::parse();

    let config = AppConfig::from_env().context("Failed to read configuration")?;
    let provider =
        BingRouteProvider::new(config.bing.clone()).context("Failed to set up route provider")?;
    let settings = ViewSettings {
        zoom: config.zoom,
        line_style: LineStyle {
            color: cli.line_color.clone(),
            ..LineStyle::default()
        },
    };

    let controller =
        RouteController::new(provider, ConsoleSurface::stdout(), ConsoleNotifier, settings);

    let view = controller
        .submit(&cli.from, &cli.to)
        .await
        .with_context(|| format!("No route from \"{}\" to \"{}\"", cli.from, cli.to))?;

    if let Some(path) = cli.output {
        let json_output = serde_json::to_string_pretty(&view)?;
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(json_output.as_bytes())?;
        log::info!("View state written to {}", path.display());
    }

    Ok(())
}
