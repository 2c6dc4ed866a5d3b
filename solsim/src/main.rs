use solsim::{ScenarioConfig, StepController};
use solsim::run_server;
use solsim::{bench_advance, bench_drift, bench_gravity};

use anyhow::Result;
use clap::Parser;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Serve a planetary n-body simulation over HTTP")]
struct Args {
    /// YAML scenario file; the built-in solar system when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Run the timing benchmarks and exit instead of serving
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    match &args.scenario {
        Some(path) => {
            log::info!("loading scenario from {}", path.display());
            ScenarioConfig::from_yaml_file(path)
        }
        None => Ok(ScenarioConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_advance()?;
        bench_drift()?;
        return Ok(());
    }

    let scenario = load_scenario(&args)?;
    let controller = StepController::new(&scenario)?;

    run_server(controller, SocketAddr::new(args.host, args.port)).await
}
