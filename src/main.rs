use solarsim::{run_viewer, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Optional YAML scenario file; without it the built-in
    /// solar-system roster is used
    #[arg(short, long)]
    file_name: Option<PathBuf>,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &PathBuf) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario = match &args.file_name {
        Some(path) => Scenario::build_scenario(load_scenario_from_yaml(path)?),
        None => Scenario::solar_system(),
    };

    run_viewer(scenario);

    Ok(())
}
