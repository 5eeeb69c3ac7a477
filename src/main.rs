use cyclosim::{run, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "cyclotron.yaml")]
    file_name: String,

    #[arg(short, default_value = "trajectory.txt")]
    output: String,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    // One write per step goes through this buffer, not straight to disk
    let out_file = File::create(&args.output)
        .with_context(|| format!("failed to create output file {}", args.output))?;
    let mut writer = BufWriter::new(out_file);

    run(&mut scenario, &mut writer)?;

    //bench_advance();
    //bench_advance_curve();

    Ok(())
}
