use orbitsim::{GravityModel, ScenarioConfig, Simulation};
use orbitsim::{angle_between, total_energy, units};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Run a star/planet gravity scenario headless and report distances")]
struct Args {
    /// Scenario YAML, looked up under `scenarios/` if not found as given.
    /// The built-in inner solar system is used when omitted.
    #[arg(short, long)]
    file: Option<String>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 365)]
    steps: u64,

    /// Log a distance report every N ticks
    #[arg(long, default_value_t = 30)]
    report_every: u64,

    /// Override the scenario's gravity policy
    #[arg(long, value_enum)]
    gravity: Option<GravityArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GravityArg {
    Mutual,
    StarDominated,
}

impl From<GravityArg> for GravityModel {
    fn from(g: GravityArg) -> Self {
        match g {
            GravityArg::Mutual => GravityModel::Mutual,
            GravityArg::StarDominated => GravityModel::StarDominated,
        }
    }
}

// load here to keep main clean
fn load_scenario(file: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file else {
        return Ok(ScenarioConfig::inner_solar_system());
    };

    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn report(sim: &Simulation) {
    info!("day {:.1}", sim.clock().elapsed_days());
    let star = sim.star().position();
    for b in sim.snapshot().iter().filter(|b| !b.is_star) {
        info!(
            "  {:<10} {:>14.1}km  ({:.3} AU)  at {:>6.1} deg",
            b.name,
            units::meters_to_km(b.distance_to_star),
            units::meters_to_au(b.distance_to_star),
            angle_between(&star, &b.position).to_degrees()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut scenario_cfg = load_scenario(args.file.as_deref())?;
    if let Some(g) = args.gravity {
        scenario_cfg.parameters.gravity_model = Some(g.into());
    }

    let mut sim = Simulation::from_config(&scenario_cfg).context("invalid scenario")?;
    info!(
        "simulating {} bodies for {} ticks of {} s",
        sim.bodies().len(),
        args.steps,
        sim.clock().step_seconds()
    );

    let e0 = total_energy(&sim);
    report(&sim);
    for _ in 0..args.steps {
        sim.step();
        if args.report_every > 0 && sim.clock().steps() % args.report_every == 0 {
            report(&sim);
        }
    }

    let e1 = total_energy(&sim);
    info!("relative energy drift: {:.3e}", ((e1 - e0) / e0).abs());

    Ok(())
}
