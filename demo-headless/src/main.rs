use cfd_profiles_core::diagnostics::{fire_curve_table, wind_profile_table, TimeSchedule};
use cfd_profiles_core::{
    FireCurveModel, FireGrowthClass, SimulationConfig, TerrainCategory, WindProfileModel,
};
use clap::{Parser, ValueEnum};
use std::error::Error;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Which tables to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    Wind,
    Fire,
    All,
}

/// Print diagnostic tables for the wind profile and fire curve of a CFD case
#[derive(Parser, Debug)]
#[command(name = "demo-headless")]
#[command(about = "Eurocode wind profile and t² fire curve tables", long_about = None)]
struct Args {
    /// Tables to print
    #[arg(short, long, value_enum, default_value_t = Report::All)]
    report: Report,

    /// JSON configuration file (missing fields take defaults)
    #[arg(short, long)]
    config: Option<String>,

    /// Eurocode terrain category (0, I, II, III, IV); overrides z0 and z_min
    #[arg(short, long)]
    terrain: Option<TerrainCategory>,

    /// Fire growth class (slow, medium, fast, ultra-fast); overrides the growth coefficient
    #[arg(short, long)]
    growth: Option<FireGrowthClass>,

    /// Fundamental basic wind velocity in m/s
    #[arg(short, long)]
    wind_speed: Option<f64>,

    /// Wind direction in degrees clockwise from north
    #[arg(long)]
    wind_direction: Option<f64>,

    /// Domain height in meters
    #[arg(long)]
    zone_height: Option<f64>,

    /// Fire table horizon in seconds
    #[arg(long, default_value_t = TimeSchedule::DEFAULT_HORIZON)]
    horizon: f64,

    /// Number of fire table steps over the horizon
    #[arg(long, default_value_t = TimeSchedule::DEFAULT_STEPS)]
    steps: usize,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Configuration file (or defaults) with the command line overrides applied
    fn effective_config(&self) -> Result<SimulationConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(category) = self.terrain {
            config.wind = config.wind.with_terrain(category);
        }
        if let Some(class) = self.growth {
            config.fire = config.fire.with_growth_class(class);
        }
        if let Some(speed) = self.wind_speed {
            config.wind.vb0 = speed;
        }
        if let Some(direction) = self.wind_direction {
            config.wind.wind_direction_deg = direction;
        }
        if let Some(height) = self.zone_height {
            config.wind.zone_height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

fn write_wind_report(out: &mut impl Write, model: &WindProfileModel) -> io::Result<()> {
    writeln!(out, "LOG PROFILE INPUT VALUES:")?;
    writeln!(out, "kr= {:.6}", model.roughness_factor())?;
    writeln!(out, "vB= {:.3}", model.basic_velocity())?;
    writeln!(out, "delV= {:.3}", model.velocity_reduction_factor())?;
    writeln!(out, "theta= {:.3}", model.heading())?;
    writeln!(out)?;
    writeln!(out, "CALCULATED PROFILE:")?;

    for s in wind_profile_table(model) {
        writeln!(
            out,
            "z= {:.1}\t\txV= {:.3}\tyV= {:.3}\tIu= {:.3}\tk= {:.3}\te= {:.5}\tw= {:.5}",
            s.z, s.vx, s.vy, s.turbulence_intensity, s.tke, s.epsilon, s.omega
        )?;
    }
    writeln!(out)
}

fn write_fire_report(
    out: &mut impl Write,
    model: &FireCurveModel,
    schedule: TimeSchedule,
) -> io::Result<()> {
    let src_vol = model.config().src_vol;

    writeln!(out, "FIRE CURVE VALUES:")?;
    for s in fire_curve_table(model, schedule) {
        writeln!(
            out,
            "Time = {:.1} s  |  HRR = {:.2} kW  |  G.smoke = {:.4} kg/s  |  SRC_VOL = {:.2} m3  |  HRR/Vol = {:.4} W/m3  |  G.smoke/Vol = {:.6} kg/s/m3",
            s.time,
            s.heat_release_kw,
            s.smoke_flow_total,
            src_vol,
            s.heat_release_rate,
            s.smoke_mass_flow
        )?;
    }
    writeln!(out)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = args.effective_config()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dump_config {
        writeln!(out, "{}", config.to_json_string()?)?;
        return Ok(());
    }

    info!(report = ?args.report, "Writing diagnostic tables");

    if matches!(args.report, Report::Wind | Report::All) {
        write_wind_report(&mut out, &config.wind_model())?;
    }
    if matches!(args.report, Report::Fire | Report::All) {
        let schedule = TimeSchedule::new(args.horizon, args.steps);
        write_fire_report(&mut out, &config.fire_model(), schedule)?;
    }

    Ok(())
}
