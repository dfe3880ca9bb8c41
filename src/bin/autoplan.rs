use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "autoplan", version)]
struct Cli {
    /// Planner config JSON (timing, easing, period length).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print waypoints, timeline and period budget for each robot.
    Preview(PlanArgs),
    /// Print both robots' poses at an elapsed time as JSON.
    Sample(SampleArgs),
    /// Print the primary robot's transfer payload.
    Export(PlanArgs),
    /// Decode a transfer payload back into JSON plan entries.
    Decode(DecodeArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input plan JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input plan JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Elapsed time in seconds.
    #[arg(long, allow_negative_numbers = true)]
    t: f64,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// File holding the payload text; reads stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = match &cli.config {
        Some(path) => autoplan::PlannerConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => autoplan::PlannerConfig::default(),
    };

    match cli.cmd {
        Command::Preview(args) => cmd_preview(&config, &args),
        Command::Sample(args) => cmd_sample(&config, &args),
        Command::Export(args) => cmd_export(&config, &args),
        Command::Decode(args) => cmd_decode(&args),
    }
}

fn read_plan_json(path: &Path) -> anyhow::Result<autoplan::PlanFile> {
    let f = File::open(path).with_context(|| format!("open plan '{}'", path.display()))?;
    let r = BufReader::new(f);
    let plan: autoplan::PlanFile =
        serde_json::from_reader(r).with_context(|| "parse plan JSON")?;
    Ok(plan)
}

fn load_planner(config: &autoplan::PlannerConfig, path: &Path) -> anyhow::Result<autoplan::Planner> {
    let plan = read_plan_json(path)?;
    Ok(autoplan::Planner::from_plan_file(*config, &plan))
}

fn print_track(name: &str, track: &autoplan::RobotTrack, period_secs: f64) {
    let ctx = track.context;
    let start = track.start_pose;
    println!(
        "{name}: {:?} {:?}, start ({:.1}, {:.1}) {:.0}deg",
        ctx.alliance,
        ctx.side,
        start.x,
        start.y,
        start.heading.to_degrees()
    );

    if track.waypoints.is_empty() {
        println!("  (no waypoints)");
    }
    for (i, (wp, entry)) in track.waypoints.iter().zip(track.timeline()).enumerate() {
        println!(
            "  {:>2}. {:<22} ({:>6.1}, {:>6.1}) {:>5.0}deg  t={:.2}s",
            i + 1,
            wp.label,
            wp.x,
            wp.y,
            wp.heading.to_degrees(),
            entry.completion
        );
    }
    println!("  total {}", track.budget(period_secs));
}

fn cmd_preview(config: &autoplan::PlannerConfig, args: &PlanArgs) -> anyhow::Result<()> {
    let snapshot = load_planner(config, &args.in_path)?.recompute();

    print_track("primary", &snapshot.primary, config.period_secs);
    if let Some(partner) = &snapshot.partner {
        print_track("partner", partner, config.period_secs);
    }
    Ok(())
}

fn cmd_sample(config: &autoplan::PlannerConfig, args: &SampleArgs) -> anyhow::Result<()> {
    let snapshot = load_planner(config, &args.in_path)?.recompute();

    let out = serde_json::json!({
        "t": args.t,
        "primary": snapshot.primary.pose_at(args.t, config.ease),
        "partner": snapshot.partner.as_ref().and_then(|p| p.pose_at(args.t, config.ease)),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_export(config: &autoplan::PlannerConfig, args: &PlanArgs) -> anyhow::Result<()> {
    let planner = load_planner(config, &args.in_path)?;
    let payload = planner.export()?;

    eprintln!(
        "steps={} json_bytes={} compressed_bytes={} ratio={:.2}",
        payload.steps,
        payload.json_bytes,
        payload.compressed_bytes,
        payload.compression_ratio()
    );
    println!("{}", payload.text);
    Ok(())
}

fn cmd_decode(args: &DecodeArgs) -> anyhow::Result<()> {
    let text = match &args.in_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read payload '{}'", path.display()))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .with_context(|| "read payload from stdin")?;
            s
        }
    };

    let entries = autoplan::decode_payload(&text)?;
    let failed = entries.iter().filter(|e| e.is_failed()).count();
    if failed > 0 {
        tracing::warn!(failed, "payload contains failed entries");
    }
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
