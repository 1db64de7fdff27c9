use std::env;
use std::fs;
use std::path::PathBuf;

use dataset::{DatasetOrigin, LoadedDataset};
use query::{BoundaryKind, MetricsRequest, Resolver};
use runtime::frame::Frame;
use runtime::ticker::ManualTicker;
use tracing::info;
use tracing_subscriber::EnvFilter;
use viewport::animator::CameraAnimator;
use viewport::bounds::compute_bounds;
use viewport::fit::fit_camera;

const DEFAULT_DATA_PATH: &str = "data/censusData.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "seed" => cmd_seed(args),
        "states" => cmd_states(args),
        "cities" => cmd_cities(args),
        "metrics" => cmd_metrics(args),
        "boundary" => cmd_boundary(args),
        "fit" => cmd_fit(args),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    "usage:\n  \
     census-atlas seed [output.json]\n  \
     census-atlas states [--data PATH]\n  \
     census-atlas cities <state_id> [--data PATH]\n  \
     census-atlas metrics --year YEAR [--state ID] [--city ID] [--data PATH]\n  \
     census-atlas boundary <STATE|CITY> <id> [--data PATH]\n  \
     census-atlas fit --year YEAR [--state ID] [--city ID] [--data PATH]"
        .to_string()
}

/// Pull an optional `--flag VALUE` pair out of `args`.
fn take_flag(args: &mut Vec<String>, flag: &str) -> Result<Option<String>, String> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        return Err(format!("{flag} requires a value"));
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(value))
}

fn load(args: &mut Vec<String>) -> Result<Resolver, String> {
    let path = take_flag(args, "--data")?.unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
    let LoadedDataset { data, origin } = dataset::load_or_fallback(&path);
    if origin == DatasetOrigin::Fallback {
        info!("serving deterministic sample data");
    }
    Ok(Resolver::new(data))
}

fn cmd_seed(args: Vec<String>) -> Result<(), String> {
    let out = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let data = dataset::sample::generate();
    let json = serde_json::to_string_pretty(&data).map_err(|e| format!("serialize: {e}"))?;

    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("create {parent:?}: {e}"))?;
    }
    fs::write(&out, json).map_err(|e| format!("write {out:?}: {e}"))?;

    info!(
        path = %out.display(),
        states = data.states.len(),
        cities = data.cities.len(),
        metrics = data.metrics.len(),
        "seed data written"
    );
    println!("wrote {}", out.display());
    Ok(())
}

fn cmd_states(mut args: Vec<String>) -> Result<(), String> {
    let resolver = load(&mut args)?;
    for s in resolver.states() {
        println!(
            "{}  {}  {}  center=({:.4}, {:.4})",
            s.id, s.code, s.name, s.center_lat, s.center_lon
        );
    }
    Ok(())
}

fn cmd_cities(mut args: Vec<String>) -> Result<(), String> {
    let resolver = load(&mut args)?;
    let state_id = args.first().ok_or_else(usage)?;
    for c in resolver.cities(state_id) {
        let population = c
            .population
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}  {}  pop={}", c.id, c.name, population);
    }
    Ok(())
}

fn metric_request(args: &mut Vec<String>) -> Result<MetricsRequest, String> {
    let year = take_flag(args, "--year")?
        .map(|y| y.parse::<i32>().map_err(|e| format!("--year: {e}")))
        .transpose()?;
    Ok(MetricsRequest {
        year,
        state_id: take_flag(args, "--state")?,
        city_id: take_flag(args, "--city")?,
    })
}

fn cmd_metrics(mut args: Vec<String>) -> Result<(), String> {
    let resolver = load(&mut args)?;
    let filter = metric_request(&mut args)?
        .validate()
        .map_err(|e| e.to_string())?;

    let points = resolver.metrics(&filter);
    let columns = layers::column_points(&points);
    for (m, col) in points.iter().zip(&columns) {
        println!(
            "{}  {} {}  value={}  color={:?}  elevation={:.0}m",
            m.id, m.city_name, m.year, m.value, col.fill_color, col.elevation
        );
    }
    println!("{} points", points.len());
    Ok(())
}

fn cmd_boundary(mut args: Vec<String>) -> Result<(), String> {
    let resolver = load(&mut args)?;
    let kind: BoundaryKind = args
        .first()
        .ok_or_else(usage)?
        .parse()
        .map_err(|e: query::QueryError| e.to_string())?;
    let id = args.get(1).ok_or_else(usage)?;

    match resolver.boundary(kind, id) {
        Some(b) => println!("{}", b.geojson),
        None => println!("{} {id}: not found", kind.as_str()),
    }
    Ok(())
}

/// Run the full pipeline headless: query -> bounds -> fitted pose -> eased
/// camera flight driven by a synthetic 60 fps frame loop.
fn cmd_fit(mut args: Vec<String>) -> Result<(), String> {
    let resolver = load(&mut args)?;
    let filter = metric_request(&mut args)?
        .validate()
        .map_err(|e| e.to_string())?;

    let points = resolver.metrics(&filter);
    let bounds = compute_bounds(points.iter().map(|m| m.position()));
    let target = fit_camera(bounds);
    println!(
        "target: lon={:.4} lat={:.4} zoom={:.2}",
        target.longitude, target.latitude, target.zoom
    );

    let mut ticker = ManualTicker::new();
    let mut animator = CameraAnimator::new(Default::default());
    let mut frame = Frame::new(0, 1000.0 / 60.0);
    animator.animate_to(target, frame.time, &mut ticker);

    while ticker.take_pending() {
        frame = frame.next();
        let pose = animator.tick(frame.time, &mut ticker);
        if frame.index % 15 == 0 || !animator.is_animating() {
            println!(
                "frame {:>3}  t={:>6.0}ms  lon={:.4} lat={:.4} zoom={:.3}",
                frame.index,
                frame.time.0,
                pose.longitude,
                pose.latitude,
                pose.zoom
            );
        }
    }
    Ok(())
}
