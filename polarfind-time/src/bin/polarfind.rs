use clap::Parser;
use polarfind_core::location::named_site;
use polarfind_core::Location;
use polarfind_time::Readout;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "polarfind")]
#[command(about = "Print the Polaris alignment readout for an observer")]
struct Cli {
    /// Observer latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true, requires = "lon", conflicts_with = "site")]
    lat: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, requires = "lat", conflicts_with = "site")]
    lon: Option<f64>,

    /// Height above the ellipsoid in meters
    #[arg(long, default_value = "0.0")]
    height: f64,

    /// Named site (mauna_kea, greenwich, palomar, vlt, keck)
    #[arg(long)]
    site: Option<String>,

    /// Unix timestamp in milliseconds (defaults to the system clock)
    #[arg(long, conflicts_with = "watch")]
    millis: Option<i64>,

    /// Reprint once per second from the system clock
    #[arg(long)]
    watch: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let fix = resolve_fix(&cli)?;

    if cli.watch {
        loop {
            print_readout(now_millis()?, fix);
            println!();
            std::thread::sleep(Duration::from_secs(1));
        }
    }

    let millis = match cli.millis {
        Some(millis) => millis,
        None => now_millis()?,
    };
    print_readout(millis, fix);
    Ok(())
}

fn resolve_fix(cli: &Cli) -> anyhow::Result<Option<Location>> {
    if let Some(name) = &cli.site {
        return Ok(Some(named_site(name)?));
    }
    match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => Ok(Some(Location::new(lat, lon, cli.height)?)),
        _ => Ok(None),
    }
}

fn now_millis() -> anyhow::Result<i64> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(elapsed.as_millis() as i64)
}

fn print_readout(millis: i64, fix: Option<Location>) {
    let readout = Readout::at(millis, fix);

    println!("{}", readout.hour_angle_label());
    println!("{}", readout.lst_label());
    println!("Indicator: {:.2}°", readout.indicator_angle_degrees());
    println!("{}", readout.gps_status());
    if let Some(coords) = readout.coordinates() {
        println!("{}", coords);
    }
    if let Some(elevation) = readout.elevation() {
        println!("{}", elevation);
    }
}
