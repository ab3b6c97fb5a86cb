use clap::Parser;
use iotdb_rest::client::RestClient;
use iotdb_rest::logging;
use iotdb_rest::shared::config::{Settings, load_settings, load_settings_from};
use iotdb_rest::tablet::{
    CompressionType, MeasurementSchema, TSDataType, TSEncoding, Tablet, TabletValue,
};
use tracing::info;

const DATABASE: &str = "root.sg1";
const DEVICE: &str = "root.sg1.d1";
const ALIGNED_DEVICE: &str = "root.sg1.d2";

#[derive(Parser)]
#[command(name = "iotdb-rest-demo")]
#[command(about = "Walks through the REST client against a running server", long_about = None)]
struct Args {
    /// Configuration file; falls back to IOTDB_REST_CONFIG
    #[arg(short, long)]
    config: Option<String>,

    #[arg(long)]
    host: Option<String>,

    #[arg(short, long)]
    port: Option<u16>,

    #[arg(short, long)]
    username: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Number of INT64 measurements in the demo tablet
    #[arg(short, long, default_value = "5")]
    measurements: usize,

    /// Number of rows inserted through the tablet
    #[arg(short, long, default_value = "100")]
    rows: usize,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => load_settings_from(path)?,
            None => load_settings()?,
        };

        let client = &mut settings.client;
        if let Some(host) = &self.host {
            client.host = host.clone();
        }
        if let Some(port) = self.port {
            client.port = port;
        }
        if let Some(username) = &self.username {
            client.username = username.clone();
        }
        if let Some(password) = &self.password {
            client.password = password.clone();
        }
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.measurements > 0, "--measurements must be at least 1");
    let settings = args.settings()?;
    logging::init(&settings.logging)?;

    let client = RestClient::connect(&settings.client)?;
    client.ping()?;
    info!("Server is reachable");

    client.create_database(DATABASE)?;

    client.create_timeseries(
        &format!("{}.s0", DEVICE),
        TSDataType::Int64,
        TSEncoding::Rle,
        CompressionType::Snappy,
    )?;

    let paths: Vec<String> = (1..args.measurements)
        .map(|i| format!("{}.s{}", DEVICE, i))
        .collect();
    let count = paths.len();
    client.create_multi_timeseries(
        &paths,
        &vec![TSDataType::Int64; count],
        &vec![TSEncoding::Rle; count],
        &vec![CompressionType::Snappy; count],
    )?;

    client.create_aligned_timeseries(
        ALIGNED_DEVICE,
        &["s0", "s1"],
        &[TSDataType::Int32, TSDataType::Double],
        &[TSEncoding::Rle, TSEncoding::Gorilla],
        &[CompressionType::Snappy, CompressionType::Snappy],
    )?;

    let schemas: Vec<MeasurementSchema> = (0..args.measurements)
        .map(|i| MeasurementSchema::new(format!("s{}", i), TSDataType::Int64))
        .collect();
    let capacity = settings.client.tablet_max_rows;
    let mut tablet = Tablet::with_capacity(DEVICE, schemas.clone(), capacity, false)?;

    for ts in 0..args.rows as i64 {
        let row: Vec<Option<TabletValue>> = (0..args.measurements)
            .map(|i| Some(TabletValue::Int64(ts * 10 + i as i64)))
            .collect();
        tablet.add_row(ts, &row)?;

        if tablet.is_full() {
            client.insert_tablet(&tablet)?;
            tablet.reset();
        }
    }
    client.insert_tablet(&tablet)?;
    info!(rows = args.rows, "Tablet rows written");

    let next_ts = args.rows as i64;
    client.insert_record(DEVICE, "s0", next_ts, next_ts * 10)?;

    let end = next_ts.max(1);
    let result = client.query_timeseries_by_time(DEVICE, schemas, 0, end)?;
    info!(rows = result.row_size(), "Time-range query returned");
    for row in 0..result.row_size().min(5) {
        println!("{} {:?}", result.timestamps()[row], result.row(row)?);
    }

    match client.query_latest_value(DEVICE, "s0", TSDataType::Int64)? {
        Some((ts, value)) => println!("latest {}.s0 = {:?} at {}", DEVICE, value, ts),
        None => println!("{}.s0 holds no data", DEVICE),
    }

    Ok(())
}
