use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Find the airport closest to a coordinate", long_about = None)]
pub struct Cli {
    /// CSV file with X, Y, NAME and GLOBAL_ID columns.
    #[arg(long, default_value = "Airports.csv")]
    pub airports: std::path::PathBuf,

    /// Query latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Query longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    #[arg(short, long, default_value_t = log::LevelFilter::Info)]
    pub logging_level: log::LevelFilter,
}
