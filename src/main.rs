use airport_finder::cli::Cli;
use airport_finder::finder::NearestAirportFinder;
use airport_finder::loader::load_airports;
use airport_finder::logging::setup_logging;
use clap::Parser;
use log::info;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.logging_level);
    info!("Main: Application started.");

    let airports = load_airports(&cli.airports).unwrap_or_else(|e| {
        log::error!("{e}");
        std::process::exit(1)
    });

    let finder = NearestAirportFinder::new(&airports);
    match finder.find_closest_airport(cli.lat, cli.lon) {
        Ok(closest) => println!("{closest}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1)
        }
    }

    info!("Main: Program finished.");
}
