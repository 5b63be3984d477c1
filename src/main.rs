extern crate env_logger;
#[macro_use]
extern crate log;
extern crate nmea_route;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::{env, process};

use nmea_route::{route_from_log, GeoPosition, Route, RouteError};

/// Prints the fixes of every log named on the command line, or of stdin.
fn main() {
    env_logger::init();

    let paths: Vec<String> = env::args().skip(1).collect();
    let result = if paths.is_empty() {
        let stdin = io::stdin();
        let lock = stdin.lock();
        print_route("<stdin>", route_from_log(lock))
    } else {
        paths.iter().try_for_each(|path| {
            let route = File::open(path)
                .map_err(RouteError::from)
                .and_then(|f| route_from_log(BufReader::new(f)));
            print_route(path, route)
        })
    };

    if let Err(e) = result {
        eprintln!("nmea-route: {}", e);
        process::exit(1);
    }
}

fn print_route(name: &str, route: Result<Route<GeoPosition>, RouteError>) -> Result<(), RouteError> {
    let route = route?;
    info!("{}: {} fixes", name, route.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for fix in &route {
        writeln!(out, "{}", fix)?;
    }
    Ok(())
}
