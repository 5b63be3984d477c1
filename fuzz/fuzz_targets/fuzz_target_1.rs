#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate nmea_route;

use std::io::Cursor;
use nmea_route::{route_from_log, GeoPosition, Route};

fuzz_target!(|data: &[u8]| {
    let data = Cursor::new(data);
    let _: Result<Route<GeoPosition>, _> = route_from_log(data);
});
