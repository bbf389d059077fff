use geowkt::{
    bbox::{self, BBox},
    crs::Crs,
    error::Error,
};
use std::process;

// lon/lat bbox around Lassen Volcanic National Park
const BBOX: [f64; 4] = [-121.8343345, 39.6358715, -120.5195507, 40.6447996];
const SOURCE_CRS: &str = "EPSG:4326";
const TARGET_CRS: &str = "EPSG:32610";

fn run() -> Result<BBox, Error> {
    let source: Crs = SOURCE_CRS.parse()?;
    let target: Crs = TARGET_CRS.parse()?;
    Ok(bbox::reproject_bbox(&BBox::from(BBOX), &source, &target)?)
}

fn main() {
    geowkt::init_logging();

    match run() {
        Ok(b) => println!("{}", b),
        Err(e) => {
            eprintln!("Application error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
