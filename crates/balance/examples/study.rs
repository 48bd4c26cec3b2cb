//! Water balance of a small residential plot.
//!
//! A tiled roof and a paved yard drain through a pipe into an infiltration
//! swale, while a garage with a green roof stays unconnected.
//!
//! # Usage
//!
//! ```text
//! cargo run --example study
//! cargo run --example study -- Hessen
//! ```

use std::error::Error;

use uom::si::{area::square_meter, f64::Area};
use watbal_balance::{
    Drainage, DrainageType, GreenRoof, InfiltrationSwale, Measure, PermeableSurface,
    RegionalAverages, Roof, Stage, StudyArea, Surface, SystemTotal,
};

fn main() -> Result<(), Box<dyn Error>> {
    let study = match std::env::args().nth(1) {
        Some(region) => StudyArea::from_region(&RegionalAverages, &region)?,
        None => StudyArea::default(),
    };
    println!("{study}\n");

    let m2 = Area::new::<square_meter>;
    let roof = Roof::default().stage(&study, m2(180.0))?;
    let yard = PermeableSurface::new(4.0).stage(&study, m2(120.0))?;
    let pipe = Drainage::new(DrainageType::Pipe).apply(&study, &[roof, yard])?;
    let swale = InfiltrationSwale::new(60.0).apply(&study, &[pipe])?;
    let garage = GreenRoof::new(80.0).stage(&study, m2(40.0))?;

    let stages = [swale, garage];
    for element in stages.iter().flat_map(Stage::iter) {
        print_rows(element.label(), &element.records());
    }

    let total = SystemTotal::from_stages(&stages)?;
    print_rows("System", &total.records());
    Ok(())
}

fn print_rows(title: &str, records: &[watbal_balance::Record]) {
    println!("{title}");
    for record in records {
        println!("  {record:.3}");
    }
    println!();
}
