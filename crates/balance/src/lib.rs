//! Annual water balance of urban surfaces and stormwater measures after
//! DWA-A102.
//!
//! Precipitation falling on a developed site ends up as surface runoff (`a`),
//! groundwater recharge (`g`), evapotranspiration (`v`) or, with rainwater
//! harvesting, consumptive use (`e`). This crate computes that split for each
//! element of a site and composes the elements into system totals:
//!
//! - [`StudyArea`]: the validated annual climate shared by a study
//! - [`Surface`] types ([`Roof`], [`GreenRoof`], [`PermeableSurface`], …)
//!   turn an area into an [`ElementResult`]
//! - [`Measure`] types ([`Drainage`], [`InfiltrationSwale`], [`PondSystem`], …)
//!   take over the runoff of upstream [`Stage`]s
//! - [`aggregate`] / [`SystemTotal`] derive system fractions from summed
//!   volumes
//!
//! The regression equations themselves are data: see [`catalogue`].
//!
//! # Example
//!
//! ```
//! use uom::si::{area::square_meter, f64::Area};
//! use watbal_balance::{
//!     Drainage, DrainageType, InfiltrationSwale, Measure, Roof, StudyArea, Surface, SystemTotal,
//! };
//!
//! let study = StudyArea::new(800.0, 500.0)?;
//! let m2 = Area::new::<square_meter>;
//!
//! let roof = Roof::default().stage(&study, m2(1000.0))?;
//! let pipe = Drainage::new(DrainageType::Pipe).apply(&study, &[roof])?;
//! let swale = InfiltrationSwale::new(100.0).apply(&study, &[pipe])?;
//!
//! let total = SystemTotal::from_stages([&swale])?;
//! assert!(total.partition().recharge > 0.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod calculator;
pub mod catalogue;
mod element;
mod error;
mod measure;
mod partition;
mod record;
pub mod regression;
mod stage;
mod study;
mod surface;
mod system;

pub use calculator::Calculator;
pub use element::{ElementResult, Volumes};
pub use error::{AggregationError, ElementError, StudyAreaError};
pub use measure::{
    Drainage, DrainageCategory, DrainageType, InfiltrationSwale, Measure, PondInflow, PondSystem,
    RainwaterUsage, SurfaceInfiltration, SwaleTrench, SwaleTrenchSystem, drainage_fractions,
};
pub use partition::{Destination, Partition};
pub use record::{Record, find_value};
pub use stage::{Elements, Stage};
pub use study::StudyArea;
pub use surface::{
    FlatArea, GravelCover, GreenRoof, JointClass, PaverStoneGrid, PermeableSurface,
    PorousSurface, Roof, StorageRoof, Surface,
};
pub use system::{SystemTotal, aggregate};
pub use watbal_climate::{Climate, ClimateLookup, RegionalAverages};
