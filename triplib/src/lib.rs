//! triplib: учёт расходов командировки: участники, поездки, проживание, питание и отчёты

pub mod error;
pub mod model;
pub mod scenario;
pub mod traits;
pub mod trip;

pub mod formats {
    pub mod csv;
    pub mod json;
    pub mod text;
    pub mod toml;
}

pub use model::{Accommodation, Leg, Meal, Mode, Staff, Transportation};
pub use trip::BusinessTrip;
