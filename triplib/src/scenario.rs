//! Встроенный демонстрационный сценарий.

use crate::{error::Result, formats::toml::TomlScenario, traits::ReadScenario, trip::BusinessTrip};

pub const DEMO: &str = include_str!("../fixtures/demo.toml");

/// Командировка "001": два участника, поезд и такси, одна гостиница, три приёма пищи.
pub fn demo() -> Result<BusinessTrip> {
    TomlScenario::read(DEMO.as_bytes())
}
