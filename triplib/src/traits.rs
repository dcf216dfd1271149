//! Унифицированные трэйты загрузки сценария и вывода отчёта на основе std::io::{BufRead, Write}.

use crate::{error::Result, trip::BusinessTrip};
use std::io::{BufRead, Write};

pub trait ReadScenario {
    fn read<R: BufRead>(r: R) -> Result<BusinessTrip>;
}

pub trait WriteReport {
    fn write<W: Write>(w: W, trip: &BusinessTrip) -> Result<()>;
}
