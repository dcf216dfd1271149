//! CSV-реестр расходов, одна строка на расход: сначала поездки, затем проживание, затем питание.
//! Заголовки: category,date,description,amount

use crate::{error::Result, traits::WriteReport, trip::BusinessTrip};
use csv::WriterBuilder;
use std::io::Write;

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    category: &'a str,
    date: String,
    description: String,
    amount: String,
}

pub struct CsvLedger;

impl WriteReport for CsvLedger {
    fn write<W: Write>(mut w: W, trip: &BusinessTrip) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for t in trip.transportations() {
            let leg = t.leg();
            wrt.serialize(CsvOutRow {
                category: t.mode().label(),
                date: leg.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
                description: format!(
                    "{} -> {} ({})",
                    leg.departure,
                    leg.arrival,
                    t.mode().identifier()
                ),
                amount: t.cost().to_string(),
            })?;
        }
        for a in trip.accommodations() {
            wrt.serialize(CsvOutRow {
                category: "accommodation",
                date: a.start_date().format("%Y-%m-%d").to_string(),
                description: a.place().to_string(),
                amount: a.cost().to_string(),
            })?;
        }
        for m in trip.meals() {
            wrt.serialize(CsvOutRow {
                category: "meal",
                date: m.date().format("%Y-%m-%d").to_string(),
                description: m.meal_type().to_string(),
                amount: m.cost().to_string(),
            })?;
        }
        wrt.flush()?;
        Ok(())
    }
}
