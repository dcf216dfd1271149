use triplib::{
    formats::{text::write_period_total, toml::TomlScenario},
    traits::ReadScenario,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: TOML-сценарий из stdin -> текстовый отчёт в stdout
    let trip = TomlScenario::read(std::io::BufReader::new(std::io::stdin()))?;
    trip.print_report()?;
    write_period_total(std::io::stdout(), &trip)?;
    Ok(())
}
