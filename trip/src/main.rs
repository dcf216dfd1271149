use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use triplib::{
    error::{Result, TripError},
    formats::{
        csv::CsvLedger,
        json::JsonReport,
        text::{write_period_total, TextReport},
        toml::TomlScenario,
    },
    scenario,
    traits::{ReadScenario, WriteReport},
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Text,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "trip", version, about = "Отчёт по расходам командировки")]
struct Cli {
    /// TOML-сценарий командировки (по умолчанию встроенный демонстрационный)
    #[arg(short = 's', long = "scenario")]
    scenario: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат отчёта
    #[arg(long = "format", value_enum, default_value_t = Fmt::Text)]
    format: Fmt,
}

fn main() -> Result<()> {
    // логи в stderr, чтобы stdout оставался чистым отчётом
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let trip = match &cli.scenario {
        Some(path) => {
            debug!(path = %path, "loading scenario");
            TomlScenario::read(BufReader::new(File::open(path)?))?
        }
        None => scenario::demo()?,
    };

    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        Fmt::Text => {
            TextReport::write(&mut writer, &trip)?;
            write_period_total(&mut writer, &trip)
        }
        Fmt::Json => JsonReport::write(&mut writer, &trip),
        Fmt::Csv => CsvLedger::write(&mut writer, &trip),
    }?;

    writer.flush().map_err(TripError::from)
}
