mod config;
mod report;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use nyx_lunar::{MoonPhase, moon_phase_with, phase_bucket};
use nyx_time::{parse_date, validate_ui_range};
use nyx_vedic_base::{
    Nakshatra, TithiInfo, karana_from_tithi, nakshatra_index_with, panchang_with,
    rashi_info_with, ritu_for_date, tithi_index_with, vaar_for_date, yoga_for_date, zodiac_with,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{Settings, load_settings};
use crate::report::{
    BucketReport, DashboardReport, KaranaReport, MoonReport, NakshatraReport, RashiReport,
    SeasonReport, VaraReport, YogaReport,
};

#[derive(Parser)]
#[command(name = "nyx", about = "Moon phase and panchang calculator")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// TOML settings file ([lunar] and [panchang] tables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Accept dates outside 1900-01-01..=2100-12-31
    #[arg(long, global = true)]
    no_range_check: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DateArg {
    /// Calendar date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Moon age, illumination, phase angle and phase image
    Moon {
        #[command(flatten)]
        date: DateArg,
    },
    /// Phase image bucket for a moon age in days
    PhaseBucket {
        /// Moon age in days
        #[arg(allow_negative_numbers = true)]
        age: f64,
    },
    /// Nakshatra for a date
    Nakshatra {
        #[command(flatten)]
        date: DateArg,
    },
    /// Rashi (sidereal sun sign) for a date
    Rashi {
        #[command(flatten)]
        date: DateArg,
    },
    /// Tithi and paksha for a date
    Tithi {
        #[command(flatten)]
        date: DateArg,
    },
    /// Vara (weekday) for a date
    Vara {
        #[command(flatten)]
        date: DateArg,
    },
    /// Yoga for a date
    Yoga {
        #[command(flatten)]
        date: DateArg,
    },
    /// Karana for a tithi value
    Karana {
        /// Tithi value (0-29)
        tithi: u8,
    },
    /// Season for a date
    Season {
        #[command(flatten)]
        date: DateArg,
    },
    /// All panchang elements for a date
    Panchang {
        #[command(flatten)]
        date: DateArg,
    },
    /// Zodiac sign card for a date
    Zodiac {
        #[command(flatten)]
        date: DateArg,
    },
    /// Moon, panchang and zodiac together
    Dashboard {
        #[command(flatten)]
        date: DateArg,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_settings_or_exit(path: Option<&PathBuf>) -> Settings {
    match path {
        Some(p) => load_settings(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => Settings::default(),
    }
}

fn resolve_date(arg: &DateArg, range_check: bool) -> NaiveDate {
    let date = match arg.date.as_deref() {
        Some(s) => parse_date(s).unwrap_or_else(|e| {
            eprintln!("Invalid date {s:?}: {e}");
            eprintln!("Expected YYYY-MM-DD");
            std::process::exit(1);
        }),
        None => Local::now().date_naive(),
    };
    if !range_check {
        return date;
    }
    validate_ui_range(date).unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Use --no-range-check to compute anyway");
        std::process::exit(1);
    })
}

fn require_tithi(tithi: u8) -> u8 {
    if tithi >= 30 {
        eprintln!("Invalid tithi: {tithi} (0-29)");
        std::process::exit(1);
    }
    tithi
}

fn emit<T: Serialize>(json: bool, text: String, value: &T) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode JSON: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{text}");
    }
}

fn moon(date: NaiveDate, settings: &Settings) -> MoonPhase {
    let phase = moon_phase_with(date, &settings.lunar);
    debug!(%date, age = phase.age, "moon phase");
    phase
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings_or_exit(cli.config.as_ref());
    let range_check = !cli.no_range_check;
    let json = cli.json;

    match cli.command {
        Commands::Moon { date } => {
            let date = resolve_date(&date, range_check);
            let phase = moon(date, &settings);
            emit(json, report::moon_text(date, &phase), &MoonReport::new(date, phase));
        }

        Commands::PhaseBucket { age } => {
            let bucket = phase_bucket(age);
            let text = format!("{bucket} ({})", bucket.asset_file());
            emit(json, text, &BucketReport::new(bucket));
        }

        Commands::Nakshatra { date } => {
            let date = resolve_date(&date, range_check);
            let n = Nakshatra::from_index(nakshatra_index_with(date, &settings.panchang));
            emit(json, report::nakshatra_text(n), &NakshatraReport::new(n));
        }

        Commands::Rashi { date } => {
            let date = resolve_date(&date, range_check);
            let info = rashi_info_with(date, &settings.panchang);
            emit(json, report::rashi_text(&info), &RashiReport::new(info));
        }

        Commands::Tithi { date } => {
            let date = resolve_date(&date, range_check);
            let t = TithiInfo::from_index(tithi_index_with(date, &settings.panchang));
            emit(json, report::tithi_text(&t), &t);
        }

        Commands::Vara { date } => {
            let date = resolve_date(&date, range_check);
            let vaar = vaar_for_date(date);
            let report = VaraReport {
                date,
                vaar,
                english: vaar.english_name(),
            };
            emit(json, vaar.name().to_string(), &report);
        }

        Commands::Yoga { date } => {
            let date = resolve_date(&date, range_check);
            let yoga = yoga_for_date(date);
            let text = format!("{} (index {})", yoga.name, yoga.yoga_index);
            emit(json, text, &YogaReport { date, yoga });
        }

        Commands::Karana { tithi } => {
            let tithi = require_tithi(tithi);
            let karana = karana_from_tithi(tithi);
            emit(json, karana.name().to_string(), &KaranaReport { tithi, karana });
        }

        Commands::Season { date } => {
            let date = resolve_date(&date, range_check);
            let ritu = ritu_for_date(date);
            let report = SeasonReport {
                date,
                ritu,
                name: ritu.name(),
            };
            emit(json, ritu.name().to_string(), &report);
        }

        Commands::Panchang { date } => {
            let date = resolve_date(&date, range_check);
            let p = panchang_with(date, &settings.panchang);
            emit(json, report::panchang_text(&p), &p);
        }

        Commands::Zodiac { date } => {
            let date = resolve_date(&date, range_check);
            let card = zodiac_with(date, &settings.panchang);
            emit(json, report::zodiac_text(&card), &card);
        }

        Commands::Dashboard { date } => {
            let date = resolve_date(&date, range_check);
            let report = DashboardReport {
                moon: MoonReport::new(date, moon(date, &settings)),
                panchang: panchang_with(date, &settings.panchang),
                zodiac: zodiac_with(date, &settings.panchang),
            };
            emit(json, report::dashboard_text(&report), &report);
        }
    }
}
