use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use grah_rs::{
    BirthMoment, ChartConfig, ChartEngine, ChartRequest, FixedClock, Language, MatchKind,
    PalmAnalysis, PalmInput, birth_chart_with, palm_analysis, render_summary, resolve_place,
};
use grah_time::{Clock, SystemClock};
use grah_vedic_base::{
    BirthChart, lahiri_ayanamsa_deg, nakshatra_from_longitude, rashi_from_longitude,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grah", about = "Grah birth-chart and palm-line CLI")]
struct Cli {
    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a place name to coordinates
    Resolve {
        /// Free-text place name
        place: String,
    },
    /// Generate a birth chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, HH:MM:SS or hh:mm AM/PM)
        #[arg(long, default_value = "")]
        time: String,
        /// Birth place name
        #[arg(long)]
        place: String,
        /// Latitude override in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude override in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Summary language
        #[arg(long, value_enum, default_value_t = LangArg::English)]
        lang: LangArg,
        /// Print the chart as JSON instead of a text summary
        #[arg(long)]
        json: bool,
        /// Reference "now" for the dasha age (YYYY-MM-DD[THH:MM]); defaults to the system clock
        #[arg(long)]
        now: Option<String>,
        /// Name shown in the summary heading
        #[arg(long)]
        name: Option<String>,
        /// Conjunction orb for yogas in degrees
        #[arg(long, default_value = "10.0")]
        orb: f64,
    },
    /// Lahiri ayanamsa for a date
    Ayanamsa {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Classify palm lines from detector output
    Palm {
        /// JSON file with width, height, segments and keypoints
        #[arg(long)]
        input: PathBuf,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    English,
    Hindi,
}

impl From<LangArg> for Language {
    fn from(l: LangArg) -> Self {
        match l {
            LangArg::English => Language::English,
            LangArg::Hindi => Language::Hindi,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_moment(s: &str) -> BirthMoment {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid datetime {s:?}: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn read_palm_input(path: &PathBuf) -> PalmInput {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Invalid palm input {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn print_chart(chart: &BirthChart, name: Option<&str>, lang: Language, json: bool) {
    if json {
        print_json(chart);
        return;
    }
    println!("{}", render_summary(chart, name, lang));
    if chart.is_fallback() {
        println!();
        println!("(fallback chart: input could not be evaluated)");
    } else if !chart.fallback_steps.is_empty() {
        let steps: Vec<&str> = chart.fallback_steps.iter().map(|s| s.name()).collect();
        println!();
        println!("(fallback values used for: {})", steps.join(", "));
    }
}

fn print_palm(a: &PalmAnalysis) {
    println!("Hand shape: {}", a.hand_shape);
    for line in &a.lines {
        println!(
            "{}: ({:.0}, {:.0}) -> ({:.0}, {:.0}), strength {:.2}, length {:.3}",
            line.name,
            line.points[0].x,
            line.points[0].y,
            line.points[1].x,
            line.points[1].y,
            line.strength,
            line.length
        );
    }
    for m in &a.mounts {
        println!("{}: {:.1}", m.name.name(), m.prominence);
    }
    let f = a.finger_lengths;
    println!(
        "Fingers: thumb {:.2}, index {:.2}, middle {:.2}, ring {:.2}, pinky {:.2}",
        f.thumb, f.index, f.middle, f.ring, f.pinky
    );
    if a.is_fallback() {
        println!("(fallback lines used)");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve { place } => {
            let r = resolve_place(&place);
            let kind = match r.kind {
                MatchKind::Exact => "exact".to_string(),
                MatchKind::Partial { key } => format!("partial ({key})"),
                MatchKind::Fallback => "fallback".to_string(),
            };
            println!(
                "{:.4}, {:.4} [{}] tz={}",
                r.point.latitude,
                r.point.longitude,
                kind,
                r.timezone.unwrap_or("-")
            );
        }

        Commands::Chart {
            date,
            time,
            place,
            lat,
            lon,
            lang,
            json,
            now,
            name,
            orb,
        } => {
            let config = ChartConfig {
                conjunction_orb_deg: orb,
                ..ChartConfig::default()
            };
            if let Err(e) = config.validate() {
                eprintln!("Invalid --orb: {e}");
                std::process::exit(1);
            }
            let now = match now {
                Some(s) => parse_moment(&s).datetime(),
                None => SystemClock.now(),
            };
            debug!(%now, "dasha reference time");
            let engine = ChartEngine::with_clock(config, FixedClock(now));
            let req = ChartRequest::new(date, time, place).with_coordinates(lat, lon);
            let chart = birth_chart_with(&engine, &req);
            print_chart(&chart, name.as_deref(), lang.into(), json);
        }

        Commands::Ayanamsa { date } => {
            let moment = parse_moment(&date);
            match lahiri_ayanamsa_deg(&moment) {
                Ok(aya) => println!("{aya:.6}"),
                Err(e) => {
                    eprintln!("Ayanamsa failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Commands::Palm { input, json } => {
            let analysis = palm_analysis(&read_palm_input(&input));
            if json {
                print_json(&analysis);
            } else {
                print_palm(&analysis);
            }
        }
    }
}
