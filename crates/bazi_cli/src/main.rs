use std::fmt::Display;
use std::path::PathBuf;

use bazi_base::{ALL_SOLAR_TERMS, month_pillar};
use bazi_rs::{
    AnalysisConfig, Avoidance, BirthInput, ChartProfile, Energy, FocusArea, FortuneService,
    JsonFileRepository, PillarChart, REFERENCE_TIMEZONE, Report, StoredRecord, Strategy,
    TargetYear, UserContext,
};
use bazi_time::known_timezones;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bazi", about = "Four pillars chart and yearly report CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the result file from the configuration
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM); omit when unknown
    #[arg(long)]
    time: Option<String>,
    /// IANA-style timezone identifier
    #[arg(long, default_value = REFERENCE_TIMEZONE)]
    tz: String,
}

#[derive(Args)]
struct ContextArgs {
    /// Career, Wealth, Romance, Health or Social
    #[arg(long)]
    focus: String,
    /// Current situation; defaults to the first suggestion for the focus area
    #[arg(long)]
    situation: Option<String>,
    /// hold-steady, advance, defend-then-advance or advance-then-defend
    #[arg(long, default_value = "hold-steady")]
    strategy: String,
    /// One to three things to avoid, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    avoid: Vec<String>,
    /// Ample, Steady, Stretched or Depleted
    #[arg(long, default_value = "Steady")]
    energy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth moment
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Element balance, ten gods and target-year interaction
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate and store a full report
    Report {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        context: ContextArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the stored report
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete the stored report
    Clear,
    /// Pillar and month pillars of a target year
    Year {
        /// Defaults to the configured target year
        #[arg(long)]
        year: Option<i32>,
    },
    /// List recognized timezone identifiers
    Timezones,
}

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{what}: {e}");
        std::process::exit(1);
    })
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got {s}"))?;
    let hour: u32 = h.parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = m.parse().map_err(|e| format!("{e}"))?;
    Ok((hour, minute))
}

fn birth_input(args: &BirthArgs) -> BirthInput {
    let (year, month, day) = or_exit(parse_date(&args.date), "Invalid date");
    match &args.time {
        Some(t) => {
            let (hour, minute) = or_exit(parse_time(t), "Invalid time");
            BirthInput::new(year, month, day, hour, minute, &args.tz)
        }
        None => BirthInput::date_only(year, month, day, &args.tz),
    }
}

fn parse_focus(s: &str) -> FocusArea {
    FocusArea::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid focus area: {s}");
        eprintln!("Valid: Career, Wealth, Romance, Health, Social");
        std::process::exit(1);
    })
}

fn parse_strategy(s: &str) -> Strategy {
    Strategy::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid strategy: {s}");
        eprintln!("Valid: hold-steady, advance, defend-then-advance, advance-then-defend");
        std::process::exit(1);
    })
}

fn parse_avoidance(s: &str) -> Avoidance {
    Avoidance::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid avoidance: {s}");
        eprintln!(
            "Valid: impulsive-spending, risky-investment, overwork, conflict, late-nights, \
             gossip, hasty-commitment, procrastination"
        );
        std::process::exit(1);
    })
}

fn parse_energy(s: &str) -> Energy {
    Energy::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid energy level: {s}");
        eprintln!("Valid: Ample, Steady, Stretched, Depleted");
        std::process::exit(1);
    })
}

fn user_context(args: &ContextArgs) -> UserContext {
    let focus = parse_focus(&args.focus);
    let situation = args
        .situation
        .clone()
        .unwrap_or_else(|| focus.suggested_situations()[0].to_string());
    let avoidances = args.avoid.iter().map(|a| parse_avoidance(a)).collect();
    or_exit(
        UserContext::new(
            focus,
            situation,
            parse_strategy(&args.strategy),
            avoidances,
            parse_energy(&args.energy),
        ),
        "Invalid context",
    )
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value), "Serialization failed"));
}

fn print_pillars(chart: &PillarChart) {
    for (pos, p) in chart.pillars.iter() {
        println!("{:<5} {:<10} {}", pos.name(), p.to_string(), p.hanzi());
    }
    if !chart.pillars.has_hour() {
        println!("Hour  (unknown)");
    }
    println!(
        "Day master: {} ({})",
        chart.day_stem.name(),
        chart.day_stem.element().name()
    );
    let sm = chart.solar_month;
    println!(
        "Solar month {} ({}){}",
        sm.solar_month,
        sm.term.english(),
        if sm.near_boundary { ", near term boundary" } else { "" }
    );
}

fn print_profile(p: &ChartProfile) {
    for (pos, pillar) in p.pillars.iter() {
        println!("{:<5} {}", pos.name(), pillar);
    }
    println!("Day master: {} ({})", p.day_stem.name(), p.day_element().name());
    println!("Elements:");
    for (e, w) in p.element_distribution.iter() {
        println!("  {:<6} {w:.1}", e.name());
    }
    println!("Balance: {}", p.balance.name());
    let gods: Vec<String> = p
        .top_relations
        .iter()
        .map(|r| format!("{} {:.1}", r.god.english(), r.weight))
        .collect();
    println!("Top relations: {}", gods.join(", "));
    let names = |v: &[bazi_rs::Element]| {
        v.iter().map(|e| e.name()).collect::<Vec<_>>().join(", ")
    };
    println!("Favorable: {}", names(&p.favorable));
    println!("Unfavorable: {}", names(&p.unfavorable));
    let y = p.target_year_interaction;
    println!(
        "{} ({}): {} - {}, strength {}",
        y.target_year,
        y.target_element.name(),
        y.relation.name(),
        y.category.name(),
        y.strength
    );
}

fn print_report(r: &Report) {
    println!("Overall {}: {}", r.overall.score, r.overall.headline);
    println!("  Keywords: {}", r.overall.keywords.join(", "));
    println!("  {}", r.overall.advice);
    println!();
    for d in &r.domains {
        println!("{:<8} {:>3} {}", d.domain.name(), d.score, d.trend.name());
        println!("  + {}", d.bright_spot);
        println!("  - {}", d.pitfall);
        for a in &d.actions {
            println!("  * {a}");
        }
    }
    println!();
    for m in &r.months {
        println!(
            "{:>2} {:<9} {:<10} {:<11} {}",
            m.month,
            m.solar_term.name(),
            m.pillar.to_string(),
            m.tag.name(),
            m.theme
        );
        println!("   {}; good for {}", m.method, m.good_for.to_lowercase());
        for rem in &m.reminders {
            println!("   ! {rem}");
        }
    }
    println!();
    println!("{}", r.basis.disclaimer);
}

fn print_record(record: &StoredRecord) {
    println!(
        "Result {} (v{}, {})",
        record.token,
        record.version,
        record.timestamp.to_rfc3339()
    );
    println!();
    print_profile(&record.snapshot.chart_profile);
    println!();
    print_report(&record.snapshot.report);
}

fn print_year(target: TargetYear) {
    println!(
        "{}: {} ({}), {}",
        target.year,
        target.pillar,
        target.pillar.hanzi(),
        target.element().name()
    );
    for term in ALL_SOLAR_TERMS {
        let w = term.window();
        println!(
            "{:>2} {:<10} from {:02}-{:02}  {}",
            term.solar_month(),
            term.english(),
            w.month,
            w.first_day,
            month_pillar(target.pillar.stem, term.solar_month())
        );
    }
}

fn service(cli: &Cli) -> FortuneService<JsonFileRepository> {
    let mut config = or_exit(
        AnalysisConfig::load_or_default(cli.config.as_deref()),
        "Failed to load config",
    );
    if let Some(path) = &cli.store {
        config.store_path = path.clone();
    }
    FortuneService::with_file_store(config)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bazi=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut svc = service(&cli);

    match cli.command {
        Commands::Pillars { birth } => {
            let chart = or_exit(svc.pillars(&birth_input(&birth)), "Failed to compute pillars");
            print_pillars(&chart);
        }

        Commands::Chart { birth, json } => {
            let profile = or_exit(svc.chart(&birth_input(&birth)), "Failed to build chart");
            if json {
                print_json(&profile);
            } else {
                print_profile(&profile);
            }
        }

        Commands::Report {
            birth,
            context,
            json,
        } => {
            let input = birth_input(&birth);
            let ctx = user_context(&context);
            let record = or_exit(svc.submit(&input, ctx), "Failed to generate report");
            tracing::info!("Saved to {}", svc.repository().path().display());
            if json {
                print_json(&record);
            } else {
                print_record(&record);
            }
        }

        Commands::Show { json } => match or_exit(svc.latest(), "Failed to load result") {
            Some(record) if json => print_json(&record),
            Some(record) => print_record(&record),
            None => println!("No stored result."),
        },

        Commands::Clear => {
            or_exit(svc.clear(), "Failed to clear result");
            println!("Stored result cleared.");
        }

        Commands::Year { year } => {
            let target = year.map_or_else(|| svc.target_year(), TargetYear::new);
            print_year(target);
        }

        Commands::Timezones => {
            for tz in known_timezones() {
                println!("{tz}");
            }
        }
    }
}
