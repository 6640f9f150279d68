use std::io::BufRead;

use anyhow::Context;
use clap::Parser;
use startlists::config::{CliConfig, Settings};
use startlists::core::board::{heat_summary, present, ConsoleBoard};
use startlists::utils::error::ErrorSeverity;
use startlists::utils::{logger, validation::Validate};
use startlists::{EventCatalog, Navigator, StartListError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting startlists CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    if let Err(e) = run(&config) {
        let severity = e
            .downcast_ref::<StartListError>()
            .map(StartListError::severity)
            .unwrap_or(ErrorSeverity::High);
        tracing::error!("❌ startlists failed: {:#} (severity: {:?})", e, severity);
        match e.downcast_ref::<StartListError>() {
            Some(err) => {
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());
            }
            None => eprintln!("❌ {:#}", e),
        }
        let exit_code = match severity {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let settings = Settings::from_file(&config.settings)?;
    settings.validate()?;

    let dir = config
        .startlist_dir
        .clone()
        .unwrap_or_else(|| settings.startlist_dir.clone());

    tracing::info!("Loading start lists from {}", dir);
    let catalog = EventCatalog::load_dir(&dir)
        .with_context(|| format!("loading start lists from {}", dir))?;
    tracing::info!("Loaded {} events", catalog.len());

    if config.json {
        let text = serde_json::to_string_pretty(catalog.events()).map_err(StartListError::from)?;
        println!("{}", text);
        return Ok(());
    }

    if config.dump {
        dump_catalog(&catalog);
        return Ok(());
    }

    if config.interactive {
        browse(&catalog)?;
        return Ok(());
    }

    for event in catalog.events() {
        println!(
            "Event {:>4}  {:<40}  {} heats",
            event.event,
            event.event_desc,
            event.num_heats()
        );
    }
    Ok(())
}

fn dump_catalog(catalog: &EventCatalog) {
    for event in catalog.events() {
        for heat in &event.heats {
            println!("{}", heat_summary(heat));
        }
    }
}

/// Stdin-driven walk over the catalog, one heat at a time. The board is
/// redrawn after every transition.
fn browse(catalog: &EventCatalog) -> startlists::Result<()> {
    let mut nav = Navigator::new(catalog)?;
    let mut board = ConsoleBoard::default();

    show(&nav, &mut board);
    println!("n: next heat, p: previous heat, N: next event, P: previous event, q: quit");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| StartListError::Io {
            path: "<stdin>".to_string(),
            source: e,
        })?;
        match line.trim() {
            "n" => nav.next_heat(),
            "p" => nav.prev_heat(),
            "N" => nav.next_event(),
            "P" => nav.prev_event(),
            "q" => break,
            "" => continue,
            other => {
                println!("unknown command: {}", other);
                continue;
            }
        }
        show(&nav, &mut board);
    }
    Ok(())
}

fn show(nav: &Navigator<'_>, board: &mut ConsoleBoard) {
    present(nav, board);
    println!("{}", board.render());
    if let Some(heat) = nav.current_heat() {
        tracing::info!("{}", heat_summary(heat));
    }
}
