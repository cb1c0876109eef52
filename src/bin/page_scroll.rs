use clap::Parser;
use fastscroll::config::EngineConfig;
use fastscroll::error::ScenarioError;
use fastscroll::{Result, Scenario};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Replay a page scroll scenario and print each step's outcome as JSON.
#[derive(Parser, Debug)]
#[command(name = "page_scroll", version, about)]
struct Args {
  /// Scenario JSON file ("-" reads stdin)
  input: PathBuf,

  /// Output compact JSON instead of pretty-printing.
  #[arg(long)]
  compact: bool,

  /// Apply FASTSCROLL_* environment overrides on top of the scenario config
  #[arg(long)]
  env_overrides: bool,

  /// Only load and validate the scenario
  #[arg(long)]
  check: bool,
}

fn main() -> ExitCode {
  // Avoid panicking on SIGPIPE/BrokenPipe when piped through tools like `head`.
  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    let mut msg = info.to_string();
    if let Some(s) = info.payload().downcast_ref::<&str>() {
      msg = (*s).to_string();
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
      msg = s.clone();
    }
    if msg.contains("Broken pipe") {
      std::process::exit(0);
    }
    default_hook(info);
  }));

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("page_scroll: {err}");
      ExitCode::FAILURE
    }
  }
}

fn run(args: &Args) -> Result<()> {
  let mut scenario = if args.input.as_os_str() == "-" {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Scenario::from_json(&buf)?
  } else {
    Scenario::from_path(&args.input)?
  };

  if args.env_overrides {
    let config: EngineConfig = scenario
      .config
      .clone()
      .with_overrides(|key| std::env::var(key).ok());
    scenario = scenario.with_config(config);
  }

  if args.check {
    scenario.build_document()?;
    eprintln!(
      "page_scroll: {} containers, {} invokers, {} steps OK",
      scenario.containers.len(),
      scenario.invokers.len(),
      scenario.steps.len()
    );
    return Ok(());
  }

  let report = scenario.replay()?;
  let json = if args.compact {
    serde_json::to_string(&report)
  } else {
    serde_json::to_string_pretty(&report)
  }
  .map_err(ScenarioError::from)?;
  println!("{json}");

  Ok(())
}
