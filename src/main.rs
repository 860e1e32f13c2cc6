use crate::dispatch::{Booking, Dispatcher, Outcome};
use crate::scenario::{InputFormat, Scenario};
use crate::taxi::Taxi;
use crate::time::Time;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tabled::settings::Style;

mod dispatch;
mod error;
mod fare;
mod fleet;
mod route;
mod scenario;
mod taxi;
mod time;

#[derive(Parser)]
#[command(about = "Dispatches taxis to ride bookings along a linear route")]
struct Args {
    /// Scenario input; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
    /// Layout of the scenario input
    #[arg(short, long, value_enum, default_value_t = InputFormat::Tokens)]
    format: InputFormat,
    /// Print the fleet table to stderr after the run
    #[arg(short, long)]
    summary: bool,
    /// Keep taking bookings from a shell once the scenario is dispatched
    #[arg(short, long, requires = "input")]
    interactive: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn fleet_table(taxis: &[&Taxi]) -> String {
    let mut table = tabled::Table::new(taxis);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    table.to_string()
}

fn colored_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Assigned { .. } => outcome.to_string().green().to_string(),
        Outcome::Rejected { .. } => outcome.to_string().yellow().to_string(),
    }
}

fn parse_booking(parts: &[&str]) -> Result<Booking, String> {
    let [customer_id, pickup, drop, time] = parts else {
        return Err("Usage: book <customer> <pickup> <drop> <HH:MM>".to_string());
    };
    let point = |s: &str| s.parse::<usize>().map_err(|_| format!("'{}' is not a point", s));
    Ok(Booking {
        customer_id: Arc::from(*customer_id),
        pickup: point(*pickup)?,
        drop: point(*drop)?,
        time: time.parse::<Time>().map_err(|e| e.to_string())?,
    })
}

fn shell(dispatcher: &mut Dispatcher) -> Result<(), Box<dyn std::error::Error>> {
    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "book".to_string(),
            "ls".to_string(),
            "history".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "book" => match parse_booking(&parts[1..]) {
                        Ok(booking) => match dispatcher.dispatch(&booking) {
                            Ok(outcome) => println!("{}", colored_outcome(&outcome)),
                            Err(e) => println!("{}", e.to_string().red()),
                        },
                        Err(msg) => println!("{}", msg.red()),
                    },
                    "ls" => {
                        let sub = parts.get(1).copied().unwrap_or("a");
                        let fleet = dispatcher.fleet();
                        let taxis: Vec<&Taxi> = match sub {
                            "f" | "free" => fleet.available().collect(),
                            "b" | "busy" => fleet.taxis().iter().filter(|t| !t.is_available()).collect(),
                            _ => fleet.taxis().iter().collect(), // 'ls' or 'ls a'
                        };
                        if taxis.is_empty() {
                            println!("No matching taxis found.")
                        } else {
                            println!("{}", fleet_table(&taxis));
                        }
                    },
                    "history" => {
                        dispatcher.history().iter().for_each(|o| println!("{}", colored_outcome(o)));
                        println!("{}", dispatcher.summary().to_string().bold());
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  book <c> <p> <d> <t> - Book customer <c> from point <p> to <d> at HH:MM <t>");
                        println!("  ls [status]          - List the fleet or filter by status: f - free, b - busy");
                        println!("  history              - Show every booking outcome so far");
                        println!("  help / ?             - Show this help menu");
                        println!("  exit / quit          - Exit the dispatcher\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = Scenario::load(args.input.as_deref(), args.format)?;
    log::info!(
        "dispatching {} bookings to {} taxis over {} points",
        scenario.bookings.len(),
        scenario.taxis,
        scenario.route.points()
    );

    let mut dispatcher = scenario.dispatcher();
    if dispatcher.fleet().is_empty() {
        log::warn!("scenario has no taxis, every booking will be rejected");
    }
    let outcomes = dispatcher.run(&scenario.bookings)?;
    let mut out = std::io::stdout().lock();
    for outcome in &outcomes {
        writeln!(out, "{}", outcome)?;
    }
    out.flush()?;
    drop(out);
    log::info!("{}", dispatcher.summary());

    if args.summary {
        let taxis: Vec<&Taxi> = dispatcher.fleet().taxis().iter().collect();
        eprintln!("{}", fleet_table(&taxis));
    }

    if args.interactive {
        println!("Dispatcher online. {} taxis on {} points.", dispatcher.fleet().len(), dispatcher.route().points());
        shell(&mut dispatcher)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("failed running calltaxi: {e}");
        std::process::exit(1);
    }
}
