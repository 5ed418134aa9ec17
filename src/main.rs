use clap::Parser;
use colored::Colorize;
use ftl_check::rules::{self, Verdict};
use ftl_check::time::{LocalTime, UtcTime};
use ftl_check::{Pairing, Roster, cico};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Path to the JSON roster file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    roster: PathBuf,

    /// Log verbosity: -v info, -vv debug, -vvv trace. RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Check every pairing once and exit
    #[arg(long)]
    batch: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct PairingRow {
    #[tabled(rename = "Pairing")]
    id: String,
    #[tabled(rename = "Duties")]
    duties: usize,
    #[tabled(rename = "Legs")]
    legs: usize,
    #[tabled(rename = "Transports")]
    transports: usize,
    #[tabled(rename = "Departs (UTC)")]
    departs: String,
    #[tabled(rename = "Span")]
    span: String,
}

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "Duty")]
    duty: usize,
    #[tabled(rename = "Flight")]
    flight: String,
    #[tabled(rename = "Transport")]
    transport: &'static str,
    #[tabled(rename = "Dep LT")]
    dep_lt: String,
    #[tabled(rename = "Arr LT")]
    arr_lt: String,
    #[tabled(rename = "Dep UTC")]
    dep_utc: String,
    #[tabled(rename = "Arr UTC")]
    arr_utc: String,
    #[tabled(rename = "Check-in")]
    check_in: String,
    #[tabled(rename = "Check-out")]
    check_out: String,
    #[tabled(rename = "Shift")]
    shift: String,
}

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Verdict")]
    verdict: String,
}

fn local(t: &LocalTime) -> String {
    t.format("%d%b %H:%M").to_string()
}

fn utc(t: &UtcTime) -> String {
    t.format("%d%b %H:%MZ").to_string()
}

fn pairing_rows(roster: &Roster) -> Vec<PairingRow> {
    roster
        .pairings
        .iter()
        .map(|p| PairingRow {
            id: p.id().to_string(),
            duties: p.duties().len(),
            legs: p.legs(),
            transports: p.transports(),
            departs: utc(&p.duties()[0].first_leg().dep_utc),
            span: p.span().to_string(),
        })
        .collect()
}

fn leg_rows(pairing: &Pairing) -> Vec<LegRow> {
    pairing
        .duties()
        .iter()
        .enumerate()
        .flat_map(|(i, duty)| {
            let shift = match (rules::is_early(duty), rules::is_late(duty)) {
                (true, true) => "early+late".yellow().to_string(),
                (true, false) => "early".yellow().to_string(),
                (false, true) => "late".yellow().to_string(),
                (false, false) => String::new(),
            };
            duty.legs().iter().map(move |leg| {
                let (check_in, check_out) = cico(leg);
                LegRow {
                    duty: i + 1,
                    flight: leg.flight_designator.to_string(),
                    transport: if leg.is_transport { "yes" } else { "" },
                    dep_lt: local(&leg.dep_lt),
                    arr_lt: local(&leg.arr_lt),
                    dep_utc: utc(&leg.dep_utc),
                    arr_utc: utc(&leg.arr_utc),
                    check_in: local(&check_in),
                    check_out: local(&check_out),
                    shift: shift.clone(),
                }
            })
        })
        .collect()
}

fn rule_rows(pairing: &Pairing) -> Vec<RuleRow> {
    rules::evaluate(pairing.duties())
        .into_iter()
        .map(|(rule, verdict)| RuleRow {
            rule: rule.code().to_string(),
            description: rule.description(),
            verdict: match verdict {
                Verdict::Compliant => verdict.to_string().green().to_string(),
                Verdict::Violated { .. } => verdict.to_string().red().bold().to_string(),
            },
        })
        .collect()
}

fn render<T: Tabled>(rows: &[T]) -> std::io::Result<()> {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        paginate(table.to_string())
    } else {
        println!("{}", table);
        Ok(())
    }
}

fn paginate(content: String) -> std::io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    pager.wait()?;
    Ok(())
}

fn check(pairing: &Pairing) -> std::io::Result<()> {
    println!("\nPairing {}", pairing.id().to_string().bold());
    render(&rule_rows(pairing))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let roster = Roster::load_from_file(&args.roster)?;
    println!(
        "Loaded {} pairings from {}",
        roster.pairings.len(),
        args.roster.display()
    );

    if args.batch {
        for pairing in &roster.pairings {
            check(pairing)?;
        }
        return Ok(());
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "show".to_string(),
            "check".to_string(),
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
                    "ls" => {
                        if roster.pairings.is_empty() {
                            println!("Roster has no pairings.");
                        } else {
                            render(&pairing_rows(&roster))?;
                        }
                    },
                    "show" => {
                        match parts.get(1).map(|id| (id, roster.get(id))) {
                            Some((_, Some(pairing))) => render(&leg_rows(pairing))?,
                            Some((id, None)) => println!("Unknown pairing: {}", id),
                            None => println!("Usage: show <pairing_id>"),
                        }
                    },
                    "check" => {
                        match parts.get(1) {
                            Some(id) => match roster.get(id) {
                                Some(pairing) => check(pairing)?,
                                None => println!("Unknown pairing: {}", id),
                            },
                            None => {
                                for pairing in &roster.pairings {
                                    check(pairing)?;
                                }
                            }
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                - List pairings in the roster");
                        println!("  show <id>         - Show legs of pairing <id> with check-in/check-out times");
                        println!("  check [id]        - Evaluate the FTL rules on pairing <id>, or on every pairing");
                        println!("  help / ?          - Show this help menu");
                        println!("  exit / quit       - Exit the checker\n");
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
