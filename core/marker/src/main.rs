mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::command::Command;
use domain::LoadWarning;
use ports::inbound::UseCaseRunner;
use usecase::{DuplicateGroup, Hit, InstallInput, InstallReport};
use wiring::{overrides_from, wire_marker, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config.command;
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .field("command", cmd.name())
                .field("write", cmd.is_write())
                .field("data_dir", self.app.dirs.data_dir.display().to_string()),
        );

        let result = self.dispatch(cmd.clone());

        match &result {
            Ok(code) => self.log(
                LogRecord::new(LogLevel::Info, "command finished")
                    .field("command", cmd.name())
                    .field("exit_code", *code),
            ),
            Err(e) => self.log(
                LogRecord::new(LogLevel::Error, "command failed")
                    .kind("error")
                    .field("command", cmd.name())
                    .field("error", e.to_string()),
            ),
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: Command) -> Result<i32, Error> {
        match cmd {
            Command::Search { query, json, limit } => {
                let report = self.app.search_use_case.run(&query, limit)?;
                print_warnings(&report.warnings);
                print_hits(&report.hits, json)?;
                Ok(0)
            }
            Command::List { json } => {
                let report = self.app.search_use_case.list()?;
                print_warnings(&report.warnings);
                print_hits(&report.hits, json)?;
                Ok(0)
            }
            Command::Expand { position, values } => {
                let (expanded, warnings) = self.app.expand_use_case.run(position, &values)?;
                print_warnings(&warnings);
                println!("{}", expanded);
                Ok(0)
            }
            Command::Add {
                template,
                description,
            } => {
                let (position, dropped) = self.app.marks_use_case.add(&template, &description)?;
                print_dropped(&dropped);
                println!("Added bookmark #{}", position);
                Ok(0)
            }
            Command::Remove { position } => {
                let (removed, dropped) = self.app.marks_use_case.remove(position)?;
                print_dropped(&dropped);
                println!("Removed bookmark #{}: {}", position, removed.to_line());
                Ok(0)
            }
            Command::Check => {
                let (groups, warnings) = self.app.check_use_case.duplicates()?;
                print_warnings(&warnings);
                print_duplicates(&groups);
                Ok(if groups.is_empty() { 0 } else { 1 })
            }
            Command::Install { skip_checks } => {
                let report = self
                    .app
                    .install_use_case
                    .run(&InstallInput { skip_checks })?;
                print_install_report(&report);
                Ok(0)
            }
        }
    }

    fn log(&self, record: LogRecord) {
        let record = match record.kind {
            Some(_) => record.layer("cli"),
            None => record.layer("cli").kind("lifecycle"),
        };
        let _ = self.app.logger.log(&record);
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("marker: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: marker [-d|--data-dir directory] <command> [args...]");
}

fn print_warnings(warnings: &[LoadWarning]) {
    for w in warnings {
        eprintln!("marker: warning: line {}: {} (skipped)", w.line_no, w.message);
    }
}

/// 書き込み系では読み飛ばした行は保存されずに消える
fn print_dropped(dropped: &[LoadWarning]) {
    for w in dropped {
        eprintln!(
            "marker: warning: line {}: {} (dropped from marks.txt)",
            w.line_no, w.message
        );
    }
}

fn print_hits(hits: &[Hit], json: bool) -> Result<(), Error> {
    for hit in hits {
        if json {
            println!("{}", serde_json::to_string(hit)?);
        } else {
            println!(
                "{}\t{}\t{}",
                hit.position, hit.record.template, hit.record.description
            );
        }
    }
    Ok(())
}

fn print_duplicates(groups: &[DuplicateGroup]) {
    if groups.is_empty() {
        println!("No duplicate bookmarks.");
        return;
    }
    for g in groups {
        let positions = g
            .positions
            .iter()
            .map(|p| format!("#{}", p))
            .collect::<Vec<_>>()
            .join(", ");
        println!("duplicate {}: {}", positions, g.record.to_line());
    }
}

fn print_install_report(report: &InstallReport) {
    println!("---------------------------------------");
    println!("Marker installed successfully");
    println!("  shim:  {}", report.shim_path.display());
    if report.seeded {
        println!("  marks: {} (created with samples)", report.marks_path.display());
    } else {
        println!("  marks: {} (kept existing bookmarks)", report.marks_path.display());
    }
    println!();
    println!("Please add the following line to your ~/{}:", report.rc_file);
    println!();
    println!("{}", report.source_line);
    println!();
    println!("Please restart the terminal after doing that.");
    println!("---------------------------------------");
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::Display(text) => {
            print!("{}", text);
            return Ok(0);
        }
    };
    let app = wire_marker(&overrides_from(&config))?;
    let runner = Runner { app };
    runner.run(config)
}
