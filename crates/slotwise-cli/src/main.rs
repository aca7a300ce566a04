//! `slotwise` CLI — find and rank common meeting slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find ranked meeting times from a session file (stdin if -i omitted)
//! slotwise find -i session.json
//!
//! # Show more than the default five candidates
//! slotwise find -i session.json --limit 10
//!
//! # Render a calendar invite for a chosen slot
//! slotwise invite --start 2024-01-01T14:00:00Z --end 2024-01-01T15:00:00Z \
//!     --subject "Project kickoff" -o invite.ics
//! ```
//!
//! A session file holds the participants and the meeting request:
//!
//! ```json
//! {
//!   "participants": [
//!     {"name": "Alice", "timezone": "America/New_York",
//!      "availability": [{"start": "2024-01-01T09:00:00", "end": "2024-01-01T12:00:00"}]}
//!   ],
//!   "request": {"duration_minutes": 60}
//! }
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};

use slotwise_core::ops::{
    self, AddParticipantRequest, FindMeetingTimesRequest, GenerateInviteRequest,
};
use slotwise_core::Scheduler;

#[derive(Parser)]
#[command(
    name = "slotwise",
    version,
    about = "Multi-participant meeting-slot finder"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find and rank common meeting times from a session file
    Find {
        /// Session JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum number of candidates to print
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Render an iCalendar invite for a chosen slot
    Invite {
        /// Slot start (ISO-8601; zone-less input is treated as UTC)
        #[arg(long)]
        start: String,
        /// Slot end (ISO-8601; zone-less input is treated as UTC)
        #[arg(long)]
        end: String,
        /// Event summary line
        #[arg(long, default_value = "Scheduled Meeting")]
        subject: String,
        /// Event description
        #[arg(long, default_value = "")]
        description: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// A scheduling session as loaded from a JSON file.
#[derive(Deserialize)]
struct SessionFile {
    participants: Vec<AddParticipantRequest>,
    request: FindMeetingTimesRequest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find { input, limit } => {
            let raw = read_input(input.as_deref())?;
            let session: SessionFile =
                serde_json::from_str(&raw).context("Failed to parse session file")?;

            let mut scheduler = Scheduler::new();
            for participant in session.participants {
                let name = participant.name.clone();
                let response = ops::add_participant(&mut scheduler, participant)
                    .with_context(|| format!("Failed to add participant '{name}'"))?;
                for warning in &response.warnings {
                    eprintln!("warning: {}: {}", response.name, warning);
                }
            }

            let response = ops::find_meeting_times(&scheduler, session.request)
                .context("Failed to find meeting times")?;

            if response.candidates.is_empty() {
                println!("No common slots found matching the criteria.");
                return Ok(());
            }

            println!("Found the following potential slots:");
            for (i, candidate) in response.candidates.iter().take(limit).enumerate() {
                println!(
                    "{}. {} to {} (score: {})",
                    i + 1,
                    candidate.start,
                    candidate.end,
                    candidate.score
                );
            }
        }
        Commands::Invite {
            start,
            end,
            subject,
            description,
            output,
        } => {
            let response = ops::generate_invite(GenerateInviteRequest {
                start,
                end,
                subject,
                description,
            })
            .context("Failed to generate invite")?;
            write_output(output.as_deref(), &response.ics)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
