mod cli;

use anyhow::{Context, bail};
use clap::Parser;
use std::fs::File;
use std::sync::Arc;

use crate::cli::output::{find_record_reference, render_grid, render_outcome, render_report, render_stats};
use crate::cli::{Cli, Command};
use room_booking_dashboard::domain::clock::clock::{SharedClock, SystemClock};
use room_booking_dashboard::domain::clock::clock_mock::FixedClock;
use room_booking_dashboard::domain::config::DashboardConfig;
use room_booking_dashboard::domain::report::booking_report::{self, ReportFilter};
use room_booking_dashboard::domain::utils::id::BookingId;
use room_booking_dashboard::{logger, open_dashboard_from_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    log::info!("Logger initialized. Starting room dashboard.");

    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path).with_context(|| format!("loading configuration '{}'", path))?,
        None => DashboardConfig::default(),
    };

    let clock: SharedClock = match cli.today {
        Some(today) => Arc::new(FixedClock::new(today)),
        None => Arc::new(SystemClock),
    };

    let (mut dashboard, hotel) =
        open_dashboard_from_file(&cli.data, config, cli.capabilities.clone(), clock).await.with_context(|| format!("opening hotel snapshot '{}'", cli.data))?;

    match cli.command {
        Command::Grid { month, from, to, quick } => {
            if let Some(month) = month {
                dashboard.show_month_value(&month).await?;
            } else if let (Some(from), Some(to)) = (from, to) {
                dashboard.show_range(from, to).await?;
            } else if let Some(quick) = quick {
                dashboard.show_quick_range(quick.into()).await?;
            }

            print!("{}", render_grid(dashboard.title(), &dashboard.grid()?));
        }
        Command::Stats => {
            print!("{}", render_stats(&dashboard.stats()));
        }
        Command::Select { first, second } => {
            let (start, end) = (first.1.min(second.1), first.1.max(second.1));
            if !dashboard.axis().contains(start) || !dashboard.axis().contains(end) {
                dashboard.show_range(start, end).await?;
            }

            for (row, date) in [first, second] {
                let outcome = dashboard.click_cell(row, date).await?;
                println!("{}", render_outcome(&outcome).trim_end());
            }
        }
        Command::Open { booking } => {
            let outcome = dashboard.open_booking(BookingId::new(booking)).await?;
            if let Some(reference) = find_record_reference(hotel.records(), booking) {
                println!("{}", reference);
            }
            println!("{}", render_outcome(&outcome));
        }
        Command::Check { room, checkin, checkout } => {
            let stay = dashboard.check_room_line(&room, checkin, checkout)?;
            println!("Room {} is free from {} to {} ({} nights).", room, stay.checkin, stay.checkout, stay.night_count());
        }
        Command::Report { checkin, checkout, room, output } => {
            let room = match room {
                Some(name) => match hotel.room_refs().iter().find(|r| r.name == name) {
                    Some(room_ref) => Some(room_ref.id),
                    None => bail!("Unknown room '{}'", name),
                },
                None => None,
            };

            let filter = ReportFilter { checkin, checkout, room };
            let rows = booking_report::generate(hotel.records(), hotel.room_refs(), &filter)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("creating report file '{}'", path))?;
                    booking_report::write_csv(&rows, file)?;
                    log::info!("Wrote {} report lines to '{}'.", rows.len(), path);
                }
                None => print!("{}", render_report(&rows)),
            }
        }
    }

    Ok(())
}
