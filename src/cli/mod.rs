pub mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use room_booking_dashboard::domain::calendar::date_axis::parse_iso_date;
use room_booking_dashboard::domain::calendar::quick_range::QuickRange;

#[derive(Debug, Parser)]
#[command(name = "room-dashboard", version, about = "Rooms-versus-dates booking dashboard")]
pub struct Cli {
    /// Hotel snapshot (JSON) served as the data source.
    #[arg(long)]
    pub data: String,

    /// Dashboard configuration (JSON).
    #[arg(long)]
    pub config: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Capability held by the user; repeat for several.
    #[arg(long = "capability")]
    pub capabilities: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the room/date grid.
    Grid {
        /// Month to show (YYYY-MM).
        #[arg(long, conflicts_with_all = ["from", "quick"])]
        month: Option<String>,

        #[arg(long, requires = "to", conflicts_with = "quick")]
        from: Option<NaiveDate>,

        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,

        #[arg(long, value_enum)]
        quick: Option<QuickArg>,
    },

    /// Print today's occupancy.
    Stats,

    /// Click two available cells, given as ROW:YYYY-MM-DD.
    Select {
        #[arg(value_parser = parse_cell)]
        first: (usize, NaiveDate),

        #[arg(value_parser = parse_cell)]
        second: (usize, NaiveDate),
    },

    /// Open an existing booking as if its customer tag was clicked.
    Open { booking: i64 },

    /// Check whether a new booking line fits into a room.
    Check { room: String, checkin: NaiveDate, checkout: NaiveDate },

    /// Booking detail report.
    Report {
        #[arg(long)]
        checkin: Option<NaiveDate>,

        #[arg(long)]
        checkout: Option<NaiveDate>,

        /// Room name.
        #[arg(long)]
        room: Option<String>,

        /// Write the report as CSV to this file instead of printing it.
        #[arg(long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum QuickArg {
    Today,
    Tomorrow,
    Week,
    Next7,
    Next30,
    Month,
    NextMonth,
}

impl From<QuickArg> for QuickRange {
    fn from(arg: QuickArg) -> Self {
        match arg {
            QuickArg::Today => QuickRange::Today,
            QuickArg::Tomorrow => QuickRange::Tomorrow,
            QuickArg::Week => QuickRange::ThisWeek,
            QuickArg::Next7 => QuickRange::Next7Days,
            QuickArg::Next30 => QuickRange::Next30Days,
            QuickArg::Month => QuickRange::ThisMonth,
            QuickArg::NextMonth => QuickRange::NextMonth,
        }
    }
}

fn parse_cell(value: &str) -> Result<(usize, NaiveDate), String> {
    let (row, date) = value.split_once(':').ok_or_else(|| format!("expected ROW:YYYY-MM-DD, got '{}'", value))?;
    let row = row.parse::<usize>().map_err(|e| format!("invalid row '{}': {}", row, e))?;
    let date = parse_iso_date(date).map_err(|e| e.to_string())?;
    Ok((row, date))
}
