use room_booking_dashboard::domain::booking::record::BookingRecord;
use room_booking_dashboard::domain::dashboard::ClickOutcome;
use room_booking_dashboard::domain::grid::span_merge::{Cell, Grid};
use room_booking_dashboard::domain::report::booking_report::ReportRow;
use room_booking_dashboard::domain::utils::statistics::OccupancyStats;

const COLUMN_WIDTH: usize = 3;

/// Plain-text rendering of the grid: one 3-character column per date,
/// booking spans drawn as `[name===]` across their columns.
pub fn render_grid(title: &str, grid: &Grid) -> String {
    let name_width = grid.rows.iter().map(|r| r.room_name.chars().count()).max().unwrap_or(0).max("Room".len());
    let mut out = String::new();

    out.push_str(&format!("{}\n", title));
    if let (Some(first), Some(last)) = (grid.axis.first(), grid.axis.last()) {
        out.push_str(&format!("{} .. {}\n", first, last));
    }

    // Header labels come as ("Jan 05", "Fri"); the columns only fit the day and two weekday letters.
    let labels = grid.axis.header_labels();

    out.push_str(&format!("{:<width$} |", "", width = name_width));
    for (_, weekday) in &labels {
        out.push_str(&format!("{:>width$}", weekday.chars().take(2).collect::<String>(), width = COLUMN_WIDTH));
    }
    out.push('\n');

    out.push_str(&format!("{:<width$} |", "Room", width = name_width));
    for (day, _) in &labels {
        out.push_str(&format!("{:>width$}", day.rsplit(' ').next().unwrap_or(day), width = COLUMN_WIDTH));
    }
    out.push('\n');

    for row in &grid.rows {
        out.push_str(&format!("{:<width$} |", row.room_name, width = name_width));
        for cell in &row.cells {
            out.push_str(&render_cell(cell));
        }
        out.push('\n');
    }

    out
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Available { .. } => format!("{:>width$}", ".", width = COLUMN_WIDTH),
        Cell::Booked { span, customer_name, .. } => {
            let inner = span * COLUMN_WIDTH - 2;
            let name: String = customer_name.chars().take(inner).collect();
            let fill = "=".repeat(inner - name.chars().count());
            format!("[{}{}]", name, fill)
        }
    }
}

pub fn render_stats(stats: &OccupancyStats) -> String {
    format!(
        "Total rooms: {}\nAvailable:   {}\nBooked:      {}\nOccupancy:   {}%\n",
        stats.total_rooms, stats.available_rooms, stats.booked_rooms, stats.occupancy_rate
    )
}

pub fn render_outcome(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::SelectionStarted => "Selection started.".to_string(),
        ClickOutcome::BookingOpened { booking_id, mode } => format!("Opened booking {} ({:?}).", booking_id, mode),
        ClickOutcome::CreateFormOpened(prefill) => {
            let mut out = format!("Opened create form with {} room line(s):\n", prefill.room_lines.len());
            for line in &prefill.room_lines {
                out.push_str(&format!("  {} {} -> {} ({} nights)\n", line.room.name, line.checkin_date, line.checkout_date, line.night_count));
            }
            out
        }
        ClickOutcome::SelectionReset => "Selection reset.".to_string(),
        ClickOutcome::Ignored => "Click ignored (outside the grid).".to_string(),
    }
}

pub fn render_report(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<20} {:<8} {} -> {} {:>8} {:<15} {}\n",
            index + 1,
            row.guest_name,
            row.room_name,
            row.checkin,
            row.checkout,
            row.duration_label(),
            row.payment_state.label(),
            row.reference
        ));
    }
    out
}

pub fn find_record_reference(records: &[BookingRecord], id: i64) -> Option<&str> {
    records.iter().find(|r| r.id.value() == id).map(|r| r.reference.as_str())
}
