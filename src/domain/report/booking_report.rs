use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Write;

use crate::domain::booking::record::{BookingRecord, PaymentState};
use crate::domain::booking::room::RoomRef;
use crate::domain::calendar::date_axis::format_iso_date;
use crate::domain::utils::id::RoomId;
use crate::error::{Error, Result};

pub const REPORT_HEADERS: [&str; 8] = ["Sl No.", "Guest Name", "Room No.", "Check In", "Check Out", "Duration", "Payment Status", "Reference No."];

/// Which booking lines end up in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Bookings checking in on or after this date.
    pub checkin: Option<NaiveDate>,

    /// Bookings checking out on or before this date.
    pub checkout: Option<NaiveDate>,

    pub room: Option<RoomId>,
}

impl ReportFilter {
    pub fn validate(&self) -> Result<()> {
        if let (Some(checkin), Some(checkout)) = (self.checkin, self.checkout) {
            if checkin > checkout {
                return Err(Error::ValidationError("Check-in date should be less than Check-out date".to_string()));
            }
        }
        Ok(())
    }

    /// Whether the booking's own stay lies inside the filter dates.
    fn selects(&self, record: &BookingRecord) -> bool {
        let Some(stay) = record.stay() else {
            return false;
        };
        !self.checkin.is_some_and(|checkin| stay.checkin < checkin) && !self.checkout.is_some_and(|checkout| stay.checkout > checkout)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub guest_name: String,
    pub room_name: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub nights: i64,
    pub payment_state: PaymentState,
    pub reference: String,
}

impl ReportRow {
    pub fn duration_label(&self) -> String {
        format!("{} days", self.nights)
    }
}

/// Lists every line of the bookings selected by `filter`, in record order.
///
/// Dates select whole bookings; the room narrows the listed lines.
pub fn generate(records: &[BookingRecord], rooms: &[RoomRef], filter: &ReportFilter) -> Result<Vec<ReportRow>> {
    filter.validate()?;

    let room_names: HashMap<RoomId, &str> = rooms.iter().map(|room| (room.id, room.name.as_str())).collect();
    let mut rows = Vec::new();

    for record in records.iter().filter(|record| filter.selects(record)) {
        for line in &record.lines {
            if filter.room.is_some_and(|room| room != line.room_id) {
                continue;
            }

            let room_name = match room_names.get(&line.room_id) {
                Some(name) => name.to_string(),
                None => {
                    log::warn!("Booking '{}' references unknown room {}.", record.reference, line.room_id);
                    line.room_id.to_string()
                }
            };

            rows.push(ReportRow {
                guest_name: record.customer_name.clone(),
                room_name,
                checkin: line.stay.checkin,
                checkout: line.stay.checkout,
                nights: line.stay.night_count(),
                payment_state: record.payment_state,
                reference: record.reference.clone(),
            });
        }
    }

    log::info!("Booking report contains {} lines.", rows.len());
    Ok(rows)
}

/// Writes the report as `;`-separated CSV with a header row and a running serial number.
pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    csv_wtr.write_record(REPORT_HEADERS)?;

    for (index, row) in rows.iter().enumerate() {
        csv_wtr.write_record([
            (index + 1).to_string(),
            row.guest_name.clone(),
            row.room_name.clone(),
            format_iso_date(row.checkin),
            format_iso_date(row.checkout),
            row.duration_label(),
            row.payment_state.label().to_string(),
            row.reference.clone(),
        ])?;
    }

    csv_wtr.flush()?;
    Ok(())
}
