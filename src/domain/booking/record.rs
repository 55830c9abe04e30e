use chrono::NaiveDate;

use crate::api::hotel_dto::BookingRecordDto;
use crate::domain::booking::booking::{BookingState, BookingSummary};
use crate::domain::calendar::date_axis::parse_iso_date;
use crate::domain::calendar::stay::StayRange;
use crate::domain::config::parse_booking_state;
use crate::domain::utils::id::{BookingId, RoomId};
use crate::error::Result;

/// Invoice payment state of a booking, as shown in the booking report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    NoInvoice,
    Paid,
    InPayment,
    NotPaid,
    Cancelled,
}

impl PaymentState {
    /// `None` means no invoice exists; unknown invoice states count as cancelled.
    pub fn from_invoice_state(value: Option<&str>) -> Self {
        match value {
            None => PaymentState::NoInvoice,
            Some("paid") => PaymentState::Paid,
            Some("in_payment") => PaymentState::InPayment,
            Some("not_paid") => PaymentState::NotPaid,
            Some(_) => PaymentState::Cancelled,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentState::NoInvoice => "No Invoice",
            PaymentState::Paid => "Paid",
            PaymentState::InPayment => "Partially Paid",
            PaymentState::NotPaid => "Not Paid",
            PaymentState::Cancelled => "Cancelled",
        }
    }
}

/// One room line of a booking record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLine {
    pub room_id: RoomId,
    pub stay: StayRange,
}

/// A booking record as stored by the application server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub id: BookingId,
    pub reference: String,
    pub customer_name: String,
    pub state: BookingState,
    pub payment_state: PaymentState,
    pub lines: Vec<BookingLine>,
}

impl BookingRecord {
    pub fn from_dto(dto: BookingRecordDto) -> Result<Self> {
        let lines = dto
            .lines
            .iter()
            .map(|line| {
                let checkin = parse_iso_date(&line.checkin_date)?;
                let checkout = parse_iso_date(&line.checkout_date)?;
                Ok(BookingLine { room_id: RoomId::new(line.room_id), stay: StayRange::new(checkin, checkout)? })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BookingRecord {
            id: BookingId::new(dto.id),
            reference: dto.reference,
            customer_name: dto.customer_name,
            state: parse_booking_state(&dto.state)?,
            payment_state: PaymentState::from_invoice_state(dto.payment_state.as_deref()),
            lines,
        })
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary { id: self.id, reference: self.reference.clone(), customer_name: self.customer_name.clone(), state: self.state }
    }

    /// The booking's own stay: earliest line checkin to latest line checkout.
    pub fn stay(&self) -> Option<StayRange> {
        let checkin = self.lines.iter().map(|line| line.stay.checkin).min()?;
        let checkout = self.lines.iter().map(|line| line.stay.checkout).max()?;
        Some(StayRange::normalized(checkin, checkout))
    }

    /// Days of all lines for `room`, checkin to checkout inclusive.
    pub fn dates_for_room(&self, room: RoomId) -> Vec<NaiveDate> {
        self.lines
            .iter()
            .filter(|line| line.room_id == room)
            .flat_map(|line| line.stay.checkin.iter_days().take_while(move |d| *d <= line.stay.checkout))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::hotel_dto::BookingLineDto;
    use crate::error::Error;

    fn dto(lines: Vec<(i64, &str, &str)>) -> BookingRecordDto {
        BookingRecordDto {
            id: 5,
            reference: "BOOK/0005".to_string(),
            customer_name: "Ada".to_string(),
            state: "reserved".to_string(),
            payment_state: Some("in_payment".to_string()),
            lines: lines
                .into_iter()
                .map(|(room_id, checkin, checkout)| BookingLineDto { room_id, checkin_date: checkin.to_string(), checkout_date: checkout.to_string() })
                .collect(),
        }
    }

    #[test]
    fn dates_expand_per_room() {
        let record = BookingRecord::from_dto(dto(vec![(1, "2024-01-30", "2024-02-01"), (2, "2024-01-30", "2024-01-30")])).unwrap();

        assert_eq!(record.dates_for_room(RoomId::new(1)).len(), 3);
        assert_eq!(record.dates_for_room(RoomId::new(2)).len(), 1);
        assert!(record.dates_for_room(RoomId::new(3)).is_empty());
        assert_eq!(record.payment_state, PaymentState::InPayment);
        assert_eq!(record.stay().map(|s| (s.checkin, s.checkout)), Some((parse_iso_date("2024-01-30").unwrap(), parse_iso_date("2024-02-01").unwrap())));
        assert!(BookingRecord::from_dto(dto(vec![])).unwrap().stay().is_none());
    }

    #[test]
    fn line_with_checkout_before_checkin_is_rejected() {
        let result = BookingRecord::from_dto(dto(vec![(1, "2024-02-01", "2024-01-30")]));
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    #[test]
    fn payment_state_mapping() {
        assert_eq!(PaymentState::from_invoice_state(None), PaymentState::NoInvoice);
        assert_eq!(PaymentState::from_invoice_state(Some("reversed")), PaymentState::Cancelled);
        assert_eq!(PaymentState::Paid.label(), "Paid");
    }
}
