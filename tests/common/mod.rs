#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

use room_booking_dashboard::backend::in_memory_hotel::InMemoryHotel;
use room_booking_dashboard::domain::booking::booking::BookingSummary;
use room_booking_dashboard::domain::booking::room::{Room, RoomRef};
use room_booking_dashboard::domain::calendar::date_axis::DateAxis;
use room_booking_dashboard::domain::clock::clock_mock::SharedMockClock;
use room_booking_dashboard::domain::collaborators::access_control_trait::AccessControl;
use room_booking_dashboard::domain::collaborators::action_dispatcher_trait::{ActionDispatcher, BookingPrefill};
use room_booking_dashboard::domain::collaborators::data_source_trait::DataSource;
use room_booking_dashboard::domain::collaborators::notifier_trait::{Notification, Notifier};
use room_booking_dashboard::domain::config::DashboardConfig;
use room_booking_dashboard::domain::dashboard::{Collaborators, Dashboard};
use room_booking_dashboard::domain::utils::id::BookingId;
use room_booking_dashboard::error::{Error, Result};
use room_booking_dashboard::loader::parser::parse_json_str;

/// Three rooms in January 2024.
///
/// - 101: Ada from the 5th to the 7th, Bob on the 20th.
/// - 102: Cy from the 1st to the 3rd (checked in).
/// - 103: Dee on the 5th, cancelled, so never on the grid.
pub const HOTEL_JSON: &str = r#"{
    "rooms": [ { "id": 3, "name": "103" }, { "id": 1, "name": "101" }, { "id": 2, "name": "102" } ],
    "bookings": [
        { "id": 10, "reference": "BOOK/0010", "customerName": "Ada", "state": "reserved", "paymentState": "paid",
          "lines": [ { "roomId": 1, "checkinDate": "2024-01-05", "checkoutDate": "2024-01-07" } ] },
        { "id": 11, "reference": "BOOK/0011", "customerName": "Bob", "state": "reserved",
          "lines": [ { "roomId": 1, "checkinDate": "2024-01-20", "checkoutDate": "2024-01-20" } ] },
        { "id": 12, "reference": "BOOK/0012", "customerName": "Cy", "state": "check_in", "paymentState": "not_paid",
          "lines": [ { "roomId": 2, "checkinDate": "2024-01-01", "checkoutDate": "2024-01-03" } ] },
        { "id": 13, "reference": "BOOK/0013", "customerName": "Dee", "state": "cancel",
          "lines": [ { "roomId": 3, "checkinDate": "2024-01-05", "checkoutDate": "2024-01-05" } ] }
    ]
}"#;

/// Room 101 holding two bookings that share the 6th and 7th.
pub const OVERLAPPING_HOTEL_JSON: &str = r#"{
    "rooms": [ { "id": 1, "name": "101" }, { "id": 2, "name": "102" } ],
    "bookings": [
        { "id": 10, "reference": "BOOK/0010", "customerName": "Ada", "state": "reserved",
          "lines": [ { "roomId": 1, "checkinDate": "2024-01-05", "checkoutDate": "2024-01-07" } ] },
        { "id": 11, "reference": "BOOK/0011", "customerName": "Bob", "state": "reserved",
          "lines": [ { "roomId": 1, "checkinDate": "2024-01-06", "checkoutDate": "2024-01-08" } ] }
    ]
}"#;

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

pub fn hotel() -> InMemoryHotel {
    hotel_from(HOTEL_JSON)
}

pub fn hotel_from(json: &str) -> InMemoryHotel {
    InMemoryHotel::from_dto(parse_json_str(json).unwrap(), DashboardConfig::default().occupied_states).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchedAction {
    View(BookingId),
    Edit(BookingId),
    Create(BookingPrefill),
}

/// Records every action instead of opening anything.
///
/// A rejecting dispatcher records nothing and answers every action with `DispatchError`.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub actions: Mutex<Vec<DispatchedAction>>,
    pub rejecting: bool,
}

impl RecordingDispatcher {
    pub fn rejecting() -> Self {
        RecordingDispatcher { actions: Mutex::new(Vec::new()), rejecting: true }
    }

    pub fn actions(&self) -> Vec<DispatchedAction> {
        self.actions.lock().unwrap().clone()
    }

    fn record(&self, action: DispatchedAction) -> Result<()> {
        if self.rejecting {
            return Err(Error::DispatchError("record window could not be opened".to_string()));
        }
        self.actions.lock().unwrap().push(action);
        Ok(())
    }
}

#[async_trait]
impl ActionDispatcher for RecordingDispatcher {
    async fn open_record_for_view(&self, booking_id: BookingId) -> Result<()> {
        self.record(DispatchedAction::View(booking_id))
    }

    async fn open_record_for_edit(&self, booking_id: BookingId) -> Result<()> {
        self.record(DispatchedAction::Edit(booking_id))
    }

    async fn open_record_create_form(&self, prefill: BookingPrefill) -> Result<()> {
        self.record(DispatchedAction::Create(prefill))
    }
}

/// Serves the axis and rooms of `hotel` but fails every record lookup.
pub struct BrokenLookups {
    pub hotel: InMemoryHotel,
}

#[async_trait]
impl DataSource for BrokenLookups {
    async fn get_month_axis(&self, year: i32, month: u32) -> Result<DateAxis> {
        self.hotel.get_month_axis(year, month).await
    }

    async fn get_range_axis(&self, start: NaiveDate, end: NaiveDate) -> Result<DateAxis> {
        self.hotel.get_range_axis(start, end).await
    }

    async fn get_room_bookings(&self) -> Result<Vec<Room>> {
        self.hotel.get_room_bookings().await
    }

    async fn find_booking(&self, _id: BookingId) -> Result<Option<BookingSummary>> {
        Err(Error::DataSourceError("booking lookup timed out".to_string()))
    }

    async fn find_rooms_by_name(&self, _names: &[String]) -> Result<Vec<RoomRef>> {
        Err(Error::DataSourceError("room lookup timed out".to_string()))
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn show(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

/// Answers every capability check the same way.
#[derive(Debug, Clone, Copy)]
pub enum ScriptedAccess {
    Granted,
    Denied,
    Broken,
}

#[async_trait]
impl AccessControl for ScriptedAccess {
    async fn user_has_capability(&self, _name: &str) -> Result<bool> {
        match self {
            ScriptedAccess::Granted => Ok(true),
            ScriptedAccess::Denied => Ok(false),
            ScriptedAccess::Broken => Err(Error::DataSourceError("access service unreachable".to_string())),
        }
    }
}

pub struct Harness {
    pub dashboard: Dashboard,
    pub dispatcher: Arc<RecordingDispatcher>,
    pub notifier: Arc<RecordingNotifier>,
    pub clock: SharedMockClock,
}

pub async fn start_dashboard(access: ScriptedAccess, today: NaiveDate) -> Harness {
    start_dashboard_with(Arc::new(hotel()), RecordingDispatcher::default(), access, today).await
}

pub async fn start_dashboard_with(data_source: Arc<dyn DataSource>, dispatcher: RecordingDispatcher, access: ScriptedAccess, today: NaiveDate) -> Harness {
    let dispatcher = Arc::new(dispatcher);
    let notifier = Arc::new(RecordingNotifier::default());
    let clock = SharedMockClock::new(today);

    let collaborators = Collaborators {
        data_source,
        dispatcher: dispatcher.clone(),
        access_control: Arc::new(access),
        notifier: notifier.clone(),
        clock: Arc::new(clock.clone()),
    };

    let dashboard = Dashboard::start(collaborators, DashboardConfig::default()).await.unwrap();

    Harness { dashboard, dispatcher, notifier, clock }
}
