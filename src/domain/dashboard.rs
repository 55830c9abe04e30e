use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

use crate::domain::availability::{available_rooms, check_room_line};
use crate::domain::booking::room::Room;
use crate::domain::calendar::date_axis::{DateAxis, parse_month_value};
use crate::domain::calendar::quick_range::QuickRange;
use crate::domain::calendar::stay::StayRange;
use crate::domain::clock::clock::SharedClock;
use crate::domain::collaborators::access_control_trait::AccessControl;
use crate::domain::collaborators::action_dispatcher_trait::{ActionDispatcher, BookingPrefill, RoomLineEntry};
use crate::domain::collaborators::data_source_trait::DataSource;
use crate::domain::collaborators::notifier_trait::{Notification, Notifier};
use crate::domain::config::DashboardConfig;
use crate::domain::grid::span_merge::Grid;
use crate::domain::selection::markers::SelectionMarkers;
use crate::domain::selection::selection::{RangeRequest, Selection, Transition};
use crate::domain::utils::id::BookingId;
use crate::domain::utils::statistics::{ANALYTICS_TARGET, OccupancyStats};
use crate::error::{Error, Result};

/// The external services the dashboard talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub data_source: Arc<dyn DataSource>,
    pub dispatcher: Arc<dyn ActionDispatcher>,
    pub access_control: Arc<dyn AccessControl>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: SharedClock,
}

/// Which window of dates the axis currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisView {
    Month { year: i32, month: u32 },
    Range(StayRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    View,
    Edit,
}

/// Result of a user interaction with the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click recorded; waiting for the second one.
    SelectionStarted,

    /// An existing booking was opened.
    BookingOpened { booking_id: BookingId, mode: OpenMode },

    /// The create form was opened with one line per available room.
    CreateFormOpened(BookingPrefill),

    /// A pending selection was dropped.
    SelectionReset,

    /// The click did not hit a cell of the current grid.
    Ignored,
}

/// Calendar grid of rooms versus dates with two-click range selection.
///
/// Every state change takes `&mut self`: an interaction runs to completion,
/// including its awaited remote calls, before the next one can start.
pub struct Dashboard {
    collaborators: Collaborators,
    config: DashboardConfig,

    view: AxisView,
    axis: DateAxis,
    rooms: Vec<Room>,
    stats: OccupancyStats,

    selection: Selection,
    markers: SelectionMarkers,
    loading: bool,
}

impl Dashboard {
    /// Loads the current month's axis, then the rooms, then computes the stats.
    pub async fn start(collaborators: Collaborators, config: DashboardConfig) -> Result<Self> {
        let today = collaborators.clock.today();
        let (year, month) = (today.year(), today.month());

        let axis = collaborators.data_source.get_month_axis(year, month).await?;
        log::info!("Loaded axis for {:04}-{:02} with {} dates.", year, month, axis.len());

        let rooms = collaborators.data_source.get_room_bookings().await?;
        log::info!("Loaded {} rooms.", rooms.len());

        let stats = OccupancyStats::compute(&rooms, today);

        Ok(Dashboard {
            collaborators,
            config,
            view: AxisView::Month { year, month },
            axis,
            rooms,
            stats,
            selection: Selection::Empty,
            markers: SelectionMarkers::default(),
            loading: false,
        })
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn view(&self) -> AxisView {
        self.view
    }

    pub fn axis(&self) -> &DateAxis {
        &self.axis
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn stats(&self) -> OccupancyStats {
        self.stats
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn markers(&self) -> &SelectionMarkers {
        &self.markers
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Merged cells for every room over the current axis.
    pub fn grid(&self) -> Result<Grid> {
        Grid::build(&self.rooms, &self.axis)
    }

    // -- axis navigation -------------------------------------------------

    pub async fn show_month(&mut self, year: i32, month: u32) -> Result<()> {
        let data_source = self.collaborators.data_source.clone();
        let axis = self.load_axis(data_source.get_month_axis(year, month)).await?;

        log::info!("Showing month {:04}-{:02} ({} dates).", year, month, axis.len());
        self.apply_axis(axis, AxisView::Month { year, month });
        Ok(())
    }

    /// Month picker entry point taking the raw `YYYY-MM` value.
    pub async fn show_month_value(&mut self, value: &str) -> Result<()> {
        let (year, month) = parse_month_value(value).inspect_err(|_| log::error!("Month value is invalid: '{}'", value))?;
        self.show_month(year, month).await
    }

    pub async fn show_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<()> {
        let data_source = self.collaborators.data_source.clone();
        let axis = self.load_axis(data_source.get_range_axis(start, end)).await?;

        log::info!("Showing range {} to {} ({} dates).", start, end, axis.len());
        self.apply_axis(axis, AxisView::Range(StayRange::normalized(start, end)));
        Ok(())
    }

    pub async fn show_quick_range(&mut self, range: QuickRange) -> Result<()> {
        let resolved = range.resolve(self.collaborators.clock.today(), self.config.week_start);
        log::debug!("Quick range '{}' resolved to {} - {}.", range.label(), resolved.checkin, resolved.checkout);
        self.show_range(resolved.checkin, resolved.checkout).await
    }

    /// Refetches the rooms and their bookings, keeping the axis.
    pub async fn refresh_rooms(&mut self) -> Result<()> {
        let rooms = self.collaborators.data_source.get_room_bookings().await?;
        log::info!("Reloaded {} rooms.", rooms.len());

        self.rooms = rooms;
        self.reset_selection();
        self.refresh_stats();
        Ok(())
    }

    async fn load_axis<F>(&mut self, request: F) -> Result<DateAxis>
    where
        F: std::future::Future<Output = Result<DateAxis>>,
    {
        self.loading = true;
        let result = request.await;
        self.loading = false;

        result.inspect_err(|e| log::error!("Failed to load date axis: {}", e))
    }

    fn apply_axis(&mut self, axis: DateAxis, view: AxisView) {
        self.axis = axis;
        self.view = view;
        // The table is re-rendered, so a half-made selection no longer points at a cell.
        self.reset_selection();
        self.refresh_stats();
    }

    fn refresh_stats(&mut self) {
        self.stats = OccupancyStats::compute(&self.rooms, self.collaborators.clock.today());
    }

    // -- interaction -----------------------------------------------------

    /// Handles a click on the cell of room row `row` at `date`.
    ///
    /// Booked cells open their booking regardless of the selection. Available
    /// cells drive the two-click selection; the second click validates the
    /// range, checks availability for every row in the span and opens the
    /// create form.
    ///
    /// # Returns
    /// User errors (`ValidationError`, `NotFound`) and collaborator failures are
    /// shown through the notifier, reset the selection and are returned as `Err`.
    /// A booked click on a room with overlapping bookings fails with
    /// `OverlappingBookings` since the owner of the cell is ambiguous.
    pub async fn click_cell(&mut self, row: usize, date: NaiveDate) -> Result<ClickOutcome> {
        let Some(room) = self.rooms.get(row) else {
            log::warn!("Click on row {} outside the {} rooms ignored.", row, self.rooms.len());
            return Ok(ClickOutcome::Ignored);
        };
        if !self.axis.contains(date) {
            log::warn!("Click on {} outside the displayed dates ignored.", date);
            return Ok(ClickOutcome::Ignored);
        }

        let booked = room.booking_on(date).map(|b| b.id);
        let overlap = room.ensure_no_overlaps();

        match booked {
            Some(booking_id) => match overlap {
                Ok(()) => self.open_booking(booking_id).await,
                Err(e) => Err(self.fail(e, None).await),
            },
            None => self.pick_available(row, date).await,
        }
    }

    /// Opens an existing booking, editable only for users holding the edit capability.
    pub async fn open_booking(&mut self, booking_id: BookingId) -> Result<ClickOutcome> {
        let booking = match self.collaborators.data_source.find_booking(booking_id).await {
            Ok(booking) => booking,
            Err(e) => return Err(self.fail(e, None).await),
        };

        let Some(booking) = booking else {
            return Err(self.fail(Error::NotFound(format!("Booking {}", booking_id)), Some(Notification::booking_not_found())).await);
        };

        let mode = self.open_mode().await;
        let dispatched = match mode {
            OpenMode::Edit => self.collaborators.dispatcher.open_record_for_edit(booking.id).await,
            OpenMode::View => self.collaborators.dispatcher.open_record_for_view(booking.id).await,
        };
        if let Err(e) = dispatched {
            return Err(self.fail(e, None).await);
        }

        tracing::info!(target: ANALYTICS_TARGET, BookingId = booking.id.value(), Mode = ?mode, "Opened existing booking");
        Ok(ClickOutcome::BookingOpened { booking_id: booking.id, mode })
    }

    /// Clears the selection and its markers.
    ///
    /// # Returns
    /// `true` if anything was cleared; from an empty selection nothing changes.
    pub fn reset_selection(&mut self) -> bool {
        let selection_changed = self.selection.reset();
        let markers_changed = self.markers.clear();
        selection_changed || markers_changed
    }

    /// Validates a new booking line for the named room against the loaded bookings.
    pub fn check_room_line(&self, room_name: &str, checkin: NaiveDate, checkout: NaiveDate) -> Result<StayRange> {
        let room = self.rooms.iter().find(|r| r.name == room_name).ok_or_else(|| Error::NotFound(format!("Room '{}'", room_name)))?;
        check_room_line(room, checkin, checkout)
    }

    async fn pick_available(&mut self, row: usize, date: NaiveDate) -> Result<ClickOutcome> {
        match self.selection.pick(date, row) {
            Transition::Started => {
                log::debug!("Selection started at row {} on {}.", row, date);
                self.markers.mark_start(row, date);
                Ok(ClickOutcome::SelectionStarted)
            }
            Transition::RangeChosen(request) => {
                self.markers.mark_end(row, date);
                let outcome = self.resolve_range(request).await;
                self.reset_selection();
                outcome
            }
            Transition::Reset => {
                self.markers.clear();
                Ok(ClickOutcome::SelectionReset)
            }
        }
    }

    async fn resolve_range(&mut self, request: RangeRequest) -> Result<ClickOutcome> {
        let resolved = match request.resolve() {
            Ok(resolved) => resolved,
            Err(e) => return Err(self.fail(e, Some(Notification::invalid_date_range())).await),
        };
        log::info!("Selected date range {} to {} over rows {:?}.", resolved.stay.checkin, resolved.stay.checkout, resolved.rows);

        match self.grid() {
            Ok(grid) => self.markers.mark_range(&grid, &resolved),
            Err(e) => log::warn!("Range markers not drawn: {}", e),
        }

        let names: Vec<String> = available_rooms(&self.rooms, resolved.rows.clone(), &resolved.stay).iter().map(|room| room.name.clone()).collect();

        let rooms = if names.is_empty() {
            Vec::new()
        } else {
            match self.collaborators.data_source.find_rooms_by_name(&names).await {
                Ok(rooms) => rooms,
                Err(e) => return Err(self.fail(e, None).await),
            }
        };

        if rooms.is_empty() {
            return Err(self.fail(Error::NotFound("Available room".to_string()), Some(Notification::room_not_found())).await);
        }

        let night_count = resolved.stay.night_count();
        let prefill = BookingPrefill {
            room_lines: rooms
                .into_iter()
                .map(|room| RoomLineEntry { room, checkin_date: resolved.stay.checkin, checkout_date: resolved.stay.checkout, night_count })
                .collect(),
        };

        if let Err(e) = self.collaborators.dispatcher.open_record_create_form(prefill.clone()).await {
            return Err(self.fail(e, None).await);
        }

        tracing::info!(
            target: ANALYTICS_TARGET,
            Checkin = %resolved.stay.checkin,
            Checkout = %resolved.stay.checkout,
            NightCount = night_count,
            Rooms = prefill.room_lines.len(),
            "Opened booking create form"
        );

        Ok(ClickOutcome::CreateFormOpened(prefill))
    }

    async fn open_mode(&self) -> OpenMode {
        let capability = &self.config.edit_capability;

        match self.collaborators.access_control.user_has_capability(capability).await {
            Ok(true) => OpenMode::Edit,
            Ok(false) => OpenMode::View,
            Err(e) => {
                let failure = Error::AccessCheckFailure { capability: capability.clone(), reason: e.to_string() };
                log::error!("{}. Opening read-only.", failure);
                OpenMode::View
            }
        }
    }

    /// Recovers from a failed interaction: selection reset, user notified, error handed back.
    async fn fail(&mut self, error: Error, notification: Option<Notification>) -> Error {
        log::warn!("Interaction failed: {}", error);
        self.reset_selection();

        let notification = notification.unwrap_or_else(|| Notification::new("Error", error.to_string(), error.severity()));
        self.collaborators.notifier.show(notification).await;

        error
    }
}
