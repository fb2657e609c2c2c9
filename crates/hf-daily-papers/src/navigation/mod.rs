//! Date navigation for the home feed.
//!
//! [`DateNavigator`] owns the viewed date and its papers. It performs no I/O:
//! every transition that needs data hands back a [`FetchTicket`], and the
//! caller reports the result through [`DateNavigator::on_loaded`] or
//! [`DateNavigator::on_failed`]. Completions are matched by ticket, never by
//! arrival order, so a response for a date the user already left is dropped.
//!
//! After an explicit previous/next, an empty day triggers auto-skip: the
//! navigator keeps stepping in the same direction until a day has papers or
//! the next step would leave `[floor, today]`.

pub mod driver;

use chrono::NaiveDate;

use crate::models::Paper;

pub use driver::FeedDriver;

/// Direction of an explicit navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One day earlier.
    Previous,
    /// One day later.
    Next,
}

impl Direction {
    /// The adjacent date in this direction.
    #[must_use]
    pub fn step(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Previous => date.pred_opt(),
            Self::Next => date.succ_opt(),
        }
    }
}

/// Auto-skip phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the current date; an empty result is shown as is.
    Idle,
    /// An explicit navigation is loading; an empty result starts auto-skip.
    Navigated {
        /// Direction of the navigation.
        direction: Direction,
    },
    /// Auto-skip is probing further dates.
    Searching {
        /// Direction being searched.
        direction: Direction,
    },
    /// Auto-skip gave up at a bound.
    BoundaryStopped {
        /// Direction that ran out of dates.
        direction: Direction,
    },
}

impl Phase {
    /// Direction on record, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Idle => None,
            Self::Navigated { direction }
            | Self::Searching { direction }
            | Self::BoundaryStopped { direction } => Some(direction),
        }
    }
}

/// Why a fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// First load of the screen.
    Initial,
    /// Explicit previous/next.
    Navigation,
    /// Auto-skip fetch of the adjacent day.
    AutoSkip,
    /// Pull-to-refresh.
    Refresh,
    /// Retry after a failure.
    Retry,
}

/// A fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Monotonic request ID.
    pub id: u64,
    /// Date to fetch.
    pub date: NaiveDate,
    /// Whether an empty result may continue auto-skip.
    pub auto_skip: bool,
    /// Why the fetch was issued.
    pub kind: FetchKind,
}

/// Result of applying a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Completion belonged to a superseded ticket and was ignored.
    Stale,
    /// Papers are displayed for the current date.
    Displayed {
        /// Number of papers shown.
        count: usize,
    },
    /// The day is legitimately empty.
    Empty,
    /// Auto-skip moved on; fetch this ticket next.
    Skipped(FetchTicket),
    /// Auto-skip hit a bound without finding papers.
    BoundaryStopped,
    /// The fetch failed; the error is surfaced.
    Failed,
}

/// What the feed should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// Loading with no content to keep on screen.
    Loading,
    /// Refreshing while prior content stays visible.
    Refreshing,
    /// Auto-skip in progress.
    Searching,
    /// Papers available.
    Ready,
    /// No papers for the current date.
    Empty,
    /// Last fetch failed; offer a retry.
    Error(String),
}

/// Home feed date state machine.
#[derive(Debug, Clone)]
pub struct DateNavigator {
    today: NaiveDate,
    floor: NaiveDate,
    current: NaiveDate,
    papers: Vec<Paper>,
    phase: Phase,
    in_flight: Option<FetchTicket>,
    error: Option<String>,
    next_id: u64,
}

impl DateNavigator {
    /// Start at `today` with navigation bounded to `[floor, today]`.
    #[must_use]
    pub fn new(today: NaiveDate, floor: NaiveDate) -> Self {
        Self::starting_at(today, today, floor)
    }

    /// Start at `date`, clamped into `[floor, today]`.
    #[must_use]
    pub fn starting_at(date: NaiveDate, today: NaiveDate, floor: NaiveDate) -> Self {
        let floor = floor.min(today);
        Self {
            today,
            floor,
            current: date.clamp(floor, today),
            papers: Vec::new(),
            phase: Phase::Idle,
            in_flight: None,
            error: None,
            next_id: 0,
        }
    }

    /// Load the current date without auto-skip.
    pub fn load(&mut self) -> FetchTicket {
        self.phase = Phase::Idle;
        self.error = None;
        self.issue(FetchKind::Initial, false)
    }

    /// Move one day in `direction`.
    ///
    /// Returns `None`, changing nothing, when the target lies after today or
    /// before the floor. Otherwise clears the papers, supersedes any in-flight
    /// fetch and returns an auto-skip-enabled ticket for the new date.
    pub fn navigate(&mut self, direction: Direction) -> Option<FetchTicket> {
        let Some(target) = direction.step(self.current).filter(|d| self.in_bounds(*d)) else {
            tracing::debug!(current = %self.current, ?direction, "Navigation rejected at bound");
            return None;
        };

        tracing::info!(from = %self.current, to = %target, ?direction, "Navigating");
        self.phase = Phase::Navigated { direction };
        self.papers.clear();
        self.error = None;
        self.current = target;
        Some(self.issue(FetchKind::Navigation, true))
    }

    /// Pull-to-refresh: clear the direction and refetch without auto-skip.
    pub fn refresh(&mut self) -> FetchTicket {
        self.phase = Phase::Idle;
        self.error = None;
        self.issue(FetchKind::Refresh, false)
    }

    /// Re-issue the request for the current date after a failure.
    pub fn retry(&mut self) -> FetchTicket {
        self.phase = Phase::Idle;
        self.error = None;
        self.issue(FetchKind::Retry, false)
    }

    /// Apply a successful fetch.
    pub fn on_loaded(&mut self, ticket: &FetchTicket, papers: Vec<Paper>) -> Outcome {
        if !self.is_current(ticket) {
            tracing::debug!(id = ticket.id, date = %ticket.date, "Dropping stale result");
            return Outcome::Stale;
        }
        self.in_flight = None;

        if !papers.is_empty() {
            let count = papers.len();
            self.papers = papers;
            self.phase = Phase::Idle;
            return Outcome::Displayed { count };
        }

        let direction = match self.phase {
            Phase::Navigated { direction } | Phase::Searching { direction } if ticket.auto_skip => {
                direction
            }
            _ => {
                self.papers.clear();
                self.phase = Phase::Idle;
                return Outcome::Empty;
            }
        };

        self.phase = Phase::Searching { direction };
        match direction.step(self.current).filter(|d| self.in_bounds(*d)) {
            Some(next) => {
                tracing::debug!(empty = %self.current, next = %next, "Auto-skipping empty day");
                self.current = next;
                Outcome::Skipped(self.issue(FetchKind::AutoSkip, true))
            }
            None => {
                tracing::info!(date = %self.current, ?direction, "Auto-skip stopped at bound");
                self.papers.clear();
                self.phase = Phase::BoundaryStopped { direction };
                Outcome::BoundaryStopped
            }
        }
    }

    /// Apply a failed fetch. Aborts any auto-skip sequence.
    pub fn on_failed(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> Outcome {
        if !self.is_current(ticket) {
            tracing::debug!(id = ticket.id, date = %ticket.date, "Dropping stale failure");
            return Outcome::Stale;
        }
        self.in_flight = None;

        let message = message.into();
        tracing::warn!(date = %self.current, error = %message, "Feed fetch failed");
        self.phase = Phase::Idle;
        self.error = Some(message);
        Outcome::Failed
    }

    /// Date currently shown.
    #[must_use]
    pub const fn current_date(&self) -> NaiveDate {
        self.current
    }

    /// Papers shown for the current date.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Current auto-skip phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The only ticket whose completion will be applied.
    #[must_use]
    pub const fn in_flight(&self) -> Option<&FetchTicket> {
        self.in_flight.as_ref()
    }

    /// Last surfaced error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether "previous" would be accepted.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        Direction::Previous.step(self.current).is_some_and(|d| self.in_bounds(d))
    }

    /// Whether "next" would be accepted.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        Direction::Next.step(self.current).is_some_and(|d| self.in_bounds(d))
    }

    /// What the feed should render.
    #[must_use]
    pub fn status(&self) -> ViewStatus {
        if let Some(ticket) = &self.in_flight {
            return match ticket.kind {
                FetchKind::AutoSkip => ViewStatus::Searching,
                FetchKind::Refresh => ViewStatus::Refreshing,
                FetchKind::Initial | FetchKind::Navigation | FetchKind::Retry => {
                    ViewStatus::Loading
                }
            };
        }

        if let Some(error) = &self.error {
            ViewStatus::Error(error.clone())
        } else if self.papers.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Ready
        }
    }

    fn in_bounds(&self, date: NaiveDate) -> bool {
        date >= self.floor && date <= self.today
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|t| t.id == ticket.id && t.date == self.current)
    }

    fn issue(&mut self, kind: FetchKind, auto_skip: bool) -> FetchTicket {
        let ticket = FetchTicket {
            id: self.next_id,
            date: self.current,
            auto_skip,
            kind,
        };
        self.next_id += 1;
        self.in_flight = Some(ticket.clone());
        ticket
    }
}
