// SPDX-License-Identifier: MPL-2.0
//! Hard-coded sample data backing the dashboard.
//!
//! There is no real data source: tables, activity, stats, and chart series
//! are fixed demo values, and "loading" is simulated with timer delays in
//! the update loop.

/// A row in one of the dashboard tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub cells: Vec<String>,
}

impl Row {
    fn new(id: u32, cells: &[&str]) -> Self {
        Self {
            id,
            cells: cells.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Case-insensitive substring match over every cell.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.cells
            .iter()
            .any(|cell| cell.to_lowercase().contains(&query))
    }
}

/// One of the dashboard's data tables.
#[derive(Debug, Clone)]
pub struct TableData {
    pub headers: &'static [&'static str],
    pub rows: Vec<Row>,
}

impl TableData {
    /// Removes the row with the given id. Returns `true` if a row was
    /// removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// Rows that survive the dashboard search filter.
    pub fn filtered<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Row> {
        self.rows.iter().filter(move |row| row.matches(query))
    }
}

/// Registered festival users.
#[must_use]
pub fn users_table() -> TableData {
    TableData {
        headers: &["Name", "Email", "Role", "Joined"],
        rows: vec![
            Row::new(1, &["John Doe", "john@example.com", "Visitor", "2026-05-02"]),
            Row::new(2, &["Maria Vega", "maria@example.com", "Artist", "2026-05-11"]),
            Row::new(3, &["Sam Okafor", "sam@example.com", "Volunteer", "2026-06-01"]),
            Row::new(4, &["Lena Brandt", "lena@example.com", "Visitor", "2026-06-14"]),
            Row::new(5, &["Kenji Sato", "kenji@example.com", "Artist", "2026-06-20"]),
            Row::new(6, &["Ana Ribeiro", "ana@example.com", "Visitor", "2026-07-03"]),
            Row::new(7, &["Piotr Nowak", "piotr@example.com", "Sponsor", "2026-07-18"]),
            Row::new(8, &["Chloe Martin", "chloe@example.com", "Visitor", "2026-08-01"]),
        ],
    }
}

/// Ticket orders.
#[must_use]
pub fn orders_table() -> TableData {
    TableData {
        headers: &["Customer", "Item", "Amount", "Status"],
        rows: vec![
            Row::new(1234, &["John Doe", "Weekend Pass", "$120.00", "Paid"]),
            Row::new(1235, &["Maria Vega", "Workshop Ticket", "$35.00", "Paid"]),
            Row::new(1236, &["Sam Okafor", "Day Pass", "$55.00", "Pending"]),
            Row::new(1237, &["Lena Brandt", "Weekend Pass", "$120.00", "Paid"]),
            Row::new(1238, &["Ana Ribeiro", "Merch Bundle", "$48.00", "Refunded"]),
        ],
    }
}

/// Contact-form messages.
#[must_use]
pub fn messages_table() -> TableData {
    TableData {
        headers: &["From", "Subject", "Received"],
        rows: vec![
            Row::new(1, &["press@citynews.example", "Press accreditation", "2 hours ago"]),
            Row::new(2, &["mural.crew@example.com", "Wall allocation question", "5 hours ago"]),
            Row::new(3, &["sponsor@paintco.example", "Sponsorship renewal", "yesterday"]),
            Row::new(4, &["visitor@mail.example", "Accessibility info", "2 days ago"]),
        ],
    }
}

/// Aggregate figures for the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_visitors: u64,
    pub total_revenue: u64,
    pub total_events: u32,
    pub total_artists: u32,
}

/// Derives the stat-card figures.
///
/// The visitor figure scales with the current user table size so deletes
/// visibly move the number, exactly like the original demo.
#[must_use]
pub fn stats(user_rows: usize) -> Stats {
    Stats {
        total_visitors: user_rows as u64 * 150,
        total_revenue: 45_678,
        total_events: 12,
        total_artists: 28,
    }
}

/// Kind of a recent-activity entry; selects the leading glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    User,
    Order,
    Message,
    Event,
}

impl ActivityKind {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ActivityKind::User => "\u{1F464}",    // 👤
            ActivityKind::Order => "\u{1F3AB}",   // 🎫
            ActivityKind::Message => "\u{2709}",  // ✉
            ActivityKind::Event => "\u{1F4C5}",   // 📅
        }
    }
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: &'static str,
    pub time_ago: &'static str,
}

/// The simulated recent-activity feed.
#[must_use]
pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            kind: ActivityKind::User,
            message: "New user registered: John Doe",
            time_ago: "2 minutes ago",
        },
        Activity {
            kind: ActivityKind::Order,
            message: "New ticket order: #1234",
            time_ago: "5 minutes ago",
        },
        Activity {
            kind: ActivityKind::Message,
            message: "New contact message received",
            time_ago: "10 minutes ago",
        },
        Activity {
            kind: ActivityKind::Event,
            message: "Workshop \"Graffiti Basics\" fully booked",
            time_ago: "15 minutes ago",
        },
    ]
}

// ============================================================================
// Chart series (fixed sample data)
// ============================================================================

/// Month labels for the visitors line chart.
pub const VISITOR_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Monthly visitor counts for the line chart.
pub const VISITOR_COUNTS: [f32; 6] = [1200.0, 1900.0, 3000.0, 5000.0, 4200.0, 6300.0];

/// Revenue split labels for the doughnut chart.
pub const REVENUE_LABELS: [&str; 4] = ["Ticket Sales", "Sponsorships", "Merchandise", "Workshops"];

/// Revenue split percentages for the doughnut chart.
pub const REVENUE_SHARES: [f32; 4] = [45.0, 25.0, 20.0, 10.0];

/// Event-type labels for the attendance bar chart.
pub const EVENT_LABELS: [&str; 5] = ["Workshop", "Exhibition", "Performance", "Talk", "Tour"];

/// Attendee counts for the attendance bar chart.
pub const EVENT_ATTENDEES: [f32; 5] = [150.0, 280.0, 200.0, 120.0, 180.0];

/// A page of the public site, used by the quick search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub url: &'static str,
}

/// The fixed site-search corpus.
#[must_use]
pub fn site_pages() -> Vec<PageEntry> {
    vec![
        PageEntry {
            title: "Street Art Workshop",
            category: "Events",
            url: "services.html",
        },
        PageEntry {
            title: "Featured Artists",
            category: "Artists",
            url: "about.html",
        },
        PageEntry {
            title: "Festival Schedule",
            category: "Schedule",
            url: "index.html",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_matches_is_case_insensitive() {
        let row = Row::new(1, &["John Doe", "john@example.com"]);
        assert!(row.matches("JOHN"));
        assert!(row.matches("doe"));
        assert!(!row.matches("smith"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let table = users_table();
        assert_eq!(table.filtered("").count(), table.rows.len());
    }

    #[test]
    fn remove_deletes_exactly_one_row() {
        let mut table = users_table();
        let before = table.rows.len();

        assert!(table.remove(7));
        assert_eq!(table.rows.len(), before - 1);
        assert!(table.rows.iter().all(|row| row.id != 7));

        // Removing again is a no-op.
        assert!(!table.remove(7));
    }

    #[test]
    fn stats_scale_with_user_rows() {
        let full = stats(8);
        let reduced = stats(7);
        assert_eq!(full.total_visitors, 1200);
        assert_eq!(reduced.total_visitors, 1050);
        assert_eq!(full.total_revenue, reduced.total_revenue);
    }

    #[test]
    fn chart_series_lengths_match_their_labels() {
        assert_eq!(VISITOR_MONTHS.len(), VISITOR_COUNTS.len());
        assert_eq!(REVENUE_LABELS.len(), REVENUE_SHARES.len());
        assert_eq!(EVENT_LABELS.len(), EVENT_ATTENDEES.len());
    }

    #[test]
    fn revenue_shares_sum_to_hundred() {
        let sum: f32 = REVENUE_SHARES.iter().sum();
        assert!((sum - 100.0).abs() < f32::EPSILON);
    }
}
