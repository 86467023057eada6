//! Calendar display formatting
//!
//! Renders month grids as 7-column text calendars with a legend of the leaves
//! that touch the month, and lists who is away on a single day.

use chrono::{Datelike, NaiveDate, Weekday};

use super::{format_date, kind_label, kind_marker};
use crate::models::is_weekend;
use crate::services::calendar::{ActiveLeave, DayCell, MonthGrid, SpanPosition};

const CELL_WIDTH: usize = 5;

fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Marker after the day number: the leave kind, `*` when several leaves
/// share the day
fn cell_marker(cell: &DayCell) -> char {
    match cell.leaves.as_slice() {
        [] => ' ',
        [only] => kind_marker(only.leave.kind),
        _ => '*',
    }
}

fn format_cell(cell: &DayCell) -> String {
    let today = if cell.is_today { '<' } else { ' ' };
    format!(
        "{:>2}{}{:<width$}",
        cell.date.day(),
        cell_marker(cell),
        today,
        width = CELL_WIDTH - 3,
    )
}

fn span_label(span: SpanPosition) -> &'static str {
    match span {
        SpanPosition::Single => "single day",
        SpanPosition::First => "first day",
        SpanPosition::Interior => "ongoing",
        SpanPosition::Last => "last day",
    }
}

/// Leaves touching the grid, each once, in first-appearance order
fn leaves_in_grid(grid: &MonthGrid) -> Vec<&ActiveLeave> {
    let mut seen: Vec<&ActiveLeave> = Vec::new();
    for active in grid.days.iter().flat_map(|day| day.leaves.iter()) {
        if !seen.iter().any(|s| s.leave.id == active.leave.id) {
            seen.push(active);
        }
    }
    seen
}

/// Format one month as a text grid whose first column is `week_start`
pub fn format_month_grid(grid: &MonthGrid, week_start: Weekday, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", grid.month_start.format("%B %Y")));

    // Weekday header
    let mut header = String::new();
    let mut day = week_start;
    for _ in 0..7 {
        header.push_str(&format!(
            "{:>2}{:<width$}",
            weekday_abbrev(day),
            "",
            width = CELL_WIDTH - 2
        ));
        day = day.succ();
    }
    output.push_str(header.trim_end());
    output.push('\n');

    let blanks = grid.leading_blanks(week_start);
    let mut row = " ".repeat(blanks * CELL_WIDTH);
    let mut column = blanks;
    for cell in &grid.days {
        row.push_str(&format_cell(cell));
        column += 1;
        if column == 7 {
            output.push_str(row.trim_end());
            output.push('\n');
            row.clear();
            column = 0;
        }
    }
    if column > 0 {
        output.push_str(row.trim_end());
        output.push('\n');
    }

    let leaves = leaves_in_grid(grid);
    if leaves.is_empty() {
        output.push_str("  No leaves this month.\n");
        return output;
    }

    let name_width = leaves
        .iter()
        .map(|a| a.employee_name.len() + a.employee_position.len() + 3)
        .max()
        .unwrap_or(8);

    output.push('\n');
    for active in leaves {
        let who = format!("{} ({})", active.employee_name, active.employee_position);
        output.push_str(&format!(
            "  {}  {:<name_width$}  {} -> {}  {}\n",
            kind_marker(active.leave.kind),
            who,
            format_date(active.leave.start_date, date_format),
            format_date(active.leave.end_date, date_format),
            kind_label(active.leave.kind),
            name_width = name_width,
        ));
    }

    output
}

/// Format consecutive month grids separated by blank lines
pub fn format_calendar(grids: &[MonthGrid], week_start: Weekday, date_format: &str) -> String {
    grids
        .iter()
        .map(|grid| format_month_grid(grid, week_start, date_format))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format who is on leave on one date
pub fn format_day(date: NaiveDate, leaves: &[ActiveLeave], date_format: &str) -> String {
    let mut output = format!("{} ({})", format_date(date, date_format), date.format("%A"));
    if is_weekend(date) {
        output.push_str(", weekend");
    }
    output.push('\n');

    if leaves.is_empty() {
        output.push_str("  No one is on leave.\n");
        return output;
    }

    for active in leaves {
        output.push_str(&format!(
            "  {} ({})  {}  {} -> {}  {}\n",
            active.employee_name,
            active.employee_position,
            kind_label(active.leave.kind),
            format_date(active.leave.start_date, date_format),
            format_date(active.leave.end_date, date_format),
            span_label(active.span),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveKind, NewLeave, VacationStore};
    use crate::services::calendar::CalendarProjector;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june_store() -> VacationStore {
        let store = VacationStore::new()
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 10),
                date(2024, 6, 14),
                LeaveKind::Vacation,
            ))
            .unwrap();
        store
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 15),
                date(2024, 6, 16),
                LeaveKind::Sick,
            ))
            .unwrap()
            .add_leave(NewLeave::new(
                "Bob",
                "Designer",
                date(2024, 6, 12),
                date(2024, 6, 12),
                LeaveKind::DayOff,
            ))
            .unwrap()
    }

    fn june_grid(store: &VacationStore) -> MonthGrid {
        CalendarProjector::new(store, date(2024, 6, 11)).build_month_grid(date(2024, 6, 1))
    }

    #[test]
    fn test_month_grid_header_and_first_row() {
        let store = june_store();
        let text = format_month_grid(&june_grid(&store), Weekday::Mon, "%Y-%m-%d");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "June 2024");
        assert_eq!(lines[1], "Mo   Tu   We   Th   Fr   Sa   Su");
        // 2024-06-01 is a Saturday
        assert_eq!(lines[2], format!("{} 1    2", " ".repeat(25)));
    }

    #[test]
    fn test_month_grid_markers() {
        let store = june_store();
        let text = format_month_grid(&june_grid(&store), Weekday::Mon, "%Y-%m-%d");

        assert!(text.contains("10V"));
        assert!(text.contains("11V<"));
        assert!(text.contains("12*"));
        assert!(text.contains("15S"));
        assert!(text.contains("17 "));
    }

    #[test]
    fn test_month_grid_sunday_start() {
        let store = june_store();
        let text = format_month_grid(&june_grid(&store), Weekday::Sun, "%Y-%m-%d");
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[1].starts_with("Su"));
        assert_eq!(lines[2], format!("{} 1", " ".repeat(30)));
    }

    #[test]
    fn test_month_grid_legend() {
        let store = june_store();
        let text = format_month_grid(&june_grid(&store), Weekday::Mon, "%Y-%m-%d");

        assert!(text.contains("Alice (Engineer)"));
        assert!(text.contains("2024-06-10 -> 2024-06-14  Vacation"));
        assert!(text.contains("2024-06-15 -> 2024-06-16  Sick leave"));
        assert!(text.contains("Bob (Designer)"));
        assert_eq!(text.matches("Alice (Engineer)").count(), 2);
    }

    #[test]
    fn test_empty_month() {
        let store = VacationStore::new();
        let grid = CalendarProjector::new(&store, date(2024, 6, 11)).build_month_grid(date(2024, 7, 1));
        let text = format_month_grid(&grid, Weekday::Mon, "%Y-%m-%d");

        assert!(text.starts_with("July 2024"));
        assert!(text.contains("No leaves this month."));
    }

    #[test]
    fn test_format_calendar_joins_months() {
        let store = june_store();
        let projector = CalendarProjector::new(&store, date(2024, 6, 11));
        let grids = projector.company_calendar(2);
        let text = format_calendar(&grids, Weekday::Mon, "%Y-%m-%d");

        assert!(text.contains("June 2024"));
        assert!(text.contains("July 2024"));
    }

    #[test]
    fn test_format_day() {
        let store = june_store();
        let projector = CalendarProjector::new(&store, date(2024, 6, 11));

        let text = format_day(date(2024, 6, 12), &projector.project_day(date(2024, 6, 12)), "%Y-%m-%d");
        assert!(text.starts_with("2024-06-12 (Wednesday)"));
        assert!(text.contains("Alice (Engineer)  Vacation  2024-06-10 -> 2024-06-14  ongoing"));
        assert!(text.contains("Bob (Designer)  Day off"));
        assert!(text.contains("single day"));

        let text = format_day(date(2024, 6, 15), &projector.project_day(date(2024, 6, 15)), "%Y-%m-%d");
        assert!(text.contains(", weekend"));
        assert!(text.contains("first day"));
    }

    #[test]
    fn test_format_day_empty() {
        let text = format_day(date(2024, 6, 20), &[], "%d.%m.%Y");
        assert!(text.starts_with("20.06.2024 (Thursday)"));
        assert!(text.contains("No one is on leave."));
    }
}
