//! Employee display formatting
//!
//! Formats employees for terminal output in table and detail views.

use super::{format_date, kind_label};
use crate::models::Employee;
use crate::services::stats::EmployeeStats;

/// Format all employees with their leave totals as a table
pub fn format_employee_list(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees found.\n".to_string();
    }

    // Calculate column widths
    let name_width = employees
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let position_width = employees
        .iter()
        .map(|e| e.position.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<position_width$}  {:>6}  {:>4}  {:>4}  {:>4}  {:>4}\n",
        "ID",
        "Name",
        "Position",
        "Leaves",
        "Days",
        "Vac",
        "Sick",
        "Off",
        name_width = name_width,
        position_width = position_width,
    ));

    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<position_width$}  {:->6}  {:->4}  {:->4}  {:->4}  {:->4}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        position_width = position_width,
    ));

    for employee in employees {
        let stats = EmployeeStats::for_employee(employee);
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<position_width$}  {:>6}  {:>4}  {:>4}  {:>4}  {:>4}\n",
            employee.id.to_string(),
            employee.name,
            employee.position,
            stats.leave_count(),
            stats.total_days,
            stats.vacation_count,
            stats.sick_count,
            stats.day_off_count,
            name_width = name_width,
            position_width = position_width,
        ));
    }

    output
}

/// Format one employee with every leave they have booked
pub fn format_employee_details(employee: &Employee, date_format: &str) -> String {
    let stats = EmployeeStats::for_employee(employee);

    let mut output = String::new();
    output.push_str(&format!("Employee: {}\n", employee.name));
    output.push_str(&format!("  ID:         {}\n", employee.id));
    output.push_str(&format!("  Position:   {}\n", employee.position));
    output.push_str(&format!("  Leave days: {}\n", stats.total_days));
    output.push('\n');

    if employee.leaves.is_empty() {
        output.push_str("  No leaves booked.\n");
        return output;
    }

    let date_width = employee
        .leaves
        .iter()
        .map(|leave| format_date(leave.start_date, date_format).len())
        .max()
        .unwrap_or(10)
        .max(5);

    output.push_str(&format!(
        "  {:<11}  {:<10}  {:<date_width$}  {:<date_width$}  {:>4}\n",
        "ID",
        "Type",
        "Start",
        "End",
        "Days",
        date_width = date_width,
    ));

    for leave in &employee.leaves {
        output.push_str(&format!(
            "  {:<11}  {:<10}  {:<date_width$}  {:<date_width$}  {:>4}\n",
            leave.id.to_string(),
            kind_label(leave.kind),
            format_date(leave.start_date, date_format),
            format_date(leave.end_date, date_format),
            leave.duration_days(),
            date_width = date_width,
        ));
    }

    output
}
