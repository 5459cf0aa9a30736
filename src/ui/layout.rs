//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub patients: Rect,
    pub sidebar: Rect,
    pub tasks: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Patient panel | to-do sidebar | task list, with a one-line status bar below.
    ///
    /// Panel widths shrink proportionally on narrow terminals so the task list
    /// always keeps at least a third of the width.
    #[must_use]
    pub fn dashboard_layout(area: Rect, patient_panel_width: u16, sidebar_width: u16) -> DashboardAreas {
        let [main, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let available = main.width.saturating_sub(main.width / 3);
        let requested = patient_panel_width.saturating_add(sidebar_width);
        let (patients_w, sidebar_w) = if requested > available && requested > 0 {
            let patients_w = (u32::from(patient_panel_width) * u32::from(available) / u32::from(requested)) as u16;
            (patients_w, available.saturating_sub(patients_w))
        } else {
            (patient_panel_width, sidebar_width)
        };

        let [patients, sidebar, tasks] = Layout::horizontal([
            Constraint::Length(patients_w),
            Constraint::Length(sidebar_w),
            Constraint::Min(0),
        ])
        .areas(main);

        DashboardAreas {
            patients,
            sidebar,
            tasks,
            status,
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height_lines), Constraint::Min(0)])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Whether a terminal cell falls inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
