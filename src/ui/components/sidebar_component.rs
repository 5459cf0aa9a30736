//! To-do sidebar: the section views, the patient projects and the labels.
//!
//! Rows come from [`crate::store::Navigator`], so counts are always live.
//! Selecting a row emits [`Action::NavigateToSection`]; the session owns the
//! selected section and feeds it back through `update_data`.

use crate::icons::IconService;
use crate::store::{NavEntry, Section};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::sidebar_item_component::SidebarItem;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct SidebarComponent {
    pub selection: Section,
    pub icons: IconService,
    pub focused: bool,
    items: Vec<SidebarItem>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    last_area: Rect,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            selection: Section::default(),
            icons: IconService::default(),
            focused: true,
            items: Vec::new(),
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
            last_area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, entries: Vec<NavEntry>, selection: Section) {
        self.items = entries.into_iter().map(SidebarItem::new).collect();
        self.selection = selection;
        self.update_list_state();
    }

    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }

    fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_selected(&self.selection))
    }

    fn update_list_state(&mut self) {
        let index = self.selected_index();
        self.list_state.select(index);
        self.scrollbar_helper.update_state(self.items.len(), index.unwrap_or(0), None);
    }

    /// Neighbouring section below (or above) the current one, wrapping at both ends
    fn neighbour_section(&self, forward: bool) -> Option<Section> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len();
        let next = match self.selected_index() {
            // Unknown section selected: enter the list at the nearest end
            None if forward => 0,
            None => len - 1,
            Some(current) if forward => (current + 1) % len,
            Some(current) => (current + len - 1) % len,
        };
        Some(self.items[next].section().clone())
    }
}

impl Component for SidebarComponent {
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.last_area;
        if !LayoutManager::contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Skip the top and bottom borders
                if mouse.row <= area.y || mouse.row >= area.y + area.height - 1 {
                    return Action::None;
                }
                let clicked = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                match self.items.get(clicked) {
                    Some(item) => Action::NavigateToSection(item.section().clone()),
                    None => Action::None,
                }
            }
            MouseEventKind::ScrollUp => self
                .neighbour_section(false)
                .map_or(Action::None, Action::NavigateToSection),
            MouseEventKind::ScrollDown => self
                .neighbour_section(true)
                .map_or(Action::None, Action::NavigateToSection),
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('J') => self.neighbour_section(true).map_or(Action::None, Action::NavigateToSection),
            KeyCode::Char('K') => self.neighbour_section(false).map_or(Action::None, Action::NavigateToSection),
            KeyCode::Down if shifted => self.neighbour_section(true).map_or(Action::None, Action::NavigateToSection),
            KeyCode::Up if shifted => self.neighbour_section(false).map_or(Action::None, Action::NavigateToSection),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NavigateToSection(section) => {
                self.selection = section.clone();
                self.update_list_state();
                // The session still has to switch its filter
                Action::NavigateToSection(section)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = rect;
        self.update_list_state();

        let total_items = self.items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);
        let row_width = list_area.width.saturating_sub(2) as usize;

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| item.render(&self.icons, &self.selection, row_width))
            .collect();

        let available_height = rect.height.saturating_sub(2) as usize;
        let position = self.list_state.selected().unwrap_or(0);
        self.scrollbar_helper
            .update_state(total_items, position, Some(available_height));

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("To-do")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(border_color)),
            )
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
