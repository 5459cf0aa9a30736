//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

use crate::entities::Priority;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub patients_title: &'static str,
    pub patient: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub search: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub success: &'static str,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub high: &'static str,
    pub normal: &'static str,
    pub low: &'static str,
}

/// Sidebar section icons
#[derive(Debug, Clone)]
pub struct SectionIcons {
    pub inbox: &'static str,
    pub calendar: &'static str,
    pub clock: &'static str,
    pub folder: &'static str,
    pub tag: &'static str,
    pub project: &'static str,
    pub label: &'static str,
    pub default: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub ui: UiIcons,
    pub priority: PriorityIcons,
    pub section: SectionIcons,
    pub due_date: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            ui: UiIcons {
                tasks_title: "📝",
                patients_title: "🏥",
                patient: "👤",
                expanded: "🔽",
                collapsed: "▶️",
                search: "🔍",
                error: "❌",
                info: "💡",
                success: "✅",
            },
            priority: PriorityIcons {
                high: "🔴",
                normal: "🟢",
                low: "🔵",
            },
            section: SectionIcons {
                inbox: "📥",
                calendar: "📅",
                clock: "🕐",
                folder: "📁",
                tag: "🏷️",
                project: "👤",
                label: "🔖",
                default: "📋",
            },
            due_date: "📅",
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "□",
                completed: "✓",
            },
            ui: UiIcons {
                tasks_title: "▶",
                patients_title: "✚",
                patient: "☺",
                expanded: "▾",
                collapsed: "▸",
                search: "⌕",
                error: "✗",
                info: "ⓘ",
                success: "✓",
            },
            priority: PriorityIcons {
                high: "●",
                normal: "○",
                low: "◯",
            },
            section: SectionIcons {
                inbox: "⊡",
                calendar: "◷",
                clock: "◔",
                folder: "◆",
                tag: "◉",
                project: "☺",
                label: "•",
                default: "≡",
            },
            due_date: "◷",
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            ui: UiIcons {
                tasks_title: ">",
                patients_title: "+",
                patient: "&",
                expanded: "v",
                collapsed: ">",
                search: "/",
                error: "X",
                info: "i",
                success: "+",
            },
            priority: PriorityIcons {
                high: "!",
                normal: "+",
                low: "-",
            },
            section: SectionIcons {
                inbox: "=",
                calendar: "@",
                clock: "~",
                folder: "#",
                tag: "*",
                project: "&",
                label: "@",
                default: ">",
            },
            due_date: "@",
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    #[must_use]
    pub fn task_status(&self, completed: bool) -> &'static str {
        if completed {
            self.task_completed()
        } else {
            self.task_pending()
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Priority::High => icons.high,
            Priority::Normal => icons.normal,
            Priority::Low => icons.low,
        }
    }

    /// Icon for a sidebar icon name; unknown names get the default icon
    #[must_use]
    pub fn section_icon(&self, name: &str) -> &'static str {
        let icons = self.icons().section;
        match name {
            "inbox" => icons.inbox,
            "calendar" => icons.calendar,
            "clock" => icons.clock,
            "folder" => icons.folder,
            "tag" => icons.tag,
            "project" => icons.project,
            "label" => icons.label,
            _ => icons.default,
        }
    }

    /// Disclosure marker for a task row
    #[must_use]
    pub fn disclosure(&self, expanded: bool) -> &'static str {
        let ui = self.icons().ui;
        if expanded {
            ui.expanded
        } else {
            ui.collapsed
        }
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        self.icons().ui.tasks_title
    }

    #[must_use]
    pub fn patients_title(&self) -> &'static str {
        self.icons().ui.patients_title
    }

    #[must_use]
    pub fn patient(&self) -> &'static str {
        self.icons().ui.patient
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    #[must_use]
    pub fn due_date(&self) -> &'static str {
        self.icons().due_date
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }
}
