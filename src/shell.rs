//! Derived display state for the page shell: progress bar, active nav entry,
//! cursor glow, and the hero's parallax offset.

use serde::Serialize;

const ACTIVE_PROBE_Y: f64 = 100.0;
const NAV_CLEARANCE: f64 = 50.0;
const PARALLAX_DAMPING: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Experience,
    Skills,
    Projects,
    Education,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Experience,
        Self::Skills,
        Self::Projects,
        Self::Education,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Education => "education",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Education => "Education",
        }
    }
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

/// Fraction of the page scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_y.is_finite() {
        return 0.0;
    }

    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// First section (in page order) straddling the probe line below the nav.
pub fn active_section(bounds: &[SectionBounds]) -> Option<SectionId> {
    bounds
        .iter()
        .find(|section| section.top <= ACTIVE_PROBE_Y && section.bottom >= ACTIVE_PROBE_Y)
        .map(|section| section.id)
}

/// Document offset to scroll to so the section clears the fixed nav.
pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAV_CLEARANCE).max(0.0)
}

pub fn parallax_offset(viewport: (f64, f64), pointer: (f64, f64)) -> (f64, f64) {
    let (width, height) = viewport;
    let (x, y) = pointer;

    (
        (width / 2.0 - x) / PARALLAX_DAMPING,
        (height / 2.0 - y) / PARALLAX_DAMPING,
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShellState {
    pub progress: f64,
    pub active: SectionId,
    pub cursor: Point,
    pub menu_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            active: SectionId::Home,
            cursor: Point::default(),
            menu_open: false,
        }
    }
}

impl ShellState {
    pub fn on_scroll(&mut self, progress: f64, bounds: &[SectionBounds]) {
        self.progress = progress;
        if let Some(active) = active_section(bounds) {
            self.active = active;
        }
    }

    pub fn on_pointer(&mut self, x: f64, y: f64) {
        self.cursor = Point { x, y };
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn navigate(&mut self, section: SectionId) {
        self.active = section;
        self.menu_open = false;
    }

    pub fn progress_style(&self) -> String {
        format!("width: {:.2}%;", self.progress * 100.0)
    }

    pub fn cursor_style(&self) -> String {
        format!(
            "left: {:.2}px; top: {:.2}px; transform: translate(-50%, -50%);",
            self.cursor.x, self.cursor.y
        )
    }
}
