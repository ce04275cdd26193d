/// Primary button of the annotation toolbar.
///
/// A change made through [`ToggleButton::set_active`] reports that the button
/// toggled so the owner can run its handler. [`ToggleButton::set_active_silently`]
/// changes the pressed state without reporting anything; the owner uses it for
/// its own updates so the handler never runs twice for one change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    active: bool,
    icon_name: &'static str,
    tooltip: Option<&'static str>,
}

impl ToggleButton {
    pub fn new(icon_name: &'static str) -> Self {
        Self {
            active: false,
            icon_name,
            tooltip: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the new state when it changed
    pub fn set_active(&mut self, active: bool) -> Option<bool> {
        if self.active == active {
            return None;
        }
        self.active = active;
        Some(active)
    }

    /// Returns whether the state changed
    pub fn set_active_silently(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }

    pub fn icon_name(&self) -> &'static str {
        self.icon_name
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        self.tooltip
    }

    pub fn set_appearance(&mut self, icon_name: &'static str, tooltip: &'static str) {
        self.icon_name = icon_name;
        self.tooltip = Some(tooltip);
    }
}
