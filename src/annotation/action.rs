use log::{debug, trace};

use super::toggle::ToggleButton;
use super::{AnnotationActionType, AnnotationSettings};

/// Icon of the secondary (options menu) button
pub const MENU_ICON_NAME: &str = "pan-down-symbolic";

/// Notifications sent from the control to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationEvent {
    /// The selected mode changed
    Activated,
    /// Start an annotation-drawing interaction with these settings
    BeginAddAnnot(AnnotationSettings),
    /// Abort any annotation-drawing interaction in progress
    CancelAddAnnot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Idle,
    Armed(AnnotationActionType),
}

/// Two-part toolbar control: a toggle that arms the current annotation mode
/// and a menu that picks the mode.
///
/// Hosts call [`AnnotationAction::select_annotation`] when a menu entry is
/// chosen and [`AnnotationAction::add_annot_finished`] once the drawing
/// interaction ends. Events reach every receiver handed out by
/// [`AnnotationAction::subscribe`], in emission order.
pub struct AnnotationAction {
    button: ToggleButton,
    last_used_highlight_color: AnnotationActionType,
    active_annot_type: AnnotationActionType,
    subscribers: Vec<flume::Sender<AnnotationEvent>>,
}

impl Default for AnnotationAction {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationAction {
    pub fn new() -> Self {
        Self {
            button: ToggleButton::new(AnnotationActionType::Highlight.icon_name()),
            last_used_highlight_color: AnnotationActionType::HighlightYellow,
            active_annot_type: AnnotationActionType::HighlightYellow,
            subscribers: Vec::new(),
        }
    }

    /// Start with a remembered highlight color, e.g. from saved settings.
    ///
    /// Anything but a concrete highlight color is ignored.
    pub fn with_last_used_highlight(color: AnnotationActionType) -> Self {
        let mut action = Self::new();
        if color.is_highlight_color() {
            action.last_used_highlight_color = color;
        } else {
            debug!("Ignoring non-highlight remembered color {color}");
        }
        action
    }

    pub fn subscribe(&mut self) -> flume::Receiver<AnnotationEvent> {
        let (tx, rx) = flume::unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn active_annot_type(&self) -> AnnotationActionType {
        self.active_annot_type
    }

    pub fn last_used_highlight_color(&self) -> AnnotationActionType {
        self.last_used_highlight_color
    }

    pub fn is_armed(&self) -> bool {
        self.button.is_active()
    }

    pub fn state(&self) -> ActionState {
        if self.button.is_active() {
            ActionState::Armed(self.active_annot_type)
        } else {
            ActionState::Idle
        }
    }

    pub fn icon_name(&self) -> &'static str {
        self.button.icon_name()
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        self.button.tooltip()
    }

    pub fn menu_icon_name(&self) -> &'static str {
        MENU_ICON_NAME
    }

    /// Arm `annot_type`, cancelling whatever was being drawn before.
    ///
    /// `Highlight` arms the last used highlight color. The button shows the
    /// type as requested, not as resolved.
    pub fn select_annotation(&mut self, annot_type: AnnotationActionType) {
        self.active_annot_type = if annot_type == AnnotationActionType::Highlight {
            self.last_used_highlight_color
        } else {
            annot_type
        };
        debug!(
            "Selected annotation {annot_type} (active {})",
            self.active_annot_type
        );

        self.button
            .set_appearance(annot_type.icon_name(), annot_type.tooltip());

        self.emit(AnnotationEvent::Activated);

        let settings = self.switch_annot_settings();

        self.emit(AnnotationEvent::CancelAddAnnot);

        if self.button.set_active_silently(true) {
            trace!("Annotation button pressed programmatically");
        }

        self.emit(AnnotationEvent::BeginAddAnnot(settings));
    }

    /// The host finished (or gave up on) drawing an annotation.
    pub fn add_annot_finished(&mut self) {
        if self.button.set_active_silently(false) {
            debug!("Annotation {} finished, releasing button", self.active_annot_type);
        }
    }

    /// User pressed the primary button
    pub fn toggle_pressed(&mut self) {
        if let Some(active) = self.button.set_active(true) {
            self.on_button_toggled(active);
        }
    }

    /// User released the primary button
    pub fn toggle_released(&mut self) {
        if let Some(active) = self.button.set_active(false) {
            self.on_button_toggled(active);
        }
    }

    fn on_button_toggled(&mut self, active: bool) {
        if !active {
            return;
        }
        let settings = self.switch_annot_settings();
        self.emit(AnnotationEvent::BeginAddAnnot(settings));
    }

    /// Resolve the active type, remembering it when it is a highlight color
    fn switch_annot_settings(&mut self) -> AnnotationSettings {
        if self.active_annot_type.is_highlight_color() {
            self.last_used_highlight_color = self.active_annot_type;
        }
        self.active_annot_type.settings()
    }

    fn emit(&mut self, event: AnnotationEvent) {
        trace!("Emitting {event:?}");
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
