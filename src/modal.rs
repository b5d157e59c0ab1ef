//! Visibility state for the CV preview overlay.
//!
//! The controller is a plain value: the UI keeps one per page inside a signal
//! and routes every user event through [`ModalController::handle`]. Each call
//! reports a [`Transition`] so callers can skip notifying anything when the
//! state did not actually change.

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

/// Where a pointer or activation event landed inside the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The dimmed area surrounding the dialog box.
    Background,
    /// The dialog box itself, including its toolbar and viewer.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    Close,
    Activate(Region),
    Key(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

impl Transition {
    pub fn is_change(self) -> bool {
        self != Transition::Unchanged
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    visibility: ModalVisibility,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    pub fn request_open(&mut self) -> Transition {
        self.set(ModalVisibility::Open)
    }

    pub fn request_close(&mut self) -> Transition {
        self.set(ModalVisibility::Closed)
    }

    /// Closes only for activations on the background region.
    pub fn backdrop_dismiss(&mut self, region: Region) -> Transition {
        match region {
            Region::Background => self.request_close(),
            Region::Content => Transition::Unchanged,
        }
    }

    /// Whether focus landing outside the dialog must be pulled back in.
    pub fn reclaims_focus(&self, target_inside_dialog: bool) -> bool {
        self.is_open() && !target_inside_dialog
    }

    pub fn dismiss_key(&mut self, key: &str) -> Transition {
        if key == ESCAPE_KEY {
            self.request_close()
        } else {
            Transition::Unchanged
        }
    }

    pub fn handle(&mut self, event: ModalEvent) -> Transition {
        let transition = match event {
            ModalEvent::Open => self.request_open(),
            ModalEvent::Close => self.request_close(),
            ModalEvent::Activate(region) => self.backdrop_dismiss(region),
            ModalEvent::Key(key) => self.dismiss_key(&key),
        };
        if transition.is_change() {
            log::debug!("cv preview {:?}", transition);
        }
        transition
    }

    fn set(&mut self, next: ModalVisibility) -> Transition {
        if self.visibility == next {
            return Transition::Unchanged;
        }
        self.visibility = next;
        match next {
            ModalVisibility::Open => Transition::Opened,
            ModalVisibility::Closed => Transition::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// First control inside the dialog.
    Dialog,
    /// The control that opened the dialog.
    Trigger,
}

/// Where focus goes after visibility is observed as `open`, given what it
/// was on the previous observation (`None` on the first one).
pub fn focus_after(was_open: Option<bool>, open: bool) -> Option<FocusTarget> {
    match (was_open, open) {
        (_, true) => Some(FocusTarget::Dialog),
        (Some(true), false) => Some(FocusTarget::Trigger),
        _ => None,
    }
}

/// Next index in a ring of `len` focusable elements.
///
/// `current` is `None` when focus sits outside the ring; it then enters at the
/// first element, or the last one when moving backwards. An index past the
/// end of the ring yields `None`.
pub fn cycle_focus(current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 || current.is_some_and(|i| i >= len) {
        return None;
    }
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => len - 1,
        (Some(i), false) => (i + 1) % len,
        (Some(0), true) => len - 1,
        (Some(i), true) => i - 1,
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let controller = ModalController::new();
        assert!(!controller.is_open());
        assert_eq!(controller, ModalController::default());
    }

    #[test]
    fn test_open_then_close() {
        let mut controller = ModalController::new();
        assert_eq!(controller.request_open(), Transition::Opened);
        assert!(controller.is_open());
        assert_eq!(controller.request_close(), Transition::Closed);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_repeated_requests_do_not_toggle() {
        let mut controller = ModalController::new();
        let transitions = [
            controller.request_open(),
            controller.request_open(),
            controller.request_open(),
        ];
        let opened = transitions
            .iter()
            .filter(|t| **t == Transition::Opened)
            .count();
        assert_eq!(opened, 1);
        assert!(controller.is_open());

        assert_eq!(controller.request_close(), Transition::Closed);
        assert_eq!(controller.request_close(), Transition::Unchanged);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_last_state_changing_call_wins() {
        // every open/close sequence up to length 6
        for n in 0..6u32 {
            for bits in 0..(1u32 << n) {
                let mut controller = ModalController::new();
                let mut expected = false;
                for i in 0..n {
                    if bits & (1 << i) != 0 {
                        controller.request_open();
                        expected = true;
                    } else {
                        controller.request_close();
                        expected = false;
                    }
                }
                assert_eq!(controller.is_open(), expected, "sequence {bits:b} of {n}");
            }
        }
    }

    #[test]
    fn test_backdrop_dismiss_while_closed() {
        let mut controller = ModalController::new();
        assert_eq!(
            controller.backdrop_dismiss(Region::Background),
            Transition::Unchanged
        );
        assert_eq!(
            controller.backdrop_dismiss(Region::Content),
            Transition::Unchanged
        );
        assert!(!controller.is_open());
    }

    #[test]
    fn test_content_activation_keeps_open() {
        let mut controller = ModalController::new();
        controller.request_open();
        assert_eq!(
            controller.handle(ModalEvent::Activate(Region::Content)),
            Transition::Unchanged
        );
        assert!(controller.is_open());
    }

    #[test]
    fn test_background_activation_closes() {
        let mut controller = ModalController::new();
        controller.request_open();
        assert_eq!(
            controller.handle(ModalEvent::Activate(Region::Background)),
            Transition::Closed
        );
        assert!(!controller.is_open());
    }

    #[test]
    fn test_escape_key_dismiss() {
        let mut controller = ModalController::new();
        controller.handle(ModalEvent::Open);
        assert_eq!(
            controller.handle(ModalEvent::Key("Enter".to_string())),
            Transition::Unchanged
        );
        assert!(controller.is_open());
        assert_eq!(
            controller.handle(ModalEvent::Key(ESCAPE_KEY.to_string())),
            Transition::Closed
        );
        assert_eq!(controller.dismiss_key(ESCAPE_KEY), Transition::Unchanged);
    }

    #[test]
    fn test_independent_controllers() {
        let mut a = ModalController::new();
        let b = ModalController::new();
        a.request_open();
        assert!(a.is_open());
        assert!(!b.is_open());
    }

    #[test]
    fn test_cycle_focus() {
        assert_eq!(cycle_focus(None, 0, false), None);
        assert_eq!(cycle_focus(None, 3, false), Some(0));
        assert_eq!(cycle_focus(None, 3, true), Some(2));
        assert_eq!(cycle_focus(Some(0), 3, false), Some(1));
        assert_eq!(cycle_focus(Some(2), 3, false), Some(0));
        assert_eq!(cycle_focus(Some(0), 3, true), Some(2));
        assert_eq!(cycle_focus(Some(2), 3, true), Some(1));
        assert_eq!(cycle_focus(Some(0), 1, false), Some(0));
    }

    #[test]
    fn test_cycle_focus_out_of_range() {
        assert_eq!(cycle_focus(Some(usize::MAX), 3, false), None);
        assert_eq!(cycle_focus(Some(3), 3, true), None);
        assert_eq!(cycle_focus(Some(7), 0, false), None);
    }

    #[test]
    fn test_reclaims_focus_only_while_open() {
        let mut controller = ModalController::new();
        assert!(!controller.reclaims_focus(false));
        controller.request_open();
        assert!(controller.reclaims_focus(false));
        assert!(!controller.reclaims_focus(true));
        controller.handle(ModalEvent::Activate(Region::Background));
        assert!(!controller.reclaims_focus(false));
    }

    #[test]
    fn test_focus_returns_to_trigger_on_close() {
        assert_eq!(focus_after(None, false), None);
        assert_eq!(focus_after(None, true), Some(FocusTarget::Dialog));
        assert_eq!(focus_after(Some(false), true), Some(FocusTarget::Dialog));
        assert_eq!(focus_after(Some(true), true), Some(FocusTarget::Dialog));
        assert_eq!(focus_after(Some(true), false), Some(FocusTarget::Trigger));
        assert_eq!(focus_after(Some(false), false), None);
    }
}
