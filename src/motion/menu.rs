use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    /// A navigation item was activated; carries its anchor.
    Select(&'static str),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn next(self, action: &MenuAction) -> MenuState {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, MenuAction::Toggle) => MenuState::Closed,
            (_, MenuAction::Select(_)) => MenuState::Closed,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(&action);
        if next == *self {
            return self;
        }
        debug!("menu {:?} -> {:?} on {:?}", *self, next, action);
        Rc::new(next)
    }
}

/// What the mobile overlay renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Hidden,
    Open,
    /// Still mounted while the exit transition plays.
    Closing,
}

impl OverlayPhase {
    pub fn class(self) -> Option<&'static str> {
        match self {
            OverlayPhase::Hidden => None,
            OverlayPhase::Open => Some("open"),
            OverlayPhase::Closing => Some("closing"),
        }
    }
}

/// Mount lifecycle of the overlay, trailing the menu state by one exit
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayPresence {
    mounted: bool,
    exit_pending: bool,
}

impl OverlayPresence {
    /// Applies a menu change. Opening cancels any pending exit; closing a
    /// mounted overlay schedules one.
    pub fn follow(self, state: MenuState) -> Self {
        match state {
            MenuState::Open => OverlayPresence {
                mounted: true,
                exit_pending: false,
            },
            MenuState::Closed => OverlayPresence {
                mounted: self.mounted,
                exit_pending: self.mounted,
            },
        }
    }

    /// The exit timer fired.
    pub fn exit_elapsed(self) -> Self {
        if self.exit_pending {
            OverlayPresence::default()
        } else {
            self
        }
    }

    pub fn exit_pending(self) -> bool {
        self.exit_pending
    }

    pub fn phase(self, state: MenuState) -> OverlayPhase {
        match (state, self.mounted) {
            (MenuState::Open, _) => OverlayPhase::Open,
            (MenuState::Closed, true) => OverlayPhase::Closing,
            (MenuState::Closed, false) => OverlayPhase::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let open = MenuState::default().next(&MenuAction::Toggle);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.next(&MenuAction::Toggle), MenuState::Closed);
    }

    #[test]
    fn selecting_an_item_closes_the_overlay() {
        assert_eq!(
            MenuState::Open.next(&MenuAction::Select("#services")),
            MenuState::Closed
        );
    }

    #[test]
    fn selecting_while_closed_changes_nothing() {
        let state = Rc::new(MenuState::Closed);
        let after = state.clone().reduce(MenuAction::Select("#contact"));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn every_state_can_reach_closed() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.next(&MenuAction::Select("#about")), MenuState::Closed);
        }
    }

    #[test]
    fn overlay_starts_hidden() {
        let presence = OverlayPresence::default().follow(MenuState::Closed);
        assert_eq!(presence.phase(MenuState::Closed), OverlayPhase::Hidden);
        assert!(!presence.exit_pending());
    }

    #[test]
    fn closing_keeps_overlay_mounted_until_exit_elapses() {
        let open = OverlayPresence::default().follow(MenuState::Open);
        assert_eq!(open.phase(MenuState::Open), OverlayPhase::Open);

        let closing = open.follow(MenuState::Closed);
        assert!(closing.exit_pending());
        assert_eq!(closing.phase(MenuState::Closed), OverlayPhase::Closing);
        assert_eq!(OverlayPhase::Closing.class(), Some("closing"));

        let gone = closing.exit_elapsed();
        assert_eq!(gone.phase(MenuState::Closed), OverlayPhase::Hidden);
        assert_eq!(OverlayPhase::Hidden.class(), None);
    }

    #[test]
    fn reopening_cancels_pending_exit() {
        let closing = OverlayPresence::default()
            .follow(MenuState::Open)
            .follow(MenuState::Closed);
        let reopened = closing.follow(MenuState::Open);
        assert!(!reopened.exit_pending());

        // A stale timer firing after the reopen changes nothing
        let after_timer = reopened.exit_elapsed();
        assert_eq!(after_timer, reopened);
        assert_eq!(after_timer.phase(MenuState::Open), OverlayPhase::Open);
    }

    #[test]
    fn selecting_an_item_plays_the_exit() {
        let state = MenuState::Open.next(&MenuAction::Select("#services"));
        let presence = OverlayPresence::default()
            .follow(MenuState::Open)
            .follow(state);
        assert_eq!(presence.phase(state), OverlayPhase::Closing);
    }
}
