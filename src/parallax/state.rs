use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::transform::PointerSample;

/// View state of the preview region: Idle (`hovering == false`) or Hovering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewState {
    pub pointer: PointerSample,
    pub hovering: bool,
    /// Milliseconds since the epoch of the last animation frame.
    pub stamp: i64,
}

pub enum PreviewAction {
    Enter,
    Leave,
    Move(PointerSample),
    Frame(i64),
}

impl Reducible for PreviewState {
    type Action = PreviewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PreviewAction::Enter if !self.hovering => {
                debug!("preview: idle -> hovering");
                Rc::new(PreviewState { hovering: true, ..(*self).clone() })
            }
            PreviewAction::Leave if self.hovering => {
                debug!("preview: hovering -> idle");
                Rc::new(PreviewState { hovering: false, ..(*self).clone() })
            }
            PreviewAction::Move(pointer) => Rc::new(PreviewState { pointer, ..(*self).clone() }),
            PreviewAction::Frame(stamp) if self.hovering => {
                Rc::new(PreviewState { stamp, ..(*self).clone() })
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> Rc<PreviewState> {
        Rc::new(PreviewState::default())
    }

    #[test]
    fn enter_then_leave_round_trips_to_idle() {
        let s = idle().reduce(PreviewAction::Enter);
        assert!(s.hovering);
        let s = s.reduce(PreviewAction::Leave);
        assert!(!s.hovering);
    }

    #[test]
    fn repeated_enter_is_a_single_transition() {
        let entered = idle().reduce(PreviewAction::Enter);
        let again = entered.clone().reduce(PreviewAction::Enter);
        assert!(Rc::ptr_eq(&entered, &again));
    }

    #[test]
    fn leave_while_idle_is_ignored() {
        let s = idle();
        let after = s.clone().reduce(PreviewAction::Leave);
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn move_keeps_hover_flag() {
        let p = PointerSample { x: 0.2, y: 0.9 };
        let s = idle().reduce(PreviewAction::Enter).reduce(PreviewAction::Move(p));
        assert!(s.hovering);
        assert_eq!(s.pointer, p);
    }

    #[test]
    fn frame_stamps_only_while_hovering() {
        let s = idle().reduce(PreviewAction::Frame(42));
        assert_eq!(s.stamp, 0);

        let p = PointerSample { x: 0.7, y: 0.1 };
        let s = idle()
            .reduce(PreviewAction::Enter)
            .reduce(PreviewAction::Move(p))
            .reduce(PreviewAction::Frame(42));
        assert_eq!(s.stamp, 42);
        assert_eq!(s.pointer, p);
    }
}
