use std::rc::Rc;
use tycoon_core::{ClientConfig, Feedback, Notice, NoticeBoard, Severity};
use yew::prelude::*;

pub enum NoticeAction {
    Alert(Severity, Feedback),
    Achievement { name: String, detail: Option<String> },
    Dismiss(u64),
}

/// Reducer wrapper so dismiss callbacks never act on a stale board.
#[derive(Clone, PartialEq, Eq)]
pub struct NoticeStack {
    board: NoticeBoard,
}

impl NoticeStack {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            board: NoticeBoard::new(config),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Notice] {
        self.board.items()
    }
}

impl Reducible for NoticeStack {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Alert(severity, feedback) => {
                next.board.alert(severity, feedback);
            }
            NoticeAction::Achievement { name, detail } => {
                next.board.achievement(name, detail);
            }
            NoticeAction::Dismiss(id) => {
                if !next.board.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_pushes_and_dismisses() {
        let stack = Rc::new(NoticeStack::new(&ClientConfig::default()));
        let stack = stack.reduce(NoticeAction::Alert(
            Severity::Warning,
            Feedback::Key("hire.missing_fields"),
        ));
        let stack = stack.reduce(NoticeAction::Achievement {
            name: "First Hire".into(),
            detail: None,
        });
        assert_eq!(stack.items().len(), 2);
        let first = stack.items()[0].id;

        let unchanged = Rc::clone(&stack).reduce(NoticeAction::Dismiss(999));
        assert!(Rc::ptr_eq(&stack, &unchanged));

        let stack = stack.reduce(NoticeAction::Dismiss(first));
        assert_eq!(stack.items().len(), 1);
        assert_eq!(stack.items()[0].ttl_ms, 6_000);
    }
}
