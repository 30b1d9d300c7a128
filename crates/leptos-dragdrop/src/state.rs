//! Drag State Machine
//!
//! Pure, DOM-free transitions for reordering a flat list with the mouse.
//! The Leptos bindings in the crate root feed mouse events in here.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Where the pointer currently hovers while dragging
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Hovering a card: the dragged card takes this index
    Card(usize),
    /// Hovering the gap before index `k` (`k == len` is the end of the list)
    Slot(usize),
}

/// A completed drag, expressed as a positional move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// Drag lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Button is down on a card, but the pointer has not moved far enough yet
    Pressed { source: usize, origin: (i32, i32) },
    /// Card is being dragged, optionally over a target
    Dragging { source: usize, over: Option<DropTarget> },
}

impl DragState {
    pub fn press(source: usize, x: i32, y: i32) -> Self {
        DragState::Pressed { source, origin: (x, y) }
    }

    /// Promote a pending press to a drag once the pointer leaves the threshold box
    pub fn pointer_moved(self, x: i32, y: i32) -> Self {
        match self {
            DragState::Pressed { source, origin: (ox, oy) } => {
                let dx = (x - ox).abs();
                let dy = (y - oy).abs();
                if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                    DragState::Dragging { source, over: None }
                } else {
                    self
                }
            }
            other => other,
        }
    }

    pub fn enter(self, target: DropTarget) -> Self {
        match self {
            // Don't allow dropping on self
            DragState::Dragging { source, .. } if target == DropTarget::Card(source) => {
                DragState::Dragging { source, over: None }
            }
            DragState::Dragging { source, .. } => DragState::Dragging { source, over: Some(target) },
            other => other,
        }
    }

    pub fn leave(self) -> Self {
        match self {
            DragState::Dragging { source, .. } => DragState::Dragging { source, over: None },
            other => other,
        }
    }

    /// Finish the interaction. Only a drag over a target that actually changes
    /// the position yields a reorder.
    pub fn release(self) -> (Self, Option<Reorder>) {
        let reorder = match self {
            DragState::Dragging { source, over: Some(target) } => {
                let to = resolve_destination(source, target);
                (to != source).then_some(Reorder { from: source, to })
            }
            _ => None,
        };
        (DragState::Idle, reorder)
    }

    pub fn dragging_source(&self) -> Option<usize> {
        match self {
            DragState::Dragging { source, .. } => Some(*source),
            _ => None,
        }
    }

    pub fn hover_target(&self) -> Option<DropTarget> {
        match self {
            DragState::Dragging { over, .. } => *over,
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Map a drop target to the index the dragged item ends up at after removal
/// from `source`.
pub fn resolve_destination(source: usize, target: DropTarget) -> usize {
    match target {
        DropTarget::Card(index) => index,
        DropTarget::Slot(gap) if gap > source => gap - 1,
        DropTarget::Slot(gap) => gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(source: usize) -> DragState {
        DragState::press(source, 10, 10).pointer_moved(10, 30)
    }

    #[test]
    fn test_press_below_threshold_stays_pending() {
        let state = DragState::press(1, 100, 100).pointer_moved(103, 97);
        assert_eq!(state, DragState::Pressed { source: 1, origin: (100, 100) });
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_motion_past_threshold_starts_drag() {
        let state = DragState::press(2, 0, 0).pointer_moved(6, 0);
        assert_eq!(state.dragging_source(), Some(2));
        assert_eq!(state.hover_target(), None);
    }

    #[test]
    fn test_own_card_is_not_a_target() {
        let state = dragging(1).enter(DropTarget::Card(1));
        assert_eq!(state.hover_target(), None);
    }

    #[test]
    fn test_release_over_card_reorders() {
        let state = dragging(0).enter(DropTarget::Card(2));
        let (next, reorder) = state.release();
        assert_eq!(next, DragState::Idle);
        assert_eq!(reorder, Some(Reorder { from: 0, to: 2 }));
    }

    #[test]
    fn test_release_without_target_cancels() {
        let state = dragging(0).enter(DropTarget::Card(2)).leave();
        assert_eq!(state.release(), (DragState::Idle, None));
    }

    #[test]
    fn test_release_while_pending_is_a_click() {
        let (next, reorder) = DragState::press(0, 5, 5).release();
        assert_eq!(next, DragState::Idle);
        assert_eq!(reorder, None);
    }

    #[test]
    fn test_slot_resolution() {
        // Gaps around the source do not move anything
        assert_eq!(resolve_destination(1, DropTarget::Slot(1)), 1);
        assert_eq!(resolve_destination(1, DropTarget::Slot(2)), 1);
        // Moving down accounts for the removed source
        assert_eq!(resolve_destination(0, DropTarget::Slot(3)), 2);
        // Moving up inserts before the gap index
        assert_eq!(resolve_destination(2, DropTarget::Slot(0)), 0);

        let (_, reorder) = dragging(1).enter(DropTarget::Slot(2)).release();
        assert_eq!(reorder, None);
    }
}
