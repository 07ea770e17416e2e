//! The pointer-driven window manipulation state machine.
//!
//! [`ManipulationController`] turns a press-move-release sequence into window
//! moves and resizes. It owns only interaction state; the window itself is
//! reached through a [`WindowHost`] passed into every entry point.
//!
//! # States
//!
//! - **Idle**: no button held. Moves update the cursor hint when resizing is
//!   enabled.
//! - **Dragging**: left button held, window follows the pointer.
//! - **Resizing**: left button held, the edge or corner latched at press
//!   follows the pointer.
//!
//! Release (or [`cancel`](ManipulationController::cancel) on loss of pointer
//! capture) always returns to Idle.
//!
//! # Example
//!
//! ```ignore
//! let mut controller = ManipulationController::new(
//!     ManipulationConfig::new()
//!         .with_resize_enabled(true)
//!         .with_drag_enabled(true),
//! );
//!
//! controller.pointer_down(&mut host, press_pos, PointerButton::Left);
//! controller.pointer_move(&mut host, drag_pos);
//! controller.pointer_up(&mut host);
//! ```

use tracing::{debug, trace};

use crate::bounds::move_bounds;
use crate::config::ManipulationConfig;
use crate::cursor::{CursorShape, cursor_for};
use crate::geometry::Point;
use crate::host::WindowHost;
use crate::logging::targets;
use crate::operation::{OperationMode, PointerButton, initialize_operation};
use crate::zone::{ResizeZone, classify};

/// Pointer button state tracked between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    /// Whether the left button is held.
    pub pressed: bool,
    /// The last global pointer position seen.
    pub previous_position: Point,
}

/// Observable state of a [`ManipulationController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerState {
    Idle,
    Dragging,
    Resizing(ResizeZone),
}

/// Drives window moves and resizes from raw pointer events.
#[derive(Debug, Clone, Default)]
pub struct ManipulationController {
    config: ManipulationConfig,
    pointer: PointerState,
    mode: OperationMode,
}

impl ManipulationController {
    /// Create a controller with the given configuration.
    pub fn new(config: ManipulationConfig) -> Self {
        Self {
            config,
            pointer: PointerState::default(),
            mode: OperationMode::None,
        }
    }

    // =========================================================================
    // Pointer Events
    // =========================================================================

    /// Handle a button press at a global position.
    ///
    /// Only the left button starts an operation. Returns `true` if a move or
    /// resize started; `false` means the caller should apply its own default
    /// handling to the press. A press that starts an operation is therefore
    /// not forwarded, so widgets under the resize margins and the drag area
    /// do not also see it.
    pub fn pointer_down<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
        global_pos: Point,
        button: PointerButton,
    ) -> bool {
        if button != PointerButton::Left {
            return false;
        }

        self.pointer.pressed = true;
        self.pointer.previous_position = global_pos;
        self.mode = initialize_operation(
            global_pos,
            self.config.is_resize_enabled(),
            self.config.is_drag_enabled(),
            host.bounds(),
            self.config.resize_threshold(),
        );

        if self.mode.is_active() {
            debug!(
                target: targets::CONTROLLER,
                x = global_pos.x,
                y = global_pos.y,
                mode = ?self.mode,
                "operation started"
            );
        }

        self.mode.is_active()
    }

    /// Handle pointer motion to a global position.
    ///
    /// Returns `true` if the window bounds were changed.
    pub fn pointer_move<H: WindowHost + ?Sized>(&mut self, host: &mut H, global_pos: Point) -> bool {
        let delta = global_pos - self.pointer.previous_position;

        let changed = if self.pointer.pressed {
            self.apply_operation(host, delta)
        } else {
            if self.config.is_resize_enabled() {
                let zone = classify(
                    global_pos,
                    host.bounds(),
                    self.config.resize_threshold(),
                );
                host.set_cursor_shape(cursor_for(zone));
            }
            false
        };

        // Tracked while idle too, so the first delta after a press is measured
        // from the press position.
        self.pointer.previous_position = global_pos;
        changed
    }

    /// Handle the button release.
    ///
    /// Returns `true` if an operation was active.
    pub fn pointer_up<H: WindowHost + ?Sized>(&mut self, _host: &mut H) -> bool {
        let was_active = self.mode.is_active();
        if was_active {
            debug!(target: targets::CONTROLLER, mode = ?self.mode, "operation finished");
        }
        self.release();
        was_active
    }

    /// Abort any operation, as if the button had been released.
    ///
    /// Call this when pointer capture is lost (focus change, window hidden)
    /// so the controller is never stuck in an operation whose release event
    /// will not arrive. Returns `true` if an operation was active.
    pub fn cancel<H: WindowHost + ?Sized>(&mut self, _host: &mut H) -> bool {
        let was_active = self.mode.is_active();
        if was_active {
            debug!(target: targets::CONTROLLER, mode = ?self.mode, "operation cancelled");
        }
        self.release();
        was_active
    }

    fn apply_operation<H: WindowHost + ?Sized>(&mut self, host: &mut H, delta: Point) -> bool {
        match self.mode {
            OperationMode::Resize(zone) => {
                let current = host.bounds();
                let resized = zone.resize(delta, current, &host.constraints());
                if resized == current {
                    return false;
                }
                trace!(
                    target: targets::CONTROLLER,
                    ?zone,
                    x = resized.x,
                    y = resized.y,
                    width = resized.width,
                    height = resized.height,
                    "resizing window"
                );
                host.set_bounds(resized);
                true
            }
            OperationMode::Move => {
                if delta == Point::ZERO {
                    return false;
                }
                let moved = move_bounds(delta, host.bounds());
                trace!(
                    target: targets::CONTROLLER,
                    x = moved.x,
                    y = moved.y,
                    "moving window"
                );
                host.set_position(moved.origin());
                true
            }
            OperationMode::None => false,
        }
    }

    fn release(&mut self) {
        self.pointer.pressed = false;
        self.mode = OperationMode::None;
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Enable or disable edge and corner resizing.
    ///
    /// Mouse tracking follows this flag, since hover cursor hints need motion
    /// events while no button is held. Disabling restores the arrow cursor.
    /// An operation already in progress is not affected.
    pub fn set_resizable<H: WindowHost + ?Sized>(&mut self, host: &mut H, enabled: bool) {
        self.config.set_resize_enabled(enabled);
        host.set_mouse_tracking(enabled);
        if !enabled && !self.pointer.pressed {
            host.set_cursor_shape(CursorShape::Arrow);
        }
        debug!(target: targets::CONTROLLER, enabled, "resizing toggled");
    }

    /// Enable or disable dragging the window from outside resize zones.
    ///
    /// An operation already in progress is not affected.
    pub fn set_draggable(&mut self, enabled: bool) {
        self.config.set_drag_enabled(enabled);
        debug!(target: targets::CONTROLLER, enabled, "dragging toggled");
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// The current configuration.
    pub fn config(&self) -> &ManipulationConfig {
        &self.config
    }

    /// The operation chosen at the last press, or `None` when idle.
    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    /// The pointer state tracked between events.
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// The current state machine state.
    ///
    /// A press that started no operation reports `Idle`.
    pub fn state(&self) -> ControllerState {
        match self.mode {
            OperationMode::Move => ControllerState::Dragging,
            OperationMode::Resize(zone) => ControllerState::Resizing(zone),
            OperationMode::None => ControllerState::Idle,
        }
    }

    /// Check if a move or resize is in progress.
    pub fn is_active(&self) -> bool {
        self.mode.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, SizeConstraints};

    #[derive(Default)]
    struct TestHost {
        bounds: Rect,
        constraints: SizeConstraints,
        cursor: Option<CursorShape>,
        tracking: bool,
        set_bounds_calls: usize,
    }

    impl WindowHost for TestHost {
        fn bounds(&self) -> Rect {
            self.bounds
        }

        fn set_bounds(&mut self, bounds: Rect) {
            self.bounds = bounds;
            self.set_bounds_calls += 1;
        }

        fn constraints(&self) -> SizeConstraints {
            self.constraints
        }

        fn set_cursor_shape(&mut self, shape: CursorShape) {
            self.cursor = Some(shape);
        }

        fn set_mouse_tracking(&mut self, enabled: bool) {
            self.tracking = enabled;
        }
    }

    fn host() -> TestHost {
        TestHost {
            bounds: Rect::new(100, 100, 200, 150),
            constraints: SizeConstraints::new(50, 1000, 50, 1000),
            ..Default::default()
        }
    }

    fn controller() -> ManipulationController {
        ManipulationController::new(
            ManipulationConfig::new()
                .with_resize_enabled(true)
                .with_drag_enabled(true),
        )
    }

    #[test]
    fn test_default_is_idle() {
        let controller = ManipulationController::default();
        assert_eq!(controller.state(), ControllerState::Idle);
        assert!(!controller.pointer().pressed);
        assert!(!controller.is_active());
    }

    #[test]
    fn test_top_left_press_latches_resize() {
        let mut host = host();
        let mut controller = controller();

        assert!(controller.pointer_down(&mut host, Point::new(101, 101), PointerButton::Left));
        assert_eq!(controller.mode(), OperationMode::Resize(ResizeZone::TopLeft));
        assert_eq!(controller.state(), ControllerState::Resizing(ResizeZone::TopLeft));
    }

    #[test]
    fn test_non_left_press_is_ignored() {
        let mut host = host();
        let mut controller = controller();

        assert!(!controller.pointer_down(&mut host, Point::new(200, 175), PointerButton::Right));
        assert!(!controller.pointer_down(&mut host, Point::new(200, 175), PointerButton::Other(4)));
        assert!(!controller.pointer().pressed);
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_drag_moves_window() {
        let mut host = host();
        let mut controller = controller();

        controller.pointer_down(&mut host, Point::new(200, 175), PointerButton::Left);
        assert_eq!(controller.state(), ControllerState::Dragging);

        assert!(controller.pointer_move(&mut host, Point::new(210, 170)));
        assert_eq!(host.bounds, Rect::new(110, 95, 200, 150));

        assert!(controller.pointer_move(&mut host, Point::new(215, 180)));
        assert_eq!(host.bounds, Rect::new(115, 105, 200, 150));

        assert!(controller.pointer_up(&mut host));
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_release_clears_state() {
        let mut host = host();
        let mut controller = controller();

        controller.pointer_down(&mut host, Point::new(300, 250), PointerButton::Left);
        assert!(controller.pointer_up(&mut host));
        assert!(!controller.pointer().pressed);
        assert_eq!(controller.mode(), OperationMode::None);
        assert!(!controller.pointer_up(&mut host));
    }

    #[test]
    fn test_idle_move_sets_cursor_hint() {
        let mut host = host();
        let mut controller = controller();

        assert!(!controller.pointer_move(&mut host, Point::new(300, 175)));
        assert_eq!(host.cursor, Some(CursorShape::ResizeHorizontal));

        controller.pointer_move(&mut host, Point::new(200, 175));
        assert_eq!(host.cursor, Some(CursorShape::Arrow));
        assert_eq!(host.set_bounds_calls, 0);
    }

    #[test]
    fn test_no_cursor_hint_when_resize_disabled() {
        let mut host = host();
        let mut controller =
            ManipulationController::new(ManipulationConfig::new().with_drag_enabled(true));

        controller.pointer_move(&mut host, Point::new(300, 175));
        assert_eq!(host.cursor, None);
    }

    #[test]
    fn test_set_resizable_toggles_tracking() {
        let mut host = host();
        let mut controller = ManipulationController::default();

        controller.set_resizable(&mut host, true);
        assert!(host.tracking);
        assert!(controller.config().is_resize_enabled());

        controller.set_resizable(&mut host, false);
        assert!(!host.tracking);
        assert_eq!(host.cursor, Some(CursorShape::Arrow));

        controller.set_draggable(true);
        assert!(controller.config().is_drag_enabled());
    }

    #[test]
    fn test_cancel_acts_as_release() {
        let mut host = host();
        let mut controller = controller();

        controller.pointer_down(&mut host, Point::new(200, 175), PointerButton::Left);
        assert!(controller.cancel(&mut host));
        assert_eq!(controller.state(), ControllerState::Idle);

        // Further motion does not move the window.
        assert!(!controller.pointer_move(&mut host, Point::new(260, 200)));
        assert_eq!(host.bounds, Rect::new(100, 100, 200, 150));
    }
}
