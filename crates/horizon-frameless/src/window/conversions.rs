//! Conversions between winit types and the core manipulation types.

use horizon_frameless_core::{PointerButton, ResizeZone};
use winit::event::MouseButton;
use winit::window::ResizeDirection;

/// Map a resize zone to winit's compass direction.
pub fn resize_direction(zone: ResizeZone) -> ResizeDirection {
    match zone {
        ResizeZone::TopLeft => ResizeDirection::NorthWest,
        ResizeZone::Top => ResizeDirection::North,
        ResizeZone::TopRight => ResizeDirection::NorthEast,
        ResizeZone::Right => ResizeDirection::East,
        ResizeZone::BottomRight => ResizeDirection::SouthEast,
        ResizeZone::Bottom => ResizeDirection::South,
        ResizeZone::BottomLeft => ResizeDirection::SouthWest,
        ResizeZone::Left => ResizeDirection::West,
    }
}

/// Map winit's compass direction to a resize zone.
pub fn resize_zone(direction: ResizeDirection) -> ResizeZone {
    match direction {
        ResizeDirection::NorthWest => ResizeZone::TopLeft,
        ResizeDirection::North => ResizeZone::Top,
        ResizeDirection::NorthEast => ResizeZone::TopRight,
        ResizeDirection::East => ResizeZone::Right,
        ResizeDirection::SouthEast => ResizeZone::BottomRight,
        ResizeDirection::South => ResizeZone::Bottom,
        ResizeDirection::SouthWest => ResizeZone::BottomLeft,
        ResizeDirection::West => ResizeZone::Left,
    }
}

/// Map a winit mouse button to a pointer button.
///
/// The back and forward buttons have no dedicated variant and are reported
/// with their conventional indices 3 and 4.
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(index) => PointerButton::Other(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_direction_mapping() {
        assert_eq!(resize_direction(ResizeZone::TopLeft), ResizeDirection::NorthWest);
        assert_eq!(resize_direction(ResizeZone::BottomRight), ResizeDirection::SouthEast);
        assert_eq!(resize_direction(ResizeZone::Left), ResizeDirection::West);
        assert_eq!(resize_direction(ResizeZone::Bottom), ResizeDirection::South);

        for zone in ResizeZone::ALL {
            assert_eq!(resize_zone(resize_direction(zone)), zone);
        }
    }

    #[test]
    fn test_pointer_button_mapping() {
        assert_eq!(pointer_button(MouseButton::Left), PointerButton::Left);
        assert_eq!(pointer_button(MouseButton::Right), PointerButton::Right);
        assert_eq!(pointer_button(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(pointer_button(MouseButton::Back), PointerButton::Other(3));
        assert_eq!(pointer_button(MouseButton::Other(9)), PointerButton::Other(9));
    }
}
