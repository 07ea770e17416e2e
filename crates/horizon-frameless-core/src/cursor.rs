//! Cursor hints for resize zones.
//!
//! While no operation is active and resizing is enabled, the cursor follows
//! the zone under the pointer so the user can see where a drag would resize.

use cursor_icon::CursorIcon;

use crate::zone::ResizeZone;

/// The cursor shapes a frameless window needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    /// The default arrow cursor.
    #[default]
    Arrow,
    /// Diagonal resize cursor (northwest-southeast).
    ResizeNwSe,
    /// Diagonal resize cursor (northeast-southwest).
    ResizeNeSw,
    /// Horizontal resize cursor (east-west).
    ResizeHorizontal,
    /// Vertical resize cursor (north-south).
    ResizeVertical,
}

impl CursorShape {
    /// Convert to the platform-neutral cursor icon.
    pub fn to_cursor_icon(self) -> CursorIcon {
        match self {
            CursorShape::Arrow => CursorIcon::Default,
            CursorShape::ResizeNwSe => CursorIcon::NwseResize,
            CursorShape::ResizeNeSw => CursorIcon::NeswResize,
            CursorShape::ResizeHorizontal => CursorIcon::EwResize,
            CursorShape::ResizeVertical => CursorIcon::NsResize,
        }
    }
}

impl From<CursorShape> for CursorIcon {
    fn from(shape: CursorShape) -> Self {
        shape.to_cursor_icon()
    }
}

/// Map an optional zone to the cursor to display; no zone means the arrow.
pub fn cursor_for(zone: Option<ResizeZone>) -> CursorShape {
    zone.map_or(CursorShape::Arrow, ResizeZone::cursor_shape)
}
