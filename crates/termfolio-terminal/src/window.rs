//! Draggable window geometry.
//!
//! Coordinates are signed: a window may be dragged partly or wholly outside
//! the viewport.

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window position, size, and drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    /// Top-left corner.
    pub position: Point,
    pub width: u16,
    pub height: u16,
    dragging: bool,
    /// Pointer position relative to the top-left corner at drag start.
    offset: Point,
}

impl WindowState {
    /// A window at `position`.
    pub fn new(position: Point, width: u16, height: u16) -> Self {
        Self {
            position,
            width,
            height,
            dragging: false,
            offset: Point::default(),
        }
    }

    /// A window centered in a `viewport_w` x `viewport_h` viewport. The
    /// corner goes negative when the window is larger than the viewport.
    pub fn centered(viewport_w: u16, viewport_h: u16, width: u16, height: u16) -> Self {
        let mut window = Self::new(Point::default(), width, height);
        window.recenter(viewport_w, viewport_h);
        window
    }

    /// Move back to the center of the viewport (used on resize).
    pub fn recenter(&mut self, viewport_w: u16, viewport_h: u16) {
        self.position = Point::new(
            (i32::from(viewport_w) - i32::from(self.width)) / 2,
            (i32::from(viewport_h) - i32::from(self.height)) / 2,
        );
    }

    /// Whether `p` lies on the title bar (the window's first row).
    pub fn title_bar_contains(&self, p: Point) -> bool {
        p.y == self.position.y
            && p.x >= self.position.x
            && p.x < self.position.x + i32::from(self.width)
    }

    /// Begin dragging: remember where the pointer grabbed the window.
    pub fn start_drag(&mut self, pointer: Point) {
        self.dragging = true;
        self.offset = Point::new(pointer.x - self.position.x, pointer.y - self.position.y);
    }

    /// Follow the pointer while dragging. Returns whether the window moved.
    pub fn drag(&mut self, pointer: Point) -> bool {
        if !self.dragging {
            return false;
        }
        let next = Point::new(pointer.x - self.offset.x, pointer.y - self.offset.y);
        let moved = next != self.position;
        self.position = next;
        moved
    }

    /// End dragging.
    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
