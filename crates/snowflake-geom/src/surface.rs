//! Drawing surface abstraction.

/// A 2D path sink in the style of a canvas context.
///
/// Implementors receive one `begin_path`, a `move_to`, any number of
/// `line_to` calls and a final `close_path` per drawn polyline.
pub trait Surface {
    /// Start a new path, discarding any pending one.
    fn begin_path(&mut self);

    /// Move the pen to `(x, y)` without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Draw a straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Close the current path back to its starting point.
    fn close_path(&mut self);
}

/// A single recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// `begin_path()`.
    BeginPath,
    /// `move_to(x, y)`.
    MoveTo(f64, f64),
    /// `line_to(x, y)`.
    LineTo(f64, f64),
    /// `close_path()`.
    ClosePath,
}

/// Records every call in order.
impl Surface for Vec<DrawCommand> {
    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y);
    }

    fn close_path(&mut self) {
        (**self).close_path();
    }
}
