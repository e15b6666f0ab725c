//! Message bodies are rendered by the caller's formatting machinery; the logger
//! only needs to know whether that worked.

use std::fmt::{self, Write};

/// Produces the message body of a log line.
///
/// Returning `Err` makes the dispatcher emit a fixed fallback line instead.
pub trait Render {
    /// Appends the rendered body to `out`.
    ///
    /// # Errors
    /// Whatever the underlying formatting reported.
    fn render(&self, out: &mut String) -> fmt::Result;
}

impl Render for str {
    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str(self);
        Ok(())
    }
}

impl Render for String {
    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str(self);
        Ok(())
    }
}

/// The output of `format_args!`, which is what the logging macros pass.
impl Render for fmt::Arguments<'_> {
    fn render(&self, out: &mut String) -> fmt::Result {
        out.write_fmt(*self)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut String) -> fmt::Result {
        (**self).render(out)
    }
}
