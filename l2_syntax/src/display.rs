//! Helpers for rendering terms as s-expressions.
//! These are shared with the L3 syntax so both languages
//! print their common constructs identically.

use std::fmt;

use crate::Identifier;

/// Renders a binder list as `(a b c)`.
pub struct Parameters<'a>(pub &'a [Identifier]);

impl fmt::Display for Parameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;

        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            write!(f, "{}", name)?;
        }

        write!(f, ")")
    }
}

/// Renders every item with a leading space, ex. ` a b c`.
pub struct Spaced<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.0 {
            write!(f, " {}", item)?;
        }

        Ok(())
    }
}

/// Renders `let`-style bindings as `((x v) (y w))`.
pub struct Bindings<'a, T>(pub &'a [(Identifier, T)]);

impl<T: fmt::Display> fmt::Display for Bindings<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;

        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            write!(f, "({} {})", name, value)?;
        }

        write!(f, ")")
    }
}
