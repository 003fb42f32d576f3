use std::{collections::HashSet, iter::FromIterator};

use crate::syntax::Identifier;

/// An immutable set of names, layered over the
/// context of the enclosing scope.
///
/// Extending a context never changes it: [`extend`] returns a new
/// layer that borrows its parent, so sibling subtrees can each be
/// given their own extension of the same parent.
///
/// [`extend`]: Context::extend
#[derive(Debug, Default)]
pub struct Context<'parent> {
    names: HashSet<Identifier>,
    parent: Option<&'parent Context<'parent>>,
}

impl Context<'static> {
    /// Creates an empty, outermost context.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'parent> Context<'parent> {
    /// Creates a child context containing `names`
    /// in addition to everything in `self`.
    pub fn extend<N: Into<Identifier>>(&self, names: impl IntoIterator<Item = N>) -> Context<'_> {
        Context {
            names: names.into_iter().map(Into::into).collect(),
            parent: Some(self),
        }
    }

    /// Looks up `name` from the innermost layer outwards.
    pub fn contains(&self, name: &str) -> bool {
        let mut layer = Some(self);

        while let Some(current) = layer {
            if current.names.contains(name) {
                return true;
            }

            layer = current.parent;
        }

        false
    }

    /// Returns `true` if no layer has any names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.parent.map_or(true, |parent| parent.is_empty())
    }
}

impl<N: Into<Identifier>> FromIterator<N> for Context<'static> {
    fn from_iter<I: IntoIterator<Item = N>>(names: I) -> Self {
        Context {
            names: names.into_iter().map(Into::into).collect(),
            parent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Context;

    #[test]
    fn empty() {
        let context = Context::new();

        assert!(context.is_empty());
        assert!(!context.contains("x"));
    }

    #[test]
    fn extension_sees_parent() {
        let outer: Context = vec!["x"].into_iter().collect();
        let inner = outer.extend(vec!["y"]);

        assert!(inner.contains("x"));
        assert!(inner.contains("y"));
        assert!(!inner.contains("z"));
        assert!(!inner.is_empty());
    }

    #[test]
    fn extension_leaves_parent_alone() {
        let outer = Context::new();
        let left = outer.extend(vec!["a"]);
        let right = outer.extend(vec!["b"]);

        assert!(left.contains("a"));
        assert!(!left.contains("b"));
        assert!(right.contains("b"));
        assert!(!right.contains("a"));
        assert!(!outer.contains("a"));
        assert!(outer.is_empty());
    }

    #[test]
    fn empty_extension_is_still_empty() {
        let outer = Context::new();
        let inner = outer.extend(Vec::<String>::new());

        assert!(inner.is_empty());
    }
}
