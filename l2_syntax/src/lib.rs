//! L2 is the intermediate language produced by letrec elimination.
//! It has every construct L3 has except `letrec`: recursion can only
//! be expressed through explicit memory cells, using [`Allocate`],
//! [`Load`], [`Store`] and [`Begin`].
//!
//! [`Allocate`]: Term::Allocate
//! [`Load`]: Term::Load
//! [`Store`]: Term::Store
//! [`Begin`]: Term::Begin

#![warn(unused_imports)]
#![warn(unused_must_use)]

pub mod display;
mod operator;

use std::fmt;

use display::{Bindings, Parameters, Spaced};
pub use operator::{BranchOperator, OperatorError, PrimitiveOperator};

/// The name of a variable.
pub type Identifier = String;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Term {
    Reference(Identifier),
    Immediate(i64),

    /// A function literal.
    Abstract {
        parameters: Vec<Identifier>,
        body: Box<Term>,
    },

    Apply {
        target: Box<Term>,
        arguments: Vec<Term>,
    },

    /// Non-recursive binding. Each value is evaluated
    /// in the enclosing scope.
    Let {
        bindings: Vec<(Identifier, Term)>,
        body: Box<Term>,
    },

    Primitive {
        operator: PrimitiveOperator,
        left: Box<Term>,
        right: Box<Term>,
    },

    /// `if (left operator right) consequent else otherwise`.
    Branch {
        operator: BranchOperator,
        left: Box<Term>,
        right: Box<Term>,
        consequent: Box<Term>,
        otherwise: Box<Term>,
    },

    /// Allocates a block of this many cells.
    Allocate(usize),

    Load {
        base: Box<Term>,
        index: usize,
    },

    Store {
        base: Box<Term>,
        index: usize,
        value: Box<Term>,
    },

    /// Evaluates `effects` in order, discarding their results,
    /// then evaluates to `value`.
    Begin {
        effects: Vec<Term>,
        value: Box<Term>,
    },
}

impl Term {
    pub fn reference(name: impl Into<Identifier>) -> Self {
        Term::Reference(name.into())
    }

    pub const fn immediate(value: i64) -> Self {
        Term::Immediate(value)
    }

    pub fn abstract_<N: Into<Identifier>>(
        parameters: impl IntoIterator<Item = N>,
        body: Term,
    ) -> Self {
        Term::Abstract {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body: Box::new(body),
        }
    }

    pub fn apply(target: Term, arguments: impl IntoIterator<Item = Term>) -> Self {
        Term::Apply {
            target: Box::new(target),
            arguments: arguments.into_iter().collect(),
        }
    }

    pub fn let_<N: Into<Identifier>>(
        bindings: impl IntoIterator<Item = (N, Term)>,
        body: Term,
    ) -> Self {
        Term::Let {
            bindings: bindings
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
            body: Box::new(body),
        }
    }

    pub fn primitive(operator: PrimitiveOperator, left: Term, right: Term) -> Self {
        Term::Primitive {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn branch(
        operator: BranchOperator,
        left: Term,
        right: Term,
        consequent: Term,
        otherwise: Term,
    ) -> Self {
        Term::Branch {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            consequent: Box::new(consequent),
            otherwise: Box::new(otherwise),
        }
    }

    pub const fn allocate(count: usize) -> Self {
        Term::Allocate(count)
    }

    pub fn load(base: Term, index: usize) -> Self {
        Term::Load {
            base: Box::new(base),
            index,
        }
    }

    pub fn store(base: Term, index: usize, value: Term) -> Self {
        Term::Store {
            base: Box::new(base),
            index,
            value: Box::new(value),
        }
    }

    pub fn begin(effects: impl IntoIterator<Item = Term>, value: Term) -> Self {
        Term::Begin {
            effects: effects.into_iter().collect(),
            value: Box::new(value),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Reference(name) => write!(f, "{}", name),
            Term::Immediate(value) => write!(f, "{}", value),

            Term::Abstract { parameters, body } => {
                write!(f, "(lambda {} {})", Parameters(parameters), body)
            },

            Term::Apply { target, arguments } => {
                write!(f, "(apply {}{})", target, Spaced(arguments))
            },

            Term::Let { bindings, body } => write!(f, "(let {} {})", Bindings(bindings), body),

            Term::Primitive {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator, left, right),

            Term::Branch {
                operator,
                left,
                right,
                consequent,
                otherwise,
            } => write!(
                f,
                "(if ({} {} {}) {} {})",
                operator, left, right, consequent, otherwise
            ),

            Term::Allocate(count) => write!(f, "(allocate {})", count),
            Term::Load { base, index } => write!(f, "(load {} {})", base, index),

            Term::Store { base, index, value } => {
                write!(f, "(store {} {} {})", base, index, value)
            },

            Term::Begin { effects, value } => write!(f, "(begin{} {})", Spaced(effects), value),
        }
    }
}

/// The top-level entry point of an L2 program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program {
    pub parameters: Vec<Identifier>,
    pub body: Term,
}

impl Program {
    pub fn new<N: Into<Identifier>>(parameters: impl IntoIterator<Item = N>, body: Term) -> Self {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(l2 {} {})", Parameters(&self.parameters), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_leaves() {
        assert_eq!(Term::reference("x").to_string(), "x");
        assert_eq!(Term::immediate(-3).to_string(), "-3");
        assert_eq!(Term::allocate(4).to_string(), "(allocate 4)");
    }

    #[test]
    fn display_boxed_recursion() {
        // What a one-binding letrec looks like after elimination
        let term = Term::let_(
            vec![("f", Term::allocate(1))],
            Term::begin(
                vec![Term::store(
                    Term::reference("f"),
                    0,
                    Term::abstract_(
                        vec!["n"],
                        Term::apply(
                            Term::load(Term::reference("f"), 0),
                            vec![Term::reference("n")],
                        ),
                    ),
                )],
                Term::load(Term::reference("f"), 0),
            ),
        );

        assert_eq!(
            term.to_string(),
            "(let ((f (allocate 1))) (begin (store f 0 (lambda (n) (apply (load f 0) n))) (load f 0)))"
        );
    }

    #[test]
    fn display_operators() {
        let term = Term::branch(
            BranchOperator::Less,
            Term::reference("a"),
            Term::immediate(0),
            Term::primitive(
                PrimitiveOperator::Multiply,
                Term::reference("a"),
                Term::immediate(-1),
            ),
            Term::reference("a"),
        );

        assert_eq!(term.to_string(), "(if (< a 0) (* a -1) a)");
    }

    #[test]
    fn display_empty_sequences() {
        let term = Term::begin(Vec::new(), Term::apply(Term::reference("f"), Vec::new()));
        assert_eq!(term.to_string(), "(begin (apply f))");

        let program = Program::new(Vec::<Identifier>::new(), Term::immediate(0));
        assert_eq!(program.to_string(), "(l2 () 0)");
    }

    #[test]
    fn program_parameters() {
        let program = Program::new(vec!["p", "q"], Term::reference("q"));

        assert_eq!(program.parameters, vec!["p".to_owned(), "q".to_owned()]);
        assert_eq!(program.to_string(), "(l2 (p q) q)");
    }
}
