//! Options for [`lower_to_l2`](crate::lower_to_l2). These control how
//! the passes are run and reported, not what they produce.

use std::convert::TryFrom;
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PipelineOptionsError {
    #[error("unknown pipeline option `{0}`")]
    UnknownOption(String),
}

/// Controls how the front end runs. The [`Default`] implementation
/// runs every pass and logs nothing.
// nb. bool::default returns false
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PipelineOptions {
    skip_check: bool,
    verbose: bool,
    trace: bool,
}

impl PipelineOptions {
    pub const fn new(skip_check: bool, verbose: bool, trace: bool) -> Self {
        Self {
            skip_check,
            verbose,
            trace,
        }
    }

    /// Skip scope checking, for trees that a previous pass already checked.
    pub const fn skip_check(&self) -> bool {
        self.skip_check
    }

    /// Log the start and end of each pass.
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Log the program before and after lowering.
    pub const fn trace(&self) -> bool {
        self.trace
    }
}

/// Goes from a list of option names to a `PipelineOptions`.
/// This is useful for drivers that take options on the command line.
impl TryFrom<Vec<String>> for PipelineOptions {
    type Error = PipelineOptionsError;

    fn try_from(options: Vec<String>) -> Result<Self, Self::Error> {
        let mut res = PipelineOptions::default();

        for option in options {
            match option.as_str() {
                "skip-check" => res.skip_check = true,
                "verbose" => res.verbose = true,
                "trace" => res.trace = true,
                _ => return Err(PipelineOptionsError::UnknownOption(option)),
            }
        }

        Ok(res)
    }
}
