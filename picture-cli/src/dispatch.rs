//! Maps a flat argument list onto a picture operation.
//!
//! `args[0]` names the operation. A name that matches none of the known operations
//! is not an error: the list is read as `<input> <output>` for `blur`. Extra
//! trailing arguments are ignored.

use picture::{PictureResult, processor};
use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("No operation given")]
    Empty,
    #[error("`{operation}` expects an argument at position {index}")]
    MissingArgument {
        operation: &'static str,
        index: usize,
    },
    #[error("Invalid angle `{value}`: {source}")]
    Parse {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Invert,
    Grayscale,
    Rotate,
    Flip,
    Blend,
    Blur,
}

impl Operation {
    /// Exact, case-sensitive match. `blur` itself is deliberately absent: it is
    /// only reached as the fallback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "invert" => Some(Self::Invert),
            "grayscale" => Some(Self::Grayscale),
            "rotate" => Some(Self::Rotate),
            "flip" => Some(Self::Flip),
            "blend" => Some(Self::Blend),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Invert => "invert",
            Self::Grayscale => "grayscale",
            Self::Rotate => "rotate",
            Self::Flip => "flip",
            Self::Blend => "blend",
            Self::Blur => "blur",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Invert {
        input: String,
        output: String,
    },
    Grayscale {
        input: String,
        output: String,
    },
    Rotate {
        degrees: i32,
        input: String,
        output: String,
    },
    Flip {
        axis: char,
        input: String,
        output: String,
    },
    Blend {
        inputs: Vec<String>,
        output: String,
    },
    Blur {
        input: String,
        output: String,
    },
}

impl Command {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, DispatchError> {
        let first = args.first().ok_or(DispatchError::Empty)?.as_ref();

        Self::parse_as(Operation::from_name(first).unwrap_or(Operation::Blur), args)
    }

    fn parse_as<S: AsRef<str>>(
        operation: Operation,
        args: &[S],
    ) -> Result<Self, DispatchError> {
        let command = match operation {
            Operation::Invert => Self::Invert {
                input: arg(args, operation, 1)?,
                output: arg(args, operation, 2)?,
            },
            Operation::Grayscale => Self::Grayscale {
                input: arg(args, operation, 1)?,
                output: arg(args, operation, 2)?,
            },
            Operation::Rotate => {
                let value = arg(args, operation, 1)?;
                let degrees = value
                    .parse::<i32>()
                    .map_err(|source| DispatchError::Parse { value, source })?;

                Self::Rotate {
                    degrees,
                    input: arg(args, operation, 2)?,
                    output: arg(args, operation, 3)?,
                }
            }
            Operation::Flip => Self::Flip {
                axis: arg(args, operation, 1)?.chars().next().ok_or(
                    DispatchError::MissingArgument {
                        operation: operation.name(),
                        index: 1,
                    },
                )?,
                input: arg(args, operation, 2)?,
                output: arg(args, operation, 3)?,
            },
            Operation::Blend => {
                let (output, inputs) =
                    args[1..].split_last().ok_or(DispatchError::MissingArgument {
                        operation: operation.name(),
                        index: 1,
                    })?;

                Self::Blend {
                    inputs: inputs.iter().map(|s| s.as_ref().to_string()).collect(),
                    output: output.as_ref().to_string(),
                }
            }
            Operation::Blur => Self::Blur {
                input: arg(args, operation, 0)?,
                output: arg(args, operation, 1)?,
            },
        };

        Ok(command)
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Invert { .. } => Operation::Invert,
            Self::Grayscale { .. } => Operation::Grayscale,
            Self::Rotate { .. } => Operation::Rotate,
            Self::Flip { .. } => Operation::Flip,
            Self::Blend { .. } => Operation::Blend,
            Self::Blur { .. } => Operation::Blur,
        }
    }

    pub fn name(&self) -> &'static str {
        self.operation().name()
    }

    pub fn run(&self) -> PictureResult<()> {
        match self {
            Self::Invert { input, output } => processor::invert(input, output),
            Self::Grayscale { input, output } => processor::grayscale(input, output),
            Self::Rotate {
                degrees,
                input,
                output,
            } => processor::rotate(*degrees, input, output),
            Self::Flip {
                axis,
                input,
                output,
            } => processor::flip(*axis, input, output),
            Self::Blend { inputs, output } => processor::blend(inputs.as_slice(), output),
            Self::Blur { input, output } => processor::blur(input, output),
        }
    }
}

fn arg<S: AsRef<str>>(
    args: &[S],
    operation: Operation,
    index: usize,
) -> Result<String, DispatchError> {
    args.get(index)
        .map(|s| s.as_ref().to_string())
        .ok_or(DispatchError::MissingArgument {
            operation: operation.name(),
            index,
        })
}
