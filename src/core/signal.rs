//! The closed set of control signals a state can drive.
//!
//! Declaration order is the canonical order: it decides which vector
//! attribute fixes a state's case count, and the order in which assignment
//! statements are emitted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Control signal driven by a state.
///
/// `Ord` follows declaration order, so any ordered collection keyed by
/// `Signal` iterates canonically.
///
/// # Example
///
/// ```rust
/// use lucid_fsm::core::Signal;
///
/// assert_eq!(Signal::WriteEnable.as_str(), "we");
/// assert_eq!("ra2sel".parse::<Signal>().unwrap(), Signal::Ra2Sel);
/// assert!(Signal::WriteEnable < Signal::NextState);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Signal {
    /// `we`: register file write enable
    WriteEnable,
    /// `ra`: first read address
    ReadA,
    /// `rb`: second read address
    ReadB,
    /// `rc`: write address
    WriteAddr,
    /// `literal`: immediate value
    Literal,
    /// `asel`: operand A select
    ASel,
    /// `bsel`: operand B select
    BSel,
    /// `ra2sel`: second read address select
    Ra2Sel,
    /// `wdsel`: write data select
    WdSel,
    /// `alufn`: ALU function select
    AluFn,
    /// `start`
    Start,
    /// `finished`
    Finished,
    /// `state`: next-state override
    NextState,
}

impl Signal {
    /// Every signal, in canonical order.
    pub const ALL: [Signal; 13] = [
        Signal::WriteEnable,
        Signal::ReadA,
        Signal::ReadB,
        Signal::WriteAddr,
        Signal::Literal,
        Signal::ASel,
        Signal::BSel,
        Signal::Ra2Sel,
        Signal::WdSel,
        Signal::AluFn,
        Signal::Start,
        Signal::Finished,
        Signal::NextState,
    ];

    /// Identifier used for this signal in emitted code and descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WriteEnable => "we",
            Self::ReadA => "ra",
            Self::ReadB => "rb",
            Self::WriteAddr => "rc",
            Self::Literal => "literal",
            Self::ASel => "asel",
            Self::BSel => "bsel",
            Self::Ra2Sel => "ra2sel",
            Self::WdSel => "wdsel",
            Self::AluFn => "alufn",
            Self::Start => "start",
            Self::Finished => "finished",
            Self::NextState => "state",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name outside the signal set.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown signal '{0}'")]
pub struct UnknownSignal(pub String);

impl FromStr for Signal {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signal::ALL
            .into_iter()
            .find(|signal| signal.as_str() == s)
            .ok_or_else(|| UnknownSignal(s.to_string()))
    }
}

impl TryFrom<String> for Signal {
    type Error = UnknownSignal;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Signal> for String {
    fn from(signal: Signal) -> Self {
        signal.as_str().to_string()
    }
}
