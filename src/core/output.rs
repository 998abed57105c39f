//! Per-state signal assignments.

use super::cases::{Cases, CASE_SEPARATOR};
use super::signal::Signal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// The signals a state drives, each with one value or one value per case.
///
/// Nothing is validated on construction. Cross-signal length agreement is
/// checked when the machine is compiled, so an output can be built and
/// rendered on its own.
///
/// # Example
///
/// ```rust
/// use lucid_fsm::core::StateOutput;
///
/// let output = StateOutput::new()
///     .we("1")
///     .rb(["regfile_addr.small", "regfile_addr.med", "regfile_addr.large"])
///     .label_for(lucid_fsm::core::Signal::ReadB, "0x09-0x0B");
///
/// assert_eq!(output.to_string(), "we = 1;\nrb = 0x09-0x0B");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateOutput {
    #[serde(default, rename = "signals")]
    values: BTreeMap<Signal, Cases>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    labels: BTreeMap<Signal, String>,
}

impl StateOutput {
    /// An output that drives no signals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive `signal` with a single value or a list of per-case values.
    pub fn set(mut self, signal: Signal, value: impl Into<Cases>) -> Self {
        self.values.insert(signal, value.into());
        self
    }

    /// Override the diagram text for `signal`.
    pub fn label_for(mut self, signal: Signal, label: impl Into<String>) -> Self {
        self.labels.insert(signal, label.into());
        self
    }

    pub fn get(&self, signal: Signal) -> Option<&Cases> {
        self.values.get(&signal)
    }

    pub fn label(&self, signal: Signal) -> Option<&str> {
        self.labels.get(&signal).map(String::as_str)
    }

    /// Driven signals in canonical order.
    pub fn present(&self) -> impl Iterator<Item = (Signal, &Cases)> {
        self.values.iter().map(|(signal, cases)| (*signal, cases))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Diagram text for one driven signal: the override label if one was
    /// given, otherwise the cases joined by ` | `.
    pub fn display_value(&self, signal: Signal) -> Option<Cow<'_, str>> {
        let cases = self.values.get(&signal)?;
        Some(match self.labels.get(&signal) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(cases.as_slice().join(CASE_SEPARATOR)),
        })
    }
}

macro_rules! signal_setters {
    ($($method:ident => $signal:ident),* $(,)?) => {
        impl StateOutput {
            $(
                #[doc = concat!("Drive `", stringify!($method), "`.")]
                pub fn $method(self, value: impl Into<Cases>) -> Self {
                    self.set(Signal::$signal, value)
                }
            )*
        }
    };
}

signal_setters! {
    we => WriteEnable,
    ra => ReadA,
    rb => ReadB,
    rc => WriteAddr,
    literal => Literal,
    asel => ASel,
    bsel => BSel,
    ra2sel => Ra2Sel,
    wdsel => WdSel,
    alufn => AluFn,
    start => Start,
    finished => Finished,
    state => NextState,
}

impl fmt::Display for StateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .values
            .keys()
            .filter_map(|signal| {
                self.display_value(*signal)
                    .map(|text| format!("{} = {}", signal, text))
            })
            .collect();
        f.write_str(&lines.join(";\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rendering_joins_cases() {
        let output = StateOutput::new().rb(["a", "b", "c"]);
        assert_eq!(output.to_string(), "rb = a | b | c");
    }

    #[test]
    fn override_label_is_rendered_verbatim() {
        let output = StateOutput::new()
            .rb(["a", "b", "c"])
            .label_for(Signal::ReadB, "three reads");
        assert_eq!(output.to_string(), "rb = three reads");
        assert_eq!(output.get(Signal::ReadB).map(Cases::len), Some(3));
    }

    #[test]
    fn label_without_value_is_not_rendered() {
        let output = StateOutput::new()
            .we("1")
            .label_for(Signal::AluFn, "alu_op_code.t_b");
        assert_eq!(output.to_string(), "we = 1");
        assert_eq!(output.label(Signal::AluFn), Some("alu_op_code.t_b"));
        assert!(output.get(Signal::AluFn).is_none());
    }

    #[test]
    fn rendering_follows_canonical_order() {
        let output = StateOutput::new()
            .finished("1")
            .we("1")
            .literal("2")
            .ra("regfile_addr.box_addr");
        assert_eq!(
            output.to_string(),
            "we = 1;\nra = regfile_addr.box_addr;\nliteral = 2;\nfinished = 1"
        );
    }

    #[test]
    fn present_iterates_canonically() {
        let output = StateOutput::new().state("X").start("1").we("0");
        let signals: Vec<Signal> = output.present().map(|(s, _)| s).collect();
        assert_eq!(
            signals,
            vec![Signal::WriteEnable, Signal::Start, Signal::NextState]
        );
    }

    #[test]
    fn later_assignment_replaces_earlier() {
        let output = StateOutput::new().we("0").we("1");
        assert_eq!(output.get(Signal::WriteEnable), Some(&Cases::from("1")));
    }

    #[test]
    fn empty_output_renders_nothing() {
        assert_eq!(StateOutput::new().to_string(), "");
        assert!(StateOutput::new().is_empty());
    }
}
