//! Lucid statement emission for broadcast rows.

use super::broadcast::Row;
use super::config::EmitterConfig;
use crate::core::{Signal, TransitionRule};

/// Writes Lucid `case` bodies, one block per state.
pub struct LucidEmitter<'c> {
    config: &'c EmitterConfig,
}

impl<'c> LucidEmitter<'c> {
    pub fn new(config: &'c EmitterConfig) -> Self {
        Self { config }
    }

    /// Append the block for one state to `lines`.
    ///
    /// `rows` must come from [`super::broadcast::expand`] for the same
    /// state and rule.
    pub fn emit_state(
        &self,
        state: &str,
        rule: Option<&TransitionRule>,
        rows: &[Row<'_>],
        lines: &mut Vec<String>,
    ) {
        let indent = &self.config.indent;
        let register = &self.config.state_register;

        lines.push(format!("{}.{}:", register, state));

        if let Some(first) = rows.first() {
            let reads_rb = rows
                .iter()
                .any(|row| row.condition.contains(self.config.read_marker.as_str()));
            if reads_rb {
                if let Some(value) = first.value(Signal::ReadB) {
                    lines.push(self.assignment(indent, Signal::ReadB, value));
                }
            }
            if let Some(value) = first.value(Signal::Finished) {
                lines.push(self.assignment(indent, Signal::Finished, value));
            }
        }

        let otherwise = rule.and_then(TransitionRule::otherwise_target);

        for row in rows {
            if row.is_unconditional() {
                self.body(indent, row, row.target, lines);
                continue;
            }

            let inner = format!("{}{}", indent, indent);
            lines.push(format!("{}if({}) {{", indent, row.condition));
            self.body(&inner, row, row.target, lines);

            match otherwise {
                Some(target) => {
                    lines.push(format!("{}}} else {{", indent));
                    self.body(&inner, row, Some(target), lines);
                    lines.push(format!("{}}}", indent));
                }
                None => lines.push(format!("{}}}", indent)),
            }
        }
    }

    fn body(&self, prefix: &str, row: &Row<'_>, target: Option<&str>, lines: &mut Vec<String>) {
        for (signal, value) in &row.assignments {
            lines.push(self.assignment(prefix, *signal, value));
        }
        if let Some(target) = target {
            lines.push(format!(
                "{prefix}{reg}.d = {reg}.{target};",
                prefix = prefix,
                reg = self.config.state_register,
                target = target
            ));
        }
    }

    fn assignment(&self, prefix: &str, signal: Signal, value: &str) -> String {
        format!("{}{} = {};", prefix, signal, value)
    }
}
