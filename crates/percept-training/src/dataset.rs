use crate::error::{TrainingError, TrainingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// A bipolar value: `+1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Bipolar {
    #[default]
    Positive,
    Negative,
}

/// Sign of the constant bias input `X0`, fixed for a whole training run.
pub type BiasSign = Bipolar;

impl Bipolar {
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.value())
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl From<Bipolar> for i8 {
    fn from(value: Bipolar) -> Self {
        value.value()
    }
}

impl TryFrom<i8> for Bipolar {
    type Error = TrainingError;

    fn try_from(value: i8) -> TrainingResult<Self> {
        match value {
            1 => Ok(Self::Positive),
            -1 => Ok(Self::Negative),
            other => Err(TrainingError::Parse { kind: "bipolar value", input: other.to_string() }),
        }
    }
}

impl FromStr for Bipolar {
    type Err = TrainingError;

    fn from_str(s: &str) -> TrainingResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "+1" | "pos" | "positive" => Ok(Self::Positive),
            "-1" | "neg" | "negative" => Ok(Self::Negative),
            _ => Err(TrainingError::Parse { kind: "bipolar value", input: s.to_string() }),
        }
    }
}

/// Trace form: `1` / `-1`.
impl fmt::Display for Bipolar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

/// The two-input Boolean functions that can be learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFunction {
    And,
    Or,
}

impl TargetFunction {
    pub const ALL: [Self; 2] = [Self::And, Self::Or];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Desired outputs for the input pairs `(+1,+1), (+1,-1), (-1,+1), (-1,-1)`.
    #[must_use]
    pub const fn desired_outputs(self) -> [Bipolar; 4] {
        use Bipolar::{Negative as N, Positive as P};
        match self {
            Self::And => [P, N, N, N],
            Self::Or => [P, P, P, N],
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::And => Self::Or,
            Self::Or => Self::And,
        }
    }

    /// Window-style heading, e.g. `Perceptron AND (±1)`.
    #[must_use]
    pub fn heading(self) -> String {
        format!("Perceptron {} (±1)", self.name())
    }

    #[must_use]
    pub const fn subtitle() -> &'static str {
        "Training with reset by error — Bipolar activation"
    }

    #[must_use]
    pub fn table_title(self) -> String {
        format!("Activation table ({} bipolar)", self.name())
    }
}

impl fmt::Display for TargetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetFunction {
    type Err = TrainingError;

    fn from_str(s: &str) -> TrainingResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            _ => Err(TrainingError::Parse { kind: "target function", input: s.to_string() }),
        }
    }
}

/// One row of a truth table: `(X0, X1, X2, Yd)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub bias: Bipolar,
    pub x1: Bipolar,
    pub x2: Bipolar,
    pub desired: Bipolar,
}

impl TrainingExample {
    #[must_use]
    pub const fn new(bias: Bipolar, x1: Bipolar, x2: Bipolar, desired: Bipolar) -> Self {
        Self { bias, x1, x2, desired }
    }

    /// Input vector in `(bias, x1, x2)` order.
    #[must_use]
    pub fn inputs(&self) -> [f64; 3] {
        [self.bias.as_f64(), self.x1.as_f64(), self.x2.as_f64()]
    }
}

impl fmt::Display for TrainingExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.bias, self.x1, self.x2, self.desired)
    }
}

/// Fixed 4-row training table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    rows: [TrainingExample; 4],
}

impl TruthTable {
    pub const INPUT_PAIRS: [(Bipolar, Bipolar); 4] = [
        (Bipolar::Positive, Bipolar::Positive),
        (Bipolar::Positive, Bipolar::Negative),
        (Bipolar::Negative, Bipolar::Positive),
        (Bipolar::Negative, Bipolar::Negative),
    ];

    /// Truth table of `function` with `bias` as every row's `X0`.
    #[must_use]
    pub fn build(function: TargetFunction, bias: BiasSign) -> Self {
        let desired = function.desired_outputs();
        let rows = std::array::from_fn(|i| {
            let (x1, x2) = Self::INPUT_PAIRS[i];
            TrainingExample::new(bias, x1, x2, desired[i])
        });
        Self { rows }
    }

    /// Arbitrary table, e.g. a non-separable one.
    #[must_use]
    pub const fn from_rows(rows: [TrainingExample; 4]) -> Self {
        Self { rows }
    }

    pub(crate) const fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrainingExample> {
        self.rows.iter()
    }

    /// Header, rule and one right-aligned line per row, each newline-terminated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from(" X0  X1  X2 | Yd\n------------|---\n");
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:>3} {:>3} {:>3} | {:>2}",
                row.bias.value(),
                row.x1.value(),
                row.x2.value(),
                row.desired.value()
            );
        }
        out
    }
}

impl std::ops::Index<usize> for TruthTable {
    type Output = TrainingExample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desired(table: &TruthTable) -> Vec<i8> {
        table.iter().map(|r| r.desired.value()).collect()
    }

    #[test]
    fn test_default_bias_is_positive() {
        assert_eq!(Bipolar::default(), Bipolar::Positive);
    }

    #[test]
    fn test_and_table_outputs() {
        let table = TruthTable::build(TargetFunction::And, Bipolar::Positive);
        assert_eq!(desired(&table), vec![1, -1, -1, -1]);
    }

    #[test]
    fn test_or_table_outputs() {
        let table = TruthTable::build(TargetFunction::Or, Bipolar::Negative);
        assert_eq!(desired(&table), vec![1, 1, 1, -1]);
    }

    #[test]
    fn test_bias_is_first_element_of_every_row() {
        for function in TargetFunction::ALL {
            for bias in [Bipolar::Positive, Bipolar::Negative] {
                let table = TruthTable::build(function, bias);
                assert!(table.iter().all(|r| r.bias == bias));
            }
        }
    }

    #[test]
    fn test_input_pair_order() {
        let table = TruthTable::build(TargetFunction::And, Bipolar::Positive);
        let pairs: Vec<(i8, i8)> = table.iter().map(|r| (r.x1.value(), r.x2.value())).collect();
        assert_eq!(pairs, vec![(1, 1), (1, -1), (-1, 1), (-1, -1)]);
    }

    #[test]
    fn test_render_layout() {
        let table = TruthTable::build(TargetFunction::Or, Bipolar::Negative);
        let expected = " X0  X1  X2 | Yd\n\
                        ------------|---\n \
                        -1   1   1 |  1\n \
                        -1   1  -1 |  1\n \
                        -1  -1   1 |  1\n \
                        -1  -1  -1 | -1\n";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_parse_function_and_bias() {
        assert_eq!("AND".parse::<TargetFunction>().unwrap(), TargetFunction::And);
        assert_eq!(" or ".parse::<TargetFunction>().unwrap(), TargetFunction::Or);
        assert!("xor".parse::<TargetFunction>().is_err());

        assert_eq!("+1".parse::<Bipolar>().unwrap(), Bipolar::Positive);
        assert_eq!("-1".parse::<Bipolar>().unwrap(), Bipolar::Negative);
        assert_eq!("neg".parse::<Bipolar>().unwrap(), Bipolar::Negative);
        assert!("0".parse::<Bipolar>().is_err());
        assert!(Bipolar::try_from(2).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TargetFunction::And.heading(), "Perceptron AND (±1)");
        assert_eq!(TargetFunction::Or.table_title(), "Activation table (OR bipolar)");
    }
}
