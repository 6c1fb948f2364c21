//! Text trace of a training run.
//!
//! The trace is line-oriented and meant to be shown verbatim. Its layout is
//! fixed so two runs with identical inputs produce identical bytes; only the
//! wording changes with [`TraceLanguage`].

use crate::dataset::{Bipolar, TrainingExample, TruthTable};
use crate::error::{TrainingError, TrainingResult};
use crate::weights::WeightVector;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TraceLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl TraceLanguage {
    fn vocabulary(self) -> &'static Vocabulary {
        match self {
            Self::English => &ENGLISH,
            Self::Spanish => &SPANISH,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }
}

impl FromStr for TraceLanguage {
    type Err = TrainingError;

    fn from_str(s: &str) -> TrainingResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "es" | "spanish" | "español" => Ok(Self::Spanish),
            _ => Err(TrainingError::Parse { kind: "trace language", input: s.to_string() }),
        }
    }
}

struct Vocabulary {
    title: &'static str,
    mode: &'static str,
    table: &'static str,
    initial_weights: &'static str,
    iteration_start: &'static str,
    iteration_end: &'static str,
    unchanged: &'static str,
    example: &'static str,
    output: &'static str,
    correct: &'static str,
    incorrect: &'static str,
    should_raise: &'static str,
    should_lower: &'static str,
    new_weights: &'static str,
    clean_pass: &'static str,
    cap_reached: &'static str,
    final_banner: &'static str,
    total_iterations: &'static str,
    final_weights: &'static str,
}

static ENGLISH: Vocabulary = Vocabulary {
    title: "PERCEPTRON",
    mode: "Results with reset by error",
    table: "ACTIVATION TABLE",
    initial_weights: "Initial weights",
    iteration_start: "==> Start of iteration No.",
    iteration_end: "==> End of iteration No.",
    unchanged: "(no changes)",
    example: "Example",
    output: "output",
    correct: "  Result: Correct (error=0). Moving on to the next example.",
    incorrect: "  Result: Incorrect (error≠0).",
    should_raise: "output should have been +1 but was -1; weights are increased in the direction of X.",
    should_lower: "output should have been -1 but was +1; weights are decreased in the direction of X.",
    new_weights: "  NEW weights",
    clean_pass: "No errors were detected in the whole pass.",
    cap_reached: "Maximum number of allowed updates reached.",
    final_banner: "==================== FINAL RESULT ====================",
    total_iterations: "Total iterations (updates)",
    final_weights: "Final weights",
};

static SPANISH: Vocabulary = Vocabulary {
    title: "PERCEPTRÓN",
    mode: "Resultados con reinicio por error",
    table: "TABLA DE ACTIVACIÓN",
    initial_weights: "Pesos iniciales",
    iteration_start: "==> Inicio de iteración Nº",
    iteration_end: "==> Fin de iteración Nº",
    unchanged: "(sin cambios)",
    example: "Ejercicio",
    output: "salida",
    correct: "  Resultado: Correcto (error=0). Continúa al siguiente ejercicio.",
    incorrect: "  Resultado: Incorrecto (error≠0).",
    should_raise: "salida debería ser +1 pero fue -1; se aumentan pesos en la dirección de X.",
    should_lower: "salida debería ser -1 pero fue +1; se reducen pesos en la dirección de X.",
    new_weights: "  Pesos NUEVOS",
    clean_pass: "No se detectaron errores en toda la pasada.",
    cap_reached: "Se alcanzó el máximo de actualizaciones permitido.",
    final_banner: "==================== RESULTADO FINAL ====================",
    total_iterations: "Iteraciones (actualizaciones) totales",
    final_weights: "Pesos finales",
};

const CLOSING_RULE: &str = "=========================================================";

/// Append-only trace buffer for one training run.
pub(crate) struct TraceWriter {
    buf: String,
    words: &'static Vocabulary,
}

impl TraceWriter {
    pub(crate) fn new(language: TraceLanguage) -> Self {
        Self { buf: String::new(), words: language.vocabulary() }
    }

    pub(crate) fn header(&mut self, function_name: &str, table: &TruthTable, weights: &WeightVector, alpha: f64) {
        let w = self.words;
        let _ = writeln!(self.buf, "=== {} {} (±1) — {} ===", w.title, function_name, w.mode);
        let _ = write!(self.buf, "\n{}\n", w.table);
        self.buf.push_str(&table.render());
        self.buf.push('\n');
        let _ = writeln!(self.buf, "{}: {}", w.initial_weights, weights);
        let _ = write!(self.buf, "α={}\n\n", format_rate(alpha));
    }

    pub(crate) fn iteration_start(&mut self, iteration: u64) {
        let _ = writeln!(self.buf, "{} {}", self.words.iteration_start, iteration);
    }

    pub(crate) fn decision(&mut self, index: usize, example: &TrainingExample, output: Bipolar, error: i8) {
        let _ = writeln!(
            self.buf,
            "{} {}: (X0,X1,X2,Yd)={} → {}={}, error={}",
            self.words.example,
            index + 1,
            example,
            self.words.output,
            output,
            error
        );
    }

    pub(crate) fn correct(&mut self) {
        let _ = write!(self.buf, "{}\n\n", self.words.correct);
    }

    /// `raised` is true when the output should have been +1 but was -1.
    pub(crate) fn incorrect(&mut self, raised: bool, weights: &WeightVector, iteration: u64) {
        let w = self.words;
        let reason = if raised { w.should_raise } else { w.should_lower };
        let _ = writeln!(self.buf, "{} {}", w.incorrect, reason);
        let _ = writeln!(self.buf, "{}: {}", w.new_weights, weights.signed());
        let _ = write!(self.buf, "{} {}\n\n", w.iteration_end, iteration);
    }

    pub(crate) fn clean_pass(&mut self, iteration: u64) {
        let w = self.words;
        let _ = writeln!(self.buf, "{}", w.clean_pass);
        let _ = writeln!(self.buf, "{} {} {}", w.iteration_end, iteration, w.unchanged);
    }

    pub(crate) fn cap_reached(&mut self) {
        let _ = writeln!(self.buf, "{}", self.words.cap_reached);
    }

    pub(crate) fn finish(mut self, iterations: u64, weights: &WeightVector) -> String {
        let w = self.words;
        let _ = write!(self.buf, "\n{}\n", w.final_banner);
        let _ = writeln!(self.buf, "{}: {}", w.total_iterations, iterations);
        let _ = writeln!(self.buf, "{}: {}", w.final_weights, weights);
        let _ = writeln!(self.buf, "{CLOSING_RULE}");
        self.buf
    }
}

/// Shortest round-trip form of a rate, with `.0` on integral values and a
/// signed two-digit exponent outside `[1e-4, 1e16)`: `0.1`, `1.0`, `1e-05`.
#[must_use]
pub fn format_rate(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{value:e}");
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        return sci;
    }

    if value.fract() == 0.0 { format!("{value:.1}") } else { format!("{value}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.1), "0.1");
        assert_eq!(format_rate(0.5), "0.5");
        assert_eq!(format_rate(1.0), "1.0");
        assert_eq!(format_rate(2.0), "2.0");
        assert_eq!(format_rate(-0.0), "-0.0");
        assert_eq!(format_rate(0.0001), "0.0001");
        assert_eq!(format_rate(1e-5), "1e-05");
        assert_eq!(format_rate(1e16), "1e+16");
        assert_eq!(format_rate(1.5e16), "1.5e+16");
        assert_eq!(format_rate(123_456.789), "123456.789");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("ES".parse::<TraceLanguage>().unwrap(), TraceLanguage::Spanish);
        assert_eq!("english".parse::<TraceLanguage>().unwrap(), TraceLanguage::English);
        assert!("fr".parse::<TraceLanguage>().is_err());
    }

    #[test]
    fn test_header_block() {
        let table = TruthTable::build(crate::TargetFunction::And, Bipolar::Positive);
        let mut writer = TraceWriter::new(TraceLanguage::English);
        writer.header("AND", &table, &WeightVector::zeros(), 0.1);
        let text = writer.finish(1, &WeightVector::zeros());

        assert!(text.starts_with("=== PERCEPTRON AND (±1) — Results with reset by error ===\n\nACTIVATION TABLE\n X0  X1  X2 | Yd\n"));
        assert!(text.contains("Initial weights: w0=0.000000, w1=0.000000, w2=0.000000\nα=0.1\n\n"));
        assert!(text.ends_with(
            "\n==================== FINAL RESULT ====================\n\
             Total iterations (updates): 1\n\
             Final weights: w0=0.000000, w1=0.000000, w2=0.000000\n\
             =========================================================\n"
        ));
    }

    #[test]
    fn test_spanish_wording() {
        let table = TruthTable::build(crate::TargetFunction::Or, Bipolar::Negative);
        let mut writer = TraceWriter::new(TraceLanguage::Spanish);
        writer.header("OR", &table, &WeightVector::zeros(), 0.5);
        writer.iteration_start(1);
        writer.cap_reached();
        let text = writer.finish(1, &WeightVector::zeros());

        assert!(text.starts_with("=== PERCEPTRÓN OR (±1) — Resultados con reinicio por error ===\n\nTABLA DE ACTIVACIÓN\n"));
        assert!(text.contains("==> Inicio de iteración Nº 1\n"));
        assert!(text.contains("Se alcanzó el máximo de actualizaciones permitido.\n"));
        assert!(text.contains("Iteraciones (actualizaciones) totales: 1\n"));
    }
}
