//! The parsed result: an immutable, typed snapshot of one parse.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{ARRAY_SEPARATOR, RANGE_SEPARATOR, Range, floor_to_int};

/// Values collected by a single parse, grouped by parameter type.
///
/// An option name appears in at most one store, the one implied by its
/// declared type. A name missing from every store was either not supplied or
/// was dropped by lenient parsing.
///
/// # Examples
///
/// ```
/// use typed_args_core::{ArgsParser, OptionSchema, ParameterType};
///
/// let schema = OptionSchema::from_options([
///     ("age", ParameterType::Number),
///     ("eff", ParameterType::Range),
/// ])
/// .unwrap();
///
/// let options = ArgsParser::new(&schema)
///     .parse(&["-age", "69.5", "-eff", "21", "40"])
///     .unwrap();
///
/// assert_eq!(options.number("age"), Some(69.5));
/// assert_eq!(options.number_floored("age"), Some(69));
/// assert_eq!(options.range_floored("eff"), Some((21, 40)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedOptions {
    flags: BTreeSet<String>,
    strings: BTreeMap<String, String>,
    numbers: BTreeMap<String, f64>,
    string_arrays: BTreeMap<String, Vec<String>>,
    number_arrays: BTreeMap<String, Vec<f64>>,
    ranges: BTreeMap<String, Range>,
}

impl ParsedOptions {
    /// Returns `true` if the flag was present.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// The value of a string option.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    /// The value of a number option.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.numbers.get(name).copied()
    }

    /// The value of a number option, floored to an integer.
    pub fn number_floored(&self, name: &str) -> Option<i64> {
        self.number(name).map(floor_to_int)
    }

    /// The value of a range option.
    pub fn range(&self, name: &str) -> Option<Range> {
        self.ranges.get(name).copied()
    }

    /// Both ends of a range option, floored to integers.
    pub fn range_floored(&self, name: &str) -> Option<(i64, i64)> {
        self.ranges.get(name).map(Range::floored)
    }

    /// The elements of a string-array option, in input order.
    pub fn string_array(&self, name: &str) -> Option<&[String]> {
        self.string_arrays.get(name).map(Vec::as_slice)
    }

    /// The elements of a number-array option, in input order.
    pub fn number_array(&self, name: &str) -> Option<&[f64]> {
        self.number_arrays.get(name).map(Vec::as_slice)
    }

    /// The elements of a number-array option, each floored into a new vector.
    pub fn number_array_floored(&self, name: &str) -> Option<Vec<i64>> {
        self.number_arrays
            .get(name)
            .map(|values| values.iter().copied().map(floor_to_int).collect())
    }

    /// Number of options present in the result.
    pub fn len(&self) -> usize {
        self.flags.len()
            + self.strings.len()
            + self.numbers.len()
            + self.string_arrays.len()
            + self.number_arrays.len()
            + self.ranges.len()
    }

    /// Returns `true` if nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens every value into text, keyed by option name.
    ///
    /// Categories are visited in a fixed order: flags (empty value), strings,
    /// numbers, string arrays, number arrays, ranges. Array elements are
    /// joined with [`ARRAY_SEPARATOR`] and the two ends of a range with
    /// [`RANGE_SEPARATOR`]. A name already inserted by an earlier category is
    /// not overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_args_core::{ARRAY_SEPARATOR, ArgsParser, OptionSchema, ParameterType};
    ///
    /// let schema = OptionSchema::from_options([("arr", ParameterType::StringArray)]).unwrap();
    /// let options = ArgsParser::new(&schema).parse(&["-arr", "a", "b"]).unwrap();
    ///
    /// let text = options.snapshot_as_text();
    /// let elements: Vec<&str> = text["arr"].split(ARRAY_SEPARATOR).collect();
    /// assert_eq!(elements, vec!["a", "b"]);
    /// ```
    pub fn snapshot_as_text(&self) -> BTreeMap<String, String> {
        let mut snapshot = BTreeMap::new();
        let mut insert = |name: &str, value: String| {
            snapshot.entry(name.to_string()).or_insert(value);
        };

        for name in &self.flags {
            insert(name, String::new());
        }
        for (name, value) in &self.strings {
            insert(name, value.clone());
        }
        for (name, value) in &self.numbers {
            insert(name, value.to_string());
        }
        for (name, values) in &self.string_arrays {
            insert(name, join(values.iter().map(String::as_str), ARRAY_SEPARATOR));
        }
        for (name, values) in &self.number_arrays {
            let texts: Vec<String> = values.iter().map(f64::to_string).collect();
            insert(name, join(texts.iter().map(String::as_str), ARRAY_SEPARATOR));
        }
        for (name, range) in &self.ranges {
            insert(name, format!("{}{RANGE_SEPARATOR}{}", range.start, range.end));
        }

        snapshot
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>, separator: char) -> String {
    let mut out = String::new();
    for (i, part) in parts.enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(part);
    }
    out
}

/// Mutable stores filled while a parse is in progress.
///
/// Lives only for the duration of one parse call and is frozen into a
/// [`ParsedOptions`] at the end.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    options: ParsedOptions,
}

impl Accumulator {
    pub(crate) fn flag(&mut self, name: &str) {
        self.options.flags.insert(name.to_string());
    }

    pub(crate) fn string(&mut self, name: &str, value: String) {
        self.options.strings.insert(name.to_string(), value);
    }

    pub(crate) fn number(&mut self, name: &str, value: f64) {
        self.options.numbers.insert(name.to_string(), value);
    }

    pub(crate) fn range(&mut self, name: &str, value: Range) {
        self.options.ranges.insert(name.to_string(), value);
    }

    pub(crate) fn string_array(&mut self, name: &str, values: Vec<String>) {
        self.options.string_arrays.insert(name.to_string(), values);
    }

    pub(crate) fn number_array(&mut self, name: &str, values: Vec<f64>) {
        self.options.number_arrays.insert(name.to_string(), values);
    }

    pub(crate) fn finish(self) -> ParsedOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedOptions {
        let mut acc = Accumulator::default();
        acc.flag("doit");
        acc.string("name", "hhhh".into());
        acc.number("age", 69.0);
        acc.string_array("arr", vec!["okay".into(), "then".into()]);
        acc.number_array("sizes", vec![1.5, -2.0]);
        acc.range("eff", Range::new(21.0, 40.5));
        acc.finish()
    }

    #[test]
    fn test_typed_accessors() {
        let options = sample();

        assert!(options.has_flag("doit"));
        assert!(!options.has_flag("name"));
        assert_eq!(options.string("name"), Some("hhhh"));
        assert_eq!(options.number("age"), Some(69.0));
        assert_eq!(options.range("eff"), Some(Range::new(21.0, 40.5)));
        assert_eq!(options.range_floored("eff"), Some((21, 40)));
        assert_eq!(
            options.string_array("arr"),
            Some(&["okay".to_string(), "then".to_string()][..])
        );
        assert_eq!(options.number_array("sizes"), Some(&[1.5, -2.0][..]));
        assert_eq!(options.number_array_floored("sizes"), Some(vec![1, -2]));
        assert_eq!(options.len(), 6);
    }

    #[test]
    fn test_accessors_are_type_specific() {
        let options = sample();

        assert_eq!(options.string("age"), None);
        assert_eq!(options.number("name"), None);
        assert_eq!(options.range("sizes"), None);
        assert_eq!(options.number_floored("missing"), None);
    }

    #[test]
    fn test_snapshot_as_text() {
        let snapshot = sample().snapshot_as_text();

        assert_eq!(snapshot["doit"], "");
        assert_eq!(snapshot["name"], "hhhh");
        assert_eq!(snapshot["age"], "69");
        assert_eq!(snapshot["arr"], "okay\u{85}then");
        assert_eq!(snapshot["sizes"], "1.5\u{85}-2");
        assert_eq!(snapshot["eff"], "21\u{1d}40.5");
        assert_eq!(snapshot.len(), 6);
    }

    #[test]
    fn test_snapshot_keeps_the_first_category() {
        let mut acc = Accumulator::default();
        acc.flag("clash");
        acc.string("clash", "value".into());
        acc.range("clash", Range::new(1.0, 2.0));

        let snapshot = acc.finish().snapshot_as_text();
        assert_eq!(snapshot["clash"], "");
    }

    #[test]
    fn test_empty_array_snapshot_is_empty_text() {
        let mut acc = Accumulator::default();
        acc.string_array("arr", Vec::new());
        let options = acc.finish();

        assert_eq!(options.string_array("arr"), Some(&[][..]));
        assert_eq!(options.snapshot_as_text()["arr"], "");
    }

    #[test]
    fn test_later_value_replaces_earlier_one() {
        let mut acc = Accumulator::default();
        acc.number("age", 1.0);
        acc.number("age", 2.0);
        assert_eq!(acc.finish().number("age"), Some(2.0));
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["flags"], serde_json::json!(["doit"]));
        assert_eq!(json["ranges"]["eff"]["end"], serde_json::json!(40.5));
    }
}
