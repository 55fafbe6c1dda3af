use std::fmt;

/// Unit of measurement of a performance metric.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    None,
    Seconds,
    Milliseconds,
    Microseconds,
    Percentage,
    Bytes,
    Kilobytes,
    Megabytes,
    Terabytes,
    Counter,
    Other(String),
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unit::None => "",
            Unit::Seconds => "s",
            Unit::Milliseconds => "ms",
            Unit::Microseconds => "us",
            Unit::Percentage => "%",
            Unit::Bytes => "B",
            Unit::Kilobytes => "KB",
            Unit::Megabytes => "MB",
            Unit::Terabytes => "TB",
            Unit::Counter => "c",
            Unit::Other(s) => s.as_str(),
        };
        f.write_str(s)
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        match s {
            "" => Unit::None,
            "s" => Unit::Seconds,
            "ms" => Unit::Milliseconds,
            "us" => Unit::Microseconds,
            "%" => Unit::Percentage,
            "B" => Unit::Bytes,
            "KB" => Unit::Kilobytes,
            "MB" => Unit::Megabytes,
            "TB" => Unit::Terabytes,
            "c" => Unit::Counter,
            other => Unit::Other(other.to_owned()),
        }
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Unit::from(s.as_str())
    }
}

/// A single nagios performance metric: `label=value[UOM];[warn];[crit];[min];[max]`.
///
/// The label is written as given.
///
/// A metric without a value is never printed.
#[derive(Clone, Debug, PartialEq)]
pub struct PerfData {
    pub name: String,
    pub value: Option<f64>,
    pub unit: Unit,
    pub warn: Option<f64>,
    pub crit: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PerfData {
    pub fn new(
        name: &str,
        value: Option<f64>,
        unit: impl Into<Unit>,
        warn: Option<f64>,
        crit: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        PerfData {
            name: name.to_owned(),
            value,
            unit: unit.into(),
            warn,
            crit,
            min,
            max,
        }
    }

    /// Returns the metric formatted for nagios, or `None` if it has no value.
    ///
    /// ```rust
    /// # use sknchk::PerfData;
    /// let metric = PerfData::new("load", Some(42.0), "%", None, Some(90.0), Some(0.0), None);
    /// assert_eq!(metric.to_perf_string().as_deref(), Some("load=42.00%;;90;0;"));
    /// ```
    pub fn to_perf_string(&self) -> Option<String> {
        let value = self.value?;

        Some(format!(
            "{}={:.2}{};{};{};{};{}",
            self.name,
            value,
            self.unit,
            fmt_bound(self.warn),
            fmt_bound(self.crit),
            fmt_bound(self.min),
            fmt_bound(self.max),
        ))
    }
}

/// Serializes the metrics into a single performance data line, skipping metrics without value.
pub fn perf_string(perf_data: &[PerfData]) -> String {
    perf_data
        .iter()
        .filter_map(PerfData::to_perf_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// An absent bound keeps its position as an empty field.
fn fmt_bound(bound: Option<f64>) -> String {
    bound.map(|b| b.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_string_without_bounds() {
        let metric = PerfData::new("name", Some(42.0), "%", None, None, None, None);
        assert_eq!(metric.to_perf_string().as_deref(), Some("name=42.00%;;;;"));
    }

    #[test]
    fn test_perf_string_with_bounds() {
        let metric = PerfData::new(
            "disk",
            Some(12.346),
            Unit::Megabytes,
            Some(80.0),
            Some(90.5),
            Some(0.0),
            Some(100.0),
        );
        assert_eq!(
            metric.to_perf_string().as_deref(),
            Some("disk=12.35MB;80;90.5;0;100")
        );

        let metric = PerfData::new("t", Some(1.0), "", None, Some(3.0), None, None);
        assert_eq!(metric.to_perf_string().as_deref(), Some("t=1.00;;3;;"));
    }

    #[test]
    fn test_perf_string_without_value() {
        let metric = PerfData::new("missing", None, "s", Some(1.0), None, None, None);
        assert_eq!(metric.to_perf_string(), None);
    }

    #[test]
    fn test_perf_line() {
        let metrics = vec![
            PerfData::new("a", Some(1.0), "s", None, None, None, None),
            PerfData::new("skipped", None, "s", None, None, None, None),
            PerfData::new("b", Some(2.5), "", Some(5.0), None, None, None),
        ];
        assert_eq!(perf_string(&metrics), "a=1.00s;;;; b=2.50;5;;;");

        assert_eq!(perf_string(&[]), "");
        assert_eq!(perf_string(&metrics[1..2]), "");
    }

    #[test]
    fn test_label_written_as_given() {
        let test_data = [
            ("test", "test=1.00;;;;"),
            ("disk usage", "disk usage=1.00;;;;"),
            ("a=b", "a=b=1.00;;;;"),
            ("te'st", "te'st=1.00;;;;"),
        ];
        for (label, expected) in &test_data {
            let metric = PerfData::new(label, Some(1.0), Unit::None, None, None, None, None);
            assert_eq!(metric.to_perf_string().as_deref(), Some(*expected));
        }
    }

    #[test]
    fn test_bounds() {
        assert_eq!(fmt_bound(None), "");
        assert_eq!(fmt_bound(Some(80.0)), "80");
        assert_eq!(fmt_bound(Some(0.25)), "0.25");
        assert_eq!(fmt_bound(Some(-1.0)), "-1");
    }

    #[test]
    fn test_unit() {
        assert_eq!(Unit::from("%"), Unit::Percentage);
        assert_eq!(Unit::from(""), Unit::None);
        assert_eq!(Unit::from("km".to_owned()), Unit::Other("km".to_owned()));
        assert_eq!(Unit::Microseconds.to_string(), "us");
        assert_eq!(Unit::Other("bar".to_owned()).to_string(), "bar");

        for label in ["", "s", "ms", "us", "%", "B", "KB", "MB", "TB", "c"] {
            assert_eq!(Unit::from(label).to_string(), label);
        }
    }
}
