//! Data
//!
//! Tabular containers used to grow and apply a tree. A [`Dataset`] is a non-empty
//! collection of [`Row`]s of equal arity, where the last value of every row is the label.
use crate::config::TreeConfig;
use crate::errors::CartError;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::Read;
use std::path::Path;

/// A single field of a row, either a number or a piece of text.
///
/// Numeric fields are compared with `>=` by a split question, text fields with `==`.
#[derive(Debug, Clone)]
pub enum Scalar {
    Numeric(f64),
    Text(String),
}

impl Scalar {
    /// Parse a raw field. Anything `f64` can parse becomes `Numeric`, the rest is `Text`.
    pub fn parse(field: &str) -> Self {
        match field.parse::<f64>() {
            Ok(v) => Scalar::Numeric(v),
            Err(_) => Scalar::Text(field.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Numeric(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Numeric(v) => Some(*v),
            Scalar::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Numeric(_) => None,
            Scalar::Text(s) => Some(s.as_str()),
        }
    }

    // -0.0 and 0.0 are the same value.
    fn numeric_key(v: f64) -> f64 {
        if v == 0.0 {
            0.0
        } else {
            v
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Scalar::Numeric(v) => {
                0u8.hash(state);
                Scalar::numeric_key(*v).to_bits().hash(state);
            }
            Scalar::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl Ord for Scalar {
    /// Numbers sort before text.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Numeric(a), Scalar::Numeric(b)) => {
                Scalar::numeric_key(*a).total_cmp(&Scalar::numeric_key(*b))
            }
            (Scalar::Numeric(_), Scalar::Text(_)) => Ordering::Less,
            (Scalar::Text(_), Scalar::Numeric(_)) => Ordering::Greater,
            (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Numeric(v) => write!(f, "{}", v),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Numeric(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Numeric(f64::from(v))
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// One record: feature values followed by the label.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Scalar>,
}

impl Row {
    /// Create a row. At least one feature and a label are required.
    pub fn new(values: Vec<Scalar>) -> Result<Self, CartError> {
        if values.len() < 2 {
            return Err(CartError::InvalidInput(format!(
                "A row needs at least one feature and a label, {} value(s) provided.",
                values.len()
            )));
        }
        Ok(Row { values })
    }

    /// The last value of the row.
    pub fn label(&self) -> &Scalar {
        &self.values[self.values.len() - 1]
    }

    /// Every value except the label.
    pub fn features(&self) -> &[Scalar] {
        &self.values[..self.values.len() - 1]
    }

    pub fn value(&self, column: usize) -> Option<&Scalar> {
        self.values.get(column)
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Number of values, label included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A non-empty set of rows of equal arity, with one name per feature column.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    feature_names: Vec<String>,
}

impl Dataset {
    /// Create a dataset, naming the features `column_0`, `column_1`, ...
    pub fn new(rows: Vec<Row>) -> Result<Self, CartError> {
        let arity = match rows.first() {
            Some(r) => r.len(),
            None => return Err(CartError::InvalidInput("A dataset needs at least one row.".to_string())),
        };
        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != arity) {
            return Err(CartError::InvalidInput(format!(
                "Row {} has {} values, expected {}.",
                i,
                r.len(),
                arity
            )));
        }
        let feature_names = (0..arity - 1).map(default_feature_name).collect();
        Ok(Dataset { rows, feature_names })
    }

    /// Replace the feature names. One name per feature column is required.
    pub fn with_feature_names(mut self, feature_names: Vec<String>) -> Result<Self, CartError> {
        if feature_names.len() != self.n_features() {
            return Err(CartError::InvalidInput(format!(
                "{} feature names provided for {} feature columns.",
                feature_names.len(),
                self.n_features()
            )));
        }
        self.feature_names = feature_names;
        Ok(self)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Borrowed view of every row, the form the split search works on.
    pub fn row_refs(&self) -> Vec<&Row> {
        self.rows.iter().collect()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn n_features(&self) -> usize {
        self.arity() - 1
    }

    /// Number of values per row, label included.
    pub fn arity(&self) -> usize {
        self.rows[0].len()
    }

    pub fn labels(&self) -> Vec<Scalar> {
        self.rows.iter().map(|r| r.label().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Load a dataset from a delimited file.
    ///
    /// * `config` - Supplies the delimiter, header flag and optional feature names.
    /// * `path` - Location of the file.
    pub fn from_csv_path<P: AsRef<Path>>(config: &TreeConfig, path: P) -> Result<Self, CartError> {
        let file = File::open(path.as_ref())
            .map_err(|e| CartError::UnableToRead(format!("{}: {}", path.as_ref().display(), e)))?;
        Dataset::from_csv_reader(config, file)
    }

    /// Load a dataset from any reader of delimited text.
    ///
    /// Feature names come from the configuration when set, otherwise from the
    /// header line, otherwise they are generated.
    pub fn from_csv_reader<R: Read>(config: &TreeConfig, reader: R) -> Result<Self, CartError> {
        let delimiter = config.delimiter_byte()?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(config.has_headers)
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header_names: Option<Vec<String>> = if config.has_headers {
            let headers = csv_reader
                .headers()
                .map_err(|e| CartError::UnableToRead(e.to_string()))?;
            Some(headers.iter().map(|h| h.to_string()).collect())
        } else {
            None
        };

        let mut rows = Vec::new();
        for (i, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| CartError::UnableToRead(e.to_string()))?;
            let mut values = Vec::with_capacity(record.len());
            for (j, field) in record.iter().enumerate() {
                let value = Scalar::parse(field);
                let missing = match &value {
                    Scalar::Numeric(v) => v.is_nan(),
                    Scalar::Text(s) => s.is_empty(),
                };
                if missing {
                    return Err(CartError::MissingValue { row: i, column: j });
                }
                values.push(value);
            }
            rows.push(Row::new(values)?);
        }

        let data = Dataset::new(rows)?;
        match (&config.feature_names, header_names) {
            (Some(names), _) => data.with_feature_names(names.clone()),
            (None, Some(mut names)) => {
                names.truncate(data.n_features());
                data.with_feature_names(names)
            }
            (None, None) => Ok(data),
        }
    }
}

pub fn default_feature_name(column: usize) -> String {
    format!("column_{}", column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn row(values: Vec<Scalar>) -> Row {
        Row::new(values).unwrap()
    }

    #[test]
    fn test_scalar_parse() {
        assert_eq!(Scalar::parse("3.5"), Scalar::Numeric(3.5));
        assert_eq!(Scalar::parse("7"), Scalar::Numeric(7.0));
        assert_eq!(Scalar::parse("Red"), Scalar::Text("Red".to_string()));
        assert!(Scalar::parse("-2").is_numeric());
        assert_eq!(Scalar::parse("Red").as_str(), Some("Red"));
    }

    #[test]
    fn test_scalar_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Scalar::from(0.0));
        set.insert(Scalar::from(-0.0));
        set.insert(Scalar::from(1));
        set.insert(Scalar::from(1.0));
        set.insert(Scalar::from("1"));
        assert_eq!(set.len(), 3);
        assert_ne!(Scalar::from(1.0), Scalar::from("1"));
    }

    #[test]
    fn test_scalar_ordering() {
        let mut v = vec![Scalar::from("b"), Scalar::from(3.0), Scalar::from("a"), Scalar::from(-1.0)];
        v.sort();
        assert_eq!(
            v,
            vec![Scalar::from(-1.0), Scalar::from(3.0), Scalar::from("a"), Scalar::from("b")]
        );
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from(3.0).to_string(), "3");
        assert_eq!(Scalar::from(2.5).to_string(), "2.5");
        assert_eq!(Scalar::from("Grape").to_string(), "Grape");
    }

    #[test]
    fn test_row_requires_feature_and_label() {
        assert!(matches!(Row::new(vec![Scalar::from("A")]), Err(CartError::InvalidInput(_))));
        let r = row(vec![1.into(), "Red".into(), "Apple".into()]);
        assert_eq!(r.label(), &Scalar::from("Apple"));
        assert_eq!(r.features().len(), 2);
        assert_eq!(r.value(1), Some(&Scalar::from("Red")));
        assert_eq!(r.value(3), None);
    }

    #[test]
    fn test_dataset_validation() {
        assert!(matches!(Dataset::new(vec![]), Err(CartError::InvalidInput(_))));

        let ragged = vec![
            row(vec![1.into(), "A".into()]),
            row(vec![1.into(), 2.into(), "A".into()]),
        ];
        assert!(matches!(Dataset::new(ragged), Err(CartError::InvalidInput(_))));

        let data = Dataset::new(vec![row(vec![1.into(), 2.into(), "A".into()])]).unwrap();
        assert_eq!(data.feature_names(), &["column_0".to_string(), "column_1".to_string()]);
        assert_eq!(data.n_features(), 2);
        assert!(data.clone().with_feature_names(vec!["x".to_string()]).is_err());
        let named = data
            .with_feature_names(vec!["x".to_string(), "y".to_string()])
            .unwrap();
        assert_eq!(named.feature_names()[1], "y");
    }

    #[test]
    fn test_from_csv_reader_with_headers() {
        let csv = "color,diameter,label\nGreen,3,Apple\nYellow, 3 ,Apple\nRed,1,Grape\n";
        let data = Dataset::from_csv_reader(&TreeConfig::default(), csv.as_bytes()).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.feature_names(), &["color".to_string(), "diameter".to_string()]);
        assert_eq!(data.rows()[1].value(1), Some(&Scalar::Numeric(3.0)));
        assert_eq!(data.labels()[2], Scalar::from("Grape"));
    }

    #[test]
    fn test_from_csv_reader_without_headers() {
        let config = TreeConfig {
            has_headers: false,
            delimiter: ';',
            ..TreeConfig::default()
        };
        let csv = "1;a;yes\n2;b;no\n";
        let data = Dataset::from_csv_reader(&config, csv.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.feature_names()[0], "column_0");
    }

    #[test]
    fn test_from_csv_reader_config_names() {
        let config = TreeConfig {
            feature_names: Some(vec!["a".to_string()]),
            ..TreeConfig::default()
        };
        let csv = "x,y\n1,yes\n";
        let data = Dataset::from_csv_reader(&config, csv.as_bytes()).unwrap();
        assert_eq!(data.feature_names(), &["a".to_string()]);

        let config = TreeConfig {
            feature_names: Some(vec!["a".to_string(), "b".to_string()]),
            ..TreeConfig::default()
        };
        assert!(Dataset::from_csv_reader(&config, csv.as_bytes()).is_err());
    }

    #[test]
    fn test_from_csv_reader_missing_values() {
        let csv = "x,y,label\n1,,yes\n";
        let err = Dataset::from_csv_reader(&TreeConfig::default(), csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CartError::MissingValue { row: 0, column: 1 }));

        let csv = "x,label\nNaN,yes\n";
        let err = Dataset::from_csv_reader(&TreeConfig::default(), csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CartError::MissingValue { row: 0, column: 0 }));
    }

    #[test]
    fn test_from_csv_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "size,label").unwrap();
        writeln!(file, "1,small").unwrap();
        writeln!(file, "10,big").unwrap();
        let data = Dataset::from_csv_path(&TreeConfig::default(), file.path()).unwrap();
        assert_eq!(data.len(), 2);

        let missing = Dataset::from_csv_path(&TreeConfig::default(), "resources/does_not_exist.csv");
        assert!(matches!(missing, Err(CartError::UnableToRead(_))));
    }
}
