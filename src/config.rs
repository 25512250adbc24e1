//! Configuration
//!
//! Settings for loading data, growing a tree and reporting on it, stored as JSON.
use crate::errors::CartError;
use crate::utils::items_to_strings;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Method to calculate variable importance.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub enum ImportanceMethod {
    /// The number of times a feature is used to split the data.
    Weight,
    /// The average split gain across all splits the feature is used in.
    Gain,
    /// The total gain across all splits the feature is used in.
    TotalGain,
    /// The average number of rows across all splits the feature is used in.
    Cover,
    /// The total number of rows across all splits the feature is used in.
    TotalCover,
}

impl FromStr for ImportanceMethod {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weight" => Ok(ImportanceMethod::Weight),
            "Gain" => Ok(ImportanceMethod::Gain),
            "TotalGain" => Ok(ImportanceMethod::TotalGain),
            "Cover" => Ok(ImportanceMethod::Cover),
            "TotalCover" => Ok(ImportanceMethod::TotalCover),
            _ => Err(CartError::ParseString(
                s.to_string(),
                "ImportanceMethod".to_string(),
                items_to_strings(vec!["Weight", "Gain", "TotalGain", "Cover", "TotalCover"]),
            )),
        }
    }
}

fn default_feature_names() -> Option<Vec<String>> {
    None
}
fn default_has_headers() -> bool {
    true
}
fn default_delimiter() -> char {
    ','
}
fn default_test_path() -> Option<PathBuf> {
    None
}
fn default_print_tree() -> bool {
    true
}
fn default_importance_method() -> Option<ImportanceMethod> {
    None
}

/// Configuration for loading data and reporting on a fitted tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Names of the feature columns, overriding the file header.
    #[serde(default = "default_feature_names")]
    pub feature_names: Option<Vec<String>>,
    /// Whether the first line of a data file is a header.
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
    /// Field delimiter of data files, a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Rows to classify after fitting. The training rows are used when unset.
    #[serde(default = "default_test_path")]
    pub test_path: Option<PathBuf>,
    /// Whether to print the fitted tree.
    #[serde(default = "default_print_tree")]
    pub print_tree: bool,
    /// Feature importance to report, if any.
    #[serde(default = "default_importance_method")]
    pub importance_method: Option<ImportanceMethod>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            feature_names: default_feature_names(),
            has_headers: default_has_headers(),
            delimiter: default_delimiter(),
            test_path: default_test_path(),
            print_tree: default_print_tree(),
            importance_method: default_importance_method(),
        }
    }
}

impl TreeConfig {
    /// The delimiter as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, CartError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(CartError::InvalidInput(format!(
                "Delimiter {:?} is not a single ASCII character.",
                self.delimiter
            )))
        }
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), CartError> {
        fs::write(path, self.json_dump()?).map_err(|e| CartError::UnableToWrite(e.to_string()))
    }

    /// Dump a configuration as a json object
    fn json_dump(&self) -> Result<String, CartError> {
        serde_json::to_string(self).map_err(|e| CartError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, CartError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| CartError::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json object.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, CartError> {
        let json_str = fs::read_to_string(path).map_err(|e| CartError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for TreeConfig {}
