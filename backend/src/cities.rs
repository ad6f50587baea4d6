use std::{collections::HashSet, fs, path::Path};
use tracing::info;

use crate::midwares::app_state::AppError;

/// The known city set: order-preserving, deduplicated, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct CityList {
  names: Vec<String>,
  index: HashSet<String>,
}

impl CityList {
  pub fn from_file(path: &Path) -> Result<Self, AppError> {
    let raw = fs::read_to_string(path)?;
    let list = Self::parse(&raw);
    info!("loaded {} cities from {}", list.len(), path.display());
    Ok(list)
  }

  /// One name per line. Surrounding whitespace is trimmed, blank lines are skipped
  /// and the first occurrence of a repeated name wins.
  pub fn parse(raw: &str) -> Self {
    Self::from_names(raw.lines())
  }

  pub fn from_names<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>
  {
    let mut list = Self::default();
    for name in names {
      let name = name.as_ref().trim();
      if name.is_empty() || list.index.contains(name) {
        continue;
      }
      list.index.insert(name.to_string());
      list.names.push(name.to_string());
    }
    list
  }

  /// Exact, case-sensitive membership.
  pub fn contains(&self, city: &str) -> bool {
    self.index.contains(city)
  }

  pub fn as_slice(&self) -> &[String] {
    &self.names
  }

  pub fn first(&self, n: usize) -> &[String] {
    &self.names[..n.min(self.names.len())]
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn parse_trims_skips_blanks_and_dedups() {
    let list = CityList::parse("Mumbai\n\n  Pune  \r\nDelhi\nMumbai\n   \n");
    assert_eq!(list.as_slice(), ["Mumbai", "Pune", "Delhi"]);
  }

  #[test]
  fn membership_is_case_sensitive() {
    let list = CityList::from_names(["Mumbai", "New Delhi"]);
    assert!(list.contains("Mumbai"));
    assert!(list.contains("New Delhi"));
    assert!(!list.contains("mumbai"));
    assert!(!list.contains("New Delhi "));
  }

  #[test]
  fn first_is_clamped() {
    let list = CityList::from_names(["A", "B", "C"]);
    assert_eq!(list.first(2), ["A", "B"]);
    assert_eq!(list.first(10).len(), 3);
    assert!(list.first(0).is_empty());
  }

  #[test]
  fn from_file_reads_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Chennai\nKolkata\n").unwrap();

    let list = CityList::from_file(file.path()).unwrap();
    assert_eq!(list.as_slice(), ["Chennai", "Kolkata"]);
  }

  #[test]
  fn missing_file_is_io_error() {
    let err = CityList::from_file(Path::new("/definitely/not/here.txt")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
  }
}
