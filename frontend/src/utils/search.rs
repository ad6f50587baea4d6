pub const MAX_SUGGESTIONS: usize = 8;

/// Case-insensitive substring match over `cities`, in list order, capped at
/// `MAX_SUGGESTIONS`. A blank query matches nothing.
pub fn filter_cities(cities: &[String], query: &str) -> Vec<String> {
  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return vec![];
  }

  cities.iter()
    .filter(|city| city.to_lowercase().contains(&needle))
    .take(MAX_SUGGESTIONS)
    .cloned()
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn matches_case_insensitively() {
    let cities = names(&["Mumbai", "Pune"]);
    assert_eq!(filter_cities(&cities, "mum"), ["Mumbai"]);
    assert_eq!(filter_cities(&cities, "MUM"), ["Mumbai"]);
    assert_eq!(filter_cities(&cities, "  une "), ["Pune"]);
  }

  #[test]
  fn blank_query_matches_nothing() {
    let cities = names(&["Mumbai", "Pune"]);
    assert!(filter_cities(&cities, "").is_empty());
    assert!(filter_cities(&cities, "   ").is_empty());
  }

  #[test]
  fn caps_at_eight_in_list_order() {
    let cities: Vec<String> = (0..20).map(|i| format!("Rampur {}", i)).collect();
    let matches = filter_cities(&cities, "ramp");
    assert_eq!(matches.len(), MAX_SUGGESTIONS);
    assert_eq!(matches, cities[..8]);
  }

  #[test]
  fn no_match_is_empty() {
    let cities = names(&["Mumbai", "Pune"]);
    assert!(filter_cities(&cities, "delhi").is_empty());
  }
}
