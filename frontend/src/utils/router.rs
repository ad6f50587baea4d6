//! Client-side routing as a pure state machine.
//!
//! `AppState` is an immutable snapshot; `transition` folds one `Event` into a new
//! snapshot and the `Effect`s the shell has to carry out (fetches, history pushes).
//! Nothing in here touches the network or the browser.
//!
//! Every view entry and refresh takes a new request number. Fetch effects carry it
//! and their results are applied only while it is still current.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{search::filter_cities, server::PriceQuote};

/// How many cities the home page asks prices for.
pub const FEATURED_LIMIT: usize = 12;

// the characters encodeURIComponent leaves alone
const CITY_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
  Loading,
  Ready(T),
  Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
  /// City list not loaded yet.
  Booting,
  Home { prices: Remote<Vec<PriceQuote>> },
  CitiesList,
  CityDetail { city: String, quote: Remote<PriceQuote> },
  NotFound,
  Error(String),
}

/// What a path names, before the known city set is consulted.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
  Home,
  Cities,
  City(String),
  NotFound,
}

impl Route {
  pub fn parse(path: &str) -> Self {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    match path {
      "/" | "" => Route::Home,
      "/cities" => Route::Cities,
      _ => match path.strip_prefix("/city/") {
        Some(raw) => percent_decode_str(raw)
          .decode_utf8()
          .map_or(Route::NotFound, |name| Route::City(name.into_owned())),
        None => Route::NotFound,
      }
    }
  }
}

pub fn city_path(city: &str) -> String {
  format!("/city/{}", utf8_percent_encode(city, CITY_SEGMENT))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
  LoadCities,
  FetchAllPrices { limit: usize, request: u64 },
  FetchQuote { city: String, request: u64 },
  PushPath(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
  CitiesLoaded(Vec<String>),
  CitiesFailed(String),
  /// In-app navigation: the path gets pushed onto history.
  Navigate(String),
  /// Browser back/forward: history already moved, only re-resolve.
  PopState(String),
  PricesLoaded { request: u64, result: Result<Vec<PriceQuote>, String> },
  QuoteLoaded { city: String, request: u64, result: Result<PriceQuote, String> },
  Refresh,
  SearchInput(String),
  SearchSubmit,
  SearchSelect(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
  pub query: String,
  pub matches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
  pub cities: Vec<String>,
  pub cities_loaded: bool,
  pub path: String,
  pub view: ViewState,
  pub search: SearchState,
  /// Number of the latest fetch issued for the current view.
  pub request: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
  pub state: AppState,
  pub effects: Vec<Effect>,
}

impl AppState {
  /// Initial snapshot: nothing resolves until the city list arrives.
  pub fn boot(path: impl Into<String>) -> (Self, Effect) {
    let state = Self {
      cities: vec![],
      cities_loaded: false,
      path: path.into(),
      view: ViewState::Booting,
      search: SearchState::default(),
      request: 0,
    };
    (state, Effect::LoadCities)
  }

  pub fn is_active(&self, href: &str) -> bool {
    Route::parse(&self.path) == Route::parse(href)
  }
}

/// Picks the view for `path` against the known set.
pub fn resolve(path: &str, cities: &[String]) -> ViewState {
  match Route::parse(path) {
    Route::Home => ViewState::Home { prices: Remote::Loading },
    Route::Cities => ViewState::CitiesList,
    Route::City(city) if cities.contains(&city) => ViewState::CityDetail { city, quote: Remote::Loading },
    Route::City(_) | Route::NotFound => ViewState::NotFound,
  }
}

/// The fetch a freshly entered or refreshed view needs, if any.
fn fetch_for(view: &ViewState, request: u64) -> Option<Effect> {
  match view {
    ViewState::Home { .. } => Some(Effect::FetchAllPrices { limit: FEATURED_LIMIT, request }),
    ViewState::CityDetail { city, .. } => Some(Effect::FetchQuote { city: city.clone(), request }),
    _ => None,
  }
}

pub fn transition(state: &AppState, event: Event) -> Transition {
  let mut next = state.clone();
  let mut effects = vec![];

  match event {
    Event::CitiesLoaded(cities) => {
      next.cities = cities;
      next.cities_loaded = true;
      effects.extend(enter(&mut next));
    },
    Event::CitiesFailed(message) => {
      next.view = ViewState::Error(format!("Failed to load cities: {}", message));
    },
    Event::Navigate(path) => {
      effects.push(Effect::PushPath(path.clone()));
      effects.extend(go_to(&mut next, path));
    },
    Event::PopState(path) => {
      effects.extend(go_to(&mut next, path));
    },
    Event::PricesLoaded { request, result } => {
      match &mut next.view {
        ViewState::Home { prices } if request == state.request => {
          *prices = match result {
            Ok(list) => Remote::Ready(list),
            Err(e) => Remote::Failed(e),
          };
        },
        _ => {}
      }
    },
    Event::QuoteLoaded { city, request, result } => {
      match &mut next.view {
        ViewState::CityDetail { city: current, quote } if request == state.request && *current == city => {
          *quote = match result {
            Ok(q) => Remote::Ready(q),
            Err(e) => Remote::Failed(e),
          };
        },
        // issued for a view that has since been left or refreshed
        _ => {}
      }
    },
    Event::Refresh => {
      if matches!(next.view, ViewState::Error(_)) && !next.cities_loaded {
        next.view = ViewState::Booting;
        effects.push(Effect::LoadCities);
      } else {
        effects.extend(refresh(&mut next));
      }
    },
    Event::SearchInput(query) => {
      next.search.matches = filter_cities(&next.cities, &query);
      next.search.query = query;
    },
    Event::SearchSubmit => {
      if let Some(city) = next.search.matches.first().cloned() {
        let path = city_path(&city);
        effects.push(Effect::PushPath(path.clone()));
        effects.extend(go_to(&mut next, path));
      }
    },
    Event::SearchSelect(city) => {
      let path = city_path(&city);
      effects.push(Effect::PushPath(path.clone()));
      effects.extend(go_to(&mut next, path));
    },
  }

  Transition { state: next, effects }
}

fn go_to(state: &mut AppState, path: String) -> Option<Effect> {
  state.path = path;
  state.search = SearchState::default();
  // until the city list is in, keep showing the boot spinner or its error
  if !state.cities_loaded {
    return None;
  }
  enter(state)
}

fn enter(state: &mut AppState) -> Option<Effect> {
  state.view = resolve(&state.path, &state.cities);
  issue_fetch(state)
}

/// Drops what the current view shows and fetches it again. Static views have nothing to refetch.
fn refresh(state: &mut AppState) -> Option<Effect> {
  match &mut state.view {
    ViewState::Home { prices } => *prices = Remote::Loading,
    ViewState::CityDetail { quote, .. } => *quote = Remote::Loading,
    _ => return None,
  }
  issue_fetch(state)
}

fn issue_fetch(state: &mut AppState) -> Option<Effect> {
  // any earlier fetch is stale from here on
  state.request += 1;
  fetch_for(&state.view, state.request)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn quote(city: &str) -> PriceQuote {
    PriceQuote {
      city: city.to_string(),
      price22k: "5000".to_string(),
      price24k: "5400".to_string(),
      unit: "10g".to_string(),
      success: true,
      error: None,
    }
  }

  fn loaded(path: &str, cities: &[&str]) -> AppState {
    let (state, _) = AppState::boot(path);
    let cities = cities.iter().map(|c| c.to_string()).collect();
    transition(&state, Event::CitiesLoaded(cities)).state
  }

  fn fetches(effects: &[Effect]) -> Vec<&Effect> {
    effects.iter().filter(|e| !matches!(e, Effect::PushPath(_))).collect()
  }

  fn quote_loaded(city: &str, request: u64, result: Result<PriceQuote, String>) -> Event {
    Event::QuoteLoaded { city: city.to_string(), request, result }
  }

  #[test]
  fn parses_paths() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse("/cities"), Route::Cities);
    assert_eq!(Route::parse("/cities?sort=asc"), Route::Cities);
    assert_eq!(Route::parse("/city/New%20Delhi"), Route::City("New Delhi".to_string()));
    assert_eq!(Route::parse("/city/Mumbai#top"), Route::City("Mumbai".to_string()));
    assert_eq!(Route::parse("/cities/"), Route::NotFound);
    assert_eq!(Route::parse("/about"), Route::NotFound);
    // invalid utf-8 after decoding
    assert_eq!(Route::parse("/city/%FF"), Route::NotFound);
  }

  #[test]
  fn city_path_round_trips_through_parse() {
    for name in ["Mumbai", "New Delhi", "Thiruvananthapuram (Trivandrum)", "Kochi/Ernakulam"] {
      assert_eq!(Route::parse(&city_path(name)), Route::City(name.to_string()));
    }
    assert_eq!(city_path("New Delhi"), "/city/New%20Delhi");
  }

  #[test]
  fn resolve_checks_the_known_set() {
    let cities = vec!["Mumbai".to_string()];
    assert_eq!(resolve("/", &cities), ViewState::Home { prices: Remote::Loading });
    assert_eq!(resolve("/cities", &cities), ViewState::CitiesList);
    assert_eq!(resolve("/city/Mumbai", &cities), ViewState::CityDetail { city: "Mumbai".into(), quote: Remote::Loading });
    assert_eq!(resolve("/city/Pune", &cities), ViewState::NotFound);
  }

  #[test]
  fn boot_waits_for_cities() {
    let (state, effect) = AppState::boot("/city/Mumbai");
    assert_eq!(state.view, ViewState::Booting);
    assert_eq!(effect, Effect::LoadCities);

    // navigation before the list arrives only records the path
    let t = transition(&state, Event::PopState("/cities".to_string()));
    assert_eq!(t.state.view, ViewState::Booting);
    assert!(t.effects.is_empty());
    assert_eq!(t.state.path, "/cities");
  }

  #[test]
  fn cities_loaded_resolves_the_current_path() {
    let (state, _) = AppState::boot("/city/Mumbai");
    let t = transition(&state, Event::CitiesLoaded(vec!["Mumbai".into(), "Pune".into()]));

    assert_eq!(t.state.view, ViewState::CityDetail { city: "Mumbai".into(), quote: Remote::Loading });
    assert_eq!(t.effects, [Effect::FetchQuote { city: "Mumbai".into(), request: t.state.request }]);
  }

  #[test]
  fn home_fetches_featured_prices() {
    let (state, _) = AppState::boot("/");
    let t = transition(&state, Event::CitiesLoaded(vec!["Mumbai".into()]));

    assert_eq!(t.state.view, ViewState::Home { prices: Remote::Loading });
    assert_eq!(t.effects, [Effect::FetchAllPrices { limit: FEATURED_LIMIT, request: t.state.request }]);
  }

  #[test]
  fn cities_page_never_fetches() {
    let state = loaded("/", &["Mumbai", "Pune"]);
    let t = transition(&state, Event::Navigate("/cities".to_string()));

    assert_eq!(t.state.view, ViewState::CitiesList);
    assert!(fetches(&t.effects).is_empty());
    assert_eq!(t.effects, [Effect::PushPath("/cities".to_string())]);
  }

  #[test]
  fn unknown_city_renders_not_found() {
    let state = loaded("/", &["Mumbai"]);

    let t = transition(&state, Event::Navigate("/city/Nonexistent%20City".to_string()));
    assert_eq!(t.state.view, ViewState::NotFound);
    assert!(fetches(&t.effects).is_empty());

    // membership is exact and case-sensitive
    let t = transition(&state, Event::Navigate("/city/mumbai".to_string()));
    assert_eq!(t.state.view, ViewState::NotFound);
  }

  #[test]
  fn anything_else_is_not_found() {
    let state = loaded("/", &["Mumbai"]);
    let t = transition(&state, Event::Navigate("/prices".to_string()));
    assert_eq!(t.state.view, ViewState::NotFound);
  }

  #[test]
  fn pop_state_re_resolves_without_pushing() {
    let state = loaded("/cities", &["Mumbai"]);
    let t = transition(&state, Event::PopState("/city/Mumbai".to_string()));

    assert_eq!(t.state.path, "/city/Mumbai");
    assert_eq!(t.effects, [Effect::FetchQuote { city: "Mumbai".into(), request: t.state.request }]);
  }

  #[test]
  fn city_list_failure_shows_retryable_error() {
    let (state, _) = AppState::boot("/");
    let t = transition(&state, Event::CitiesFailed("HTTP error! status: 500".to_string()));

    assert!(matches!(&t.state.view, ViewState::Error(msg) if msg.contains("500")));
    assert!(t.effects.is_empty());

    let retry = transition(&t.state, Event::Refresh);
    assert_eq!(retry.state.view, ViewState::Booting);
    assert_eq!(retry.effects, [Effect::LoadCities]);
  }

  #[test]
  fn prices_land_on_home() {
    let state = loaded("/", &["Mumbai"]);
    let request = state.request;

    let ok = transition(&state, Event::PricesLoaded { request, result: Ok(vec![quote("Mumbai")]) });
    assert_eq!(ok.state.view, ViewState::Home { prices: Remote::Ready(vec![quote("Mumbai")]) });

    let failed = transition(&state, Event::PricesLoaded { request, result: Err("Response is not JSON".into()) });
    assert_eq!(failed.state.view, ViewState::Home { prices: Remote::Failed("Response is not JSON".into()) });
  }

  #[test]
  fn featured_prices_can_be_retried() {
    let state = loaded("/", &["Mumbai"]);
    let failed = transition(&state, Event::PricesLoaded { request: state.request, result: Err("network down".into()) }).state;
    assert_eq!(failed.view, ViewState::Home { prices: Remote::Failed("network down".into()) });

    let retry = transition(&failed, Event::Refresh);
    assert_eq!(retry.state.view, ViewState::Home { prices: Remote::Loading });
    assert_eq!(retry.effects, [Effect::FetchAllPrices { limit: FEATURED_LIMIT, request: retry.state.request }]);

    // the failed attempt answering again does not clobber the retry
    let t = transition(&retry.state, Event::PricesLoaded { request: state.request, result: Err("late".into()) });
    assert_eq!(t.state, retry.state);
  }

  #[test]
  fn late_results_are_ignored() {
    let state = loaded("/city/Mumbai", &["Mumbai", "Pune"]);
    let moved = transition(&state, Event::Navigate("/cities".to_string())).state;

    let t = transition(&moved, quote_loaded("Mumbai", state.request, Ok(quote("Mumbai"))));
    assert_eq!(t.state, moved);

    let t = transition(&moved, Event::PricesLoaded { request: state.request, result: Ok(vec![]) });
    assert_eq!(t.state, moved);

    // a quote for another city never lands on this page
    let on_pune = transition(&state, Event::Navigate("/city/Pune".to_string())).state;
    let t = transition(&on_pune, quote_loaded("Mumbai", on_pune.request, Ok(quote("Mumbai"))));
    assert_eq!(t.state.view, ViewState::CityDetail { city: "Pune".into(), quote: Remote::Loading });
  }

  #[test]
  fn revisiting_a_city_ignores_the_first_visit_fetch() {
    let state = loaded("/city/Mumbai", &["Mumbai", "Pune"]);
    let first_visit = state.request;

    let away = transition(&state, Event::Navigate("/cities".to_string())).state;
    let back = transition(&away, Event::Navigate("/city/Mumbai".to_string()));
    assert_eq!(back.effects[1], Effect::FetchQuote { city: "Mumbai".into(), request: back.state.request });
    assert_ne!(back.state.request, first_visit);

    let t = transition(&back.state, quote_loaded("Mumbai", first_visit, Err("Upstream request timed out".into())));
    assert_eq!(t.state.view, ViewState::CityDetail { city: "Mumbai".into(), quote: Remote::Loading });

    // the second visit's own fetch still lands
    let t = transition(&t.state, quote_loaded("Mumbai", back.state.request, Ok(quote("Mumbai"))));
    assert_eq!(t.state.view, ViewState::CityDetail { city: "Mumbai".into(), quote: Remote::Ready(quote("Mumbai")) });
  }

  #[test]
  fn quote_failures_are_kept_for_retry() {
    let state = loaded("/city/Mumbai", &["Mumbai"]);
    let t = transition(&state, quote_loaded("Mumbai", state.request, Err("network down".into())));
    assert_eq!(t.state.view, ViewState::CityDetail { city: "Mumbai".into(), quote: Remote::Failed("network down".into()) });

    let retry = transition(&t.state, Event::Refresh);
    assert_eq!(retry.state.view, ViewState::CityDetail { city: "Mumbai".into(), quote: Remote::Loading });
    assert_eq!(retry.effects, [Effect::FetchQuote { city: "Mumbai".into(), request: retry.state.request }]);
  }

  #[test]
  fn refresh_on_static_views_does_nothing() {
    let state = loaded("/cities", &["Mumbai"]);
    let t = transition(&state, Event::Refresh);
    assert_eq!(t.state, state);
    assert!(t.effects.is_empty());
  }

  #[test]
  fn search_filters_and_submits_first_match() {
    let state = loaded("/", &["Mumbai", "Pune", "Mumbra"]);

    let typed = transition(&state, Event::SearchInput("mum".to_string())).state;
    assert_eq!(typed.search.matches, ["Mumbai", "Mumbra"]);
    assert_eq!(typed.search.query, "mum");

    let t = transition(&typed, Event::SearchSubmit);
    assert_eq!(t.state.path, "/city/Mumbai");
    assert_eq!(t.state.search, SearchState::default());
    assert_eq!(t.effects, [
      Effect::PushPath("/city/Mumbai".to_string()),
      Effect::FetchQuote { city: "Mumbai".into(), request: t.state.request },
    ]);
  }

  #[test]
  fn submit_without_matches_stays_put() {
    let state = loaded("/", &["Mumbai", "Pune"]);
    let typed = transition(&state, Event::SearchInput("xyz".to_string())).state;

    let t = transition(&typed, Event::SearchSubmit);
    assert_eq!(t.state, typed);
    assert!(t.effects.is_empty());
  }

  #[test]
  fn selecting_a_suggestion_navigates() {
    let state = loaded("/", &["New Delhi"]);
    let t = transition(&state, Event::SearchSelect("New Delhi".to_string()));

    assert_eq!(t.state.path, "/city/New%20Delhi");
    assert_eq!(t.state.view, ViewState::CityDetail { city: "New Delhi".into(), quote: Remote::Loading });
  }

  #[test]
  fn active_link_ignores_query() {
    let state = loaded("/cities?x=1", &["Mumbai"]);
    assert!(state.is_active("/cities"));
    assert!(!state.is_active("/"));
  }
}
