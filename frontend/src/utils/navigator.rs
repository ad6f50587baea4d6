//! Navigation port: the router only ever talks to history through `Navigator`.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::BrowserNavigator;

pub type PopStateHandler = Box<dyn FnMut(String)>;

pub trait Navigator {
  fn current_path(&self) -> String;
  fn push(&mut self, path: &str);
  /// `handler` receives the new path after every back/forward move.
  fn on_pop_state(&mut self, handler: PopStateHandler);
}

/// History kept in memory. Used off the browser and in tests.
#[derive(Default)]
pub struct MemoryNavigator {
  entries: Vec<String>,
  cursor: usize,
  handlers: Vec<PopStateHandler>,
}

impl MemoryNavigator {
  pub fn new(start: &str) -> Self {
    Self { entries: vec![start.to_string()], cursor: 0, handlers: vec![] }
  }

  pub fn back(&mut self) -> bool {
    if self.cursor == 0 {
      return false;
    }
    self.cursor -= 1;
    self.notify();
    true
  }

  pub fn forward(&mut self) -> bool {
    if self.cursor + 1 >= self.entries.len() {
      return false;
    }
    self.cursor += 1;
    self.notify();
    true
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  fn notify(&mut self) {
    let path = self.current_path();
    for handler in self.handlers.iter_mut() {
      handler(path.clone());
    }
  }
}

impl Navigator for MemoryNavigator {
  fn current_path(&self) -> String {
    self.entries.get(self.cursor).cloned().unwrap_or_else(|| "/".to_string())
  }

  fn push(&mut self, path: &str) {
    // pushing drops any forward entries, like the browser does
    self.entries.truncate(self.cursor + 1);
    self.entries.push(path.to_string());
    self.cursor = self.entries.len() - 1;
  }

  fn on_pop_state(&mut self, handler: PopStateHandler) {
    self.handlers.push(handler);
  }
}

/// The navigator for the platform being built.
pub fn platform_navigator() -> Box<dyn Navigator> {
  #[cfg(target_arch = "wasm32")]
  {
    Box::new(BrowserNavigator::new())
  }
  #[cfg(not(target_arch = "wasm32"))]
  {
    Box::new(MemoryNavigator::new("/"))
  }
}

#[cfg(target_arch = "wasm32")]
mod wasm32 {
  use dioxus::logger::tracing::error;
  use wasm_bindgen::{closure::Closure, JsCast, JsValue};

  use super::{Navigator, PopStateHandler};

  /// `window.history` plus the `popstate` event.
  #[derive(Default)]
  pub struct BrowserNavigator {
    // the listeners must outlive this call, so the closures are kept here
    listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
  }

  impl BrowserNavigator {
    pub fn new() -> Self {
      Self::default()
    }
  }

  fn location_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
  }

  impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
      location_path().unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: &str) {
      let Some(window) = web_sys::window() else { return };
      let pushed = window.history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
      if let Err(e) = pushed {
        error!("history.pushState failed for {}: {:?}", path, e);
      }
    }

    fn on_pop_state(&mut self, mut handler: PopStateHandler) {
      let Some(window) = web_sys::window() else { return };

      let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
        handler(location_path().unwrap_or_else(|| "/".to_string()));
      });

      match window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()) {
        Ok(()) => self.listeners.push(listener),
        Err(e) => error!("failed to listen for popstate: {:?}", e),
      }
    }
  }
}
