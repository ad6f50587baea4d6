use dotenvy::dotenv;

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");
  println!("cargo::rerun-if-env-changed=API_BASE_URL");

  // optional: web builds fall back to the page origin, native ones to localhost:3000
  dotenv().ok();

  if let Ok(url) = std::env::var("API_BASE_URL") {
    println!("cargo::rustc-env=API_BASE_URL={}", url);
  }
}
