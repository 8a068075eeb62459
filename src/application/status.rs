// src/application/status.rs
//
// Status line texts shown above the tracker

pub const SIGNED_OUT: &str = "Please login to access your tracker.";

pub const LOADED: &str = "Connected ✔ Data loaded.";

pub const LOAD_FAILED: &str = "Error loading data.";

pub fn loading(email: &str) -> String {
    format!("Logged in as {}. Loading data…", email)
}
