// TransLingua - AI-powered multilingual translation backed by Google Gemini
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod metrics;
pub mod models;
pub mod server;
pub mod translation;
pub mod utils;
