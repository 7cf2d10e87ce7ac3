pub mod interface;
pub mod client;

pub use interface::{RawResponse, TranslateApi, TranslateRequest};
pub use client::TranslateClient;
