// src/types/mod.rs
//! Wire types shared by the backend client and the renderer

pub mod platform;
pub mod request;
pub mod response;
pub mod verdict;

pub use platform::Platform;
pub use response::{AnalysisResult, CompanyData, CompanySearchResponse, ExtractedText};
pub use verdict::{CompanyStanding, Verdict};
