// src/view/mod.rs
//! The view controller: user actions in, rendered panel fragments out

pub mod controller;
pub mod i18n;
pub mod loading;
pub mod panel;
pub mod render;
pub mod session;

pub use controller::{ReportDownload, ViewController};
pub use i18n::{Labels, Lang};
pub use loading::{LoadingGuard, LoadingIndicator};
pub use panel::{Fragment, Panel, PanelUpdate, Tone};
pub use session::{AnalysisHolder, SessionStore};
