pub mod types;

pub use types::{AnalysisReport, MarketValidation, Rating, ScalabilityAnalysis, ViabilityStatus};
