// Recommendation Engine: weighted profile-vs-posting scoring, match reasons,
// urgency and insight text. Pure and synchronous; insight generation is
// swappable through `insights::InsightProvider`.

pub mod engine;
pub mod handlers;
pub mod insights;
pub mod market;
pub mod reasons;
