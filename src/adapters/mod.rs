// Adapters layer: concrete clients for the outbound collaborators.

pub mod fbref;
pub mod gemini;
