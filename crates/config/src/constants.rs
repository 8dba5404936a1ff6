//! Centralized constants for the voice form backend
//!
//! Single source of truth for default values shared by settings, the
//! extraction pipeline and the server.

/// Extraction heuristics
pub mod extraction {
    /// A date found without a birth phrase is only trusted if its year is
    /// strictly before this. Keeps "today" and recent years out of `dob`.
    pub const DOB_YEAR_CUTOFF: i32 = 2020;

    /// Sane bounds for a configured cutoff
    pub const DOB_YEAR_CUTOFF_MIN: i32 = 1900;
    pub const DOB_YEAR_CUTOFF_MAX: i32 = 2100;

    /// Longest person span the gazetteer recognizer will emit, in tokens
    pub const MAX_NAME_SPAN_TOKENS: usize = 2;
}

/// Service endpoints
pub mod endpoints {
    /// NER sidecar (spaCy-style model behind HTTP)
    pub const NER_SIDECAR_DEFAULT: &str = "http://127.0.0.1:8092/ner";
}

/// Timeouts
pub mod timeouts {
    /// NER sidecar request timeout
    pub const NER_REQUEST_MS: u64 = 2_000;

    /// Whole-request timeout at the HTTP boundary
    pub const HTTP_REQUEST_SECS: u64 = 30;
}

/// Server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
}
