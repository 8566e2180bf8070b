/// Token count at which contextual pressure saturates at 1.0.
pub const SATURATION_TOKENS: f64 = 10_000.0;

/// Decay scale for short-text damping: factor = 1 - e^(-n / DAMPING_SCALE).
pub const DAMPING_SCALE: f64 = 50.0;

/// Decimal places kept by every metric.
pub const METRIC_PRECISION: i32 = 4;

/// Aggregate weight of the system component.
pub const WEIGHT_SYSTEM: f64 = 0.30;

/// Aggregate weight of the user component.
pub const WEIGHT_USER: f64 = 0.25;

/// Aggregate weight of the history component.
pub const WEIGHT_HISTORY: f64 = 0.15;

/// Aggregate weight of the rag component.
pub const WEIGHT_RAG: f64 = 0.20;

/// Aggregate weight of the tools component.
pub const WEIGHT_TOOLS: f64 = 0.10;

/// Interaction log capacity. Oldest entries are evicted past this.
pub const MEMORY_CAPACITY: usize = 20;

/// Capability list seeded into a fresh agent's tools component.
pub const DEFAULT_TOOLS: &str = "search_web, execute_code";

/// Field key under which `ContextState` records its whitespace token count.
pub const TOKENS_KEY: &str = "tokens";

// Regime thresholds shared by both classifiers.
pub const DENSITY_FLOOR: f64 = 0.7;
pub const DENSITY_CEILING: f64 = 0.85;
pub const PRESSURE_SHALLOW: f64 = 0.4;
pub const PRESSURE_SATURATION: f64 = 0.7;
pub const PRESSURE_ENTROPIC: f64 = 0.9;
pub const EQUILIBRIUM_LOW: f64 = 0.6;
pub const EQUILIBRIUM_HIGH: f64 = 0.8;
