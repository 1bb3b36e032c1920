pub mod db;

/// Runtime recorded for every function created through the API. The public
/// mutation only accepts a name, so the column is filled server-side.
pub const DEFAULT_RUNTIME: &str = "python3.8";
