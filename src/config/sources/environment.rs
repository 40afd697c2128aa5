//! Environment source: `COMBINE_<SECTION>__<KEY>`, e.g. `COMBINE_COLLECT__OUTPUT`.
//! List-valued keys take comma-separated values.

use config::Environment;

pub const ENV_PREFIX: &str = "COMBINE";

pub fn source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("collect.extensions")
        .with_list_parse_key("collect.ignore_patterns")
        .try_parsing(true)
}
