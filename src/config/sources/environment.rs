//! Environment source: TREEMATCH_<SECTION>__<KEY>, e.g. TREEMATCH_MATCHING__SIMILARITY_THRESHOLD=0.8

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("TREEMATCH")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
