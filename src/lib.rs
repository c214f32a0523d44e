//! Measurement conversion engines for the conversion widgets.
//!
//! Every engine is a pure function over its inputs; the UI picks a category,
//! passes a value and unit id, and renders the returned results.

pub mod core;
pub mod shared;

pub use crate::core::features::{
    convert_between, convert_length, convert_temperature, convert_volume, convert_weight,
    get_all_units, get_length_unit_names, get_temperature_unit_names, get_unit_id_from_name,
    get_volume_unit_names, get_weight_unit_names, Category, CategoryEngine,
};
pub use crate::core::features::date_calculator::{add_days, days_between, offset_date, parse_date};
pub use crate::core::features::number_relation::{adjust_by_percent, compare, parse_number_input};
pub use crate::core::features::time_converter::{
    format_local_datetime_display, format_utc_datetime_display, from_local_datetime,
    from_unix_milliseconds, from_unix_seconds, from_utc_datetime, get_current_time,
    is_valid_datetime, is_valid_unix_milliseconds, is_valid_unix_seconds, Clock, SystemClock,
    TimeConverter,
};
pub use crate::core::features::unit_converter::parse_quantity;
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::format::format_number;
pub use crate::shared::settings::{JsonFileStore, MemoryStore, PreferenceStore, Preferences};
pub use crate::shared::types::*;

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`
/// (default `conversion_widgets=info`). Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("conversion_widgets=info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
}
