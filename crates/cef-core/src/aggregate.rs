use crate::fields::{ComponentName, ContextFields};
use crate::metrics::{density, round4};

/// Weighted aggregate density over the five component fields.
///
/// Each component present contributes `density(text) * weight`. Absent
/// components contribute nothing and the remaining weights are NOT
/// renormalized, so a context missing `system` tops out at 0.70. A non-text
/// value under a component name counts as density 0.
pub fn aggregate_density(fields: &ContextFields) -> f64 {
    let total: f64 = ComponentName::ALL
        .into_iter()
        .filter_map(|name| {
            fields
                .component(name)
                .map(|value| density(value.as_text().unwrap_or("")) * name.weight())
        })
        .sum();
    round4(total)
}
