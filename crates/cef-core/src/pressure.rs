use crate::aggregate::aggregate_density;
use crate::constants::SATURATION_TOKENS;
use crate::fields::ContextFields;
use crate::metrics::round4;
use crate::tokenizer::tokenize;

/// Contextual pressure: aggregate density scaled by total token volume,
/// saturating at 10,000 tokens.
///
/// Every text value is re-tokenized, under any key, not just the five
/// component names. Non-text values are skipped. Zero tokens yields 0.0.
pub fn pressure(fields: &ContextFields) -> f64 {
    let total_tokens: usize = fields.texts().map(|text| tokenize(text).len()).sum();
    if total_tokens == 0 {
        return 0.0;
    }
    let pc = aggregate_density(fields) * (total_tokens as f64 / SATURATION_TOKENS);
    round4(pc.min(1.0))
}
