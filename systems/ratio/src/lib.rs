#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure ratio derivation dividing simulated series by static reference counts.

use choropleth_core::{round_to_hundredths, RatioSeries, ReferenceTable, StateSeries};

/// Divides every simulated value by the state's reference count.
///
/// Ratios are rounded to two decimals. A missing or zero reference count
/// marks the whole series as undefined (`None` at every year) rather than
/// zero. States that only appear in the reference table are not emitted.
#[must_use]
pub fn derive_ratio(series: &[StateSeries], references: &ReferenceTable) -> Vec<RatioSeries> {
    series
        .iter()
        .map(|state_series| RatioSeries {
            state: state_series.state.clone(),
            values: ratio_values(&state_series.values, references.get(&state_series.state)),
        })
        .collect()
}

fn ratio_values(values: &[f64], reference: Option<u32>) -> Vec<Option<f64>> {
    match reference.filter(|count| *count != 0) {
        Some(count) => {
            let denominator = f64::from(count);
            values
                .iter()
                .map(|value| Some(round_to_hundredths(value / denominator)))
                .collect()
        }
        None => vec![None; values.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::derive_ratio;
    use choropleth_core::{ReferenceCount, ReferenceTable, StateCode, StateSeries};

    fn series(code: &str, values: &[f64]) -> StateSeries {
        StateSeries {
            state: StateCode::new(code),
            values: values.to_vec(),
        }
    }

    fn references() -> ReferenceTable {
        ReferenceTable::from_entries(vec![
            ReferenceCount::new(StateCode::new("AL"), 6),
            ReferenceCount::new(StateCode::new("CT"), 0),
            ReferenceCount::new(StateCode::new("AK"), 0),
            ReferenceCount::new(StateCode::new("TX"), 15),
        ])
    }

    #[test]
    fn divides_and_rounds_each_year() {
        let ratios = derive_ratio(&[series("AL", &[4.35, 3.96, 4.09])], &references());

        assert_eq!(ratios.len(), 1);
        assert_eq!(ratios[0].state, StateCode::new("AL"));
        assert_eq!(ratios[0].values, vec![Some(0.72), Some(0.66), Some(0.68)]);
    }

    #[test]
    fn zero_reference_count_is_undefined_for_every_year() {
        let ratios = derive_ratio(&[series("CT", &[0.0, 0.0, 0.0])], &references());
        assert_eq!(ratios[0].values, vec![None, None, None]);
    }

    #[test]
    fn missing_reference_count_is_undefined_for_every_year() {
        let ratios = derive_ratio(&[series("ZZ", &[1.0, 2.0])], &references());
        assert_eq!(ratios[0].values, vec![None, None]);
        assert_eq!(ratios[0].value_at(0), None);
    }

    #[test]
    fn zero_values_with_a_reference_stay_zero() {
        let ratios = derive_ratio(&[series("TX", &[0.0, 14.7])], &references());
        assert_eq!(ratios[0].values, vec![Some(0.0), Some(0.98)]);
    }

    #[test]
    fn reference_only_states_are_not_emitted() {
        let ratios = derive_ratio(
            &[series("TX", &[14.7]), series("AL", &[4.35])],
            &references(),
        );
        let states: Vec<&str> = ratios.iter().map(|ratio| ratio.state.as_str()).collect();
        assert_eq!(states, vec!["TX", "AL"]);
    }

    #[test]
    fn empty_series_yield_empty_ratios() {
        let ratios = derive_ratio(&[series("AL", &[])], &references());
        assert!(ratios[0].values.is_empty());
    }
}
