// crates/meteomap-core/src/search.rs
use crate::common::DatasetStats;
use crate::model::{Feature, FeatureCollection};
use crate::text::fold_key;
use crate::traits::FeatureSearch;
use std::collections::BTreeSet;

impl FeatureSearch for FeatureCollection {
    fn stats(&self) -> DatasetStats {
        DatasetStats {
            features: self.len(),
            countries: self.countries().len(),
        }
    }

    fn countries(&self) -> Vec<&str> {
        self.features()
            .iter()
            .map(|f| f.properties.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn features_by_country<'a>(&'a self, country: &str) -> Vec<(usize, &'a Feature)> {
        self.features()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.properties.country == country)
            .collect()
    }

    fn find_by_code(&self, code: &str) -> Option<&Feature> {
        let code = code.trim();
        self.features()
            .iter()
            .find(|f| f.properties.code.eq_ignore_ascii_case(code))
    }

    fn find_by_name_substring(&self, substr: &str) -> Vec<&Feature> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.features()
            .iter()
            .filter(|f| fold_key(&f.properties.name).contains(&q))
            .collect()
    }
}
