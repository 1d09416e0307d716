//! Stable sorting over declared sortable columns.
use super::{CollectionEntity, FieldValue};
use std::cmp::Ordering;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The active sort, if any. A `None` key leaves the source order untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortConfig<F> {
    pub key: Option<F>,
    pub direction: SortDirection,
}

impl<F> Default for SortConfig<F> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Asc,
        }
    }
}

impl<F: Copy + PartialEq> SortConfig<F> {
    /// Header-click rule: the active column flips direction, any other
    /// column becomes the active one, ascending.
    pub fn toggle(&mut self, key: F) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }
}

/// Compare two field values with a total order. A missing value sorts before
/// any present value so that partially-populated entities order
/// deterministically; numbers sort before text.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
        (FieldValue::Missing, _) => Ordering::Less,
        (_, FieldValue::Missing) => Ordering::Greater,
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
        (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
    }
}

/// Sort `items` in place according to `config`.
///
/// `slice::sort_by` is guaranteed stable, so ascending ties keep their input
/// order. Descending is produced by reversing the ascending result, so it is
/// the exact reverse of the ascending order, ties included.
pub fn sort_items<E: CollectionEntity>(items: &mut [E], config: &SortConfig<E::Field>) {
    let Some(key) = config.key else {
        return;
    };
    items.sort_by(|a, b| compare_values(&a.field(key), &b.field(key)));
    if config.direction == SortDirection::Desc {
        items.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::{TestEntity, TestField};

    fn items() -> Vec<TestEntity> {
        vec![
            TestEntity::new("a", "Mug", 12.0),
            TestEntity::new("b", "Abacus", 30.0),
            TestEntity::new("c", "Lamp", 12.0),
            TestEntity::new("d", "Mug", 7.5),
        ]
    }

    fn names(items: &[TestEntity]) -> Vec<&str> {
        items.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn ascending_sort_is_stable() {
        let mut sorted = items();
        sort_items(
            &mut sorted,
            &SortConfig {
                key: Some(TestField::Price),
                direction: SortDirection::Asc,
            },
        );
        // The two 12.0 entries keep their input order (Mug before Lamp).
        assert_eq!(names(&sorted), vec!["Mug", "Mug", "Lamp", "Abacus"]);
        assert_eq!(sorted[1].id.as_str(), "a");
        assert_eq!(sorted[2].id.as_str(), "c");
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending() {
        let config_asc = SortConfig {
            key: Some(TestField::Price),
            direction: SortDirection::Asc,
        };
        let mut asc = items();
        sort_items(&mut asc, &config_asc);
        let mut desc = asc.clone();
        sort_items(
            &mut desc,
            &SortConfig {
                key: Some(TestField::Price),
                direction: SortDirection::Desc,
            },
        );
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn missing_values_sort_first() {
        let mut sorted = vec![
            TestEntity::new("a", "Kettle", 5.0),
            TestEntity::new("b", "Mystery", f64::NAN).without_price(),
            TestEntity::new("c", "Plate", 2.0),
        ];
        sort_items(
            &mut sorted,
            &SortConfig {
                key: Some(TestField::Price),
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(names(&sorted), vec!["Mystery", "Plate", "Kettle"]);
    }

    #[test]
    fn no_key_preserves_insertion_order() {
        let mut unsorted = items();
        sort_items(&mut unsorted, &SortConfig::default());
        assert_eq!(names(&unsorted), names(&items()));
    }

    #[test]
    fn toggle_flips_active_column_and_resets_new_column() {
        let mut config: SortConfig<TestField> = SortConfig::default();
        config.toggle(TestField::Name);
        assert_eq!(config.key, Some(TestField::Name));
        assert_eq!(config.direction, SortDirection::Asc);
        config.toggle(TestField::Name);
        assert_eq!(config.direction, SortDirection::Desc);
        config.toggle(TestField::Price);
        assert_eq!(config.key, Some(TestField::Price));
        assert_eq!(config.direction, SortDirection::Asc);
    }
}
