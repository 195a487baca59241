//! Combined output of one batch run.

use serde::Serialize;

use super::{Corporate, Individual};

/// Snapshot of the customers gathered by a single batch run.
///
/// Either collection may be empty when its source failed or held no rows, but
/// [`CustomerBatchQuery::run`](crate::domain::ports::CustomerBatchQuery::run)
/// never hands out a result where both are empty. Records keep the order the
/// source returned them in.
///
/// # Examples
/// ```
/// use customer_batch::domain::{BatchResult, Corporate};
///
/// let result = BatchResult::new(Vec::new(), vec![Corporate::new(10, "法人X")]);
/// assert!(result.individuals().is_empty());
/// assert_eq!(result.corporates().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    individuals: Vec<Individual>,
    corporates: Vec<Corporate>,
}

impl BatchResult {
    /// Assemble a result from the two collections.
    #[must_use]
    pub const fn new(individuals: Vec<Individual>, corporates: Vec<Corporate>) -> Self {
        Self {
            individuals,
            corporates,
        }
    }

    /// Individuals in source order.
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Corporates in source order.
    #[must_use]
    pub fn corporates(&self) -> &[Corporate] {
        &self.corporates
    }

    /// Total number of records across both collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len() + self.corporates.len()
    }

    /// Whether both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty() && self.corporates.is_empty()
    }

    /// Take ownership of both collections.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Individual>, Vec<Corporate>) {
        (self.individuals, self.corporates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn serialises_both_collections() {
        let result = BatchResult::new(
            vec![Individual::new(1, "個人A")],
            vec![Corporate::new(10, "法人X")],
        );

        let value = serde_json::to_value(&result).expect("serialise");
        assert_eq!(
            value,
            json!({
                "individuals": [{ "id": 1, "name": "個人A" }],
                "corporates": [{ "id": 10, "name": "法人X" }],
            })
        );
    }

    #[rstest]
    fn counts_records_across_collections() {
        let result = BatchResult::new(
            vec![Individual::new(1, "a"), Individual::new(2, "b")],
            vec![Corporate::new(10, "x")],
        );
        assert_eq!(result.len(), 3);
        assert!(!result.is_empty());
        assert!(BatchResult::default().is_empty());
    }

    #[rstest]
    fn into_parts_preserves_order() {
        let individuals = vec![Individual::new(3, "c"), Individual::new(1, "a")];
        let result = BatchResult::new(individuals.clone(), Vec::new());

        let (taken, corporates) = result.into_parts();
        assert_eq!(taken, individuals);
        assert!(corporates.is_empty());
    }
}
