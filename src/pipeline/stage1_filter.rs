use crate::model::{CategoryFilter, Installation, NoData, Outcome, Selection};

/// Read-only projection of the base table for one selection. Record order
/// follows the base table.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    selection: Selection,
    records: Vec<&'a Installation>,
}

impl<'a> FilteredView<'a> {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn records(&self) -> &[&'a Installation] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Installation> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Narrows the view to one category without going back to the base
    /// table. The view's selection is updated accordingly.
    pub fn refine(&self, category: CategoryFilter) -> FilteredView<'a> {
        FilteredView {
            selection: self.selection.with_category(category),
            records: self
                .records
                .iter()
                .copied()
                .filter(|r| category.matches(r.energy_source_level_2))
                .collect(),
        }
    }

    /// Empty views become an explicit `NoData` instead of flowing into
    /// aggregates and ratios.
    pub fn require_data(self) -> Outcome<FilteredView<'a>> {
        if self.records.is_empty() {
            Outcome::NoData(NoData::for_selection(&self.selection))
        } else {
            Outcome::Ready(self)
        }
    }
}

pub fn filter<'a>(records: &'a [Installation], selection: &Selection) -> FilteredView<'a> {
    let records = records
        .iter()
        .filter(|r| {
            selection.canton.matches(&r.canton_name)
                && selection.category.matches(r.energy_source_level_2)
        })
        .collect::<Vec<_>>();
    tracing::debug!(
        canton = selection.canton.label(),
        category = selection.category.label(),
        matched = records.len(),
        "filtered installations"
    );
    FilteredView {
        selection: selection.clone(),
        records,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_filter.rs"]
mod tests;
