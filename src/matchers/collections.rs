use std::fmt;

use super::{Description, Matcher};

/// Matches a sequence holding exactly the expected items, in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HasOnlyItemsInOrder<E> {
    expected: Vec<E>,
}

/// Matches a collection holding exactly the expected items, in any order.
///
/// Duplicates count: `[1, 1, 2]` matches `contains_in_any_order([1, 2, 1])`
/// but not `contains_in_any_order([1, 2, 2])`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainsInAnyOrder<E> {
    expected: Vec<E>,
}

/// Matches sequences equal to `expected`, element by element.
pub fn has_only_items_in_order<E, I>(expected: I) -> HasOnlyItemsInOrder<E>
where
    I: IntoIterator<Item = E>,
{
    HasOnlyItemsInOrder {
        expected: expected.into_iter().collect(),
    }
}

/// Matches collections holding the same items as `expected`, with the same
/// multiplicities, ignoring order.
pub fn contains_in_any_order<E, I>(expected: I) -> ContainsInAnyOrder<E>
where
    I: IntoIterator<Item = E>,
{
    ContainsInAnyOrder {
        expected: expected.into_iter().collect(),
    }
}

impl<E, T> Matcher<T> for HasOnlyItemsInOrder<E>
where
    E: PartialEq + fmt::Debug,
    T: AsRef<[E]> + ?Sized,
{
    fn matches(&self, item: &T) -> bool {
        item.as_ref() == self.expected.as_slice()
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("only the items ")
            .append_value(&self.expected)
            .append_text(" in order");
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        let actual = item.as_ref();
        let position = actual
            .iter()
            .zip(&self.expected)
            .position(|(actual, expected)| actual != expected);
        description.append_text("was ").append_value(actual);
        match position {
            Some(index) => {
                description
                    .append_text(", first difference at index ")
                    .append_value(&index);
            }
            None => {
                description
                    .append_text(" with ")
                    .append_value(&actual.len())
                    .append_text(" items instead of ")
                    .append_value(&self.expected.len());
            }
        }
    }
}

impl<E, T> Matcher<T> for ContainsInAnyOrder<E>
where
    E: PartialEq + fmt::Debug,
    T: ?Sized,
    for<'a> &'a T: IntoIterator<Item = &'a E>,
{
    fn matches(&self, item: &T) -> bool {
        let (unexpected, missing) = self.partition(item);
        unexpected.is_empty() && missing.is_empty()
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("the items ")
            .append_value(&self.expected)
            .append_text(" in any order");
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        let (unexpected, missing) = self.partition(item);
        if !unexpected.is_empty() {
            description.append_text("unexpected ").append_value(&unexpected);
        }
        if !missing.is_empty() {
            if !unexpected.is_empty() {
                description.append_text(", ");
            }
            description.append_text("missing ").append_value(&missing);
        }
    }
}

impl<E: PartialEq> ContainsInAnyOrder<E> {
    /// Pairs each actual item with one unclaimed expected item. Returns the
    /// actual items left without a partner and the expected items nobody
    /// claimed.
    fn partition<'a, T>(&'a self, item: &'a T) -> (Vec<&'a E>, Vec<&'a E>)
    where
        T: ?Sized,
        &'a T: IntoIterator<Item = &'a E>,
    {
        let mut claimed = vec![false; self.expected.len()];
        let mut unexpected = Vec::new();
        for actual in item {
            let partner = self
                .expected
                .iter()
                .enumerate()
                .position(|(index, expected)| !claimed[index] && expected == actual);
            match partner {
                Some(index) => claimed[index] = true,
                None => unexpected.push(actual),
            }
        }
        let missing = self
            .expected
            .iter()
            .zip(claimed)
            .filter_map(|(expected, claimed)| (!claimed).then_some(expected))
            .collect();
        (unexpected, missing)
    }
}
