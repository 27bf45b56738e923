//! Occurrence indexing over ordered sibling lists.

/// Returns the `index`-th item (0-based) whose name equals `name`, scanning
/// `items` in order.
pub fn nth_named<T, F>(items: impl IntoIterator<Item = T>, name: &str, index: usize, name_of: F) -> Option<T>
where
    F: Fn(&T) -> String,
{
    items
        .into_iter()
        .filter(|item| name_of(item) == name)
        .nth(index)
}

/// Returns the 0-based position of `target` among the items sharing its name.
pub fn occurrence_index<T, F>(items: &[T], target: &T, name_of: F) -> Option<usize>
where
    T: PartialEq,
    F: Fn(&T) -> String,
{
    let name = name_of(target);
    items
        .iter()
        .filter(|item| name_of(*item) == name)
        .position(|item| item == target)
}
