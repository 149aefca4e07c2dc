use super::random_source::UniformSource;

/// Lomuto partition of `arr` around its last element.
///
/// Rearranges the slice in place so that every element `<=` the pivot comes
/// before it and every element `>` the pivot comes after it, then returns the
/// pivot's final index.
///
/// # Panics
/// Panics if `arr` is empty.
///
/// # Example
/// ```
/// use randselect::sort::partition;
///
/// let mut arr = [3, 8, 1, 9, 5];
/// let q = partition(&mut arr);
/// assert_eq!(q, 2);
/// assert_eq!(arr[q], 5);
/// assert!(arr[..q].iter().all(|&x| x <= 5));
/// assert!(arr[q + 1..].iter().all(|&x| x > 5));
/// ```
///
/// # Complexity
/// * Time: one pass over the slice, plus one swap per element `<=` the pivot
/// * Space: O(1)
pub fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    // `store` counts the elements confirmed <= pivot; the pivot stays at `last`
    // for the whole scan so it can be compared in place.
    let mut store = 0;
    for j in 0..last {
        if arr[j] <= arr[last] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}

/// Partitions `arr` around a pivot drawn uniformly at random.
///
/// The chosen element is moved to the end of the slice and [`partition`] does
/// the rest, so adversarial orderings (sorted, reversed) no longer force the
/// quadratic worst case.
///
/// # Panics
/// Panics if `arr` is empty.
pub fn random_partition<T, S>(arr: &mut [T], source: &mut S) -> usize
where
    T: Ord,
    S: UniformSource + ?Sized,
{
    let last = arr.len() - 1;
    let r = source.uniform(0, last);
    arr.swap(r, last);
    partition(arr)
}
