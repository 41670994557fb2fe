//! In-place sorting driven by a "more critical than" predicate.
//!
//! The ranking comparators use epsilon ties and are not total orders, which the standard library
//! sorts are allowed to reject with a panic. These routines only ever ask the predicate and stay
//! in bounds whatever it answers.

/// Slices up to this length are finished with insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 16;

/// Introsort: quicksort with median-of-three pivots, falling back to heapsort once the recursion
/// depth exceeds `2 * log2(n)`. O(n log n) worst case, O(log n) stack.
pub fn introsort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    let depth_limit = 2 * v.len().ilog2();
    introsort_loop(v, &mut is_less, depth_limit);
}

/// Moves the `k` least elements to the front of `v` in sorted order. The order of the remaining
/// elements is unspecified. `k` is clamped to the length of `v`.
///
/// O(n log k) time and O(1) extra space.
pub fn partial_sort<T, F>(v: &mut [T], k: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let k = k.min(v.len());
    if k == 0 {
        return;
    }

    build_heap(&mut v[..k], &mut is_less);
    for i in k..v.len() {
        if is_less(&v[i], &v[0]) {
            v.swap(0, i);
            sift_down(&mut v[..k], 0, &mut is_less);
        }
    }
    sort_heap(&mut v[..k], &mut is_less);
}

fn introsort_loop<T, F>(mut v: &mut [T], is_less: &mut F, mut depth_limit: u32)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > INSERTION_SORT_THRESHOLD {
        if depth_limit == 0 {
            heapsort(v, is_less);
            return;
        }
        depth_limit -= 1;

        let pivot = partition(v, is_less);
        let (left, right) = v.split_at_mut(pivot);
        let right = &mut right[1..];

        // Recurse into the shorter side to bound the stack depth.
        if left.len() < right.len() {
            introsort_loop(left, is_less, depth_limit);
            v = right;
        } else {
            introsort_loop(right, is_less, depth_limit);
            v = left;
        }
    }
    insertion_sort(v, is_less);
}

/// Partitions around a median-of-three pivot and returns the pivot's final index.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;
    let pivot = median_of_three(v, 0, v.len() / 2, last, is_less);
    v.swap(pivot, last);

    let mut store = 0;
    for i in 0..last {
        if is_less(&v[i], &v[last]) {
            v.swap(i, store);
            store += 1;
        }
    }
    v.swap(store, last);
    store
}

fn median_of_three<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[a], &v[b]) {
        if is_less(&v[b], &v[c]) {
            b
        } else if is_less(&v[a], &v[c]) {
            c
        } else {
            a
        }
    } else if is_less(&v[a], &v[c]) {
        a
    } else if is_less(&v[b], &v[c]) {
        c
    } else {
        b
    }
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    build_heap(v, is_less);
    sort_heap(v, is_less);
}

/// Turns `v` into a max-heap: no child is greater than its parent.
fn build_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node, is_less);
    }
}

/// Repeatedly moves the heap maximum behind the shrinking heap.
fn sort_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}

fn sift_down<T, F>(heap: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= heap.len() {
            break;
        }
        if child + 1 < heap.len() && is_less(&heap[child], &heap[child + 1]) {
            child += 1;
        }
        if !is_less(&heap[node], &heap[child]) {
            break;
        }
        heap.swap(node, child);
        node = child;
    }
}
