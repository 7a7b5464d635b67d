//! # Batch Concurrency
//!
//! With the ``rayon`` feature, batches are mapped on the ``rayon`` global pool;
//! otherwise sequentially. Either way, outputs are in input order.

use crate::errors::UTResult;

/// Map a fallible function over a batch.
///
/// ## Arguments
/// * `items` - the batch.
/// * `f` - the per-item function.
///
/// ## Returns
/// The outputs, in input order; or the first error encountered.
pub fn try_map_batch<I, O, F>(
    items: &[I],
    f: F,
) -> UTResult<Vec<O>>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> UTResult<O> + Send + Sync,
{
    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            use rayon::prelude::*;
            items.par_iter().map(f).collect()
        } else {
            items.iter().map(f).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UTError;

    #[test]
    fn test_order_is_preserved() {
        let items: Vec<u32> = (0..1000).collect();
        let doubled = try_map_batch(&items, |&x| Ok(x * 2)).unwrap();
        assert_eq!(doubled, items.iter().map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_error_propagates() {
        let items: Vec<u32> = (0..100).collect();
        let result = try_map_batch(&items, |&x| {
            if x == 42 {
                Err(UTError::InvalidId { id: x })
            } else {
                Ok(x)
            }
        });
        assert!(matches!(result, Err(UTError::InvalidId { id: 42 })));
    }

    #[test]
    fn test_empty() {
        let items: Vec<&str> = vec![];
        let out: Vec<usize> = try_map_batch(&items, |s| Ok(s.len())).unwrap();
        assert!(out.is_empty());
    }
}
