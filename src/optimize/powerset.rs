use super::{OptimizeError, Result};

/// Largest input [`combinations`] will enumerate. The powerset doubles with
/// every item, so this is a fallback for small elections only.
pub const MAX_POWERSET_ITEMS: usize = 25;

/// Zero-padded binary digits of `value`, most significant first.
fn binary_digits(value: u64, num_digits: usize) -> Result<Vec<bool>> {
    let width = (u64::BITS - value.leading_zeros()) as usize;
    if width > num_digits {
        return Err(OptimizeError::InvalidSubsetDigits {
            value,
            digits: num_digits,
        });
    }

    Ok((0..num_digits)
        .rev()
        .map(|shift| shift < 64 && (value >> shift) & 1 == 1)
        .collect())
}

/// Every subset of `items`.
///
/// Subset `i` takes item `j` when digit `j` of `i`, written in binary and
/// padded to `items.len()` digits, is set. Items keep their relative order
/// inside each subset.
pub fn combinations<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    if items.len() > MAX_POWERSET_ITEMS {
        return Err(OptimizeError::TooManyItems(items.len()));
    }

    let count = 1u64 << items.len();
    let mut powerset = Vec::with_capacity(count as usize);

    for mask in 0..count {
        let digits = binary_digits(mask, items.len())?;
        let subset = items
            .iter()
            .zip(digits)
            .filter_map(|(item, take)| if take { Some(item.clone()) } else { None })
            .collect();
        powerset.push(subset);
    }

    log::trace!("enumerated {} subsets of {} items", powerset.len(), items.len());
    Ok(powerset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_one_subset() {
        let subsets = combinations::<u8>(&[]).unwrap();
        assert_eq!(subsets, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn subsets_follow_mask_order() {
        let subsets = combinations(&['a', 'b', 'c']).unwrap();
        assert_eq!(subsets.len(), 8);
        assert_eq!(subsets[0], Vec::<char>::new());
        assert_eq!(subsets[1], vec!['c']);
        assert_eq!(subsets[4], vec!['a']);
        assert_eq!(subsets[5], vec!['a', 'c']);
        assert_eq!(subsets[7], vec!['a', 'b', 'c']);
    }

    #[test]
    fn subsets_are_distinct_and_drawn_from_input() {
        let items = [1, 2, 3, 4, 5];
        let mut subsets = combinations(&items).unwrap();
        assert_eq!(subsets.len(), 32);
        for subset in &subsets {
            assert!(subset.windows(2).all(|w| w[0] < w[1]));
            assert!(subset.iter().all(|x| items.contains(x)));
        }
        subsets.sort();
        subsets.dedup();
        assert_eq!(subsets.len(), 32);
    }

    #[test]
    fn binary_digits_padding() {
        assert_eq!(binary_digits(5, 4).unwrap(), vec![false, true, false, true]);
        assert_eq!(binary_digits(0, 0).unwrap(), Vec::<bool>::new());
        assert_eq!(
            binary_digits(8, 3).unwrap_err(),
            OptimizeError::InvalidSubsetDigits { value: 8, digits: 3 }
        );
    }

    #[test]
    fn oversized_input_rejected() {
        let items = vec![0u8; MAX_POWERSET_ITEMS + 1];
        assert_eq!(
            combinations(&items).unwrap_err(),
            OptimizeError::TooManyItems(MAX_POWERSET_ITEMS + 1)
        );
    }
}
