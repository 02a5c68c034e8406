/// Pairs adjacent entries of `standings` (0 vs 1, 2 vs 3, ...). With an odd
/// number of entries the last one is returned unpaired.
pub fn pair_adjacent<T: Copy>(standings: &[T]) -> (Vec<(T, T)>, Option<T>) {
    let pairs = standings
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();
    let unpaired = standings.chunks_exact(2).remainder().first().copied();
    (pairs, unpaired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_adjacent() {
        let (pairs, unpaired) = pair_adjacent(&[4, 1, 3, 2]);
        assert_eq!(pairs, vec![(4, 1), (3, 2)]);
        assert_eq!(unpaired, None);
    }

    #[test]
    fn test_pair_adjacent_odd() {
        let (pairs, unpaired) = pair_adjacent(&[5, 2, 9]);
        assert_eq!(pairs, vec![(5, 2)]);
        assert_eq!(unpaired, Some(9));
    }
}
