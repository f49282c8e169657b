use std::collections::HashMap;

use lib::prelude::*;

#[entry]
fn main(mut input: IStr) -> Result<(u64, i64)> {
    let pairs = parse(&mut input)?;
    log::debug!("parsed {} pairs", pairs.len());
    Ok((total_distance(&pairs)?, similarity_score(&pairs)?))
}

#[derive(Debug, Clone, Copy)]
struct Pair {
    left: i64,
    right: i64,
}

lib::from_input! {
    |(left, right): (i64, i64)| -> Pair {
        Ok(Pair { left, right })
    }
}

fn parse(input: &mut IStr) -> Result<Vec<Pair>> {
    let mut pairs = Vec::new();

    for pair in input.lines::<Pair>() {
        pairs.push(pair?);
    }

    Ok(pairs)
}

/// Sum of the distances between the left and right columns, each sorted on
/// its own.
fn total_distance(pairs: &[Pair]) -> Result<u64> {
    let mut a = pairs.iter().map(|p| p.left).collect::<Vec<_>>();
    let mut b = pairs.iter().map(|p| p.right).collect::<Vec<_>>();

    a.sort_unstable();
    b.sort_unstable();

    a.iter()
        .zip(&b)
        .try_fold(0u64, |sum, (l, r)| sum.checked_add(l.abs_diff(*r)))
        .context("total distance overflows")
}

/// Sum of every left value multiplied by the number of times it occurs in the
/// right column.
fn similarity_score(pairs: &[Pair]) -> Result<i64> {
    let mut counts = HashMap::<i64, i64>::new();

    for p in pairs {
        *counts.entry(p.right).or_default() += 1;
    }

    pairs
        .iter()
        .try_fold(0i64, |sum, p| {
            let count = counts.get(&p.left).copied().unwrap_or_default();
            sum.checked_add(p.left.checked_mul(count)?)
        })
        .context("similarity score overflows")
}

#[cfg(test)]
mod tests {
    use lib::input::{ErrorKind, IStrError};

    use super::*;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    fn example() -> Vec<Pair> {
        parse(&mut IStr::new(EXAMPLE.as_bytes())).unwrap()
    }

    #[test]
    fn test_example() {
        let pairs = example();
        assert_eq!(pairs.len(), 6);
        assert_eq!(total_distance(&pairs).unwrap(), 11);
        assert_eq!(similarity_score(&pairs).unwrap(), 31);
    }

    #[test]
    fn test_total_distance_ignores_pairing() {
        let pairs = example();

        let mut rotated = pairs.clone();
        let right = pairs.iter().map(|p| p.right).cycle().skip(2);

        for (p, r) in rotated.iter_mut().zip(right) {
            p.right = r;
        }

        rotated.reverse();

        assert_eq!(total_distance(&rotated).unwrap(), 11);
        assert_eq!(similarity_score(&rotated).unwrap(), 31);
    }

    #[test]
    fn test_empty() {
        assert_eq!(total_distance(&[]).unwrap(), 0);
        assert_eq!(similarity_score(&[]).unwrap(), 0);
        assert!(parse(&mut IStr::new(b"\n\n")).unwrap().is_empty());
    }

    #[test]
    fn test_extreme_values() {
        let max = parse(&mut IStr::new(b"9223372036854775807 9223372036854775807\n")).unwrap();
        assert_eq!(total_distance(&max).unwrap(), 0);
        assert_eq!(similarity_score(&max).unwrap(), i64::MAX);

        let twice = [max[0], max[0]];
        assert_eq!(total_distance(&twice).unwrap(), 0);

        let error = similarity_score(&twice).unwrap_err();
        assert_eq!(error.to_string(), "similarity score overflows");

        let apart = Pair {
            left: i64::MIN,
            right: i64::MAX,
        };

        assert_eq!(total_distance(&[apart]).unwrap(), u64::MAX);
        assert_eq!(similarity_score(&[apart]).unwrap(), 0);

        let error = total_distance(&[apart, apart]).unwrap_err();
        assert_eq!(error.to_string(), "total distance overflows");
    }

    #[test]
    fn test_missing_column() {
        let error = parse(&mut IStr::new(b"3   4\n4\n")).unwrap_err();
        let error = error.downcast_ref::<IStrError>().unwrap();
        assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));
        assert_eq!(error.span(), 6..7);
    }

    #[test]
    fn test_extra_column() {
        let error = parse(&mut IStr::new(b"3   4   5\n")).unwrap_err();
        let error = error.downcast_ref::<IStrError>().unwrap();
        assert!(matches!(error.kind(), ErrorKind::TrailingInput(..)));
    }
}
