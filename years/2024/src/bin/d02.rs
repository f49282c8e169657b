use lib::prelude::*;

use std::iter::from_fn;

#[entry]
fn main(mut input: IStr) -> Result<(usize, usize)> {
    let reports = parse(&mut input)?;
    log::debug!("parsed {} reports", reports.len());
    Ok((count_safe(&reports), count_safe_with_one_removal(&reports)))
}

#[derive(Debug)]
struct Report {
    levels: Vec<i64>,
}

lib::from_input! {
    |levels: Vec<i64>| -> Report {
        ensure!(levels.len() > 1, "report needs at least two levels");
        Ok(Report { levels })
    }
}

fn parse(input: &mut IStr) -> Result<Vec<Report>> {
    let mut reports = Vec::new();

    for report in input.lines::<Report>() {
        reports.push(report?);
    }

    Ok(reports)
}

fn count_safe(reports: &[Report]) -> usize {
    reports
        .iter()
        .filter(|r| is_safe(r.levels.iter().copied()))
        .count()
}

fn count_safe_with_one_removal(reports: &[Report]) -> usize {
    reports
        .iter()
        .filter(|r| {
            is_safe(r.levels.iter().copied())
                || (0..r.levels.len()).any(|n| is_safe(without(&r.levels, n)))
        })
        .count()
}

/// Test if levels are all increasing or all decreasing by steps of 1 to 3.
///
/// The direction is decided by the first two levels. Fewer than two levels
/// are trivially safe. A step which overflows is never safe.
fn is_safe(levels: impl IntoIterator<Item = i64>) -> bool {
    let mut steps = pairs(levels).map(|(a, b)| b.checked_sub(a)).peekable();

    let Some(&first) = steps.peek() else {
        return true;
    };

    match first {
        Some(d) if d > 0 => steps.all(|d| matches!(d, Some(1..=3))),
        Some(_) => steps.all(|d| matches!(d, Some(-3..=-1))),
        None => false,
    }
}

/// Iterate over levels with the one at position `n` redacted.
#[inline]
fn without(levels: &[i64], n: usize) -> impl Iterator<Item = i64> + '_ {
    levels
        .iter()
        .enumerate()
        .filter(move |&(i, _)| i != n)
        .map(|(_, &v)| v)
}

#[inline]
fn pairs(it: impl IntoIterator<Item = i64>) -> impl Iterator<Item = (i64, i64)> {
    let mut it = it.into_iter();
    let mut buf = it.next();

    from_fn(move || {
        let a = buf.take()?;
        let b = it.next()?;
        buf = Some(b);
        Some((a, b))
    })
}
