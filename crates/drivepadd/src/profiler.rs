use std::time::Instant;

use drivepad_control::Decoder;
use drivepad_controller::{Discovery, PadSession, Result};

use crate::print_info;

const BATCH_SIZE: usize = 1000;
const BATCH_COUNT: usize = 10;
const KEEP_BEST: usize = 5;

/// Throughput harness for the read path.
///
/// Reads and decodes ten batches of a thousand events, timing each batch
/// against the wall clock, then reports the controller's score. Purely
/// observational; no control state is touched.
pub(crate) fn run<B: Discovery>(session: &mut PadSession<B>, decoder: &Decoder) -> Result<()> {
    print_info!("measuring events per second. move both sticks around as fast as you can.");
    print_info!(
        "a rate is printed every {BATCH_SIZE} events; after {BATCH_COUNT} batches the score follows."
    );

    let mut rates = Vec::with_capacity(BATCH_COUNT);
    while rates.len() < BATCH_COUNT {
        let start = Instant::now();
        for _ in 0..BATCH_SIZE {
            let raw = session.read_raw()?;
            let _ = decoder.decode(raw);
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = BATCH_SIZE as f64 / start.elapsed().as_secs_f64();
        print_info!("events per second: {rate:.1}");
        rates.push(rate);
    }

    let (max, average) = summarize(&rates);
    print_info!("results: events per second max {max:.1}, average {average:.1}");
    Ok(())
}

/// The slowest five batches are treated as warm-up noise; the score is
/// the maximum and mean of the remaining ones.
fn summarize(rates: &[f64]) -> (f64, f64) {
    let mut sorted = rates.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let best = sorted.split_off(sorted.len().saturating_sub(KEEP_BEST));
    let max = best.last().copied().unwrap_or(0.0);
    #[allow(clippy::cast_precision_loss)]
    let average = best.iter().sum::<f64>() / best.len().max(1) as f64;
    (max, average)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_drops_the_five_lowest() {
        let rates = [
            100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0,
        ];
        let (max, average) = summarize(&rates);
        assert!((max - 1000.0).abs() < f64::EPSILON);
        assert!((average - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summarize_is_order_independent() {
        let rates = [
            900.0, 100.0, 1000.0, 300.0, 700.0, 200.0, 800.0, 400.0, 600.0, 500.0,
        ];
        let (max, average) = summarize(&rates);
        assert!((max - 1000.0).abs() < f64::EPSILON);
        assert!((average - 800.0).abs() < f64::EPSILON);
    }
}
