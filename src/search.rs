//! The per-length search: run the odometer dry, classifying as it goes.

use crate::{
    classify::{Classifier, Outcome},
    error::Result,
    lattice::Lattice,
    odometer::Odometer,
    tally::Tally,
};

/// Count every canonical snake of `cells` cells.
///
/// `progress` is called with the running tally every `every` candidates.
pub fn count_snakes<L, const D: usize>(
    cells: usize,
    every: u64,
    mut progress: impl FnMut(&Tally),
) -> Result<Tally>
where
    L: Lattice<D>,
{
    let len = cells.saturating_sub(1);
    let mut classifier = Classifier::<L, D>::new(len)?;
    let mut odometer = Odometer::<L, D>::new(len);
    let mut tally = Tally::new();
    let mut tick = 0;

    loop {
        let s = odometer.as_slice();
        if cfg!(any(debug_assertions, feature = "diagnostics")) {
            assert!(L::is_canonical_form(s), "{odometer} is not canonical");
        }
        tally.strings += 1;

        match classifier.classify_unchecked(s) {
            Outcome::Rejected => {}
            Outcome::SelfAdjoining { at } => {
                tracing::trace!(%odometer, at, "fast-forwarding past doomed prefix");
                odometer.fast_forward(at);
            }
            Outcome::Accepted(snake) => tally.record(snake),
        }

        tick += 1;
        if tick == every {
            tick = 0;
            progress(&tally);
        }

        if !odometer.advance() {
            return Ok(tally);
        }
    }
}
