use std::time::Duration;

use polysnakes::{
    count_snakes,
    lattice::{Cubic, Lattice, LatticeKind, Square},
    stopwatch::Stopwatch,
    tally::{headers, Tally},
};

use crate::{progress_line, LatticeOpt, Opts};

fn header_row(kind: LatticeKind) -> String {
    format!("| n | Strings | {} |", headers(kind).join(" | "))
}

fn table_row(n: usize, tally: &Tally, kind: LatticeKind, elapsed: Duration, asleep: Duration) -> String {
    let columns: Vec<String> = tally.columns(kind).iter().map(u64::to_string).collect();

    format!(
        "| {n} | {} | {} | ({} sec, {} sec asleep)",
        tally.strings,
        columns.join(" | "),
        elapsed.as_secs(),
        asleep.as_secs()
    )
}

fn run<L, const D: usize>(opts: &Opts) -> polysnakes::Result<()>
where
    L: Lattice<D>,
{
    let start = opts.n.unwrap_or(3).max(3);

    println!("{}", header_row(L::KIND));

    let bar = progress_line();

    for n in start.. {
        if opts.until.is_some_and(|until| n > until) {
            break;
        }

        tracing::info!(n, lattice = L::NAME, "counting snakes");

        let mut watch = Stopwatch::start();
        let tally = count_snakes::<L, D>(n, opts.tick, |tally| {
            let (elapsed, asleep) = watch.tick();
            bar.set_message(table_row(n, tally, L::KIND, elapsed, asleep));
        })?;
        let (elapsed, asleep) = watch.tick();

        bar.set_message("");
        bar.suspend(|| println!("{}", table_row(n, &tally, L::KIND, elapsed, asleep)));

        tracing::info!(
            n,
            strings = tally.strings,
            secs = elapsed.as_secs(),
            asleep = asleep.as_secs(),
            "finished"
        );
    }

    bar.finish_and_clear();

    Ok(())
}

pub fn enumerate(opts: &Opts) -> polysnakes::Result<()> {
    match opts.lattice {
        LatticeOpt::Cube => run::<Cubic, 3>(opts),
        LatticeOpt::Square => run::<Square, 2>(opts),
    }
}
