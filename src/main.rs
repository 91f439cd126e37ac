use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context as _, Result};
use chrono::Timelike as _;
use clap::Parser as _;
use cli::Args;
use clock::Zone;
use display::Inactive;
use graceful::SignalGuard;
use log::{debug, error, info, trace};
use wordclock_core::{ClockTime, Mask};

mod cli;
mod clock;
mod display;

const TICK: Duration = Duration::from_millis(100);

static STOP: AtomicBool = AtomicBool::new(false);

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    wordclock_core::validate_tables().context("checking phrase tables")?;

    let zone = Zone::from_arg(args.tz.as_deref());
    let inactive = match args.hidden {
        true => Inactive::Hidden,
        false => Inactive::Dim,
    };

    if !args.watch {
        let time = match args.at {
            Some(at) => ClockTime::from_24h(at.hour(), at.minute()).context("reading --at")?,
            None => zone.now()?,
        };
        let mask = time.resolve().context("resolving time")?;
        info!("{}", mask.words());
        return display::draw(&mut io::stdout().lock(), &mask, inactive).context("drawing grid");
    }

    let interval = Duration::from_secs(args.interval.max(1));
    let signal_guard = SignalGuard::new();

    let handle = thread::spawn(move || watch_loop(zone, inactive, interval));

    signal_guard.at_exit(move |_| {
        info!("shutting down");
        STOP.store(true, Ordering::Release);
        if handle.join().is_err() {
            error!("clock worker panicked");
        }
    });
    Ok(())
}

fn watch_loop(zone: Zone, inactive: Inactive, interval: Duration) {
    info!("redrawing every {}s", interval.as_secs());
    let mut shown: Option<Mask> = None;
    let mut next_read = Instant::now();

    while !STOP.load(Ordering::Acquire) {
        if Instant::now() >= next_read {
            next_read += interval;
            tick(&mut io::stdout().lock(), zone.now(), inactive, &mut shown);
        }
        thread::sleep(TICK);
    }
}

// Failures leave `shown` untouched so the next tick retries.
fn tick<W: Write>(
    out: &mut W,
    time: Result<ClockTime>,
    inactive: Inactive,
    shown: &mut Option<Mask>,
) {
    let mask = match time.and_then(|time| time.resolve().context("resolving time")) {
        Ok(mask) => mask,
        Err(err) => {
            error!("failed to read clock: {err:?}");
            return;
        }
    };
    if *shown == Some(mask) {
        trace!("phrase unchanged");
        return;
    }

    debug!("showing {}", mask.words());
    match display::redraw(out, &mask, inactive) {
        Ok(()) => *shown = Some(mask),
        Err(err) => error!("failed to draw clock: {err:?}"),
    }
}
