use chrono::NaiveTime;
use clap::Parser;

pub const DEFAULT_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Parser)]
#[command(name = "wordclock")]
#[command(author, version, about = "Tell the time in words on an 11x11 letter grid")]
pub struct Args {
    /// Time zone name (e.g. Europe/Berlin) or UTC offset (e.g. +05:30); defaults to the system zone
    #[arg(long, env = "WORDCLOCK_TZ")]
    pub tz: Option<String>,

    /// Hide unlit letters instead of dimming them
    #[arg(long)]
    pub hidden: bool,

    /// Keep redrawing the clock until interrupted
    #[arg(long, short)]
    pub watch: bool,

    /// Seconds between clock reads in watch mode
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,

    /// Show a fixed 24-hour time (HH:MM) instead of the current one
    #[arg(long, value_parser = parse_at, conflicts_with = "watch")]
    pub at: Option<NaiveTime>,
}

fn parse_at(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|err| format!("expected HH:MM: {err}"))
}
