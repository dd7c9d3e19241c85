use crate::Error;
use sinus_types::{SinusError, Track};
use std::time::Duration;

const SECOND: u64 = 1000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Returns `"<artist> - <title>"`, or just the title if there is no artist.
/// Transient title and artist take precedence over the stored ones.
pub fn format_track(track: &Track) -> String {
    let title = track.display_title();
    match track.display_artist() {
        Some(artist) => format!("{artist} - {title}"),
        None => title.to_string(),
    }
}

/// Human readable timestamp, `H:MM:SS` or `M:SS`.
pub fn timestamp(milliseconds: u64) -> String {
    let hours = milliseconds / HOUR;
    let minutes = (milliseconds / MINUTE) % 60;
    let seconds = (milliseconds / SECOND) % 60;

    if hours != 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Same as [`timestamp`] for a [`Duration`].
pub fn duration_to_string(duration: Duration) -> String {
    timestamp(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// Log and drop the error of a best effort remote call.
pub fn check_result<T>(result: Result<T, SinusError>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(why) => {
            tracing::error!("{what} failed: {why}");
            None
        },
    }
}

/// Log and drop a reply error.
pub fn check_reply<T>(result: Result<T, Error>) {
    if let Err(why) = result {
        tracing::error!("Error sending reply: {:?}", why);
    }
}
