//! Playlist name synthesis and cross-registry canonicalization.
//!
//! Three naming schemes describe the same logical weekly playlist:
//!
//! - `"Weekly Mix DD.MM.YYYY"` — the community site's registry
//! - `"JMS dd.mm.yy"` — the short form this crate generates (canonical)
//! - `"JMS Mix N"` — an unrelated numbered series, passed through opaque
//!
//! [`canonicalize`] maps the long site form onto the short form and leaves
//! everything else untouched; [`close_known_names`] applies it across a
//! whole registry snapshot so membership checks succeed no matter which
//! spelling a registry used. This module is the correctness-critical piece
//! of duplicate suppression, so it stays free of any fetching concerns.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

/// Prefix of generated playlist names.
pub const PLAYLIST_PREFIX: &str = "JMS";

/// Site registry long form: `Weekly Mix D.M.YYYY` (day and month may lack
/// zero-padding; the site's own data is inconsistent about it).
static WEEKLY_MIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Weekly Mix (\d{1,2})\.(\d{1,2})\.(\d{4})$").unwrap());

/// Short form with tolerated separators: site pages occasionally render
/// `JMS 03_05_24` or `JMS_03.05.24`; underscores normalize to dots.
static JMS_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^JMS[_ ]+(\d{2})[._](\d{2})[._](\d{2})$").unwrap());

/// Synthesizes the canonical playlist name for a date: `"JMS dd.mm.yy"`.
///
/// This single rule is the contract with everything downstream; names are
/// compared by exact match.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use trackpack::core::playlist_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
/// assert_eq!(playlist_name(date), "JMS 03.05.24");
/// ```
pub fn playlist_name(date: NaiveDate) -> String {
    format!("{PLAYLIST_PREFIX} {}", date.format("%d.%m.%y"))
}

/// Maps a playlist name onto its canonical short form.
///
/// - `"Weekly Mix 03.05.2024"` → `"JMS 03.05.24"` (year truncated to two
///   digits, day and month zero-padded)
/// - `"JMS 03.05.24"` → itself (the short form is a fixed point)
/// - `"JMS Mix 4"` → itself
/// - anything else → itself, unchanged — names are not assumed to carry a
///   date, and malformed date substrings fall through rather than fail
///
/// # Example
///
/// ```rust
/// use trackpack::core::canonicalize;
///
/// assert_eq!(canonicalize("Weekly Mix 3.5.2024"), "JMS 03.05.24");
/// assert_eq!(canonicalize("JMS 03.05.24"), "JMS 03.05.24");
/// assert_eq!(canonicalize("Road Trip Bangers"), "Road Trip Bangers");
/// ```
pub fn canonicalize(name: &str) -> String {
    if let Some(caps) = WEEKLY_MIX_PATTERN.captures(name) {
        // 4-digit year, keep the last two digits
        let year = &caps[3];
        return format!(
            "{PLAYLIST_PREFIX} {:0>2}.{:0>2}.{}",
            &caps[1],
            &caps[2],
            &year[2..]
        );
    }

    if let Some(caps) = JMS_DATE_PATTERN.captures(name) {
        return format!("{PLAYLIST_PREFIX} {}.{}.{}", &caps[1], &caps[2], &caps[3]);
    }

    name.to_string()
}

/// Closes a set of known names under [`canonicalize`].
///
/// Every input name is kept verbatim and its canonical form is added, so a
/// later lookup by either a registry's long form or the generated short
/// form succeeds. The mapping is many-to-one; the closure is what makes
/// "absent from both registries" a single set-membership test.
pub fn close_known_names<I, S>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut closed = HashSet::new();
    for name in names {
        let name = name.as_ref();
        let canonical = canonicalize(name);
        if canonical != name {
            debug!(from = name, to = %canonical, "canonicalized known name");
            closed.insert(canonical);
        }
        closed.insert(name.to_string());
    }
    closed
}
