//! Derived performance numbers shown next to players and queues.

/// KDA ratio `(kills + assists) / deaths`.
///
/// A deathless game yields `kills + assists` rather than infinity.
///
/// # Examples
///
/// ```rust
/// use riftstats::data_fetcher::processors::calculate_kda;
///
/// assert_eq!(calculate_kda(5, 0, 3), 8.0);
/// assert_eq!(calculate_kda(4, 2, 6), 5.0);
/// ```
pub fn calculate_kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    let takedowns = f64::from(kills) + f64::from(assists);
    if deaths == 0 {
        takedowns
    } else {
        takedowns / f64::from(deaths)
    }
}

/// KDA with two decimals, e.g. `"8.00"`.
pub fn format_kda(kills: u32, deaths: u32, assists: u32) -> String {
    format!("{:.2}", calculate_kda(kills, deaths, assists))
}

/// Win rate as a rounded whole percentage, `"0%"` when no games were played.
///
/// # Examples
///
/// ```rust
/// use riftstats::data_fetcher::processors::format_win_rate;
///
/// assert_eq!(format_win_rate(3, 1), "75%");
/// assert_eq!(format_win_rate(0, 0), "0%");
/// ```
pub fn format_win_rate(wins: u32, losses: u32) -> String {
    let total = u64::from(wins) + u64::from(losses);
    if total == 0 {
        return "0%".to_string();
    }
    let percent = (wins as f64 * 100.0 / total as f64).round();
    format!("{percent:.0}%")
}
