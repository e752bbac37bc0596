/// Default strftime pattern for the date portion: "Tue 5 Aug 2026"
pub(crate) const DEFAULT_DATE_FORMAT: &str = "%a %e %b %Y";

/// Default strftime pattern for the time portion: "2:05:09 pm"
pub(crate) const DEFAULT_TIME_FORMAT: &str = "%l:%M:%S %P";

/// Hosts show status slots sorted by key; the "z" prefix keeps the infobar last
pub(crate) const DEFAULT_STATUS_BAR_KEY: &str = "zFileInfobar";
