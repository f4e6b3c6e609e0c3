use chrono::TimeDelta;

/// Point-in-time view of one managed group, recomputed on every query by
/// joining the StatefulSet with its live pods.
#[derive(Clone, Debug)]
pub struct ExperimentStatusRow {
    pub name: String,
    pub namespace: String,
    pub exp_name: String,
    pub scale: i32,
    pub running: usize,
    pub ready: i32,
    pub age: TimeDelta,
}

// kubectl-style age rendering; two most-significant units only
pub fn format_age(age: TimeDelta) -> String {
    let sec = age.num_seconds().max(0);
    match sec {
        s if s < 60 => format!("{s}s"),
        s if s < 3600 => format!("{}m{}s", s / 60, s % 60),
        s if s < 86400 => format!("{}h{}m", s / 3600, (s % 3600) / 60),
        s => format!("{}d{}h", s / 86400, (s % 86400) / 3600),
    }
}
