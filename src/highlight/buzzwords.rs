/// Lowercase keywords that mark a sentence as worth highlighting.
pub const BUZZWORDS: &[&str] = &[
    "clean", "training", "personal", "hours", "weights", "cardio",
    "price", "parking", "crowd", "locker", "sauna", "steam", "room",
    "pros", "staff", "nice", "location", "pool", "time", "weight",
    "muscle", "professional", "convenient", "fee", "goal", "member",
    "towel", "equipment", "jacuzzi", "space", "great",
];

/// Number of distinct buzzwords occurring anywhere in `sentence`, case-insensitively.
///
/// Plain substring test, no word boundaries: "trainingsession" counts
/// "training", and "weights" counts both "weights" and "weight".
/// Lowercasing is Unicode-aware `str::to_lowercase`, so `İ` becomes `i\u{307}`
/// and "TİME" does not match "time".
pub fn buzzword_count(sentence: &str) -> usize {
    let lower = sentence.to_lowercase();
    BUZZWORDS.iter().filter(|w| lower.contains(*w)).count()
}
