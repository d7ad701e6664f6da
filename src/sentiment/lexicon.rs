// Sentiment lexicon: word -> base valence, roughly in [-4, +4].
//
// A trimmed general-purpose lexicon in the VADER value range. Values are
// averages of human polarity ratings in the original research; the subset
// here covers the vocabulary that actually shows up in tech/business prose
// plus the core emotional words.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

pub static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // Strong positive
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("best", 3.2),
        ("breakthrough", 2.6),
        ("brilliant", 2.8),
        ("delighted", 2.3),
        ("excellent", 2.7),
        ("exceptional", 2.6),
        ("extraordinary", 2.7),
        ("fantastic", 2.6),
        ("flawless", 2.7),
        ("incredible", 2.6),
        ("love", 3.2),
        ("magnificent", 2.9),
        ("marvelous", 2.8),
        ("outstanding", 3.0),
        ("perfect", 2.7),
        ("remarkable", 2.4),
        ("spectacular", 2.7),
        ("superb", 3.0),
        ("thrilled", 2.6),
        ("wonderful", 2.7),
        // Moderate positive
        ("accomplished", 1.9),
        ("achievement", 2.0),
        ("advantage", 1.7),
        ("beneficial", 1.9),
        ("benefit", 1.7),
        ("better", 1.9),
        ("capable", 1.5),
        ("comfortable", 1.6),
        ("confident", 2.2),
        ("effective", 1.8),
        ("efficient", 1.8),
        ("encouraging", 1.9),
        ("engaging", 1.6),
        ("enjoy", 2.0),
        ("enthusiastic", 2.2),
        ("exciting", 2.2),
        ("gain", 1.4),
        ("good", 1.9),
        ("great", 3.1),
        ("happy", 2.7),
        ("helpful", 1.8),
        ("hope", 1.9),
        ("immersive", 1.4),
        ("impressive", 2.2),
        ("improve", 1.9),
        ("improved", 1.9),
        ("improvement", 1.8),
        ("innovative", 1.9),
        ("inspiring", 2.1),
        ("like", 1.5),
        ("mature", 1.2),
        ("nice", 1.8),
        ("opportunity", 1.5),
        ("optimistic", 1.9),
        ("pleasant", 1.8),
        ("pleased", 1.9),
        ("positive", 2.0),
        ("progress", 1.6),
        ("promising", 1.8),
        ("reliable", 1.8),
        ("robust", 1.5),
        ("satisfied", 1.7),
        ("seamless", 1.6),
        ("smooth", 1.4),
        ("strong", 1.5),
        ("succeed", 2.0),
        ("success", 2.1),
        ("successful", 2.2),
        ("useful", 1.7),
        ("valuable", 1.9),
        ("win", 2.4),
        // Mild positive
        ("adequate", 0.7),
        ("fine", 0.8),
        ("okay", 0.9),
        ("stable", 1.0),
        ("steady", 0.9),
        // Mild negative
        ("concern", -1.1),
        ("doubt", -1.2),
        ("issue", -1.1),
        ("lacking", -1.3),
        ("limited", -0.9),
        ("slow", -1.0),
        ("uncertain", -1.2),
        ("unclear", -1.0),
        // Moderate negative
        ("bad", -2.5),
        ("barrier", -1.4),
        ("breaks", -1.5),
        ("broken", -1.8),
        ("costly", -1.3),
        ("damage", -1.9),
        ("difficult", -1.5),
        ("disappointed", -2.1),
        ("disappointing", -2.1),
        ("dislike", -1.6),
        ("expensive", -1.1),
        ("fail", -2.3),
        ("failed", -2.3),
        ("failure", -2.4),
        ("fear", -2.0),
        ("flawed", -1.9),
        ("fragmented", -1.3),
        ("frustrated", -2.0),
        ("frustrating", -2.0),
        ("hard", -1.2),
        ("hurt", -1.9),
        ("inadequate", -1.7),
        ("incompatible", -1.4),
        ("insufficient", -1.5),
        ("lose", -1.8),
        ("loss", -1.7),
        ("lost", -1.6),
        ("negative", -1.9),
        ("obstacle", -1.4),
        ("poor", -2.1),
        ("problem", -1.6),
        ("reject", -1.7),
        ("risk", -1.3),
        ("sad", -2.1),
        ("struggle", -1.7),
        ("struggling", -1.7),
        ("unhappy", -1.9),
        ("unreliable", -1.8),
        ("unstable", -1.5),
        ("upset", -1.9),
        ("weak", -1.6),
        ("worse", -2.1),
        ("wrong", -1.7),
        // Strong negative
        ("angry", -2.4),
        ("awful", -2.7),
        ("catastrophe", -3.2),
        ("crisis", -2.4),
        ("disaster", -3.1),
        ("dreadful", -2.8),
        ("hate", -2.7),
        ("horrible", -2.7),
        ("terrible", -2.5),
        ("useless", -2.2),
        ("worst", -3.1),
    ]
    .into_iter()
    .collect()
});

/// Words that flip and dampen the valence of what follows.
pub static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "without", "cannot",
        "cant", "wont", "isnt", "arent", "doesnt", "dont", "didnt", "wasnt", "werent", "hardly",
        "rarely", "seldom",
    ]
    .into_iter()
    .collect()
});

/// Degree adverbs that boost the next sentiment-bearing word.
pub static BOOSTERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "absolutely",
        "completely",
        "considerably",
        "decidedly",
        "deeply",
        "enormously",
        "entirely",
        "especially",
        "exceptionally",
        "extremely",
        "greatly",
        "highly",
        "hugely",
        "incredibly",
        "intensely",
        "majorly",
        "particularly",
        "purely",
        "really",
        "remarkably",
        "so",
        "substantially",
        "thoroughly",
        "totally",
        "tremendously",
        "truly",
        "utterly",
        "very",
    ]
    .into_iter()
    .collect()
});

/// Degree adverbs that dampen the next sentiment-bearing word.
pub static DAMPENERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "almost",
        "barely",
        "kinda",
        "kindof",
        "marginally",
        "occasionally",
        "partly",
        "scarcely",
        "slightly",
        "somewhat",
        "sortof",
    ]
    .into_iter()
    .collect()
});

pub fn valence(word: &str) -> Option<f64> {
    LEXICON.get(word).copied()
}
