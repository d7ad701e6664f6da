// Colored terminal rendering of an analytics bundle.
//
// Presentation only — nothing here feeds back into the engine. The
// main.rs display paths delegate here.

use colored::Colorize;

use crate::engine::AnalyticsBundle;
use crate::sentiment::SentimentLabel;

const BAR_WIDTH: usize = 24;

/// Render a full bundle: sentiment summary, topic bars, top frequencies.
pub fn display_bundle(bundle: &AnalyticsBundle) {
    println!(
        "\n{}",
        format!(
            "=== Dimension '{}' ({} documents) ===",
            bundle.dimension_id, bundle.document_count
        )
        .bold()
    );

    display_sentiment(bundle);
    display_topics(bundle);
    display_frequencies(bundle, 15);
}

fn display_sentiment(bundle: &AnalyticsBundle) {
    let s = &bundle.sentiment_summary;
    println!("\n{}", "Sentiment".bold());
    println!("  Mean polarity: {:+.3}", s.mean_polarity);
    println!(
        "  {}  {}  {}",
        format!("positive {:>5.1}%", s.positive_pct).bright_green(),
        format!("neutral {:>5.1}%", s.neutral_pct).dimmed(),
        format!("negative {:>5.1}%", s.negative_pct).bright_red(),
    );
}

fn display_topics(bundle: &AnalyticsBundle) {
    if bundle.topics.is_empty() {
        return;
    }
    println!("\n{}", "Topics".bold());

    // Share of the corpus per topic: mean of the doc-topic column.
    let n_docs = bundle.doc_topics.len().max(1) as f64;
    for topic in &bundle.topics {
        let share: f64 = bundle
            .doc_topics
            .iter()
            .map(|row| row[topic.id])
            .sum::<f64>()
            / n_docs;

        let filled = (share * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled.min(BAR_WIDTH)),
            " ".repeat(BAR_WIDTH.saturating_sub(filled))
        );
        let colored_bar = if share >= 0.3 {
            bar.bright_green()
        } else if share >= 0.15 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!("  {} {} {:.2}", colored_bar, topic.label.bold(), share);
        let words: Vec<String> = topic
            .top_words
            .iter()
            .map(|(w, _)| w.clone())
            .collect();
        println!("      {}", words.join(", ").dimmed());
    }
}

fn display_frequencies(bundle: &AnalyticsBundle, limit: usize) {
    println!("\n{}", "Top words".bold());
    for row in bundle.frequencies.iter().take(limit) {
        println!("  {:>6}  {}", row.count, row.word);
    }
}

/// Color a sentiment label the way the report tables do.
pub fn colorize_label(label: SentimentLabel) -> colored::ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().bright_green(),
        SentimentLabel::Neutral => label.as_str().dimmed(),
        SentimentLabel::Negative => label.as_str().bright_red(),
    }
}
