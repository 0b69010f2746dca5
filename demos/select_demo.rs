//! Representative Chunk Selection
//!
//! Runs the full pipeline — split, embed, cluster, select — over a small
//! document with both clustering strategies, using an offline embedder
//! so no model server is needed.
//!
//! ```bash
//! cargo run --example select_demo
//! ```
//!
//! For real embeddings, swap `BigramEmbedder` for `pith::OllamaEmbedder`
//! (needs a running Ollama server).

use pith::{ClusterCount, Embedder, Extractor, ProviderError, SplitMethod, Strategy};

/// Offline stand-in for a real embedding model: hashed letter-bigram
/// frequencies. Crude, but related sentences share bigrams, which is
/// enough structure for a demonstration.
struct BigramEmbedder;

const DIM: usize = 64;

impl Embedder for BigramEmbedder {
    fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        Ok(texts
            .iter()
            .map(|t| {
                let mut v = vec![0.0f32; DIM];
                let letters: Vec<char> = t
                    .chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                for pair in letters.windows(2) {
                    let slot = (pair[0] as usize * 31 + pair[1] as usize) % DIM;
                    v[slot] += 1.0;
                }
                v
            })
            .collect())
    }
}

fn main() -> Result<(), pith::Error> {
    println!("Representative Chunk Selection");
    println!("==============================\n");

    let document = "The solar system formed from a collapsing cloud of gas. \
        Planets accreted from the dust disk around the young sun. \
        Rocky planets formed close in, gas giants further out.\n\n\
        Sourdough starters are colonies of wild yeast. \
        Feeding a starter keeps the yeast active and ready. \
        A mature starter doubles within hours of feeding.\n\n\
        Ocean currents redistribute heat around the globe. \
        The gulf stream warms western Europe substantially. \
        Deep currents are driven by salinity and temperature.";

    println!("Document length: {} characters\n", document.len());

    // Strategy 1: centroid partition (k-means), sentence splitting
    println!("1. Centroid Partition (k-means)");
    println!("   ----------------------------");

    let extractor = Extractor::new(BigramEmbedder)
        .with_strategy(Strategy::CentroidPartition)
        .with_max_tokens_per_chunk(25)
        .with_clusters(ClusterCount::Auto);

    let result = extractor.extract(document)?;

    println!("   Representatives: {}", result.selected.len());
    for chunk in &result.selected {
        let preview: String = chunk.text.chars().take(60).collect();
        println!("   [chunk {}] \"{preview}...\"", chunk.index);
    }

    // Strategy 2: hierarchical merge (agglomerative), paragraph splitting
    println!("\n2. Hierarchical Merge (agglomerative)");
    println!("   ----------------------------------");

    let extractor = Extractor::new(BigramEmbedder)
        .with_strategy(Strategy::HierarchicalMerge)
        .with_split_method(SplitMethod::Paragraphs)
        .with_chunk_size(200)
        .with_clusters(ClusterCount::Fixed(3));

    let result = extractor.extract(document)?;

    println!("   Representatives: {}", result.selected.len());
    for chunk in &result.selected {
        let preview: String = chunk.text.chars().take(60).collect();
        println!("   [chunk {}] \"{preview}...\"", chunk.index);
    }

    if let (Some(first), Some(last)) = (&result.first, &result.last) {
        println!("\n--- Structural anchors ---");
        println!("lead:       \"{}...\"", first.text.chars().take(50).collect::<String>());
        println!("conclusion: \"{}...\"", last.text.chars().take(50).collect::<String>());
    }

    println!("\n| Strategy   | Centroids        | Representative scope |");
    println!("|------------|------------------|----------------------|");
    println!("| k-means    | algorithm output | global               |");
    println!("| hierarchic | member means     | within cluster       |");

    Ok(())
}
