use winlm_core::model::language_model::LanguageModel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a model with a 5-character window and a fixed seed
    // (same seed + same corpus = same generated text)
    let mut model = LanguageModel::with_seed(5, 2024)?;

    // A window length of 0 is rejected at construction
    match LanguageModel::new(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Invalid window length: {}", e),
    }

    // Train from a corpus file; the whole file is read before training,
    // so a failed read leaves any previously trained state intact
    model.train_file("./data/corpus.txt")?;
    println!("Learned {} windows", model.window_count());

    // The model can be retrained in place; previous windows are discarded
    // model.train_file("./data/other_corpus.txt")?;

    // Inspection dump: every window with its characters, counts and
    // probabilities (order of windows is unspecified)
    if model.window_count() < 50 {
        print!("{}", model);
    }

    // A seed shorter than the window is returned unchanged
    println!("Short seed: {:?}", model.generate("the", 100));

    // Generate 5 continuations of 100 characters each
    for i in 0..5 {
        println!("Generated text {}: {}", i + 1, model.generate("the quick", 100));
    }

    Ok(())
}
