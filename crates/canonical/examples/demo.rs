use canonical::{NormalizeConfig, Normalizer};

fn main() {
    let cfg = NormalizeConfig::default()
        .with_abbreviations(true)
        .with_number_words(true);
    let normalizer = Normalizer::new(&cfg).expect("valid config");

    let seq = normalizer.tokenize("Dr. Smith arrived at 7, Oct. 3rd -- late.\n");
    for token in &seq {
        println!(
            "{:>10} -> {:<10} [{}..{}] separator={:?}",
            token.text, token.key, token.start, token.end, token.separator
        );
    }
    println!("trailing: {:?}", seq.trailing);
    println!("7 = seven? {}", normalizer.equivalent("7", "seven"));
}
