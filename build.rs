use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

const ENGLISH_WORD_LIST_PATH: &str = "data/english_word_list.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the word list changes
    println!("cargo:rerun-if-changed={}", ENGLISH_WORD_LIST_PATH);

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    // Open the input word list
    let mut input_file =
        File::open(ENGLISH_WORD_LIST_PATH).expect("Could not open the English word list");

    let output_file = File::create(out_dir.join("english_word_list.txt.gz"))?;

    // Compress the data with GzEncoder
    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder).expect("Failed to compress the English word list");
    encoder.finish()?;

    Ok(())
}
