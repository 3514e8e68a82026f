use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random name for an in-flight object file. The file is renamed
/// over its final path once fully written.
pub fn tmp_file_name() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    format!("tmp_obj_{suffix}")
}
