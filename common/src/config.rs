use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_FILE_NAME: &str = "team.html";

pub struct Config {
    /// Directory the rendered page is written to. Created if missing.
    pub output_dir: PathBuf,
    /// File name of the rendered page inside `output_dir`.
    ///
    /// An existing file is overwritten on every render.
    pub file_name: String,
    pub no_banner: bool,
    /// Higher levels print less. Prompts are always shown.
    pub quiet: u8,
}

impl Config {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
            no_banner: false,
            quiet: 0,
        }
    }
}
