mod configuration_error;
mod settings;
mod vocabulary_file;

pub use configuration_error::ConfigurationError;
pub use settings::{
    DEFAULT_LOCAL_OUTPUT_DIR, DEFAULT_LOCATION, DEFAULT_OUTPUT_PATH, DEFAULT_TRANSCRIPT_LANGUAGES,
    DocumentAiSettings, InputSettings, OutputSettings, RawSettings, Settings, StorageProvider,
    StorageSettings, VideoSettings,
};
pub use vocabulary_file::load_vocabulary;
