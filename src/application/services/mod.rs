mod csv_emitter;
mod keyword_extractor;
mod metadata_deriver;
mod metadata_pipeline;
mod price_extractor;
mod specification_extractor;
mod summary_extractor;
mod token_matcher;
mod video_pipeline;

pub use csv_emitter::{
    CSV_CONTENT_TYPE, CsvEmitter, EmissionError, EmittedCsv, UTF8_BOM, decode_records,
    encode_records,
};
pub use keyword_extractor::{extract_keywords, tokenize};
pub use metadata_deriver::{
    DerivedFields, FEATURE_SEPARATOR, KEYWORD_SEPARATOR, MetadataDeriver, SPECIFICATION_SEPARATOR,
};
pub use metadata_pipeline::{
    DocumentOutcome, MetadataPipeline, PipelineError, RunError, RunSummary, batch_output_name,
    single_output_name,
};
pub use price_extractor::extract_price;
pub use specification_extractor::SpecificationExtractor;
pub use summary_extractor::{extract_features, extract_summary};
pub use token_matcher::first_match;
pub use video_pipeline::{VideoMetadataPipeline, video_output_name};
