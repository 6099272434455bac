use chrono::NaiveDateTime;

use crate::domain::{
    DocumentRecord, ExtractedDocument, ExtractedVideo, SourceType, Vocabulary,
    format_upload_date, make_document_id,
};

use super::keyword_extractor::extract_keywords;
use super::price_extractor::extract_price;
use super::specification_extractor::SpecificationExtractor;
use super::summary_extractor::{extract_features, extract_summary};
use super::token_matcher::first_match;

pub const FEATURE_SEPARATOR: &str = " | ";
pub const KEYWORD_SEPARATOR: &str = ", ";
pub const SPECIFICATION_SEPARATOR: &str = " | ";

/// Domain fields derived from extracted text. Empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFields {
    pub car_model: String,
    pub car_type: String,
    pub engine_type: String,
    pub price: String,
    pub features: String,
    pub keywords: String,
    pub summary: String,
    pub specifications: String,
}

pub struct MetadataDeriver {
    vocabulary: Vocabulary,
    specifications: SpecificationExtractor,
}

impl MetadataDeriver {
    pub fn new(vocabulary: Vocabulary) -> Result<Self, regex::Error> {
        let specifications = SpecificationExtractor::new(
            &vocabulary.specification_labels,
            vocabulary.field_item_limit,
        )?;
        Ok(Self {
            vocabulary,
            specifications,
        })
    }

    pub fn derive_fields(&self, text: &str) -> DerivedFields {
        let vocabulary = &self.vocabulary;

        DerivedFields {
            car_model: first_match(text, &vocabulary.car_models)
                .unwrap_or_default()
                .to_string(),
            car_type: first_match(text, &vocabulary.car_types)
                .unwrap_or_default()
                .to_string(),
            engine_type: first_match(text, &vocabulary.engine_types)
                .unwrap_or_default()
                .to_string(),
            price: extract_price(text).unwrap_or_default().to_string(),
            features: extract_features(text, vocabulary).join(FEATURE_SEPARATOR),
            keywords: extract_keywords(text, vocabulary).join(KEYWORD_SEPARATOR),
            summary: extract_summary(text, vocabulary),
            specifications: self
                .specifications
                .extract(text)
                .join(SPECIFICATION_SEPARATOR),
        }
    }

    /// `sequence` is the document's 1-based position in the run and keeps
    /// ids unique when two files share a stem.
    pub fn build_record(
        &self,
        extracted: &ExtractedDocument,
        processed_at: NaiveDateTime,
        sequence: usize,
    ) -> DocumentRecord {
        let source = &extracted.source;
        let origin = RecordOrigin {
            stem: source.file_stem(),
            file_name: source.file_name(),
            source_type: SourceType::Document,
            page_count: extracted.page_count,
            text_length: extracted.text_length(),
            uri: source.to_string(),
        };
        assemble(self.derive_fields(&extracted.text), origin, processed_at, sequence)
    }

    /// Videos carry no pages; the video id names the row and the original
    /// link fills the uri column.
    pub fn build_video_record(
        &self,
        video: &ExtractedVideo,
        processed_at: NaiveDateTime,
        sequence: usize,
    ) -> DocumentRecord {
        let text = video.full_text();
        let origin = RecordOrigin {
            stem: video.id.as_str(),
            file_name: video.id.as_str(),
            source_type: SourceType::Video,
            page_count: 0,
            text_length: text.chars().count(),
            uri: video.url.clone(),
        };
        assemble(self.derive_fields(&text), origin, processed_at, sequence)
    }
}

struct RecordOrigin<'a> {
    stem: &'a str,
    file_name: &'a str,
    source_type: SourceType,
    page_count: usize,
    text_length: usize,
    uri: String,
}

fn assemble(
    fields: DerivedFields,
    origin: RecordOrigin<'_>,
    processed_at: NaiveDateTime,
    sequence: usize,
) -> DocumentRecord {
    DocumentRecord {
        document_id: make_document_id(origin.stem, processed_at, sequence),
        source_type: origin.source_type,
        file_name: origin.file_name.to_string(),
        upload_date: format_upload_date(processed_at),
        car_model: fields.car_model,
        car_type: fields.car_type,
        engine_type: fields.engine_type,
        price: fields.price,
        page_count: origin.page_count,
        text_length: origin.text_length,
        features: fields.features,
        keywords: fields.keywords,
        summary: fields.summary,
        specifications: fields.specifications,
        gcs_uri: origin.uri,
    }
}
