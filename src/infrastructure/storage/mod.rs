mod gcs_store;
mod local_store;
mod object_ops;
mod store_factory;

pub use gcs_store::GcsDocumentStore;
pub use local_store::LocalDocumentStore;
pub use store_factory::DocumentStoreFactory;
