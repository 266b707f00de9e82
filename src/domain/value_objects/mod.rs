mod dataset_qualifier;

pub use dataset_qualifier::DatasetQualifier;
