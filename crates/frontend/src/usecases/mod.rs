pub mod combine_datasets;
