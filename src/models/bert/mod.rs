/// BERT for Sequence Classification (such as mental health screening)
pub mod sequence_classification;
