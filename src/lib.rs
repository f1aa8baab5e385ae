// Kiln: streaming LDA topic-model trainer operator.
//
// This is the library root. The `operator` module holds the dataflow
// lifecycle contract and the topic-modeling operator itself; `lda` holds
// the trainer the operator delegates to.

pub mod config;
pub mod lda;
pub mod operator;
