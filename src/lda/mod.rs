// LDA trainer — vocabulary construction and collapsed Gibbs sampling.
//
// The operator treats this module as an opaque trainer: it hands over a
// document collection and a hyperparameter set, and reads back topics as
// formatted term-weight strings.

pub mod dictionary;
pub mod model;
