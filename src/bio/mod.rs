pub mod fasta;
pub mod lookup;
pub mod sequence;

pub use lookup::{SequenceIndex, SEQUENCE_SENTINEL};
pub use sequence::Sequence;
