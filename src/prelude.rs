pub use crate::error::{PedigreeError, Result};
pub use crate::expand::translate;
pub use crate::genotype::{transmission, uninformed, Genotype, Probabilities, N_GENOTYPES, WEIGHTS};
pub use crate::graph::FamilyGraph;
pub use crate::member::{GenotypeState, Member, MemberId};
pub use crate::record::{Record, RecordReader, RecordReaderBuilder};
pub use crate::solver::GenotypeSolver;
