#![crate_name = "pedigree"]
//! Genotype probabilities over small family graphs.
//!
//! Every member of a family either shows the power (genotype aa) or not.
//! From who shows it and who descends from whom, `GenotypeSolver` works out
//! how likely each member is to be AA, Aa or aa:
//!
//! ```
//! use pedigree::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let input = "Bor[0]\nBestla[0]\nVe[0]=Bor+Bestla\nOdin[1]=Bor+Bestla\nJord[0]";
//! let mut family = FamilyGraph::from_records(
//!     RecordReaderBuilder::new().from_reader(Box::new(input.as_bytes())),
//! )?;
//! family.solve()?;
//! assert_eq!(
//!     family.member("Odin").map(|m| m.to_string()),
//!     Some("Odin=AA[0],Aa[0],aa[1]".to_string())
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The crate also carries `expand::translate`, an unrelated bracket-notation
//! word expander.

pub mod prelude;

pub mod error;
pub mod expand;
pub mod genotype;
pub mod graph;
pub mod member;
pub mod record;
pub mod report;
pub mod solver;
