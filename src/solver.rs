use crate::prelude::*;
use std::collections::HashSet;

pub trait GenotypeSolver {
    /// Returns the genotype probabilities of `name`, computing and caching
    /// them (and those of its ancestors) if needed.
    fn genotype_probabilities_of(&mut self, name: &str) -> Result<Probabilities>;

    /// Computes the genotype probabilities of every member.
    fn solve(&mut self) -> Result<()>;
}

impl GenotypeSolver for FamilyGraph {
    fn genotype_probabilities_of(&mut self, name: &str) -> Result<Probabilities> {
        let id = self.id_of(name)?;
        solve_member(self, id, &mut HashSet::new())
    }

    fn solve(&mut self) -> Result<()> {
        let mut visiting = HashSet::new();
        for id in 0..self.len() {
            solve_member(self, id, &mut visiting)?;
        }
        log::info!("Solved genotype probabilities for {} members", self.len());
        Ok(())
    }
}

/// Memoized recursion from a member up to the roots of its pedigree.
///
/// `visiting` holds the members whose solve is in progress on the current
/// path; meeting one of them again means the parentage is cyclic.
fn solve_member(
    graph: &mut FamilyGraph,
    id: MemberId,
    visiting: &mut HashSet<MemberId>,
) -> Result<Probabilities> {
    if let Some(probs) = graph.member_at(id).probabilities() {
        return Ok(probs.clone());
    }

    // Power means aa. A powerless member with a power carrier for a parent
    // got an `a` from it, and one with a power carrier for a child gave one.
    let power_linked = graph
        .parent_ids(id)
        .iter()
        .chain(graph.child_ids(id).iter())
        .any(|other| graph.member_at(*other).has_power());
    if power_linked {
        return Ok(freeze(graph, id, Genotype::Heterozygous.certain()));
    }

    let parents = graph.parent_ids(id).to_vec();
    if parents.is_empty() {
        return Ok(freeze(graph, id, uninformed()));
    }
    if parents.len() != 2 {
        return Err(PedigreeError::MalformedRecord(format!(
            "'{}' has {} known parent(s), expected none or two",
            graph.member_at(id).name(),
            parents.len()
        )));
    }

    if !visiting.insert(id) {
        return Err(PedigreeError::GraphCycle(graph.member_at(id).name().to_string()));
    }
    let a = solve_member(graph, parents[0], visiting)?;
    let b = solve_member(graph, parents[1], visiting)?;
    visiting.remove(&id);

    let mut probs = combine(&a, &b);

    // Without the power the member cannot be aa.
    probs[Genotype::HomozygousRecessive.index()] = 0.0;
    let total = probs.sum();
    if !(total > 0.0) {
        return Err(PedigreeError::InvalidProbabilityState(
            graph.member_at(id).name().to_string(),
        ));
    }
    probs.mapv_inplace(|p| p / total);

    Ok(freeze(graph, id, probs))
}

/// Child genotype distribution given the independent distributions of its
/// two parents (law of total probability over the weight table).
fn combine(a: &Probabilities, b: &Probabilities) -> Probabilities {
    let mut probs = Probabilities::zeros(N_GENOTYPES);
    for ga in Genotype::ALL.iter() {
        for gb in Genotype::ALL.iter() {
            let p = a[ga.index()] * b[gb.index()];
            if p > 0.0 {
                probs.scaled_add(p, &transmission(*ga, *gb));
            }
        }
    }
    probs
}

fn freeze(graph: &mut FamilyGraph, id: MemberId, probs: Probabilities) -> Probabilities {
    let member = graph.member_at_mut(id);
    let probs = member.freeze(probs).clone();
    log::debug!(
        "{} solved: AA={} Aa={} aa={}",
        member.name(),
        probs[0],
        probs[1],
        probs[2]
    );
    probs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    type TestResult = std::result::Result<(), Box<dyn Error>>;

    fn graph(input: &'static str) -> Result<FamilyGraph> {
        FamilyGraph::from_records(RecordReaderBuilder::new().from_reader(Box::new(input.as_bytes())))
    }

    fn assert_probs(actual: &Probabilities, expected: [f64; 3]) {
        let diff: f64 = actual
            .iter()
            .zip(expected.iter())
            .map(|(a, e)| (a - e).abs())
            .sum();
        assert!(diff < 1e-6, "{:?} != {:?}", actual, expected);
    }

    #[test]
    fn test_combine_two_heterozygous_parents() {
        let aa = Genotype::Heterozygous.certain();
        assert_probs(&combine(&aa, &aa), [0.25, 0.5, 0.25]);
    }

    #[test]
    fn test_combine_matches_weight_table_for_certain_parents() {
        for ga in Genotype::ALL.iter() {
            for gb in Genotype::ALL.iter() {
                let child = combine(&ga.certain(), &gb.certain());
                assert_eq!(child, transmission(*ga, *gb).to_owned());
            }
        }
    }

    #[test]
    fn test_power_carrier_is_aa() -> TestResult {
        let mut g = graph("Bor[0]\nBestla[0]\nOdin[1]=Bor+Bestla")?;
        assert_probs(&g.genotype_probabilities_of("Odin")?, [0.0, 0.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_parent_of_power_carrier_is_heterozygous() -> TestResult {
        let mut g = graph("Bor[0]\nBestla[0]\nOdin[1]=Bor+Bestla")?;
        assert_probs(&g.genotype_probabilities_of("Bor")?, [0.0, 1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_child_of_power_carrier_is_heterozygous() -> TestResult {
        let mut g = graph("Odin[1]\nFrigg[0]\nBaldr[0]=Odin+Frigg")?;
        assert_probs(&g.genotype_probabilities_of("Baldr")?, [0.0, 1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_isolated_root_gets_uninformed_prior() -> TestResult {
        let mut g = graph("Jord[0]")?;
        assert_probs(&g.genotype_probabilities_of("Jord")?, [0.5, 0.5, 0.0]);
        Ok(())
    }

    #[test]
    fn test_child_of_two_uninformed_parents() -> TestResult {
        // AA 9/16, Aa 6/16, aa 1/16 before conditioning on no power.
        let mut g = graph("Sif[0]\nJarnsaxa[0]\nUll[0]=Sif+Jarnsaxa")?;
        assert_probs(&g.genotype_probabilities_of("Ull")?, [0.6, 0.4, 0.0]);
        Ok(())
    }

    #[test]
    fn test_solve_freezes_every_member() -> TestResult {
        let mut g = graph("Ve[0]=Bor+Bestla\nBor[0]\nBestla[0]")?;
        g.solve()?;
        assert!(g.members().all(|m| m.is_solved()));
        Ok(())
    }

    #[test]
    fn test_self_parent_is_a_cycle() -> TestResult {
        let mut g = FamilyGraph::new();
        g.add_member(Member::new("Loki", false))?;
        g.add_member(Member::new("Laufey", false))?;
        g.add_relationship("Loki", "Loki")?;
        g.add_relationship("Laufey", "Loki")?;
        assert!(matches!(g.solve(), Err(PedigreeError::GraphCycle(ref name)) if name == "Loki"));
        Ok(())
    }

    #[test]
    fn test_ancestry_cycle_is_detected() -> TestResult {
        let mut g = graph("A[0]=C+X\nB[0]=A+X\nC[0]=B+X\nX[0]")?;
        assert!(matches!(
            g.genotype_probabilities_of("A"),
            Err(PedigreeError::GraphCycle(_))
        ));
        Ok(())
    }

    #[test]
    fn test_single_known_parent_is_rejected_at_solve() -> TestResult {
        let mut g = FamilyGraph::new();
        g.add_member(Member::new("Bor", false))?;
        g.add_member(Member::new("Ve", false))?;
        g.add_relationship("Bor", "Ve")?;
        assert!(matches!(
            g.genotype_probabilities_of("Ve"),
            Err(PedigreeError::MalformedRecord(_))
        ));
        Ok(())
    }

    #[test]
    fn test_unknown_member() -> TestResult {
        let mut g = graph("Bor[0]")?;
        assert!(matches!(
            g.genotype_probabilities_of("Thor"),
            Err(PedigreeError::UnknownMember(_))
        ));
        Ok(())
    }
}
