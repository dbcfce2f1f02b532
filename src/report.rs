use crate::prelude::*;
use std::fmt;

/// `Name=AA[pAA],Aa[pAa],aa[paa]`, or `Name=unsolved` before solving.
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.probabilities() {
            None => write!(f, "{}=unsolved", self.name()),
            Some(probs) => {
                write!(f, "{}=", self.name())?;
                for (i, genotype) in Genotype::ALL.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}[{}]", genotype, probs[genotype.index()])?;
                }
                Ok(())
            }
        }
    }
}

/// One member line per member, in insertion order.
impl fmt::Display for FamilyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", member)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_member_lines() -> std::result::Result<(), Box<dyn Error>> {
        let mut graph = FamilyGraph::from_records(
            RecordReaderBuilder::new()
                .from_reader(Box::new("Bor[0]\nBestla[0]\nVe[0]=Bor+Bestla\nOdin[1]=Bor+Bestla\nJord[0]".as_bytes())),
        )?;
        assert_eq!(graph.member("Ve").map(|m| m.to_string()), Some("Ve=unsolved".to_string()));

        graph.solve()?;
        let expected = "Bor=AA[0],Aa[1],aa[0]\n\
                        Bestla=AA[0],Aa[1],aa[0]\n\
                        Ve=AA[0.3333333333333333],Aa[0.6666666666666666],aa[0]\n\
                        Odin=AA[0],Aa[0],aa[1]\n\
                        Jord=AA[0.5],Aa[0.5],aa[0]";
        assert_eq!(graph.to_string(), expected);
        Ok(())
    }

    #[test]
    fn test_empty_graph_renders_nothing() {
        assert_eq!(FamilyGraph::new().to_string(), "");
    }
}
